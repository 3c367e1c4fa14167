/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 IONOS Cloud SE. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 * http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! The HTTP client proper. Per-resource methods live in the sibling
//! modules; this one holds connection setup, query-parameter handling,
//! and the request/response plumbing they all go through.

mod compute;
mod images;
mod network;
mod requests;
mod um;

use std::time::Duration;

use reqwest::header::LOCATION;
use reqwest::{RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::ApiError;

/// How the client authenticates against the API.
#[derive(Debug, Clone)]
pub enum Credentials {
    /// JWT bearer token.
    Token(String),
    /// HTTP basic auth.
    Basic { username: String, password: String },
    /// No credentials configured. Calls will be rejected by the API;
    /// kept so commands that never talk to the API still work.
    None,
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: Url,
    pub credentials: Credentials,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_url: Url, credentials: Credentials) -> Self {
        Self {
            api_url,
            credentials,
            timeout: Duration::from_secs(60),
        }
    }
}

#[derive(Debug, Clone)]
pub struct IonosApiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

/// Query parameters accepted by collection (and some single-object)
/// GET endpoints.
#[derive(Debug, Default, Clone)]
pub struct ListParams {
    depth: Option<u32>,
    filters: Vec<(String, String)>,
    order_by: Option<String>,
    max_results: Option<u32>,
}

impl ListParams {
    pub fn depth(depth: u32) -> Self {
        Self::default().with_depth(depth)
    }

    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((key.into(), value.into()));
        self
    }

    pub fn with_order_by(mut self, key: impl Into<String>) -> Self {
        self.order_by = Some(key.into());
        self
    }

    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Flatten into wire-format query pairs; filters become `filter.<key>`.
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(depth) = self.depth {
            pairs.push(("depth".to_string(), depth.to_string()));
        }
        for (key, value) in &self.filters {
            pairs.push((format!("filter.{key}"), value.clone()));
        }
        if let Some(order_by) = &self.order_by {
            pairs.push(("orderBy".to_string(), order_by.clone()));
        }
        if let Some(max_results) = self.max_results {
            pairs.push(("maxResults".to_string(), max_results.to_string()));
        }
        pairs
    }
}

/// Handle on the asynchronous request tracking a mutation, taken from
/// the `Location` header of a 202 response.
#[derive(Debug, Clone)]
pub struct RequestRef {
    pub href: String,
}

impl RequestRef {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }

    fn from_response(response: &Response) -> Option<Self> {
        response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(RequestRef::new)
    }

    /// The request UUID, parsed out of `.../requests/{id}/status`.
    pub fn id(&self) -> Option<&str> {
        let mut segments: Vec<&str> = self
            .href
            .trim_end_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();
        if segments.last() == Some(&"status") {
            segments.pop();
        }
        segments.last().copied()
    }
}

/// A decoded mutation response together with the request tracking it.
#[derive(Debug, Clone)]
pub struct Accepted<T> {
    pub value: T,
    pub request: Option<RequestRef>,
}

impl IonosApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, config })
    }

    pub fn api_url(&self) -> &Url {
        &self.config.api_url
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        let base = self.config.api_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{path}"))?)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.credentials {
            Credentials::Token(token) => request.bearer_auth(token),
            Credentials::Basic { username, password } => {
                request.basic_auth(username, Some(password))
            }
            Credentials::None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = self.authorize(request).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), "api call failed");
        Err(ApiError::from_response(status.as_u16(), &body))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &ListParams,
    ) -> Result<T, ApiError> {
        let request = self.http.get(self.url(path)?).query(&params.pairs());
        let response = self.send(request).await?;
        Ok(response.json().await?)
    }

    /// GET against an href handed back by the API itself, e.g. the
    /// `Location` of a 202 response. Absolute URLs are used as-is.
    pub(crate) async fn get_json_href<T: DeserializeOwned>(
        &self,
        href: &str,
    ) -> Result<T, ApiError> {
        let url = if href.starts_with("http://") || href.starts_with("https://") {
            Url::parse(href)?
        } else {
            self.url(href)?
        };
        let response = self.send(self.http.get(url)).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Accepted<T>, ApiError> {
        let request = self.http.post(self.url(path)?).json(body);
        let response = self.send(request).await?;
        let tracking = RequestRef::from_response(&response);
        Ok(Accepted {
            value: response.json().await?,
            request: tracking,
        })
    }

    pub(crate) async fn patch_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Accepted<T>, ApiError> {
        let request = self.http.patch(self.url(path)?).json(body);
        let response = self.send(request).await?;
        let tracking = RequestRef::from_response(&response);
        Ok(Accepted {
            value: response.json().await?,
            request: tracking,
        })
    }

    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Accepted<T>, ApiError> {
        let request = self.http.put(self.url(path)?).json(body);
        let response = self.send(request).await?;
        let tracking = RequestRef::from_response(&response);
        Ok(Accepted {
            value: response.json().await?,
            request: tracking,
        })
    }

    /// DELETE; the interesting part of the response is the `Location`
    /// header, the body (if any) is discarded.
    pub(crate) async fn delete(&self, path: &str) -> Result<Option<RequestRef>, ApiError> {
        let response = self.send(self.http.delete(self.url(path)?)).await?;
        Ok(RequestRef::from_response(&response))
    }

    /// POST with an empty body, for action endpoints such as
    /// `/servers/{id}/reboot`.
    pub(crate) async fn post_action(&self, path: &str) -> Result<Option<RequestRef>, ApiError> {
        let request = self
            .http
            .post(self.url(path)?)
            .header(reqwest::header::CONTENT_LENGTH, 0);
        let response = self.send(request).await?;
        Ok(RequestRef::from_response(&response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_params_flatten_in_order() {
        let params = ListParams::depth(2)
            .with_filter("name", "backend")
            .with_filter("location", "us/las")
            .with_order_by("name")
            .with_max_results(10);

        assert_eq!(
            params.pairs(),
            vec![
                ("depth".to_string(), "2".to_string()),
                ("filter.name".to_string(), "backend".to_string()),
                ("filter.location".to_string(), "us/las".to_string()),
                ("orderBy".to_string(), "name".to_string()),
                ("maxResults".to_string(), "10".to_string()),
            ]
        );
    }

    #[test]
    fn empty_params_produce_no_pairs() {
        assert!(ListParams::default().pairs().is_empty());
    }

    #[test]
    fn request_ref_extracts_id_from_status_href() {
        let href = "https://api.ionos.com/cloudapi/v6/requests/3f7e8c9a-0000-1111-2222-333344445555/status";
        let request = RequestRef::new(href);
        assert_eq!(
            request.id(),
            Some("3f7e8c9a-0000-1111-2222-333344445555")
        );
    }

    #[test]
    fn request_ref_handles_bare_request_href() {
        let request = RequestRef::new("/requests/abc123");
        assert_eq!(request.id(), Some("abc123"));
    }
}
