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

//! Fixed-interval polling against the request-status endpoint (and, for
//! a few commands, a resource state field). Mutations return 202 plus a
//! tracking request; `--wait-for-request` blocks until that request is
//! DONE, FAILED, or the `--timeout` deadline passes.

use std::future::Future;
use std::time::Duration;

use clap::Args as ClapArgs;
use ionoscloud::RequestRef;
use ionoscloud::cli::{IonosCliError, IonosCliResult};
use ionoscloud::models::request::status;
use tokio::time::{Instant, sleep};

use crate::rest::ApiClient;

pub const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Shared flags for commands that issue mutations.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct WaitArgs {
    #[clap(short, long, help = "Wait for the request to complete before returning.")]
    pub wait_for_request: bool,

    #[clap(
        short,
        long,
        default_value_t = 60,
        value_name = "SECONDS",
        help = "Give up waiting after this many seconds."
    )]
    pub timeout: u64,
}

impl WaitArgs {
    /// Wait on the tracking request of a completed mutation, if waiting
    /// was asked for.
    pub async fn track(
        &self,
        api_client: &ApiClient,
        request: Option<&RequestRef>,
    ) -> IonosCliResult<()> {
        if !self.wait_for_request {
            return Ok(());
        }
        match request {
            Some(request) => wait_for_request(api_client, &request.href, self.timeout).await,
            None => {
                tracing::warn!("response carried no request to wait on");
                Ok(())
            }
        }
    }
}

pub async fn wait_for_request(
    api_client: &ApiClient,
    href: &str,
    timeout_secs: u64,
) -> IonosCliResult<()> {
    poll_request(
        api_client,
        href,
        Duration::from_secs(timeout_secs),
        POLL_INTERVAL,
    )
    .await
}

async fn poll_request(
    api_client: &ApiClient,
    href: &str,
    timeout: Duration,
    interval: Duration,
) -> IonosCliResult<()> {
    let deadline = Instant::now() + timeout;
    let request_ref = RequestRef::new(href);
    let request_id = request_ref.id().unwrap_or(href).to_string();

    loop {
        let request_status = api_client.0.get_request_status_by_href(href).await?;
        match request_status.state() {
            Some(status::DONE) => return Ok(()),
            Some(status::FAILED) => {
                return Err(IonosCliError::RequestFailed {
                    id: request_id,
                    message: request_status.message().unwrap_or_default().to_string(),
                });
            }
            state => {
                tracing::debug!(
                    request = %request_id,
                    state = state.unwrap_or("UNKNOWN"),
                    "request still pending"
                );
            }
        }

        if Instant::now() + interval > deadline {
            return Err(IonosCliError::WaitTimeout(timeout.as_secs()));
        }
        sleep(interval).await;
    }
}

/// Poll until `probe` reports the wanted state. Used by the server
/// power commands, where the interesting signal is `vmState` rather
/// than the request lifecycle.
pub async fn wait_for_state<F, Fut>(probe: F, target: &str, timeout_secs: u64) -> IonosCliResult<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = IonosCliResult<Option<String>>>,
{
    poll_state(
        probe,
        target,
        Duration::from_secs(timeout_secs),
        POLL_INTERVAL,
    )
    .await
}

async fn poll_state<F, Fut>(
    mut probe: F,
    target: &str,
    timeout: Duration,
    interval: Duration,
) -> IonosCliResult<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = IonosCliResult<Option<String>>>,
{
    let deadline = Instant::now() + timeout;
    loop {
        let state = probe().await?;
        if let Some(state) = &state
            && state.eq_ignore_ascii_case(target)
        {
            return Ok(());
        }
        tracing::debug!(
            state = state.as_deref().unwrap_or("UNKNOWN"),
            target,
            "state not reached yet"
        );

        if Instant::now() + interval > deadline {
            return Err(IonosCliError::WaitTimeout(timeout.as_secs()));
        }
        sleep(interval).await;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use httpmock::prelude::*;
    use ionoscloud::{ClientConfig, Credentials, IonosApiClient};
    use serde_json::json;
    use url::Url;

    use super::*;

    fn client_for(server: &MockServer) -> ApiClient {
        let config = ClientConfig {
            api_url: Url::parse(&server.base_url()).expect("mock url"),
            credentials: Credentials::None,
            timeout: Duration::from_secs(5),
        };
        ApiClient(IonosApiClient::new(config).expect("client"))
    }

    #[tokio::test]
    async fn done_request_finishes_immediately() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/requests/req-1/status");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!({"id": "req-1", "metadata": {"status": "DONE"}}));
            })
            .await;

        let api_client = client_for(&server);
        poll_request(
            &api_client,
            "/requests/req-1/status",
            Duration::from_secs(1),
            Duration::from_millis(10),
        )
        .await
        .expect("done request");
    }

    #[tokio::test]
    async fn failed_request_reports_id_and_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/requests/req-2/status");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!({
                        "id": "req-2",
                        "metadata": {"status": "FAILED", "message": "quota exceeded"}
                    }));
            })
            .await;

        let api_client = client_for(&server);
        let err = poll_request(
            &api_client,
            "/requests/req-2/status",
            Duration::from_secs(1),
            Duration::from_millis(10),
        )
        .await
        .expect_err("failed request");

        let text = err.to_string();
        assert!(text.contains("req-2"));
        assert!(text.contains("quota exceeded"));
    }

    #[tokio::test]
    async fn pending_request_times_out() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/requests/req-3/status");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!({"id": "req-3", "metadata": {"status": "QUEUED"}}));
            })
            .await;

        let api_client = client_for(&server);
        let err = poll_request(
            &api_client,
            "/requests/req-3/status",
            Duration::from_millis(50),
            Duration::from_millis(10),
        )
        .await
        .expect_err("still queued");

        assert!(matches!(err, IonosCliError::WaitTimeout(_)));
        // polled more than once before giving up
        assert!(mock.hits_async().await > 1);
    }

    #[tokio::test]
    async fn state_poll_finishes_once_target_is_reached() {
        let mut calls = 0;
        let probe = || {
            calls += 1;
            let state = if calls < 3 { "BUSY" } else { "AVAILABLE" };
            async move { Ok(Some(state.to_string())) }
        };

        poll_state(
            probe,
            "AVAILABLE",
            Duration::from_secs(1),
            Duration::from_millis(5),
        )
        .await
        .expect("reaches target");
    }

    #[tokio::test]
    async fn state_poll_times_out_when_never_reached() {
        let probe = || async { Ok(Some("BUSY".to_string())) };
        let err = poll_state(
            probe,
            "AVAILABLE",
            Duration::from_millis(30),
            Duration::from_millis(10),
        )
        .await
        .expect_err("never reaches target");
        assert!(matches!(err, IonosCliError::WaitTimeout(_)));
    }
}
