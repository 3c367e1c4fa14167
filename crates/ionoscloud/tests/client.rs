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

use std::time::Duration;

use httpmock::prelude::*;
use serde_json::json;
use url::Url;

use ionoscloud::models::compute::DatacenterProperties;
use ionoscloud::{ApiError, ClientConfig, Credentials, IonosApiClient, ListParams};

fn client_for(server: &MockServer) -> IonosApiClient {
    let config = ClientConfig {
        api_url: Url::parse(&server.base_url()).expect("mock server url"),
        credentials: Credentials::Basic {
            username: "user@example.com".to_string(),
            password: "secret".to_string(),
        },
        timeout: Duration::from_secs(5),
    };
    IonosApiClient::new(config).expect("client")
}

#[tokio::test]
async fn list_datacenters_sends_query_params_and_decodes_items() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/datacenters")
                .query_param("depth", "1")
                .query_param("filter.name", "backend")
                .query_param("orderBy", "name")
                .query_param("maxResults", "5");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "id": "datacenters",
                    "type": "collection",
                    "items": [
                        {
                            "id": "aaaa-1111",
                            "type": "datacenter",
                            "metadata": {"state": "AVAILABLE"},
                            "properties": {"name": "backend", "location": "us/las", "version": 7}
                        }
                    ]
                }));
        })
        .await;

    let client = client_for(&server);
    let params = ListParams::depth(1)
        .with_filter("name", "backend")
        .with_order_by("name")
        .with_max_results(5);
    let datacenters = client.list_datacenters(&params).await.expect("list");

    mock.assert_async().await;
    assert_eq!(datacenters.items().len(), 1);
    let datacenter = &datacenters.items()[0];
    assert_eq!(datacenter.id.as_deref(), Some("aaaa-1111"));
    let properties = datacenter.properties.as_ref().expect("properties");
    assert_eq!(properties.name.as_deref(), Some("backend"));
    assert_eq!(properties.version, Some(7));
}

#[tokio::test]
async fn create_datacenter_captures_request_location() {
    let server = MockServer::start_async().await;
    let location = format!(
        "{}/requests/11112222-3333-4444-5555-666677778888/status",
        server.base_url()
    );
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/datacenters")
                .json_body(json!({"properties": {"name": "staging", "location": "de/txl"}}));
            then.status(202)
                .header("content-type", "application/json")
                .header("location", location.as_str())
                .json_body(json!({
                    "id": "bbbb-2222",
                    "type": "datacenter",
                    "properties": {"name": "staging", "location": "de/txl"}
                }));
        })
        .await;

    let client = client_for(&server);
    let properties = DatacenterProperties {
        name: Some("staging".to_string()),
        location: Some("de/txl".to_string()),
        ..Default::default()
    };
    let created = client.create_datacenter(properties).await.expect("create");

    mock.assert_async().await;
    assert_eq!(created.value.id.as_deref(), Some("bbbb-2222"));
    let request = created.request.expect("location header");
    assert_eq!(request.id(), Some("11112222-3333-4444-5555-666677778888"));
}

#[tokio::test]
async fn delete_returns_tracking_request() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/datacenters/cccc-3333");
            then.status(202)
                .header("location", "/requests/req-1/status");
        })
        .await;

    let client = client_for(&server);
    let request = client
        .delete_datacenter("cccc-3333")
        .await
        .expect("delete")
        .expect("tracking request");
    assert_eq!(request.id(), Some("req-1"));
}

#[tokio::test]
async fn api_errors_are_decoded() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/datacenters/missing");
            then.status(404)
                .header("content-type", "application/json")
                .json_body(json!({
                    "httpStatus": 404,
                    "messages": [{"errorCode": "309", "message": "Resource does not exist"}]
                }));
        })
        .await;

    let client = client_for(&server);
    let err = client
        .get_datacenter("missing", &ListParams::default())
        .await
        .expect_err("404");
    match err {
        ApiError::Api { status, message } => {
            assert_eq!(status, 404);
            assert!(message.contains("Resource does not exist"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn server_actions_post_empty_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/datacenters/dc-1/servers/srv-1/reboot");
            then.status(202)
                .header("location", "/requests/req-reboot/status");
        })
        .await;

    let client = client_for(&server);
    let request = client
        .reboot_server("dc-1", "srv-1")
        .await
        .expect("reboot")
        .expect("tracking request");

    mock.assert_async().await;
    assert_eq!(request.id(), Some("req-reboot"));
}

#[tokio::test]
async fn request_status_follows_location_href() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/requests/req-7/status");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "id": "req-7",
                    "metadata": {"status": "DONE", "message": "Request has been processed"}
                }));
        })
        .await;

    let client = client_for(&server);
    let absolute = format!("{}/requests/req-7/status", server.base_url());
    let status = client
        .get_request_status_by_href(&absolute)
        .await
        .expect("status");
    assert_eq!(status.state(), Some("DONE"));

    let relative = client
        .get_request_status_by_href("/requests/req-7/status")
        .await
        .expect("status via relative href");
    assert_eq!(relative.message(), Some("Request has been processed"));
}
