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

use ionoscloud::ListParams;
use ionoscloud::cli::{BulkError, IonosCliError, IonosCliResult};

use super::args::Args;
use crate::cfg::runtime::RuntimeContext;
use crate::{async_writeln, confirm};

pub async fn delete(args: Args, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
    if args.all {
        return delete_all(args, ctx).await;
    }
    let Some(id) = args.datacenter_id else {
        return Err(IonosCliError::GenericError(
            "either --datacenter-id or --all is required".to_string(),
        ));
    };
    let id = id.to_string();

    confirm::confirm(&format!("delete datacenter {id}"), ctx.config.force)?;
    let request = ctx.api_client.0.delete_datacenter(&id).await?;
    args.wait.track(&ctx.api_client, request.as_ref()).await?;

    if !ctx.config.quiet {
        async_writeln!(ctx.output_file, "Datacenter {id} deleted")?;
    }
    Ok(())
}

// Keep going after per-item failures and report them all at the end,
// each referencing the datacenter that failed.
async fn delete_all(args: Args, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
    let datacenters = ctx
        .api_client
        .0
        .list_datacenters(&ListParams::depth(1))
        .await?;
    let items = datacenters.items();
    if items.is_empty() {
        if !ctx.config.quiet {
            async_writeln!(ctx.output_file, "No datacenters to delete")?;
        }
        return Ok(());
    }

    confirm::confirm(
        &format!("delete all {} datacenters", items.len()),
        ctx.config.force,
    )?;

    let mut failures = BulkError::default();
    for datacenter in items {
        let Some(id) = datacenter.id.as_deref() else {
            continue;
        };
        match ctx.api_client.0.delete_datacenter(id).await {
            Ok(request) => {
                if let Err(err) = args.wait.track(&ctx.api_client, request.as_ref()).await {
                    failures.push(id, err);
                    continue;
                }
                if !ctx.config.quiet {
                    async_writeln!(ctx.output_file, "Datacenter {id} deleted")?;
                }
            }
            Err(err) => failures.push(id, err),
        }
    }
    failures.into_result()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use httpmock::prelude::*;
    use ionoscloud::cli::{IonosCliError, OutputFormat};
    use ionoscloud::{ClientConfig, Credentials, IonosApiClient};
    use serde_json::json;
    use url::Url;

    use super::*;
    use crate::cfg::runtime::OutputConfig;
    use crate::rest::ApiClient;
    use crate::wait::WaitArgs;

    fn context_for(server: &MockServer) -> RuntimeContext {
        let config = ClientConfig {
            api_url: Url::parse(&server.base_url()).expect("mock url"),
            credentials: Credentials::None,
            timeout: Duration::from_secs(5),
        };
        RuntimeContext {
            api_client: ApiClient(IonosApiClient::new(config).expect("client")),
            output_file: Box::pin(tokio::io::sink()),
            config: OutputConfig {
                format: OutputFormat::AsciiTable,
                cols: None,
                quiet: true,
                force: true,
                depth: 1,
            },
        }
    }

    // One item failing must not stop the batch: the other datacenter
    // still gets deleted, and the aggregate error names the bad one.
    #[tokio::test]
    async fn delete_all_keeps_going_and_reports_failures() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/datacenters");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!({
                        "id": "datacenters",
                        "items": [{"id": "dc-ok"}, {"id": "dc-bad"}]
                    }));
            })
            .await;
        let delete_ok = server
            .mock_async(|when, then| {
                when.method(DELETE).path("/datacenters/dc-ok");
                then.status(202).header("location", "/requests/req-1/status");
            })
            .await;
        let delete_bad = server
            .mock_async(|when, then| {
                when.method(DELETE).path("/datacenters/dc-bad");
                then.status(500)
                    .header("content-type", "application/json")
                    .json_body(json!({"messages": [{"message": "backend exploded"}]}));
            })
            .await;

        let mut ctx = context_for(&server);
        let args = Args {
            datacenter_id: None,
            all: true,
            wait: WaitArgs::default(),
        };

        let err = delete(args, &mut ctx).await.expect_err("one item failed");
        delete_ok.assert_async().await;
        delete_bad.assert_async().await;

        match err {
            IonosCliError::Bulk(bulk) => {
                assert_eq!(bulk.len(), 1);
                let text = bulk.to_string();
                assert!(text.contains("dc-bad"));
                assert!(text.contains("backend exploded"));
            }
            other => panic!("expected aggregate error, got {other}"),
        }
    }

    // An empty collection is not an error.
    #[tokio::test]
    async fn delete_all_with_nothing_to_delete_is_ok() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/datacenters");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!({"id": "datacenters", "items": []}));
            })
            .await;

        let mut ctx = context_for(&server);
        let args = Args {
            datacenter_id: None,
            all: true,
            wait: WaitArgs::default(),
        };
        delete(args, &mut ctx).await.expect("nothing to delete");
    }
}
