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
    let datacenter_id = args.datacenter_id.to_string();
    if args.all {
        return delete_all(args, ctx).await;
    }
    let Some(server_id) = args.server_id else {
        return Err(IonosCliError::GenericError(
            "either --server-id or --all is required".to_string(),
        ));
    };
    let server_id = server_id.to_string();

    confirm::confirm(&format!("delete server {server_id}"), ctx.config.force)?;
    let request = ctx
        .api_client
        .0
        .delete_server(&datacenter_id, &server_id)
        .await?;
    args.wait.track(&ctx.api_client, request.as_ref()).await?;

    if !ctx.config.quiet {
        async_writeln!(ctx.output_file, "Server {server_id} deleted")?;
    }
    Ok(())
}

async fn delete_all(args: Args, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
    let datacenter_id = args.datacenter_id.to_string();
    let servers = ctx
        .api_client
        .0
        .list_servers(&datacenter_id, &ListParams::depth(1))
        .await?;
    let items = servers.items();
    if items.is_empty() {
        if !ctx.config.quiet {
            async_writeln!(ctx.output_file, "No servers to delete")?;
        }
        return Ok(());
    }

    confirm::confirm(
        &format!(
            "delete all {} servers of datacenter {datacenter_id}",
            items.len()
        ),
        ctx.config.force,
    )?;

    let mut failures = BulkError::default();
    for server in items {
        let Some(id) = server.id.as_deref() else {
            continue;
        };
        match ctx.api_client.0.delete_server(&datacenter_id, id).await {
            Ok(request) => {
                if let Err(err) = args.wait.track(&ctx.api_client, request.as_ref()).await {
                    failures.push(id, err);
                    continue;
                }
                if !ctx.config.quiet {
                    async_writeln!(ctx.output_file, "Server {id} deleted")?;
                }
            }
            Err(err) => failures.push(id, err),
        }
    }
    failures.into_result()
}
