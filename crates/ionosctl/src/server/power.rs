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

//! Server power actions. Next to the usual request tracking these can
//! also wait on the VM state itself (-W), which flips to RUNNING or
//! SHUTOFF some time after the request is DONE.

use clap::Parser;
use ionoscloud::ListParams;
use ionoscloud::cli::IonosCliResult;
use uuid::Uuid;

use crate::cfg::run::Run;
use crate::cfg::runtime::RuntimeContext;
use crate::rest::ApiClient;
use crate::wait::WaitArgs;
use crate::{async_writeln, wait};

#[derive(Parser, Debug)]
pub struct StartArgs {
    #[clap(
        short = 'i',
        long,
        value_name = "DATACENTER_ID",
        help = "The unique ID of the datacenter."
    )]
    pub datacenter_id: Uuid,

    #[clap(short, long, value_name = "SERVER_ID", help = "The unique ID of the server.")]
    pub server_id: Uuid,

    #[clap(short = 'W', long, help = "Also wait until the VM state reports RUNNING.")]
    pub wait_for_state: bool,

    #[clap(flatten)]
    pub wait: WaitArgs,
}

#[derive(Parser, Debug)]
pub struct StopArgs {
    #[clap(
        short = 'i',
        long,
        value_name = "DATACENTER_ID",
        help = "The unique ID of the datacenter."
    )]
    pub datacenter_id: Uuid,

    #[clap(short, long, value_name = "SERVER_ID", help = "The unique ID of the server.")]
    pub server_id: Uuid,

    #[clap(short = 'W', long, help = "Also wait until the VM state reports SHUTOFF.")]
    pub wait_for_state: bool,

    #[clap(flatten)]
    pub wait: WaitArgs,
}

#[derive(Parser, Debug)]
pub struct RebootArgs {
    #[clap(
        short = 'i',
        long,
        value_name = "DATACENTER_ID",
        help = "The unique ID of the datacenter."
    )]
    pub datacenter_id: Uuid,

    #[clap(short, long, value_name = "SERVER_ID", help = "The unique ID of the server.")]
    pub server_id: Uuid,

    #[clap(flatten)]
    pub wait: WaitArgs,
}

impl Run for StartArgs {
    async fn run(self, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
        let datacenter_id = self.datacenter_id.to_string();
        let server_id = self.server_id.to_string();
        let request = ctx
            .api_client
            .0
            .start_server(&datacenter_id, &server_id)
            .await?;
        self.wait.track(&ctx.api_client, request.as_ref()).await?;
        if self.wait_for_state {
            wait_vm_state(
                &ctx.api_client,
                &datacenter_id,
                &server_id,
                "RUNNING",
                self.wait.timeout,
            )
            .await?;
        }
        if !ctx.config.quiet {
            async_writeln!(ctx.output_file, "Server {server_id} started")?;
        }
        Ok(())
    }
}

impl Run for StopArgs {
    async fn run(self, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
        let datacenter_id = self.datacenter_id.to_string();
        let server_id = self.server_id.to_string();
        let request = ctx
            .api_client
            .0
            .stop_server(&datacenter_id, &server_id)
            .await?;
        self.wait.track(&ctx.api_client, request.as_ref()).await?;
        if self.wait_for_state {
            wait_vm_state(
                &ctx.api_client,
                &datacenter_id,
                &server_id,
                "SHUTOFF",
                self.wait.timeout,
            )
            .await?;
        }
        if !ctx.config.quiet {
            async_writeln!(ctx.output_file, "Server {server_id} stopped")?;
        }
        Ok(())
    }
}

impl Run for RebootArgs {
    async fn run(self, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
        let datacenter_id = self.datacenter_id.to_string();
        let server_id = self.server_id.to_string();
        let request = ctx
            .api_client
            .0
            .reboot_server(&datacenter_id, &server_id)
            .await?;
        self.wait.track(&ctx.api_client, request.as_ref()).await?;
        if !ctx.config.quiet {
            async_writeln!(ctx.output_file, "Server {server_id} rebooted")?;
        }
        Ok(())
    }
}

async fn wait_vm_state(
    api_client: &ApiClient,
    datacenter_id: &str,
    server_id: &str,
    target: &str,
    timeout_secs: u64,
) -> IonosCliResult<()> {
    let probe = || {
        let api_client = api_client.clone();
        let datacenter_id = datacenter_id.to_string();
        let server_id = server_id.to_string();
        async move {
            let server = api_client
                .0
                .get_server(&datacenter_id, &server_id, &ListParams::default())
                .await?;
            Ok(server.properties.and_then(|p| p.vm_state))
        }
    };
    wait::wait_for_state(probe, target, timeout_secs).await
}
