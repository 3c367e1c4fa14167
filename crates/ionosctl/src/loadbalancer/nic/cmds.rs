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

use std::fmt::Write;

use ionoscloud::ListParams;
use ionoscloud::cli::{IonosCliError, IonosCliResult, OutputFormat};

use super::args;
use crate::cfg::runtime::RuntimeContext;
use crate::nic::cmds as nic_cmds;
use crate::rest::not_found;
use crate::{async_write, async_writeln, cols, confirm};

pub async fn attach(args: args::Attach, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
    let nic_id = args.nic_id.to_string();
    let attached = ctx
        .api_client
        .0
        .attach_balanced_nic(
            &args.datacenter_id.to_string(),
            &args.loadbalancer_id.to_string(),
            &nic_id,
        )
        .await?;
    args.wait
        .track(&ctx.api_client, attached.request.as_ref())
        .await?;

    if !ctx.config.quiet {
        async_writeln!(
            ctx.output_file,
            "NIC {nic_id} attached to load balancer {}",
            args.loadbalancer_id
        )?;
    }
    Ok(())
}

pub async fn list(args: args::List, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
    let nics = ctx
        .api_client
        .0
        .list_balanced_nics(
            &args.datacenter_id.to_string(),
            &args.loadbalancer_id.to_string(),
            &ListParams::depth(ctx.config.depth),
        )
        .await?;

    if ctx.config.quiet {
        return Ok(());
    }
    match ctx.config.format {
        OutputFormat::Json => {
            async_writeln!(ctx.output_file, "{}", serde_json::to_string_pretty(&nics)?)?;
        }
        OutputFormat::AsciiTable => {
            let cols = cols::resolve_cols(
                ctx.config.cols.as_deref(),
                nic_cmds::COLS,
                nic_cmds::DEFAULT_COLS,
            )?;
            let table = nic_cmds::to_table(nics.items(), &cols);
            async_write!(ctx.output_file, "{table}")?;
        }
        OutputFormat::Csv => {
            return Err(IonosCliError::NotImplemented(
                "CSV formatted output".to_string(),
            ));
        }
    }
    Ok(())
}

pub async fn get(args: args::Get, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
    let nic_id = args.nic_id.to_string();
    let nic = ctx
        .api_client
        .0
        .get_balanced_nic(
            &args.datacenter_id.to_string(),
            &args.loadbalancer_id.to_string(),
            &nic_id,
            &ListParams::depth(ctx.config.depth),
        )
        .await
        .map_err(not_found("balanced nic", &nic_id))?;

    if ctx.config.quiet {
        return Ok(());
    }
    match ctx.config.format {
        OutputFormat::Json => {
            async_writeln!(ctx.output_file, "{}", serde_json::to_string_pretty(&nic)?)?;
        }
        OutputFormat::AsciiTable => {
            let width = 25;
            let mut lines = String::new();
            for col in nic_cmds::COLS {
                writeln!(&mut lines, "{col:<width$}: {}", nic_cmds::cell(&nic, col))?;
            }
            async_write!(ctx.output_file, "{lines}")?;
        }
        OutputFormat::Csv => {
            return Err(IonosCliError::NotImplemented(
                "CSV formatted output".to_string(),
            ));
        }
    }
    Ok(())
}

pub async fn detach(args: args::Detach, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
    let nic_id = args.nic_id.to_string();
    confirm::confirm(
        &format!(
            "detach NIC {nic_id} from load balancer {}",
            args.loadbalancer_id
        ),
        ctx.config.force,
    )?;

    let request = ctx
        .api_client
        .0
        .detach_balanced_nic(
            &args.datacenter_id.to_string(),
            &args.loadbalancer_id.to_string(),
            &nic_id,
        )
        .await?;
    args.wait.track(&ctx.api_client, request.as_ref()).await?;

    if !ctx.config.quiet {
        async_writeln!(ctx.output_file, "NIC {nic_id} detached")?;
    }
    Ok(())
}
