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
use ionoscloud::models::network::{Nic, NicProperties};
use prettytable::{Cell, Row, Table};

use super::args;
use crate::cfg::runtime::RuntimeContext;
use crate::rest::not_found;
use crate::{async_write, async_writeln, cols, confirm};

pub const FILTER_KEYS: &[&str] = &["name", "mac", "dhcp", "lan", "firewallActive"];

pub const COLS: &[&str] = &[
    "NicId",
    "Name",
    "Mac",
    "Ips",
    "Dhcp",
    "LanId",
    "FirewallActive",
    "State",
];

pub const DEFAULT_COLS: &[&str] = &["NicId", "Name", "Ips", "Dhcp", "LanId", "State"];

pub async fn list(args: args::List, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
    let params = args.list.to_params(FILTER_KEYS, ctx.config.depth)?;
    let nics = ctx
        .api_client
        .0
        .list_nics(
            &args.datacenter_id.to_string(),
            &args.server_id.to_string(),
            &params,
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
            let cols = cols::resolve_cols(ctx.config.cols.as_deref(), COLS, DEFAULT_COLS)?;
            let table = to_table(nics.items(), &cols);
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
        .get_nic(
            &args.datacenter_id.to_string(),
            &args.server_id.to_string(),
            &nic_id,
            &ListParams::depth(ctx.config.depth),
        )
        .await
        .map_err(not_found("nic", &nic_id))?;

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
            for col in COLS {
                writeln!(&mut lines, "{col:<width$}: {}", cell(&nic, col))?;
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

pub async fn create(args: args::Create, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
    let properties = NicProperties {
        name: args.name,
        lan: Some(args.lan),
        ips: args.ips,
        dhcp: Some(args.dhcp),
        ..Default::default()
    };
    let created = ctx
        .api_client
        .0
        .create_nic(
            &args.datacenter_id.to_string(),
            &args.server_id.to_string(),
            properties,
        )
        .await?;
    args.wait
        .track(&ctx.api_client, created.request.as_ref())
        .await?;

    if ctx.config.quiet {
        return Ok(());
    }
    if ctx.config.format == OutputFormat::Json {
        async_writeln!(
            ctx.output_file,
            "{}",
            serde_json::to_string_pretty(&created.value)?
        )?;
    } else {
        let id = created.value.id.unwrap_or_default();
        async_writeln!(ctx.output_file, "NIC {id} created")?;
    }
    Ok(())
}

pub async fn update(args: args::Update, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
    let nic_id = args.nic_id.to_string();
    let properties = NicProperties {
        name: args.name,
        lan: args.lan,
        dhcp: args.dhcp,
        ..Default::default()
    };
    let updated = ctx
        .api_client
        .0
        .update_nic(
            &args.datacenter_id.to_string(),
            &args.server_id.to_string(),
            &nic_id,
            properties,
        )
        .await?;
    args.wait
        .track(&ctx.api_client, updated.request.as_ref())
        .await?;

    if ctx.config.quiet {
        return Ok(());
    }
    if ctx.config.format == OutputFormat::Json {
        async_writeln!(
            ctx.output_file,
            "{}",
            serde_json::to_string_pretty(&updated.value)?
        )?;
    } else {
        async_writeln!(ctx.output_file, "NIC {nic_id} updated")?;
    }
    Ok(())
}

pub async fn delete(args: args::Delete, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
    let nic_id = args.nic_id.to_string();
    confirm::confirm(&format!("delete NIC {nic_id}"), ctx.config.force)?;

    let request = ctx
        .api_client
        .0
        .delete_nic(
            &args.datacenter_id.to_string(),
            &args.server_id.to_string(),
            &nic_id,
        )
        .await?;
    args.wait.track(&ctx.api_client, request.as_ref()).await?;

    if !ctx.config.quiet {
        async_writeln!(ctx.output_file, "NIC {nic_id} deleted")?;
    }
    Ok(())
}

// Shared with the loadbalancer module, which renders balanced NICs
// with the same columns.
pub(crate) fn to_table(nics: &[Nic], cols: &[String]) -> Table {
    let mut table = Table::new();
    table.set_titles(Row::new(cols.iter().map(|col| Cell::new(col)).collect()));
    for nic in nics {
        table.add_row(Row::new(
            cols.iter().map(|col| Cell::new(&cell(nic, col))).collect(),
        ));
    }
    table
}

pub(crate) fn cell(nic: &Nic, col: &str) -> String {
    let properties = nic.properties.as_ref();
    match col {
        "NicId" => nic.id.clone().unwrap_or_default(),
        "Name" => properties.and_then(|p| p.name.clone()).unwrap_or_default(),
        "Mac" => properties.and_then(|p| p.mac.clone()).unwrap_or_default(),
        "Ips" => properties
            .and_then(|p| p.ips.as_ref())
            .map(|ips| ips.join(", "))
            .unwrap_or_default(),
        "Dhcp" => properties
            .and_then(|p| p.dhcp)
            .map(|dhcp| dhcp.to_string())
            .unwrap_or_default(),
        "LanId" => properties
            .and_then(|p| p.lan)
            .map(|lan| lan.to_string())
            .unwrap_or_default(),
        "FirewallActive" => properties
            .and_then(|p| p.firewall_active)
            .map(|active| active.to_string())
            .unwrap_or_default(),
        "State" => nic
            .metadata
            .as_ref()
            .and_then(|m| m.state.clone())
            .unwrap_or_default(),
        _ => String::new(),
    }
}
