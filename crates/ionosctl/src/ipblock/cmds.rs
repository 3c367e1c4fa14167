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
use ionoscloud::cli::{BulkError, IonosCliError, IonosCliResult, OutputFormat};
use ionoscloud::models::network::{IpBlock, IpBlockProperties};
use prettytable::{Cell, Row, Table};

use super::args;
use crate::cfg::runtime::RuntimeContext;
use crate::rest::not_found;
use crate::{async_write, async_writeln, cols, confirm};

pub const FILTER_KEYS: &[&str] = &["name", "location", "size"];

pub const COLS: &[&str] = &["IpBlockId", "Name", "Location", "Size", "Ips", "State"];

pub const DEFAULT_COLS: &[&str] = &["IpBlockId", "Name", "Location", "Size", "Ips", "State"];

pub async fn list(args: args::List, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
    let params = args.list.to_params(FILTER_KEYS, ctx.config.depth)?;
    let ipblocks = ctx.api_client.0.list_ipblocks(&params).await?;

    if ctx.config.quiet {
        return Ok(());
    }
    match ctx.config.format {
        OutputFormat::Json => {
            async_writeln!(
                ctx.output_file,
                "{}",
                serde_json::to_string_pretty(&ipblocks)?
            )?;
        }
        OutputFormat::AsciiTable => {
            let cols = cols::resolve_cols(ctx.config.cols.as_deref(), COLS, DEFAULT_COLS)?;
            let table = to_table(ipblocks.items(), &cols);
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
    let ipblock_id = args.ipblock_id.to_string();
    let ipblock = ctx
        .api_client
        .0
        .get_ipblock(&ipblock_id, &ListParams::depth(ctx.config.depth))
        .await
        .map_err(not_found("ipblock", &ipblock_id))?;

    if ctx.config.quiet {
        return Ok(());
    }
    match ctx.config.format {
        OutputFormat::Json => {
            async_writeln!(
                ctx.output_file,
                "{}",
                serde_json::to_string_pretty(&ipblock)?
            )?;
        }
        OutputFormat::AsciiTable => {
            let width = 25;
            let mut lines = String::new();
            for col in COLS {
                writeln!(&mut lines, "{col:<width$}: {}", cell(&ipblock, col))?;
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
    let properties = IpBlockProperties {
        name: args.name,
        location: Some(args.location),
        size: Some(args.size),
        ..Default::default()
    };
    let created = ctx.api_client.0.create_ipblock(properties).await?;
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
        async_writeln!(ctx.output_file, "IP block {id} reserved")?;
    }
    Ok(())
}

pub async fn update(args: args::Update, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
    let ipblock_id = args.ipblock_id.to_string();
    let properties = IpBlockProperties {
        name: args.name,
        ..Default::default()
    };
    let updated = ctx
        .api_client
        .0
        .update_ipblock(&ipblock_id, properties)
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
        async_writeln!(ctx.output_file, "IP block {ipblock_id} updated")?;
    }
    Ok(())
}

pub async fn delete(args: args::Delete, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
    if args.all {
        return delete_all(args, ctx).await;
    }
    let Some(ipblock_id) = args.ipblock_id else {
        return Err(IonosCliError::GenericError(
            "either --ipblock-id or --all is required".to_string(),
        ));
    };
    let ipblock_id = ipblock_id.to_string();

    confirm::confirm(&format!("release IP block {ipblock_id}"), ctx.config.force)?;
    let request = ctx.api_client.0.delete_ipblock(&ipblock_id).await?;
    args.wait.track(&ctx.api_client, request.as_ref()).await?;

    if !ctx.config.quiet {
        async_writeln!(ctx.output_file, "IP block {ipblock_id} released")?;
    }
    Ok(())
}

async fn delete_all(args: args::Delete, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
    let ipblocks = ctx
        .api_client
        .0
        .list_ipblocks(&ListParams::depth(1))
        .await?;
    let items = ipblocks.items();
    if items.is_empty() {
        if !ctx.config.quiet {
            async_writeln!(ctx.output_file, "No IP blocks to release")?;
        }
        return Ok(());
    }

    confirm::confirm(
        &format!("release all {} IP blocks", items.len()),
        ctx.config.force,
    )?;

    let mut failures = BulkError::default();
    for ipblock in items {
        let Some(id) = ipblock.id.as_deref() else {
            continue;
        };
        match ctx.api_client.0.delete_ipblock(id).await {
            Ok(request) => {
                if let Err(err) = args.wait.track(&ctx.api_client, request.as_ref()).await {
                    failures.push(id, err);
                    continue;
                }
                if !ctx.config.quiet {
                    async_writeln!(ctx.output_file, "IP block {id} released")?;
                }
            }
            Err(err) => failures.push(id, err),
        }
    }
    failures.into_result()
}

fn to_table(ipblocks: &[IpBlock], cols: &[String]) -> Table {
    let mut table = Table::new();
    table.set_titles(Row::new(cols.iter().map(|col| Cell::new(col)).collect()));
    for ipblock in ipblocks {
        table.add_row(Row::new(
            cols.iter()
                .map(|col| Cell::new(&cell(ipblock, col)))
                .collect(),
        ));
    }
    table
}

fn cell(ipblock: &IpBlock, col: &str) -> String {
    let properties = ipblock.properties.as_ref();
    match col {
        "IpBlockId" => ipblock.id.clone().unwrap_or_default(),
        "Name" => properties.and_then(|p| p.name.clone()).unwrap_or_default(),
        "Location" => properties
            .and_then(|p| p.location.clone())
            .unwrap_or_default(),
        "Size" => properties
            .and_then(|p| p.size)
            .map(|size| size.to_string())
            .unwrap_or_default(),
        "Ips" => properties
            .and_then(|p| p.ips.as_ref())
            .map(|ips| ips.join(", "))
            .unwrap_or_default(),
        "State" => ipblock
            .metadata
            .as_ref()
            .and_then(|m| m.state.clone())
            .unwrap_or_default(),
        _ => String::new(),
    }
}
