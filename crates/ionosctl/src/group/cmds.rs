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
use ionoscloud::models::um::{Group, GroupProperties};
use prettytable::{Cell, Row, Table};

use super::args;
use crate::cfg::runtime::RuntimeContext;
use crate::rest::not_found;
use crate::{async_write, async_writeln, cols, confirm};

pub const FILTER_KEYS: &[&str] = &["name"];

pub const COLS: &[&str] = &[
    "GroupId",
    "Name",
    "CreateDataCenter",
    "CreateSnapshot",
    "ReserveIp",
    "AccessActivityLog",
];

pub const DEFAULT_COLS: &[&str] = COLS;

pub async fn list(args: args::List, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
    let params = args.list.to_params(FILTER_KEYS, ctx.config.depth)?;
    let groups = ctx.api_client.0.list_groups(&params).await?;

    if ctx.config.quiet {
        return Ok(());
    }
    match ctx.config.format {
        OutputFormat::Json => {
            async_writeln!(
                ctx.output_file,
                "{}",
                serde_json::to_string_pretty(&groups)?
            )?;
        }
        OutputFormat::AsciiTable => {
            let cols = cols::resolve_cols(ctx.config.cols.as_deref(), COLS, DEFAULT_COLS)?;
            let table = to_table(groups.items(), &cols);
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
    let group_id = args.group_id.to_string();
    let group = ctx
        .api_client
        .0
        .get_group(&group_id, &ListParams::depth(ctx.config.depth))
        .await
        .map_err(not_found("group", &group_id))?;

    if ctx.config.quiet {
        return Ok(());
    }
    match ctx.config.format {
        OutputFormat::Json => {
            async_writeln!(ctx.output_file, "{}", serde_json::to_string_pretty(&group)?)?;
        }
        OutputFormat::AsciiTable => {
            let width = 25;
            let mut lines = String::new();
            for col in COLS {
                writeln!(&mut lines, "{col:<width$}: {}", cell(&group, col))?;
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
    let properties = GroupProperties {
        name: Some(args.name),
        create_data_center: Some(args.create_datacenter),
        create_snapshot: Some(args.create_snapshot),
        reserve_ip: Some(args.reserve_ip),
        access_activity_log: Some(args.access_activity_log),
    };
    let created = ctx.api_client.0.create_group(properties).await?;
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
        async_writeln!(ctx.output_file, "Group {id} created")?;
    }
    Ok(())
}

pub async fn update(args: args::Update, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
    let group_id = args.group_id.to_string();
    let properties = GroupProperties {
        name: Some(args.name),
        create_data_center: args.create_datacenter,
        create_snapshot: args.create_snapshot,
        reserve_ip: args.reserve_ip,
        access_activity_log: args.access_activity_log,
    };
    let updated = ctx.api_client.0.update_group(&group_id, properties).await?;
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
        async_writeln!(ctx.output_file, "Group {group_id} updated")?;
    }
    Ok(())
}

pub async fn delete(args: args::Delete, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
    let group_id = args.group_id.to_string();
    confirm::confirm(&format!("delete group {group_id}"), ctx.config.force)?;

    let request = ctx.api_client.0.delete_group(&group_id).await?;
    args.wait.track(&ctx.api_client, request.as_ref()).await?;

    if !ctx.config.quiet {
        async_writeln!(ctx.output_file, "Group {group_id} deleted")?;
    }
    Ok(())
}

fn to_table(groups: &[Group], cols: &[String]) -> Table {
    let mut table = Table::new();
    table.set_titles(Row::new(cols.iter().map(|col| Cell::new(col)).collect()));
    for group in groups {
        table.add_row(Row::new(
            cols.iter().map(|col| Cell::new(&cell(group, col))).collect(),
        ));
    }
    table
}

fn cell(group: &Group, col: &str) -> String {
    let properties = group.properties.as_ref();
    let flag = |value: Option<bool>| value.map(|v| v.to_string()).unwrap_or_default();
    match col {
        "GroupId" => group.id.clone().unwrap_or_default(),
        "Name" => properties.and_then(|p| p.name.clone()).unwrap_or_default(),
        "CreateDataCenter" => flag(properties.and_then(|p| p.create_data_center)),
        "CreateSnapshot" => flag(properties.and_then(|p| p.create_snapshot)),
        "ReserveIp" => flag(properties.and_then(|p| p.reserve_ip)),
        "AccessActivityLog" => flag(properties.and_then(|p| p.access_activity_log)),
        _ => String::new(),
    }
}
