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
use ionoscloud::cli::{IonosCliError, IonosCliResult, OutputFormat};
use ionoscloud::models::um::Resource;
use prettytable::{Cell, Row, Table};

use super::args;
use crate::cfg::runtime::RuntimeContext;
use crate::rest::not_found;
use crate::{async_write, async_writeln, cols};

pub const COLS: &[&str] = &["ResourceId", "Type", "Name", "SecAuthProtection", "State"];

pub const DEFAULT_COLS: &[&str] = &["ResourceId", "Type", "Name", "State"];

pub async fn list(args: args::List, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
    let params = ListParams::depth(ctx.config.depth);
    let resources = match args.resource_type {
        Some(resource_type) => {
            ctx.api_client
                .0
                .list_resources_by_type(resource_type.as_path(), &params)
                .await?
        }
        None => ctx.api_client.0.list_resources(&params).await?,
    };

    if ctx.config.quiet {
        return Ok(());
    }
    match ctx.config.format {
        OutputFormat::Json => {
            async_writeln!(
                ctx.output_file,
                "{}",
                serde_json::to_string_pretty(&resources)?
            )?;
        }
        OutputFormat::AsciiTable => {
            let cols = cols::resolve_cols(ctx.config.cols.as_deref(), COLS, DEFAULT_COLS)?;
            let table = to_table(resources.items(), &cols);
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
    let resource_id = args.resource_id.to_string();
    let resource = ctx
        .api_client
        .0
        .get_resource(
            args.resource_type.as_path(),
            &resource_id,
            &ListParams::depth(ctx.config.depth),
        )
        .await
        .map_err(not_found("resource", &resource_id))?;

    if ctx.config.quiet {
        return Ok(());
    }
    if ctx.config.format == OutputFormat::Json {
        async_writeln!(
            ctx.output_file,
            "{}",
            serde_json::to_string_pretty(&resource)?
        )?;
    } else {
        let cols: Vec<String> = COLS.iter().map(|col| col.to_string()).collect();
        let table = to_table(std::slice::from_ref(&resource), &cols);
        async_write!(ctx.output_file, "{table}")?;
    }
    Ok(())
}

fn to_table(resources: &[Resource], cols: &[String]) -> Table {
    let mut table = Table::new();
    table.set_titles(Row::new(cols.iter().map(|col| Cell::new(col)).collect()));
    for resource in resources {
        table.add_row(Row::new(
            cols.iter()
                .map(|col| Cell::new(&cell(resource, col)))
                .collect(),
        ));
    }
    table
}

fn cell(resource: &Resource, col: &str) -> String {
    let properties = resource.properties.as_ref();
    match col {
        "ResourceId" => resource.id.clone().unwrap_or_default(),
        "Type" => resource.kind.clone().unwrap_or_default(),
        "Name" => properties.and_then(|p| p.name.clone()).unwrap_or_default(),
        "SecAuthProtection" => properties
            .and_then(|p| p.sec_auth_protection)
            .map(|sec| sec.to_string())
            .unwrap_or_default(),
        "State" => resource
            .metadata
            .as_ref()
            .and_then(|m| m.state.clone())
            .unwrap_or_default(),
        _ => String::new(),
    }
}
