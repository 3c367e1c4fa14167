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
use ionoscloud::models::request::Request;
use prettytable::{Cell, Row, Table};

use super::args;
use crate::cfg::runtime::RuntimeContext;
use crate::rest::not_found;
use crate::{async_write, async_writeln, cols, wait};

pub const FILTER_KEYS: &[&str] = &["method", "url", "body", "createdBy", "createdDate"];

pub const COLS: &[&str] = &[
    "RequestId",
    "Status",
    "Message",
    "Method",
    "Url",
    "CreatedDate",
    "CreatedBy",
];

pub const DEFAULT_COLS: &[&str] = &["RequestId", "Status", "Method", "Url", "CreatedDate"];

pub async fn list(args: args::List, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
    let params = args.list.to_params(FILTER_KEYS, ctx.config.depth)?;
    let requests = ctx.api_client.0.list_requests(&params).await?;

    if ctx.config.quiet {
        return Ok(());
    }
    match ctx.config.format {
        OutputFormat::Json => {
            async_writeln!(
                ctx.output_file,
                "{}",
                serde_json::to_string_pretty(&requests)?
            )?;
        }
        OutputFormat::AsciiTable => {
            let cols = cols::resolve_cols(ctx.config.cols.as_deref(), COLS, DEFAULT_COLS)?;
            let table = to_table(requests.items(), &cols);
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
    let request_id = args.request_id.to_string();
    let request = ctx
        .api_client
        .0
        .get_request(&request_id, &ListParams::depth(ctx.config.depth))
        .await
        .map_err(not_found("request", &request_id))?;

    if ctx.config.quiet {
        return Ok(());
    }
    match ctx.config.format {
        OutputFormat::Json => {
            async_writeln!(
                ctx.output_file,
                "{}",
                serde_json::to_string_pretty(&request)?
            )?;
        }
        OutputFormat::AsciiTable => {
            let width = 25;
            let mut lines = String::new();
            for col in COLS {
                writeln!(&mut lines, "{col:<width$}: {}", cell(&request, col))?;
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

pub async fn wait(args: args::Wait, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
    let request_id = args.request_id.to_string();
    let href = format!("/requests/{request_id}/status");
    wait::wait_for_request(&ctx.api_client, &href, args.timeout).await?;

    if !ctx.config.quiet {
        async_writeln!(ctx.output_file, "Request {request_id} is DONE")?;
    }
    Ok(())
}

fn to_table(requests: &[Request], cols: &[String]) -> Table {
    let mut table = Table::new();
    table.set_titles(Row::new(cols.iter().map(|col| Cell::new(col)).collect()));
    for request in requests {
        table.add_row(Row::new(
            cols.iter()
                .map(|col| Cell::new(&cell(request, col)))
                .collect(),
        ));
    }
    table
}

fn cell(request: &Request, col: &str) -> String {
    let metadata = request.metadata.as_ref();
    let properties = request.properties.as_ref();
    let status = metadata.and_then(|m| m.request_status.as_ref());
    match col {
        "RequestId" => request.id.clone().unwrap_or_default(),
        "Status" => status
            .and_then(|s| s.state())
            .unwrap_or_default()
            .to_string(),
        "Message" => status
            .and_then(|s| s.message())
            .unwrap_or_default()
            .to_string(),
        "Method" => properties
            .and_then(|p| p.method.clone())
            .unwrap_or_default(),
        "Url" => properties.and_then(|p| p.url.clone()).unwrap_or_default(),
        "CreatedDate" => metadata
            .and_then(|m| m.created_date.clone())
            .unwrap_or_default(),
        "CreatedBy" => metadata
            .and_then(|m| m.created_by.clone())
            .unwrap_or_default(),
        _ => String::new(),
    }
}
