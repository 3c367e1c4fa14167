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
use ionoscloud::models::network::{LoadBalancer, LoadBalancerProperties};
use prettytable::{Cell, Row, Table};

use super::args;
use crate::cfg::runtime::RuntimeContext;
use crate::rest::not_found;
use crate::{async_write, async_writeln, cols, confirm};

pub const FILTER_KEYS: &[&str] = &["name", "ip", "dhcp"];

pub const COLS: &[&str] = &["LoadBalancerId", "Name", "Ip", "Dhcp", "State"];

pub const DEFAULT_COLS: &[&str] = &["LoadBalancerId", "Name", "Ip", "Dhcp", "State"];

pub async fn list(args: args::List, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
    let params = args.list.to_params(FILTER_KEYS, ctx.config.depth)?;
    let loadbalancers = ctx
        .api_client
        .0
        .list_loadbalancers(&args.datacenter_id.to_string(), &params)
        .await?;

    if ctx.config.quiet {
        return Ok(());
    }
    match ctx.config.format {
        OutputFormat::Json => {
            async_writeln!(
                ctx.output_file,
                "{}",
                serde_json::to_string_pretty(&loadbalancers)?
            )?;
        }
        OutputFormat::AsciiTable => {
            let cols = cols::resolve_cols(ctx.config.cols.as_deref(), COLS, DEFAULT_COLS)?;
            let table = to_table(loadbalancers.items(), &cols);
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
    let loadbalancer_id = args.loadbalancer_id.to_string();
    let loadbalancer = ctx
        .api_client
        .0
        .get_loadbalancer(
            &args.datacenter_id.to_string(),
            &loadbalancer_id,
            &ListParams::depth(ctx.config.depth),
        )
        .await
        .map_err(not_found("loadbalancer", &loadbalancer_id))?;

    if ctx.config.quiet {
        return Ok(());
    }
    match ctx.config.format {
        OutputFormat::Json => {
            async_writeln!(
                ctx.output_file,
                "{}",
                serde_json::to_string_pretty(&loadbalancer)?
            )?;
        }
        OutputFormat::AsciiTable => {
            let width = 25;
            let mut lines = String::new();
            for col in COLS {
                writeln!(&mut lines, "{col:<width$}: {}", cell(&loadbalancer, col))?;
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
    let properties = LoadBalancerProperties {
        name: args.name,
        ip: args.ip,
        dhcp: Some(args.dhcp),
    };
    let created = ctx
        .api_client
        .0
        .create_loadbalancer(&args.datacenter_id.to_string(), properties)
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
        async_writeln!(ctx.output_file, "Load balancer {id} created")?;
    }
    Ok(())
}

pub async fn update(args: args::Update, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
    let loadbalancer_id = args.loadbalancer_id.to_string();
    let properties = LoadBalancerProperties {
        name: args.name,
        ip: args.ip,
        dhcp: args.dhcp,
    };
    let updated = ctx
        .api_client
        .0
        .update_loadbalancer(&args.datacenter_id.to_string(), &loadbalancer_id, properties)
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
        async_writeln!(ctx.output_file, "Load balancer {loadbalancer_id} updated")?;
    }
    Ok(())
}

pub async fn delete(args: args::Delete, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
    let datacenter_id = args.datacenter_id.to_string();
    if args.all {
        return delete_all(args, ctx).await;
    }
    let Some(loadbalancer_id) = args.loadbalancer_id else {
        return Err(IonosCliError::GenericError(
            "either --loadbalancer-id or --all is required".to_string(),
        ));
    };
    let loadbalancer_id = loadbalancer_id.to_string();

    confirm::confirm(
        &format!("delete load balancer {loadbalancer_id}"),
        ctx.config.force,
    )?;
    let request = ctx
        .api_client
        .0
        .delete_loadbalancer(&datacenter_id, &loadbalancer_id)
        .await?;
    args.wait.track(&ctx.api_client, request.as_ref()).await?;

    if !ctx.config.quiet {
        async_writeln!(ctx.output_file, "Load balancer {loadbalancer_id} deleted")?;
    }
    Ok(())
}

async fn delete_all(args: args::Delete, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
    let datacenter_id = args.datacenter_id.to_string();
    let loadbalancers = ctx
        .api_client
        .0
        .list_loadbalancers(&datacenter_id, &ListParams::depth(1))
        .await?;
    let items = loadbalancers.items();
    if items.is_empty() {
        if !ctx.config.quiet {
            async_writeln!(ctx.output_file, "No load balancers to delete")?;
        }
        return Ok(());
    }

    confirm::confirm(
        &format!(
            "delete all {} load balancers of datacenter {datacenter_id}",
            items.len()
        ),
        ctx.config.force,
    )?;

    let mut failures = BulkError::default();
    for loadbalancer in items {
        let Some(id) = loadbalancer.id.as_deref() else {
            continue;
        };
        match ctx
            .api_client
            .0
            .delete_loadbalancer(&datacenter_id, id)
            .await
        {
            Ok(request) => {
                if let Err(err) = args.wait.track(&ctx.api_client, request.as_ref()).await {
                    failures.push(id, err);
                    continue;
                }
                if !ctx.config.quiet {
                    async_writeln!(ctx.output_file, "Load balancer {id} deleted")?;
                }
            }
            Err(err) => failures.push(id, err),
        }
    }
    failures.into_result()
}

fn to_table(loadbalancers: &[LoadBalancer], cols: &[String]) -> Table {
    let mut table = Table::new();
    table.set_titles(Row::new(cols.iter().map(|col| Cell::new(col)).collect()));
    for loadbalancer in loadbalancers {
        table.add_row(Row::new(
            cols.iter()
                .map(|col| Cell::new(&cell(loadbalancer, col)))
                .collect(),
        ));
    }
    table
}

fn cell(loadbalancer: &LoadBalancer, col: &str) -> String {
    let properties = loadbalancer.properties.as_ref();
    match col {
        "LoadBalancerId" => loadbalancer.id.clone().unwrap_or_default(),
        "Name" => properties.and_then(|p| p.name.clone()).unwrap_or_default(),
        "Ip" => properties.and_then(|p| p.ip.clone()).unwrap_or_default(),
        "Dhcp" => properties
            .and_then(|p| p.dhcp)
            .map(|dhcp| dhcp.to_string())
            .unwrap_or_default(),
        "State" => loadbalancer
            .metadata
            .as_ref()
            .and_then(|m| m.state.clone())
            .unwrap_or_default(),
        _ => String::new(),
    }
}
