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
use ionoscloud::models::network::{FirewallRule, FirewallRuleProperties};
use prettytable::{Cell, Row, Table};

use super::args;
use crate::cfg::runtime::RuntimeContext;
use crate::rest::not_found;
use crate::{async_write, async_writeln, cols, confirm};

pub const FILTER_KEYS: &[&str] = &[
    "name",
    "protocol",
    "sourceMac",
    "sourceIp",
    "targetIp",
    "portRangeStart",
    "portRangeEnd",
];

pub const COLS: &[&str] = &[
    "FirewallRuleId",
    "Name",
    "Protocol",
    "SourceMac",
    "SourceIp",
    "TargetIp",
    "PortRangeStart",
    "PortRangeEnd",
    "IcmpType",
    "IcmpCode",
    "State",
];

pub const DEFAULT_COLS: &[&str] = &[
    "FirewallRuleId",
    "Name",
    "Protocol",
    "PortRangeStart",
    "PortRangeEnd",
    "State",
];

pub async fn list(args: args::List, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
    let params = args.list.to_params(FILTER_KEYS, ctx.config.depth)?;
    let rules = ctx
        .api_client
        .0
        .list_firewall_rules(
            &args.datacenter_id.to_string(),
            &args.server_id.to_string(),
            &args.nic_id.to_string(),
            &params,
        )
        .await?;

    if ctx.config.quiet {
        return Ok(());
    }
    match ctx.config.format {
        OutputFormat::Json => {
            async_writeln!(ctx.output_file, "{}", serde_json::to_string_pretty(&rules)?)?;
        }
        OutputFormat::AsciiTable => {
            let cols = cols::resolve_cols(ctx.config.cols.as_deref(), COLS, DEFAULT_COLS)?;
            let table = to_table(rules.items(), &cols);
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
    let rule_id = args.firewallrule_id.to_string();
    let rule = ctx
        .api_client
        .0
        .get_firewall_rule(
            &args.datacenter_id.to_string(),
            &args.server_id.to_string(),
            &args.nic_id.to_string(),
            &rule_id,
            &ListParams::depth(ctx.config.depth),
        )
        .await
        .map_err(not_found("firewall rule", &rule_id))?;

    if ctx.config.quiet {
        return Ok(());
    }
    match ctx.config.format {
        OutputFormat::Json => {
            async_writeln!(ctx.output_file, "{}", serde_json::to_string_pretty(&rule)?)?;
        }
        OutputFormat::AsciiTable => {
            let width = 25;
            let mut lines = String::new();
            for col in COLS {
                writeln!(&mut lines, "{col:<width$}: {}", cell(&rule, col))?;
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
    let properties = FirewallRuleProperties {
        name: args.name,
        protocol: Some(args.protocol),
        source_mac: args.source_mac,
        source_ip: args.source_ip,
        target_ip: args.target_ip,
        port_range_start: args.port_range_start,
        port_range_end: args.port_range_end,
        icmp_type: args.icmp_type,
        icmp_code: args.icmp_code,
    };
    let created = ctx
        .api_client
        .0
        .create_firewall_rule(
            &args.datacenter_id.to_string(),
            &args.server_id.to_string(),
            &args.nic_id.to_string(),
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
        async_writeln!(ctx.output_file, "Firewall rule {id} created")?;
    }
    Ok(())
}

pub async fn update(args: args::Update, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
    let rule_id = args.firewallrule_id.to_string();
    let properties = FirewallRuleProperties {
        name: args.name,
        source_ip: args.source_ip,
        target_ip: args.target_ip,
        port_range_start: args.port_range_start,
        port_range_end: args.port_range_end,
        ..Default::default()
    };
    let updated = ctx
        .api_client
        .0
        .update_firewall_rule(
            &args.datacenter_id.to_string(),
            &args.server_id.to_string(),
            &args.nic_id.to_string(),
            &rule_id,
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
        async_writeln!(ctx.output_file, "Firewall rule {rule_id} updated")?;
    }
    Ok(())
}

pub async fn delete(args: args::Delete, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
    let rule_id = args.firewallrule_id.to_string();
    confirm::confirm(&format!("delete firewall rule {rule_id}"), ctx.config.force)?;

    let request = ctx
        .api_client
        .0
        .delete_firewall_rule(
            &args.datacenter_id.to_string(),
            &args.server_id.to_string(),
            &args.nic_id.to_string(),
            &rule_id,
        )
        .await?;
    args.wait.track(&ctx.api_client, request.as_ref()).await?;

    if !ctx.config.quiet {
        async_writeln!(ctx.output_file, "Firewall rule {rule_id} deleted")?;
    }
    Ok(())
}

fn to_table(rules: &[FirewallRule], cols: &[String]) -> Table {
    let mut table = Table::new();
    table.set_titles(Row::new(cols.iter().map(|col| Cell::new(col)).collect()));
    for rule in rules {
        table.add_row(Row::new(
            cols.iter().map(|col| Cell::new(&cell(rule, col))).collect(),
        ));
    }
    table
}

fn cell(rule: &FirewallRule, col: &str) -> String {
    let properties = rule.properties.as_ref();
    match col {
        "FirewallRuleId" => rule.id.clone().unwrap_or_default(),
        "Name" => properties.and_then(|p| p.name.clone()).unwrap_or_default(),
        "Protocol" => properties
            .and_then(|p| p.protocol.clone())
            .unwrap_or_default(),
        "SourceMac" => properties
            .and_then(|p| p.source_mac.clone())
            .unwrap_or_default(),
        "SourceIp" => properties
            .and_then(|p| p.source_ip.clone())
            .unwrap_or_default(),
        "TargetIp" => properties
            .and_then(|p| p.target_ip.clone())
            .unwrap_or_default(),
        "PortRangeStart" => properties
            .and_then(|p| p.port_range_start)
            .map(|port| port.to_string())
            .unwrap_or_default(),
        "PortRangeEnd" => properties
            .and_then(|p| p.port_range_end)
            .map(|port| port.to_string())
            .unwrap_or_default(),
        "IcmpType" => properties
            .and_then(|p| p.icmp_type)
            .map(|t| t.to_string())
            .unwrap_or_default(),
        "IcmpCode" => properties
            .and_then(|p| p.icmp_code)
            .map(|c| c.to_string())
            .unwrap_or_default(),
        "State" => rule
            .metadata
            .as_ref()
            .and_then(|m| m.state.clone())
            .unwrap_or_default(),
        _ => String::new(),
    }
}
