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
use ionoscloud::models::um::User;
use prettytable::{Cell, Row, Table};

use super::args;
use crate::cfg::runtime::RuntimeContext;
use crate::{async_write, async_writeln, cols, confirm};

pub const COLS: &[&str] = &["UserId", "Firstname", "Lastname", "Email", "Administrator"];

pub const DEFAULT_COLS: &[&str] = COLS;

pub async fn list(args: args::List, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
    let users = ctx
        .api_client
        .0
        .list_group_users(
            &args.group_id.to_string(),
            &ListParams::depth(ctx.config.depth),
        )
        .await?;

    if ctx.config.quiet {
        return Ok(());
    }
    match ctx.config.format {
        OutputFormat::Json => {
            async_writeln!(ctx.output_file, "{}", serde_json::to_string_pretty(&users)?)?;
        }
        OutputFormat::AsciiTable => {
            let cols = cols::resolve_cols(ctx.config.cols.as_deref(), COLS, DEFAULT_COLS)?;
            let table = to_table(users.items(), &cols);
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

pub async fn add(args: args::Add, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
    let user_id = args.user_id.to_string();
    let added = ctx
        .api_client
        .0
        .add_group_user(&args.group_id.to_string(), &user_id)
        .await?;
    args.wait
        .track(&ctx.api_client, added.request.as_ref())
        .await?;

    if !ctx.config.quiet {
        async_writeln!(
            ctx.output_file,
            "User {user_id} added to group {}",
            args.group_id
        )?;
    }
    Ok(())
}

pub async fn remove(args: args::Remove, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
    let user_id = args.user_id.to_string();
    confirm::confirm(
        &format!("remove user {user_id} from group {}", args.group_id),
        ctx.config.force,
    )?;

    let request = ctx
        .api_client
        .0
        .remove_group_user(&args.group_id.to_string(), &user_id)
        .await?;
    args.wait.track(&ctx.api_client, request.as_ref()).await?;

    if !ctx.config.quiet {
        async_writeln!(ctx.output_file, "User {user_id} removed")?;
    }
    Ok(())
}

fn to_table(users: &[User], cols: &[String]) -> Table {
    let mut table = Table::new();
    table.set_titles(Row::new(cols.iter().map(|col| Cell::new(col)).collect()));
    for user in users {
        table.add_row(Row::new(
            cols.iter().map(|col| Cell::new(&cell(user, col))).collect(),
        ));
    }
    table
}

fn cell(user: &User, col: &str) -> String {
    let properties = user.properties.as_ref();
    match col {
        "UserId" => user.id.clone().unwrap_or_default(),
        "Firstname" => properties
            .and_then(|p| p.firstname.clone())
            .unwrap_or_default(),
        "Lastname" => properties
            .and_then(|p| p.lastname.clone())
            .unwrap_or_default(),
        "Email" => properties.and_then(|p| p.email.clone()).unwrap_or_default(),
        "Administrator" => properties
            .and_then(|p| p.administrator)
            .map(|admin| admin.to_string())
            .unwrap_or_default(),
        _ => String::new(),
    }
}
