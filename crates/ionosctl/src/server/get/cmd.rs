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

use ionoscloud::cli::{IonosCliError, IonosCliResult, OutputFormat};

use super::args::Args;
use crate::cfg::runtime::RuntimeContext;
use crate::server::common;
use crate::{async_write, async_writeln};

pub async fn get(args: Args, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
    let server = ctx
        .api_client
        .get_server(
            &args.datacenter_id.to_string(),
            &args.server_id.to_string(),
            ctx.config.depth,
        )
        .await?;

    if ctx.config.quiet {
        return Ok(());
    }
    match ctx.config.format {
        OutputFormat::Json => {
            async_writeln!(
                ctx.output_file,
                "{}",
                serde_json::to_string_pretty(&server)?
            )?;
        }
        OutputFormat::AsciiTable => {
            let width = 25;
            let mut lines = String::new();
            for col in common::COLS {
                writeln!(
                    &mut lines,
                    "{col:<width$}: {}",
                    common::cell(&server, col)
                )?;
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
