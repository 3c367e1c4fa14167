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

use super::args;
use crate::cfg::runtime::RuntimeContext;
use crate::image::common as image_common;
use crate::rest::not_found;
use crate::{async_write, async_writeln, cols, confirm};

pub async fn attach(args: args::Attach, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
    let attached = ctx
        .api_client
        .0
        .attach_cdrom(
            &args.datacenter_id.to_string(),
            &args.server_id.to_string(),
            &args.cdrom_id.to_string(),
        )
        .await?;
    args.wait
        .track(&ctx.api_client, attached.request.as_ref())
        .await?;

    if ctx.config.quiet {
        return Ok(());
    }
    if ctx.config.format == OutputFormat::Json {
        async_writeln!(
            ctx.output_file,
            "{}",
            serde_json::to_string_pretty(&attached.value)?
        )?;
    } else {
        let id = attached.value.id.unwrap_or_default();
        async_writeln!(ctx.output_file, "CDROM {id} attached")?;
    }
    Ok(())
}

pub async fn list(args: args::List, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
    let cdroms = ctx
        .api_client
        .0
        .list_cdroms(
            &args.datacenter_id.to_string(),
            &args.server_id.to_string(),
            &ListParams::depth(ctx.config.depth),
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
                serde_json::to_string_pretty(&cdroms)?
            )?;
        }
        OutputFormat::AsciiTable => {
            let cols = cols::resolve_cols(
                ctx.config.cols.as_deref(),
                image_common::COLS,
                image_common::DEFAULT_COLS,
            )?;
            let table = image_common::table(cdroms.items(), &cols);
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
    let cdrom_id = args.cdrom_id.to_string();
    let cdrom = ctx
        .api_client
        .0
        .get_cdrom(
            &args.datacenter_id.to_string(),
            &args.server_id.to_string(),
            &cdrom_id,
            &ListParams::depth(ctx.config.depth),
        )
        .await
        .map_err(not_found("cdrom", &cdrom_id))?;

    if ctx.config.quiet {
        return Ok(());
    }
    match ctx.config.format {
        OutputFormat::Json => {
            async_writeln!(ctx.output_file, "{}", serde_json::to_string_pretty(&cdrom)?)?;
        }
        OutputFormat::AsciiTable => {
            let detail = image_common::detail(&cdrom)?;
            async_write!(ctx.output_file, "{}", detail)?;
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
    let cdrom_id = args.cdrom_id.to_string();
    confirm::confirm(&format!("detach CDROM {cdrom_id}"), ctx.config.force)?;

    let request = ctx
        .api_client
        .0
        .detach_cdrom(
            &args.datacenter_id.to_string(),
            &args.server_id.to_string(),
            &cdrom_id,
        )
        .await?;
    args.wait.track(&ctx.api_client, request.as_ref()).await?;

    if !ctx.config.quiet {
        async_writeln!(ctx.output_file, "CDROM {cdrom_id} detached")?;
    }
    Ok(())
}
