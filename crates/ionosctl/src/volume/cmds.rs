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
use ionoscloud::models::compute::{Volume, VolumeProperties};
use prettytable::{Cell, Row, Table};

use super::args;
use crate::cfg::runtime::RuntimeContext;
use crate::rest::not_found;
use crate::{async_write, async_writeln, cols, confirm};

pub const FILTER_KEYS: &[&str] = &[
    "name",
    "size",
    "type",
    "bus",
    "licenceType",
    "availabilityZone",
];

pub const COLS: &[&str] = &[
    "VolumeId",
    "Name",
    "Size",
    "Type",
    "Bus",
    "LicenceType",
    "Image",
    "AvailabilityZone",
    "DeviceNumber",
    "State",
];

pub const DEFAULT_COLS: &[&str] = &["VolumeId", "Name", "Size", "Type", "LicenceType", "State"];

pub async fn list(args: args::List, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
    let params = args.list.to_params(FILTER_KEYS, ctx.config.depth)?;
    let volumes = ctx
        .api_client
        .0
        .list_volumes(&args.datacenter_id.to_string(), &params)
        .await?;

    if ctx.config.quiet {
        return Ok(());
    }
    match ctx.config.format {
        OutputFormat::Json => {
            async_writeln!(
                ctx.output_file,
                "{}",
                serde_json::to_string_pretty(&volumes)?
            )?;
        }
        OutputFormat::AsciiTable => {
            let cols = cols::resolve_cols(ctx.config.cols.as_deref(), COLS, DEFAULT_COLS)?;
            let table = to_table(volumes.items(), &cols);
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
    let volume_id = args.volume_id.to_string();
    let volume = ctx
        .api_client
        .0
        .get_volume(
            &args.datacenter_id.to_string(),
            &volume_id,
            &ListParams::depth(ctx.config.depth),
        )
        .await
        .map_err(not_found("volume", &volume_id))?;

    if ctx.config.quiet {
        return Ok(());
    }
    match ctx.config.format {
        OutputFormat::Json => {
            async_writeln!(
                ctx.output_file,
                "{}",
                serde_json::to_string_pretty(&volume)?
            )?;
        }
        OutputFormat::AsciiTable => {
            let width = 25;
            let mut lines = String::new();
            for col in COLS {
                writeln!(&mut lines, "{col:<width$}: {}", cell(&volume, col))?;
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
    let properties = VolumeProperties {
        name: args.name,
        volume_type: Some(args.volume_type),
        size: Some(args.size),
        bus: args.bus,
        availability_zone: args.availability_zone,
        licence_type: args.licence_type,
        image: args.image,
        image_password: args.image_password,
        ..Default::default()
    };
    let created = ctx
        .api_client
        .0
        .create_volume(&args.datacenter_id.to_string(), properties)
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
        async_writeln!(ctx.output_file, "Volume {id} created")?;
    }
    Ok(())
}

pub async fn update(args: args::Update, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
    let volume_id = args.volume_id.to_string();
    let properties = VolumeProperties {
        name: args.name,
        size: args.size,
        bus: args.bus,
        ..Default::default()
    };
    let updated = ctx
        .api_client
        .0
        .update_volume(&args.datacenter_id.to_string(), &volume_id, properties)
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
        async_writeln!(ctx.output_file, "Volume {volume_id} updated")?;
    }
    Ok(())
}

pub async fn delete(args: args::Delete, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
    let datacenter_id = args.datacenter_id.to_string();
    if args.all {
        return delete_all(args, ctx).await;
    }
    let Some(volume_id) = args.volume_id else {
        return Err(IonosCliError::GenericError(
            "either --volume-id or --all is required".to_string(),
        ));
    };
    let volume_id = volume_id.to_string();

    confirm::confirm(&format!("delete volume {volume_id}"), ctx.config.force)?;
    let request = ctx
        .api_client
        .0
        .delete_volume(&datacenter_id, &volume_id)
        .await?;
    args.wait.track(&ctx.api_client, request.as_ref()).await?;

    if !ctx.config.quiet {
        async_writeln!(ctx.output_file, "Volume {volume_id} deleted")?;
    }
    Ok(())
}

async fn delete_all(args: args::Delete, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
    let datacenter_id = args.datacenter_id.to_string();
    let volumes = ctx
        .api_client
        .0
        .list_volumes(&datacenter_id, &ListParams::depth(1))
        .await?;
    let items = volumes.items();
    if items.is_empty() {
        if !ctx.config.quiet {
            async_writeln!(ctx.output_file, "No volumes to delete")?;
        }
        return Ok(());
    }

    confirm::confirm(
        &format!(
            "delete all {} volumes of datacenter {datacenter_id}",
            items.len()
        ),
        ctx.config.force,
    )?;

    let mut failures = BulkError::default();
    for volume in items {
        let Some(id) = volume.id.as_deref() else {
            continue;
        };
        match ctx.api_client.0.delete_volume(&datacenter_id, id).await {
            Ok(request) => {
                if let Err(err) = args.wait.track(&ctx.api_client, request.as_ref()).await {
                    failures.push(id, err);
                    continue;
                }
                if !ctx.config.quiet {
                    async_writeln!(ctx.output_file, "Volume {id} deleted")?;
                }
            }
            Err(err) => failures.push(id, err),
        }
    }
    failures.into_result()
}

pub async fn attach(args: args::Attach, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
    let volume_id = args.volume_id.to_string();
    let attached = ctx
        .api_client
        .0
        .attach_volume(
            &args.datacenter_id.to_string(),
            &args.server_id.to_string(),
            &volume_id,
        )
        .await?;
    args.wait
        .track(&ctx.api_client, attached.request.as_ref())
        .await?;

    if !ctx.config.quiet {
        async_writeln!(
            ctx.output_file,
            "Volume {volume_id} attached to server {}",
            args.server_id
        )?;
    }
    Ok(())
}

pub async fn detach(args: args::Detach, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
    let volume_id = args.volume_id.to_string();
    confirm::confirm(
        &format!("detach volume {volume_id} from server {}", args.server_id),
        ctx.config.force,
    )?;

    let request = ctx
        .api_client
        .0
        .detach_volume(
            &args.datacenter_id.to_string(),
            &args.server_id.to_string(),
            &volume_id,
        )
        .await?;
    args.wait.track(&ctx.api_client, request.as_ref()).await?;

    if !ctx.config.quiet {
        async_writeln!(ctx.output_file, "Volume {volume_id} detached")?;
    }
    Ok(())
}

fn to_table(volumes: &[Volume], cols: &[String]) -> Table {
    let mut table = Table::new();
    table.set_titles(Row::new(cols.iter().map(|col| Cell::new(col)).collect()));
    for volume in volumes {
        table.add_row(Row::new(
            cols.iter().map(|col| Cell::new(&cell(volume, col))).collect(),
        ));
    }
    table
}

fn cell(volume: &Volume, col: &str) -> String {
    let properties = volume.properties.as_ref();
    match col {
        "VolumeId" => volume.id.clone().unwrap_or_default(),
        "Name" => properties.and_then(|p| p.name.clone()).unwrap_or_default(),
        "Size" => properties
            .and_then(|p| p.size)
            .map(|size| format!("{size} GB"))
            .unwrap_or_default(),
        "Type" => properties
            .and_then(|p| p.volume_type.clone())
            .unwrap_or_default(),
        "Bus" => properties.and_then(|p| p.bus.clone()).unwrap_or_default(),
        "LicenceType" => properties
            .and_then(|p| p.licence_type.clone())
            .unwrap_or_default(),
        "Image" => properties.and_then(|p| p.image.clone()).unwrap_or_default(),
        "AvailabilityZone" => properties
            .and_then(|p| p.availability_zone.clone())
            .unwrap_or_default(),
        "DeviceNumber" => properties
            .and_then(|p| p.device_number)
            .map(|n| n.to_string())
            .unwrap_or_default(),
        "State" => volume
            .metadata
            .as_ref()
            .and_then(|m| m.state.clone())
            .unwrap_or_default(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_formats_size_and_device_number() {
        let volume = Volume {
            id: Some("vol-1".to_string()),
            kind: None,
            href: None,
            metadata: None,
            properties: Some(VolumeProperties {
                size: Some(50.0),
                device_number: Some(3),
                volume_type: Some("SSD".to_string()),
                ..Default::default()
            }),
        };
        assert_eq!(cell(&volume, "Size"), "50 GB");
        assert_eq!(cell(&volume, "DeviceNumber"), "3");
        assert_eq!(cell(&volume, "Type"), "SSD");
        assert_eq!(cell(&volume, "Bus"), "");
    }
}
