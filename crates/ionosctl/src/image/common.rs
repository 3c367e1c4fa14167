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

//! Image table mapping, also used for the CDROM attachments of a
//! server (attachments are catalog images of type CDROM).

use std::fmt::Write;

use ionoscloud::cli::IonosCliResult;
use ionoscloud::models::image::Image;
use prettytable::{Cell, Row, Table};

pub const FILTER_KEYS: &[&str] = &[
    "name",
    "location",
    "size",
    "imageType",
    "licenceType",
    "public",
];

pub const COLS: &[&str] = &[
    "ImageId",
    "Name",
    "Location",
    "Size",
    "ImageType",
    "LicenceType",
    "Public",
    "State",
];

pub const DEFAULT_COLS: &[&str] = &[
    "ImageId",
    "Name",
    "Location",
    "Size",
    "ImageType",
    "LicenceType",
];

pub fn table(images: &[Image], cols: &[String]) -> Table {
    let mut table = Table::new();
    table.set_titles(Row::new(cols.iter().map(|col| Cell::new(col)).collect()));
    for image in images {
        table.add_row(Row::new(
            cols.iter().map(|col| Cell::new(&cell(image, col))).collect(),
        ));
    }
    table
}

fn cell(image: &Image, col: &str) -> String {
    let properties = image.properties.as_ref();
    match col {
        "ImageId" => image.id.clone().unwrap_or_default(),
        "Name" => properties.and_then(|p| p.name.clone()).unwrap_or_default(),
        "Location" => properties
            .and_then(|p| p.location.clone())
            .unwrap_or_default(),
        "Size" => properties
            .and_then(|p| p.size)
            .map(|size| format!("{size} GB"))
            .unwrap_or_default(),
        "ImageType" => properties
            .and_then(|p| p.image_type.clone())
            .unwrap_or_default(),
        "LicenceType" => properties
            .and_then(|p| p.licence_type.clone())
            .unwrap_or_default(),
        "Public" => properties
            .and_then(|p| p.public)
            .map(|public| public.to_string())
            .unwrap_or_default(),
        "State" => image
            .metadata
            .as_ref()
            .and_then(|m| m.state.clone())
            .unwrap_or_default(),
        _ => String::new(),
    }
}

pub fn detail(image: &Image) -> IonosCliResult<String> {
    let width = 25;
    let mut lines = String::new();
    for col in COLS {
        writeln!(&mut lines, "{col:<width$}: {}", cell(image, col))?;
    }
    Ok(lines)
}
