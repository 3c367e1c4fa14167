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

use ionoscloud::cli::IonosCliResult;
use ionoscloud::models::compute::Datacenter;
use prettytable::{Cell, Row, Table};

/// Property keys accepted by --filters and --order-by.
pub const FILTER_KEYS: &[&str] = &["name", "description", "location", "version"];

pub const COLS: &[&str] = &[
    "DatacenterId",
    "Name",
    "Location",
    "Description",
    "Version",
    "Features",
    "State",
];

pub const DEFAULT_COLS: &[&str] = &["DatacenterId", "Name", "Location", "Version", "State"];

pub fn table(datacenters: &[Datacenter], cols: &[String]) -> Table {
    let mut table = Table::new();
    table.set_titles(Row::new(cols.iter().map(|col| Cell::new(col)).collect()));
    for datacenter in datacenters {
        table.add_row(Row::new(
            cols.iter()
                .map(|col| Cell::new(&cell(datacenter, col)))
                .collect(),
        ));
    }
    table
}

fn cell(datacenter: &Datacenter, col: &str) -> String {
    let properties = datacenter.properties.as_ref();
    match col {
        "DatacenterId" => datacenter.id.clone().unwrap_or_default(),
        "Name" => properties
            .and_then(|p| p.name.clone())
            .unwrap_or_default(),
        "Location" => properties
            .and_then(|p| p.location.clone())
            .unwrap_or_default(),
        "Description" => properties
            .and_then(|p| p.description.clone())
            .unwrap_or_default(),
        "Version" => properties
            .and_then(|p| p.version)
            .map(|version| version.to_string())
            .unwrap_or_default(),
        "Features" => properties
            .and_then(|p| p.features.as_ref())
            .map(|features| features.join(", "))
            .unwrap_or_default(),
        "State" => datacenter
            .metadata
            .as_ref()
            .and_then(|m| m.state.clone())
            .unwrap_or_default(),
        _ => String::new(),
    }
}

pub fn detail(datacenter: &Datacenter) -> IonosCliResult<String> {
    let width = 25;
    let mut lines = String::new();
    let properties = datacenter.properties.as_ref();

    let data = [
        ("ID", datacenter.id.clone().unwrap_or_default()),
        (
            "NAME",
            properties.and_then(|p| p.name.clone()).unwrap_or_default(),
        ),
        (
            "DESCRIPTION",
            properties
                .and_then(|p| p.description.clone())
                .unwrap_or_default(),
        ),
        (
            "LOCATION",
            properties
                .and_then(|p| p.location.clone())
                .unwrap_or_default(),
        ),
        (
            "VERSION",
            properties
                .and_then(|p| p.version)
                .map(|version| version.to_string())
                .unwrap_or_default(),
        ),
        (
            "FEATURES",
            properties
                .and_then(|p| p.features.as_ref())
                .map(|features| features.join(", "))
                .unwrap_or_default(),
        ),
        (
            "STATE",
            datacenter
                .metadata
                .as_ref()
                .and_then(|m| m.state.clone())
                .unwrap_or_default(),
        ),
    ];

    for (key, value) in data {
        writeln!(&mut lines, "{key:<width$}: {value}")?;
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use ionoscloud::models::ResourceMeta;
    use ionoscloud::models::compute::DatacenterProperties;

    use super::*;

    fn sample() -> Datacenter {
        Datacenter {
            id: Some("dc-1".to_string()),
            kind: Some("datacenter".to_string()),
            href: None,
            metadata: Some(ResourceMeta {
                state: Some("AVAILABLE".to_string()),
                ..Default::default()
            }),
            properties: Some(DatacenterProperties {
                name: Some("backend".to_string()),
                location: Some("us/las".to_string()),
                version: Some(12),
                ..Default::default()
            }),
        }
    }

    #[test]
    fn table_maps_requested_cols() {
        let cols: Vec<String> = ["DatacenterId", "Name", "State"]
            .iter()
            .map(|c| c.to_string())
            .collect();
        let rendered = table(&[sample()], &cols).to_string();
        assert!(rendered.contains("dc-1"));
        assert!(rendered.contains("backend"));
        assert!(rendered.contains("AVAILABLE"));
        // not requested
        assert!(!rendered.contains("us/las"));
    }

    #[test]
    fn detail_lists_every_field() {
        let text = detail(&sample()).expect("detail");
        assert!(text.contains("ID"));
        assert!(text.contains("dc-1"));
        assert!(text.contains("us/las"));
        assert!(text.contains("12"));
    }
}
