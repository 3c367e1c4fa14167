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

use ionoscloud::models::compute::Server;
use prettytable::{Cell, Row, Table};

pub const FILTER_KEYS: &[&str] = &[
    "name",
    "cores",
    "ram",
    "availabilityZone",
    "vmState",
    "cpuFamily",
];

pub const COLS: &[&str] = &[
    "ServerId",
    "Name",
    "Cores",
    "Ram",
    "AvailabilityZone",
    "VmState",
    "CpuFamily",
    "BootCdromId",
    "BootVolumeId",
    "State",
];

pub const DEFAULT_COLS: &[&str] = &["ServerId", "Name", "Cores", "Ram", "VmState", "State"];

pub fn table(servers: &[Server], cols: &[String]) -> Table {
    let mut table = Table::new();
    table.set_titles(Row::new(cols.iter().map(|col| Cell::new(col)).collect()));
    for server in servers {
        table.add_row(Row::new(
            cols.iter().map(|col| Cell::new(&cell(server, col))).collect(),
        ));
    }
    table
}

pub fn cell(server: &Server, col: &str) -> String {
    let properties = server.properties.as_ref();
    match col {
        "ServerId" => server.id.clone().unwrap_or_default(),
        "Name" => properties.and_then(|p| p.name.clone()).unwrap_or_default(),
        "Cores" => properties
            .and_then(|p| p.cores)
            .map(|cores| cores.to_string())
            .unwrap_or_default(),
        "Ram" => properties
            .and_then(|p| p.ram)
            .map(|ram| format!("{ram} MB"))
            .unwrap_or_default(),
        "AvailabilityZone" => properties
            .and_then(|p| p.availability_zone.clone())
            .unwrap_or_default(),
        "VmState" => properties
            .and_then(|p| p.vm_state.clone())
            .unwrap_or_default(),
        "CpuFamily" => properties
            .and_then(|p| p.cpu_family.clone())
            .unwrap_or_default(),
        "BootCdromId" => properties
            .and_then(|p| p.boot_cdrom.as_ref())
            .and_then(|boot| boot.id.clone())
            .unwrap_or_default(),
        "BootVolumeId" => properties
            .and_then(|p| p.boot_volume.as_ref())
            .and_then(|boot| boot.id.clone())
            .unwrap_or_default(),
        "State" => server
            .metadata
            .as_ref()
            .and_then(|m| m.state.clone())
            .unwrap_or_default(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use ionoscloud::models::IdRef;
    use ionoscloud::models::compute::ServerProperties;

    use super::*;

    #[test]
    fn cell_maps_every_column() {
        let server = Server {
            id: Some("srv-1".to_string()),
            kind: None,
            href: None,
            metadata: None,
            properties: Some(ServerProperties {
                name: Some("web-1".to_string()),
                cores: Some(4),
                ram: Some(4096),
                vm_state: Some("RUNNING".to_string()),
                boot_volume: Some(IdRef::new("vol-9")),
                ..Default::default()
            }),
        };

        assert_eq!(cell(&server, "ServerId"), "srv-1");
        assert_eq!(cell(&server, "Name"), "web-1");
        assert_eq!(cell(&server, "Cores"), "4");
        assert_eq!(cell(&server, "Ram"), "4096 MB");
        assert_eq!(cell(&server, "VmState"), "RUNNING");
        assert_eq!(cell(&server, "BootVolumeId"), "vol-9");
        // unset property renders empty
        assert_eq!(cell(&server, "CpuFamily"), "");
    }
}
