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

use clap::{CommandFactory, Parser};

use super::*;

const TEST_DATACENTER_ID: &str = "00000000-0000-0000-0000-000000000001";
const TEST_SERVER_ID: &str = "00000000-0000-0000-0000-000000000002";
const TEST_NIC_ID: &str = "00000000-0000-0000-0000-000000000005";

#[test]
fn verify_cmd_structure() {
    Cmd::command().debug_assert();
}

// parse_list_requires_server_scope ensures list needs both the
// datacenter and the server.
#[test]
fn parse_list_requires_server_scope() {
    let result = Cmd::try_parse_from(["nic", "list", "-i", TEST_DATACENTER_ID]);
    assert!(result.is_err(), "should fail without --server-id");
}

// parse_create_defaults ensures create applies lan/dhcp defaults.
#[test]
fn parse_create_defaults() {
    let cmd = Cmd::try_parse_from([
        "nic",
        "create",
        "-i",
        TEST_DATACENTER_ID,
        "-s",
        TEST_SERVER_ID,
    ])
    .expect("should parse create");

    match cmd {
        Cmd::Create(args) => {
            assert_eq!(args.lan, 1);
            assert!(args.dhcp);
            assert!(args.ips.is_none());
        }
        _ => panic!("expected Create variant"),
    }
}

// parse_update_dhcp_off ensures update parses an explicit dhcp value.
#[test]
fn parse_update_dhcp_off() {
    let cmd = Cmd::try_parse_from([
        "nic",
        "update",
        "-i",
        TEST_DATACENTER_ID,
        "-s",
        TEST_SERVER_ID,
        "--nic-id",
        TEST_NIC_ID,
        "--dhcp",
        "false",
    ])
    .expect("should parse update");

    match cmd {
        Cmd::Update(args) => {
            assert_eq!(args.dhcp, Some(false));
            assert_eq!(args.nic_id.to_string(), TEST_NIC_ID);
        }
        _ => panic!("expected Update variant"),
    }
}

// parse_delete_requires_nic_id ensures delete needs the NIC ID.
#[test]
fn parse_delete_requires_nic_id() {
    let result = Cmd::try_parse_from([
        "nic",
        "delete",
        "-i",
        TEST_DATACENTER_ID,
        "-s",
        TEST_SERVER_ID,
    ]);
    assert!(result.is_err(), "should fail without --nic-id");
}
