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

// parse_create ensures create parses with the protocol and port range.
#[test]
fn parse_create() {
    let cmd = Cmd::try_parse_from([
        "firewallrule",
        "create",
        "-i",
        TEST_DATACENTER_ID,
        "-s",
        TEST_SERVER_ID,
        "--nic-id",
        TEST_NIC_ID,
        "--protocol",
        "TCP",
        "--port-range-start",
        "22",
        "--port-range-end",
        "22",
    ])
    .expect("should parse create");

    match cmd {
        Cmd::Create(args) => {
            assert_eq!(args.protocol, "TCP");
            assert_eq!(args.port_range_start, Some(22));
            assert_eq!(args.port_range_end, Some(22));
        }
        _ => panic!("expected Create variant"),
    }
}

// parse_create_requires_protocol ensures create needs --protocol.
#[test]
fn parse_create_requires_protocol() {
    let result = Cmd::try_parse_from([
        "firewallrule",
        "create",
        "-i",
        TEST_DATACENTER_ID,
        "-s",
        TEST_SERVER_ID,
        "--nic-id",
        TEST_NIC_ID,
    ]);
    assert!(result.is_err(), "should fail without --protocol");
}

// parse_list_requires_nic_scope ensures list needs the full scope.
#[test]
fn parse_list_requires_nic_scope() {
    let result = Cmd::try_parse_from([
        "firewallrule",
        "list",
        "-i",
        TEST_DATACENTER_ID,
        "-s",
        TEST_SERVER_ID,
    ]);
    assert!(result.is_err(), "should fail without --nic-id");
}
