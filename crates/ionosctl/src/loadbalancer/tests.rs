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
const TEST_LOADBALANCER_ID: &str = "00000000-0000-0000-0000-000000000006";
const TEST_NIC_ID: &str = "00000000-0000-0000-0000-000000000005";

#[test]
fn verify_cmd_structure() {
    Cmd::command().debug_assert();
}

// parse_create_dhcp_default ensures create keeps DHCP on by default.
#[test]
fn parse_create_dhcp_default() {
    let cmd = Cmd::try_parse_from(["loadbalancer", "create", "-i", TEST_DATACENTER_ID])
        .expect("should parse create");

    match cmd {
        Cmd::Create(args) => {
            assert!(args.dhcp);
            assert!(args.ip.is_none());
        }
        _ => panic!("expected Create variant"),
    }
}

// parse_nic_attach ensures the nested nic group parses all IDs.
#[test]
fn parse_nic_attach() {
    let cmd = Cmd::try_parse_from([
        "loadbalancer",
        "nic",
        "attach",
        "-i",
        TEST_DATACENTER_ID,
        "-l",
        TEST_LOADBALANCER_ID,
        "--nic-id",
        TEST_NIC_ID,
    ])
    .expect("should parse nic attach");

    match cmd {
        Cmd::Nic(nic::Cmd::Attach(args)) => {
            assert_eq!(args.loadbalancer_id.to_string(), TEST_LOADBALANCER_ID);
            assert_eq!(args.nic_id.to_string(), TEST_NIC_ID);
        }
        _ => panic!("expected Nic Attach variant"),
    }
}

// parse_delete_requires_id_or_all ensures delete needs a selector.
#[test]
fn parse_delete_requires_id_or_all() {
    let result = Cmd::try_parse_from(["loadbalancer", "delete", "-i", TEST_DATACENTER_ID]);
    assert!(
        result.is_err(),
        "should fail without --loadbalancer-id or --all"
    );
}
