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
const TEST_VOLUME_ID: &str = "00000000-0000-0000-0000-000000000004";

#[test]
fn verify_cmd_structure() {
    Cmd::command().debug_assert();
}

// parse_create ensures create parses with a size and the HDD default.
#[test]
fn parse_create() {
    let cmd = Cmd::try_parse_from([
        "volume",
        "create",
        "-i",
        TEST_DATACENTER_ID,
        "--size",
        "50",
    ])
    .expect("should parse create");

    match cmd {
        Cmd::Create(args) => {
            assert_eq!(args.size, 50.0);
            assert_eq!(args.volume_type, "HDD");
            assert!(args.licence_type.is_none());
        }
        _ => panic!("expected Create variant"),
    }
}

// parse_create_requires_size ensures create needs --size.
#[test]
fn parse_create_requires_size() {
    let result = Cmd::try_parse_from(["volume", "create", "-i", TEST_DATACENTER_ID]);
    assert!(result.is_err(), "should fail without --size");
}

// parse_attach ensures attach parses all three IDs.
#[test]
fn parse_attach() {
    let cmd = Cmd::try_parse_from([
        "volume",
        "attach",
        "-i",
        TEST_DATACENTER_ID,
        "-s",
        TEST_SERVER_ID,
        "--volume-id",
        TEST_VOLUME_ID,
    ])
    .expect("should parse attach");

    match cmd {
        Cmd::Attach(args) => {
            assert_eq!(args.server_id.to_string(), TEST_SERVER_ID);
            assert_eq!(args.volume_id.to_string(), TEST_VOLUME_ID);
        }
        _ => panic!("expected Attach variant"),
    }
}

// parse_delete_all_conflicts_with_id ensures the selectors are
// mutually exclusive.
#[test]
fn parse_delete_all_conflicts_with_id() {
    let result = Cmd::try_parse_from([
        "volume",
        "delete",
        "-i",
        TEST_DATACENTER_ID,
        "--volume-id",
        TEST_VOLUME_ID,
        "--all",
    ]);
    assert!(result.is_err(), "--volume-id and --all should conflict");
}
