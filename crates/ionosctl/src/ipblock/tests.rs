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

const TEST_IPBLOCK_ID: &str = "00000000-0000-0000-0000-000000000007";

#[test]
fn verify_cmd_structure() {
    Cmd::command().debug_assert();
}

// parse_create_size_default ensures create reserves a single IP by
// default.
#[test]
fn parse_create_size_default() {
    let cmd = Cmd::try_parse_from(["ipblock", "create", "--location", "de/fra"])
        .expect("should parse create");

    match cmd {
        Cmd::Create(args) => {
            assert_eq!(args.size, 1);
            assert_eq!(args.location, "de/fra");
        }
        _ => panic!("expected Create variant"),
    }
}

// parse_delete_all parses the bulk selector.
#[test]
fn parse_delete_all() {
    let cmd = Cmd::try_parse_from(["ipblock", "delete", "--all"]).expect("should parse delete");

    match cmd {
        Cmd::Delete(args) => {
            assert!(args.all);
            assert!(args.ipblock_id.is_none());
        }
        _ => panic!("expected Delete variant"),
    }
}

// parse_get ensures get parses the IP block ID.
#[test]
fn parse_get() {
    let cmd =
        Cmd::try_parse_from(["ipblock", "get", "-i", TEST_IPBLOCK_ID]).expect("should parse get");

    match cmd {
        Cmd::Get(args) => assert_eq!(args.ipblock_id.to_string(), TEST_IPBLOCK_ID),
        _ => panic!("expected Get variant"),
    }
}
