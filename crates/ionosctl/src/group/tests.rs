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

const TEST_GROUP_ID: &str = "00000000-0000-0000-0000-000000000008";
const TEST_USER_ID: &str = "00000000-0000-0000-0000-000000000009";

#[test]
fn verify_cmd_structure() {
    Cmd::command().debug_assert();
}

// parse_create ensures create parses the privilege flags.
#[test]
fn parse_create() {
    let cmd = Cmd::try_parse_from([
        "group",
        "create",
        "--name",
        "operators",
        "--create-datacenter",
        "--reserve-ip",
    ])
    .expect("should parse create");

    match cmd {
        Cmd::Create(args) => {
            assert_eq!(args.name, "operators");
            assert!(args.create_datacenter);
            assert!(args.reserve_ip);
            assert!(!args.create_snapshot);
        }
        _ => panic!("expected Create variant"),
    }
}

// parse_create_requires_name ensures create needs --name.
#[test]
fn parse_create_requires_name() {
    let result = Cmd::try_parse_from(["group", "create"]);
    assert!(result.is_err(), "should fail without --name");
}

// parse_user_add ensures the nested user group parses both IDs.
#[test]
fn parse_user_add() {
    let cmd = Cmd::try_parse_from([
        "group",
        "user",
        "add",
        "-i",
        TEST_GROUP_ID,
        "-u",
        TEST_USER_ID,
    ])
    .expect("should parse user add");

    match cmd {
        Cmd::User(user::Cmd::Add(args)) => {
            assert_eq!(args.group_id.to_string(), TEST_GROUP_ID);
            assert_eq!(args.user_id.to_string(), TEST_USER_ID);
        }
        _ => panic!("expected User Add variant"),
    }
}

// parse_user_remove_requires_user ensures remove needs --user-id.
#[test]
fn parse_user_remove_requires_user() {
    let result = Cmd::try_parse_from(["group", "user", "remove", "-i", TEST_GROUP_ID]);
    assert!(result.is_err(), "should fail without --user-id");
}
