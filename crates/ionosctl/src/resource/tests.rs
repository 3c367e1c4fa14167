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
use crate::resource::args::ResourceType;

const TEST_RESOURCE_ID: &str = "00000000-0000-0000-0000-00000000000a";

#[test]
fn verify_cmd_structure() {
    Cmd::command().debug_assert();
}

// parse_list_all ensures list works without a type restriction.
#[test]
fn parse_list_all() {
    let cmd = Cmd::try_parse_from(["resource", "list"]).expect("should parse list");

    match cmd {
        Cmd::List(args) => assert!(args.resource_type.is_none()),
        _ => panic!("expected List variant"),
    }
}

// parse_list_by_type ensures the type restriction parses.
#[test]
fn parse_list_by_type() {
    let cmd =
        Cmd::try_parse_from(["resource", "list", "--type", "ipblock"]).expect("should parse list");

    match cmd {
        Cmd::List(args) => assert_eq!(args.resource_type, Some(ResourceType::Ipblock)),
        _ => panic!("expected List variant"),
    }
}

// parse_get_requires_type ensures get needs both type and ID.
#[test]
fn parse_get_requires_type() {
    let result = Cmd::try_parse_from(["resource", "get", "-i", TEST_RESOURCE_ID]);
    assert!(result.is_err(), "should fail without --type");
}

// parse_get_rejects_unknown_type ensures the type enum is closed.
#[test]
fn parse_get_rejects_unknown_type() {
    let result = Cmd::try_parse_from([
        "resource",
        "get",
        "--type",
        "volume",
        "-i",
        TEST_RESOURCE_ID,
    ]);
    assert!(result.is_err(), "volume is not a resource type");
}
