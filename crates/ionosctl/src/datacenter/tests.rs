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

// The intent of the tests.rs file is to test the integrity of the
// command, including things like basic structure parsing, enum
// translations, and any external input validators that are
// configured. Specific "categories" are:
//
// Command Structure - Baseline debug_assert() of the entire command.
// Argument Parsing  - Ensure required/optional arg combinations parse correctly.

use clap::{CommandFactory, Parser};

use super::*;

const TEST_DATACENTER_ID: &str = "00000000-0000-0000-0000-000000000001";

// verify_cmd_structure runs a baseline clap debug_assert()
// to do basic command configuration checking and validation,
// ensuring things like unique argument definitions, group
// configurations, argument references, etc. Things that would
// otherwise be missed until runtime.
#[test]
fn verify_cmd_structure() {
    Cmd::command().debug_assert();
}

/////////////////////////////////////////////////////////////////////////////
// Argument Parsing
//
// This section contains tests specific to argument parsing,
// including testing required arguments, as well as optional
// flag-specific checking.

// parse_list_no_args ensures list parses with no arguments.
#[test]
fn parse_list_no_args() {
    let cmd = Cmd::try_parse_from(["datacenter", "list"]).expect("should parse list");

    match cmd {
        Cmd::List(args) => {
            assert!(args.list.filters.is_none());
            assert!(args.list.order_by.is_none());
            assert!(args.list.max_results.is_none());
        }
        _ => panic!("expected List variant"),
    }
}

// parse_list_with_query_flags ensures list parses filters,
// order-by and max-results.
#[test]
fn parse_list_with_query_flags() {
    let cmd = Cmd::try_parse_from([
        "datacenter",
        "list",
        "--filters",
        "name=backend,location=us/las",
        "--order-by",
        "name",
        "--max-results",
        "10",
    ])
    .expect("should parse list with query flags");

    match cmd {
        Cmd::List(args) => {
            assert_eq!(
                args.list.filters,
                Some(vec!["name=backend".to_string(), "location=us/las".to_string()])
            );
            assert_eq!(args.list.order_by, Some("name".to_string()));
            assert_eq!(args.list.max_results, Some(10));
        }
        _ => panic!("expected List variant"),
    }
}

// parse_get ensures get parses with the datacenter ID.
#[test]
fn parse_get() {
    let cmd = Cmd::try_parse_from(["datacenter", "get", "-i", TEST_DATACENTER_ID])
        .expect("should parse get");

    match cmd {
        Cmd::Get(args) => assert_eq!(args.datacenter_id.to_string(), TEST_DATACENTER_ID),
        _ => panic!("expected Get variant"),
    }
}

// parse_get_missing_id_fails ensures get requires --datacenter-id.
#[test]
fn parse_get_missing_id_fails() {
    let result = Cmd::try_parse_from(["datacenter", "get"]);
    assert!(result.is_err(), "should fail without --datacenter-id");
}

// parse_get_invalid_uuid_fails ensures malformed IDs are rejected
// at parse time.
#[test]
fn parse_get_invalid_uuid_fails() {
    let result = Cmd::try_parse_from(["datacenter", "get", "-i", "not-a-uuid"]);
    assert!(result.is_err(), "should fail with invalid UUID");
}

// parse_create ensures create parses with location and optional name.
#[test]
fn parse_create() {
    let cmd = Cmd::try_parse_from([
        "datacenter",
        "create",
        "--location",
        "de/txl",
        "--name",
        "staging",
        "--wait-for-request",
    ])
    .expect("should parse create");

    match cmd {
        Cmd::Create(args) => {
            assert_eq!(args.location, "de/txl");
            assert_eq!(args.name, Some("staging".to_string()));
            assert!(args.wait.wait_for_request);
            assert_eq!(args.wait.timeout, 60); // default
        }
        _ => panic!("expected Create variant"),
    }
}

// parse_create_missing_location_fails ensures create requires
// --location.
#[test]
fn parse_create_missing_location_fails() {
    let result = Cmd::try_parse_from(["datacenter", "create", "--name", "staging"]);
    assert!(result.is_err(), "should fail without --location");
}

// parse_delete_by_id ensures delete parses with an ID.
#[test]
fn parse_delete_by_id() {
    let cmd = Cmd::try_parse_from(["datacenter", "delete", "-i", TEST_DATACENTER_ID])
        .expect("should parse delete");

    match cmd {
        Cmd::Delete(args) => {
            assert_eq!(
                args.datacenter_id.map(|id| id.to_string()),
                Some(TEST_DATACENTER_ID.to_string())
            );
            assert!(!args.all);
        }
        _ => panic!("expected Delete variant"),
    }
}

// parse_delete_all ensures delete parses with --all.
#[test]
fn parse_delete_all() {
    let cmd = Cmd::try_parse_from(["datacenter", "delete", "--all"]).expect("should parse delete");

    match cmd {
        Cmd::Delete(args) => {
            assert!(args.all);
            assert!(args.datacenter_id.is_none());
        }
        _ => panic!("expected Delete variant"),
    }
}

// parse_delete_requires_id_or_all ensures delete needs one of the two.
#[test]
fn parse_delete_requires_id_or_all() {
    let result = Cmd::try_parse_from(["datacenter", "delete"]);
    assert!(result.is_err(), "should fail without --datacenter-id or --all");
}

// parse_delete_id_conflicts_with_all ensures the two selectors are
// mutually exclusive.
#[test]
fn parse_delete_id_conflicts_with_all() {
    let result = Cmd::try_parse_from(["datacenter", "delete", "-i", TEST_DATACENTER_ID, "--all"]);
    assert!(result.is_err(), "--datacenter-id and --all should conflict");
}

// parse_update ensures update parses new property values.
#[test]
fn parse_update() {
    let cmd = Cmd::try_parse_from([
        "datacenter",
        "update",
        "-i",
        TEST_DATACENTER_ID,
        "--name",
        "renamed",
        "--description",
        "new description",
    ])
    .expect("should parse update");

    match cmd {
        Cmd::Update(args) => {
            assert_eq!(args.datacenter_id.to_string(), TEST_DATACENTER_ID);
            assert_eq!(args.name, Some("renamed".to_string()));
            assert_eq!(args.description, Some("new description".to_string()));
        }
        _ => panic!("expected Update variant"),
    }
}
