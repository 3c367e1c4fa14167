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
const TEST_SERVER_ID: &str = "00000000-0000-0000-0000-000000000002";
const TEST_CDROM_ID: &str = "00000000-0000-0000-0000-000000000003";

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

// parse_list_requires_datacenter ensures list needs the datacenter
// scope.
#[test]
fn parse_list_requires_datacenter() {
    let result = Cmd::try_parse_from(["server", "list"]);
    assert!(result.is_err(), "should fail without --datacenter-id");
}

// parse_list ensures list parses with the datacenter ID.
#[test]
fn parse_list() {
    let cmd = Cmd::try_parse_from(["server", "list", "-i", TEST_DATACENTER_ID])
        .expect("should parse list");

    match cmd {
        Cmd::List(args) => {
            assert_eq!(args.datacenter_id.to_string(), TEST_DATACENTER_ID);
            assert!(args.list.filters.is_none());
        }
        _ => panic!("expected List variant"),
    }
}

// parse_create_defaults ensures create applies the cores/ram defaults.
#[test]
fn parse_create_defaults() {
    let cmd = Cmd::try_parse_from(["server", "create", "-i", TEST_DATACENTER_ID])
        .expect("should parse create");

    match cmd {
        Cmd::Create(args) => {
            assert_eq!(args.cores, 2);
            assert_eq!(args.ram, 256);
            assert!(args.name.is_none());
        }
        _ => panic!("expected Create variant"),
    }
}

// parse_start_with_state_wait ensures start parses both wait flags.
#[test]
fn parse_start_with_state_wait() {
    let cmd = Cmd::try_parse_from([
        "server",
        "start",
        "-i",
        TEST_DATACENTER_ID,
        "-s",
        TEST_SERVER_ID,
        "--wait-for-request",
        "-W",
    ])
    .expect("should parse start");

    match cmd {
        Cmd::Start(args) => {
            assert!(args.wait.wait_for_request);
            assert!(args.wait_for_state);
        }
        _ => panic!("expected Start variant"),
    }
}

// parse_stop ensures stop parses without optional flags.
#[test]
fn parse_stop() {
    let cmd = Cmd::try_parse_from([
        "server",
        "stop",
        "-i",
        TEST_DATACENTER_ID,
        "-s",
        TEST_SERVER_ID,
    ])
    .expect("should parse stop");

    match cmd {
        Cmd::Stop(args) => {
            assert!(!args.wait_for_state);
            assert!(!args.wait.wait_for_request);
        }
        _ => panic!("expected Stop variant"),
    }
}

// parse_delete_all ensures delete --all still requires the datacenter
// scope.
#[test]
fn parse_delete_all() {
    let cmd = Cmd::try_parse_from(["server", "delete", "-i", TEST_DATACENTER_ID, "--all"])
        .expect("should parse delete --all");

    match cmd {
        Cmd::Delete(args) => {
            assert!(args.all);
            assert!(args.server_id.is_none());
        }
        _ => panic!("expected Delete variant"),
    }
}

// parse_cdrom_attach ensures the nested cdrom group parses.
#[test]
fn parse_cdrom_attach() {
    let cmd = Cmd::try_parse_from([
        "server",
        "cdrom",
        "attach",
        "-i",
        TEST_DATACENTER_ID,
        "-s",
        TEST_SERVER_ID,
        "-c",
        TEST_CDROM_ID,
    ])
    .expect("should parse cdrom attach");

    match cmd {
        Cmd::Cdrom(cdrom::Cmd::Attach(args)) => {
            assert_eq!(args.cdrom_id.to_string(), TEST_CDROM_ID);
        }
        _ => panic!("expected Cdrom Attach variant"),
    }
}

// parse_cdrom_detach_requires_cdrom_id ensures detach needs the
// CDROM ID.
#[test]
fn parse_cdrom_detach_requires_cdrom_id() {
    let result = Cmd::try_parse_from([
        "server",
        "cdrom",
        "detach",
        "-i",
        TEST_DATACENTER_ID,
        "-s",
        TEST_SERVER_ID,
    ]);
    assert!(result.is_err(), "should fail without --cdrom-id");
}
