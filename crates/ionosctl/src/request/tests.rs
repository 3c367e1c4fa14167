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

const TEST_REQUEST_ID: &str = "00000000-0000-0000-0000-00000000000b";

#[test]
fn verify_cmd_structure() {
    Cmd::command().debug_assert();
}

// parse_wait ensures wait parses with the default timeout.
#[test]
fn parse_wait() {
    let cmd =
        Cmd::try_parse_from(["request", "wait", "-i", TEST_REQUEST_ID]).expect("should parse wait");

    match cmd {
        Cmd::Wait(args) => {
            assert_eq!(args.request_id.to_string(), TEST_REQUEST_ID);
            assert_eq!(args.timeout, 60);
        }
        _ => panic!("expected Wait variant"),
    }
}

// parse_wait_custom_timeout ensures --timeout overrides the default.
#[test]
fn parse_wait_custom_timeout() {
    let cmd = Cmd::try_parse_from([
        "request",
        "wait",
        "-i",
        TEST_REQUEST_ID,
        "--timeout",
        "300",
    ])
    .expect("should parse wait");

    match cmd {
        Cmd::Wait(args) => assert_eq!(args.timeout, 300),
        _ => panic!("expected Wait variant"),
    }
}

// parse_list_with_filters ensures request listing accepts filters.
#[test]
fn parse_list_with_filters() {
    let cmd = Cmd::try_parse_from(["request", "list", "--filters", "method=DELETE"])
        .expect("should parse list");

    match cmd {
        Cmd::List(args) => {
            assert_eq!(args.list.filters, Some(vec!["method=DELETE".to_string()]));
        }
        _ => panic!("expected List variant"),
    }
}
