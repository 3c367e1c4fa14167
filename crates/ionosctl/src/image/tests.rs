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

#[test]
fn verify_cmd_structure() {
    Cmd::command().debug_assert();
}

// parse_list_with_filters ensures list accepts catalog filters.
#[test]
fn parse_list_with_filters() {
    let cmd = Cmd::try_parse_from(["image", "list", "--filters", "imageType=CDROM"])
        .expect("should parse list");

    match cmd {
        Cmd::List(args) => {
            assert_eq!(args.list.filters, Some(vec!["imageType=CDROM".to_string()]));
        }
        _ => panic!("expected List variant"),
    }
}

// parse_get_requires_image_id ensures get needs the image ID.
#[test]
fn parse_get_requires_image_id() {
    let result = Cmd::try_parse_from(["image", "get"]);
    assert!(result.is_err(), "should fail without --image-id");
}
