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

use clap::Parser;
use uuid::Uuid;

use crate::query::ListArgs;
use crate::wait::WaitArgs;

#[derive(Parser, Debug)]
pub struct List {
    #[clap(flatten)]
    pub list: ListArgs,
}

#[derive(Parser, Debug)]
pub struct Get {
    #[clap(short = 'i', long, value_name = "GROUP_ID", help = "The unique ID of the group.")]
    pub group_id: Uuid,
}

#[derive(Parser, Debug)]
pub struct Create {
    #[clap(short, long, help = "Name of the group.")]
    pub name: String,

    #[clap(long, help = "Allow members to create datacenters.")]
    pub create_datacenter: bool,

    #[clap(long, help = "Allow members to create snapshots.")]
    pub create_snapshot: bool,

    #[clap(long, help = "Allow members to reserve IP blocks.")]
    pub reserve_ip: bool,

    #[clap(long, help = "Allow members to read the activity log.")]
    pub access_activity_log: bool,

    #[clap(flatten)]
    pub wait: WaitArgs,
}

#[derive(Parser, Debug)]
pub struct Update {
    #[clap(short = 'i', long, value_name = "GROUP_ID", help = "The unique ID of the group.")]
    pub group_id: Uuid,

    #[clap(short, long, help = "New name for the group.")]
    pub name: String,

    #[clap(
        long,
        action = clap::ArgAction::Set,
        value_name = "BOOL",
        help = "Allow members to create datacenters."
    )]
    pub create_datacenter: Option<bool>,

    #[clap(
        long,
        action = clap::ArgAction::Set,
        value_name = "BOOL",
        help = "Allow members to create snapshots."
    )]
    pub create_snapshot: Option<bool>,

    #[clap(
        long,
        action = clap::ArgAction::Set,
        value_name = "BOOL",
        help = "Allow members to reserve IP blocks."
    )]
    pub reserve_ip: Option<bool>,

    #[clap(
        long,
        action = clap::ArgAction::Set,
        value_name = "BOOL",
        help = "Allow members to read the activity log."
    )]
    pub access_activity_log: Option<bool>,

    #[clap(flatten)]
    pub wait: WaitArgs,
}

#[derive(Parser, Debug)]
pub struct Delete {
    #[clap(short = 'i', long, value_name = "GROUP_ID", help = "The unique ID of the group.")]
    pub group_id: Uuid,

    #[clap(flatten)]
    pub wait: WaitArgs,
}
