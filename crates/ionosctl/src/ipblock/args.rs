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
    #[clap(
        short = 'i',
        long,
        value_name = "IPBLOCK_ID",
        help = "The unique ID of the IP block."
    )]
    pub ipblock_id: Uuid,
}

#[derive(Parser, Debug)]
pub struct Create {
    #[clap(short, long, help = "Name of the IP block.")]
    pub name: Option<String>,

    #[clap(
        short,
        long,
        help = "Location to reserve the block in, e.g. de/txl, us/las."
    )]
    pub location: String,

    #[clap(long, default_value_t = 1, help = "Number of IPs to reserve.")]
    pub size: i32,

    #[clap(flatten)]
    pub wait: WaitArgs,
}

#[derive(Parser, Debug)]
pub struct Update {
    #[clap(
        short = 'i',
        long,
        value_name = "IPBLOCK_ID",
        help = "The unique ID of the IP block."
    )]
    pub ipblock_id: Uuid,

    #[clap(short, long, help = "New name for the IP block.")]
    pub name: Option<String>,

    #[clap(flatten)]
    pub wait: WaitArgs,
}

#[derive(Parser, Debug)]
pub struct Delete {
    #[clap(
        short = 'i',
        long,
        value_name = "IPBLOCK_ID",
        required_unless_present = "all",
        conflicts_with = "all",
        help = "The unique ID of the IP block."
    )]
    pub ipblock_id: Option<Uuid>,

    #[clap(long, help = "Release all IP blocks of the contract.")]
    pub all: bool,

    #[clap(flatten)]
    pub wait: WaitArgs,
}
