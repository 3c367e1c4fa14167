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

use crate::wait::WaitArgs;

#[derive(Parser, Debug)]
pub struct Args {
    #[clap(
        short = 'i',
        long,
        value_name = "DATACENTER_ID",
        help = "The unique ID of the datacenter."
    )]
    pub datacenter_id: Uuid,

    #[clap(short, long, value_name = "SERVER_ID", help = "The unique ID of the server.")]
    pub server_id: Uuid,

    #[clap(short, long, help = "New name for the server.")]
    pub name: Option<String>,

    #[clap(short, long, help = "New number of CPU cores.")]
    pub cores: Option<i32>,

    #[clap(short, long, help = "New RAM size in MB, must be a multiple of 256.")]
    pub ram: Option<i32>,

    #[clap(
        short = 'z',
        long,
        value_name = "ZONE",
        help = "Availability zone: AUTO, ZONE_1 or ZONE_2."
    )]
    pub availability_zone: Option<String>,

    #[clap(flatten)]
    pub wait: WaitArgs,
}
