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

    #[clap(short, long, help = "Name of the server.")]
    pub name: Option<String>,

    #[clap(short, long, default_value_t = 2, help = "Number of CPU cores.")]
    pub cores: i32,

    #[clap(
        short,
        long,
        default_value_t = 256,
        help = "RAM in MB, must be a multiple of 256."
    )]
    pub ram: i32,

    #[clap(
        short = 'z',
        long,
        value_name = "ZONE",
        help = "Availability zone: AUTO, ZONE_1 or ZONE_2."
    )]
    pub availability_zone: Option<String>,

    #[clap(long, value_name = "FAMILY", help = "CPU family, e.g. AMD_OPTERON or INTEL_XEON.")]
    pub cpu_family: Option<String>,

    #[clap(flatten)]
    pub wait: WaitArgs,
}
