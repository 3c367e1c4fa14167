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
    #[clap(
        short = 'i',
        long,
        value_name = "DATACENTER_ID",
        help = "The unique ID of the datacenter."
    )]
    pub datacenter_id: Uuid,

    #[clap(short, long, value_name = "SERVER_ID", help = "The unique ID of the server.")]
    pub server_id: Uuid,

    #[clap(flatten)]
    pub list: ListArgs,
}

#[derive(Parser, Debug)]
pub struct Get {
    #[clap(
        short = 'i',
        long,
        value_name = "DATACENTER_ID",
        help = "The unique ID of the datacenter."
    )]
    pub datacenter_id: Uuid,

    #[clap(short, long, value_name = "SERVER_ID", help = "The unique ID of the server.")]
    pub server_id: Uuid,

    #[clap(long, value_name = "NIC_ID", help = "The unique ID of the NIC.")]
    pub nic_id: Uuid,
}

#[derive(Parser, Debug)]
pub struct Create {
    #[clap(
        short = 'i',
        long,
        value_name = "DATACENTER_ID",
        help = "The unique ID of the datacenter."
    )]
    pub datacenter_id: Uuid,

    #[clap(short, long, value_name = "SERVER_ID", help = "The unique ID of the server.")]
    pub server_id: Uuid,

    #[clap(short, long, help = "Name of the NIC.")]
    pub name: Option<String>,

    #[clap(
        long,
        default_value_t = 1,
        value_name = "LAN_ID",
        help = "The LAN to connect the NIC to."
    )]
    pub lan: i32,

    #[clap(long, value_name = "IP", num_args(0..), help = "IPs to assign to the NIC.")]
    pub ips: Option<Vec<String>>,

    #[clap(long, default_value_t = true, action = clap::ArgAction::Set, help = "Enable DHCP on the NIC.")]
    pub dhcp: bool,

    #[clap(flatten)]
    pub wait: WaitArgs,
}

#[derive(Parser, Debug)]
pub struct Update {
    #[clap(
        short = 'i',
        long,
        value_name = "DATACENTER_ID",
        help = "The unique ID of the datacenter."
    )]
    pub datacenter_id: Uuid,

    #[clap(short, long, value_name = "SERVER_ID", help = "The unique ID of the server.")]
    pub server_id: Uuid,

    #[clap(long, value_name = "NIC_ID", help = "The unique ID of the NIC.")]
    pub nic_id: Uuid,

    #[clap(short, long, help = "New name for the NIC.")]
    pub name: Option<String>,

    #[clap(long, value_name = "LAN_ID", help = "Move the NIC to another LAN.")]
    pub lan: Option<i32>,

    #[clap(long, action = clap::ArgAction::Set, value_name = "BOOL", help = "Enable or disable DHCP.")]
    pub dhcp: Option<bool>,

    #[clap(flatten)]
    pub wait: WaitArgs,
}

#[derive(Parser, Debug)]
pub struct Delete {
    #[clap(
        short = 'i',
        long,
        value_name = "DATACENTER_ID",
        help = "The unique ID of the datacenter."
    )]
    pub datacenter_id: Uuid,

    #[clap(short, long, value_name = "SERVER_ID", help = "The unique ID of the server.")]
    pub server_id: Uuid,

    #[clap(long, value_name = "NIC_ID", help = "The unique ID of the NIC.")]
    pub nic_id: Uuid,

    #[clap(flatten)]
    pub wait: WaitArgs,
}
