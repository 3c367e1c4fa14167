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

    #[clap(long, value_name = "NIC_ID", help = "The unique ID of the NIC.")]
    pub nic_id: Uuid,

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

    #[clap(
        long,
        value_name = "FIREWALLRULE_ID",
        help = "The unique ID of the firewall rule."
    )]
    pub firewallrule_id: Uuid,
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

    #[clap(long, value_name = "NIC_ID", help = "The unique ID of the NIC.")]
    pub nic_id: Uuid,

    #[clap(short, long, help = "Name of the firewall rule.")]
    pub name: Option<String>,

    #[clap(
        short,
        long,
        value_name = "PROTOCOL",
        help = "Protocol to match: TCP, UDP, ICMP or ANY."
    )]
    pub protocol: String,

    #[clap(long, value_name = "MAC", help = "Only allow traffic from this MAC address.")]
    pub source_mac: Option<String>,

    #[clap(long, value_name = "IP", help = "Only allow traffic from this IPv4 address.")]
    pub source_ip: Option<String>,

    #[clap(long, value_name = "IP", help = "Only allow traffic addressed to this IP.")]
    pub target_ip: Option<String>,

    #[clap(long, value_name = "PORT", help = "Start of the allowed port range.")]
    pub port_range_start: Option<i32>,

    #[clap(long, value_name = "PORT", help = "End of the allowed port range.")]
    pub port_range_end: Option<i32>,

    #[clap(long, value_name = "TYPE", help = "ICMP type to allow.")]
    pub icmp_type: Option<i32>,

    #[clap(long, value_name = "CODE", help = "ICMP code to allow.")]
    pub icmp_code: Option<i32>,

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

    #[clap(
        long,
        value_name = "FIREWALLRULE_ID",
        help = "The unique ID of the firewall rule."
    )]
    pub firewallrule_id: Uuid,

    #[clap(short, long, help = "New name for the firewall rule.")]
    pub name: Option<String>,

    #[clap(long, value_name = "IP", help = "New source IP restriction.")]
    pub source_ip: Option<String>,

    #[clap(long, value_name = "IP", help = "New target IP restriction.")]
    pub target_ip: Option<String>,

    #[clap(long, value_name = "PORT", help = "New start of the allowed port range.")]
    pub port_range_start: Option<i32>,

    #[clap(long, value_name = "PORT", help = "New end of the allowed port range.")]
    pub port_range_end: Option<i32>,

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

    #[clap(
        long,
        value_name = "FIREWALLRULE_ID",
        help = "The unique ID of the firewall rule."
    )]
    pub firewallrule_id: Uuid,

    #[clap(flatten)]
    pub wait: WaitArgs,
}
