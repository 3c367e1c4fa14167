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
pub struct Attach {
    #[clap(
        short = 'i',
        long,
        value_name = "DATACENTER_ID",
        help = "The unique ID of the datacenter."
    )]
    pub datacenter_id: Uuid,

    #[clap(
        short,
        long,
        value_name = "LOADBALANCER_ID",
        help = "The unique ID of the load balancer."
    )]
    pub loadbalancer_id: Uuid,

    #[clap(long, value_name = "NIC_ID", help = "The unique ID of the NIC to enroll.")]
    pub nic_id: Uuid,

    #[clap(flatten)]
    pub wait: WaitArgs,
}

#[derive(Parser, Debug)]
pub struct List {
    #[clap(
        short = 'i',
        long,
        value_name = "DATACENTER_ID",
        help = "The unique ID of the datacenter."
    )]
    pub datacenter_id: Uuid,

    #[clap(
        short,
        long,
        value_name = "LOADBALANCER_ID",
        help = "The unique ID of the load balancer."
    )]
    pub loadbalancer_id: Uuid,
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

    #[clap(
        short,
        long,
        value_name = "LOADBALANCER_ID",
        help = "The unique ID of the load balancer."
    )]
    pub loadbalancer_id: Uuid,

    #[clap(long, value_name = "NIC_ID", help = "The unique ID of the balanced NIC.")]
    pub nic_id: Uuid,
}

#[derive(Parser, Debug)]
pub struct Detach {
    #[clap(
        short = 'i',
        long,
        value_name = "DATACENTER_ID",
        help = "The unique ID of the datacenter."
    )]
    pub datacenter_id: Uuid,

    #[clap(
        short,
        long,
        value_name = "LOADBALANCER_ID",
        help = "The unique ID of the load balancer."
    )]
    pub loadbalancer_id: Uuid,

    #[clap(long, value_name = "NIC_ID", help = "The unique ID of the balanced NIC.")]
    pub nic_id: Uuid,

    #[clap(flatten)]
    pub wait: WaitArgs,
}
