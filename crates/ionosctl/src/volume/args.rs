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

    #[clap(long, value_name = "VOLUME_ID", help = "The unique ID of the volume.")]
    pub volume_id: Uuid,
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

    #[clap(short, long, help = "Name of the volume.")]
    pub name: Option<String>,

    #[clap(long, value_name = "GB", help = "Size of the volume in GB.")]
    pub size: f64,

    #[clap(
        long = "type",
        value_name = "TYPE",
        default_value = "HDD",
        help = "Storage type: HDD or SSD."
    )]
    pub volume_type: String,

    #[clap(short, long, help = "Bus type: VIRTIO or IDE.")]
    pub bus: Option<String>,

    #[clap(
        short = 'z',
        long,
        value_name = "ZONE",
        help = "Availability zone: AUTO, ZONE_1, ZONE_2 or ZONE_3."
    )]
    pub availability_zone: Option<String>,

    #[clap(
        long,
        value_name = "TYPE",
        help = "Licence type when no image is used: LINUX, WINDOWS, OTHER or UNKNOWN."
    )]
    pub licence_type: Option<String>,

    #[clap(long, value_name = "IMAGE_ID", help = "Image to create the volume from.")]
    pub image: Option<String>,

    #[clap(long, hide_env_values = true, help = "Initial password for the image.")]
    pub image_password: Option<String>,

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

    #[clap(long, value_name = "VOLUME_ID", help = "The unique ID of the volume.")]
    pub volume_id: Uuid,

    #[clap(short, long, help = "New name for the volume.")]
    pub name: Option<String>,

    #[clap(long, value_name = "GB", help = "New size in GB; volumes only grow.")]
    pub size: Option<f64>,

    #[clap(short, long, help = "New bus type: VIRTIO or IDE.")]
    pub bus: Option<String>,

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

    #[clap(
        long,
        value_name = "VOLUME_ID",
        required_unless_present = "all",
        conflicts_with = "all",
        help = "The unique ID of the volume."
    )]
    pub volume_id: Option<Uuid>,

    #[clap(long, help = "Delete all volumes of the datacenter.")]
    pub all: bool,

    #[clap(flatten)]
    pub wait: WaitArgs,
}

#[derive(Parser, Debug)]
pub struct Attach {
    #[clap(
        short = 'i',
        long,
        value_name = "DATACENTER_ID",
        help = "The unique ID of the datacenter."
    )]
    pub datacenter_id: Uuid,

    #[clap(short, long, value_name = "SERVER_ID", help = "The unique ID of the server.")]
    pub server_id: Uuid,

    #[clap(long, value_name = "VOLUME_ID", help = "The unique ID of the volume.")]
    pub volume_id: Uuid,

    #[clap(flatten)]
    pub wait: WaitArgs,
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

    #[clap(short, long, value_name = "SERVER_ID", help = "The unique ID of the server.")]
    pub server_id: Uuid,

    #[clap(long, value_name = "VOLUME_ID", help = "The unique ID of the volume.")]
    pub volume_id: Uuid,

    #[clap(flatten)]
    pub wait: WaitArgs,
}
