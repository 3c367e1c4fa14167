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

use clap::{Parser, ValueEnum};
use uuid::Uuid;

#[derive(PartialEq, Eq, ValueEnum, Clone, Copy, Debug)]
#[clap(rename_all = "kebab_case")]
pub enum ResourceType {
    Datacenter,
    Snapshot,
    Image,
    Ipblock,
}

impl ResourceType {
    /// Path segment used by the resources endpoint.
    pub fn as_path(self) -> &'static str {
        match self {
            ResourceType::Datacenter => "datacenter",
            ResourceType::Snapshot => "snapshot",
            ResourceType::Image => "image",
            ResourceType::Ipblock => "ipblock",
        }
    }
}

#[derive(Parser, Debug)]
pub struct List {
    #[clap(short = 't', long = "type", value_enum, help = "Restrict to one resource type.")]
    pub resource_type: Option<ResourceType>,
}

#[derive(Parser, Debug)]
pub struct Get {
    #[clap(short = 't', long = "type", value_enum, help = "Type of the resource.")]
    pub resource_type: ResourceType,

    #[clap(
        short = 'i',
        long,
        value_name = "RESOURCE_ID",
        help = "The unique ID of the resource."
    )]
    pub resource_id: Uuid,
}
