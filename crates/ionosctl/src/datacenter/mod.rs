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

pub(crate) mod common;
mod create;
mod delete;
mod get;
mod list;
mod update;

#[cfg(test)]
mod tests;

use clap::Parser;

use crate::cfg::dispatch::Dispatch;

#[derive(Parser, Debug, Dispatch)]
pub enum Cmd {
    #[clap(about = "List datacenters", visible_alias = "ls")]
    List(list::Args),
    #[clap(about = "Show a datacenter", visible_alias = "g")]
    Get(get::Args),
    #[clap(about = "Create a datacenter", visible_alias = "c")]
    Create(create::Args),
    #[clap(about = "Update datacenter properties", visible_alias = "u")]
    Update(update::Args),
    #[clap(
        about = "Delete a datacenter, or all datacenters with --all",
        visible_alias = "d"
    )]
    Delete(delete::Args),
}
