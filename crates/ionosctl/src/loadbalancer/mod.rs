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

pub mod args;
pub mod cmds;
mod nic;

#[cfg(test)]
mod tests;

use clap::Parser;
use ionoscloud::cli::IonosCliResult;

use crate::cfg::dispatch::Dispatch;
use crate::cfg::run::Run;
use crate::cfg::runtime::RuntimeContext;

#[derive(Parser, Debug, Dispatch)]
pub enum Cmd {
    #[clap(about = "List load balancers in a datacenter", visible_alias = "ls")]
    List(args::List),
    #[clap(about = "Show a load balancer", visible_alias = "g")]
    Get(args::Get),
    #[clap(about = "Create a load balancer", visible_alias = "c")]
    Create(args::Create),
    #[clap(about = "Update load balancer properties", visible_alias = "u")]
    Update(args::Update),
    #[clap(about = "Delete a load balancer", visible_alias = "d")]
    Delete(args::Delete),
    #[clap(about = "NICs balanced by a load balancer", subcommand)]
    #[dispatch]
    Nic(nic::Cmd),
}

impl Run for args::List {
    async fn run(self, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
        cmds::list(self, ctx).await
    }
}

impl Run for args::Get {
    async fn run(self, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
        cmds::get(self, ctx).await
    }
}

impl Run for args::Create {
    async fn run(self, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
        cmds::create(self, ctx).await
    }
}

impl Run for args::Update {
    async fn run(self, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
        cmds::update(self, ctx).await
    }
}

impl Run for args::Delete {
    async fn run(self, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
        cmds::delete(self, ctx).await
    }
}
