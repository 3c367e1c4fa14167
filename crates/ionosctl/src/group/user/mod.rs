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

use clap::Parser;
use ionoscloud::cli::IonosCliResult;

use crate::cfg::dispatch::Dispatch;
use crate::cfg::run::Run;
use crate::cfg::runtime::RuntimeContext;

#[derive(Parser, Debug, Dispatch)]
pub enum Cmd {
    #[clap(about = "List members of a group", visible_alias = "ls")]
    List(args::List),
    #[clap(about = "Add a user to a group", visible_alias = "a")]
    Add(args::Add),
    #[clap(about = "Remove a user from a group", visible_alias = "r")]
    Remove(args::Remove),
}

impl Run for args::List {
    async fn run(self, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
        cmds::list(self, ctx).await
    }
}

impl Run for args::Add {
    async fn run(self, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
        cmds::add(self, ctx).await
    }
}

impl Run for args::Remove {
    async fn run(self, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
        cmds::remove(self, ctx).await
    }
}
