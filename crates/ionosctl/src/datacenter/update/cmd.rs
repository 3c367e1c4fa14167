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

use ionoscloud::cli::{IonosCliResult, OutputFormat};
use ionoscloud::models::compute::DatacenterProperties;

use super::args::Args;
use crate::async_writeln;
use crate::cfg::runtime::RuntimeContext;

pub async fn update(args: Args, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
    let id = args.datacenter_id.to_string();
    let properties = DatacenterProperties {
        name: args.name,
        description: args.description,
        ..Default::default()
    };
    let updated = ctx.api_client.0.update_datacenter(&id, properties).await?;
    args.wait
        .track(&ctx.api_client, updated.request.as_ref())
        .await?;

    if ctx.config.quiet {
        return Ok(());
    }
    if ctx.config.format == OutputFormat::Json {
        async_writeln!(
            ctx.output_file,
            "{}",
            serde_json::to_string_pretty(&updated.value)?
        )?;
    } else {
        async_writeln!(ctx.output_file, "Datacenter {id} updated")?;
    }
    Ok(())
}
