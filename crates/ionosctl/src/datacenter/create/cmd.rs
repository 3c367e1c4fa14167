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

pub async fn create(args: Args, ctx: &mut RuntimeContext) -> IonosCliResult<()> {
    let properties = DatacenterProperties {
        name: args.name,
        location: Some(args.location),
        description: args.description,
        ..Default::default()
    };
    let created = ctx.api_client.0.create_datacenter(properties).await?;
    args.wait
        .track(&ctx.api_client, created.request.as_ref())
        .await?;

    if ctx.config.quiet {
        return Ok(());
    }
    if ctx.config.format == OutputFormat::Json {
        async_writeln!(
            ctx.output_file,
            "{}",
            serde_json::to_string_pretty(&created.value)?
        )?;
    } else {
        let id = created.value.id.unwrap_or_default();
        async_writeln!(ctx.output_file, "Datacenter {id} created")?;
    }
    Ok(())
}
