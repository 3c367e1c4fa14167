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

use std::pin::Pin;

use ionoscloud::cli::{IonosCliResult, OutputFormat};

use crate::cfg::cli_options::CliOptions;
use crate::cfg::file::{ConfigFile, ConnectionSettings};
use crate::rest::ApiClient;

/// Everything a command handler needs: the connected API client, the
/// output sink, and the output-shaping options.
pub struct RuntimeContext {
    pub api_client: ApiClient,
    pub output_file: Pin<Box<dyn tokio::io::AsyncWrite>>,
    pub config: OutputConfig,
}

#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub cols: Option<Vec<String>>,
    pub quiet: bool,
    pub force: bool,
    pub depth: u32,
}

impl RuntimeContext {
    pub async fn from_options(options: &CliOptions) -> IonosCliResult<Self> {
        let file = ConfigFile::load(options.config.as_deref())?;
        let settings = ConnectionSettings::resolve(options, &file)?;
        let api_client = ApiClient::connect(settings)?;

        let output_file: Pin<Box<dyn tokio::io::AsyncWrite>> = match &options.output_file {
            Some(path) => Box::pin(tokio::fs::File::create(path).await?),
            None => Box::pin(tokio::io::stdout()),
        };

        Ok(Self {
            api_client,
            output_file,
            config: OutputConfig {
                format: options.output,
                cols: options.cols.clone(),
                quiet: options.quiet,
                force: options.force,
                depth: options.depth,
            },
        })
    }
}
