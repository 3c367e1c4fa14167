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

mod cfg;
mod cols;
mod confirm;
mod datacenter;
mod firewallrule;
mod group;
mod image;
mod ipblock;
mod loadbalancer;
mod nic;
mod query;
mod request;
mod resource;
mod rest;
mod server;
mod version;
mod volume;
mod wait;

use ionoscloud::cli::IonosCliResult;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, registry};

use crate::cfg::cli_options::CliOptions;
use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;

/// Write formatted output to the context's output sink.
#[macro_export]
macro_rules! async_write {
    ($dst:expr, $($arg:tt)*) => {{
        use tokio::io::AsyncWriteExt as _;
        async {
            $dst.write_all(format!($($arg)*).as_bytes()).await?;
            $dst.flush().await
        }
        .await
    }};
}

/// Like [`async_write!`], with a trailing newline.
#[macro_export]
macro_rules! async_writeln {
    ($dst:expr) => {{
        use tokio::io::AsyncWriteExt as _;
        async {
            $dst.write_all(b"\n").await?;
            $dst.flush().await
        }
        .await
    }};
    ($dst:expr, $($arg:tt)*) => {{
        use tokio::io::AsyncWriteExt as _;
        async {
            let mut line = format!($($arg)*);
            line.push('\n');
            $dst.write_all(line.as_bytes()).await?;
            $dst.flush().await
        }
        .await
    }};
}

fn init_log(verbosity: u8) {
    let default_level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy()
        .add_directive("hyper=warn".parse().unwrap())
        .add_directive("hyper_util=warn".parse().unwrap())
        .add_directive("rustls=warn".parse().unwrap())
        .add_directive("reqwest=warn".parse().unwrap());

    registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(env_filter)
        .init();
}

async fn run(options: CliOptions) -> IonosCliResult<()> {
    let ctx = RuntimeContext::from_options(&options).await?;
    options.commands.dispatch(ctx).await
}

#[tokio::main]
async fn main() {
    let options = CliOptions::load();
    init_log(options.verbose);

    if let Err(err) = run(options).await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
