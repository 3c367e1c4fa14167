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

use std::path::PathBuf;

use clap::{Parser, ValueHint};
use ionoscloud::cli::OutputFormat;

use crate::cfg::dispatch::Dispatch;
use crate::{
    datacenter, firewallrule, group, image, ipblock, loadbalancer, nic, request, resource, server,
    version, volume,
};

#[derive(Parser, Debug)]
#[clap(name = "ionosctl", version)]
#[clap(about = "Command-line client for the IONOS Cloud API")]
pub struct CliOptions {
    #[clap(long, env = "IONOS_API_URL", value_hint = ValueHint::Url)]
    #[clap(
        help = "Default to IONOS_API_URL environment variable or the api-url from $HOME/.config/ionosctl/config.json or https://api.ionos.com/cloudapi/v6."
    )]
    pub api_url: Option<String>,

    #[clap(long, env = "IONOS_TOKEN", hide_env_values = true)]
    #[clap(help = "Bearer token. Takes precedence over username/password.")]
    pub token: Option<String>,

    #[clap(long, env = "IONOS_USERNAME", value_hint = ValueHint::Username)]
    pub username: Option<String>,

    #[clap(long, env = "IONOS_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    #[clap(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    #[clap(help = "Configuration file. Default $HOME/.config/ionosctl/config.json.")]
    pub config: Option<PathBuf>,

    #[clap(short, long, value_enum, default_value = "ascii-table", global = true)]
    pub output: OutputFormat,

    #[clap(long, value_name = "PATH", global = true)]
    #[clap(help = "Write command output to a file instead of stdout.")]
    pub output_file: Option<String>,

    #[clap(short, long, global = true, help = "Suppress informational output.")]
    pub quiet: bool,

    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    #[clap(help = "Raise log verbosity; repeat for more detail.")]
    pub verbose: u8,

    #[clap(short, long, global = true, help = "Skip confirmation prompts.")]
    pub force: bool,

    #[clap(long, global = true, value_delimiter = ',', value_name = "COL,COL,...")]
    #[clap(help = "Columns to include in table output, validated per resource.")]
    pub cols: Option<Vec<String>>,

    #[clap(long, global = true, default_value_t = 1)]
    #[clap(help = "How deeply nested child resources are included in responses.")]
    pub depth: u32,

    #[clap(subcommand)]
    pub commands: CliCommand,
}

#[derive(Parser, Debug, Dispatch)]
pub enum CliCommand {
    #[clap(about = "Datacenter handling", subcommand, visible_alias = "dc")]
    #[dispatch]
    Datacenter(datacenter::Cmd),
    #[clap(about = "Server handling", subcommand, visible_alias = "svr")]
    #[dispatch]
    Server(server::Cmd),
    #[clap(about = "Volume handling", subcommand, visible_alias = "vol")]
    #[dispatch]
    Volume(volume::Cmd),
    #[clap(about = "NIC handling", subcommand)]
    #[dispatch]
    Nic(nic::Cmd),
    #[clap(about = "Firewall rule handling", subcommand, visible_alias = "fr")]
    #[dispatch]
    Firewallrule(firewallrule::Cmd),
    #[clap(about = "Load balancer handling", subcommand, visible_alias = "lb")]
    #[dispatch]
    Loadbalancer(loadbalancer::Cmd),
    #[clap(about = "IP block handling", subcommand, visible_alias = "ipb")]
    #[dispatch]
    Ipblock(ipblock::Cmd),
    #[clap(about = "Group handling", subcommand, visible_alias = "g")]
    #[dispatch]
    Group(group::Cmd),
    #[clap(
        about = "List resources visible to the contract",
        subcommand,
        visible_alias = "res"
    )]
    #[dispatch]
    Resource(resource::Cmd),
    #[clap(about = "Image catalog", subcommand, visible_alias = "img")]
    #[dispatch]
    Image(image::Cmd),
    #[clap(
        about = "Inspect and wait on asynchronous requests",
        subcommand,
        visible_alias = "req"
    )]
    #[dispatch]
    Request(request::Cmd),
    #[clap(about = "Print version information", visible_alias = "v")]
    Version(version::Args),
}

impl CliOptions {
    pub fn load() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::*;

    // The per-resource tests.rs files debug_assert their own Cmd enums;
    // this one covers the full tree, which is what catches collisions
    // between the global flags and any subcommand flag.
    #[test]
    fn verify_full_cli_structure() {
        CliOptions::command().debug_assert();
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let options = CliOptions::try_parse_from([
            "ionosctl",
            "datacenter",
            "list",
            "--output",
            "json",
            "--quiet",
            "--depth",
            "3",
        ])
        .expect("global flags should parse anywhere");

        assert_eq!(options.output, ionoscloud::cli::OutputFormat::Json);
        assert!(options.quiet);
        assert_eq!(options.depth, 3);
    }

    #[test]
    fn parse_cols_splits_on_commas() {
        let options = CliOptions::try_parse_from([
            "ionosctl",
            "datacenter",
            "list",
            "--cols",
            "DatacenterId,Name",
        ])
        .expect("cols should parse");

        assert_eq!(
            options.cols,
            Some(vec!["DatacenterId".to_string(), "Name".to_string()])
        );
    }
}
