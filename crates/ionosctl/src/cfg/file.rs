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

//! The on-disk config file and the flag/env/file resolution that turns
//! it into connection settings. Flags win over environment variables
//! (clap handles that ordering), both win over the file.

use std::path::{Path, PathBuf};

use ionoscloud::cli::{IonosCliError, IonosCliResult};
use ionoscloud::{ClientConfig, Credentials, DEFAULT_API_URL};
use serde::Deserialize;
use url::Url;

use crate::cfg::cli_options::CliOptions;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigFile {
    pub api_url: Option<String>,
    pub token: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl ConfigFile {
    /// Load the config file. A missing default file is fine; a missing
    /// file the user named explicitly is not.
    pub fn load(path: Option<&Path>) -> IonosCliResult<Self> {
        let (path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match default_path() {
                Some(path) => (path, false),
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            if explicit {
                return Err(IonosCliError::GenericError(format!(
                    "config file {} does not exist",
                    path.display()
                )));
            }
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        serde_json::from_str(&content).map_err(|err| {
            IonosCliError::GenericError(format!(
                "config file {} is not valid: {err}",
                path.display()
            ))
        })
    }
}

fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ionosctl").join("config.json"))
}

#[derive(Debug)]
pub struct ConnectionSettings {
    pub api_url: Url,
    pub credentials: Credentials,
}

impl ConnectionSettings {
    pub fn resolve(options: &CliOptions, file: &ConfigFile) -> IonosCliResult<Self> {
        let api_url = options
            .api_url
            .clone()
            .or_else(|| file.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = Url::parse(&api_url)
            .map_err(|err| IonosCliError::InvalidInput(format!("api url '{api_url}': {err}")))?;

        Ok(Self {
            api_url,
            credentials: resolve_credentials(options, file),
        })
    }

    pub fn into_client_config(self) -> ClientConfig {
        ClientConfig::new(self.api_url, self.credentials)
    }
}

fn resolve_credentials(options: &CliOptions, file: &ConfigFile) -> Credentials {
    if let Some(token) = options.token.clone().or_else(|| file.token.clone()) {
        return Credentials::Token(token);
    }

    let username = options.username.clone().or_else(|| file.username.clone());
    let password = options.password.clone().or_else(|| file.password.clone());
    match (username, password) {
        (Some(username), Some(password)) => Credentials::Basic { username, password },
        _ => {
            tracing::debug!("no credentials configured, calls will be unauthenticated");
            Credentials::None
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn options(args: &[&str]) -> CliOptions {
        let mut argv = vec!["ionosctl"];
        argv.extend_from_slice(args);
        argv.push("version");
        CliOptions::try_parse_from(argv).expect("should parse")
    }

    #[test]
    fn token_flag_wins_over_file_credentials() {
        let file = ConfigFile {
            username: Some("file-user".to_string()),
            password: Some("file-pass".to_string()),
            ..Default::default()
        };
        let options = options(&["--token", "tok123"]);
        match resolve_credentials(&options, &file) {
            Credentials::Token(token) => assert_eq!(token, "tok123"),
            other => panic!("expected token credentials, got {other:?}"),
        }
    }

    #[test]
    fn file_fills_in_missing_basic_auth_half() {
        let file = ConfigFile {
            password: Some("file-pass".to_string()),
            ..Default::default()
        };
        let options = options(&["--username", "cli-user"]);
        match resolve_credentials(&options, &file) {
            Credentials::Basic { username, password } => {
                assert_eq!(username, "cli-user");
                assert_eq!(password, "file-pass");
            }
            other => panic!("expected basic credentials, got {other:?}"),
        }
    }

    #[test]
    fn missing_credentials_resolve_to_none() {
        let options = options(&[]);
        match resolve_credentials(&options, &ConfigFile::default()) {
            Credentials::None => {}
            other => panic!("expected no credentials, got {other:?}"),
        }
    }

    #[test]
    fn api_url_falls_back_to_default() {
        let options = options(&[]);
        let settings =
            ConnectionSettings::resolve(&options, &ConfigFile::default()).expect("resolve");
        assert_eq!(settings.api_url.as_str(), "https://api.ionos.com/cloudapi/v6");
    }

    #[test]
    fn bad_api_url_is_rejected() {
        let options = options(&["--api-url", "not a url"]);
        let err = ConnectionSettings::resolve(&options, &ConfigFile::default())
            .expect_err("invalid url");
        assert!(err.to_string().contains("not a url"));
    }
}
