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

use ionoscloud::cli::{IonosCliError, IonosCliResult};
use ionoscloud::models::compute::{Datacenter, Server};
use ionoscloud::{ApiError, IonosApiClient, ListParams};

use crate::cfg::file::ConnectionSettings;

/// [`ApiClient`] is a thin wrapper around [`IonosApiClient`], which mainly
/// adds some convenience methods.
#[derive(Clone)]
pub struct ApiClient(pub IonosApiClient);

// Note: You do *not* need to add every API method to this wrapper. Callers
// can use `.0` to get access to the underlying IonosApiClient, if they want
// to simply call the API methods themselves. Add methods here if there's
// some value to it, like mapping 404s onto friendlier errors, or other data
// conversions.
impl ApiClient {
    pub fn connect(settings: ConnectionSettings) -> IonosCliResult<Self> {
        Ok(Self(IonosApiClient::new(settings.into_client_config())?))
    }

    pub async fn get_datacenter(&self, id: &str, depth: u32) -> IonosCliResult<Datacenter> {
        self.0
            .get_datacenter(id, &ListParams::depth(depth))
            .await
            .map_err(not_found("datacenter", id))
    }

    pub async fn get_server(
        &self,
        datacenter_id: &str,
        server_id: &str,
        depth: u32,
    ) -> IonosCliResult<Server> {
        self.0
            .get_server(datacenter_id, server_id, &ListParams::depth(depth))
            .await
            .map_err(not_found("server", server_id))
    }
}

/// Error mapper turning a 404 into a named not-found error; anything else
/// passes through unchanged.
pub fn not_found(kind: &'static str, id: &str) -> impl FnOnce(ApiError) -> IonosCliError {
    let id = id.to_string();
    move |err| {
        if err.is_not_found() {
            IonosCliError::NotFound { kind, id }
        } else {
            IonosCliError::Api(err)
        }
    }
}
