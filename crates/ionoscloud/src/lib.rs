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

//! Client crate for the IONOS Cloud API v6: the HTTP client itself, the
//! resource DTOs mirroring the API schemas, and the shared CLI-facing
//! types (`cli` module) used by the `ionosctl` binary.

pub mod cli;
pub mod client;
pub mod error;
pub mod models;

pub use client::{Accepted, ClientConfig, Credentials, IonosApiClient, ListParams, RequestRef};
pub use error::ApiError;

/// Default API endpoint, used when neither flags, environment, nor the
/// config file provide one.
pub const DEFAULT_API_URL: &str = "https://api.ionos.com/cloudapi/v6";
