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

//! DTOs mirroring the Cloud API v6 resource schemas. Flat structs with
//! optional fields throughout; every resource object is
//! `{ id, type, href, metadata, properties }`.

pub mod compute;
pub mod image;
pub mod network;
pub mod request;
pub mod um;

use serde::{Deserialize, Serialize};

/// Metadata block shared by every resource object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Collection wrapper: `{ id, type, href, items }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection<T> {
    pub id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<T>>,
}

impl<T> Collection<T> {
    pub fn items(&self) -> &[T] {
        self.items.as_deref().unwrap_or_default()
    }

    pub fn into_items(self) -> Vec<T> {
        self.items.unwrap_or_default()
    }
}

/// Body for POST creation calls: `{ "properties": ... }`.
#[derive(Debug, Clone, Serialize)]
pub struct Create<P> {
    pub properties: P,
}

impl<P> Create<P> {
    pub fn new(properties: P) -> Self {
        Self { properties }
    }
}

/// Reference to an existing resource by ID, used both inside property
/// structs (boot volume, boot cdrom) and as the body of attach calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdRef {
    pub id: Option<String>,
}

impl IdRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: Some(id.into()) }
    }
}
