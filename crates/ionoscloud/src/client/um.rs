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

use serde::Serialize;

use super::{Accepted, IonosApiClient, ListParams, RequestRef};
use crate::error::ApiError;
use crate::models::um::{Group, GroupProperties, Resource, User};
use crate::models::{Collection, Create, IdRef};

// Group replacement body; unlike the other resources the API replaces
// groups with PUT and expects the id alongside the properties.
#[derive(Debug, Serialize)]
struct GroupUpdate<'a> {
    id: &'a str,
    properties: &'a GroupProperties,
}

impl IonosApiClient {
    pub async fn list_groups(&self, params: &ListParams) -> Result<Collection<Group>, ApiError> {
        self.get_json("/um/groups", params).await
    }

    pub async fn get_group(&self, id: &str, params: &ListParams) -> Result<Group, ApiError> {
        self.get_json(&format!("/um/groups/{id}"), params).await
    }

    pub async fn create_group(
        &self,
        properties: GroupProperties,
    ) -> Result<Accepted<Group>, ApiError> {
        self.post_json("/um/groups", &Create::new(properties)).await
    }

    pub async fn update_group(
        &self,
        id: &str,
        properties: GroupProperties,
    ) -> Result<Accepted<Group>, ApiError> {
        let body = GroupUpdate {
            id,
            properties: &properties,
        };
        self.put_json(&format!("/um/groups/{id}"), &body).await
    }

    pub async fn delete_group(&self, id: &str) -> Result<Option<RequestRef>, ApiError> {
        self.delete(&format!("/um/groups/{id}")).await
    }

    pub async fn list_group_users(
        &self,
        group_id: &str,
        params: &ListParams,
    ) -> Result<Collection<User>, ApiError> {
        self.get_json(&format!("/um/groups/{group_id}/users"), params)
            .await
    }

    pub async fn add_group_user(
        &self,
        group_id: &str,
        user_id: &str,
    ) -> Result<Accepted<User>, ApiError> {
        self.post_json(&format!("/um/groups/{group_id}/users"), &IdRef::new(user_id))
            .await
    }

    pub async fn remove_group_user(
        &self,
        group_id: &str,
        user_id: &str,
    ) -> Result<Option<RequestRef>, ApiError> {
        self.delete(&format!("/um/groups/{group_id}/users/{user_id}"))
            .await
    }

    pub async fn list_resources(
        &self,
        params: &ListParams,
    ) -> Result<Collection<Resource>, ApiError> {
        self.get_json("/um/resources", params).await
    }

    pub async fn list_resources_by_type(
        &self,
        resource_type: &str,
        params: &ListParams,
    ) -> Result<Collection<Resource>, ApiError> {
        self.get_json(&format!("/um/resources/{resource_type}"), params)
            .await
    }

    pub async fn get_resource(
        &self,
        resource_type: &str,
        resource_id: &str,
        params: &ListParams,
    ) -> Result<Resource, ApiError> {
        self.get_json(
            &format!("/um/resources/{resource_type}/{resource_id}"),
            params,
        )
        .await
    }
}
