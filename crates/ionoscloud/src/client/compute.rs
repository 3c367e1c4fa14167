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

use super::{Accepted, IonosApiClient, ListParams, RequestRef};
use crate::error::ApiError;
use crate::models::compute::{
    Datacenter, DatacenterProperties, Server, ServerProperties, Volume, VolumeProperties,
};
use crate::models::image::Image;
use crate::models::{Collection, Create, IdRef};

impl IonosApiClient {
    pub async fn list_datacenters(
        &self,
        params: &ListParams,
    ) -> Result<Collection<Datacenter>, ApiError> {
        self.get_json("/datacenters", params).await
    }

    pub async fn get_datacenter(
        &self,
        id: &str,
        params: &ListParams,
    ) -> Result<Datacenter, ApiError> {
        self.get_json(&format!("/datacenters/{id}"), params).await
    }

    pub async fn create_datacenter(
        &self,
        properties: DatacenterProperties,
    ) -> Result<Accepted<Datacenter>, ApiError> {
        self.post_json("/datacenters", &Create::new(properties))
            .await
    }

    pub async fn update_datacenter(
        &self,
        id: &str,
        properties: DatacenterProperties,
    ) -> Result<Accepted<Datacenter>, ApiError> {
        self.patch_json(&format!("/datacenters/{id}"), &properties)
            .await
    }

    pub async fn delete_datacenter(&self, id: &str) -> Result<Option<RequestRef>, ApiError> {
        self.delete(&format!("/datacenters/{id}")).await
    }

    pub async fn list_servers(
        &self,
        datacenter_id: &str,
        params: &ListParams,
    ) -> Result<Collection<Server>, ApiError> {
        self.get_json(&format!("/datacenters/{datacenter_id}/servers"), params)
            .await
    }

    pub async fn get_server(
        &self,
        datacenter_id: &str,
        server_id: &str,
        params: &ListParams,
    ) -> Result<Server, ApiError> {
        self.get_json(
            &format!("/datacenters/{datacenter_id}/servers/{server_id}"),
            params,
        )
        .await
    }

    pub async fn create_server(
        &self,
        datacenter_id: &str,
        properties: ServerProperties,
    ) -> Result<Accepted<Server>, ApiError> {
        self.post_json(
            &format!("/datacenters/{datacenter_id}/servers"),
            &Create::new(properties),
        )
        .await
    }

    pub async fn update_server(
        &self,
        datacenter_id: &str,
        server_id: &str,
        properties: ServerProperties,
    ) -> Result<Accepted<Server>, ApiError> {
        self.patch_json(
            &format!("/datacenters/{datacenter_id}/servers/{server_id}"),
            &properties,
        )
        .await
    }

    pub async fn delete_server(
        &self,
        datacenter_id: &str,
        server_id: &str,
    ) -> Result<Option<RequestRef>, ApiError> {
        self.delete(&format!("/datacenters/{datacenter_id}/servers/{server_id}"))
            .await
    }

    pub async fn start_server(
        &self,
        datacenter_id: &str,
        server_id: &str,
    ) -> Result<Option<RequestRef>, ApiError> {
        self.post_action(&format!(
            "/datacenters/{datacenter_id}/servers/{server_id}/start"
        ))
        .await
    }

    pub async fn stop_server(
        &self,
        datacenter_id: &str,
        server_id: &str,
    ) -> Result<Option<RequestRef>, ApiError> {
        self.post_action(&format!(
            "/datacenters/{datacenter_id}/servers/{server_id}/stop"
        ))
        .await
    }

    pub async fn reboot_server(
        &self,
        datacenter_id: &str,
        server_id: &str,
    ) -> Result<Option<RequestRef>, ApiError> {
        self.post_action(&format!(
            "/datacenters/{datacenter_id}/servers/{server_id}/reboot"
        ))
        .await
    }

    pub async fn list_volumes(
        &self,
        datacenter_id: &str,
        params: &ListParams,
    ) -> Result<Collection<Volume>, ApiError> {
        self.get_json(&format!("/datacenters/{datacenter_id}/volumes"), params)
            .await
    }

    pub async fn get_volume(
        &self,
        datacenter_id: &str,
        volume_id: &str,
        params: &ListParams,
    ) -> Result<Volume, ApiError> {
        self.get_json(
            &format!("/datacenters/{datacenter_id}/volumes/{volume_id}"),
            params,
        )
        .await
    }

    pub async fn create_volume(
        &self,
        datacenter_id: &str,
        properties: VolumeProperties,
    ) -> Result<Accepted<Volume>, ApiError> {
        self.post_json(
            &format!("/datacenters/{datacenter_id}/volumes"),
            &Create::new(properties),
        )
        .await
    }

    pub async fn update_volume(
        &self,
        datacenter_id: &str,
        volume_id: &str,
        properties: VolumeProperties,
    ) -> Result<Accepted<Volume>, ApiError> {
        self.patch_json(
            &format!("/datacenters/{datacenter_id}/volumes/{volume_id}"),
            &properties,
        )
        .await
    }

    pub async fn delete_volume(
        &self,
        datacenter_id: &str,
        volume_id: &str,
    ) -> Result<Option<RequestRef>, ApiError> {
        self.delete(&format!("/datacenters/{datacenter_id}/volumes/{volume_id}"))
            .await
    }

    /// Attach an existing volume to a server. The volume keeps its own
    /// lifecycle; this only creates the attachment.
    pub async fn attach_volume(
        &self,
        datacenter_id: &str,
        server_id: &str,
        volume_id: &str,
    ) -> Result<Accepted<Volume>, ApiError> {
        self.post_json(
            &format!("/datacenters/{datacenter_id}/servers/{server_id}/volumes"),
            &IdRef::new(volume_id),
        )
        .await
    }

    pub async fn detach_volume(
        &self,
        datacenter_id: &str,
        server_id: &str,
        volume_id: &str,
    ) -> Result<Option<RequestRef>, ApiError> {
        self.delete(&format!(
            "/datacenters/{datacenter_id}/servers/{server_id}/volumes/{volume_id}"
        ))
        .await
    }

    pub async fn attach_cdrom(
        &self,
        datacenter_id: &str,
        server_id: &str,
        image_id: &str,
    ) -> Result<Accepted<Image>, ApiError> {
        self.post_json(
            &format!("/datacenters/{datacenter_id}/servers/{server_id}/cdroms"),
            &IdRef::new(image_id),
        )
        .await
    }

    pub async fn list_cdroms(
        &self,
        datacenter_id: &str,
        server_id: &str,
        params: &ListParams,
    ) -> Result<Collection<Image>, ApiError> {
        self.get_json(
            &format!("/datacenters/{datacenter_id}/servers/{server_id}/cdroms"),
            params,
        )
        .await
    }

    pub async fn get_cdrom(
        &self,
        datacenter_id: &str,
        server_id: &str,
        cdrom_id: &str,
        params: &ListParams,
    ) -> Result<Image, ApiError> {
        self.get_json(
            &format!("/datacenters/{datacenter_id}/servers/{server_id}/cdroms/{cdrom_id}"),
            params,
        )
        .await
    }

    pub async fn detach_cdrom(
        &self,
        datacenter_id: &str,
        server_id: &str,
        cdrom_id: &str,
    ) -> Result<Option<RequestRef>, ApiError> {
        self.delete(&format!(
            "/datacenters/{datacenter_id}/servers/{server_id}/cdroms/{cdrom_id}"
        ))
        .await
    }
}
