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
use crate::models::network::{
    FirewallRule, FirewallRuleProperties, IpBlock, IpBlockProperties, LoadBalancer,
    LoadBalancerProperties, Nic, NicProperties,
};
use crate::models::{Collection, Create, IdRef};

impl IonosApiClient {
    pub async fn list_nics(
        &self,
        datacenter_id: &str,
        server_id: &str,
        params: &ListParams,
    ) -> Result<Collection<Nic>, ApiError> {
        self.get_json(
            &format!("/datacenters/{datacenter_id}/servers/{server_id}/nics"),
            params,
        )
        .await
    }

    pub async fn get_nic(
        &self,
        datacenter_id: &str,
        server_id: &str,
        nic_id: &str,
        params: &ListParams,
    ) -> Result<Nic, ApiError> {
        self.get_json(
            &format!("/datacenters/{datacenter_id}/servers/{server_id}/nics/{nic_id}"),
            params,
        )
        .await
    }

    pub async fn create_nic(
        &self,
        datacenter_id: &str,
        server_id: &str,
        properties: NicProperties,
    ) -> Result<Accepted<Nic>, ApiError> {
        self.post_json(
            &format!("/datacenters/{datacenter_id}/servers/{server_id}/nics"),
            &Create::new(properties),
        )
        .await
    }

    pub async fn update_nic(
        &self,
        datacenter_id: &str,
        server_id: &str,
        nic_id: &str,
        properties: NicProperties,
    ) -> Result<Accepted<Nic>, ApiError> {
        self.patch_json(
            &format!("/datacenters/{datacenter_id}/servers/{server_id}/nics/{nic_id}"),
            &properties,
        )
        .await
    }

    pub async fn delete_nic(
        &self,
        datacenter_id: &str,
        server_id: &str,
        nic_id: &str,
    ) -> Result<Option<RequestRef>, ApiError> {
        self.delete(&format!(
            "/datacenters/{datacenter_id}/servers/{server_id}/nics/{nic_id}"
        ))
        .await
    }

    pub async fn list_firewall_rules(
        &self,
        datacenter_id: &str,
        server_id: &str,
        nic_id: &str,
        params: &ListParams,
    ) -> Result<Collection<FirewallRule>, ApiError> {
        self.get_json(
            &format!(
                "/datacenters/{datacenter_id}/servers/{server_id}/nics/{nic_id}/firewallrules"
            ),
            params,
        )
        .await
    }

    pub async fn get_firewall_rule(
        &self,
        datacenter_id: &str,
        server_id: &str,
        nic_id: &str,
        rule_id: &str,
        params: &ListParams,
    ) -> Result<FirewallRule, ApiError> {
        self.get_json(
            &format!(
                "/datacenters/{datacenter_id}/servers/{server_id}/nics/{nic_id}/firewallrules/{rule_id}"
            ),
            params,
        )
        .await
    }

    pub async fn create_firewall_rule(
        &self,
        datacenter_id: &str,
        server_id: &str,
        nic_id: &str,
        properties: FirewallRuleProperties,
    ) -> Result<Accepted<FirewallRule>, ApiError> {
        self.post_json(
            &format!(
                "/datacenters/{datacenter_id}/servers/{server_id}/nics/{nic_id}/firewallrules"
            ),
            &Create::new(properties),
        )
        .await
    }

    pub async fn update_firewall_rule(
        &self,
        datacenter_id: &str,
        server_id: &str,
        nic_id: &str,
        rule_id: &str,
        properties: FirewallRuleProperties,
    ) -> Result<Accepted<FirewallRule>, ApiError> {
        self.patch_json(
            &format!(
                "/datacenters/{datacenter_id}/servers/{server_id}/nics/{nic_id}/firewallrules/{rule_id}"
            ),
            &properties,
        )
        .await
    }

    pub async fn delete_firewall_rule(
        &self,
        datacenter_id: &str,
        server_id: &str,
        nic_id: &str,
        rule_id: &str,
    ) -> Result<Option<RequestRef>, ApiError> {
        self.delete(&format!(
            "/datacenters/{datacenter_id}/servers/{server_id}/nics/{nic_id}/firewallrules/{rule_id}"
        ))
        .await
    }

    pub async fn list_loadbalancers(
        &self,
        datacenter_id: &str,
        params: &ListParams,
    ) -> Result<Collection<LoadBalancer>, ApiError> {
        self.get_json(
            &format!("/datacenters/{datacenter_id}/loadbalancers"),
            params,
        )
        .await
    }

    pub async fn get_loadbalancer(
        &self,
        datacenter_id: &str,
        loadbalancer_id: &str,
        params: &ListParams,
    ) -> Result<LoadBalancer, ApiError> {
        self.get_json(
            &format!("/datacenters/{datacenter_id}/loadbalancers/{loadbalancer_id}"),
            params,
        )
        .await
    }

    pub async fn create_loadbalancer(
        &self,
        datacenter_id: &str,
        properties: LoadBalancerProperties,
    ) -> Result<Accepted<LoadBalancer>, ApiError> {
        self.post_json(
            &format!("/datacenters/{datacenter_id}/loadbalancers"),
            &Create::new(properties),
        )
        .await
    }

    pub async fn update_loadbalancer(
        &self,
        datacenter_id: &str,
        loadbalancer_id: &str,
        properties: LoadBalancerProperties,
    ) -> Result<Accepted<LoadBalancer>, ApiError> {
        self.patch_json(
            &format!("/datacenters/{datacenter_id}/loadbalancers/{loadbalancer_id}"),
            &properties,
        )
        .await
    }

    pub async fn delete_loadbalancer(
        &self,
        datacenter_id: &str,
        loadbalancer_id: &str,
    ) -> Result<Option<RequestRef>, ApiError> {
        self.delete(&format!(
            "/datacenters/{datacenter_id}/loadbalancers/{loadbalancer_id}"
        ))
        .await
    }

    /// NICs balanced by a load balancer. Attach enrolls an existing NIC.
    pub async fn list_balanced_nics(
        &self,
        datacenter_id: &str,
        loadbalancer_id: &str,
        params: &ListParams,
    ) -> Result<Collection<Nic>, ApiError> {
        self.get_json(
            &format!("/datacenters/{datacenter_id}/loadbalancers/{loadbalancer_id}/balancednics"),
            params,
        )
        .await
    }

    pub async fn get_balanced_nic(
        &self,
        datacenter_id: &str,
        loadbalancer_id: &str,
        nic_id: &str,
        params: &ListParams,
    ) -> Result<Nic, ApiError> {
        self.get_json(
            &format!(
                "/datacenters/{datacenter_id}/loadbalancers/{loadbalancer_id}/balancednics/{nic_id}"
            ),
            params,
        )
        .await
    }

    pub async fn attach_balanced_nic(
        &self,
        datacenter_id: &str,
        loadbalancer_id: &str,
        nic_id: &str,
    ) -> Result<Accepted<Nic>, ApiError> {
        self.post_json(
            &format!("/datacenters/{datacenter_id}/loadbalancers/{loadbalancer_id}/balancednics"),
            &IdRef::new(nic_id),
        )
        .await
    }

    pub async fn detach_balanced_nic(
        &self,
        datacenter_id: &str,
        loadbalancer_id: &str,
        nic_id: &str,
    ) -> Result<Option<RequestRef>, ApiError> {
        self.delete(&format!(
            "/datacenters/{datacenter_id}/loadbalancers/{loadbalancer_id}/balancednics/{nic_id}"
        ))
        .await
    }

    pub async fn list_ipblocks(
        &self,
        params: &ListParams,
    ) -> Result<Collection<IpBlock>, ApiError> {
        self.get_json("/ipblocks", params).await
    }

    pub async fn get_ipblock(&self, id: &str, params: &ListParams) -> Result<IpBlock, ApiError> {
        self.get_json(&format!("/ipblocks/{id}"), params).await
    }

    pub async fn create_ipblock(
        &self,
        properties: IpBlockProperties,
    ) -> Result<Accepted<IpBlock>, ApiError> {
        self.post_json("/ipblocks", &Create::new(properties)).await
    }

    pub async fn update_ipblock(
        &self,
        id: &str,
        properties: IpBlockProperties,
    ) -> Result<Accepted<IpBlock>, ApiError> {
        self.patch_json(&format!("/ipblocks/{id}"), &properties)
            .await
    }

    pub async fn delete_ipblock(&self, id: &str) -> Result<Option<RequestRef>, ApiError> {
        self.delete(&format!("/ipblocks/{id}")).await
    }
}
