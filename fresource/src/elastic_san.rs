//! Elastic SAN resource record.
//!
//! Properties the library does not know about are kept in a raw additional
//! data bag at both the top level and inside `properties`, so a newer service
//! payload survives a read-modify-write cycle unchanged.
//!
//! ```rust
//! use fresource::{ElasticSanData, ElasticSanSku, ElasticSanSkuName};
//!
//! let mut san = ElasticSanData::new("westus2", ElasticSanSku::new(ElasticSanSkuName::PremiumLrs), 10, 5);
//! san.set_base_size_tib(20);
//!
//! let json = san.to_json().expect("serialize");
//! let back = ElasticSanData::from_json(&json).expect("deserialize");
//! assert_eq!(back.base_size_tib(), 20);
//! assert!(back.provisioning_state().is_none());
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    AutoScalePolicyEnforcement, ElasticSanProvisioningState, ElasticSanPublicNetworkAccess,
    ElasticSanSkuName, ElasticSanSkuTier, ResourceError, TrackedResourceData,
};

pub type AdditionalData = BTreeMap<String, Value>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElasticSanSku {
    pub name: ElasticSanSkuName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<ElasticSanSkuTier>,
}

impl ElasticSanSku {
    pub fn new(name: ElasticSanSkuName) -> Self {
        Self { name, tier: None }
    }

    pub fn with_tier(mut self, tier: ElasticSanSkuTier) -> Self {
        self.tier = Some(tier);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElasticSanScaleUpProperties {
    #[serde(rename = "unusedSizeTiB", default, skip_serializing_if = "Option::is_none")]
    pub unused_size_tib: Option<i64>,
    #[serde(
        rename = "increaseCapacityUnitByTiB",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub increase_capacity_unit_by_tib: Option<i64>,
    #[serde(
        rename = "capacityUnitScaleUpLimitTiB",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub capacity_unit_scale_up_limit_tib: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_scale_policy_enforcement: Option<AutoScalePolicyEnforcement>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AutoScaleProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    scale_up_properties: Option<ElasticSanScaleUpProperties>,
    #[serde(flatten)]
    additional_data: AdditionalData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateEndpointConnection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ElasticSanProperties {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    availability_zones: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    provisioning_state: Option<ElasticSanProvisioningState>,
    #[serde(rename = "baseSizeTiB")]
    base_size_tib: i64,
    #[serde(rename = "extendedCapacitySizeTiB")]
    extended_capacity_size_tib: i64,
    #[serde(rename = "totalVolumeSizeGiB", default, skip_serializing_if = "Option::is_none")]
    total_volume_size_gib: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    volume_group_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    total_iops: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    total_mbps: Option<i64>,
    #[serde(rename = "totalSizeTiB", default, skip_serializing_if = "Option::is_none")]
    total_size_tib: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    private_endpoint_connections: Vec<PrivateEndpointConnection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    public_network_access: Option<ElasticSanPublicNetworkAccess>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    auto_scale_properties: Option<AutoScaleProperties>,
    #[serde(flatten)]
    additional_data: AdditionalData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElasticSanData {
    #[serde(flatten)]
    resource: TrackedResourceData,
    sku: ElasticSanSku,
    properties: ElasticSanProperties,
    #[serde(flatten)]
    additional_data: AdditionalData,
}

impl ElasticSanData {
    pub fn new(
        location: impl Into<String>,
        sku: ElasticSanSku,
        base_size_tib: i64,
        extended_capacity_size_tib: i64,
    ) -> Self {
        Self {
            resource: TrackedResourceData::new(location),
            sku,
            properties: ElasticSanProperties {
                availability_zones: Vec::new(),
                provisioning_state: None,
                base_size_tib,
                extended_capacity_size_tib,
                total_volume_size_gib: None,
                volume_group_count: None,
                total_iops: None,
                total_mbps: None,
                total_size_tib: None,
                private_endpoint_connections: Vec::new(),
                public_network_access: None,
                auto_scale_properties: None,
                additional_data: AdditionalData::new(),
            },
            additional_data: AdditionalData::new(),
        }
    }

    pub fn from_json(payload: &str) -> Result<Self, ResourceError> {
        Ok(serde_json::from_str(payload)?)
    }

    pub fn from_value(payload: Value) -> Result<Self, ResourceError> {
        Ok(serde_json::from_value(payload)?)
    }

    pub fn to_json(&self) -> Result<String, ResourceError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_value(&self) -> Result<Value, ResourceError> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn resource(&self) -> &TrackedResourceData {
        &self.resource
    }

    pub fn resource_mut(&mut self) -> &mut TrackedResourceData {
        &mut self.resource
    }

    pub fn sku(&self) -> &ElasticSanSku {
        &self.sku
    }

    pub fn set_sku(&mut self, sku: ElasticSanSku) {
        self.sku = sku;
    }

    /// Logical zones, e.g. `["1"]`.
    pub fn availability_zones(&self) -> &[String] {
        &self.properties.availability_zones
    }

    pub fn availability_zones_mut(&mut self) -> &mut Vec<String> {
        &mut self.properties.availability_zones
    }

    pub fn provisioning_state(&self) -> Option<&ElasticSanProvisioningState> {
        self.properties.provisioning_state.as_ref()
    }

    pub fn base_size_tib(&self) -> i64 {
        self.properties.base_size_tib
    }

    pub fn set_base_size_tib(&mut self, base_size_tib: i64) {
        self.properties.base_size_tib = base_size_tib;
    }

    pub fn extended_capacity_size_tib(&self) -> i64 {
        self.properties.extended_capacity_size_tib
    }

    pub fn set_extended_capacity_size_tib(&mut self, extended_capacity_size_tib: i64) {
        self.properties.extended_capacity_size_tib = extended_capacity_size_tib;
    }

    pub fn total_volume_size_gib(&self) -> Option<i64> {
        self.properties.total_volume_size_gib
    }

    pub fn volume_group_count(&self) -> Option<i64> {
        self.properties.volume_group_count
    }

    pub fn total_iops(&self) -> Option<i64> {
        self.properties.total_iops
    }

    pub fn total_mbps(&self) -> Option<i64> {
        self.properties.total_mbps
    }

    pub fn total_size_tib(&self) -> Option<i64> {
        self.properties.total_size_tib
    }

    pub fn private_endpoint_connections(&self) -> &[PrivateEndpointConnection] {
        &self.properties.private_endpoint_connections
    }

    pub fn public_network_access(&self) -> Option<&ElasticSanPublicNetworkAccess> {
        self.properties.public_network_access.as_ref()
    }

    pub fn set_public_network_access(&mut self, access: Option<ElasticSanPublicNetworkAccess>) {
        self.properties.public_network_access = access;
    }

    pub fn scale_up_properties(&self) -> Option<&ElasticSanScaleUpProperties> {
        self.properties
            .auto_scale_properties
            .as_ref()
            .and_then(|auto_scale| auto_scale.scale_up_properties.as_ref())
    }

    /// Creates the enclosing auto-scale object on first write.
    pub fn set_scale_up_properties(&mut self, scale_up: Option<ElasticSanScaleUpProperties>) {
        self.properties
            .auto_scale_properties
            .get_or_insert_with(AutoScaleProperties::default)
            .scale_up_properties = scale_up;
    }

    /// Unknown top-level fields, kept verbatim.
    pub fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    pub fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }

    /// Unknown fields found under `properties`.
    pub fn additional_properties(&self) -> &AdditionalData {
        &self.properties.additional_data
    }
}
