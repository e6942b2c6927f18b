//! Schema-shaped resource records with forward-compatible raw data.

mod elastic_san;
mod enums;
mod error;
mod resource;

pub use elastic_san::{
    AdditionalData, ElasticSanData, ElasticSanScaleUpProperties, ElasticSanSku,
    PrivateEndpointConnection,
};
pub use enums::{
    AutoScalePolicyEnforcement, ElasticSanProvisioningState, ElasticSanPublicNetworkAccess,
    ElasticSanSkuName, ElasticSanSkuTier,
};
pub use error::{ResourceError, ResourceErrorKind};
pub use resource::{SystemData, TrackedResourceData};
