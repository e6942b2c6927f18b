use fresource::{
    ElasticSanData, ElasticSanProvisioningState, ElasticSanPublicNetworkAccess, ElasticSanSkuName,
};
use serde_json::{Value, json};

fn service_payload() -> Value {
    json!({
        "id": "/subscriptions/sub/resourceGroups/rg/providers/Microsoft.ElasticSan/elasticSans/san1",
        "name": "san1",
        "type": "Microsoft.ElasticSan/elasticSans",
        "location": "westeurope",
        "tags": {"env": "prod"},
        "systemData": {"createdBy": "ops@example.com", "createdAt": "2024-05-01T10:00:00Z"},
        "sku": {"name": "Premium_LRS", "tier": "Premium"},
        "etag": "W/\"0x8D\"",
        "properties": {
            "availabilityZones": ["1", "3"],
            "provisioningState": "Succeeded",
            "baseSizeTiB": 20,
            "extendedCapacitySizeTiB": 4,
            "totalVolumeSizeGiB": 512,
            "volumeGroupCount": 2,
            "totalIops": 160000,
            "totalMbps": 2560,
            "totalSizeTiB": 24,
            "publicNetworkAccess": "Disabled",
            "privateEndpointConnections": [
                {"id": "pec-1", "name": "pec-1", "properties": {"privateEndpoint": {"id": "pe-1"}}}
            ],
            "autoScaleProperties": {
                "scaleUpProperties": {"unusedSizeTiB": 2, "autoScalePolicyEnforcement": "Enabled"},
                "scaleDownProperties": {"minimumSizeTiB": 10}
            },
            "encryption": {"keySource": "Microsoft.Storage"}
        }
    })
}

#[test]
fn service_payload_exposes_read_only_and_writable_properties() {
    let san = ElasticSanData::from_value(service_payload()).expect("payload should parse");

    assert_eq!(san.resource().name(), Some("san1"));
    assert_eq!(san.resource().resource_type(), Some("Microsoft.ElasticSan/elasticSans"));
    assert_eq!(san.resource().location, "westeurope");
    assert_eq!(san.resource().tags.get("env").map(String::as_str), Some("prod"));
    assert_eq!(
        san.resource().system_data().and_then(|data| data.created_by.as_deref()),
        Some("ops@example.com")
    );
    assert_eq!(san.sku().name, ElasticSanSkuName::PremiumLrs);
    assert_eq!(san.availability_zones(), ["1", "3"]);
    assert_eq!(san.provisioning_state(), Some(&ElasticSanProvisioningState::Succeeded));
    assert_eq!(san.total_iops(), Some(160000));
    assert_eq!(san.total_size_tib(), Some(24));
    assert_eq!(san.private_endpoint_connections().len(), 1);
    assert_eq!(
        san.public_network_access(),
        Some(&ElasticSanPublicNetworkAccess::Disabled)
    );
    assert_eq!(
        san.scale_up_properties().and_then(|scale| scale.unused_size_tib),
        Some(2)
    );
}

#[test]
fn unknown_fields_survive_read_modify_write() {
    let mut san = ElasticSanData::from_value(service_payload()).expect("payload should parse");

    assert_eq!(san.additional_data().get("etag"), Some(&json!("W/\"0x8D\"")));
    assert!(san.additional_properties().contains_key("encryption"));

    san.set_extended_capacity_size_tib(8);
    san.set_public_network_access(Some(ElasticSanPublicNetworkAccess::Enabled));

    let written = san.to_value().expect("serialize");
    let mut expected = service_payload();
    expected["properties"]["extendedCapacitySizeTiB"] = json!(8);
    expected["properties"]["publicNetworkAccess"] = json!("Enabled");

    assert_eq!(written, expected);
}
