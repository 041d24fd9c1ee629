//! Narrow projections of generic ARM resources.

use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct ResourceGroupShape {
    pub name: String,
}

/// Public IP resource, only `properties.ipAddress` is read.
#[derive(Deserialize, Debug, Default)]
pub struct PublicIpShape {
    #[serde(default)]
    pub properties: PublicIpProperties,
}

#[derive(Deserialize, Debug, Default)]
pub struct PublicIpProperties {
    #[serde(rename = "ipAddress", default)]
    pub ip_address: Option<String>,
}

/// Any resource, only its `name` is read.
#[derive(Deserialize, Debug, Default)]
pub struct NamedShape {
    #[serde(default)]
    pub name: Option<String>,
}

/// Identifying attributes of a generic resource from a typed listing.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ResourceSummary {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub resource_type: String,
    #[serde(default)]
    pub location: String,
}
