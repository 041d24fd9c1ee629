//! Managed PostgreSQL server data model.

use serde::Deserialize;

/// Flat view of one PostgreSQL server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseServerRecord {
    pub name: String,
    pub id: String,
    pub location: String,
    pub version: String,
    pub storage_mb: i64,
    pub administrator_login: String,
    pub fqdn: String,
}

#[derive(Deserialize, Debug)]
pub struct ServerListShape {
    #[serde(default)]
    pub value: Vec<ServerShape>,
}

#[derive(Deserialize, Debug)]
pub struct ServerShape {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub properties: ServerProperties,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServerProperties {
    #[serde(default)]
    pub administrator_login: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub fully_qualified_domain_name: String,
    #[serde(default)]
    pub storage_profile: StorageProfile,
}

#[derive(Deserialize, Debug, Default)]
pub struct StorageProfile {
    #[serde(rename = "storageMB", default)]
    pub storage_mb: i64,
}

impl From<ServerShape> for DatabaseServerRecord {
    fn from(s: ServerShape) -> Self {
        DatabaseServerRecord {
            name: s.name,
            id: s.id,
            location: s.location,
            version: s.properties.version,
            storage_mb: s.properties.storage_profile.storage_mb,
            administrator_login: s.properties.administrator_login,
            fqdn: s.properties.fully_qualified_domain_name,
        }
    }
}
