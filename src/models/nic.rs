//! Network interface payload shapes and the per-IP-configuration records built from them.

use serde::Deserialize;

/// A network interface as returned by the ARM NIC listing, narrowed to what we read.
#[derive(Deserialize, Debug)]
pub struct NicShape {
    pub name: String,
    #[serde(default)]
    pub properties: NicProperties,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct NicProperties {
    /// The VM attachment lives on the interface, not on each IP configuration.
    #[serde(default)]
    pub virtual_machine: Option<ResourceRef>,
    #[serde(default)]
    pub ip_configurations: Vec<IpConfigurationShape>,
}

#[derive(Deserialize, Debug)]
pub struct IpConfigurationShape {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub properties: IpConfigurationProperties,
}

#[derive(Deserialize, Debug, Default)]
pub struct IpConfigurationProperties {
    #[serde(rename = "privateIPAddress", default)]
    pub private_ip_address: Option<String>,
    #[serde(rename = "publicIPAddress", default)]
    pub public_ip_address: Option<ResourceRef>,
}

/// `{"id": "/subscriptions/..."}` reference to another resource.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct ResourceRef {
    #[serde(default)]
    pub id: String,
}

fn reference(r: Option<ResourceRef>) -> Option<String> {
    r.map(|r| r.id).filter(|id| !id.is_empty())
}

/// One IP configuration of one interface, before references are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NicRecord {
    pub resource_group: String,
    pub nic_name: String,
    pub ip_config_name: String,
    /// Empty when the configuration has no private address.
    pub private_ip: String,
    /// Public IP resource id, `None` when no public IP is attached.
    pub public_ip_ref: Option<String>,
    /// VM resource id, `None` when the interface is not attached.
    pub vm_ref: Option<String>,
}

/// A [`NicRecord`] after its references have been resolved or replaced by sentinels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedNic {
    pub resource_group: String,
    pub nic_name: String,
    pub ip_config_name: String,
    pub private_ip: String,
    pub public_ip: String,
    pub vm: String,
}

impl NicShape {
    /// One record per IP configuration, each carrying the interface-level VM reference.
    pub fn into_records(self, resource_group: &str) -> Vec<NicRecord> {
        let vm_ref = reference(self.properties.virtual_machine);
        let nic_name = self.name;
        self.properties
            .ip_configurations
            .into_iter()
            .map(|cfg| NicRecord {
                resource_group: resource_group.to_string(),
                nic_name: nic_name.clone(),
                ip_config_name: cfg.name,
                private_ip: cfg.properties.private_ip_address.unwrap_or_default(),
                public_ip_ref: reference(cfg.properties.public_ip_address),
                vm_ref: vm_ref.clone(),
            })
            .collect()
    }
}
