//! CSV-style line formatting for inventory records.

use super::terminal::format_field;
use crate::azure::Session;
use crate::models::{DatabaseServerRecord, EnrichedNic, ResourceSummary};

/// Report banner, one line.
pub fn banner(session: &Session, generated_at: &str) -> String {
    format!(
        "# subscription '{name}' ({id}) generated {generated_at}",
        name = session.subscription_name,
        id = session.subscription_id,
    )
}

pub fn nic_header() -> String {
    [
        format_field("resource_group", 24),
        format_field("nic_name", 28),
        format_field("ip_config", 14),
        format_field("private_ip", 16),
        format_field("public_ip", 24),
        format_field("vm", 20),
    ]
    .join(",")
}

pub fn nic_row(nic: &EnrichedNic) -> String {
    [
        format_field(&nic.resource_group, 24),
        format_field(&nic.nic_name, 28),
        format_field(&nic.ip_config_name, 14),
        format_field(&nic.private_ip, 16),
        format_field(&nic.public_ip, 24),
        format_field(&nic.vm, 20),
    ]
    .join(",")
}

pub fn database_header() -> String {
    [
        format_field("name", 24),
        format_field("version", 9),
        format_field("storage_mb", 12),
        format_field("admin_login", 16),
        format_field("fqdn", 44),
        format_field("location", 16),
        format_field("id", 0),
    ]
    .join(",")
}

pub fn database_row(server: &DatabaseServerRecord) -> String {
    [
        format_field(&server.name, 24),
        format_field(&server.version, 9),
        format_field(server.storage_mb, 12),
        format_field(&server.administrator_login, 16),
        format_field(&server.fqdn, 44),
        format_field(&server.location, 16),
        format_field(&server.id, 0),
    ]
    .join(",")
}

pub fn resource_header() -> String {
    [
        format_field("name", 28),
        format_field("type", 36),
        format_field("location", 16),
        format_field("id", 0),
    ]
    .join(",")
}

pub fn resource_row(resource: &ResourceSummary) -> String {
    [
        format_field(&resource.name, 28),
        format_field(&resource.resource_type, 36),
        format_field(&resource.location, 16),
        format_field(&resource.id, 0),
    ]
    .join(",")
}
