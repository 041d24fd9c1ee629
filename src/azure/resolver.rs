//! Generic resource lookup by id.

use super::parse::parse_json;
use super::Session;
use crate::error::{AzError, Result};
use crate::models::{NamedShape, PublicIpShape};

/// Which field to project out of a fetched resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// `properties.ipAddress` of a public IP resource.
    PublicIpAddress,
    /// `name` of any resource.
    DisplayName,
}

pub struct ResourceResolver<'a> {
    session: &'a Session,
}

impl<'a> ResourceResolver<'a> {
    pub fn new(session: &'a Session) -> ResourceResolver<'a> {
        ResourceResolver { session }
    }

    /// Fetch `resource_id` and return the projected field.
    ///
    /// A missing or empty field is `Ok("")`. Fetch and payload failures are
    /// `AzError::Resolve`. Callers must skip absent references; an empty id
    /// is rejected without a fetch.
    pub fn resolve(&self, resource_id: &str, projection: Projection) -> Result<String> {
        let resolve_error = |source: AzError| AzError::Resolve {
            resource_id: resource_id.to_string(),
            source: Box::new(source),
        };
        if resource_id.trim().is_empty() {
            return Err(resolve_error(AzError::Config(
                "empty resource id".to_string(),
            )));
        }

        let output = self
            .session
            .az(&format!(
                "az resource show --ids '{resource_id}' --output json"
            ))
            .map_err(resolve_error)?;

        let value = match projection {
            Projection::PublicIpAddress => parse_json::<PublicIpShape>(&output, "public IP")
                .map_err(resolve_error)?
                .properties
                .ip_address,
            Projection::DisplayName => parse_json::<NamedShape>(&output, "resource name")
                .map_err(resolve_error)?
                .name,
        };
        let value = value.unwrap_or_default();
        log::debug!("resolve({resource_id}, {projection:?}) => '{value}'");
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::azure::cli::fake::FakeRunner;

    const PIP1: &str =
        "/subscriptions/sub-1/resourceGroups/rg-web/providers/Microsoft.Network/publicIPAddresses/pip1";
    const VM1: &str =
        "/subscriptions/sub-1/resourceGroups/rg-web/providers/Microsoft.Compute/virtualMachines/web01";

    fn session() -> Session {
        let runner = FakeRunner::new()
            .respond_file("publicIPAddresses/pip1'", "public_ip_pip1.json")
            .respond("publicIPAddresses/pip-dynamic'", r#"{"name": "pip-dynamic", "properties": {"publicIPAllocationMethod": "Dynamic"}}"#)
            .respond_file("virtualMachines/web01'", "vm_web01.json")
            .respond("virtualMachines/broken'", r#"{"name": 42}"#);
        Session::new("sub-1", "dev", Box::new(runner))
    }

    #[test]
    fn test_resolve_public_ip() {
        let session = session();
        let resolver = ResourceResolver::new(&session);
        assert_eq!(
            resolver.resolve(PIP1, Projection::PublicIpAddress).unwrap(),
            "52.1.2.3"
        );
    }

    #[test]
    fn test_resolve_vm_name() {
        let session = session();
        let resolver = ResourceResolver::new(&session);
        assert_eq!(resolver.resolve(VM1, Projection::DisplayName).unwrap(), "web01");
    }

    #[test]
    fn test_unallocated_ip_is_empty_not_error() {
        let session = session();
        let resolver = ResourceResolver::new(&session);
        let id = PIP1.replace("pip1", "pip-dynamic");
        assert_eq!(resolver.resolve(&id, Projection::PublicIpAddress).unwrap(), "");
    }

    #[test]
    fn test_fetch_failure_is_resolve_error() {
        let session = session();
        let resolver = ResourceResolver::new(&session);
        let err = resolver
            .resolve("/subscriptions/sub-1/gone", Projection::DisplayName)
            .unwrap_err();
        match err {
            AzError::Resolve { resource_id, .. } => assert_eq!(resource_id, "/subscriptions/sub-1/gone"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_malformed_payload_is_resolve_error() {
        let session = session();
        let resolver = ResourceResolver::new(&session);
        let id = VM1.replace("web01", "broken");
        assert!(matches!(
            resolver.resolve(&id, Projection::DisplayName),
            Err(AzError::Resolve { .. })
        ));
    }

    #[test]
    fn test_empty_id_is_not_fetched() {
        let runner = FakeRunner::new();
        let calls = runner.calls();
        let session = Session::new("sub-1", "dev", Box::new(runner));
        let resolver = ResourceResolver::new(&session);
        assert!(resolver.resolve("", Projection::DisplayName).is_err());
        assert!(calls.borrow().is_empty());
    }
}
