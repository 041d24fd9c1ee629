//! Generic resources filtered by resource type.

use crate::azure::{parse_json, Pages, Session};
use crate::config::API_VERSION_RESOURCES;
use crate::error::Result;
use crate::models::ResourceSummary;

pub struct ResourceTypeEnumerator<'a> {
    session: &'a Session,
}

impl<'a> ResourceTypeEnumerator<'a> {
    pub fn new(session: &'a Session) -> ResourceTypeEnumerator<'a> {
        ResourceTypeEnumerator { session }
    }

    /// Lazily list every resource of `resource_type`, e.g. `Microsoft.Compute/virtualMachines`.
    pub fn list(&self, resource_type: &str) -> impl Iterator<Item = Result<ResourceSummary>> + 'a {
        let url = self
            .session
            .arm_url(&type_filter(resource_type), API_VERSION_RESOURCES);
        Pages::new(self.session, resource_type, url).map(|item| {
            item.and_then(|raw| parse_json::<ResourceSummary>(raw.get(), "resource"))
        })
    }
}

/// `/resources?$filter=resourceType eq '<type>'`, percent-encoded so it survives command splitting.
fn type_filter(resource_type: &str) -> String {
    let filter = format!("resourceType eq '{resource_type}'");
    format!("/resources?%24filter={}", urlencoding::encode(&filter))
}
