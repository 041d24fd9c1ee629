//! Resource group enumeration.

use crate::azure::{parse_json, Pages, Session};
use crate::config::API_VERSION_RESOURCES;
use crate::error::Result;
use crate::models::ResourceGroupShape;

pub struct ResourceGroupEnumerator<'a> {
    session: &'a Session,
}

impl<'a> ResourceGroupEnumerator<'a> {
    pub fn new(session: &'a Session) -> ResourceGroupEnumerator<'a> {
        ResourceGroupEnumerator { session }
    }

    /// Lazily list every resource-group name of the subscription.
    ///
    /// Order is whatever ARM returns. A failed page ends the sequence with an
    /// `AzError::Enumeration`; an unparsable entry is an `AzError::Parse` and
    /// the sequence continues.
    pub fn list(&self) -> impl Iterator<Item = Result<String>> + 'a {
        let url = self.session.arm_url("/resourcegroups", API_VERSION_RESOURCES);
        Pages::new(self.session, "resource groups", url).map(|item| {
            item.and_then(|raw| parse_json::<ResourceGroupShape>(raw.get(), "resource group"))
                .map(|group| group.name)
        })
    }
}
