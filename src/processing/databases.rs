//! Managed PostgreSQL server listing.

use crate::azure::{parse_json, Session};
use crate::config::API_VERSION_POSTGRES;
use crate::error::{AzError, Result};
use crate::models::{DatabaseServerRecord, ServerListShape};

pub struct DatabaseServerEnumerator<'a> {
    session: &'a Session,
}

impl<'a> DatabaseServerEnumerator<'a> {
    pub fn new(session: &'a Session) -> DatabaseServerEnumerator<'a> {
        DatabaseServerEnumerator { session }
    }

    /// Single, non-paginated listing of the subscription's PostgreSQL servers.
    pub fn list(&self) -> Result<Vec<DatabaseServerRecord>> {
        log::info!("#Start DatabaseServerEnumerator::list()");
        let url = self.session.arm_url(
            "/providers/Microsoft.DBforPostgreSQL/servers",
            API_VERSION_POSTGRES,
        );
        let enumeration_error = |source: AzError| AzError::Enumeration {
            what: "PostgreSQL servers".to_string(),
            page: 0,
            source: Box::new(source),
        };
        let output = self.session.get(&url).map_err(enumeration_error)?;
        let list: ServerListShape = parse_json(&output, "PostgreSQL server list")?;

        let servers: Vec<DatabaseServerRecord> =
            list.value.into_iter().map(DatabaseServerRecord::from).collect();
        log::info!("Got {} PostgreSQL servers", servers.len());
        Ok(servers)
    }
}
