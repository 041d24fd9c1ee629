//! Network interface enumeration per resource group.

use crate::azure::{parse_json, Pages, Session};
use crate::config::API_VERSION_NETWORK;
use crate::error::Result;
use crate::models::{NicRecord, NicShape};
use std::collections::VecDeque;

pub struct NicEnumerator<'a> {
    session: &'a Session,
}

impl<'a> NicEnumerator<'a> {
    pub fn new(session: &'a Session) -> NicEnumerator<'a> {
        NicEnumerator { session }
    }

    /// Lazily list one [`NicRecord`] per IP configuration of every interface in `group`.
    pub fn list(&self, group: &str) -> NicRecords<'a> {
        let url = self.session.arm_url(
            &format!(
                "/resourceGroups/{}/providers/Microsoft.Network/networkInterfaces",
                urlencoding::encode(group)
            ),
            API_VERSION_NETWORK,
        );
        NicRecords {
            pages: Pages::new(self.session, &format!("NICs of '{group}'"), url),
            group: group.to_string(),
            pending: VecDeque::new(),
            failed: false,
        }
    }
}

/// Iterator returned by [`NicEnumerator::list`].
///
/// The first error (page fetch or malformed interface) is yielded once and
/// ends the sequence; records of interfaces parsed before it are kept.
pub struct NicRecords<'a> {
    pages: Pages<'a>,
    group: String,
    pending: VecDeque<NicRecord>,
    failed: bool,
}

impl<'a> Iterator for NicRecords<'a> {
    type Item = Result<NicRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(record) = self.pending.pop_front() {
                return Some(Ok(record));
            }
            if self.failed {
                return None;
            }
            let parsed = self
                .pages
                .next()?
                .and_then(|raw| parse_json::<NicShape>(raw.get(), "network interface"));
            match parsed {
                Ok(nic) => {
                    log::trace!("nic '{}' in '{}'", nic.name, self.group);
                    self.pending.extend(nic.into_records(&self.group));
                }
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }
    }
}
