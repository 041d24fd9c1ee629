//! Lazy traversal of paginated ARM list responses.
//!
//! ARM returns `{"value": [...], "nextLink": "..."}`. Items stay as raw JSON
//! until the caller projects them, so one malformed item never breaks the
//! page envelope.

use super::Session;
use crate::error::{AzError, Result};
use serde::Deserialize;
use serde_json::value::RawValue;

#[derive(Deserialize, Debug)]
struct Page {
    #[serde(default)]
    value: Vec<Box<RawValue>>,
    #[serde(rename = "nextLink", default)]
    next_link: Option<String>,
}

/// Forward-only iterator over every item of a paginated listing.
///
/// Pages are fetched on demand. A failed page yields one
/// `AzError::Enumeration` and ends the iteration.
pub struct Pages<'a> {
    session: &'a Session,
    what: String,
    next_url: Option<String>,
    last_url: Option<String>,
    items: std::vec::IntoIter<Box<RawValue>>,
    page: usize,
    count: usize,
}

impl<'a> Pages<'a> {
    pub fn new(session: &'a Session, what: &str, first_url: String) -> Pages<'a> {
        Pages {
            session,
            what: what.to_string(),
            next_url: Some(first_url),
            last_url: None,
            items: Vec::new().into_iter(),
            page: 0,
            count: 0,
        }
    }

    fn fetch(&mut self, url: String) -> Result<()> {
        if self.last_url.as_deref() == Some(url.as_str()) {
            return Err(AzError::Command {
                cmd: url,
                message: "nextLink not unique - possible infinite loop".to_string(),
            });
        }
        let output = self.session.get(&url)?;
        let page: Page = serde_json::from_str(&output).map_err(|e| AzError::Parse {
            what: format!("{} page", self.what),
            path: String::new(),
            message: e.to_string(),
        })?;

        self.count += page.value.len();
        log::info!(
            "got {what} page#{page:2} record_count=+{n:3} => {total:3}",
            what = self.what,
            page = self.page,
            n = page.value.len(),
            total = self.count,
        );
        self.items = page.value.into_iter();
        self.next_url = page.next_link.filter(|link| !link.is_empty());
        self.last_url = Some(url);
        self.page += 1;
        Ok(())
    }
}

impl<'a> Iterator for Pages<'a> {
    type Item = Result<Box<RawValue>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.items.next() {
                return Some(Ok(item));
            }
            let url = self.next_url.take()?;
            if let Err(e) = self.fetch(url) {
                return Some(Err(AzError::Enumeration {
                    what: self.what.clone(),
                    page: self.page,
                    source: Box::new(e),
                }));
            }
        }
    }
}
