//! Schema-on-read JSON projection.

use crate::error::{AzError, Result};
use serde::de::DeserializeOwned;

/// Deserialize `json` into the narrow shape `T`, reporting the failing JSON path.
pub fn parse_json<T: DeserializeOwned>(json: &str, what: &str) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        log::debug!("OUTPUT START:\n\n{}\n\nOUTPUT END\n", json);
        AzError::Parse {
            what: what.to_string(),
            path: e.path().to_string(),
            message: e.inner().to_string(),
        }
    })
}
