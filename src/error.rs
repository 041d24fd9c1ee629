//! Error types for the inventory run.
//!
//! Only `Config` and `Authentication` stop the process. Everything else is
//! logged and degrades the affected group, pass or field.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AzError>;

#[derive(Error, Debug)]
pub enum AzError {
    /// Required configuration missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// No usable `az` login context for the subscription.
    #[error("Authentication failed for subscription '{subscription_id}': {source}")]
    Authentication {
        subscription_id: String,
        #[source]
        source: Box<AzError>,
    },

    /// The `az` process could not be started, exited non-zero, or misbehaved.
    #[error("az command failed: {message}")]
    Command { cmd: String, message: String },

    /// A page of a paginated listing could not be fetched.
    #[error("Enumerating {what} failed at page #{page}: {source}")]
    Enumeration {
        what: String,
        page: usize,
        #[source]
        source: Box<AzError>,
    },

    /// Provider payload does not match the expected shape.
    #[error("Error parsing {what}: path={path} error={message}")]
    Parse {
        what: String,
        path: String,
        message: String,
    },

    /// A single resource could not be fetched or projected.
    #[error("Cannot resolve resource '{resource_id}': {source}")]
    Resolve {
        resource_id: String,
        #[source]
        source: Box<AzError>,
    },
}

impl AzError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, AzError::Config(_) | AzError::Authentication { .. })
    }
}
