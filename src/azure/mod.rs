//! Azure CLI and Resource Manager interaction.
//!
//! This module handles all Azure-related operations:
//! - [`cli`] - Command execution for Azure CLI
//! - [`session`] - Subscription session and credential check
//! - [`paging`] - Lazy traversal of paginated ARM listings
//! - [`resolver`] - Fetch a single resource by id and project one field

pub mod cli;
mod paging;
mod parse;
mod resolver;
mod session;

// Re-export public types and functions
pub use cli::{AzCli, CommandRunner};
pub use paging::Pages;
pub use parse::parse_json;
pub use resolver::{Projection, ResourceResolver};
pub use session::Session;
