//! Resource enumeration and correlation logic.
//!
//! This module contains the business logic of an inventory run:
//! - [`groups`] - Resource group enumeration
//! - [`nics`] - Network interface enumeration per group
//! - [`enrich`] - Resolving NIC references into public IPs and VM names
//! - [`databases`] - PostgreSQL server listing
//! - [`resources`] - Generic resources filtered by type

mod databases;
mod enrich;
mod groups;
mod nics;
mod resources;

// Re-export public types
pub use databases::DatabaseServerEnumerator;
pub use enrich::{EnrichmentPipeline, RunSummary};
pub use groups::ResourceGroupEnumerator;
pub use nics::{NicEnumerator, NicRecords};
pub use resources::ResourceTypeEnumerator;
