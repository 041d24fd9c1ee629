//! Domain models for the Azure NIC inventory.
//!
//! This module contains the data structures used throughout the application:
//! - [`NicRecord`] and [`EnrichedNic`] - One IP configuration of a network interface
//! - [`DatabaseServerRecord`] - Managed PostgreSQL server
//! - [`ResourceSummary`] - Generic resource from a typed listing

mod database;
mod nic;
mod resource;

// Re-export public types
pub use database::{DatabaseServerRecord, ServerListShape};
pub use nic::{EnrichedNic, NicRecord, NicShape, ResourceRef};
pub use resource::{NamedShape, PublicIpShape, ResourceGroupShape, ResourceSummary};
