//! Output formatting for inventory records.
//!
//! This module handles formatting records into printable lines:
//! - [`csv`] - One quoted, aligned line per record
//! - [`terminal`] - Field formatting helpers

mod csv;
mod terminal;

pub use csv::{
    banner, database_header, database_row, nic_header, nic_row, resource_header, resource_row,
};
pub use terminal::format_field;
