//! In-memory registries for stations and lines.
//!
//! These own the lifecycle of stations and lines and implement the lookups
//! the core depends on: station by id, line by id, and all lines. Both are
//! cheap to clone and safe to share across request handlers.

mod error;
mod lines;
mod stations;

pub use error::RegistryError;
pub use lines::LineRegistry;
pub use stations::StationRegistry;
