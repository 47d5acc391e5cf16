//! Application services.
//!
//! `SubwayService` is the entry point for every operation the server
//! exposes. It resolves station and line identities through the registries,
//! then hands the actual work to the line topology or the path engine.

mod error;
mod network;

pub use error::ServiceError;
pub use network::{NewLine, SectionView, SubwayService};
