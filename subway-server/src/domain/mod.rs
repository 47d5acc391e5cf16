//! Domain types for the subway network.
//!
//! This module contains the core model: stations, directed segments, and
//! the line topology that keeps a line's segments in one simple chain.
//! All types enforce their invariants at construction or mutation time, so
//! code that receives them can trust their validity.

mod error;
mod line;
mod segment;
mod station;
mod topology;

pub use error::{ErrorKind, TopologyError};
pub use line::{Line, LineId};
pub use segment::{MAX_DISTANCE, MIN_DISTANCE, Segment};
pub use station::{InvalidName, Station, StationId};
pub use topology::LineTopology;
