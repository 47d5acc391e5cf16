//! Web layer for the subway server.
//!
//! Provides HTTP endpoints for managing stations, lines and sections, and
//! for querying shortest paths.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
