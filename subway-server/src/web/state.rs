//! Application state for the web layer.

use std::sync::Arc;

use crate::service::SubwayService;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Station, line, section and path operations
    pub service: Arc<SubwayService>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(service: SubwayService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
