//! Station registry.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{Station, StationId};

use super::error::RegistryError;

#[derive(Default)]
struct StationTable {
    stations: BTreeMap<StationId, Station>,
    last_id: u64,
}

/// Thread-safe station store.
///
/// Ids are assigned sequentially from 1 and never reused.
#[derive(Clone, Default)]
pub struct StationRegistry {
    inner: Arc<RwLock<StationTable>>,
}

impl StationRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new station with the next free id.
    pub async fn create(&self, name: &str) -> Result<Station, RegistryError> {
        let mut table = self.inner.write().await;
        let station = Station::new(StationId(table.last_id + 1), name)?;

        table.last_id += 1;
        table.stations.insert(station.id(), station.clone());
        Ok(station)
    }

    /// Look up a station by id.
    pub async fn get(&self, id: StationId) -> Result<Station, RegistryError> {
        let table = self.inner.read().await;
        table
            .stations
            .get(&id)
            .cloned()
            .ok_or(RegistryError::StationNotFound(id))
    }

    /// All stations, ordered by id.
    pub async fn all(&self) -> Vec<Station> {
        let table = self.inner.read().await;
        table.stations.values().cloned().collect()
    }

    /// Remove a station, returning it.
    pub async fn delete(&self, id: StationId) -> Result<Station, RegistryError> {
        let mut table = self.inner.write().await;
        table
            .stations
            .remove(&id)
            .ok_or(RegistryError::StationNotFound(id))
    }
}
