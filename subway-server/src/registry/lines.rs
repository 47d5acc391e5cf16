//! Line registry.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{Line, LineId, LineTopology, Segment};

use super::error::RegistryError;

#[derive(Default)]
struct LineTable {
    lines: BTreeMap<LineId, Line>,
    last_id: u64,
}

/// Thread-safe line store.
///
/// Topology changes go through [`LineRegistry::update_topology`], which holds
/// the write lock for the whole mutation. That gives one in-flight mutation
/// per line, and readers only ever see a topology before or after a change.
#[derive(Clone, Default)]
pub struct LineRegistry {
    inner: Arc<RwLock<LineTable>>,
}

impl LineRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new line with one initial segment.
    pub async fn create(
        &self,
        name: &str,
        color: &str,
        first: Segment,
    ) -> Result<Line, RegistryError> {
        let mut table = self.inner.write().await;
        let line = Line::new(LineId(table.last_id + 1), name, color, first)?;

        table.last_id += 1;
        table.lines.insert(line.id(), line.clone());
        Ok(line)
    }

    /// Look up a line by id.
    pub async fn get(&self, id: LineId) -> Result<Line, RegistryError> {
        let table = self.inner.read().await;
        table
            .lines
            .get(&id)
            .cloned()
            .ok_or(RegistryError::LineNotFound(id))
    }

    /// Fail with `LineNotFound` unless `id` is registered.
    pub async fn ensure_exists(&self, id: LineId) -> Result<(), RegistryError> {
        let table = self.inner.read().await;
        if table.lines.contains_key(&id) {
            Ok(())
        } else {
            Err(RegistryError::LineNotFound(id))
        }
    }

    /// Snapshot of all lines, ordered by id.
    pub async fn all(&self) -> Vec<Line> {
        let table = self.inner.read().await;
        table.lines.values().cloned().collect()
    }

    /// Change a line's name and color.
    pub async fn rename(&self, id: LineId, name: &str, color: &str) -> Result<Line, RegistryError> {
        let mut table = self.inner.write().await;
        let line = table
            .lines
            .get_mut(&id)
            .ok_or(RegistryError::LineNotFound(id))?;

        line.rename(name, color)?;
        Ok(line.clone())
    }

    /// Remove a line together with its topology.
    pub async fn delete(&self, id: LineId) -> Result<Line, RegistryError> {
        let mut table = self.inner.write().await;
        table
            .lines
            .remove(&id)
            .ok_or(RegistryError::LineNotFound(id))
    }

    /// Apply `mutate` to a copy of the line's topology.
    ///
    /// The copy replaces the stored topology only if `mutate` succeeds.
    pub async fn update_topology<T, E>(
        &self,
        id: LineId,
        mutate: impl FnOnce(&mut LineTopology) -> Result<T, E>,
    ) -> Result<T, E>
    where
        E: From<RegistryError>,
    {
        let mut table = self.inner.write().await;
        let line = table
            .lines
            .get_mut(&id)
            .ok_or(RegistryError::LineNotFound(id))?;

        let mut staged = line.topology().clone();
        let value = mutate(&mut staged)?;
        line.set_topology(staged);
        Ok(value)
    }
}
