//! Subway lines.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::station::require_name;
use super::{InvalidName, LineTopology, Segment};

/// Opaque line identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(pub u64);

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A subway line: display attributes plus exactly one topology.
///
/// A line is created with one initial segment, so its topology is never
/// empty while the line exists.
#[derive(Debug, Clone)]
pub struct Line {
    id: LineId,
    name: String,
    color: String,
    topology: LineTopology,
}

impl Line {
    pub fn new(id: LineId, name: &str, color: &str, first: Segment) -> Result<Self, InvalidName> {
        Ok(Self {
            id,
            name: require_name("line name", name)?,
            color: require_name("line color", color)?,
            topology: LineTopology::with_segment(first),
        })
    }

    /// Build a line around an existing topology, which may be empty.
    #[cfg(test)]
    pub(crate) fn from_topology(
        id: LineId,
        name: &str,
        color: &str,
        topology: LineTopology,
    ) -> Result<Self, InvalidName> {
        Ok(Self {
            id,
            name: require_name("line name", name)?,
            color: require_name("line color", color)?,
            topology,
        })
    }

    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn topology(&self) -> &LineTopology {
        &self.topology
    }

    /// Replace the topology wholesale.
    ///
    /// Mutations are staged on a copy and committed here only once they
    /// succeed.
    pub fn set_topology(&mut self, topology: LineTopology) {
        self.topology = topology;
    }

    /// Change the display name and color.
    pub fn rename(&mut self, name: &str, color: &str) -> Result<(), InvalidName> {
        let name = require_name("line name", name)?;
        let color = require_name("line color", color)?;
        self.name = name;
        self.color = color;
        Ok(())
    }
}
