//! Shortest-path queries over the whole network.

use tracing::debug;

use crate::domain::{ErrorKind, Line, LineId, Station, StationId};

use super::graph::NetworkGraph;

/// Error from a path query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// Source and target are the same station
    #[error("source and target are the same station ({0})")]
    DuplicateStation(StationId),

    /// There are no lines at all
    #[error("the network has no lines")]
    EmptyNetwork,

    /// A line has no segments
    #[error("line {0} has no sections")]
    EmptyLine(LineId),

    /// Station is not on any line
    #[error("station {0} is not connected to any line")]
    Unconnected(StationId),

    /// No route between the two stations
    #[error("no path from {from} to {to}")]
    Unreachable { from: StationId, to: StationId },

    /// A station on the route could not be matched to line data
    #[error("station {0} on the path could not be resolved")]
    Unresolved(StationId),
}

impl PathError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PathError::DuplicateStation(_) => ErrorKind::PathDuplicateStation,
            _ => ErrorKind::PathNotFound,
        }
    }
}

/// Result of a path query: the stations visited and the total distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    stations: Vec<Station>,
    distance: u64,
}

impl ShortestPath {
    /// Stations in travel order, source first.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn station_ids(&self) -> Vec<StationId> {
        self.stations.iter().map(Station::id).collect()
    }

    /// Sum of segment distances along the path.
    pub fn distance(&self) -> u64 {
        self.distance
    }
}

/// Find the minimum-distance path from `source` to `target` across `lines`.
///
/// The graph is built fresh from `lines` on every call.
pub fn find_shortest_path(
    source: StationId,
    target: StationId,
    lines: &[Line],
) -> Result<ShortestPath, PathError> {
    if source == target {
        return Err(PathError::DuplicateStation(source));
    }

    let graph = NetworkGraph::build(lines)?;

    for station in [source, target] {
        if !graph.contains(station) {
            return Err(PathError::Unconnected(station));
        }
    }

    let (distance, ids) = graph
        .shortest_path(source, target)
        .ok_or(PathError::Unreachable {
            from: source,
            to: target,
        })?;

    let stations = ids
        .into_iter()
        .map(|id| resolve_station(lines, id))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        %source,
        %target,
        distance,
        hops = stations.len().saturating_sub(1),
        "found shortest path"
    );

    Ok(ShortestPath { stations, distance })
}

/// Find the station data for `id` among the segments of all lines.
fn resolve_station(lines: &[Line], id: StationId) -> Result<Station, PathError> {
    lines
        .iter()
        .find_map(|line| line.topology().find_station(id))
        .cloned()
        .ok_or(PathError::Unresolved(id))
}
