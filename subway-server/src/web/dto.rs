//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Line, LineId, Station, StationId};
use crate::path::ShortestPath;
use crate::service::{NewLine, SectionView};

/// Request to create a station.
#[derive(Debug, Deserialize)]
pub struct CreateStationRequest {
    /// Display name
    pub name: String,
}

/// A station in responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationResponse {
    pub id: StationId,
    pub name: String,
}

/// Request to create a line with its first section.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLineRequest {
    pub name: String,
    pub color: String,
    pub up_station_id: StationId,
    pub down_station_id: StationId,
    pub distance: i64,
}

/// Request to change a line's name and color.
#[derive(Debug, Deserialize)]
pub struct UpdateLineRequest {
    pub name: String,
    pub color: String,
}

/// A line with its stations in travel order.
#[derive(Debug, Serialize)]
pub struct LineResponse {
    pub id: LineId,
    pub name: String,
    pub color: String,

    /// Stations from first to last
    pub stations: Vec<StationResponse>,

    /// Sum of section distances
    pub distance: u64,
}

/// Request to add a section to a line.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionRequest {
    pub up_station_id: StationId,
    pub down_station_id: StationId,
    pub distance: i64,
}

/// Query for removing a section.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveSectionQuery {
    /// Last station of the line
    pub station_id: StationId,
}

/// A section added to or removed from a line.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionResponse {
    pub line_id: LineId,
    pub up_station: StationResponse,
    pub down_station: StationResponse,
    pub distance: u64,
}

/// Query for a shortest path.
#[derive(Debug, Deserialize)]
pub struct PathQuery {
    pub source: StationId,
    pub target: StationId,
}

/// Response for a shortest path.
#[derive(Debug, Serialize)]
pub struct PathResponse {
    /// Stations from source to target
    pub stations: Vec<StationResponse>,

    /// Total distance
    pub distance: u64,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,

    /// Machine-readable error kind
    pub code: &'static str,
}

// Conversion implementations

impl From<&Station> for StationResponse {
    fn from(station: &Station) -> Self {
        Self {
            id: station.id(),
            name: station.name().to_string(),
        }
    }
}

impl From<CreateLineRequest> for NewLine {
    fn from(req: CreateLineRequest) -> Self {
        Self {
            name: req.name,
            color: req.color,
            up_station: req.up_station_id,
            down_station: req.down_station_id,
            distance: req.distance,
        }
    }
}

impl LineResponse {
    /// Create from a domain Line.
    pub fn from_line(line: &Line) -> Self {
        let topology = line.topology();
        Self {
            id: line.id(),
            name: line.name().to_string(),
            color: line.color().to_string(),
            stations: topology.stations().into_iter().map(StationResponse::from).collect(),
            distance: topology.total_distance(),
        }
    }
}

impl From<&SectionView> for SectionResponse {
    fn from(view: &SectionView) -> Self {
        Self {
            line_id: view.line_id,
            up_station: StationResponse::from(&view.up_station),
            down_station: StationResponse::from(&view.down_station),
            distance: view.distance,
        }
    }
}

impl From<&ShortestPath> for PathResponse {
    fn from(path: &ShortestPath) -> Self {
        Self {
            stations: path.stations().iter().map(StationResponse::from).collect(),
            distance: path.distance(),
        }
    }
}
