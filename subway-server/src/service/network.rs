//! Station, line, section and path operations.

use tracing::{debug, info};

use crate::config::Finder;
use crate::domain::{Line, LineId, Segment, Station, StationId};
use crate::path::{ShortestPath, find_shortest_path};
use crate::registry::{LineRegistry, StationRegistry};

use super::error::ServiceError;

/// Request to create a line with its first section.
#[derive(Debug, Clone)]
pub struct NewLine {
    pub name: String,
    pub color: String,
    pub up_station: StationId,
    pub down_station: StationId,
    pub distance: i64,
}

/// A section as reported back to callers: endpoints, distance, owning line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    pub line_id: LineId,
    pub up_station: Station,
    pub down_station: Station,
    pub distance: u64,
}

impl SectionView {
    fn new(line_id: LineId, segment: &Segment) -> Self {
        Self {
            line_id,
            up_station: segment.up().clone(),
            down_station: segment.down().clone(),
            distance: segment.distance(),
        }
    }
}

/// Orchestrates registries, line topologies and path queries.
#[derive(Clone)]
pub struct SubwayService {
    stations: StationRegistry,
    lines: LineRegistry,
    finder: Finder,
}

impl SubwayService {
    /// Create a service over existing registries.
    pub fn new(stations: StationRegistry, lines: LineRegistry, finder: Finder) -> Self {
        Self {
            stations,
            lines,
            finder,
        }
    }

    /// Create a service with empty registries.
    pub fn in_memory(finder: Finder) -> Self {
        Self::new(StationRegistry::new(), LineRegistry::new(), finder)
    }

    pub async fn create_station(&self, name: &str) -> Result<Station, ServiceError> {
        let station = self.stations.create(name).await?;
        info!(id = %station.id(), name = station.name(), "created station");
        Ok(station)
    }

    pub async fn list_stations(&self) -> Vec<Station> {
        self.stations.all().await
    }

    pub async fn delete_station(&self, id: StationId) -> Result<(), ServiceError> {
        let station = self.stations.delete(id).await?;
        info!(id = %station.id(), name = station.name(), "deleted station");
        Ok(())
    }

    /// Create a line whose topology starts with one section.
    pub async fn create_line(&self, request: NewLine) -> Result<Line, ServiceError> {
        let up = self.stations.get(request.up_station).await?;
        let down = self.stations.get(request.down_station).await?;
        let first = Segment::new(up, down, request.distance)?;

        let line = self
            .lines
            .create(&request.name, &request.color, first)
            .await?;
        info!(id = %line.id(), name = line.name(), "created line");
        Ok(line)
    }

    pub async fn list_lines(&self) -> Vec<Line> {
        self.lines.all().await
    }

    pub async fn get_line(&self, id: LineId) -> Result<Line, ServiceError> {
        Ok(self.lines.get(id).await?)
    }

    /// Change a line's display name and color.
    pub async fn update_line(
        &self,
        id: LineId,
        name: &str,
        color: &str,
    ) -> Result<Line, ServiceError> {
        Ok(self.lines.rename(id, name, color).await?)
    }

    pub async fn delete_line(&self, id: LineId) -> Result<(), ServiceError> {
        let line = self.lines.delete(id).await?;
        info!(id = %line.id(), name = line.name(), "deleted line");
        Ok(())
    }

    /// Add a section to a line: at either end, or by splitting a section.
    pub async fn add_section(
        &self,
        line_id: LineId,
        up_station: StationId,
        down_station: StationId,
        distance: i64,
    ) -> Result<SectionView, ServiceError> {
        self.lines.ensure_exists(line_id).await?;
        let up = self.stations.get(up_station).await?;
        let down = self.stations.get(down_station).await?;
        let segment = Segment::new(up, down, distance)?;
        let view = SectionView::new(line_id, &segment);

        self.lines
            .update_topology(line_id, |topology| {
                topology.insert(segment).map_err(ServiceError::from)
            })
            .await?;

        debug!(
            line = %line_id,
            up = %up_station,
            down = %down_station,
            distance,
            "added section"
        );
        Ok(view)
    }

    /// Remove the last section of a line, identified by its last station.
    pub async fn remove_section(
        &self,
        line_id: LineId,
        station: StationId,
    ) -> Result<SectionView, ServiceError> {
        let removed = self
            .lines
            .update_topology(line_id, |topology| {
                topology.remove(station).map_err(ServiceError::from)
            })
            .await?;

        debug!(line = %line_id, station = %station, "removed section");
        Ok(SectionView::new(line_id, &removed))
    }

    /// Shortest path between two registered stations.
    ///
    /// Both stations must exist in the registry; that is checked before the
    /// network graph is built.
    pub async fn find_path(
        &self,
        source: StationId,
        target: StationId,
    ) -> Result<ShortestPath, ServiceError> {
        self.stations.get(source).await?;
        self.stations.get(target).await?;

        let lines = self.lines.all().await;
        let path = match self.finder {
            Finder::Dijkstra => find_shortest_path(source, target, &lines)?,
        };

        debug!(
            %source,
            %target,
            distance = path.distance(),
            "resolved path"
        );
        Ok(path)
    }
}
