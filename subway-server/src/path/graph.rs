//! Weighted multigraph over station identities.
//!
//! Every segment of every line becomes one directed edge. Two lines that
//! join the same pair of stations contribute two parallel edges, each with
//! its own distance.

use std::collections::HashMap;

use petgraph::algo::astar;
use petgraph::graph::{DiGraph, NodeIndex};
use tracing::trace;

use crate::domain::{Line, StationId};

use super::search::PathError;

/// Directed multigraph of the network, rebuilt for each query.
#[derive(Debug, Clone)]
pub struct NetworkGraph {
    graph: DiGraph<StationId, u64>,
    vertices: HashMap<StationId, NodeIndex>,
}

impl NetworkGraph {
    /// Flatten all lines into a graph.
    ///
    /// Fails if there are no lines, or if any line has no segments.
    pub fn build(lines: &[Line]) -> Result<Self, PathError> {
        if lines.is_empty() {
            return Err(PathError::EmptyNetwork);
        }

        let mut network = Self {
            graph: DiGraph::new(),
            vertices: HashMap::new(),
        };

        for line in lines {
            let segments = line.topology().segments();
            if segments.is_empty() {
                return Err(PathError::EmptyLine(line.id()));
            }
            for segment in segments {
                network.add_edge(segment.up().id(), segment.down().id(), segment.distance());
            }
        }

        trace!(
            vertices = network.vertex_count(),
            edges = network.edge_count(),
            "built network graph"
        );

        Ok(network)
    }

    fn vertex(&mut self, station: StationId) -> NodeIndex {
        *self
            .vertices
            .entry(station)
            .or_insert_with(|| self.graph.add_node(station))
    }

    fn add_edge(&mut self, from: StationId, to: StationId, distance: u64) {
        let a = self.vertex(from);
        let b = self.vertex(to);
        self.graph.add_edge(a, b, distance);
    }

    /// Whether `station` is connected to any line.
    pub fn contains(&self, station: StationId) -> bool {
        self.vertices.contains_key(&station)
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Minimum-distance route from `source` to `target`.
    ///
    /// Dijkstra over positive integer weights (A* with a zero heuristic).
    /// Returns the total distance and the visited stations in order, or
    /// `None` if either station is missing or unreachable.
    pub fn shortest_path(&self, source: StationId, target: StationId) -> Option<(u64, Vec<StationId>)> {
        let start = *self.vertices.get(&source)?;
        let goal = *self.vertices.get(&target)?;

        let (distance, nodes) = astar(
            &self.graph,
            start,
            |node| node == goal,
            |edge| *edge.weight(),
            |_| 0,
        )?;

        let stations = nodes.into_iter().map(|n| self.graph[n]).collect();
        Some((distance, stations))
    }
}
