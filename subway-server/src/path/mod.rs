//! Path resolution across the subway network.
//!
//! Answers "what is the shortest way from this station to that one?" by
//! flattening every line's topology into a directed multigraph and running
//! Dijkstra over segment distances. The graph is rebuilt per query, so a
//! query always reflects the lines it was handed.

mod graph;
mod search;

pub use graph::NetworkGraph;
pub use search::{PathError, ShortestPath, find_shortest_path};
