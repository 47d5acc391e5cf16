//! Subway network server.
//!
//! Keeps each line as an ordered chain of directed station-to-station
//! sections and answers "what is the shortest way from here to there?"
//! across every line of the network.

pub mod config;
pub mod domain;
pub mod path;
pub mod registry;
pub mod service;
pub mod web;
