//! # vojo-core
//!
//! Concurrent single-source shortest-path computation over weighted directed
//! graphs. Two engines produce the same [`ShortestPathTree`]:
//!
//! - [`sssp::bellman_ford`] - parallel Bellman-Ford; bounded rounds, each
//!   vertex's out-edges relaxed concurrently behind a per-vertex barrier.
//! - [`sssp::delta_stepping`] - Δ-stepping; bucketed light/heavy relaxation
//!   batches that settle nodes in distance order.
//!
//! The graph itself is supplied by the caller through the read-only
//! [`Graph`] capability trait; the algorithms never mutate it.
//!
//! ## Modules
//!
//! - [`graph`] - The graph capability trait and an in-memory reference impl
//! - [`tree`] - The shortest-path tree output structure
//! - [`config`] - Δ-stepping configuration
//! - [`sssp`] - The two algorithms

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod graph;
pub mod sssp;
pub mod tree;

// Re-export commonly used types
pub use config::{ConfigError, DeltaSteppingConfig, DEFAULT_DELTA};
pub use graph::{DirectedGraph, Graph};
pub use sssp::{bellman_ford, delta_stepping};
pub use tree::ShortestPathTree;
