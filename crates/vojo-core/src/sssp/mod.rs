//! Single-source shortest-path algorithms.
//!
//! Two engines over the same [`Graph`](crate::graph::Graph) capability and
//! [`ShortestPathTree`](crate::tree::ShortestPathTree) output:
//!
//! - [`bellman_ford`] - bounded-round relaxation, one concurrent edge batch
//!   per vertex.
//! - [`delta_stepping`] - bucketed relaxation that batches light and heavy
//!   edges to cut the number of rounds.
//!
//! Both share the same concurrency discipline: worker tasks evaluate edges
//! and return candidates by value, and the single collecting flow that
//! drains a batch is the only writer of the tree and bucket state.

mod bellman_ford;
mod bucket;
mod delta_stepping;
mod relax;

pub use bellman_ford::bellman_ford;
pub use delta_stepping::delta_stepping;
