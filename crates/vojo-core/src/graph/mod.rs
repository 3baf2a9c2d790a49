//! The read-only graph capability consumed by the shortest-path algorithms.
//!
//! The algorithms do not own a graph representation. They see whatever the
//! caller hands them through the [`Graph`] trait: node enumeration, adjacency
//! enumeration, and edge-weight lookup. [`DirectedGraph`] is a minimal
//! adjacency-list implementation for callers that have nothing richer.

use vojo_common::types::NodeId;
use vojo_common::utils::hash::{FxHashMap, FxHashSet};

/// Read-only capability set over a weighted directed graph.
///
/// Implementations must keep the node and edge sets stable for the duration
/// of one algorithm run, and `has_node(id)` must agree with membership of
/// `id` in `nodes()`.
///
/// `Sync` is required because edge relaxation reads the graph from worker
/// threads.
pub trait Graph: Sync {
    /// Returns true when `id` names a node of this graph.
    fn has_node(&self, id: NodeId) -> bool;

    /// Enumerates all nodes. The order is the enumeration order used for
    /// dense indexing, so it must be reproducible within one run.
    fn nodes(&self) -> Vec<NodeId>;

    /// Enumerates the targets of all out-edges of `id`. Unknown nodes have
    /// no out-edges.
    fn out_neighbors(&self, id: NodeId) -> Vec<NodeId>;

    /// Returns the weight of the edge `from -> to`, or `None` when no such
    /// edge exists. `None` must never be collapsed to weight zero.
    ///
    /// The default implementation is the uniform-cost fallback: every
    /// existing edge costs 1. Graphs that carry explicit weights override
    /// this method.
    fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<f64> {
        if self.out_neighbors(from).contains(&to) {
            Some(1.0)
        } else {
            None
        }
    }
}

/// Minimal in-memory weighted directed graph.
///
/// Nodes are kept in insertion order, which fixes the dense-index assignment
/// of the trees built over this graph. Duplicate edges overwrite the stored
/// weight.
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph {
    order: Vec<NodeId>,
    members: FxHashSet<NodeId>,
    edges: FxHashMap<NodeId, Vec<(NodeId, f64)>>,
}

impl DirectedGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node. Re-adding an existing node is a no-op.
    pub fn add_node(&mut self, id: NodeId) {
        if self.members.insert(id) {
            self.order.push(id);
        }
    }

    /// Adds the edge `from -> to` with the given weight, inserting both
    /// endpoints as needed. An existing `from -> to` edge has its weight
    /// replaced.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: f64) {
        self.add_node(from);
        self.add_node(to);
        let list = self.edges.entry(from).or_default();
        if let Some(entry) = list.iter_mut().find(|(target, _)| *target == to) {
            entry.1 = weight;
        } else {
            list.push((to, weight));
        }
    }

    /// Number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.order.len()
    }
}

impl Graph for DirectedGraph {
    fn has_node(&self, id: NodeId) -> bool {
        self.members.contains(&id)
    }

    fn nodes(&self) -> Vec<NodeId> {
        self.order.clone()
    }

    fn out_neighbors(&self, id: NodeId) -> Vec<NodeId> {
        self.edges
            .get(&id)
            .map(|list| list.iter().map(|(target, _)| *target).collect())
            .unwrap_or_default()
    }

    fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.edges
            .get(&from)?
            .iter()
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| *weight)
    }
}
