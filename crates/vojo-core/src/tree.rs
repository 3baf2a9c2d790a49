//! The shortest-path tree produced by both algorithms.

use vojo_common::types::NodeId;
use vojo_common::utils::hash::FxHashMap;

/// Single-source shortest-path tree.
///
/// Holds one tentative distance and one predecessor slot per node, addressed
/// through a dense index assigned in graph enumeration order. Distances only
/// ever decrease while an algorithm runs; a node never reached from the
/// source keeps `f64::INFINITY`.
///
/// Mutation is deliberately crate-private: the algorithms funnel every update
/// through [`set`](Self::set), the single point where a distance and its
/// predecessor change together.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: NodeId,
    index_of: FxHashMap<NodeId, usize>,
    nodes: Vec<NodeId>,
    dist: Vec<f64>,
    next: Vec<Option<usize>>,
}

impl ShortestPathTree {
    /// The degenerate tree returned when the source is absent from the
    /// graph: `source` is recorded but the tree indexes no nodes. Callers
    /// detect it with [`is_empty`](Self::is_empty) before querying.
    pub(crate) fn empty(source: NodeId) -> Self {
        Self {
            source,
            index_of: FxHashMap::default(),
            nodes: Vec::new(),
            dist: Vec::new(),
            next: Vec::new(),
        }
    }

    /// Builds a tree over `nodes`, assigning dense indices in enumeration
    /// order. All distances start at `+∞` except the source, which starts
    /// at 0 with no predecessor.
    pub(crate) fn from_source(source: NodeId, nodes: Vec<NodeId>) -> Self {
        let mut index_of = FxHashMap::default();
        index_of.reserve(nodes.len());
        for (index, &node) in nodes.iter().enumerate() {
            index_of.insert(node, index);
        }

        let mut dist = vec![f64::INFINITY; nodes.len()];
        let next = vec![None; nodes.len()];
        if let Some(&src) = index_of.get(&source) {
            dist[src] = 0.0;
        }

        Self {
            source,
            index_of,
            nodes,
            dist,
            next,
        }
    }

    /// Commits an improved distance and its predecessor in one step, so no
    /// reader can observe a distance paired with a stale predecessor.
    pub(crate) fn set(&mut self, index: usize, distance: f64, predecessor: usize) {
        debug_assert!(
            distance <= self.dist[index],
            "tentative distances never increase"
        );
        self.dist[index] = distance;
        self.next[index] = Some(predecessor);
    }

    /// Dense index of `id`, if the node is part of this tree.
    pub(crate) fn index_of(&self, id: NodeId) -> Option<usize> {
        self.index_of.get(&id).copied()
    }

    /// Tentative distance at a dense index.
    pub(crate) fn dist_at(&self, index: usize) -> f64 {
        self.dist[index]
    }

    /// Node at a dense index.
    pub(crate) fn node_at(&self, index: usize) -> NodeId {
        self.nodes[index]
    }

    /// The origin node this tree was computed from.
    #[must_use]
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Number of nodes indexed by this tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True for the degenerate tree produced when the source was absent
    /// from the graph.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Shortest known distance from the source to `id`.
    ///
    /// Returns `f64::INFINITY` when `id` is unreachable or unknown to this
    /// tree.
    #[must_use]
    pub fn distance(&self, id: NodeId) -> f64 {
        self.index_of(id)
            .map_or(f64::INFINITY, |index| self.dist[index])
    }

    /// Predecessor of `id` on its shortest path, if one was recorded.
    #[must_use]
    pub fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        let index = self.index_of(id)?;
        self.next[index].map(|prev| self.nodes[prev])
    }

    /// Shortest path from the source to `id`, both endpoints included.
    ///
    /// Returns an empty path when `id` is unreachable or unknown.
    #[must_use]
    pub fn path_to(&self, id: NodeId) -> Vec<NodeId> {
        let Some(target) = self.index_of(id) else {
            return Vec::new();
        };
        if self.dist[target].is_infinite() {
            return Vec::new();
        }

        let mut path = vec![self.nodes[target]];
        let mut current = target;
        // The predecessor chain is acyclic; the bound guards against a
        // corrupted chain looping forever.
        for _ in 0..self.nodes.len() {
            if self.nodes[current] == self.source {
                path.reverse();
                return path;
            }
            match self.next[current] {
                Some(prev) => {
                    path.push(self.nodes[prev]);
                    current = prev;
                }
                None => break,
            }
        }
        Vec::new()
    }
}
