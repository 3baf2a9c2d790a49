//! Parallel Bellman-Ford single-source shortest paths.
//!
//! Classic Bellman-Ford restructured for per-round concurrency: each round
//! walks the vertices in enumeration order and evaluates one vertex's
//! out-edges concurrently, applying the drained candidates before the next
//! vertex starts. A full round without any improvement ends the run early.

use vojo_common::types::NodeId;
use vojo_common::utils::error::Result;

use super::relax;
use crate::graph::Graph;
use crate::tree::ShortestPathTree;

/// Computes the shortest-path tree from `source` using parallel
/// Bellman-Ford.
///
/// Runs at most `|V| - 1` relaxation rounds. Within a round, every vertex's
/// out-edges are relaxed concurrently behind a per-vertex barrier, and all
/// tree updates happen in the collecting flow between barriers. A later
/// candidate replaces an earlier one only when strictly smaller, so
/// equal-cost paths keep the first-seen predecessor.
///
/// An absent `source` yields the degenerate empty tree (check
/// [`ShortestPathTree::is_empty`] before querying); nodes with no path from
/// the source report `+∞`.
///
/// # Errors
///
/// [`NegativeWeight`](vojo_common::Error::NegativeWeight) when any scanned
/// edge weight is negative, [`UnresolvedEdge`](vojo_common::Error::UnresolvedEdge)
/// when the graph disclaims an edge it advertised. No partial tree is
/// returned.
///
/// # Complexity
///
/// O(V · E) worst case; early convergence typically stops far sooner.
pub fn bellman_ford<G: Graph>(graph: &G, source: NodeId) -> Result<ShortestPathTree> {
    if !graph.has_node(source) {
        return Ok(ShortestPathTree::empty(source));
    }

    let mut tree = ShortestPathTree::from_source(source, graph.nodes());
    let vertex_count = tree.len();

    for round in 0..vertex_count.saturating_sub(1) {
        let mut changed = false;

        for vertex in 0..vertex_count {
            for request in relax::relax_vertex(graph, &tree, vertex)? {
                if request.candidate < tree.dist_at(request.target) {
                    tree.set(request.target, request.candidate, request.source);
                    changed = true;
                }
            }
        }

        if !changed {
            tracing::debug!(round, "bellman-ford converged early");
            break;
        }
    }

    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DirectedGraph;
    use vojo_common::Error;

    fn id(raw: u64) -> NodeId {
        NodeId::new(raw)
    }

    #[test]
    fn test_four_node_cycle() {
        // A -> B -> C -> D -> A, unit weights.
        let mut g = DirectedGraph::new();
        g.add_edge(id(0), id(1), 1.0);
        g.add_edge(id(1), id(2), 1.0);
        g.add_edge(id(2), id(3), 1.0);
        g.add_edge(id(3), id(0), 1.0);

        let tree = bellman_ford(&g, id(0)).unwrap();
        assert_eq!(tree.distance(id(0)), 0.0);
        assert_eq!(tree.distance(id(1)), 1.0);
        assert_eq!(tree.distance(id(2)), 2.0);
        assert_eq!(tree.distance(id(3)), 3.0);
    }

    #[test]
    fn test_shorter_path_replaces_longer() {
        let mut g = DirectedGraph::new();
        g.add_edge(id(0), id(1), 10.0);
        g.add_edge(id(0), id(2), 1.0);
        g.add_edge(id(2), id(1), 2.0);

        let tree = bellman_ford(&g, id(0)).unwrap();
        assert_eq!(tree.distance(id(1)), 3.0);
        assert_eq!(tree.predecessor(id(1)), Some(id(2)));
    }

    #[test]
    fn test_equal_paths_keep_first_seen_predecessor() {
        // Two cost-2 paths to node 3; node 1 is relaxed first.
        let mut g = DirectedGraph::new();
        g.add_edge(id(0), id(1), 1.0);
        g.add_edge(id(0), id(2), 1.0);
        g.add_edge(id(1), id(3), 1.0);
        g.add_edge(id(2), id(3), 1.0);

        let tree = bellman_ford(&g, id(0)).unwrap();
        assert_eq!(tree.distance(id(3)), 2.0);
        assert_eq!(tree.predecessor(id(3)), Some(id(1)));
    }

    #[test]
    fn test_negative_weight_is_fatal() {
        let mut g = DirectedGraph::new();
        g.add_edge(id(0), id(1), -1.0);

        let err = bellman_ford(&g, id(0)).unwrap_err();
        assert!(matches!(err, Error::NegativeWeight { weight, .. } if weight == -1.0));
    }

    #[test]
    fn test_unreachable_node_reports_infinity() {
        let mut g = DirectedGraph::new();
        g.add_edge(id(0), id(1), 1.0);
        g.add_node(id(7));

        let tree = bellman_ford(&g, id(0)).unwrap();
        assert!(tree.distance(id(7)).is_infinite());
        assert!(tree.path_to(id(7)).is_empty());
    }

    #[test]
    fn test_absent_source_degenerate_tree() {
        let mut g = DirectedGraph::new();
        g.add_edge(id(0), id(1), 1.0);

        let tree = bellman_ford(&g, id(42)).unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.source(), id(42));
    }

    #[test]
    fn test_single_node_graph() {
        let mut g = DirectedGraph::new();
        g.add_node(id(0));

        let tree = bellman_ford(&g, id(0)).unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.distance(id(0)), 0.0);
        assert_eq!(tree.path_to(id(0)), vec![id(0)]);
    }
}
