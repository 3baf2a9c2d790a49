//! Δ-stepping single-source shortest paths.
//!
//! Nodes are grouped into buckets by tentative-distance range of width Δ.
//! Each bucket is drained by repeated *light* relaxation batches (edges with
//! weight ≤ Δ, which can refill the bucket) and then a single *heavy* batch
//! (edges with weight > Δ, whose candidates always land in a later bucket)
//! over everything the bucket settled.

use vojo_common::types::NodeId;
use vojo_common::utils::error::{Error, Result};
use vojo_common::utils::hash::FxHashSet;

use super::bucket::BucketQueue;
use super::relax::{self, EdgeKind, Request};
use crate::config::DeltaSteppingConfig;
use crate::graph::Graph;
use crate::tree::ShortestPathTree;

/// Computes the shortest-path tree from `source` using Δ-stepping.
///
/// Buckets are processed in ascending index order; a bucket's inner loop
/// alternates parallel light-edge batches with single-writer application
/// until the bucket stays empty, then relaxes the heavy out-edges of every
/// node the bucket settled exactly once. All tree and bucket mutation
/// happens in the collecting flow between batches.
///
/// An absent `source` yields the degenerate empty tree (check
/// [`ShortestPathTree::is_empty`] before querying); nodes with no path from
/// the source report `+∞`.
///
/// # Errors
///
/// [`InvalidConfig`](vojo_common::Error::InvalidConfig) when the
/// configuration fails validation,
/// [`NegativeWeight`](vojo_common::Error::NegativeWeight) when any scanned
/// edge weight is negative, and
/// [`UnresolvedEdge`](vojo_common::Error::UnresolvedEdge) when the graph
/// disclaims an edge it advertised. No partial tree is returned.
pub fn delta_stepping<G: Graph>(
    graph: &G,
    source: NodeId,
    config: &DeltaSteppingConfig,
) -> Result<ShortestPathTree> {
    config
        .validate()
        .map_err(|err| Error::InvalidConfig(err.to_string()))?;

    if !graph.has_node(source) {
        return Ok(ShortestPathTree::empty(source));
    }

    let delta = config.delta;
    let mut tree = ShortestPathTree::from_source(source, graph.nodes());
    let mut buckets = BucketQueue::new(delta, tree.len());

    if let Some(src) = tree.index_of(source) {
        buckets.insert(src, 0.0);
    }

    let mut current = buckets.next_nonempty(0);
    while let Some(index) = current {
        // Everything drawn from this bucket; feeds the heavy phase once the
        // bucket stays empty.
        let mut settled: FxHashSet<usize> = FxHashSet::default();

        while buckets.has_members(index) {
            let members = buckets.take(index);
            let requests = relax::find_requests(graph, &tree, &members, EdgeKind::Light, delta)?;
            settled.extend(members);
            apply(&mut tree, &mut buckets, requests);
            // Light edges may have refilled this bucket; keep going until dry.
        }

        let mut frontier: Vec<usize> = settled.into_iter().collect();
        frontier.sort_unstable();
        let requests = relax::find_requests(graph, &tree, &frontier, EdgeKind::Heavy, delta)?;
        apply(&mut tree, &mut buckets, requests);

        // Heavy candidates from this bucket land strictly above it, and
        // buckets below it are settled for good once it drains.
        current = buckets.next_nonempty(index + 1);
    }

    tracing::debug!(
        nodes = tree.len(),
        buckets = buckets.len(),
        "delta-stepping drained all buckets"
    );
    Ok(tree)
}

/// Applies a drained batch: every strict improvement (first reaches from
/// `+∞` included) moves the target to the bucket covering its new distance,
/// then commits the distance/predecessor pair to the tree.
fn apply(tree: &mut ShortestPathTree, buckets: &mut BucketQueue, requests: Vec<Request>) {
    for request in requests {
        if request.candidate < tree.dist_at(request.target) {
            buckets.insert(request.target, request.candidate);
            tree.set(request.target, request.candidate, request.source);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DirectedGraph;

    fn id(raw: u64) -> NodeId {
        NodeId::new(raw)
    }

    fn run(graph: &DirectedGraph, source: NodeId) -> Result<ShortestPathTree> {
        delta_stepping(graph, source, &DeltaSteppingConfig::default())
    }

    #[test]
    fn test_four_node_cycle() {
        let mut g = DirectedGraph::new();
        g.add_edge(id(0), id(1), 1.0);
        g.add_edge(id(1), id(2), 1.0);
        g.add_edge(id(2), id(3), 1.0);
        g.add_edge(id(3), id(0), 1.0);

        let tree = run(&g, id(0)).unwrap();
        assert_eq!(tree.distance(id(0)), 0.0);
        assert_eq!(tree.distance(id(1)), 1.0);
        assert_eq!(tree.distance(id(2)), 2.0);
        assert_eq!(tree.distance(id(3)), 3.0);
    }

    #[test]
    fn test_diamond_exercises_light_and_heavy() {
        // A->B (light), A->C (heavy at Δ=3), B->D, C->D. D settles via B.
        let mut g = DirectedGraph::new();
        g.add_edge(id(0), id(1), 1.0);
        g.add_edge(id(0), id(2), 4.0);
        g.add_edge(id(1), id(3), 1.0);
        g.add_edge(id(2), id(3), 1.0);

        let tree = run(&g, id(0)).unwrap();
        assert_eq!(tree.distance(id(3)), 2.0);
        assert_eq!(tree.predecessor(id(3)), Some(id(1)));
        assert_eq!(tree.distance(id(2)), 4.0);
        assert_eq!(tree.path_to(id(3)), vec![id(0), id(1), id(3)]);
    }

    #[test]
    fn test_heavy_only_graph() {
        // Every edge exceeds Δ, so each bucket settles one node and all
        // relaxation goes through the heavy phase.
        let mut g = DirectedGraph::new();
        g.add_edge(id(0), id(1), 5.0);
        g.add_edge(id(1), id(2), 7.0);

        let tree = run(&g, id(0)).unwrap();
        assert_eq!(tree.distance(id(1)), 5.0);
        assert_eq!(tree.distance(id(2)), 12.0);
    }

    #[test]
    fn test_light_refill_of_current_bucket() {
        // A chain of 0.5-weight edges keeps refilling bucket 0.
        let mut g = DirectedGraph::new();
        g.add_edge(id(0), id(1), 0.5);
        g.add_edge(id(1), id(2), 0.5);
        g.add_edge(id(2), id(3), 0.5);

        let tree = run(&g, id(0)).unwrap();
        assert_eq!(tree.distance(id(3)), 1.5);
    }

    #[test]
    fn test_improvement_moves_node_between_buckets() {
        // Node 2 is first reached at 9.0 (bucket 3), then improved to 4.0
        // (bucket 1) before it settles.
        let mut g = DirectedGraph::new();
        g.add_edge(id(0), id(1), 3.0);
        g.add_edge(id(0), id(2), 9.0);
        g.add_edge(id(1), id(2), 1.0);

        let tree = run(&g, id(0)).unwrap();
        assert_eq!(tree.distance(id(2)), 4.0);
        assert_eq!(tree.predecessor(id(2)), Some(id(1)));
    }

    #[test]
    fn test_negative_weight_is_fatal() {
        let mut g = DirectedGraph::new();
        g.add_edge(id(0), id(1), -1.0);

        let err = run(&g, id(0)).unwrap_err();
        assert!(matches!(err, Error::NegativeWeight { .. }));
    }

    #[test]
    fn test_disconnected_node_reports_infinity() {
        let mut g = DirectedGraph::new();
        g.add_edge(id(0), id(1), 1.0);
        g.add_node(id(9));

        let tree = run(&g, id(0)).unwrap();
        assert!(tree.distance(id(9)).is_infinite());
    }

    #[test]
    fn test_absent_source_degenerate_tree() {
        let g = DirectedGraph::new();
        let tree = run(&g, id(3)).unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.source(), id(3));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut g = DirectedGraph::new();
        g.add_node(id(0));

        let config = DeltaSteppingConfig::with_delta(0.0);
        let err = delta_stepping(&g, id(0), &config).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_delta_one_matches_default() {
        let mut g = DirectedGraph::new();
        g.add_edge(id(0), id(1), 2.0);
        g.add_edge(id(1), id(2), 2.0);
        g.add_edge(id(0), id(2), 5.0);

        let fine = delta_stepping(&g, id(0), &DeltaSteppingConfig::with_delta(1.0)).unwrap();
        let coarse = run(&g, id(0)).unwrap();
        for node in [id(0), id(1), id(2)] {
            assert_eq!(fine.distance(node), coarse.distance(node));
        }
    }
}
