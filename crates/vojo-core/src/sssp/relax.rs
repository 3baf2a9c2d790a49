//! Batched, concurrent edge relaxation.
//!
//! Edge evaluation fans out onto the rayon pool; collecting the parallel
//! iterator is the rendezvous that ends a batch. Tasks only compute - they
//! read the graph and the tree and return a payload by value. Failure
//! conditions observed inside a task (missing or negative weight) travel in
//! that payload so the collecting flow can fail the whole computation
//! deterministically once the batch has drained, rather than unwinding out
//! of a worker thread.

use rayon::prelude::*;
use vojo_common::types::NodeId;
use vojo_common::utils::error::{Error, Result};

use crate::graph::Graph;
use crate::tree::ShortestPathTree;

/// Classification of an edge against the bucket width Δ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EdgeKind {
    /// Weight ≤ Δ; relaxed repeatedly inside a bucket's inner loop.
    Light,
    /// Weight > Δ; relaxed once per bucket, after the bucket settles.
    Heavy,
}

impl EdgeKind {
    fn admits(self, weight: f64, delta: f64) -> bool {
        match self {
            Self::Light => weight <= delta,
            Self::Heavy => weight > delta,
        }
    }
}

/// Candidate relaxation drained from a batch: reach `target` through
/// `source` at distance `candidate`. Consumed once, then discarded.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Request {
    /// Dense index of the node being relaxed.
    pub target: usize,
    /// Dense index of the node proposing the relaxation.
    pub source: usize,
    /// Proposed tentative distance (`dist[source] + weight`).
    pub candidate: f64,
}

/// Payload returned by one concurrently evaluated edge.
#[derive(Debug, Clone, Copy)]
struct EdgeOutcome {
    from: NodeId,
    to: NodeId,
    /// Dense index of `to`, when the tree indexes it.
    target: Option<usize>,
    /// Dense index of `from`.
    source: usize,
    /// `None` when the graph disclaimed the edge it advertised.
    weight: Option<f64>,
    /// `dist[from] + weight`; `+∞` when the weight is unresolved.
    candidate: f64,
}

fn evaluate<G: Graph>(
    graph: &G,
    tree: &ShortestPathTree,
    from: NodeId,
    source: usize,
    to: NodeId,
) -> EdgeOutcome {
    let weight = graph.edge_weight(from, to);
    let candidate = weight.map_or(f64::INFINITY, |w| tree.dist_at(source) + w);
    EdgeOutcome {
        from,
        to,
        target: tree.index_of(to),
        source,
        weight,
        candidate,
    }
}

/// Concurrently evaluates every out-edge of the vertex at dense index
/// `source` (one task per edge) and drains the batch.
///
/// Collecting the parallel iterator is the per-vertex barrier: no candidate
/// is surfaced to the caller until all of the vertex's edges have reported.
pub(crate) fn relax_vertex<G: Graph>(
    graph: &G,
    tree: &ShortestPathTree,
    source: usize,
) -> Result<Vec<Request>> {
    let from = tree.node_at(source);
    let outcomes: Vec<EdgeOutcome> = graph
        .out_neighbors(from)
        .par_iter()
        .map(|&to| evaluate(graph, tree, from, source, to))
        .collect();
    drain(outcomes)
}

/// Concurrently scans the out-edges of every member of a batch (one task per
/// member), keeping the edges whose weight matches `kind`, and drains the
/// result.
///
/// Edges with missing or negative weights are kept regardless of `kind` so
/// the collecting flow reports them instead of silently skipping a
/// precondition violation.
pub(crate) fn find_requests<G: Graph>(
    graph: &G,
    tree: &ShortestPathTree,
    members: &[usize],
    kind: EdgeKind,
    delta: f64,
) -> Result<Vec<Request>> {
    let outcomes: Vec<EdgeOutcome> = members
        .par_iter()
        .flat_map_iter(|&source| {
            let from = tree.node_at(source);
            graph
                .out_neighbors(from)
                .into_iter()
                .filter_map(move |to| {
                    let outcome = evaluate(graph, tree, from, source, to);
                    match outcome.weight {
                        None => Some(outcome),
                        Some(weight) if weight < 0.0 => Some(outcome),
                        Some(weight) if kind.admits(weight, delta) => Some(outcome),
                        Some(_) => None,
                    }
                })
        })
        .collect();
    drain(outcomes)
}

/// Turns a fully drained batch into requests, converting payload-carried
/// failures into typed errors.
fn drain(outcomes: Vec<EdgeOutcome>) -> Result<Vec<Request>> {
    let mut requests = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        let weight = outcome.weight.ok_or_else(|| Error::UnresolvedEdge {
            from: outcome.from,
            to: outcome.to,
        })?;
        if weight < 0.0 {
            return Err(Error::NegativeWeight {
                from: outcome.from,
                to: outcome.to,
                weight,
            });
        }
        let Some(target) = outcome.target else {
            return Err(Error::Internal(format!(
                "neighbor {} of {} is not indexed by the tree",
                outcome.to, outcome.from
            )));
        };
        requests.push(Request {
            target,
            source: outcome.source,
            candidate: outcome.candidate,
        });
    }
    Ok(requests)
}
