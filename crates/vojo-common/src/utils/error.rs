//! Error types for shortest-path computation.
//!
//! Every failure here is a permanent property of the input graph or
//! configuration, never a transient fault: there is no retry path. An absent
//! source node is deliberately *not* an error; the algorithms return a
//! degenerate empty tree for that case instead.

use crate::types::NodeId;
use thiserror::Error;

/// Convenience alias for results carrying a Vojo [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the shortest-path algorithms.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A negative edge weight was encountered during relaxation.
    ///
    /// Both algorithms require strictly non-negative weights; the whole
    /// computation aborts and no partial tree is returned.
    #[error("negative weight {weight} on edge {from} -> {to}")]
    NegativeWeight {
        /// Source node of the offending edge.
        from: NodeId,
        /// Target node of the offending edge.
        to: NodeId,
        /// The negative weight reported by the graph.
        weight: f64,
    },

    /// The graph advertised an edge whose weight lookup then failed.
    ///
    /// This is a contract violation of the graph capability: an edge
    /// enumerated by `out_neighbors` must have a resolvable weight. It is
    /// never treated as weight zero.
    #[error("no resolvable weight for advertised edge {from} -> {to}")]
    UnresolvedEdge {
        /// Source node of the unresolved edge.
        from: NodeId,
        /// Target node of the unresolved edge.
        to: NodeId,
    },

    /// A configuration value was rejected by validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An internal invariant was violated.
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NegativeWeight {
            from: NodeId::new(1),
            to: NodeId::new(2),
            weight: -0.5,
        };
        assert_eq!(err.to_string(), "negative weight -0.5 on edge 1 -> 2");

        let err = Error::UnresolvedEdge {
            from: NodeId::new(3),
            to: NodeId::new(4),
        };
        assert_eq!(err.to_string(), "no resolvable weight for advertised edge 3 -> 4");
    }

    #[test]
    fn test_error_equality() {
        let a = Error::InvalidConfig("delta".to_string());
        let b = Error::InvalidConfig("delta".to_string());
        assert_eq!(a, b);
    }
}
