//! Error types reported by graph operations.

use thiserror::Error;

use crate::graph::Weight;

/// The error type for fallible [`DiGraph`](crate::DiGraph) operations.
///
/// Every variant describes a caller-visible condition and is recoverable.
/// Structural corruption — a mirror pair where one side exists without the
/// other — is never reported through this type; those are bugs in the
/// container itself and panic instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// The index is out of range, or names a node that has been removed.
    #[error("node {0} does not exist")]
    NodeNotFound(usize),

    /// No arc matched a removal request.
    #[error("no arc from {from} to {to}")]
    ArcNotFound {
        /// Source index the removal was addressed to.
        from: usize,
        /// Target index the removal was addressed to.
        to: usize,
        /// The requested weight, when the weighted variant was used.
        weight: Option<Weight>,
    },

    /// Both endpoints exist but no directed path connects them.
    #[error("no path from {from} to {to}")]
    Unreachable {
        /// Start of the failed query.
        from: usize,
        /// End of the failed query.
        to: usize,
    },
}
