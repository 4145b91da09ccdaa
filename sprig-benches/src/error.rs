//! Benchmark setup error type.

use sprig_core::{DisjointSetError, MstError};

use crate::graph::GraphError;

/// Errors that may occur while preparing benchmark inputs.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Graph(#[from] GraphError),
    /// The spanning forest computation rejected a generated graph.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
    /// A disjoint-set warm-up operation failed.
    #[error("disjoint-set operation failed: {0}")]
    DisjointSet(#[from] DisjointSetError),
}
