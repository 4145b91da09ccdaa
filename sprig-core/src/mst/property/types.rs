//! Fixture types for MST property-based tests.

use crate::Edge;

/// Weight distribution strategy for generated graphs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Weights drawn from a wide range, so ties are rare.
    Unique,
    /// Edges share a pool of one to three weights, stressing tie-breaking.
    ManyIdentical,
    /// Random spanning path plus roughly `0.5n` to `n` extra edges.
    Sparse,
    /// Edge probability between 0.7 and 0.95 over all vertex pairs.
    Dense,
    /// Two to five components with no cross-component edges.
    Disconnected,
    /// Self-loops and parallel edges mixed into a random graph.
    Multigraph,
}

/// Generated input for a single property case.
///
/// Vertices are zero-based: every endpoint lies in `0..vertex_count`.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    pub vertex_count: usize,
    pub edges: Vec<Edge<u32>>,
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Formats the fixture dimensions for failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "distribution={:?}, vertices={}, edges={}",
            self.distribution,
            self.vertex_count,
            self.edges.len(),
        )
    }
}
