//! Benchmark parameter types used as Criterion input labels.

use std::fmt;

use crate::graph::Topology;

/// Parameters for a Kruskal benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct KruskalBenchParams {
    /// Number of vertices in the generated graph.
    pub vertex_count: usize,
    /// Shape of the generated graph.
    pub topology: Topology,
}

impl fmt::Display for KruskalBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},n={}", self.topology, self.vertex_count)
    }
}
