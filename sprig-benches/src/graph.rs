//! Seeded synthetic graphs for the Kruskal and disjoint-set benchmarks.
//!
//! Every generated graph uses zero-based vertex identifiers and always
//! contains a spanning path, so the minimum spanning forest is a single tree
//! regardless of topology.

use std::fmt;

use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};
use sprig_core::Edge;

/// Errors raised while generating synthetic graphs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The requested vertex count was zero.
    #[error("vertex count must be greater than zero")]
    ZeroVertices,
    /// The requested maximum weight was zero.
    #[error("maximum weight must be greater than zero")]
    ZeroMaxWeight,
    /// The requested edge count does not fit in `usize`.
    #[error("edge count for {vertex_count} vertices overflows usize")]
    Overflow {
        /// Number of vertices requested.
        vertex_count: usize,
    },
}

/// Shape of a generated graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topology {
    /// A shuffled spanning path and nothing else.
    Path,
    /// A spanning path plus `edges_per_vertex` random extra edges per vertex.
    Random,
    /// Every pair of vertices joined once.
    Complete,
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Path => "path",
            Self::Random => "random",
            Self::Complete => "complete",
        };
        f.write_str(name)
    }
}

/// Parameters controlling [`SyntheticGraph::generate`].
#[derive(Clone, Copy, Debug)]
pub struct GraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Extra random edges per vertex for [`Topology::Random`].
    pub edges_per_vertex: usize,
    /// Largest weight drawn; weights are uniform in `1..=max_weight`.
    pub max_weight: u32,
    /// Seed for the deterministic generator.
    pub seed: u64,
    /// Graph shape.
    pub topology: Topology,
}

/// A generated graph ready to feed to the Kruskal benchmarks.
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    vertex_count: usize,
    edges: Vec<Edge<u32>>,
}

impl SyntheticGraph {
    /// Generates a graph described by `config`.
    ///
    /// # Errors
    /// Returns [`GraphError`] when the configuration is empty or the edge
    /// count would overflow.
    ///
    /// # Examples
    /// ```
    /// use sprig_benches::graph::{GraphConfig, SyntheticGraph, Topology};
    ///
    /// let graph = SyntheticGraph::generate(&GraphConfig {
    ///     vertex_count: 8,
    ///     edges_per_vertex: 2,
    ///     max_weight: 100,
    ///     seed: 7,
    ///     topology: Topology::Random,
    /// })?;
    /// assert_eq!(graph.vertex_count(), 8);
    /// assert_eq!(graph.edges().len(), 7 + 16);
    /// # Ok::<(), sprig_benches::graph::GraphError>(())
    /// ```
    pub fn generate(config: &GraphConfig) -> Result<Self, GraphError> {
        if config.vertex_count == 0 {
            return Err(GraphError::ZeroVertices);
        }
        if config.max_weight == 0 {
            return Err(GraphError::ZeroMaxWeight);
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let capacity = edge_capacity(config)?;
        let mut edges = Vec::with_capacity(capacity);

        match config.topology {
            Topology::Path | Topology::Random => {
                let mut order: Vec<usize> = (0..config.vertex_count).collect();
                order.shuffle(&mut rng);
                for pair in order.windows(2) {
                    if let [source, target] = *pair {
                        edges.push(Edge::new(source, target, rng.gen_range(1..=config.max_weight)));
                    }
                }
                if config.topology == Topology::Random {
                    let extra = capacity.saturating_sub(edges.len());
                    for _ in 0..extra {
                        let source = rng.gen_range(0..config.vertex_count);
                        let target = rng.gen_range(0..config.vertex_count);
                        edges.push(Edge::new(source, target, rng.gen_range(1..=config.max_weight)));
                    }
                }
            }
            Topology::Complete => {
                for source in 0..config.vertex_count {
                    for target in source.saturating_add(1)..config.vertex_count {
                        edges.push(Edge::new(source, target, rng.gen_range(1..=config.max_weight)));
                    }
                }
                edges.shuffle(&mut rng);
            }
        }

        Ok(Self {
            vertex_count: config.vertex_count,
            edges,
        })
    }

    /// Number of vertices in the graph.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Generated edges, in generation order.
    #[must_use]
    pub fn edges(&self) -> &[Edge<u32>] {
        &self.edges
    }

    /// The same edges with `f64` weights, for the floating-point path.
    #[must_use]
    pub fn float_edges(&self) -> Vec<Edge<f64>> {
        self.edges
            .iter()
            .map(|edge| Edge::new(edge.source(), edge.target(), f64::from(edge.weight())))
            .collect()
    }
}

fn edge_capacity(config: &GraphConfig) -> Result<usize, GraphError> {
    let overflow = GraphError::Overflow {
        vertex_count: config.vertex_count,
    };
    let path = config.vertex_count.saturating_sub(1);
    match config.topology {
        Topology::Path => Ok(path),
        Topology::Random => config
            .vertex_count
            .checked_mul(config.edges_per_vertex)
            .and_then(|extra| extra.checked_add(path))
            .ok_or(overflow),
        Topology::Complete => config
            .vertex_count
            .checked_mul(path)
            .map(|pairs| pairs >> 1)
            .ok_or(overflow),
    }
}
