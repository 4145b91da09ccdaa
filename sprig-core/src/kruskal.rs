//! Entry points for running Kruskal's algorithm.
//!
//! Provides the reusable [`Kruskal`] runner configured through
//! [`crate::KruskalBuilder`] and the [`kruskal`] convenience function using
//! the default configuration.

#[cfg(feature = "metrics")]
use std::time::{Duration, Instant};

use tracing::{debug, instrument};

use crate::{
    Edge, Result, VertexIndexing, Weight,
    mst::{MinimumSpanningForest, RunStats, kruskal_forest},
};

/// Reusable Kruskal runner.
///
/// # Examples
/// ```
/// use sprig_core::{Edge, KruskalBuilder};
///
/// let kruskal = KruskalBuilder::new().build();
/// let edges = [
///     Edge::new(1, 2, 1_u32),
///     Edge::new(2, 3, 2),
///     Edge::new(2, 4, 4),
///     Edge::new(1, 4, 5),
///     Edge::new(1, 3, 3),
/// ];
/// let forest = kruskal.run(4, &edges)?;
/// assert_eq!(forest.edges(), &edges[..3]);
/// assert_eq!(forest.total_weight(), 7);
/// assert!(forest.is_tree());
/// # Ok::<(), sprig_core::MstError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kruskal {
    indexing: VertexIndexing,
}

impl Kruskal {
    pub(crate) const fn new(indexing: VertexIndexing) -> Self {
        Self { indexing }
    }

    /// Returns the vertex identifier convention used to validate edges.
    #[must_use]
    pub const fn indexing(&self) -> VertexIndexing {
        self.indexing
    }

    /// Computes a minimum spanning forest over `vertex_count` vertices.
    ///
    /// Edges are undirected. Self-loops and repeated edges never enter the
    /// result because their endpoints already share a component by the time
    /// they are extracted.
    ///
    /// # Errors
    /// Returns [`crate::MstError::EmptyUniverse`] when `vertex_count == 0`,
    /// [`crate::MstError::UniverseTooLarge`] when `vertex_count` vertices cannot
    /// be tracked in memory,
    /// [`crate::MstError::VertexOutOfRange`] when an endpoint falls outside the
    /// configured identifier range, [`crate::MstError::InvalidWeight`] for
    /// NaN or infinite float weights, and [`crate::MstError::WeightOverflow`]
    /// when the total weight cannot be represented.
    ///
    /// # Examples
    /// ```
    /// use sprig_core::{Edge, KruskalBuilder, MstError};
    ///
    /// let kruskal = KruskalBuilder::new().build();
    /// let err = kruskal.run(2, &[Edge::new(1, 3, 1_i64)]).unwrap_err();
    /// assert!(matches!(err, MstError::VertexOutOfRange { vertex: 3, .. }));
    /// ```
    #[instrument(
        name = "kruskal.run",
        err,
        skip_all,
        fields(
            vertex_count = vertex_count,
            edge_count = edges.len(),
            indexing = %self.indexing,
        ),
    )]
    pub fn run<W: Weight>(
        &self,
        vertex_count: usize,
        edges: &[Edge<W>],
    ) -> Result<MinimumSpanningForest<W>> {
        #[cfg(feature = "metrics")]
        let started = Instant::now();

        let (forest, stats) = kruskal_forest(self.indexing, vertex_count, edges)?;

        debug!(
            accepted = stats.accepted,
            rejected = stats.rejected,
            components = forest.component_count(),
            total_weight = %forest.total_weight(),
            "kruskal run completed"
        );
        #[cfg(feature = "metrics")]
        record_run(stats, started.elapsed());
        #[cfg(not(feature = "metrics"))]
        record_run(stats);
        Ok(forest)
    }
}

impl Default for Kruskal {
    fn default() -> Self {
        Self::new(VertexIndexing::default())
    }
}

/// Computes a minimum spanning forest using the default configuration
/// (one-based vertex identifiers).
///
/// # Errors
/// Propagates the errors documented on [`Kruskal::run`].
///
/// # Examples
/// ```
/// use sprig_core::{Edge, kruskal};
///
/// let forest = kruskal(4, &[Edge::new(1, 2, 1_u8), Edge::new(3, 4, 1)])?;
/// assert_eq!(forest.len(), 2);
/// assert_eq!(forest.total_weight(), 2);
/// assert_eq!(forest.component_count(), 2);
/// assert!(!forest.is_tree());
/// # Ok::<(), sprig_core::MstError>(())
/// ```
pub fn kruskal<W: Weight>(
    vertex_count: usize,
    edges: &[Edge<W>],
) -> Result<MinimumSpanningForest<W>> {
    Kruskal::default().run(vertex_count, edges)
}

#[cfg(feature = "metrics")]
fn record_run(stats: RunStats, elapsed: Duration) {
    metrics::counter!("kruskal_edges_accepted").increment(stats.accepted as u64);
    metrics::counter!("kruskal_edges_rejected").increment(stats.rejected as u64);
    metrics::histogram!("kruskal_run_duration_seconds").record(elapsed.as_secs_f64());
}

#[cfg(not(feature = "metrics"))]
const fn record_run(_stats: RunStats) {}
