//! Output of a minimum spanning forest computation.

use crate::{Edge, Weight};

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
/// Disconnected input yields one tree per component; callers needing a single
/// tree should check [`MinimumSpanningForest::is_tree`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(serialize = "W: serde::Serialize, W::Total: serde::Serialize"))
)]
pub struct MinimumSpanningForest<W: Weight> {
    edges: Vec<Edge<W>>,
    total_weight: W::Total,
    vertex_count: usize,
    component_count: usize,
}

impl<W: Weight> MinimumSpanningForest<W> {
    pub(crate) const fn new(
        edges: Vec<Edge<W>>,
        total_weight: W::Total,
        vertex_count: usize,
        component_count: usize,
    ) -> Self {
        Self {
            edges,
            total_weight,
            vertex_count,
            component_count,
        }
    }

    /// Returns the accepted edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge<W>] { &self.edges }

    /// Consumes the forest, returning the accepted edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<Edge<W>> {
        self.edges
    }

    /// Returns the sum of the accepted edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> W::Total { self.total_weight }

    /// Returns the number of vertices in the universe.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of connected components in the forest.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Returns the number of accepted edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when no edge was accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
