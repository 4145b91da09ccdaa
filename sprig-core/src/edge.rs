//! Weighted undirected edges.

use crate::weight::Weight;

/// A weighted edge between two vertex identifiers.
///
/// Endpoints are kept exactly as supplied; the MST builder never reorders or
/// canonicalises them, so accepted edges read back the way they were given.
///
/// # Examples
/// ```
/// use sprig_core::Edge;
///
/// let edge = Edge::new(1, 2, 4_u32);
/// assert_eq!((edge.source(), edge.target(), edge.weight()), (1, 2, 4));
/// assert_eq!(Edge::from((1, 2, 4_u32)), edge);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Edge<W> {
    source: usize,
    target: usize,
    weight: W,
}

impl<W: Weight> Edge<W> {
    /// Creates an edge from its endpoints and weight.
    #[must_use]
    pub const fn new(source: usize, target: usize, weight: W) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the first endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the second endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> W { self.weight }

    /// Returns `true` when both endpoints are the same vertex.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl<W: Weight> From<(usize, usize, W)> for Edge<W> {
    fn from((source, target, weight): (usize, usize, W)) -> Self {
        Self::new(source, target, weight)
    }
}
