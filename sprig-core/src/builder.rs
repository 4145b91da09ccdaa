//! Builder utilities for configuring [`Kruskal`] runs.
//!
//! Exposes the vertex identifier convention and the builder used to
//! construct reusable [`Kruskal`] instances.

use std::fmt;

use crate::kruskal::Kruskal;

/// Convention used by callers to number vertices.
///
/// The builder validates every edge endpoint against the range implied by the
/// convention and the vertex count: `0..n` for [`VertexIndexing::ZeroBased`],
/// `1..=n` for [`VertexIndexing::OneBased`].
///
/// # Examples
/// ```
/// use sprig_core::VertexIndexing;
///
/// assert_eq!(VertexIndexing::OneBased.to_index(4, 4), Some(3));
/// assert_eq!(VertexIndexing::OneBased.to_index(0, 4), None);
/// assert_eq!(VertexIndexing::ZeroBased.to_index(4, 4), None);
/// assert_eq!(VertexIndexing::default(), VertexIndexing::OneBased);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexIndexing {
    /// Vertices are numbered `0..n`.
    ZeroBased,
    /// Vertices are numbered `1..=n`.
    #[default]
    OneBased,
}

impl VertexIndexing {
    /// Returns the smallest valid identifier.
    #[must_use]
    pub const fn first(self) -> usize {
        match self {
            Self::ZeroBased => 0,
            Self::OneBased => 1,
        }
    }

    /// Returns the largest valid identifier for `vertex_count` vertices, or
    /// `None` when the universe is empty.
    #[must_use]
    pub const fn last(self, vertex_count: usize) -> Option<usize> {
        match vertex_count.checked_sub(1) {
            Some(highest_index) => Some(highest_index + self.first()),
            None => None,
        }
    }

    /// Translates an identifier into a zero-based element index, returning
    /// `None` when the identifier lies outside the universe.
    #[must_use]
    pub const fn to_index(self, vertex: usize, vertex_count: usize) -> Option<usize> {
        match vertex.checked_sub(self.first()) {
            Some(index) if index < vertex_count => Some(index),
            _ => None,
        }
    }

    /// Returns the stable label used in logs and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ZeroBased => "zero-based",
            Self::OneBased => "one-based",
        }
    }
}

impl fmt::Display for VertexIndexing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configures and constructs [`Kruskal`] instances.
///
/// # Examples
/// ```
/// use sprig_core::{KruskalBuilder, VertexIndexing};
///
/// let kruskal = KruskalBuilder::new()
///     .with_indexing(VertexIndexing::ZeroBased)
///     .build();
/// assert_eq!(kruskal.indexing(), VertexIndexing::ZeroBased);
/// ```
#[derive(Debug, Default, Clone)]
pub struct KruskalBuilder {
    indexing: VertexIndexing,
}

impl KruskalBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use sprig_core::{KruskalBuilder, VertexIndexing};
    ///
    /// let builder = KruskalBuilder::new();
    /// assert_eq!(builder.indexing(), VertexIndexing::OneBased);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the vertex identifier convention.
    #[must_use]
    pub const fn with_indexing(mut self, indexing: VertexIndexing) -> Self {
        self.indexing = indexing;
        self
    }

    /// Returns the configured vertex identifier convention.
    #[must_use]
    pub const fn indexing(&self) -> VertexIndexing {
        self.indexing
    }

    /// Constructs a [`Kruskal`] instance from the configuration.
    #[must_use]
    pub const fn build(self) -> Kruskal {
        Kruskal::new(self.indexing)
    }
}
