//! In-memory edge list and its loaders.

use std::fmt::Display;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use sprig_core::{Edge, VertexIndexing, Weight};
use tracing::{debug, instrument};

use crate::errors::EdgeListError;
use crate::parse::{Line, parse_line};

/// Edges read from an edge-list source, in file order.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeList<W> {
    edges: Vec<Edge<W>>,
    declared_vertex_count: Option<usize>,
}

impl<W> EdgeList<W>
where
    W: Weight + FromStr,
    W::Err: Display,
{
    /// Reads an edge list from any buffered reader.
    ///
    /// # Errors
    /// Returns the first malformed line as an [`EdgeListError`] carrying its
    /// line number, or [`EdgeListError::Read`] when the reader fails.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, EdgeListError> {
        let mut edges = Vec::new();
        let mut declared: Option<(usize, usize)> = None;

        for (index, raw) in reader.lines().enumerate() {
            let line = index + 1;
            let raw = raw.map_err(|source| EdgeListError::Read { line, source })?;
            match parse_line(line, &raw)? {
                None => {}
                Some(Line::Edge(edge)) => edges.push(edge),
                Some(Line::VertexCount(count)) => {
                    if let Some((first, _)) = declared {
                        return Err(EdgeListError::DuplicateVertexCount { line, first });
                    }
                    declared = Some((line, count));
                }
            }
        }

        debug!(
            edges = edges.len(),
            declared_vertex_count = ?declared.map(|(_, count)| count),
            "parsed edge list"
        );
        Ok(Self {
            edges,
            declared_vertex_count: declared.map(|(_, count)| count),
        })
    }

    /// Opens and reads the edge list stored at `path`.
    ///
    /// # Errors
    /// Returns [`EdgeListError::Open`] when the file cannot be opened and
    /// otherwise propagates [`EdgeList::from_reader`] failures.
    #[instrument(name = "edgelist.load", err, skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EdgeListError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| EdgeListError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }
}

impl<W: Weight> EdgeList<W> {
    /// Builds a list directly from edges, optionally declaring the vertex
    /// count.
    #[must_use]
    pub const fn new(edges: Vec<Edge<W>>, declared_vertex_count: Option<usize>) -> Self {
        Self {
            edges,
            declared_vertex_count,
        }
    }

    /// Edges in file order.
    #[must_use]
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    /// Consumes the list, returning its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<Edge<W>> {
        self.edges
    }

    /// The count given by a `vertices N` directive, if present.
    #[must_use]
    pub const fn declared_vertex_count(&self) -> Option<usize> {
        self.declared_vertex_count
    }

    /// Vertex count to run with: the declared count, or else the smallest
    /// universe containing every identifier under `indexing`.
    ///
    /// An identifier of `usize::MAX` under zero-based indexing saturates the
    /// inferred count, leaving that vertex out of range.
    #[must_use]
    pub fn vertex_count(&self, indexing: VertexIndexing) -> usize {
        if let Some(count) = self.declared_vertex_count {
            return count;
        }
        let Some(max) = self
            .edges
            .iter()
            .map(|edge| edge.source().max(edge.target()))
            .max()
        else {
            return 0;
        };
        match indexing {
            VertexIndexing::OneBased => max,
            VertexIndexing::ZeroBased => max.saturating_add(1),
        }
    }
}

impl<W> FromStr for EdgeList<W>
where
    W: Weight + FromStr,
    W::Err: Display,
{
    type Err = EdgeListError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::from_reader(text.as_bytes())
    }
}
