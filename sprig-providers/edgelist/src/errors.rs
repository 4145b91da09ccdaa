//! Errors raised while loading edge lists.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while reading an edge list. Line numbers are 1-based.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum EdgeListError {
    /// The file could not be opened.
    #[error("failed to open edge list `{}`: {source}", path.display())]
    Open {
        /// Path passed to the loader.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// A line could not be read, including invalid UTF-8.
    #[error("line {line}: read failed: {source}")]
    Read {
        /// Line being read when the failure occurred.
        line: usize,
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// An edge line did not hold exactly three fields.
    #[error("line {line}: expected `source target weight`, found {found} fields")]
    FieldCount {
        /// Offending line.
        line: usize,
        /// Number of whitespace-separated fields found.
        found: usize,
    },
    /// A vertex identifier was not a non-negative integer.
    #[error("line {line}: invalid vertex identifier `{value}`")]
    InvalidVertex {
        /// Offending line.
        line: usize,
        /// Text that failed to parse.
        value: String,
    },
    /// The weight column failed to parse as the requested weight type.
    #[error("line {line}: invalid weight `{value}`: {reason}")]
    InvalidWeight {
        /// Offending line.
        line: usize,
        /// Text that failed to parse.
        value: String,
        /// Parser message for the weight type.
        reason: String,
    },
    /// A `vertices N` directive carried an unusable count.
    #[error("line {line}: invalid vertex count directive `{text}`")]
    InvalidVertexCount {
        /// Offending line.
        line: usize,
        /// Directive line as written.
        text: String,
    },
    /// A second `vertices` directive appeared.
    #[error("line {line}: vertex count already declared on line {first}")]
    DuplicateVertexCount {
        /// Line of the repeated directive.
        line: usize,
        /// Line of the first directive.
        first: usize,
    },
}

impl EdgeListError {
    /// Stable machine-readable identifier for the failure.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Open { .. } => "EDGELIST_OPEN",
            Self::Read { .. } => "EDGELIST_READ",
            Self::FieldCount { .. } => "EDGELIST_FIELD_COUNT",
            Self::InvalidVertex { .. } => "EDGELIST_INVALID_VERTEX",
            Self::InvalidWeight { .. } => "EDGELIST_INVALID_WEIGHT",
            Self::InvalidVertexCount { .. } => "EDGELIST_INVALID_VERTEX_COUNT",
            Self::DuplicateVertexCount { .. } => "EDGELIST_DUPLICATE_VERTEX_COUNT",
        }
    }

    /// Line the failure was detected on, when it relates to file content.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::Open { .. } => None,
            Self::Read { line, .. }
            | Self::FieldCount { line, .. }
            | Self::InvalidVertex { line, .. }
            | Self::InvalidWeight { line, .. }
            | Self::InvalidVertexCount { line, .. }
            | Self::DuplicateVertexCount { line, .. } => Some(*line),
        }
    }
}
