//! Error types for the sprig core library.
//!
//! Defines the error enums exposed by the public API, their stable
//! machine-readable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::DisjointSet`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// The element index lies outside the set's universe.
    #[error("element {element} is outside the universe of {len} elements")]
    OutOfRange {
        /// The offending element index.
        element: usize,
        /// Number of elements tracked by the set.
        len: usize,
    },
    /// Storage for the requested universe could not be allocated.
    #[error("cannot allocate a disjoint set of {len} elements")]
    AllocationFailed {
        /// Requested number of elements.
        len: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// The element index lies outside the set's universe.
        OutOfRange => OutOfRange { .. } => "DISJOINT_SET_OUT_OF_RANGE",
        /// Storage for the requested universe could not be allocated.
        AllocationFailed => AllocationFailed { .. } => "DISJOINT_SET_ALLOCATION_FAILED",
    }
}

/// Errors returned while computing a minimum spanning tree or forest.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// The caller requested a spanning tree over zero vertices.
    #[error("cannot compute a spanning tree over an empty vertex universe")]
    EmptyUniverse,
    /// The vertex universe is too large to track.
    #[error("vertex count {vertex_count} exceeds the memory available for the component set")]
    UniverseTooLarge {
        /// Requested vertex count.
        vertex_count: usize,
    },
    /// An edge referenced a vertex outside the configured identifier range.
    #[error("edge {edge} references vertex {vertex}, expected an identifier in {first}..={last}")]
    VertexOutOfRange {
        /// Position of the edge in the input list.
        edge: usize,
        /// The offending vertex identifier.
        vertex: usize,
        /// Smallest valid identifier.
        first: usize,
        /// Largest valid identifier.
        last: usize,
    },
    /// An edge carried a weight that cannot be ordered (NaN or infinite).
    #[error("edge {edge} ({source_vertex}, {target_vertex}) has a non-finite weight")]
    InvalidWeight {
        /// Position of the edge in the input list.
        edge: usize,
        /// Source identifier as provided.
        source_vertex: usize,
        /// Target identifier as provided.
        target_vertex: usize,
    },
    /// Accumulating the total weight left the accumulator's range.
    #[error("total weight overflowed while accepting edge {edge}")]
    WeightOverflow {
        /// Position of the edge in the input list whose weight overflowed.
        edge: usize,
    },
    /// The disjoint-set rejected an element the builder had already validated.
    #[error("disjoint-set invariant violated: {error}")]
    DisjointSet {
        /// Underlying disjoint-set failure.
        #[from]
        error: DisjointSetError,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// The caller requested a spanning tree over zero vertices.
        EmptyUniverse => EmptyUniverse => "MST_EMPTY_UNIVERSE",
        /// The vertex universe is too large to track.
        UniverseTooLarge => UniverseTooLarge { .. } => "MST_UNIVERSE_TOO_LARGE",
        /// An edge referenced a vertex outside the configured identifier range.
        VertexOutOfRange => VertexOutOfRange { .. } => "MST_VERTEX_OUT_OF_RANGE",
        /// An edge carried a weight that cannot be ordered.
        InvalidWeight => InvalidWeight { .. } => "MST_INVALID_WEIGHT",
        /// Accumulating the total weight overflowed.
        WeightOverflow => WeightOverflow { .. } => "MST_WEIGHT_OVERFLOW",
        /// The disjoint-set rejected an already validated element.
        DisjointSetFailure => DisjointSet { .. } => "MST_DISJOINT_SET_FAILURE",
    }
}

impl MstError {
    /// Retrieve the inner [`DisjointSetErrorCode`] when the error originated in
    /// the [`crate::DisjointSet`].
    #[must_use]
    pub const fn disjoint_set_code(&self) -> Option<DisjointSetErrorCode> {
        match self {
            Self::DisjointSet { error } => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, MstError>;
