//! Sprig core library.
//!
//! Computes minimum spanning trees with Kruskal's algorithm over a
//! [`DisjointSet`]. Disconnected graphs yield a minimum spanning forest, one
//! tree per component; check [`MinimumSpanningForest::is_tree`] when a single
//! tree is required.
//!
//! Vertex identifiers follow the configured [`VertexIndexing`] (one-based by
//! default) and every endpoint is validated before any edge is processed.
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled each run emits:
//!
//! - `kruskal_edges_accepted` (counter)
//! - `kruskal_edges_rejected` (counter)
//! - `kruskal_run_duration_seconds` (histogram, seconds)
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod disjoint_set;
mod edge;
mod error;
mod kruskal;
mod mst;
mod weight;

#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::{KruskalBuilder, VertexIndexing},
    disjoint_set::DisjointSet,
    edge::Edge,
    error::{DisjointSetError, DisjointSetErrorCode, MstError, MstErrorCode, Result},
    kruskal::{Kruskal, kruskal},
    mst::MinimumSpanningForest,
    weight::Weight,
};
