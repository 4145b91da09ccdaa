//! Sequential Kruskal minimum spanning tree (MST) construction.
//!
//! Validates the whole edge list up front, loads it into a min-priority queue
//! and greedily accepts the cheapest edge whose endpoints still sit in separate
//! [`DisjointSet`] components. The loop stops once `n - 1` edges are accepted
//! or the queue runs dry; the latter yields a minimum spanning forest for
//! disconnected input.

mod forest;
mod queue;

use tracing::trace;

use crate::{DisjointSet, Edge, MstError, Result, VertexIndexing, Weight};

pub use self::forest::MinimumSpanningForest;

use self::queue::{EdgeQueue, QueuedEdge};

/// Counters gathered while draining the queue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct RunStats {
    pub(crate) accepted: usize,
    pub(crate) rejected: usize,
}

fn validate_endpoint(
    indexing: VertexIndexing,
    vertex_count: usize,
    position: usize,
    vertex: usize,
) -> Result<usize> {
    indexing
        .to_index(vertex, vertex_count)
        .ok_or_else(|| MstError::VertexOutOfRange {
            edge: position,
            vertex,
            first: indexing.first(),
            last: indexing.last(vertex_count).unwrap_or(indexing.first()),
        })
}

fn validate_edge<W: Weight>(
    indexing: VertexIndexing,
    vertex_count: usize,
    position: usize,
    edge: &Edge<W>,
) -> Result<QueuedEdge<W>> {
    let source_index = validate_endpoint(indexing, vertex_count, position, edge.source())?;
    let target_index = validate_endpoint(indexing, vertex_count, position, edge.target())?;

    if !edge.weight().is_admissible() {
        return Err(MstError::InvalidWeight {
            edge: position,
            source_vertex: edge.source(),
            target_vertex: edge.target(),
        });
    }

    Ok(QueuedEdge {
        edge: *edge,
        source_index,
        target_index,
        position,
    })
}

fn prepare_queue<W: Weight>(
    indexing: VertexIndexing,
    vertex_count: usize,
    edges: &[Edge<W>],
) -> Result<EdgeQueue<W>> {
    let candidates = edges
        .iter()
        .enumerate()
        .map(|(position, edge)| validate_edge(indexing, vertex_count, position, edge))
        .collect::<Result<Vec<_>>>()?;
    Ok(EdgeQueue::from(candidates))
}

/// Computes a minimum spanning forest with Kruskal's algorithm.
///
/// # Errors
/// Returns [`MstError::EmptyUniverse`] when `vertex_count == 0`,
/// [`MstError::UniverseTooLarge`] when no component set of that size can be
/// allocated, [`MstError::VertexOutOfRange`] or [`MstError::InvalidWeight`] for a
/// malformed edge (before any edge is processed), and
/// [`MstError::WeightOverflow`] when the total leaves the accumulator range.
pub(crate) fn kruskal_forest<W: Weight>(
    indexing: VertexIndexing,
    vertex_count: usize,
    edges: &[Edge<W>],
) -> Result<(MinimumSpanningForest<W>, RunStats)> {
    let Some(tree_size) = vertex_count.checked_sub(1) else {
        return Err(MstError::EmptyUniverse);
    };

    let mut components = DisjointSet::try_new(vertex_count)
        .map_err(|_| MstError::UniverseTooLarge { vertex_count })?;
    let mut queue = prepare_queue(indexing, vertex_count, edges)?;
    let mut accepted = Vec::with_capacity(tree_size.min(queue.len()));
    let mut total = W::Total::default();
    let mut stats = RunStats::default();

    while accepted.len() < tree_size {
        let Some(candidate) = queue.pop() else {
            break;
        };

        if components.union(candidate.source_index, candidate.target_index)? {
            total = W::accumulate(total, candidate.edge.weight()).ok_or(
                MstError::WeightOverflow {
                    edge: candidate.position,
                },
            )?;
            trace!(
                source = candidate.edge.source(),
                target = candidate.edge.target(),
                weight = %candidate.edge.weight(),
                "accepted edge"
            );
            accepted.push(candidate.edge);
        } else {
            trace!(
                source = candidate.edge.source(),
                target = candidate.edge.target(),
                weight = %candidate.edge.weight(),
                "rejected edge closing a cycle"
            );
            stats.rejected = stats.rejected.saturating_add(1);
        }
    }

    stats.accepted = accepted.len();
    let forest =
        MinimumSpanningForest::new(accepted, total, vertex_count, components.component_count());
    Ok((forest, stats))
}


#[cfg(test)]
mod property;
