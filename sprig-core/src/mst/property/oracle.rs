//! Sort-based Kruskal oracle for MST property verification.
//!
//! Sorts a copy of the edge list instead of using a heap and tracks
//! components by relabelling instead of a disjoint-set forest. The sort key
//! matches the runner's extraction order, so both must accept the same
//! edges in the same sequence.

use crate::Edge;

/// Result of the oracle run.
#[derive(Clone, Debug)]
pub(super) struct OracleForest {
    pub edges: Vec<Edge<u32>>,
    pub total_weight: u128,
    pub component_count: usize,
}

/// Computes a minimum spanning forest over zero-based vertices.
///
/// Out-of-range endpoints are the caller's responsibility; fixtures never
/// produce them.
pub(super) fn sorted_kruskal(vertex_count: usize, edges: &[Edge<u32>]) -> OracleForest {
    let mut order = edges.iter().copied().collect::<Vec<_>>();
    // Stable sort keeps input position as the final tie-break.
    order.sort_by_key(|edge| (edge.weight(), edge.source(), edge.target()));

    let mut label: Vec<usize> = (0..vertex_count).collect();
    let mut accepted = Vec::new();
    let mut total_weight = 0_u128;
    let mut component_count = vertex_count;

    for edge in order {
        let keep = label[edge.source()];
        let merge = label[edge.target()];
        if keep == merge {
            continue;
        }
        for entry in &mut label {
            if *entry == merge {
                *entry = keep;
            }
        }
        total_weight += u128::from(edge.weight());
        component_count -= 1;
        accepted.push(edge);
    }

    OracleForest {
        edges: accepted,
        total_weight,
        component_count,
    }
}
