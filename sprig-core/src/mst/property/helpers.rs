//! Shared helpers for MST property-based tests.

use proptest::test_runner::TestCaseError;

use crate::{Edge, Kruskal, KruskalBuilder, MinimumSpanningForest, VertexIndexing};

use super::types::MstFixture;

/// Path-halving find over a plain parent vector.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Counts connected components of `edges` over `vertex_count` vertices.
pub(super) fn count_components(vertex_count: usize, edges: &[Edge<u32>]) -> usize {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut components = vertex_count;
    for edge in edges {
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.target());
        if left != right {
            parent[right] = left;
            components -= 1;
        }
    }
    components
}

/// Runner matching the fixtures' zero-based identifiers.
pub(super) fn runner() -> Kruskal {
    KruskalBuilder::new()
        .with_indexing(VertexIndexing::ZeroBased)
        .build()
}

/// Runs Kruskal over `edges`, mapping failures into a proptest error.
pub(super) fn run_fixture(
    fixture: &MstFixture,
    edges: &[Edge<u32>],
) -> Result<MinimumSpanningForest<u32>, TestCaseError> {
    runner().run(fixture.vertex_count, edges).map_err(|err| {
        TestCaseError::fail(format!("kruskal failed: {err} ({})", fixture.describe()))
    })
}
