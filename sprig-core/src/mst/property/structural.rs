//! Structural invariants of every returned forest.
//!
//! - **Acyclicity**: no accepted edge joins two already connected vertices.
//! - **Edge count**: exactly `n - c` edges for `c` components.
//! - **Spanning**: the forest has as many components as the input graph.
//! - **Provenance**: each accepted edge appears in the input, self-loops never do.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::Edge;

use super::helpers::{count_components, find_root, run_fixture};
use super::types::MstFixture;

/// Runs every structural check against the fixture's forest.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let forest = run_fixture(fixture, &fixture.edges)?;
    let accepted = forest.edges();

    validate_provenance(fixture, accepted)?;
    validate_acyclicity(fixture.vertex_count, accepted)?;

    let expected_edges = fixture.vertex_count - forest.component_count();
    if accepted.len() != expected_edges {
        return Err(TestCaseError::fail(format!(
            "edge count {}, expected n - c = {expected_edges} ({})",
            accepted.len(),
            fixture.describe(),
        )));
    }

    let input_components = count_components(fixture.vertex_count, &fixture.edges);
    if forest.component_count() != input_components {
        return Err(TestCaseError::fail(format!(
            "forest has {} components, input has {input_components} ({})",
            forest.component_count(),
            fixture.describe(),
        )));
    }

    if forest.is_tree() != (input_components == 1) {
        return Err(TestCaseError::fail(format!(
            "is_tree() disagrees with input connectivity ({})",
            fixture.describe(),
        )));
    }

    Ok(())
}

fn validate_provenance(fixture: &MstFixture, accepted: &[Edge<u32>]) -> TestCaseResult {
    for (i, edge) in accepted.iter().enumerate() {
        if edge.is_self_loop() {
            return Err(TestCaseError::fail(format!(
                "edge {i}: self-loop on vertex {}",
                edge.source(),
            )));
        }
        if !fixture.edges.contains(edge) {
            return Err(TestCaseError::fail(format!(
                "edge {i}: {edge:?} is not part of the input",
            )));
        }
    }
    Ok(())
}

fn validate_acyclicity(vertex_count: usize, accepted: &[Edge<u32>]) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    for (i, edge) in accepted.iter().enumerate() {
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.target());
        if left == right {
            return Err(TestCaseError::fail(format!(
                "edge {i}: ({}, {}) closes a cycle",
                edge.source(),
                edge.target(),
            )));
        }
        parent[right] = left;
    }
    Ok(())
}
