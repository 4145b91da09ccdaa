//! Cycle optimality property.
//!
//! A spanning forest is minimal exactly when, for every input edge
//! `(u, v, w)`, `u` and `v` are connected in the forest and no edge on the
//! forest path between them weighs more than `w`.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::Edge;

use super::helpers::run_fixture;
use super::types::MstFixture;

/// Adjacency lists of `(neighbour, weight)` pairs.
fn adjacency(vertex_count: usize, edges: &[Edge<u32>]) -> Vec<Vec<(usize, u32)>> {
    let mut neighbours = vec![Vec::new(); vertex_count];
    for edge in edges {
        neighbours[edge.source()].push((edge.target(), edge.weight()));
        neighbours[edge.target()].push((edge.source(), edge.weight()));
    }
    neighbours
}

/// Heaviest edge on the forest path from `from` to `to`, or `None` when the
/// vertices lie in different trees. A vertex reaches itself with weight 0.
fn heaviest_on_path(neighbours: &[Vec<(usize, u32)>], from: usize, to: usize) -> Option<u32> {
    let mut heaviest = vec![None; neighbours.len()];
    heaviest[from] = Some(0_u32);
    let mut stack = vec![from];

    while let Some(vertex) = stack.pop() {
        let reached = heaviest[vertex]?;
        for &(next, weight) in &neighbours[vertex] {
            if heaviest[next].is_none() {
                heaviest[next] = Some(reached.max(weight));
                stack.push(next);
            }
        }
    }

    heaviest[to]
}

/// Checks the cycle condition for every input edge.
pub(super) fn run_cycle_optimality_property(fixture: &MstFixture) -> TestCaseResult {
    let forest = run_fixture(fixture, &fixture.edges)?;
    let neighbours = adjacency(fixture.vertex_count, forest.edges());

    for (i, edge) in fixture.edges.iter().enumerate() {
        match heaviest_on_path(&neighbours, edge.source(), edge.target()) {
            None => {
                return Err(TestCaseError::fail(format!(
                    "input edge {i} ({}, {}) bridges two forest components ({})",
                    edge.source(),
                    edge.target(),
                    fixture.describe(),
                )));
            }
            Some(heaviest) if heaviest > edge.weight() => {
                return Err(TestCaseError::fail(format!(
                    "input edge {i} ({}, {}, {}) is lighter than forest path edge {heaviest} ({})",
                    edge.source(),
                    edge.target(),
                    edge.weight(),
                    fixture.describe(),
                )));
            }
            Some(_) => {}
        }
    }

    Ok(())
}
