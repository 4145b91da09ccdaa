//! Oracle equivalence and input-order invariance properties.

use proptest::test_runner::{TestCaseError, TestCaseResult};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use super::helpers::run_fixture;
use super::oracle::sorted_kruskal;
use super::types::MstFixture;

/// Checks that the runner accepts exactly the oracle's edges, in order.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let forest = run_fixture(fixture, &fixture.edges)?;
    let oracle = sorted_kruskal(fixture.vertex_count, &fixture.edges);

    if forest.total_weight() != oracle.total_weight {
        return Err(TestCaseError::fail(format!(
            "total weight mismatch: kruskal={}, oracle={} ({})",
            forest.total_weight(),
            oracle.total_weight,
            fixture.describe(),
        )));
    }

    if forest.component_count() != oracle.component_count {
        return Err(TestCaseError::fail(format!(
            "component count mismatch: kruskal={}, oracle={} ({})",
            forest.component_count(),
            oracle.component_count,
            fixture.describe(),
        )));
    }

    if forest.edges() != oracle.edges.as_slice() {
        return Err(TestCaseError::fail(format!(
            "accepted edges diverge from the oracle ({})",
            fixture.describe(),
        )));
    }

    Ok(())
}

/// Checks that shuffling the edge list leaves the forest's weight, size and
/// component count unchanged.
pub(super) fn run_order_invariance_property(fixture: &MstFixture) -> TestCaseResult {
    let baseline = run_fixture(fixture, &fixture.edges)?;

    let mut rng = SmallRng::seed_from_u64(fixture.edges.len() as u64);
    for round in 0..3 {
        let mut shuffled = fixture.edges.clone();
        shuffled.shuffle(&mut rng);
        let forest = run_fixture(fixture, &shuffled)?;

        if forest.total_weight() != baseline.total_weight()
            || forest.len() != baseline.len()
            || forest.component_count() != baseline.component_count()
        {
            return Err(TestCaseError::fail(format!(
                "shuffle round {round} changed the forest: weight {} vs {}, edges {} vs {}, \
                 components {} vs {} ({})",
                forest.total_weight(),
                baseline.total_weight(),
                forest.len(),
                baseline.len(),
                forest.component_count(),
                baseline.component_count(),
                fixture.describe(),
            )));
        }
    }

    Ok(())
}
