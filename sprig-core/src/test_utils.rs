//! Test helpers shared by the `sprig-core` unit and property suites.

use proptest::test_runner::Config as ProptestConfig;
use sprig_test_support::ci::property_test_profile::ProptestRunProfile;

/// Proptest configuration honouring the `PROGTEST_CASES`, `SPRIG_PBT_FORK`
/// and `SPRIG_PBT_MAX_SHRINK_ITERS` overrides.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        max_shrink_iters: profile.max_shrink_iters(),
        ..ProptestConfig::default()
    }
}
