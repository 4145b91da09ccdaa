//! Property-test run profile read from environment overrides.
//!
//! CI raises case counts for nightly runs and enables forking on runners
//! where a crashing case must not take the whole suite down. Invalid values
//! are reported through `tracing` and replaced by the caller's default.

use std::env;
use std::fmt;

/// Environment variable overriding the number of cases per property.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable toggling forked case execution.
pub const SPRIG_PBT_FORK_ENV_KEY: &str = "SPRIG_PBT_FORK";
/// Environment variable capping shrink iterations after a failure.
pub const SPRIG_PBT_MAX_SHRINK_ITERS_ENV_KEY: &str = "SPRIG_PBT_MAX_SHRINK_ITERS";

/// Default shrink iteration cap, matching proptest's own default.
pub const DEFAULT_MAX_SHRINK_ITERS: u32 = 1024;

/// Resolved settings for one property-test suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
    max_shrink_iters: u32,
}

impl ProptestRunProfile {
    /// Resolves the profile from the environment, falling back to the
    /// supplied defaults for unset or malformed variables.
    ///
    /// # Examples
    ///
    /// ```
    /// use sprig_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// assert!(profile.max_shrink_iters() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: resolve(PROGTEST_CASES_ENV_KEY, default_cases, parse_positive),
            fork: resolve(SPRIG_PBT_FORK_ENV_KEY, default_fork, parse_switch),
            max_shrink_iters: resolve(
                SPRIG_PBT_MAX_SHRINK_ITERS_ENV_KEY,
                DEFAULT_MAX_SHRINK_ITERS,
                parse_positive,
            ),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether each case runs in a forked child process.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }

    /// Upper bound on shrink iterations once a case fails.
    #[must_use]
    pub const fn max_shrink_iters(&self) -> u32 {
        self.max_shrink_iters
    }
}

#[derive(Debug, PartialEq, Eq)]
enum OverrideError {
    NotANumber,
    Zero,
    NotASwitch,
}

impl fmt::Display for OverrideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotANumber => "expected an unsigned integer",
            Self::Zero => "value must be greater than zero",
            Self::NotASwitch => "expected one of true/false/1/0/yes/no/on/off",
        })
    }
}

fn resolve<T>(key: &'static str, default: T, parse: fn(&str) -> Result<T, OverrideError>) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(raw.trim()).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            %reason,
            "ignoring invalid property-test override",
        );
        default
    })
}

fn parse_positive(raw: &str) -> Result<u32, OverrideError> {
    match raw.parse::<u32>() {
        Ok(0) => Err(OverrideError::Zero),
        Ok(value) => Ok(value),
        Err(_) => Err(OverrideError::NotANumber),
    }
}

fn parse_switch(raw: &str) -> Result<bool, OverrideError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OverrideError::NotASwitch),
    }
}
