//! Configuration checks using Validation.
//!
//! Every check runs and every failure is reported, so a broken roster and a
//! bad award show up together instead of one at a time.

use crate::config::error::ConfigError;
use crate::config::GameConfig;
use crate::core::Roster;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of a single check or of all checks combined.
pub type ConfigValidation = Validation<(), NonEmptyVec<ConfigError>>;

fn check(ok: bool, error: ConfigError) -> ConfigValidation {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(error)
    }
}

fn roster_checks(roster: &Roster) -> Vec<ConfigValidation> {
    let mut checks = vec![check(!roster.is_empty(), ConfigError::EmptyRoster)];

    let mut seen = HashSet::new();
    for (position, entry) in roster.entries().iter().enumerate() {
        if entry.id.as_str().is_empty() {
            checks.push(check(false, ConfigError::EmptySymbol { position }));
        } else if !seen.insert(&entry.id) {
            checks.push(check(
                false,
                ConfigError::DuplicateSymbol {
                    token: entry.id.clone(),
                },
            ));
        }
    }

    checks
}

/// Check `config` against `roster`, accumulating ALL problems.
pub fn validate(config: &GameConfig, roster: &Roster) -> ConfigValidation {
    let mut checks = roster_checks(roster);
    checks.push(check(config.award_per_count > 0, ConfigError::ZeroAward));

    Validation::all_vec(checks).map(|_| ())
}

/// [`validate`], flattened into a `Result` with every problem listed.
pub fn validate_all(config: &GameConfig, roster: &Roster) -> Result<(), Vec<ConfigError>> {
    match validate(config, roster) {
        Validation::Success(()) => Ok(()),
        Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
    }
}
