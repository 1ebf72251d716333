//! Build errors for the game builder.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur when building a game.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Invalid configuration: {}", summarize(.0))]
    InvalidConfig(Vec<ConfigError>),
}

fn summarize(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
