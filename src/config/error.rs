//! Configuration errors.

use crate::core::TokenId;
use thiserror::Error;

/// Problems found in a game configuration or roster.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Roster has no tokens")]
    EmptyRoster,

    #[error("Roster entry {position} has an empty symbol")]
    EmptySymbol { position: usize },

    #[error("Symbol '{token}' appears more than once in the roster")]
    DuplicateSymbol { token: TokenId },

    #[error("Award per count must be greater than zero")]
    ZeroAward,

    #[error("Configuration could not be parsed: {0}")]
    Parse(String),

    #[error("Configuration could not be written: {0}")]
    Serialize(String),
}
