//! Errors returned by game operations.

use super::token::TokenId;
use thiserror::Error;

/// Rejections a game operation can return.
///
/// Neither kind is fatal. A rejected call leaves the game state exactly as
/// it was.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// `draw` or `decrement` was called before any token was selected.
    #[error("no selection made")]
    NoSelection,

    /// The id passed to `select` or `decrement` is not in the roster.
    #[error("unknown token '{token}'")]
    UnknownToken { token: TokenId },
}

impl GameError {
    /// Whether this is the precondition rejection the player is prompted for.
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::NoSelection)
    }
}
