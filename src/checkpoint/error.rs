//! Errors raised while saving or restoring a session.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CheckpointError {
    /// The session could not be written out as JSON or bincode
    #[error("Could not encode session: {0}")]
    Encode(String),

    /// The bytes or text are not a session checkpoint
    #[error("Could not decode session: {0}")]
    Decode(String),

    #[error("Checkpoint format v{found} cannot be read, this build reads v{supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The checkpoint was taken on a board with different tokens
    #[error(
        "Checkpoint {checkpoint} holds {checkpoint_tokens} tokens that do not match \
         this {roster_tokens}-token board"
    )]
    RosterMismatch {
        checkpoint: Uuid,
        checkpoint_tokens: usize,
        roster_tokens: usize,
    },

    /// Selection or winner is not a board token, or a winner exists without
    /// a selection
    #[error("Checkpoint {checkpoint} holds a selection or winner this board cannot reach")]
    InconsistentState { checkpoint: Uuid },
}
