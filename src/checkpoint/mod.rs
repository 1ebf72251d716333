//! Checkpoint and resume for game sessions.
//!
//! A presentation layer that reloads (a browser tab refresh, a TUI restart)
//! can capture the session with [`Game::checkpoint`](crate::Game::checkpoint),
//! store it however it likes and hand it back to
//! [`Game::restore`](crate::Game::restore). Chooser and cue sink are not part
//! of a checkpoint.

use crate::core::{GameState, PhaseHistory, Roster};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable capture of a game session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Game state at capture time
    pub state: GameState,

    /// Accepted operations up to capture time
    pub history: PhaseHistory,
}

impl Checkpoint {
    /// Capture `state` and `history` under a fresh id.
    pub fn new(state: GameState, history: PhaseHistory) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            state,
            history,
        }
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::Encode(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::Decode(e.to_string()))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    /// Compact binary form.
    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::Encode(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::Decode(e.to_string()))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    fn check_version(&self) -> Result<(), CheckpointError> {
        if self.version == CHECKPOINT_VERSION {
            Ok(())
        } else {
            Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            })
        }
    }

    /// Check that this checkpoint can be restored into a game over `roster`.
    pub fn validate(&self, roster: &Roster) -> Result<(), CheckpointError> {
        self.check_version()?;
        if !self.state.matches_roster(roster) {
            return Err(CheckpointError::RosterMismatch {
                checkpoint: self.id,
                checkpoint_tokens: self.state.tokens().len(),
                roster_tokens: roster.len(),
            });
        }
        if !self.state.conforms_to(roster) {
            return Err(CheckpointError::InconsistentState {
                checkpoint: self.id,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TokenId;

    fn captured() -> Checkpoint {
        let roster = Roster::from_pairs([("A", "Alpha"), ("B", "Beta")]);
        let state = GameState::fresh(&roster)
            .with_selection(&TokenId::new("A"), None)
            .unwrap();
        Checkpoint::new(state, PhaseHistory::new())
    }

    #[test]
    fn json_checkpoint_restores_state() {
        let checkpoint = captured();
        let restored = Checkpoint::from_json(&checkpoint.to_json().unwrap()).unwrap();
        assert_eq!(restored, checkpoint);
    }

    #[test]
    fn binary_checkpoint_restores_state() {
        let checkpoint = captured();
        let restored = Checkpoint::from_binary(&checkpoint.to_binary().unwrap()).unwrap();
        assert_eq!(restored.state, checkpoint.state);
        assert_eq!(restored.id, checkpoint.id);
    }

    #[test]
    fn future_version_is_rejected() {
        let mut checkpoint = captured();
        checkpoint.version = CHECKPOINT_VERSION + 1;
        let json = checkpoint.to_json().unwrap();

        let result = Checkpoint::from_json(&json);
        assert!(matches!(
            result,
            Err(CheckpointError::UnsupportedVersion { found: 2, supported: 1 })
        ));
    }

    #[test]
    fn foreign_roster_fails_validation() {
        let other = Roster::animals();
        let result = captured().validate(&other);
        assert!(matches!(
            result,
            Err(CheckpointError::RosterMismatch {
                checkpoint_tokens: 2,
                roster_tokens: 20,
                ..
            })
        ));
    }

    #[test]
    fn winner_without_selection_is_inconsistent() {
        let roster = Roster::from_pairs([("A", "Alpha"), ("B", "Beta")]);
        let drawn = GameState::fresh(&roster)
            .with_selection(&TokenId::new("A"), None)
            .unwrap()
            .with_draw(1, 100, |_| "won".to_string())
            .unwrap();
        let mut json = serde_json::to_value(Checkpoint::new(drawn, PhaseHistory::new())).unwrap();
        json["state"]["selected"] = serde_json::Value::Null;
        let tampered: Checkpoint = serde_json::from_value(json).unwrap();

        let result = tampered.validate(&roster);
        assert!(matches!(
            result,
            Err(CheckpointError::InconsistentState { checkpoint }) if checkpoint == tampered.id
        ));
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let result = Checkpoint::from_json("not json");
        assert!(matches!(result, Err(CheckpointError::Decode(_))));
    }
}
