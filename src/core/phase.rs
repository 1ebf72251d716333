//! Phase of the selection-and-draw machine.
//!
//! The phase is never stored. It is derived from the `selected` and `winner`
//! fields of a [`GameState`](super::GameState), so it cannot drift from them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a game currently stands.
///
/// ```text
/// Idle --select--> Selected --draw--> Drawn
///   ^                                   |
///   +--------------reset----------------+
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// Nothing selected yet in this session
    Idle,
    /// A token is selected; drawing is allowed
    Selected,
    /// A winner has been drawn
    Drawn,
}

impl Phase {
    /// Derive the phase from the two fields that define it.
    pub fn from_fields(has_selection: bool, has_winner: bool) -> Self {
        match (has_selection, has_winner) {
            (_, true) => Self::Drawn,
            (true, false) => Self::Selected,
            (false, false) => Self::Idle,
        }
    }

    /// Name used in logs and history output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Selected => "Selected",
            Self::Drawn => "Drawn",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_follows_fields() {
        assert_eq!(Phase::from_fields(false, false), Phase::Idle);
        assert_eq!(Phase::from_fields(true, false), Phase::Selected);
        assert_eq!(Phase::from_fields(true, true), Phase::Drawn);
    }

    #[test]
    fn phase_name_matches_display() {
        for phase in [Phase::Idle, Phase::Selected, Phase::Drawn] {
            assert_eq!(phase.to_string(), phase.name());
        }
    }

    #[test]
    fn phase_serializes_correctly() {
        let json = serde_json::to_string(&Phase::Selected).unwrap();
        let deserialized: Phase = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Phase::Selected);
    }
}
