//! Player-facing text.

use crate::core::{DisplayNames, GameError, TokenId};
use serde::{Deserialize, Serialize};

/// Language the game's messages are written in.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    English,
    /// Romanized Hindi
    Hinglish,
}

impl Locale {
    /// Message announcing the winner of a draw.
    pub fn win_message(&self, winner: &TokenId) -> String {
        match self {
            Self::English => format!("🎉 {winner} wins this round!"),
            Self::Hinglish => format!("🎉 {winner} ne jeet liya hai is samay!"),
        }
    }

    /// Prompt shown when `draw` or `decrement` is rejected for lack of a
    /// selection.
    pub fn selection_prompt(&self) -> &'static str {
        match self {
            Self::English => "Select an emoji first!",
            Self::Hinglish => "Pehle emoji select karo!",
        }
    }

    /// Text for a rejected operation.
    pub fn prompt_for(&self, error: &GameError) -> String {
        match (self, error) {
            (_, GameError::NoSelection) => self.selection_prompt().to_string(),
            (Self::English, GameError::UnknownToken { token }) => {
                format!("{token} is not on the board")
            }
            (Self::Hinglish, GameError::UnknownToken { token }) => {
                format!("{token} board par nahi hai")
            }
        }
    }

    /// Tile caption: display name followed by the symbol.
    pub fn label(&self, names: &impl DisplayNames, id: &TokenId) -> String {
        format!("{} {id}", names.label_or_symbol(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Roster;

    #[test]
    fn hinglish_win_message_names_the_winner() {
        let message = Locale::Hinglish.win_message(&TokenId::new("🐼"));
        assert_eq!(message, "🎉 🐼 ne jeet liya hai is samay!");
    }

    #[test]
    fn english_win_message_names_the_winner() {
        let message = Locale::English.win_message(&TokenId::new("🦁"));
        assert_eq!(message, "🎉 🦁 wins this round!");
    }

    #[test]
    fn no_selection_prompt_is_localized() {
        assert_eq!(
            Locale::Hinglish.prompt_for(&GameError::NoSelection),
            "Pehle emoji select karo!"
        );
        assert_eq!(
            Locale::English.prompt_for(&GameError::NoSelection),
            "Select an emoji first!"
        );
    }

    #[test]
    fn label_uses_roster_names() {
        let roster = Roster::animals();
        assert_eq!(Locale::English.label(&roster, &TokenId::new("🦊")), "Fox 🦊");
    }
}
