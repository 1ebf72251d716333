//! Display colors and the policy deciding which color a selection gets.

use serde::{Deserialize, Serialize};

/// Display tag assigned to a selected token.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Red,
    Blue,
    Yellow,
    Purple,
    Pink,
    Green,
    Orange,
    Teal,
}

impl Color {
    /// Every color a selection can receive, in palette order.
    pub const PALETTE: [Color; 8] = [
        Color::Red,
        Color::Blue,
        Color::Yellow,
        Color::Purple,
        Color::Pink,
        Color::Green,
        Color::Orange,
        Color::Teal,
    ];

    /// Palette entry at `index`, wrapping past the end.
    pub fn from_index(index: usize) -> Self {
        Self::PALETTE[index % Self::PALETTE.len()]
    }

    /// Utility class a web front end renders the tile with.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Red => "bg-red-400",
            Self::Blue => "bg-blue-400",
            Self::Yellow => "bg-yellow-400",
            Self::Purple => "bg-purple-400",
            Self::Pink => "bg-pink-400",
            Self::Green => "bg-green-400",
            Self::Orange => "bg-orange-400",
            Self::Teal => "bg-teal-400",
        }
    }
}

/// How a color is chosen when a token is selected.
///
/// A game runs with exactly one policy. [`SessionFixed`](Self::SessionFixed)
/// is the default; [`PerSelection`](Self::PerSelection) is how the classic
/// browser board behaves, re-rolling a tile's color on every click.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorPolicy {
    /// One color is drawn on the first selection of a session and reused for
    /// every token colored afterwards. A token's color never changes until
    /// reset.
    #[default]
    SessionFixed,

    /// Each selection draws an independent color; re-selecting a token
    /// re-colors it. Choose this to reproduce the classic board.
    PerSelection,
}

impl ColorPolicy {
    /// Whether a selection needs a fresh color from the chooser, given the
    /// color already fixed for this session (if any).
    pub fn needs_draw(&self, session_color: Option<Color>) -> bool {
        match self {
            Self::SessionFixed => session_color.is_none(),
            Self::PerSelection => true,
        }
    }
}
