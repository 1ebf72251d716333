//! Tokens and the fixed roster they are drawn from.

use super::color::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a token: the symbol it is rendered as.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenId(String);

impl TokenId {
    /// Wrap a symbol as a token identity.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    /// The symbol this id stands for.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TokenId {
    fn from(symbol: &str) -> Self {
        Self::new(symbol)
    }
}

/// One selectable entity with its accumulated count and display color.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Token {
    /// Identity of the token
    pub id: TokenId,
    /// Number of net selections (never negative)
    pub count: u32,
    /// Display color, unset until the token is first selected
    pub color: Option<Color>,
}

impl Token {
    /// A token in its initial condition: count 0, no color.
    pub fn fresh(id: TokenId) -> Self {
        Self {
            id,
            count: 0,
            color: None,
        }
    }
}

/// A symbol paired with its display name.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: TokenId,
    pub name: String,
}

/// Maps a token identity to a human readable label.
///
/// Implementations must be pure lookups.
pub trait DisplayNames {
    /// Label for `id`, or `None` when the id is not known.
    fn display_name(&self, id: &TokenId) -> Option<&str>;

    /// Label for `id`, falling back to the symbol itself.
    fn label_or_symbol<'a>(&'a self, id: &'a TokenId) -> &'a str {
        self.display_name(id).unwrap_or_else(|| id.as_str())
    }
}

const ANIMALS: [(&str, &str); 20] = [
    ("🐼", "Panda"),
    ("🦁", "Lion"),
    ("🐰", "Rabbit"),
    ("🐯", "Tiger"),
    ("🐵", "Monkey"),
    ("🐸", "Frog"),
    ("🐻", "Bear"),
    ("🐶", "Dog"),
    ("🐱", "Cat"),
    ("🦊", "Fox"),
    ("🦝", "Raccoon"),
    ("🦄", "Unicorn"),
    ("🐮", "Cow"),
    ("🐷", "Pig"),
    ("🐔", "Chicken"),
    ("🐧", "Penguin"),
    ("🐤", "Chick"),
    ("🐺", "Wolf"),
    ("🦖", "Dinosaur"),
    ("🦓", "Zebra"),
];

/// The ordered, fixed universe of tokens a game is played over.
///
/// Membership never changes after construction. Whether the entries are
/// usable (non-empty, unique symbols) is checked when a game is built.
///
/// # Example
///
/// ```rust
/// use menagerie::core::{DisplayNames, Roster, TokenId};
///
/// let roster = Roster::animals();
/// assert_eq!(roster.len(), 20);
/// assert_eq!(roster.display_name(&TokenId::new("🦊")), Some("Fox"));
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    /// Build a roster from `(symbol, name)` pairs, keeping their order.
    pub fn from_pairs<I, A, B>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<String>,
        B: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(symbol, name)| RosterEntry {
                id: TokenId::new(symbol),
                name: name.into(),
            })
            .collect();
        Self { entries }
    }

    /// The twenty animals of the classic board.
    pub fn animals() -> Self {
        Self::from_pairs(ANIMALS)
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `id` is a member of this roster.
    pub fn contains(&self, id: &TokenId) -> bool {
        self.entries.iter().any(|e| &e.id == id)
    }

    /// Token ids in roster order.
    pub fn ids(&self) -> impl Iterator<Item = &TokenId> {
        self.entries.iter().map(|e| &e.id)
    }

    /// Fresh tokens for every entry, in roster order.
    pub fn fresh_tokens(&self) -> Vec<Token> {
        self.ids().cloned().map(Token::fresh).collect()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::animals()
    }
}

impl DisplayNames for Roster {
    fn display_name(&self, id: &TokenId) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| &e.id == id)
            .map(|e| e.name.as_str())
    }
}
