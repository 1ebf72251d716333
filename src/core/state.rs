//! The aggregate game state and its pure transitions.
//!
//! Every transition takes `&self` and returns a new [`GameState`]. Nothing
//! here touches randomness or emits cues; the caller resolves random choices
//! beforehand and hands them in as plain values.

use super::color::Color;
use super::error::GameError;
use super::guard::Guard;
use super::phase::Phase;
use super::token::{Roster, Token, TokenId};
use serde::{Deserialize, Serialize};

/// Points awarded per unit of the drawn token's count.
pub const DEFAULT_AWARD_PER_COUNT: u64 = 100;

/// Snapshot of everything a presentation layer renders.
///
/// # Example
///
/// ```rust
/// use menagerie::core::{GameState, Phase, Roster, TokenId};
///
/// let roster = Roster::from_pairs([("A", "Alpha"), ("B", "Beta"), ("C", "Gamma")]);
/// let a = TokenId::new("A");
///
/// let state = GameState::fresh(&roster)
///     .with_selection(&a, None)
///     .unwrap()
///     .with_selection(&a, None)
///     .unwrap()
///     .with_draw(0, 100, |id| format!("{id} won"))
///     .unwrap();
///
/// assert_eq!(state.phase(), Phase::Drawn);
/// assert_eq!(state.points(), 200);
/// assert_eq!(state.message(), Some("A won"));
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct GameState {
    tokens: Vec<Token>,
    selected: Option<TokenId>,
    winner: Option<TokenId>,
    points: u64,
    message: Option<String>,
    session_color: Option<Color>,
}

impl GameState {
    /// Initial state over `roster`: nothing counted, colored, selected or won.
    pub fn fresh(roster: &Roster) -> Self {
        Self {
            tokens: roster.fresh_tokens(),
            selected: None,
            winner: None,
            points: 0,
            message: None,
            session_color: None,
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn selected(&self) -> Option<&TokenId> {
        self.selected.as_ref()
    }

    pub fn winner(&self) -> Option<&TokenId> {
        self.winner.as_ref()
    }

    pub fn points(&self) -> u64 {
        self.points
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// First color handed out in this session, if any.
    pub fn session_color(&self) -> Option<Color> {
        self.session_color
    }

    pub fn phase(&self) -> Phase {
        Phase::from_fields(self.selected.is_some(), self.winner.is_some())
    }

    pub fn token(&self, id: &TokenId) -> Option<&Token> {
        self.tokens.iter().find(|t| &t.id == id)
    }

    /// Count of `id`, or `None` when the id is not in this state.
    pub fn count_of(&self, id: &TokenId) -> Option<u32> {
        self.token(id).map(|t| t.count)
    }

    fn position(&self, id: &TokenId) -> Result<usize, GameError> {
        self.tokens
            .iter()
            .position(|t| &t.id == id)
            .ok_or_else(|| GameError::UnknownToken { token: id.clone() })
    }

    /// Select `id`: it becomes the selection and its count goes up by one.
    ///
    /// A `Some` color replaces the token's color; `None` leaves it as is.
    /// Winner, points and message are untouched.
    pub fn with_selection(&self, id: &TokenId, color: Option<Color>) -> Result<Self, GameError> {
        let index = self.position(id)?;
        let mut next = self.clone();

        let token = &mut next.tokens[index];
        token.count = token.count.saturating_add(1);
        if let Some(color) = color {
            token.color = Some(color);
            next.session_color.get_or_insert(color);
        }
        next.selected = Some(id.clone());

        Ok(next)
    }

    /// Draw the token at `index` (wrapped to the roster length) as winner.
    ///
    /// Adds `award_per_count * count` of the drawn token to the points and
    /// sets the message via `message`. Counts are read, never written.
    pub fn with_draw<F>(
        &self,
        index: usize,
        award_per_count: u64,
        message: F,
    ) -> Result<Self, GameError>
    where
        F: FnOnce(&TokenId) -> String,
    {
        let drawn = self.drawn_token(index)?;
        let award = award_per_count.saturating_mul(u64::from(drawn.count));

        let mut next = self.clone();
        next.points = self.points.saturating_add(award);
        next.message = Some(message(&drawn.id));
        next.winner = Some(drawn.id.clone());

        Ok(next)
    }

    /// Token a draw with chooser output `index` lands on.
    ///
    /// `index` is wrapped to the number of tokens. Requires a selection; a
    /// state holding no tokens rejects the selection as unknown.
    pub fn draw_target(&self, index: usize) -> Result<&TokenId, GameError> {
        self.drawn_token(index).map(|token| &token.id)
    }

    fn drawn_token(&self, index: usize) -> Result<&Token, GameError> {
        let selected = self.selected.as_ref().ok_or(GameError::NoSelection)?;

        index
            .checked_rem(self.tokens.len())
            .and_then(|position| self.tokens.get(position))
            .ok_or_else(|| GameError::UnknownToken {
                token: selected.clone(),
            })
    }

    /// Take one off `id`'s count, stopping at zero.
    ///
    /// The selection check runs before the id lookup.
    pub fn with_decrement(&self, id: &TokenId) -> Result<Self, GameError> {
        Guard::selection_made().require(self)?;
        let index = self.position(id)?;

        let mut next = self.clone();
        let token = &mut next.tokens[index];
        token.count = token.count.saturating_sub(1);

        Ok(next)
    }

    /// Whether the tokens are exactly `roster`'s members, in roster order.
    pub fn matches_roster(&self, roster: &Roster) -> bool {
        self.tokens.len() == roster.len()
            && self.tokens.iter().zip(roster.ids()).all(|(t, id)| &t.id == id)
    }

    /// Whether this state is well formed with respect to `roster`.
    ///
    /// Besides matching the roster, `selected` and `winner` must name roster
    /// tokens and a winner can only exist alongside a selection. Used when
    /// restoring snapshots produced elsewhere.
    pub fn conforms_to(&self, roster: &Roster) -> bool {
        let selected_known = self.selected.as_ref().is_none_or(|id| roster.contains(id));
        let winner_known = self.winner.as_ref().is_none_or(|id| roster.contains(id));
        let winner_after_selection = self.winner.is_none() || self.selected.is_some();

        self.matches_roster(roster) && selected_known && winner_known && winner_after_selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Roster {
        Roster::from_pairs([("A", "Alpha"), ("B", "Beta"), ("C", "Gamma")])
    }

    fn id(s: &str) -> TokenId {
        TokenId::new(s)
    }

    fn won(id: &TokenId) -> String {
        format!("{id} won")
    }

    #[test]
    fn fresh_state_is_idle_with_zero_points() {
        let state = GameState::fresh(&abc());

        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.points(), 0);
        assert!(state.selected().is_none());
        assert!(state.winner().is_none());
        assert!(state.message().is_none());
        assert_eq!(state.tokens().len(), 3);
    }

    #[test]
    fn selection_increments_count_and_sets_selected() {
        let state = GameState::fresh(&abc())
            .with_selection(&id("B"), Some(Color::Teal))
            .unwrap();

        assert_eq!(state.selected(), Some(&id("B")));
        assert_eq!(state.count_of(&id("B")), Some(1));
        assert_eq!(state.token(&id("B")).unwrap().color, Some(Color::Teal));
        assert_eq!(state.session_color(), Some(Color::Teal));
        assert_eq!(state.phase(), Phase::Selected);
    }

    #[test]
    fn selection_is_pure() {
        let state = GameState::fresh(&abc());
        let next = state.with_selection(&id("A"), None).unwrap();

        assert_eq!(state.count_of(&id("A")), Some(0));
        assert_eq!(next.count_of(&id("A")), Some(1));
    }

    #[test]
    fn selection_without_color_keeps_existing_color() {
        let state = GameState::fresh(&abc())
            .with_selection(&id("A"), Some(Color::Red))
            .unwrap()
            .with_selection(&id("A"), None)
            .unwrap();

        assert_eq!(state.token(&id("A")).unwrap().color, Some(Color::Red));
        assert_eq!(state.count_of(&id("A")), Some(2));
    }

    #[test]
    fn session_color_records_first_color_only() {
        let state = GameState::fresh(&abc())
            .with_selection(&id("A"), Some(Color::Red))
            .unwrap()
            .with_selection(&id("B"), Some(Color::Blue))
            .unwrap();

        assert_eq!(state.session_color(), Some(Color::Red));
    }

    #[test]
    fn unknown_selection_is_rejected() {
        let state = GameState::fresh(&abc());
        let result = state.with_selection(&id("Z"), None);

        assert_eq!(result, Err(GameError::UnknownToken { token: id("Z") }));
    }

    #[test]
    fn draw_requires_selection() {
        let state = GameState::fresh(&abc());
        assert_eq!(state.with_draw(0, 100, won), Err(GameError::NoSelection));
    }

    #[test]
    fn draw_scores_drawn_token_count() {
        let state = GameState::fresh(&abc())
            .with_selection(&id("A"), None)
            .unwrap()
            .with_selection(&id("A"), None)
            .unwrap()
            .with_draw(0, 100, won)
            .unwrap();

        assert_eq!(state.winner(), Some(&id("A")));
        assert_eq!(state.points(), 200);
        assert_eq!(state.message(), Some("A won"));
        assert_eq!(state.count_of(&id("A")), Some(2));
    }

    #[test]
    fn draw_of_unselected_token_scores_nothing() {
        let state = GameState::fresh(&abc())
            .with_selection(&id("A"), None)
            .unwrap()
            .with_draw(1, 100, won)
            .unwrap();

        assert_eq!(state.winner(), Some(&id("B")));
        assert_eq!(state.points(), 0);
    }

    #[test]
    fn draw_index_wraps_to_roster() {
        let state = GameState::fresh(&abc())
            .with_selection(&id("A"), None)
            .unwrap()
            .with_draw(4, 100, won)
            .unwrap();

        assert_eq!(state.winner(), Some(&id("B")));
    }

    #[test]
    fn points_accumulate_across_draws() {
        let state = GameState::fresh(&abc())
            .with_selection(&id("C"), None)
            .unwrap()
            .with_draw(2, 100, won)
            .unwrap()
            .with_draw(2, 100, won)
            .unwrap();

        assert_eq!(state.points(), 200);
    }

    #[test]
    fn decrement_floors_at_zero() {
        let state = GameState::fresh(&abc())
            .with_selection(&id("A"), None)
            .unwrap()
            .with_decrement(&id("A"))
            .unwrap()
            .with_decrement(&id("A"))
            .unwrap();

        assert_eq!(state.count_of(&id("A")), Some(0));
        assert_eq!(state.selected(), Some(&id("A")));
    }

    #[test]
    fn decrement_checks_selection_before_token() {
        let state = GameState::fresh(&abc());
        assert_eq!(state.with_decrement(&id("Z")), Err(GameError::NoSelection));

        let state = state.with_selection(&id("A"), None).unwrap();
        assert_eq!(
            state.with_decrement(&id("Z")),
            Err(GameError::UnknownToken { token: id("Z") })
        );
    }

    #[test]
    fn decrement_keeps_color() {
        let state = GameState::fresh(&abc())
            .with_selection(&id("A"), Some(Color::Pink))
            .unwrap()
            .with_decrement(&id("A"))
            .unwrap();

        assert_eq!(state.token(&id("A")).unwrap().color, Some(Color::Pink));
    }

    #[test]
    fn conforms_to_detects_foreign_roster() {
        let state = GameState::fresh(&abc());
        let other = Roster::from_pairs([("X", "Ex")]);

        assert!(state.conforms_to(&abc()));
        assert!(!state.conforms_to(&other));
    }

    #[test]
    fn winner_without_selection_cannot_draw_or_decrement() {
        let drawn = GameState::fresh(&abc())
            .with_selection(&id("A"), None)
            .unwrap()
            .with_draw(0, 100, won)
            .unwrap();
        let mut json = serde_json::to_value(&drawn).unwrap();
        json["selected"] = serde_json::Value::Null;
        let state: GameState = serde_json::from_value(json).unwrap();

        assert_eq!(state.winner(), Some(&id("A")));
        assert_eq!(state.with_draw(0, 100, won), Err(GameError::NoSelection));
        assert_eq!(state.with_decrement(&id("A")), Err(GameError::NoSelection));
        assert!(!state.conforms_to(&abc()));
    }

    #[test]
    fn draw_over_empty_tokens_is_rejected() {
        let state: GameState = serde_json::from_str(
            r#"{"tokens":[],"selected":"A","winner":null,"points":0,"message":null,"session_color":null}"#,
        )
        .unwrap();

        assert_eq!(
            state.with_draw(0, 100, won),
            Err(GameError::UnknownToken { token: id("A") })
        );
        assert!(state.draw_target(3).is_err());
    }

    #[test]
    fn draw_target_wraps_index() {
        let state = GameState::fresh(&abc())
            .with_selection(&id("A"), None)
            .unwrap();

        assert_eq!(state.draw_target(5), Ok(&id("C")));
    }

    #[test]
    fn state_serializes_correctly() {
        let state = GameState::fresh(&abc())
            .with_selection(&id("A"), Some(Color::Green))
            .unwrap();

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
