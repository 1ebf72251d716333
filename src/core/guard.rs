//! Guard predicates for operation preconditions.
//!
//! Guards are pure boolean functions over a [`GameState`]. An operation
//! consults its guard before touching anything, so a failed guard means an
//! untouched state.

use super::error::GameError;
use super::state::GameState;

/// Pure precondition paired with the rejection it produces.
///
/// # Example
///
/// ```rust
/// use menagerie::core::{GameError, GameState, Guard, Roster, TokenId};
///
/// let state = GameState::fresh(&Roster::animals());
/// let guard = Guard::selection_made();
///
/// assert!(!guard.check(&state));
/// assert_eq!(guard.require(&state), Err(GameError::NoSelection));
///
/// let state = state.with_selection(&TokenId::new("🐼"), None).unwrap();
/// assert!(guard.check(&state));
/// ```
pub struct Guard {
    name: &'static str,
    predicate: Box<dyn Fn(&GameState) -> bool + Send + Sync>,
    rejection: GameError,
}

impl Guard {
    /// Create a guard from a pure predicate and the error it yields on failure.
    pub fn new<F>(name: &'static str, predicate: F, rejection: GameError) -> Self
    where
        F: Fn(&GameState) -> bool + Send + Sync + 'static,
    {
        Self {
            name,
            predicate: Box::new(predicate),
            rejection,
        }
    }

    /// Precondition shared by `draw` and `decrement`.
    pub fn selection_made() -> Self {
        Self::new(
            "selection_made",
            |state| state.selected().is_some(),
            GameError::NoSelection,
        )
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Evaluate the predicate.
    pub fn check(&self, state: &GameState) -> bool {
        (self.predicate)(state)
    }

    /// Evaluate the predicate, turning a failure into the guard's rejection.
    pub fn require(&self, state: &GameState) -> Result<(), GameError> {
        if self.check(state) {
            Ok(())
        } else {
            Err(self.rejection.clone())
        }
    }
}

impl std::fmt::Debug for Guard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard")
            .field("name", &self.name)
            .field("rejection", &self.rejection)
            .finish()
    }
}
