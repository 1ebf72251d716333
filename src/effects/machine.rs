//! The game machine: pure transitions plus injected collaborators.

use crate::checkpoint::{Checkpoint, CheckpointError};
use crate::config::GameConfig;
use crate::core::{
    Color, GameError, GameState, Guard, Operation, PhaseHistory, PhaseTransition, Roster, TokenId,
};
use crate::effects::chooser::Chooser;
use crate::effects::cue::{Cue, CueSink};
use tracing::{debug, info};

/// Selection-and-draw game with its chooser and cue sink.
///
/// Every operation runs to completion and returns an owned snapshot of the
/// resulting state. A rejected operation returns an error, records nothing,
/// consumes no random choice and leaves the state as it was.
pub struct Game<R: Chooser, N: CueSink> {
    roster: Roster,
    config: GameConfig,
    state: GameState,
    history: PhaseHistory,
    chooser: R,
    cues: N,
}

impl<R: Chooser, N: CueSink> Game<R, N> {
    /// Assemble a game. Callers normally go through
    /// [`GameBuilder`](crate::builder::GameBuilder), which validates first.
    pub(crate) fn new(roster: Roster, config: GameConfig, chooser: R, cues: N) -> Self {
        let state = GameState::fresh(&roster);
        Self {
            roster,
            config,
            state,
            history: PhaseHistory::new(),
            chooser,
            cues,
        }
    }

    /// Current state (pure)
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Accepted operations so far (pure)
    pub fn history(&self) -> &PhaseHistory {
        &self.history
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn chooser(&self) -> &R {
        &self.chooser
    }

    pub fn cues(&self) -> &N {
        &self.cues
    }

    /// Tile caption for `id` in the configured locale.
    pub fn label(&self, id: &TokenId) -> String {
        self.config.locale.label(&self.roster, id)
    }

    /// Player-facing text for a rejected operation.
    pub fn prompt_for(&self, error: &GameError) -> String {
        self.config.locale.prompt_for(error)
    }

    fn commit(&mut self, next: GameState, operation: Operation) -> GameState {
        let transition = PhaseTransition::now(self.state.phase(), next.phase(), operation);
        self.history.push(transition);
        self.state = next;
        self.state.clone()
    }

    fn selection_color(&mut self) -> Option<Color> {
        let session_color = self.state.session_color();
        if self.config.policy.needs_draw(session_color) {
            Some(Color::from_index(self.chooser.choose(Color::PALETTE.len())))
        } else {
            session_color
        }
    }

    /// Select `id`, bumping its count and coloring it per the active policy.
    pub fn select(&mut self, id: &TokenId) -> Result<GameState, GameError> {
        if !self.roster.contains(id) {
            return Err(GameError::UnknownToken { token: id.clone() });
        }

        let color = self.selection_color();
        let next = self.state.with_selection(id, color)?;

        debug!(
            token = %id,
            count = next.count_of(id).unwrap_or_default(),
            color = ?color,
            phase = %next.phase(),
            "Token selected"
        );
        Ok(self.commit(next, Operation::Select(id.clone())))
    }

    /// Draw a winner uniformly from the whole roster and score it.
    ///
    /// Emits [`Cue::Win`] once the new state is in place.
    pub fn draw(&mut self) -> Result<GameState, GameError> {
        Guard::selection_made().require(&self.state)?;

        let index = self.chooser.choose(self.roster.len());
        let winner = self.state.draw_target(index)?.clone();
        let locale = self.config.locale;
        let next = self
            .state
            .with_draw(index, self.config.award_per_count, |winner| {
                locale.win_message(winner)
            })?;

        debug!(
            token = %winner,
            multiplier = next.count_of(&winner).unwrap_or_default(),
            points = next.points(),
            "Winner drawn"
        );
        let snapshot = self.commit(next, Operation::Draw(winner.clone()));
        self.cues.emit(&Cue::Win { token: winner });
        Ok(snapshot)
    }

    /// Take one off `id`'s count (never below zero). Requires a selection.
    pub fn decrement(&mut self, id: &TokenId) -> Result<GameState, GameError> {
        let next = self.state.with_decrement(id)?;

        debug!(
            token = %id,
            count = next.count_of(id).unwrap_or_default(),
            "Token decremented"
        );
        Ok(self.commit(next, Operation::Decrement(id.clone())))
    }

    /// Start a new session: every count, color, the selection, the winner,
    /// the message and the points go back to their initial values.
    pub fn reset(&mut self) -> GameState {
        let previous_points = self.state.points();
        let next = GameState::fresh(&self.roster);

        info!(previous_points, "Game reset");
        self.commit(next, Operation::Reset)
    }

    /// Capture the current session.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint::new(self.state.clone(), self.history.clone())
    }

    /// Replace the session with one captured by [`Game::checkpoint`].
    ///
    /// The checkpoint must be of a supported version and describe this
    /// game's roster; otherwise nothing changes.
    pub fn restore(&mut self, checkpoint: Checkpoint) -> Result<GameState, CheckpointError> {
        checkpoint.validate(&self.roster)?;

        info!(
            checkpoint = %checkpoint.id,
            points = checkpoint.state.points(),
            "Session restored"
        );
        self.state = checkpoint.state;
        self.history = checkpoint.history;
        Ok(self.state.clone())
    }
}
