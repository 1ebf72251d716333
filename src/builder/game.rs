//! Builder for constructing games.

use crate::builder::error::BuildError;
use crate::config::{self, GameConfig};
use crate::core::{ColorPolicy, Roster};
use crate::effects::{Chooser, CueSink, Game, SeededChooser, SilentCues};
use crate::locale::Locale;
use tracing::info;

/// Builder for constructing games with a fluent API.
///
/// Defaults: the twenty animals, the default [`GameConfig`], a
/// [`SeededChooser`] (seeded from the config when it carries a seed) and
/// [`SilentCues`].
pub struct GameBuilder<R = SeededChooser, N = SilentCues> {
    roster: Roster,
    config: GameConfig,
    chooser: R,
    cues: N,
}

impl GameBuilder {
    /// Create a new builder with entropy-seeded randomness.
    pub fn new() -> Self {
        Self::from_config(GameConfig::default())
    }

    /// Start from `config`; its seed (if any) seeds the default chooser.
    pub fn from_config(config: GameConfig) -> Self {
        Self {
            roster: Roster::animals(),
            chooser: SeededChooser::from_seed_option(config.seed),
            config,
            cues: SilentCues,
        }
    }
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Chooser, N: CueSink> GameBuilder<R, N> {
    /// Replace the token universe.
    pub fn roster(mut self, roster: Roster) -> Self {
        self.roster = roster;
        self
    }

    pub fn policy(mut self, policy: ColorPolicy) -> Self {
        self.config.policy = policy;
        self
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.config.locale = locale;
        self
    }

    pub fn award_per_count(mut self, award: u64) -> Self {
        self.config.award_per_count = award;
        self
    }

    /// Inject the source of randomness.
    pub fn chooser<R2: Chooser>(self, chooser: R2) -> GameBuilder<R2, N> {
        GameBuilder {
            roster: self.roster,
            config: self.config,
            chooser,
            cues: self.cues,
        }
    }

    /// Inject the receiver of cues.
    pub fn cues<N2: CueSink>(self, cues: N2) -> GameBuilder<R, N2> {
        GameBuilder {
            roster: self.roster,
            config: self.config,
            chooser: self.chooser,
            cues,
        }
    }

    /// Build the game.
    /// Returns every configuration problem at once if any check fails.
    pub fn build(self) -> Result<Game<R, N>, BuildError> {
        config::validate_all(&self.config, &self.roster).map_err(BuildError::InvalidConfig)?;

        info!(
            tokens = self.roster.len(),
            policy = ?self.config.policy,
            locale = ?self.config.locale,
            award_per_count = self.config.award_per_count,
            "Game built"
        );
        Ok(Game::new(self.roster, self.config, self.chooser, self.cues))
    }
}
