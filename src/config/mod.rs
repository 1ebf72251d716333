//! Game configuration.
//!
//! A [`GameConfig`] carries the knobs a presentation layer may want to set
//! without touching code: coloring policy, language, award size and an
//! optional seed. Every field has a default, so a partial JSON document is
//! enough.
//!
//! # Example
//!
//! ```rust
//! use menagerie::config::GameConfig;
//! use menagerie::core::ColorPolicy;
//! use menagerie::Locale;
//!
//! let config = GameConfig::from_json(r#"{ "locale": "hinglish", "seed": 7 }"#).unwrap();
//!
//! assert_eq!(config.locale, Locale::Hinglish);
//! assert_eq!(config.policy, ColorPolicy::SessionFixed);
//! assert_eq!(config.award_per_count, 100);
//! assert_eq!(config.seed, Some(7));
//! ```

pub mod error;
pub mod rules;

pub use error::ConfigError;
pub use rules::{validate, validate_all, ConfigValidation};

use crate::core::{ColorPolicy, DEFAULT_AWARD_PER_COUNT};
use crate::locale::Locale;
use serde::{Deserialize, Serialize};

/// Tunable settings for a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// How selections are colored
    pub policy: ColorPolicy,

    /// Language of messages and prompts
    pub locale: Locale,

    /// Points per unit of the drawn token's count
    pub award_per_count: u64,

    /// Seed for the default chooser; entropy when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            policy: ColorPolicy::default(),
            locale: Locale::default(),
            award_per_count: DEFAULT_AWARD_PER_COUNT,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}
