//! Menagerie: the deterministic core of an animal picking game.
//!
//! A player selects animals on a board, each selection bumping that animal's
//! count, then triggers a draw. The draw picks any animal uniformly at random
//! and awards `100 * count` of the drawn animal, so selections act as
//! multipliers for the animals they land on.
//!
//! The crate follows a "pure core, imperative shell" layout:
//!
//! - [`core`]: tokens, colors, phases, guards, history and the pure
//!   [`GameState`] transitions
//! - [`effects`]: the [`Game`] machine plus its injected collaborators (a
//!   uniform [`Chooser`] and a fire-and-forget [`CueSink`])
//! - [`builder`]: validated construction
//! - [`config`], [`locale`], [`checkpoint`]: settings, text and session capture
//!
//! A presentation layer owns a [`Game`], forwards intents to it and renders
//! the snapshot each operation returns.
//!
//! # Example
//!
//! ```rust
//! use menagerie::{GameBuilder, GameError, ScriptedChooser, TokenId};
//!
//! let mut game = GameBuilder::new()
//!     // first select draws a color, the draw picks index 0 (the panda)
//!     .chooser(ScriptedChooser::new([3, 0]))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(game.draw(), Err(GameError::NoSelection));
//!
//! let panda = TokenId::new("🐼");
//! game.select(&panda).unwrap();
//! game.select(&panda).unwrap();
//! let state = game.draw().unwrap();
//!
//! assert_eq!(state.winner(), Some(&panda));
//! assert_eq!(state.points(), 200);
//!
//! let state = game.reset();
//! assert_eq!(state.points(), 0);
//! ```

pub mod builder;
pub mod checkpoint;
pub mod config;
pub mod core;
pub mod effects;
pub mod locale;

// Re-export commonly used types
pub use builder::{BuildError, GameBuilder};
pub use checkpoint::{Checkpoint, CheckpointError};
pub use config::GameConfig;
pub use crate::core::{Color, ColorPolicy, GameError, GameState, Phase, Roster, TokenId};
pub use effects::{Chooser, Cue, CueSink, Game, ScriptedChooser, SeededChooser};
pub use locale::Locale;
