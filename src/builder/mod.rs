//! Builder API for game construction.
//!
//! The builder validates the configuration and roster before a [`Game`]
//! exists, so a built game always has a usable token universe.
//!
//! # Example
//!
//! ```
//! use menagerie::builder::GameBuilder;
//! use menagerie::core::{ColorPolicy, TokenId};
//! use menagerie::effects::ScriptedChooser;
//!
//! let mut game = GameBuilder::new()
//!     .policy(ColorPolicy::PerSelection)
//!     .chooser(ScriptedChooser::new([0, 0]))
//!     .build()
//!     .unwrap();
//!
//! game.select(&TokenId::new("🐼")).unwrap();
//! let state = game.draw().unwrap();
//! assert_eq!(state.points(), 100);
//! ```
//!
//! [`Game`]: crate::effects::Game

pub mod error;
pub mod game;

pub use error::BuildError;
pub use game::GameBuilder;
