//! Core game types and logic.
//!
//! This module contains the pure core of the game:
//! - Tokens, the roster and display-name lookup
//! - Colors and the coloring policy
//! - The derived phase and the guards over it
//! - `GameState` with its pure transitions
//! - Immutable history of accepted operations
//!
//! Nothing in this module draws random numbers or emits cues.

mod color;
mod error;
mod guard;
mod history;
mod phase;
mod state;
mod token;

pub use color::{Color, ColorPolicy};
pub use error::GameError;
pub use guard::Guard;
pub use history::{Operation, PhaseHistory, PhaseTransition};
pub use phase::Phase;
pub use state::{GameState, DEFAULT_AWARD_PER_COUNT};
pub use token::{DisplayNames, Roster, RosterEntry, Token, TokenId};
