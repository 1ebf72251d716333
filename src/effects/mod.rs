//! The imperative shell around the pure core.
//!
//! This module wires [`GameState`](crate::core::GameState) transitions to the
//! two collaborators the game consumes:
//!
//! - **Chooser**: uniform random choice over a finite set, injectable so
//!   tests can script it
//! - **Cue sink**: fire-and-forget notifications after a draw
//!
//! The [`Game`] machine resolves randomness, applies the pure transition,
//! records history and only then emits cues.

mod chooser;
mod cue;
mod machine;

pub use chooser::{Chooser, ScriptedChooser, SeededChooser};
pub use cue::{Cue, CueSink, RecordedCues, SilentCues};
pub use machine::Game;
