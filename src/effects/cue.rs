//! Fire-and-forget cues emitted after accepted operations.

use crate::core::TokenId;
use serde::{Deserialize, Serialize};

/// Notification a presentation layer may turn into sound or animation.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum Cue {
    /// A draw completed with `token` as winner
    Win { token: TokenId },
}

/// Receiver of cues. Nothing it does flows back into game state.
pub trait CueSink {
    fn emit(&mut self, cue: &Cue);
}

impl<N: CueSink + ?Sized> CueSink for &mut N {
    fn emit(&mut self, cue: &Cue) {
        (**self).emit(cue)
    }
}

impl<N: CueSink + ?Sized> CueSink for Box<N> {
    fn emit(&mut self, cue: &Cue) {
        (**self).emit(cue)
    }
}

/// Drops every cue.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentCues;

impl CueSink for SilentCues {
    fn emit(&mut self, _cue: &Cue) {}
}

/// Keeps every cue it receives, in order.
#[derive(Clone, Debug, Default)]
pub struct RecordedCues {
    cues: Vec<Cue>,
}

impl RecordedCues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }
}

impl CueSink for RecordedCues {
    fn emit(&mut self, cue: &Cue) {
        self.cues.push(cue.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorded_cues_keep_order() {
        let mut sink = RecordedCues::new();
        sink.emit(&Cue::Win {
            token: TokenId::new("A"),
        });
        sink.emit(&Cue::Win {
            token: TokenId::new("B"),
        });

        assert_eq!(sink.len(), 2);
        assert_eq!(
            sink.cues()[1],
            Cue::Win {
                token: TokenId::new("B")
            }
        );
    }

    #[test]
    fn boxed_sink_forwards() {
        let mut sink: Box<dyn CueSink> = Box::new(SilentCues);
        sink.emit(&Cue::Win {
            token: TokenId::new("A"),
        });
    }
}
