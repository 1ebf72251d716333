//! Uniform choice over a finite set, injected into the game.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Source of uniform random indices.
///
/// `choose(len)` must return a value in `0..len` for any `len > 0`. The game
/// never calls it with `len == 0`.
pub trait Chooser {
    fn choose(&mut self, len: usize) -> usize;
}

impl<C: Chooser + ?Sized> Chooser for &mut C {
    fn choose(&mut self, len: usize) -> usize {
        (**self).choose(len)
    }
}

impl<C: Chooser + ?Sized> Chooser for Box<C> {
    fn choose(&mut self, len: usize) -> usize {
        (**self).choose(len)
    }
}

/// Chooser backed by `StdRng`.
#[derive(Clone, Debug)]
pub struct SeededChooser {
    rng: StdRng,
}

impl SeededChooser {
    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded when `seed` is given, from entropy otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl Chooser for SeededChooser {
    fn choose(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Chooser replaying a fixed script of indices.
///
/// Each scripted value is wrapped with `% len`. Once the script runs out
/// every choice is `0`.
///
/// # Example
///
/// ```rust
/// use menagerie::effects::{Chooser, ScriptedChooser};
///
/// let mut chooser = ScriptedChooser::new([2, 5]);
/// assert_eq!(chooser.choose(3), 2);
/// assert_eq!(chooser.choose(3), 2); // 5 % 3
/// assert_eq!(chooser.choose(3), 0); // exhausted
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedChooser {
    script: VecDeque<usize>,
    consumed: usize,
}

impl ScriptedChooser {
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
            consumed: 0,
        }
    }

    /// Append more choices to the end of the script.
    pub fn push(&mut self, index: usize) {
        self.script.push_back(index);
    }

    /// How many choices have been made so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Scripted choices not yet used.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Chooser for ScriptedChooser {
    fn choose(&mut self, len: usize) -> usize {
        self.consumed += 1;
        self.script.pop_front().map_or(0, |index| index % len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_chooser_is_reproducible() {
        let mut a = SeededChooser::seeded(42);
        let mut b = SeededChooser::seeded(42);

        let left: Vec<usize> = (0..32).map(|_| a.choose(20)).collect();
        let right: Vec<usize> = (0..32).map(|_| b.choose(20)).collect();

        assert_eq!(left, right);
    }

    #[test]
    fn seeded_chooser_stays_in_range() {
        let mut chooser = SeededChooser::seeded(7);
        assert!((0..1000).all(|_| chooser.choose(8) < 8));
    }

    #[test]
    fn scripted_chooser_counts_consumption() {
        let mut chooser = ScriptedChooser::new([1]);
        chooser.choose(4);
        chooser.choose(4);

        assert_eq!(chooser.consumed(), 2);
        assert_eq!(chooser.remaining(), 0);
    }

    #[test]
    fn chooser_works_through_mut_reference() {
        fn pick<C: Chooser>(mut chooser: C) -> usize {
            chooser.choose(10)
        }

        let mut chooser = ScriptedChooser::new([3]);

        assert_eq!(pick(&mut chooser), 3);
        assert_eq!(chooser.consumed(), 1);
    }
}
