//! Letter-set draw sources
//!
//! The search asks a [`LetterSource`] for each attempt's letter set, so the
//! randomness can be swapped for a fixed script when results must be
//! reproducible.

use super::Alphabet;
use crate::core::LetterSet;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Supplies candidate letter sets to the search
pub trait LetterSource {
    /// Draw the next letter set from `alphabet`
    ///
    /// Returns `None` once the source is exhausted; the search then stops
    /// early.
    fn draw(&mut self, alphabet: &Alphabet) -> Option<LetterSet>;
}

impl<S: LetterSource + ?Sized> LetterSource for &mut S {
    fn draw(&mut self, alphabet: &Alphabet) -> Option<LetterSet> {
        (**self).draw(alphabet)
    }
}

/// Random draws: shuffle the alphabet, keep the first seven distinct letters
///
/// Shuffling positions rather than letters means a letter listed several
/// times is more likely to land near the front. Repeated values are skipped
/// so every set has seven different tiles.
pub struct RandomDraw<R> {
    rng: R,
}

impl<R: Rng> RandomDraw<R> {
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomDraw<StdRng> {
    /// Reproducible draws from a fixed seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Draws seeded from the thread-local generator
    #[must_use]
    pub fn from_thread_rng() -> Self {
        Self::new(StdRng::from_rng(&mut rand::rng()))
    }
}

impl<R: Rng> LetterSource for RandomDraw<R> {
    fn draw(&mut self, alphabet: &Alphabet) -> Option<LetterSet> {
        let mut shuffled = alphabet.letters().to_vec();
        shuffled.shuffle(&mut self.rng);
        LetterSet::from_distinct(shuffled)
    }
}

/// Replays a fixed sequence of letter sets, ignoring the alphabet
#[derive(Debug, Clone, Default)]
pub struct ScriptedDraw {
    sets: VecDeque<LetterSet>,
}

impl ScriptedDraw {
    #[must_use]
    pub fn new<I: IntoIterator<Item = LetterSet>>(sets: I) -> Self {
        Self {
            sets: sets.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.sets.len()
    }
}

impl LetterSource for ScriptedDraw {
    fn draw(&mut self, _alphabet: &Alphabet) -> Option<LetterSet> {
        self.sets.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_draw_gives_seven_distinct_alphabet_letters() {
        let alphabet = Alphabet::default();
        let mut source = RandomDraw::seeded(7);

        for _ in 0..50 {
            let set = source.draw(&alphabet).unwrap();
            let mut letters = set.letters().to_vec();
            assert!(letters.iter().all(|c| alphabet.letters().contains(c)));
            letters.sort_unstable();
            letters.dedup();
            assert_eq!(letters.len(), 7);
        }
    }

    #[test]
    fn weighted_alphabet_still_yields_distinct_letters() {
        let alphabet = Alphabet::new("EEEEEEEEEEAAAAAAAAAASTRNLC").unwrap();
        let mut source = RandomDraw::seeded(42);

        for _ in 0..50 {
            let set = source.draw(&alphabet).unwrap();
            let mut letters = set.letters().to_vec();
            letters.sort_unstable();
            letters.dedup();
            assert_eq!(letters.len(), 7);
        }
    }

    #[test]
    fn seeded_draws_are_reproducible() {
        let alphabet = Alphabet::default();
        let mut first = RandomDraw::seeded(123);
        let mut second = RandomDraw::seeded(123);

        for _ in 0..10 {
            assert_eq!(first.draw(&alphabet), second.draw(&alphabet));
        }
    }

    #[test]
    fn thread_rng_draws_work() {
        let alphabet = Alphabet::default();
        let mut source = RandomDraw::from_thread_rng();
        assert!(source.draw(&alphabet).is_some());
    }

    #[test]
    fn scripted_draw_replays_in_order_then_runs_dry() {
        let alphabet = Alphabet::default();
        let a = LetterSet::parse("AEIOUST").unwrap();
        let b = LetterSet::parse("RSTLNEA").unwrap();
        let mut source = ScriptedDraw::new([a, b]);

        assert_eq!(source.remaining(), 2);
        assert_eq!(source.draw(&alphabet), Some(a));
        assert_eq!(source.draw(&alphabet), Some(b));
        assert_eq!(source.draw(&alphabet), None);
    }

    #[test]
    fn mutable_reference_is_a_source() {
        fn draw_once<S: LetterSource>(mut source: S, alphabet: &Alphabet) -> Option<LetterSet> {
            source.draw(alphabet)
        }

        let alphabet = Alphabet::default();
        let a = LetterSet::parse("AEIOUST").unwrap();
        let mut source = ScriptedDraw::new([a]);

        assert_eq!(draw_once(&mut source, &alphabet), Some(a));
        assert_eq!(source.remaining(), 0);
    }
}
