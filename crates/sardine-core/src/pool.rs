//! Non-repeating fortune pool.
//!
//! Draws fortunes without replacement. Once every fortune has been seen the
//! pool refills with a freshly shuffled permutation, so no fortune repeats
//! within a cycle and the pool never runs dry.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::fortunes::FortuneList;

/// Remaining unseen fortune indices over a fixed fortune list.
#[derive(Debug, Clone)]
pub struct FortunePool {
    fortunes: FortuneList,
    remaining: Vec<usize>,
}

impl FortunePool {
    /// Create a full pool over the given fortunes.
    pub fn new(fortunes: FortuneList) -> Self {
        let remaining = (0..fortunes.len()).collect();
        Self {
            fortunes,
            remaining,
        }
    }

    /// The underlying fortune list.
    pub fn fortunes(&self) -> &FortuneList {
        &self.fortunes
    }

    /// Number of fortunes not yet drawn in the current cycle.
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    /// Indices not yet drawn in the current cycle.
    pub fn remaining_indices(&self) -> &[usize] {
        &self.remaining
    }

    /// Draw one fortune index uniformly from the remaining pool.
    ///
    /// Refills the pool first if it is empty.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        if self.remaining.is_empty() {
            self.refill(rng);
        }
        let pick = rng.random_range(0..self.remaining.len());
        self.remaining.remove(pick)
    }

    /// Draw one fortune and return its text.
    pub fn draw_fortune<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &str {
        let index = self.draw(rng);
        self.fortunes.text(index)
    }

    fn refill<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.remaining.extend(0..self.fortunes.len());
        self.remaining.shuffle(rng);
        debug!(size = self.remaining.len(), "fortune pool refilled");
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn abc_pool() -> FortunePool {
        FortunePool::new(FortuneList::new(["A", "B", "C"]).unwrap())
    }

    #[test]
    fn starts_full() {
        let pool = FortunePool::new(FortuneList::builtin());
        assert_eq!(pool.remaining(), 12);
        assert_eq!(pool.remaining_indices(), (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn full_cycle_has_no_repeats() {
        let mut pool = FortunePool::new(FortuneList::builtin());
        let mut rng = StdRng::seed_from_u64(42);
        let seen: HashSet<usize> = (0..12).map(|_| pool.draw(&mut rng)).collect();
        assert_eq!(seen.len(), 12);
        assert_eq!(pool.remaining(), 0);
    }

    #[test]
    fn draw_after_exhaustion_refills() {
        let mut pool = abc_pool();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..3 {
            pool.draw(&mut rng);
        }
        assert_eq!(pool.remaining(), 0);
        let index = pool.draw(&mut rng);
        assert!(index < 3);
        assert_eq!(pool.remaining(), 2);
        assert!(!pool.remaining_indices().contains(&index));
    }

    #[test]
    fn abc_wraparound_scenario() {
        let mut pool = abc_pool();
        let mut rng = StdRng::seed_from_u64(9);
        let expected: HashSet<&str> = ["A", "B", "C"].into_iter().collect();

        let first: Vec<String> = (0..3).map(|_| pool.draw_fortune(&mut rng).to_string()).collect();
        let first_set: HashSet<&str> = first.iter().map(String::as_str).collect();
        assert_eq!(first_set, expected);

        let second: Vec<String> = (0..3).map(|_| pool.draw_fortune(&mut rng).to_string()).collect();
        assert!(expected.contains(second[0].as_str()));
        let second_set: HashSet<&str> = second.iter().map(String::as_str).collect();
        assert_eq!(second_set, expected);
    }

    #[test]
    fn single_fortune_always_returned() {
        let mut pool = FortunePool::new(FortuneList::new(["Only"]).unwrap());
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..5 {
            assert_eq!(pool.draw_fortune(&mut rng), "Only");
        }
    }

    #[test]
    fn same_seed_same_order() {
        let mut a = FortunePool::new(FortuneList::builtin());
        let mut b = FortunePool::new(FortuneList::builtin());
        let mut rng_a = StdRng::seed_from_u64(77);
        let mut rng_b = StdRng::seed_from_u64(77);
        for _ in 0..30 {
            assert_eq!(a.draw(&mut rng_a), b.draw(&mut rng_b));
        }
    }

    proptest! {
        #[test]
        fn every_cycle_is_a_permutation(seed in any::<u64>(), size in 1usize..20, cycles in 1usize..4) {
            let fortunes = FortuneList::new((0..size).map(|i| format!("fortune {i}"))).unwrap();
            let mut pool = FortunePool::new(fortunes);
            let mut rng = StdRng::seed_from_u64(seed);
            for _ in 0..cycles {
                let mut seen: Vec<usize> = (0..size).map(|_| pool.draw(&mut rng)).collect();
                seen.sort_unstable();
                prop_assert_eq!(seen, (0..size).collect::<Vec<_>>());
            }
        }

        #[test]
        fn remaining_never_exceeds_size(seed in any::<u64>(), draws in 0usize..50) {
            let mut pool = FortunePool::new(FortuneList::builtin());
            let mut rng = StdRng::seed_from_u64(seed);
            for _ in 0..draws {
                pool.draw(&mut rng);
                prop_assert!(pool.remaining() < 12);
            }
        }
    }
}
