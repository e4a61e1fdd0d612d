//! Shuffle bag - weighted random selection without replacement per cycle

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::{Result, ShuffleError};

/// Weighted shuffle bag
///
/// Each added label is expanded `weight` times into a cycle which is then
/// shuffled. Draws walk the cycle; once it is exhausted a fresh cycle is
/// built and shuffled. Nothing prevents the same label from being drawn
/// twice in a row across a cycle boundary (or within a cycle, when its
/// weight is above one).
pub struct ShuffleBag<L, R = StdRng> {
    /// Labels with their weights, in insertion order
    entries: Vec<(L, u32)>,
    /// Current shuffled cycle
    cycle: Vec<L>,
    /// Position of the next draw in `cycle`
    cursor: usize,
    rng: R,
}

impl<L: Clone> ShuffleBag<L, StdRng> {
    /// Create an empty bag seeded from OS entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create an empty bag with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<L: Clone> Default for ShuffleBag<L, StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Clone, R: Rng> ShuffleBag<L, R> {
    /// Create an empty bag drawing from the given random source
    pub fn with_rng(rng: R) -> Self {
        Self {
            entries: Vec::new(),
            cycle: Vec::new(),
            cursor: 0,
            rng,
        }
    }

    /// Add a label with the given weight
    ///
    /// Adding the same label twice keeps two independent entries. The
    /// current cycle is discarded so the next draw sees the new weights.
    pub fn add(&mut self, label: L, weight: u32) -> Result<()> {
        if weight == 0 {
            return Err(ShuffleError::ZeroWeight);
        }

        self.entries.push((label, weight));
        self.cycle.clear();
        self.cursor = 0;
        Ok(())
    }

    /// Draw the next label
    pub fn next(&mut self) -> Result<L> {
        if self.entries.is_empty() {
            return Err(ShuffleError::Empty);
        }

        if self.cursor >= self.cycle.len() {
            self.refill();
        }

        let label = self.cycle[self.cursor].clone();
        self.cursor += 1;
        Ok(label)
    }

    /// Remove every label and the current cycle
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cycle.clear();
        self.cursor = 0;
    }

    /// Number of draws in one full cycle (the sum of all weights)
    pub fn len(&self) -> usize {
        self.entries.iter().map(|(_, w)| *w as usize).sum()
    }

    /// Check if no label has been added
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Draws left before the bag reshuffles
    pub fn remaining(&self) -> usize {
        self.cycle.len() - self.cursor
    }

    fn refill(&mut self) {
        self.cycle.clear();
        for (label, weight) in &self.entries {
            self.cycle
                .extend(std::iter::repeat(label).take(*weight as usize).cloned());
        }
        self.cycle.shuffle(&mut self.rng);
        self.cursor = 0;

        log::trace!("Shuffle bag refilled with {} draws", self.cycle.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn count_cycle(bag: &mut ShuffleBag<&'static str>, draws: usize) -> HashMap<&'static str, usize> {
        let mut counts = HashMap::new();
        for _ in 0..draws {
            *counts.entry(bag.next().unwrap()).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_empty_bag_rejects_draw() {
        let mut bag: ShuffleBag<u8> = ShuffleBag::seeded(1);
        assert_eq!(bag.next(), Err(ShuffleError::Empty));
        assert!(bag.is_empty());
    }

    #[test]
    fn test_zero_weight_rejected() {
        let mut bag = ShuffleBag::seeded(1);
        assert_eq!(bag.add('a', 0), Err(ShuffleError::ZeroWeight));
        assert!(bag.is_empty());
    }

    #[test]
    fn test_full_cycle_matches_weights() {
        let mut bag = ShuffleBag::seeded(42);
        bag.add("a", 1).unwrap();
        bag.add("b", 3).unwrap();
        bag.add("c", 6).unwrap();
        assert_eq!(bag.len(), 10);

        // Five whole cycles
        let counts = count_cycle(&mut bag, 50);
        assert_eq!(counts["a"], 5);
        assert_eq!(counts["b"], 15);
        assert_eq!(counts["c"], 30);
    }

    #[test]
    fn test_duplicate_labels_accumulate() {
        let mut bag = ShuffleBag::seeded(3);
        bag.add("a", 2).unwrap();
        bag.add("a", 3).unwrap();
        bag.add("b", 1).unwrap();

        let counts = count_cycle(&mut bag, 6);
        assert_eq!(counts["a"], 5);
        assert_eq!(counts["b"], 1);
    }

    #[test]
    fn test_reshuffles_on_exhaustion() {
        let mut bag = ShuffleBag::seeded(9);
        bag.add(1u32, 2).unwrap();
        bag.add(2u32, 2).unwrap();

        bag.next().unwrap();
        assert_eq!(bag.remaining(), 3);
        for _ in 0..3 {
            bag.next().unwrap();
        }
        assert_eq!(bag.remaining(), 0);

        bag.next().unwrap();
        assert_eq!(bag.remaining(), 3);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = ShuffleBag::seeded(1234);
        let mut b = ShuffleBag::seeded(1234);
        for (label, weight) in [('x', 4), ('y', 5), ('z', 7)] {
            a.add(label, weight).unwrap();
            b.add(label, weight).unwrap();
        }

        let seq_a: Vec<char> = (0..64).map(|_| a.next().unwrap()).collect();
        let seq_b: Vec<char> = (0..64).map(|_| b.next().unwrap()).collect();
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn test_add_discards_current_cycle() {
        let mut bag = ShuffleBag::seeded(5);
        bag.add("a", 4).unwrap();
        bag.next().unwrap();
        assert_eq!(bag.remaining(), 3);

        bag.add("b", 4).unwrap();
        assert_eq!(bag.remaining(), 0);

        let counts = count_cycle(&mut bag, 8);
        assert_eq!(counts["a"], 4);
        assert_eq!(counts["b"], 4);
    }

    #[test]
    fn test_clear() {
        let mut bag = ShuffleBag::seeded(5);
        bag.add(7u8, 3).unwrap();
        bag.next().unwrap();

        bag.clear();
        assert!(bag.is_empty());
        assert_eq!(bag.len(), 0);
        assert_eq!(bag.remaining(), 0);
        assert_eq!(bag.next(), Err(ShuffleError::Empty));
    }
}
