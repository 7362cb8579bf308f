//! Feedback distributions
//!
//! Scoring one guess against every candidate partitions the candidates into
//! groups that would stay indistinguishable after that guess. Both scoring
//! strategies reduce this one distribution to a scalar.

use crate::core::{Feedback, SolverError, Word};
use rustc_hash::FxHashMap;

/// Count of candidates per feedback outcome for a single guess
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackDistribution {
    counts: FxHashMap<Feedback, usize>,
    total: usize,
}

impl FeedbackDistribution {
    /// Tally `score(guess, candidate)` over all candidates
    ///
    /// Cost is O(|candidates| × n).
    ///
    /// # Errors
    /// Returns `LengthMismatch` if the guess and a candidate differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy::core::Word;
    /// use wordle_entropy::solver::FeedbackDistribution;
    ///
    /// let words = ["abcde", "abcdf", "zzzzz"].map(|w| Word::new(w).unwrap());
    /// let candidates: Vec<&Word> = words.iter().collect();
    ///
    /// let distribution = FeedbackDistribution::build(&candidates, &words[2]).unwrap();
    /// assert_eq!(distribution.total(), 3);
    /// assert_eq!(distribution.group_count(), 2);
    /// assert_eq!(distribution.largest_group(), 2);
    /// ```
    pub fn build(candidates: &[&Word], guess: &Word) -> Result<Self, SolverError> {
        let mut distribution = Self::default();
        for &candidate in candidates {
            distribution.record(Feedback::score(guess, candidate)?);
        }
        Ok(distribution)
    }

    /// Add one observation of `feedback`
    pub fn record(&mut self, feedback: Feedback) {
        *self.counts.entry(feedback).or_insert(0) += 1;
        self.total += 1;
    }

    /// Sum of all group sizes
    #[inline]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct feedback outcomes
    #[inline]
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Size of the largest group, 0 when empty
    #[must_use]
    pub fn largest_group(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// Number of candidates that would produce `feedback`
    #[must_use]
    pub fn count(&self, feedback: Feedback) -> usize {
        self.counts.get(&feedback).copied().unwrap_or(0)
    }

    /// Group sizes, smallest first
    ///
    /// Distributions with the same multiset of sizes yield the same sequence
    /// whatever the feedback codes or hash order.
    #[must_use]
    pub fn group_sizes(&self) -> Vec<usize> {
        let mut sizes: Vec<usize> = self.counts.values().copied().collect();
        sizes.sort_unstable();
        sizes
    }

    /// `(feedback, count)` pairs, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (Feedback, usize)> + '_ {
        self.counts.iter().map(|(&feedback, &count)| (feedback, count))
    }

    /// Expected number of candidates left after the guess
    ///
    /// Σ count_k² / total
    #[must_use]
    pub fn expected_remaining(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let sum_squares: usize = self.counts.values().map(|&c| c * c).sum();
        sum_squares as f64 / self.total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn build_groups_by_feedback() {
        let pool = words(&["irate", "crate", "grate", "slate"]);
        let candidates: Vec<&Word> = pool.iter().collect();
        let guess = Word::new("crane").unwrap();

        let distribution = FeedbackDistribution::build(&candidates, &guess).unwrap();

        assert_eq!(distribution.total(), 4);
        assert_eq!(distribution.group_sizes().iter().sum::<usize>(), 4);
        // irate and grate both give -GG-G
        assert_eq!(distribution.count(Feedback::parse("-GG-G", 5).unwrap()), 2);
        assert_eq!(distribution.largest_group(), 2);
    }

    #[test]
    fn single_candidate_equal_to_guess() {
        let pool = words(&["tares"]);
        let candidates: Vec<&Word> = pool.iter().collect();

        let distribution = FeedbackDistribution::build(&candidates, &pool[0]).unwrap();

        assert_eq!(distribution.group_count(), 1);
        assert_eq!(distribution.count(Feedback::solved(5)), 1);
    }

    #[test]
    fn empty_candidates() {
        let guess = Word::new("tares").unwrap();
        let distribution = FeedbackDistribution::build(&[], &guess).unwrap();
        assert!(distribution.is_empty());
        assert_eq!(distribution.largest_group(), 0);
        assert!(distribution.expected_remaining().abs() < f64::EPSILON);
    }

    #[test]
    fn expected_remaining_weights_large_groups() {
        let mut distribution = FeedbackDistribution::default();
        let solved = Feedback::solved(5);
        let blank = Feedback::parse("-----", 5).unwrap();
        for _ in 0..3 {
            distribution.record(blank);
        }
        distribution.record(solved);

        // (3² + 1²) / 4
        assert!((distribution.expected_remaining() - 2.5).abs() < 1e-12);
    }

    #[test]
    fn length_mismatch_propagates() {
        let pool = words(&["tares"]);
        let candidates: Vec<&Word> = pool.iter().collect();
        let guess = Word::new("cat").unwrap();
        assert!(FeedbackDistribution::build(&candidates, &guess).is_err());
    }
}
