//! Word pool and candidate filtering
//!
//! A [`WordPool`] is the read-only dictionary of one run. Candidate pools are
//! ordered `Vec<&Word>` slices borrowing from it, narrowed by
//! [`filter_candidates`] after every round of feedback.

use super::{Feedback, SolverError, Word};
use rustc_hash::FxHashSet;

/// Ordered, unique, fixed-length word list
///
/// Serves both as the universe of guessable words and as the universe of
/// possible targets. Immutable after construction, so it can be shared by
/// reference across worker threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPool {
    words: Vec<Word>,
    word_len: usize,
}

impl WordPool {
    /// Build a pool, checking that all words share one length and appear once
    ///
    /// # Errors
    /// - `EmptyGuessUniverse` if `words` is empty
    /// - `LengthMismatch` if a word's length differs from the first word's
    /// - `DuplicateWord` if a word appears twice
    pub fn new(words: Vec<Word>) -> Result<Self, SolverError> {
        let word_len = words
            .first()
            .map(Word::len)
            .ok_or(SolverError::EmptyGuessUniverse)?;

        let mut seen = FxHashSet::default();
        for word in &words {
            SolverError::check_length(word_len, word.len())?;
            if !seen.insert(word.text()) {
                return Err(SolverError::DuplicateWord(word.text().to_string()));
            }
        }

        Ok(Self { words, word_len })
    }

    /// Build a pool from string slices
    ///
    /// # Errors
    /// Same as [`WordPool::new`], plus `InvalidWord` for malformed entries.
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy::core::WordPool;
    ///
    /// let pool = WordPool::from_strs(&["abcde", "abcdf", "zzzzz"]).unwrap();
    /// assert_eq!(pool.len(), 3);
    /// assert_eq!(pool.word_len(), 5);
    ///
    /// assert!(WordPool::from_strs(&["abcde", "abc"]).is_err());
    /// ```
    pub fn from_strs(words: &[&str]) -> Result<Self, SolverError> {
        let words = words
            .iter()
            .map(|&s| Word::new(s))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(words)
    }

    /// All words, in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Length `n` shared by every word in the pool
    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Look up a word by text (case-insensitive)
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Word> {
        let text = text.trim().to_ascii_lowercase();
        self.words.iter().find(|w| w.text() == text)
    }

    /// Look up a word, failing with `NotInGuessUniverse` when it is absent
    ///
    /// # Errors
    /// Returns `NotInGuessUniverse` if no pool word matches `text`.
    pub fn require(&self, text: &str) -> Result<&Word, SolverError> {
        self.find(text)
            .ok_or_else(|| SolverError::NotInGuessUniverse(text.trim().to_string()))
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// The full pool as an initial candidate list
    #[must_use]
    pub fn candidates(&self) -> Vec<&Word> {
        self.words.iter().collect()
    }

    /// Words of the full pool consistent with `(guess, observed)`
    ///
    /// # Errors
    /// See [`filter_candidates`].
    pub fn filter(&self, guess: &Word, observed: Feedback) -> Result<Vec<&Word>, SolverError> {
        filter_candidates(&self.candidates(), guess, observed)
    }
}

/// Keep the candidates `w` for which `score(guess, w) == observed`
///
/// Relative order is preserved and the input is not modified. Filtering twice
/// with the same pair is a no-op, and filters from different rounds commute.
///
/// # Errors
/// Returns `LengthMismatch` if the guess, the feedback or any candidate does
/// not share one length.
///
/// # Examples
/// ```
/// use wordle_entropy::core::{filter_candidates, Feedback, Word, WordPool};
///
/// let pool = WordPool::from_strs(&["abcde", "abcdf", "zzzzz"]).unwrap();
/// let guess = Word::new("zzzzz").unwrap();
/// let target = Word::new("abcde").unwrap();
/// let observed = Feedback::score(&guess, &target).unwrap();
///
/// let remaining = filter_candidates(&pool.candidates(), &guess, observed).unwrap();
/// let texts: Vec<&str> = remaining.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["abcde", "abcdf"]);
/// ```
pub fn filter_candidates<'a>(
    candidates: &[&'a Word],
    guess: &Word,
    observed: Feedback,
) -> Result<Vec<&'a Word>, SolverError> {
    SolverError::check_length(guess.len(), observed.len())?;

    candidates
        .iter()
        .copied()
        .filter_map(|candidate| match Feedback::score(guess, candidate) {
            Ok(feedback) if feedback == observed => Some(Ok(candidate)),
            Ok(_) => None,
            Err(e) => Some(Err(e)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn texts<'a>(words: &[&'a Word]) -> Vec<&'a str> {
        words.iter().map(|w| w.text()).collect()
    }

    #[test]
    fn pool_rejects_mixed_lengths() {
        assert_eq!(
            WordPool::from_strs(&["crane", "cat"]),
            Err(SolverError::LengthMismatch {
                expected: 5,
                found: 3
            })
        );
    }

    #[test]
    fn pool_rejects_duplicates() {
        assert_eq!(
            WordPool::from_strs(&["crane", "slate", "CRANE"]),
            Err(SolverError::DuplicateWord("crane".to_string()))
        );
    }

    #[test]
    fn pool_rejects_empty() {
        assert_eq!(WordPool::new(Vec::new()), Err(SolverError::EmptyGuessUniverse));
    }

    #[test]
    fn pool_lookup() {
        let pool = WordPool::from_strs(&["crane", "slate"]).unwrap();
        assert_eq!(pool.find("SLATE").map(Word::text), Some("slate"));
        assert!(pool.find("irate").is_none());
        assert_eq!(
            pool.require("irate"),
            Err(SolverError::NotInGuessUniverse("irate".to_string()))
        );
        assert!(pool.contains(&word("crane")));
    }

    #[test]
    fn filter_keeps_consistent_words_in_order() {
        let pool = WordPool::from_strs(&["abcde", "abcdf", "zzzzz"]).unwrap();
        let guess = word("zzzzz");
        let observed = Feedback::score(&guess, &word("abcde")).unwrap();

        let remaining = pool.filter(&guess, observed).unwrap();
        assert_eq!(texts(&remaining), ["abcde", "abcdf"]);
    }

    #[test]
    fn filter_exact_match_leaves_only_target() {
        let pool = WordPool::from_strs(&["irate", "crate", "grate"]).unwrap();
        let guess = word("irate");

        let remaining = pool.filter(&guess, Feedback::solved(5)).unwrap();
        assert_eq!(texts(&remaining), ["irate"]);
    }

    #[test]
    fn filter_is_idempotent() {
        let pool = WordPool::from_strs(&["crane", "slate", "irate", "crate", "grate"]).unwrap();
        let guess = word("crane");
        let observed = Feedback::score(&guess, &word("grate")).unwrap();

        let once = pool.filter(&guess, observed).unwrap();
        let twice = filter_candidates(&once, &guess, observed).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn filter_can_empty_the_pool() {
        let pool = WordPool::from_strs(&["irate", "crate"]).unwrap();
        let remaining = pool.filter(&word("zzzzz"), Feedback::solved(5)).unwrap();
        assert!(remaining.is_empty());
    }

    #[test]
    fn filter_rejects_length_mismatch() {
        let pool = WordPool::from_strs(&["irate", "crate"]).unwrap();
        assert_eq!(
            pool.filter(&word("cat"), Feedback::solved(3)),
            Err(SolverError::LengthMismatch {
                expected: 5,
                found: 3
            })
        );
        assert_eq!(
            pool.filter(&word("crane"), Feedback::solved(4)),
            Err(SolverError::LengthMismatch {
                expected: 5,
                found: 4
            })
        );
    }
}
