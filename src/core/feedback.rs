//! Feedback oracle and feedback representation
//!
//! Feedback is packed as a base-3 number with one digit per letter:
//! - 0 = Absent (letter not in word, or all its occurrences accounted for)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Correct (letter in correct position)
//!
//! Position `i` contributes `digit × 3^i`. With [`MAX_WORD_LEN`] letters the
//! largest code is `3^40 - 1`, which fits in a `u64`.

use super::word::MAX_WORD_LEN;
use super::{SolverError, Word};
use std::fmt;

/// Emoji presentation selector that share text often appends to `⬜`
const VARIATION_SELECTOR: char = '\u{fe0f}';

/// Per-position outcome of comparing a guess letter to the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    const fn digit(self) -> u64 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    const fn from_digit(digit: u64) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Parse a single status token
    ///
    /// Accepts the colour names (`green`, `yellow`, `gray`/`grey`), the status
    /// names, single letters `g`/`y`/`-`/`_`, and the Wordle share emoji.
    ///
    /// # Errors
    /// Returns `InvalidFeedbackValue` for anything else.
    pub fn parse_token(token: &str) -> Result<Self, SolverError> {
        match token.trim_end_matches(VARIATION_SELECTOR).to_ascii_lowercase().as_str() {
            "green" | "correct" | "g" | "🟩" => Ok(Self::Correct),
            "yellow" | "present" | "y" | "🟨" => Ok(Self::Present),
            "gray" | "grey" | "absent" | "-" | "_" | "⬜" | "⬛" => Ok(Self::Absent),
            _ => Err(SolverError::InvalidFeedbackValue(token.to_string())),
        }
    }

    /// Share-grid emoji for this status
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Compact one-character form (`G`, `Y`, `-`)
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

/// Feedback for one guess: an ordered sequence of letter statuses
///
/// Two feedbacks are equal iff they have the same length and all statuses
/// match positionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    code: u64,
    len: u8,
}

impl Feedback {
    /// Score `guess` against `target` using Wordle's exact rules
    ///
    /// # Algorithm
    /// 1. Count every letter of the target
    /// 2. First pass: mark exact matches Correct and consume their counts
    /// 3. Second pass: mark remaining positions Present while the letter still
    ///    has a count left, otherwise Absent
    ///
    /// Correct and Present marks for a letter never exceed its multiplicity
    /// in the target.
    ///
    /// # Errors
    /// Returns `LengthMismatch` if the two words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy::core::{Feedback, LetterStatus, Word};
    ///
    /// let guess = Word::new("aabbc").unwrap();
    /// let target = Word::new("ababc").unwrap();
    /// let feedback = Feedback::score(&guess, &target).unwrap();
    ///
    /// assert_eq!(feedback.to_string(), "GYYGG");
    /// assert_eq!(feedback.count(LetterStatus::Correct), 3);
    /// ```
    pub fn score(guess: &Word, target: &Word) -> Result<Self, SolverError> {
        SolverError::check_length(target.len(), guess.len())?;
        Ok(Self::score_unchecked(guess, target))
    }

    /// Score two words already known to have equal length
    pub(crate) fn score_unchecked(guess: &Word, target: &Word) -> Self {
        let guess = guess.letters();
        let answer = target.letters();
        debug_assert_eq!(guess.len(), answer.len());

        let mut result = [LetterStatus::Absent; MAX_WORD_LEN];
        let mut available = target.letter_counts();

        // First pass: exact position matches
        for (i, (&g, &a)) in guess.iter().zip(answer).enumerate() {
            if g == a {
                result[i] = LetterStatus::Correct;
                available[usize::from(g - b'a')] -= 1;
            }
        }

        // Second pass: right letter, wrong position
        for (i, &g) in guess.iter().enumerate() {
            if result[i] == LetterStatus::Absent {
                let count = &mut available[usize::from(g - b'a')];
                if *count > 0 {
                    result[i] = LetterStatus::Present;
                    *count -= 1;
                }
            }
        }

        Self::pack(&result[..guess.len()])
    }

    fn pack(statuses: &[LetterStatus]) -> Self {
        let code = statuses
            .iter()
            .rev()
            .fold(0u64, |acc, status| acc * 3 + status.digit());
        Self {
            code,
            len: statuses.len() as u8,
        }
    }

    /// Build feedback from explicit statuses
    ///
    /// # Errors
    /// Returns `LengthMismatch` if there are no statuses or more than
    /// [`MAX_WORD_LEN`] of them.
    pub fn from_statuses(statuses: &[LetterStatus]) -> Result<Self, SolverError> {
        if statuses.is_empty() || statuses.len() > MAX_WORD_LEN {
            return Err(SolverError::LengthMismatch {
                expected: statuses.len().clamp(1, MAX_WORD_LEN),
                found: statuses.len(),
            });
        }
        Ok(Self::pack(statuses))
    }

    /// The all-Correct feedback for words of length `len`
    ///
    /// `len` is clamped to `1..=MAX_WORD_LEN`.
    #[must_use]
    pub fn solved(len: usize) -> Self {
        let len = len.clamp(1, MAX_WORD_LEN);
        Self::pack(&[LetterStatus::Correct; MAX_WORD_LEN][..len])
    }

    /// Parse externally supplied feedback for a word of `expected_len` letters
    ///
    /// Accepts either a compact string with one symbol per letter
    /// (`"GY-GY"`, `"🟩🟨⬜🟩🟨"`) or whitespace-separated tokens
    /// (`"green yellow gray green yellow"`).
    ///
    /// # Errors
    /// - `InvalidFeedbackValue` if a symbol or token is not a recognised status
    /// - `LengthMismatch` if the number of statuses is not `expected_len`
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy::core::Feedback;
    ///
    /// let compact = Feedback::parse("GY-GY", 5).unwrap();
    /// let tokens = Feedback::parse("green yellow gray green yellow", 5).unwrap();
    /// let emoji = Feedback::parse("🟩🟨⬜🟩🟨", 5).unwrap();
    /// assert_eq!(compact, tokens);
    /// assert_eq!(compact, emoji);
    ///
    /// assert!(Feedback::parse("GY-G", 5).is_err());
    /// assert!(Feedback::parse("GYXGY", 5).is_err());
    /// ```
    pub fn parse(input: &str, expected_len: usize) -> Result<Self, SolverError> {
        let input = input.replace(VARIATION_SELECTOR, "");
        let tokens: Vec<&str> = input.split_whitespace().collect();

        let long_form = tokens.len() > 1
            || tokens
                .first()
                .is_some_and(|t| t.chars().count() > 1 && LetterStatus::parse_token(t).is_ok());

        let statuses = if long_form {
            tokens
                .iter()
                .map(|t| LetterStatus::parse_token(t))
                .collect::<Result<Vec<_>, _>>()?
        } else {
            input
                .trim()
                .chars()
                .map(|c| LetterStatus::parse_token(c.encode_utf8(&mut [0; 4])))
                .collect::<Result<Vec<_>, _>>()?
        };

        SolverError::check_length(expected_len, statuses.len())?;
        Self::from_statuses(&statuses)
    }

    /// Number of letters this feedback covers
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    /// Always false for feedback produced by this module
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Raw base-3 code
    #[inline]
    #[must_use]
    pub const fn code(self) -> u64 {
        self.code
    }

    /// Status at `position`
    ///
    /// # Panics
    /// Panics if `position >= self.len()`.
    #[must_use]
    pub fn status(self, position: usize) -> LetterStatus {
        assert!(position < self.len(), "position {position} out of range");
        LetterStatus::from_digit(self.code / 3u64.pow(position as u32) % 3)
    }

    /// All statuses in letter order
    pub fn statuses(self) -> impl Iterator<Item = LetterStatus> {
        let mut rest = self.code;
        (0..self.len()).map(move |_| {
            let status = LetterStatus::from_digit(rest % 3);
            rest /= 3;
            status
        })
    }

    /// Number of positions with the given status
    #[must_use]
    pub fn count(self, status: LetterStatus) -> usize {
        self.statuses().filter(|&s| s == status).count()
    }

    /// Whether every letter is Correct
    #[must_use]
    pub fn is_solved(self) -> bool {
        self == Self::solved(self.len())
    }

    /// Render as share-grid emoji
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.statuses().map(LetterStatus::emoji).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.statuses()
            .try_for_each(|status| write!(f, "{}", status.symbol()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Absent, Correct, Present};

    fn score(guess: &str, target: &str) -> Feedback {
        Feedback::score(&Word::new(guess).unwrap(), &Word::new(target).unwrap()).unwrap()
    }

    fn statuses(guess: &str, target: &str) -> Vec<LetterStatus> {
        score(guess, target).statuses().collect()
    }

    #[test]
    fn all_absent() {
        let feedback = score("abcde", "fghij");
        assert_eq!(feedback.code(), 0);
        assert_eq!(feedback.count(Absent), 5);
    }

    #[test]
    fn all_correct() {
        let feedback = score("tares", "tares");
        assert!(feedback.is_solved());
        assert_eq!(feedback, Feedback::solved(5));
    }

    #[test]
    fn duplicate_letters_two_pass() {
        // Pass 1: a(0), b(3), c(4) are exact. Remaining target letters: b, a.
        // Pass 2: a(1) takes the spare a, b(2) takes the spare b.
        assert_eq!(
            statuses("aabbc", "ababc"),
            vec![Correct, Present, Present, Correct, Correct]
        );
    }

    #[test]
    fn duplicate_letters_green_takes_priority() {
        // creep has one spare e after the exact match at index 2, so only
        // the first unmatched e of the guess is Present.
        assert_eq!(
            statuses("geese", "creep"),
            vec![Absent, Present, Correct, Absent, Absent]
        );
        assert_eq!(
            statuses("speed", "erase"),
            vec![Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn duplicate_letters_in_target_only() {
        assert_eq!(
            statuses("robot", "floor"),
            vec![Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn known_code_values() {
        // Absent, Absent, Correct, Absent, Correct
        // 0 + 0×3 + 2×9 + 0×27 + 2×81 = 180
        let feedback = score("crane", "slate");
        assert_eq!(feedback.to_string(), "--G-G");
        assert_eq!(feedback.code(), 180);
        let feedback = score("crane", "react");
        assert_eq!(feedback.to_string(), "YYG-Y");
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let result = Feedback::score(&Word::new("abc").unwrap(), &Word::new("abcd").unwrap());
        assert_eq!(
            result,
            Err(SolverError::LengthMismatch {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn long_words_pack_without_overflow() {
        let word = Word::new("z".repeat(MAX_WORD_LEN)).unwrap();
        let feedback = Feedback::score(&word, &word).unwrap();
        assert!(feedback.is_solved());
        assert_eq!(feedback.count(Correct), MAX_WORD_LEN);
    }

    #[test]
    fn status_accessor_matches_iterator() {
        let feedback = score("aabbc", "ababc");
        let collected: Vec<_> = (0..feedback.len()).map(|i| feedback.status(i)).collect();
        assert_eq!(collected, feedback.statuses().collect::<Vec<_>>());
    }

    #[test]
    fn parse_compact_and_tokens() {
        let expected = Feedback::from_statuses(&[Correct, Present, Absent, Correct, Present]).unwrap();
        assert_eq!(Feedback::parse("GY-GY", 5).unwrap(), expected);
        assert_eq!(Feedback::parse("gy_gy", 5).unwrap(), expected);
        assert_eq!(Feedback::parse("🟩🟨⬜🟩🟨", 5).unwrap(), expected);
        assert_eq!(
            Feedback::parse("green yellow gray green yellow", 5).unwrap(),
            expected
        );
        assert_eq!(Feedback::parse("  GY-GY \n", 5).unwrap(), expected);
    }

    #[test]
    fn parse_ignores_emoji_variation_selectors() {
        let expected = Feedback::from_statuses(&[Correct, Present, Absent, Correct, Absent]).unwrap();
        assert_eq!(Feedback::parse("🟩🟨⬜\u{fe0f}🟩⬜\u{fe0f}", 5).unwrap(), expected);
        assert_eq!(
            Feedback::parse("🟩 🟨 ⬜\u{fe0f} 🟩 ⬜\u{fe0f}", 5).unwrap(),
            expected
        );
        assert_eq!(LetterStatus::parse_token("⬜\u{fe0f}"), Ok(Absent));
    }

    #[test]
    fn parse_single_letter_word() {
        assert_eq!(
            Feedback::parse("green", 1).unwrap(),
            Feedback::from_statuses(&[Correct]).unwrap()
        );
        assert_eq!(
            Feedback::parse("-", 1).unwrap(),
            Feedback::from_statuses(&[Absent]).unwrap()
        );
    }

    #[test]
    fn parse_rejects_bad_values() {
        assert_eq!(
            Feedback::parse("GYXGY", 5),
            Err(SolverError::InvalidFeedbackValue("X".to_string()))
        );
        assert_eq!(
            Feedback::parse("green blue gray green yellow", 5),
            Err(SolverError::InvalidFeedbackValue("blue".to_string()))
        );
    }

    #[test]
    fn parse_rejects_wrong_count() {
        assert_eq!(
            Feedback::parse("GYG", 5),
            Err(SolverError::LengthMismatch {
                expected: 5,
                found: 3
            })
        );
        assert_eq!(
            Feedback::parse("green yellow", 5),
            Err(SolverError::LengthMismatch {
                expected: 5,
                found: 2
            })
        );
        assert!(Feedback::parse("", 5).is_err());
    }

    #[test]
    fn emoji_rendering() {
        assert_eq!(score("crane", "slate").to_emoji(), "⬜⬜🟩⬜🟩");
    }
}
