//! Word representation
//!
//! A Word stores a lowercase ASCII word of any length up to [`MAX_WORD_LEN`].

use std::fmt;

/// Longest supported word. Feedback for a word this long still packs into a `u64`.
pub const MAX_WORD_LEN: usize = 40;

/// A lowercase ASCII word
///
/// The length is not fixed by the type; a [`WordPool`](super::WordPool) pins
/// every word of a run to one length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: Box<str>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    TooLong(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::TooLong(len) => {
                write!(f, "Word must be at most {MAX_WORD_LEN} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string, lowercasing it
    ///
    /// # Errors
    /// Returns `WordError` if the word is empty, longer than [`MAX_WORD_LEN`],
    /// or contains anything other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy::core::Word;
    ///
    /// let word = Word::new("Tares").unwrap();
    /// assert_eq!(word.text(), "tares");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        if text.is_empty() {
            return Err(WordError::Empty);
        }
        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }
        if text.len() > MAX_WORD_LEN {
            return Err(WordError::TooLong(text.len()));
        }
        if !text.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self {
            text: text.to_ascii_lowercase().into_boxed_str(),
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as lowercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; kept alongside `len` for clippy
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Count of each letter `a..=z`
    ///
    /// Used by the feedback oracle for duplicate-letter bookkeeping.
    #[inline]
    #[must_use]
    pub(crate) fn letter_counts(&self) -> [u8; 26] {
        let mut counts = [0u8; 26];
        for &letter in self.letters() {
            counts[usize::from(letter - b'a')] += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
