//! Error type shared by the solving core

use super::WordError;
use thiserror::Error;

/// Errors raised by the oracle, the candidate filter, the selector and the
/// simulation driver.
///
/// Running out of attempts is not an error; see [`crate::solver::Outcome`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// A guess, target or feedback does not have the run's word length
    #[error("length mismatch: expected {expected} letters, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// An externally supplied feedback token is not a recognised status
    #[error("invalid feedback value: {0:?}")]
    InvalidFeedbackValue(String),

    /// No word in the candidate pool is consistent with the observed feedback
    #[error("candidate pool is empty: feedback is inconsistent with every remaining word")]
    EmptyCandidatePool,

    /// An externally supplied guess is not in the word pool
    #[error("{0:?} is not in the word pool")]
    NotInGuessUniverse(String),

    /// The guess universe has no words to choose from
    #[error("guess universe is empty")]
    EmptyGuessUniverse,

    /// A word pool was given the same word twice
    #[error("duplicate word in pool: {0}")]
    DuplicateWord(String),

    #[error(transparent)]
    InvalidWord(#[from] WordError),
}

impl SolverError {
    /// Check that `found` matches the run's word length
    pub(crate) const fn check_length(expected: usize, found: usize) -> Result<(), Self> {
        if expected == found {
            Ok(())
        } else {
            Err(Self::LengthMismatch { expected, found })
        }
    }
}
