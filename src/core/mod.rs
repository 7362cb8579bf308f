//! Core domain types
//!
//! Words, the feedback oracle, the word pool and candidate filtering.
//! Everything here is pure and synchronous.

mod error;
mod feedback;
mod pool;
mod word;

pub use error::SolverError;
pub use feedback::{Feedback, LetterStatus};
pub use pool::{WordPool, filter_candidates};
pub use word::{MAX_WORD_LEN, Word, WordError};
