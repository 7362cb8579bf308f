//! Word lists for Wordle solving
//!
//! Dictionary files are read once per run, filtered to one word length, and
//! handed to the solver as a read-only [`WordPool`](crate::core::WordPool).

pub mod loader;

pub use loader::{LoadError, load_word_pool, save_word_pool, words_of_length};

/// Dictionary read when no `--wordlist` is given
pub const DEFAULT_DICTIONARY: &str = "dictionary/words_alpha.txt";

/// Word length used when no `--length` is given
pub const DEFAULT_WORD_LENGTH: usize = 5;
