//! Word list loading utilities
//!
//! Reads newline-separated dictionaries, keeps the words of one length, and
//! turns them into a [`WordPool`].

use crate::core::{SolverError, Word, WordPool};
use rustc_hash::FxHashSet;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a dictionary
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{path} contains no {len}-letter words")]
    NoWords { path: PathBuf, len: usize },

    #[error(transparent)]
    Pool(#[from] SolverError),
}

/// Keep the valid words of length `len`, first occurrence wins
///
/// Blank lines, words of other lengths and entries with non-letters are
/// skipped. Words are lowercased before deduplication.
///
/// # Examples
/// ```
/// use wordle_entropy::wordlists::loader::words_of_length;
///
/// let words = words_of_length(["crane", "cat", "Slate", "slate", "cr4ne"], 5);
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["crane", "slate"]);
/// ```
pub fn words_of_length<'s>(lines: impl IntoIterator<Item = &'s str>, len: usize) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    lines
        .into_iter()
        .map(str::trim)
        .filter(|line| line.len() == len)
        .filter_map(|line| Word::new(line).ok())
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

/// Load the `len`-letter words of a dictionary file into a pool
///
/// # Errors
/// - `LoadError::Io` if the file cannot be read
/// - `LoadError::NoWords` if no word of that length survives filtering
///
/// # Examples
/// ```no_run
/// use wordle_entropy::wordlists::loader::load_word_pool;
///
/// let pool = load_word_pool("dictionary/words_alpha.txt", 5).unwrap();
/// println!("Loaded {} words", pool.len());
/// ```
pub fn load_word_pool<P: AsRef<Path>>(path: P, len: usize) -> Result<WordPool, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_of_length(content.lines(), len);
    if words.is_empty() {
        return Err(LoadError::NoWords {
            path: path.to_path_buf(),
            len,
        });
    }

    log::info!("loaded {} {len}-letter words from {}", words.len(), path.display());
    Ok(WordPool::new(words)?)
}

/// Write a pool one word per line
///
/// The output loads back into the same pool with [`load_word_pool`].
///
/// # Errors
/// Returns an I/O error if the file cannot be created or written.
pub fn save_word_pool<P: AsRef<Path>>(path: P, pool: &WordPool) -> io::Result<()> {
    let mut out = BufWriter::new(fs::File::create(path)?);
    for word in pool.words() {
        writeln!(out, "{word}")?;
    }
    out.flush()
}
