//! Guess selection
//!
//! Scans a guess universe and picks the guess whose feedback distribution
//! over the current candidates scores best under a strategy.

use super::{FeedbackDistribution, ScoringStrategy};
use crate::core::{SolverError, Word};
use rayon::prelude::*;
use std::cmp::Ordering;

/// Keep `a` unless `b` scores strictly higher or ties at an earlier index
///
/// Reducing with this in any grouping yields the first maximum in universe
/// order, the same answer as a sequential strict `>` scan.
#[allow(clippy::float_cmp)]
fn better(a: (usize, f64), b: (usize, f64)) -> (usize, f64) {
    if b.1 > a.1 || (b.1 == a.1 && b.0 < a.0) {
        b
    } else {
        a
    }
}

/// Select the best guess from `universe` given the current `candidates`
///
/// - One remaining candidate is returned directly without scoring.
/// - Ties go to the earliest word in `universe`.
///
/// The universe is scored in parallel; the result does not depend on thread
/// scheduling.
///
/// # Errors
/// - `EmptyCandidatePool` if `candidates` is empty
/// - `EmptyGuessUniverse` if there is more than one candidate and `universe` is empty
/// - `LengthMismatch` if universe and candidate words differ in length
///
/// # Examples
/// ```
/// use wordle_entropy::core::WordPool;
/// use wordle_entropy::solver::{select_guess, Shannon};
///
/// let pool = WordPool::from_strs(&["aaaaa", "crane", "slate", "irate"]).unwrap();
/// let candidates: Vec<_> = pool.words()[1..].iter().collect();
///
/// let best = select_guess(pool.words(), &candidates, &Shannon).unwrap();
/// assert_ne!(best.text(), "aaaaa"); // AAAAA splits nothing
/// ```
pub fn select_guess<'a, S>(
    universe: &'a [Word],
    candidates: &[&'a Word],
    strategy: &S,
) -> Result<&'a Word, SolverError>
where
    S: ScoringStrategy + ?Sized,
{
    match candidates {
        [] => Err(SolverError::EmptyCandidatePool),
        [only] => Ok(*only),
        _ => {
            let (index, score) = universe
                .par_iter()
                .enumerate()
                .map(|(i, guess)| -> Result<(usize, f64), SolverError> {
                    let distribution = FeedbackDistribution::build(candidates, guess)?;
                    Ok((i, strategy.score(&distribution)))
                })
                .try_reduce_with(|a, b| Ok(better(a, b)))
                .ok_or(SolverError::EmptyGuessUniverse)??;

            log::trace!(
                "selected {} ({} = {score:.4}) over {} candidates",
                universe[index],
                strategy.name(),
                candidates.len()
            );
            Ok(&universe[index])
        }
    }
}

/// Score every guess in `universe` and return the best `limit`, best first
///
/// Ties keep universe order, so the first entry always agrees with
/// [`select_guess`] when more than one candidate remains.
///
/// # Errors
/// - `EmptyCandidatePool` if `candidates` is empty
/// - `LengthMismatch` if universe and candidate words differ in length
pub fn rank_guesses<'a, S>(
    universe: &'a [Word],
    candidates: &[&Word],
    strategy: &S,
    limit: usize,
) -> Result<Vec<(&'a Word, f64)>, SolverError>
where
    S: ScoringStrategy + ?Sized,
{
    if candidates.is_empty() {
        return Err(SolverError::EmptyCandidatePool);
    }

    let mut scored = universe
        .par_iter()
        .map(|guess| -> Result<(&'a Word, f64), SolverError> {
            let distribution = FeedbackDistribution::build(candidates, guess)?;
            Ok((guess, strategy.score(&distribution)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    // Stable sort keeps universe order among equal scores
    scored.sort_by(|(_, s1), (_, s2)| s2.partial_cmp(s1).unwrap_or(Ordering::Equal));
    scored.truncate(limit);
    Ok(scored)
}
