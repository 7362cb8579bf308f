//! Batch evaluation
//!
//! Runs one independent simulation per target word in parallel and collects
//! a step count (or failure marker) for each.

use super::{ScoringStrategy, Simulator};
use crate::core::{SolverError, Word};
use indicatif::ProgressBar;
use log::{info, warn};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// What to do when a single simulation fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Record the failure for that word and keep going
    #[default]
    Continue,
    /// Abort the batch with the first error
    FailFast,
}

/// Result for one target word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryResult {
    /// Solved in this many attempts
    Solved(usize),
    /// Not solved within the attempt budget
    NotSolved,
    /// The simulation hit an error
    Failed(SolverError),
}

impl EntryResult {
    /// Step count, `None` unless solved
    #[must_use]
    pub const fn steps(&self) -> Option<usize> {
        match self {
            Self::Solved(steps) => Some(*steps),
            Self::NotSolved | Self::Failed(_) => None,
        }
    }
}

/// One row of a batch report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    pub word: Word,
    pub result: EntryResult,
}

/// Results of a batch, one entry per target in target order
#[derive(Debug, Clone)]
pub struct BatchReport {
    entries: Vec<BatchEntry>,
    index: FxHashMap<Word, usize>,
    elapsed: Duration,
}

impl BatchReport {
    fn new(entries: Vec<BatchEntry>, elapsed: Duration) -> Self {
        let mut index = FxHashMap::default();
        for (i, entry) in entries.iter().enumerate() {
            index.entry(entry.word.clone()).or_insert(i);
        }
        Self {
            entries,
            index,
            elapsed,
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[BatchEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Wall-clock time of the whole batch
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Result for `word`, if it was a target
    #[must_use]
    pub fn get(&self, word: &Word) -> Option<&EntryResult> {
        self.index.get(word).map(|&i| &self.entries[i].result)
    }

    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.count(|r| matches!(r, EntryResult::Solved(_)))
    }

    #[must_use]
    pub fn not_solved_count(&self) -> usize {
        self.count(|r| matches!(r, EntryResult::NotSolved))
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.count(|r| matches!(r, EntryResult::Failed(_)))
    }

    fn count(&self, predicate: impl Fn(&EntryResult) -> bool) -> usize {
        self.entries.iter().filter(|e| predicate(&e.result)).count()
    }

    /// Number of solved words per step count
    #[must_use]
    pub fn distribution(&self) -> BTreeMap<usize, usize> {
        let mut distribution = BTreeMap::new();
        for steps in self.entries.iter().filter_map(|e| e.result.steps()) {
            *distribution.entry(steps).or_insert(0) += 1;
        }
        distribution
    }

    /// `(word, steps)` pairs for words that did not fail
    pub fn steps(&self) -> impl Iterator<Item = (&Word, Option<usize>)> {
        self.entries.iter().filter_map(|e| match e.result {
            EntryResult::Solved(steps) => Some((&e.word, Some(steps))),
            EntryResult::NotSolved => Some((&e.word, None)),
            EntryResult::Failed(_) => None,
        })
    }
}

/// Simulate every word in `targets`
///
/// Each simulation is independent and reads only the shared, immutable pool.
/// The report lists targets in input order regardless of completion order.
///
/// # Errors
/// Only with [`FailurePolicy::FailFast`]: the first simulation error.
pub fn evaluate_all<S: ScoringStrategy>(
    simulator: &Simulator<'_, S>,
    targets: &[Word],
    policy: FailurePolicy,
    progress: Option<&ProgressBar>,
) -> Result<BatchReport, SolverError> {
    info!(
        "evaluating {} targets with {} (opening {}, max {} attempts)",
        targets.len(),
        simulator.strategy().name(),
        simulator.opening(),
        simulator.max_attempts()
    );
    let start = Instant::now();

    let simulate = |target: &Word| -> Result<BatchEntry, SolverError> {
        let outcome = simulator.run(target).map(|game| game.outcome);
        if let Some(pb) = progress {
            pb.inc(1);
        }

        let result = match outcome {
            Ok(outcome) => outcome
                .steps()
                .map_or(EntryResult::NotSolved, EntryResult::Solved),
            Err(e) if policy == FailurePolicy::FailFast => return Err(e),
            Err(e) => {
                warn!("{target}: simulation failed: {e}");
                EntryResult::Failed(e)
            }
        };

        Ok(BatchEntry {
            word: target.clone(),
            result,
        })
    };

    let entries = targets
        .par_iter()
        .map(simulate)
        .collect::<Result<Vec<_>, _>>()?;

    let report = BatchReport::new(entries, start.elapsed());
    info!(
        "batch finished in {:.2}s: {} solved, {} not solved, {} failed",
        report.elapsed().as_secs_f64(),
        report.solved_count(),
        report.not_solved_count(),
        report.failed_count()
    );
    Ok(report)
}

/// Simulate every word of the simulator's own pool
///
/// # Errors
/// See [`evaluate_all`].
pub fn evaluate_pool<S: ScoringStrategy>(
    simulator: &Simulator<'_, S>,
    policy: FailurePolicy,
    progress: Option<&ProgressBar>,
) -> Result<BatchReport, SolverError> {
    evaluate_all(simulator, simulator.pool().words(), policy, progress)
}
