//! Evaluate every word in the pool
//!
//! Runs the solver against each pool word as the target and gathers per-word
//! step counts plus summary statistics.

use super::StepStatistics;
use crate::core::SolverError;
use crate::solver::{BatchReport, FailurePolicy, ScoringStrategy, Simulator, evaluate_all};
use indicatif::{ProgressBar, ProgressStyle};

/// Options for a batch evaluation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvaluateConfig {
    /// Only evaluate the first `limit` pool words
    pub limit: Option<usize>,
    pub policy: FailurePolicy,
    pub show_progress: bool,
}

/// Report plus the statistics derived from it
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub report: BatchReport,
    pub statistics: StepStatistics,
}

/// Evaluate the simulator against the first `limit` words of its pool
///
/// The guess universe and initial candidates stay the full pool even when
/// only a prefix is evaluated.
///
/// # Errors
/// The first simulation error under [`FailurePolicy::FailFast`].
pub fn run_evaluate<S: ScoringStrategy>(
    simulator: &Simulator<'_, S>,
    config: EvaluateConfig,
) -> Result<Evaluation, SolverError> {
    let words = simulator.pool().words();
    let targets = &words[..config.limit.unwrap_or(words.len()).min(words.len())];

    let pb = if config.show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {elapsed_precise} eta {eta}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let report = evaluate_all(simulator, targets, config.policy, Some(&pb))?;
    pb.finish_and_clear();

    let statistics = StepStatistics::from_steps(report.entries().iter().map(|e| e.result.steps()));
    Ok(Evaluation { report, statistics })
}
