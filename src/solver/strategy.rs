//! Guess scoring strategies
//!
//! Defines the `ScoringStrategy` trait and the two concrete reductions of a
//! [`FeedbackDistribution`] to a scalar. Higher scores are better for both.

use super::FeedbackDistribution;
use clap::ValueEnum;
use std::fmt;

/// Reduces a feedback distribution to a single "informativeness" score
///
/// Scores are only comparable within one strategy. A simulator fixes its
/// strategy as a type parameter, so one run never mixes them.
pub trait ScoringStrategy: Send + Sync {
    /// Score a distribution; higher is better
    fn score(&self, distribution: &FeedbackDistribution) -> f64;

    /// Short human-readable name
    fn name(&self) -> &'static str;

    /// Precomputed opening guess for five-letter English pools
    fn default_opening(&self) -> &'static str;
}

/// Shannon entropy of a distribution, in nats
///
/// H = -Σ p_k · ln(p_k)
///
/// # Properties
/// - 0.0 for a single outcome group
/// - Maximised by many evenly sized groups, at most ln(group count)
///
/// # Examples
/// ```
/// use wordle_entropy::core::Feedback;
/// use wordle_entropy::solver::{FeedbackDistribution, shannon_entropy};
///
/// let mut uniform = FeedbackDistribution::default();
/// for text in ["G----", "-G---", "--G--", "---G-"] {
///     uniform.record(Feedback::parse(text, 5).unwrap());
/// }
/// assert!((shannon_entropy(&uniform) - 4f64.ln()).abs() < 1e-12);
/// ```
#[must_use]
pub fn shannon_entropy(distribution: &FeedbackDistribution) -> f64 {
    let total = distribution.total() as f64;
    if distribution.is_empty() {
        return 0.0;
    }

    // Summed in sorted order so equal partitions score bit-identically
    distribution
        .group_sizes()
        .into_iter()
        .map(|count| {
            let p = count as f64 / total;
            -p * p.ln()
        })
        .sum()
}

/// Negated share of the largest outcome group
///
/// -max_k(count_k) / Σ count
///
/// Ranges over `[-1, 0)`; an empty distribution scores -1.0.
#[must_use]
pub fn worst_case_score(distribution: &FeedbackDistribution) -> f64 {
    if distribution.is_empty() {
        return -1.0;
    }
    -(distribution.largest_group() as f64) / distribution.total() as f64
}

/// Expected information gain strategy
///
/// Rewards guesses that split the candidates into many evenly sized groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Shannon;

impl ScoringStrategy for Shannon {
    fn score(&self, distribution: &FeedbackDistribution) -> f64 {
        shannon_entropy(distribution)
    }

    fn name(&self) -> &'static str {
        "shannon"
    }

    fn default_opening(&self) -> &'static str {
        "tares"
    }
}

/// Minimax proxy strategy
///
/// Rewards guesses whose largest surviving group is smallest. Cheaper than
/// Shannon (no logarithm) and more conservative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorstCase;

impl ScoringStrategy for WorstCase {
    fn score(&self, distribution: &FeedbackDistribution) -> f64 {
        worst_case_score(distribution)
    }

    fn name(&self) -> &'static str {
        "worst-case"
    }

    fn default_opening(&self) -> &'static str {
        "raise"
    }
}

/// Runtime-selectable strategy
///
/// Dispatches statically to [`Shannon`] or [`WorstCase`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Maximise Shannon entropy of the feedback distribution
    #[default]
    #[value(alias = "entropy")]
    Shannon,
    /// Minimise the largest surviving candidate group
    #[value(alias = "inf-entropy", alias = "minimax")]
    WorstCase,
}

impl ScoringStrategy for Strategy {
    fn score(&self, distribution: &FeedbackDistribution) -> f64 {
        match self {
            Self::Shannon => Shannon.score(distribution),
            Self::WorstCase => WorstCase.score(distribution),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Shannon => Shannon.name(),
            Self::WorstCase => WorstCase.name(),
        }
    }

    fn default_opening(&self) -> &'static str {
        match self {
            Self::Shannon => Shannon.default_opening(),
            Self::WorstCase => WorstCase.default_opening(),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
