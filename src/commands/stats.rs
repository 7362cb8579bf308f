//! Step statistics
//!
//! Descriptive statistics over per-word step counts, from a batch report or
//! a step file.

use std::collections::BTreeMap;

/// Summary of the solved step counts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub median: f64,
    /// Population standard deviation
    pub std_dev: f64,
    pub min: usize,
    pub max: usize,
    pub p25: f64,
    pub p75: f64,
}

/// Statistics over a set of words
#[derive(Debug, Clone, PartialEq)]
pub struct StepStatistics {
    pub total: usize,
    pub solved: usize,
    pub not_solved: usize,
    /// `None` when no word was solved
    pub summary: Option<Summary>,
    /// Solved words per step count
    pub distribution: BTreeMap<usize, usize>,
}

impl StepStatistics {
    /// Compute statistics from per-word step counts (`None` = not solved)
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy::commands::StepStatistics;
    ///
    /// let stats = StepStatistics::from_steps([Some(2), Some(3), Some(4), None]);
    /// assert_eq!(stats.total, 4);
    /// assert_eq!(stats.not_solved, 1);
    /// let summary = stats.summary.unwrap();
    /// assert!((summary.mean - 3.0).abs() < 1e-12);
    /// assert!((summary.median - 3.0).abs() < 1e-12);
    /// ```
    pub fn from_steps(steps: impl IntoIterator<Item = Option<usize>>) -> Self {
        let mut total = 0;
        let mut solved: Vec<usize> = Vec::new();
        for step in steps {
            total += 1;
            if let Some(step) = step {
                solved.push(step);
            }
        }
        solved.sort_unstable();

        let mut distribution = BTreeMap::new();
        for &step in &solved {
            *distribution.entry(step).or_insert(0) += 1;
        }

        Self {
            total,
            solved: solved.len(),
            not_solved: total - solved.len(),
            summary: summarize(&solved),
            distribution,
        }
    }

    /// Share of words solved, in percent
    #[must_use]
    pub fn solve_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.solved as f64 / self.total as f64 * 100.0
    }
}

fn summarize(sorted: &[usize]) -> Option<Summary> {
    let (&min, &max) = (sorted.first()?, sorted.last()?);
    let n = sorted.len() as f64;

    let mean = sorted.iter().sum::<usize>() as f64 / n;
    let variance = sorted
        .iter()
        .map(|&s| {
            let d = s as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n;

    Some(Summary {
        mean,
        median: percentile(sorted, 0.5),
        std_dev: variance.sqrt(),
        min,
        max,
        p25: percentile(sorted, 0.25),
        p75: percentile(sorted, 0.75),
    })
}

/// Linear-interpolated percentile of sorted, non-empty data, `q` in `[0, 1]`
fn percentile(sorted: &[usize], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let weight = position - lower as f64;
    sorted[lower] as f64 + (sorted[upper] as f64 - sorted[lower] as f64) * weight
}

/// Words that needed exactly `steps` attempts, in input order
pub fn words_with_steps<'a, W: AsRef<str> + 'a>(
    entries: impl IntoIterator<Item = &'a (W, Option<usize>)>,
    steps: usize,
) -> Vec<&'a str> {
    entries
        .into_iter()
        .filter(|(_, s)| *s == Some(steps))
        .map(|(word, _)| word.as_ref())
        .collect()
}
