//! Command implementations

pub mod coach;
pub mod evaluate;
pub mod solve;
pub mod stats;

pub use coach::{CoachExit, run_coach};
pub use evaluate::{EvaluateConfig, Evaluation, run_evaluate};
pub use solve::{random_target, solve_word};
pub use stats::{StepStatistics, Summary, words_with_steps};
