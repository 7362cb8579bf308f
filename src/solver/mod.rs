//! Solving engine
//!
//! Feedback distributions, scoring strategies, guess selection, the
//! single-game simulator and the parallel batch evaluator.

mod batch;
mod distribution;
mod selector;
mod simulation;
mod strategy;

pub use batch::{BatchEntry, BatchReport, EntryResult, FailurePolicy, evaluate_all, evaluate_pool};
pub use distribution::FeedbackDistribution;
pub use selector::{rank_guesses, select_guess};
pub use simulation::{GameState, Outcome, Simulation, Simulator, SimulatorConfig, Step};
pub use strategy::{ScoringStrategy, Shannon, Strategy, WorstCase, shannon_entropy, worst_case_score};
