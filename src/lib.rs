//! Wordle Entropy
//!
//! A Wordle-family solver and simulator. Guesses are chosen by scoring the
//! feedback distribution they induce over the remaining candidates, either by
//! Shannon entropy or by the size of the largest surviving group.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_entropy::core::{Feedback, Word, WordPool};
//! use wordle_entropy::solver::{Shannon, Simulator, SimulatorConfig};
//!
//! let guess = Word::new("crane").unwrap();
//! let target = Word::new("slate").unwrap();
//! assert_eq!(Feedback::score(&guess, &target).unwrap().to_string(), "--G-G");
//!
//! let pool = WordPool::from_strs(&["crane", "slate", "irate", "crate"]).unwrap();
//! let simulator = Simulator::new(&pool, Shannon, SimulatorConfig::default()).unwrap();
//! let game = simulator.run(&target).unwrap();
//! assert!(game.outcome.is_solved());
//! ```

// Core domain types
pub mod core;

// Scoring, selection and simulation
pub mod solver;

// Dictionary loading
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
