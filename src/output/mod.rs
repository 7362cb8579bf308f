//! Terminal output formatting
//!
//! Display utilities for CLI results, plus the step-file format.

pub mod display;
pub mod formatters;
pub mod steps_file;

pub use display::{print_failures, print_simulation, print_statistics, print_word_list};
pub use steps_file::{parse_steps, read_steps, write_steps};
