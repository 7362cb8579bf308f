//! Word solving command
//!
//! Simulates a game against one target word and returns the full trace.

use crate::core::{SolverError, Word, WordPool};
use crate::solver::{ScoringStrategy, Simulation, Simulator};
use rand::prelude::IndexedRandom;

/// Simulate a game against `target`, which must be a pool word
///
/// # Errors
/// - `NotInGuessUniverse` if `target` is not in the simulator's pool
/// - any simulation error
pub fn solve_word<S: ScoringStrategy>(
    simulator: &Simulator<'_, S>,
    target: &str,
) -> Result<Simulation, SolverError> {
    let target = simulator.pool().require(target)?;
    simulator.run(target)
}

/// Pick a random target from the pool
#[must_use]
pub fn random_target(pool: &WordPool) -> Option<&Word> {
    pool.words().choose(&mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{Outcome, Shannon, SimulatorConfig, WorstCase};

    fn pool() -> WordPool {
        WordPool::from_strs(&["crane", "slate", "irate", "crate", "grate", "plate", "trace"]).unwrap()
    }

    #[test]
    fn solve_word_succeeds() {
        let pool = pool();
        let simulator = Simulator::new(&pool, Shannon, SimulatorConfig::default()).unwrap();

        let game = solve_word(&simulator, "GRATE").unwrap();

        assert!(game.outcome.is_solved());
        assert_eq!(game.target.text(), "grate");
        assert_eq!(game.steps.last().unwrap().guess.text(), "grate");
    }

    #[test]
    fn solve_records_history() {
        let pool = pool();
        let simulator = Simulator::new(&pool, WorstCase, SimulatorConfig::default()).unwrap();

        let game = solve_word(&simulator, "plate").unwrap();

        assert_eq!(game.steps[0].guess.text(), "raise");
        assert_eq!(game.steps[0].candidates_before, pool.len());
        for step in &game.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
    }

    #[test]
    fn solve_unknown_target_returns_error() {
        let pool = pool();
        let simulator = Simulator::new(&pool, Shannon, SimulatorConfig::default()).unwrap();

        assert_eq!(
            solve_word(&simulator, "zzzzz").unwrap_err(),
            SolverError::NotInGuessUniverse("zzzzz".to_string())
        );
    }

    #[test]
    fn solve_respects_attempt_limit() {
        let pool = pool();
        let config = SimulatorConfig::new(1).with_opening("crane");
        let simulator = Simulator::new(&pool, Shannon, config).unwrap();

        let game = solve_word(&simulator, "plate").unwrap();

        assert_eq!(game.outcome, Outcome::Exhausted);
        assert_eq!(game.steps.len(), 1);
    }

    #[test]
    fn random_target_is_from_pool() {
        let pool = pool();
        let target = random_target(&pool).unwrap();
        assert!(pool.contains(target));
    }
}
