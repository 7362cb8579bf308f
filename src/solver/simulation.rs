//! Simulation driver
//!
//! Plays one game against a known target: guess, score, filter, repeat,
//! until the target is guessed or the attempt budget runs out.

use super::{ScoringStrategy, select_guess};
use crate::core::{Feedback, SolverError, Word, WordPool, filter_candidates};
use log::debug;

/// Configuration for a [`Simulator`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// Attempts allowed before a game counts as unsolved
    pub max_attempts: usize,
    /// Opening guess override; `None` uses the strategy's default
    pub opening: Option<String>,
}

impl SimulatorConfig {
    pub const DEFAULT_MAX_ATTEMPTS: usize = 20;

    #[must_use]
    pub const fn new(max_attempts: usize) -> Self {
        Self {
            max_attempts,
            opening: None,
        }
    }

    #[must_use]
    pub fn with_opening(mut self, opening: impl Into<String>) -> Self {
        self.opening = Some(opening.into());
        self
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ATTEMPTS)
    }
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Target guessed on attempt `attempts` (1-based)
    Solved { attempts: usize },
    /// Attempt budget ran out
    Exhausted,
}

impl Outcome {
    /// Number of attempts used, or `None` when the game was not solved
    #[must_use]
    pub const fn steps(self) -> Option<usize> {
        match self {
            Self::Solved { attempts } => Some(attempts),
            Self::Exhausted => None,
        }
    }

    #[must_use]
    pub const fn is_solved(self) -> bool {
        matches!(self, Self::Solved { .. })
    }
}

/// One guess of a simulated game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub attempt: usize,
    pub guess: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Full record of one simulated game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simulation {
    pub target: Word,
    pub steps: Vec<Step>,
    pub outcome: Outcome,
}

/// State of a game between attempts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameState<'a> {
    Playing {
        attempt: usize,
        candidates: Vec<&'a Word>,
    },
    Solved {
        attempts: usize,
    },
    Exhausted,
}

/// Drives games over one word pool with one scoring strategy
///
/// The pool doubles as guess universe and initial candidate pool. The
/// strategy is fixed for the simulator's lifetime, and the opening guess is
/// resolved once at construction.
pub struct Simulator<'a, S: ScoringStrategy> {
    pool: &'a WordPool,
    strategy: S,
    opening: Word,
    max_attempts: usize,
}

impl<'a, S: ScoringStrategy> Simulator<'a, S> {
    /// Create a simulator
    ///
    /// The opening guess is, in order of preference: the configured override,
    /// the strategy's default when it has the pool's word length, or the best
    /// guess over the full pool computed once here.
    ///
    /// # Errors
    /// - `InvalidWord` or `LengthMismatch` for a bad opening override
    /// - errors from the selector when the opening has to be computed
    pub fn new(pool: &'a WordPool, strategy: S, config: SimulatorConfig) -> Result<Self, SolverError> {
        let opening = match config.opening {
            Some(text) => {
                let word = Word::new(text.trim())?;
                SolverError::check_length(pool.word_len(), word.len())?;
                word
            }
            None => Self::default_opening(pool, &strategy)?,
        };

        debug!(
            "simulator ready: {} words, strategy {}, opening {opening}, max {} attempts",
            pool.len(),
            strategy.name(),
            config.max_attempts
        );

        Ok(Self {
            pool,
            strategy,
            opening,
            max_attempts: config.max_attempts,
        })
    }

    fn default_opening(pool: &WordPool, strategy: &S) -> Result<Word, SolverError> {
        let preset = Word::new(strategy.default_opening())?;
        if preset.len() == pool.word_len() {
            return Ok(preset);
        }

        log::info!(
            "no preset {}-letter opening for {}; computing one over {} words",
            pool.word_len(),
            strategy.name(),
            pool.len()
        );
        select_guess(pool.words(), &pool.candidates(), strategy).cloned()
    }

    #[must_use]
    pub const fn pool(&self) -> &'a WordPool {
        self.pool
    }

    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    #[must_use]
    pub const fn opening(&self) -> &Word {
        &self.opening
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// The guess this simulator would play on `attempt` with `candidates` left
    ///
    /// A single remaining candidate is always played directly; otherwise the
    /// first attempt uses the opening and later ones the selector.
    ///
    /// This takes precedence over the opening: a one-word pool plays its only
    /// word on attempt 1 rather than the fixed opening guess.
    ///
    /// # Errors
    /// `EmptyCandidatePool` if `candidates` is empty, or selector errors.
    pub fn suggest(&self, candidates: &[&'a Word], attempt: usize) -> Result<&Word, SolverError> {
        match candidates {
            [] => Err(SolverError::EmptyCandidatePool),
            [only] => Ok(*only),
            _ if attempt <= 1 => Ok(&self.opening),
            _ => select_guess(self.pool.words(), candidates, &self.strategy),
        }
    }

    /// Initial state: attempt 1 with the full pool as candidates
    #[must_use]
    pub fn start(&self) -> GameState<'a> {
        GameState::Playing {
            attempt: 1,
            candidates: self.pool.candidates(),
        }
    }

    /// Play one attempt against `target`, appending it to `steps`
    ///
    /// Terminal states are returned unchanged.
    ///
    /// # Errors
    /// - `EmptyCandidatePool` if no candidate is consistent with the feedback
    /// - `LengthMismatch` if the target does not have the pool's word length
    pub fn advance(
        &self,
        state: GameState<'a>,
        target: &Word,
        steps: &mut Vec<Step>,
    ) -> Result<GameState<'a>, SolverError> {
        let (attempt, candidates) = match state {
            GameState::Playing {
                attempt,
                candidates,
            } => (attempt, candidates),
            terminal => return Ok(terminal),
        };

        if attempt > self.max_attempts {
            return Ok(GameState::Exhausted);
        }

        let guess = self.suggest(&candidates, attempt)?.clone();
        let feedback = Feedback::score(&guess, target)?;
        let candidates_before = candidates.len();

        if guess == *target {
            steps.push(Step {
                attempt,
                guess,
                feedback,
                candidates_before,
                candidates_after: 1,
            });
            return Ok(GameState::Solved { attempts: attempt });
        }

        let remaining = filter_candidates(&candidates, &guess, feedback)?;
        if remaining.is_empty() {
            return Err(SolverError::EmptyCandidatePool);
        }

        debug!(
            "{target}: attempt {attempt} guessed {guess} -> {feedback}, {candidates_before} -> {} candidates",
            remaining.len()
        );

        steps.push(Step {
            attempt,
            guess,
            feedback,
            candidates_before,
            candidates_after: remaining.len(),
        });

        Ok(GameState::Playing {
            attempt: attempt + 1,
            candidates: remaining,
        })
    }

    /// Play a full game against `target`
    ///
    /// # Errors
    /// - `LengthMismatch` if the target does not have the pool's word length
    /// - `EmptyCandidatePool` if the candidates run out before the target is
    ///   found, which happens when the target is not in the pool
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy::core::{Word, WordPool};
    /// use wordle_entropy::solver::{Outcome, Shannon, Simulator, SimulatorConfig};
    ///
    /// let pool = WordPool::from_strs(&["abcde", "abcdf", "zzzzz"]).unwrap();
    /// let config = SimulatorConfig::default().with_opening("abcde");
    /// let simulator = Simulator::new(&pool, Shannon, config).unwrap();
    ///
    /// let game = simulator.run(&Word::new("abcde").unwrap()).unwrap();
    /// assert_eq!(game.outcome, Outcome::Solved { attempts: 1 });
    /// ```
    pub fn run(&self, target: &Word) -> Result<Simulation, SolverError> {
        SolverError::check_length(self.pool.word_len(), target.len())?;

        let mut steps = Vec::new();
        let mut state = self.start();

        let outcome = loop {
            state = self.advance(state, target, &mut steps)?;
            match state {
                GameState::Solved { attempts } => break Outcome::Solved { attempts },
                GameState::Exhausted => break Outcome::Exhausted,
                GameState::Playing { .. } => {}
            }
        };

        Ok(Simulation {
            target: target.clone(),
            steps,
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{Shannon, Strategy, WorstCase};

    fn pool(words: &[&str]) -> WordPool {
        WordPool::from_strs(words).unwrap()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn solves_on_first_attempt_when_opening_is_target() {
        let pool = pool(&["abcde", "abcdf", "zzzzz"]);
        let simulator =
            Simulator::new(&pool, Shannon, SimulatorConfig::default().with_opening("abcde")).unwrap();

        let game = simulator.run(&word("abcde")).unwrap();

        assert_eq!(game.outcome, Outcome::Solved { attempts: 1 });
        assert_eq!(game.steps.len(), 1);
        assert!(game.steps[0].feedback.is_solved());
    }

    #[test]
    fn opening_without_overlap_removes_only_itself() {
        let pool = pool(&["abcde", "abcdf", "zzzzz"]);
        let simulator =
            Simulator::new(&pool, Shannon, SimulatorConfig::default().with_opening("zzzzz")).unwrap();

        let game = simulator.run(&word("abcde")).unwrap();

        let first = &game.steps[0];
        assert_eq!(first.guess.text(), "zzzzz");
        assert_eq!(first.feedback.to_string(), "-----");
        assert_eq!(first.candidates_before, 3);
        assert_eq!(first.candidates_after, 2);
        assert!(game.outcome.is_solved());
    }

    #[test]
    fn default_openings_per_strategy() {
        let pool = pool(&["tares", "raise", "crane"]);
        let shannon = Simulator::new(&pool, Shannon, SimulatorConfig::default()).unwrap();
        let worst = Simulator::new(&pool, WorstCase, SimulatorConfig::default()).unwrap();
        assert_eq!(shannon.opening().text(), "tares");
        assert_eq!(worst.opening().text(), "raise");
    }

    #[test]
    fn opening_is_computed_for_other_lengths() {
        let pool = pool(&["cat", "cot", "dog", "dig"]);
        let simulator = Simulator::new(&pool, Strategy::Shannon, SimulatorConfig::default()).unwrap();
        let expected = select_guess(pool.words(), &pool.candidates(), &Shannon).unwrap();
        assert_eq!(simulator.opening(), expected);
    }

    #[test]
    fn opening_override_is_validated() {
        let pool = pool(&["crane", "slate"]);
        assert!(matches!(
            Simulator::new(&pool, Shannon, SimulatorConfig::default().with_opening("cat")),
            Err(SolverError::LengthMismatch { expected: 5, found: 3 })
        ));
        assert!(matches!(
            Simulator::new(&pool, Shannon, SimulatorConfig::default().with_opening("cr4ne")),
            Err(SolverError::InvalidWord(_))
        ));
    }

    #[test]
    fn every_pool_word_is_solved() {
        let words = ["crane", "slate", "irate", "crate", "grate", "plate", "trace", "react"];
        let pool = pool(&words);
        for strategy in [Strategy::Shannon, Strategy::WorstCase] {
            let simulator = Simulator::new(&pool, strategy, SimulatorConfig::default()).unwrap();
            for target in pool.words() {
                let game = simulator.run(target).unwrap();
                let attempts = game.outcome.steps().unwrap();
                assert!((1..=20).contains(&attempts));
                assert_eq!(game.steps.len(), attempts);
                assert_eq!(&game.steps.last().unwrap().guess, target);
            }
        }
    }

    #[test]
    fn candidate_counts_never_grow() {
        let pool = pool(&["crane", "slate", "irate", "crate", "grate", "plate", "trace"]);
        let simulator = Simulator::new(&pool, WorstCase, SimulatorConfig::default()).unwrap();
        let game = simulator.run(&word("plate")).unwrap();

        for step in &game.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
        for pair in game.steps.windows(2) {
            assert_eq!(pair[0].candidates_after, pair[1].candidates_before);
        }
    }

    #[test]
    fn exhausted_is_an_outcome_not_an_error() {
        let pool = pool(&["crane", "slate", "irate", "crate"]);
        let config = SimulatorConfig::new(1).with_opening("zzzzz");
        let simulator = Simulator::new(&pool, Shannon, config).unwrap();

        let game = simulator.run(&word("irate")).unwrap();

        assert_eq!(game.outcome, Outcome::Exhausted);
        assert_eq!(game.outcome.steps(), None);
        assert_eq!(game.steps.len(), 1);
    }

    #[test]
    fn zero_attempt_budget_exhausts_immediately() {
        let pool = pool(&["crane", "slate"]);
        let simulator = Simulator::new(&pool, Shannon, SimulatorConfig::new(0)).unwrap();
        let game = simulator.run(&word("crane")).unwrap();
        assert_eq!(game.outcome, Outcome::Exhausted);
        assert!(game.steps.is_empty());
    }

    #[test]
    fn target_outside_pool_fails_loudly() {
        let pool = pool(&["crane", "slate", "irate"]);
        let simulator =
            Simulator::new(&pool, Shannon, SimulatorConfig::default().with_opening("zzzzz")).unwrap();

        assert_eq!(
            simulator.run(&word("bbbbb")),
            Err(SolverError::EmptyCandidatePool)
        );
    }

    #[test]
    fn target_length_is_checked() {
        let pool = pool(&["crane", "slate"]);
        let simulator = Simulator::new(&pool, Shannon, SimulatorConfig::default()).unwrap();
        assert_eq!(
            simulator.run(&word("cat")),
            Err(SolverError::LengthMismatch {
                expected: 5,
                found: 3
            })
        );
    }

    #[test]
    fn single_candidate_is_played_before_opening() {
        let pool = pool(&["abcde"]);
        let simulator = Simulator::new(&pool, Shannon, SimulatorConfig::default()).unwrap();
        assert_eq!(simulator.opening().text(), "tares");
        assert_eq!(simulator.suggest(&pool.candidates(), 1).unwrap().text(), "abcde");

        let game = simulator.run(&word("abcde")).unwrap();
        assert_eq!(game.outcome, Outcome::Solved { attempts: 1 });
        assert_eq!(game.steps[0].guess.text(), "abcde");
    }

    #[test]
    fn advance_leaves_terminal_states_alone() {
        let pool = pool(&["crane", "slate"]);
        let simulator = Simulator::new(&pool, Shannon, SimulatorConfig::default()).unwrap();
        let mut steps = Vec::new();

        let solved = GameState::Solved { attempts: 2 };
        assert_eq!(
            simulator.advance(solved.clone(), &word("crane"), &mut steps),
            Ok(solved)
        );
        assert_eq!(
            simulator.advance(GameState::Exhausted, &word("crane"), &mut steps),
            Ok(GameState::Exhausted)
        );
        assert!(steps.is_empty());
    }
}
