//! Interactive coach
//!
//! Suggests a guess, reads the word actually played and the feedback it got,
//! narrows the candidates and repeats. Reads from any `BufRead` and writes to
//! any `Write` so sessions can be scripted.

use crate::core::{Feedback, SolverError, Word, WordPool, filter_candidates};
use crate::output::formatters::{create_progress_bar, guesses_label};
use crate::solver::{FeedbackDistribution, ScoringStrategy, Simulator, rank_guesses, shannon_entropy};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Candidates listed in full at or below this count
const SHOW_CANDIDATES: usize = 10;
/// Alternatives shown next to the suggestion
const SHOW_ALTERNATIVES: usize = 5;

/// How a coaching session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoachExit {
    Solved { attempts: usize },
    OutOfAttempts,
    /// `quit` or end of input
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Quit,
    New,
    Undo,
}

impl Command {
    fn parse(input: &str) -> Option<Self> {
        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => Some(Self::Quit),
            "new" | "n" => Some(Self::New),
            "undo" | "u" => Some(Self::Undo),
            _ => None,
        }
    }
}

struct Round<'a> {
    guess: Word,
    feedback: Feedback,
    remaining: Vec<&'a Word>,
}

struct Session<'a> {
    pool: &'a WordPool,
    rounds: Vec<Round<'a>>,
}

impl<'a> Session<'a> {
    const fn new(pool: &'a WordPool) -> Self {
        Self {
            pool,
            rounds: Vec::new(),
        }
    }

    fn attempt(&self) -> usize {
        self.rounds.len() + 1
    }

    fn candidates(&self) -> Vec<&'a Word> {
        self.rounds
            .last()
            .map_or_else(|| self.pool.candidates(), |round| round.remaining.clone())
    }

    fn apply<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<()> {
        match command {
            Command::New => {
                self.rounds.clear();
                writeln!(out, "\n{}\n", "New game started".bright_cyan())
            }
            Command::Undo if self.rounds.pop().is_some() => {
                writeln!(out, "Undone, back to attempt {}\n", self.attempt())
            }
            Command::Undo => writeln!(out, "Nothing to undo\n"),
            Command::Quit => Ok(()),
        }
    }
}

/// Run an interactive coaching session
///
/// Stops when the feedback is all green, after `max_attempts` rounds, on
/// `quit`, or when `input` runs dry.
///
/// # Errors
/// I/O errors on `input`/`out`, or selector errors while scoring guesses.
#[allow(clippy::too_many_lines)] // one loop drives both prompts
pub fn run_coach<S, R, W>(
    simulator: &Simulator<'_, S>,
    max_attempts: usize,
    mut input: R,
    mut out: W,
) -> anyhow::Result<CoachExit>
where
    S: ScoringStrategy,
    R: BufRead,
    W: Write,
{
    let pool = simulator.pool();
    let word_len = pool.word_len();
    let mut session = Session::new(pool);

    print_banner(&mut out, word_len)?;

    'game: loop {
        let attempt = session.attempt();
        if attempt > max_attempts {
            let message = format!("Out of attempts after {max_attempts} {}", guesses_label(max_attempts));
            writeln!(out, "\n{}\n", message.red())?;
            return Ok(CoachExit::OutOfAttempts);
        }

        let candidates = session.candidates();
        let ranked = if attempt > 1 && candidates.len() > 1 {
            rank_guesses(pool.words(), &candidates, simulator.strategy(), SHOW_ALTERNATIVES + 1)?
        } else {
            Vec::new()
        };
        // The head of the ranking is the selector's pick
        let suggestion = match ranked.first() {
            Some((best, _)) => (*best).clone(),
            None => simulator.suggest(&candidates, attempt)?.clone(),
        };
        show_suggestion(&mut out, attempt, &candidates, &suggestion, &ranked)?;

        let guess = loop {
            let Some(line) = read_line(&mut input, &mut out, &format!("Guess [{suggestion}]"))? else {
                return Ok(CoachExit::Quit);
            };
            match Command::parse(&line) {
                Some(Command::Quit) => return Ok(CoachExit::Quit),
                Some(command) => {
                    session.apply(command, &mut out)?;
                    continue 'game;
                }
                None => {}
            }
            if line.is_empty() || line.eq_ignore_ascii_case(suggestion.text()) {
                break suggestion.clone();
            }
            match pool.require(&line) {
                Ok(word) => break word.clone(),
                Err(e) => writeln!(out, "{} {e}", "✗".red())?,
            }
        };

        loop {
            let Some(line) = read_line(&mut input, &mut out, "Feedback (G/Y/-, green/yellow/gray, or win)")? else {
                return Ok(CoachExit::Quit);
            };
            match Command::parse(&line) {
                Some(Command::Quit) => return Ok(CoachExit::Quit),
                Some(command) => {
                    session.apply(command, &mut out)?;
                    continue 'game;
                }
                None => {}
            }

            let feedback = if matches!(line.to_lowercase().as_str(), "win" | "solved" | "correct") {
                Feedback::solved(word_len)
            } else {
                match Feedback::parse(&line, word_len) {
                    Ok(feedback) => feedback,
                    Err(e) => {
                        writeln!(out, "{} {e}", "✗".red())?;
                        continue;
                    }
                }
            };

            if feedback.is_solved() {
                session.rounds.push(Round {
                    guess,
                    feedback,
                    remaining: Vec::new(),
                });
                print_solved(&mut out, &session)?;
                return Ok(CoachExit::Solved { attempts: attempt });
            }

            let remaining = filter_candidates(&candidates, &guess, feedback)?;
            if remaining.is_empty() {
                writeln!(
                    out,
                    "{} {}: no word fits that feedback, check it and try again (or `undo`)",
                    "✗".red(),
                    SolverError::EmptyCandidatePool
                )?;
                continue;
            }

            session.rounds.push(Round {
                guess,
                feedback,
                remaining,
            });
            break;
        }
    }
}

fn print_banner<W: Write>(out: &mut W, word_len: usize) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(62).bright_cyan())?;
    writeln!(out, "{}", format!("  Wordle coach ({word_len} letters)").bold())?;
    writeln!(out, "{}\n", "═".repeat(62).bright_cyan())?;
    writeln!(out, "Press enter to play the suggestion or type the word you played.")?;
    writeln!(out, "Feedback: G = green, Y = yellow, - = gray (or 'green yellow gray ...').")?;
    writeln!(out, "Commands: undo, new, quit\n")
}

fn show_suggestion<W: Write>(
    out: &mut W,
    attempt: usize,
    candidates: &[&Word],
    suggestion: &Word,
    ranked: &[(&Word, f64)],
) -> anyhow::Result<()> {
    writeln!(out, "{}", "─".repeat(62))?;
    writeln!(out, "Attempt {attempt}: {} candidates remaining", candidates.len())?;
    writeln!(out, "{}", "─".repeat(62))?;

    let distribution = FeedbackDistribution::build(candidates, suggestion)?;
    let entropy = shannon_entropy(&distribution);
    writeln!(
        out,
        "\nSuggested guess: {}",
        suggestion.text().to_uppercase().bright_green().bold()
    )?;
    let bar = create_progress_bar(entropy, (candidates.len() as f64).ln(), 20);
    writeln!(
        out,
        "  Entropy:         [{}] {entropy:.3} nats ({:.3} bits)",
        bar.green(),
        entropy / std::f64::consts::LN_2
    )?;
    writeln!(out, "  Expected remain: {:.1} candidates", distribution.expected_remaining())?;
    writeln!(out, "  Worst case:      {} candidates", distribution.largest_group())?;

    let alternatives: Vec<String> = ranked
        .iter()
        .filter(|(word, _)| *word != suggestion)
        .map(|(word, score)| format!("{} ({score:.3})", word.text().to_uppercase()))
        .collect();
    if !alternatives.is_empty() {
        writeln!(
            out,
            "  Alternatives:    {}",
            alternatives.join(", ").bright_black()
        )?;
    }

    if candidates.len() <= SHOW_CANDIDATES {
        writeln!(out, "\nRemaining candidates:")?;
        for candidate in candidates {
            writeln!(out, "  • {}", candidate.text().to_uppercase())?;
        }
    }
    writeln!(out)?;
    Ok(())
}

fn print_solved<W: Write>(out: &mut W, session: &Session<'_>) -> io::Result<()> {
    let attempts = session.rounds.len();
    writeln!(out, "\n{}", "═".repeat(62).bright_cyan())?;
    writeln!(
        out,
        "  {} in {} {}",
        "Solved".bright_green().bold(),
        attempts.to_string().bright_cyan().bold(),
        guesses_label(attempts)
    )?;
    for (i, round) in session.rounds.iter().enumerate() {
        writeln!(
            out,
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            round.guess.text().to_uppercase().bright_white().bold(),
            round.feedback.to_emoji()
        )?;
    }
    writeln!(out, "{}\n", "═".repeat(62).bright_cyan())
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
