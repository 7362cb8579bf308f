//! Wordle Entropy - CLI
//!
//! Simulates, evaluates and coaches Wordle-family games with entropy or
//! worst-case guess selection.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io;
use std::path::{Path, PathBuf};
use wordle_entropy::{
    commands::{
        CoachExit, EvaluateConfig, StepStatistics, random_target, run_coach, run_evaluate,
        solve_word, words_with_steps,
    },
    core::WordPool,
    output::{
        print_failures, print_simulation, print_statistics, print_word_list, read_steps,
        write_steps,
    },
    solver::{FailurePolicy, ScoringStrategy, Simulator, SimulatorConfig, Strategy},
    wordlists::{DEFAULT_DICTIONARY, DEFAULT_WORD_LENGTH, load_word_pool, save_word_pool},
};

#[derive(Parser)]
#[command(
    name = "wordle_entropy",
    about = "Wordle-family solver and simulator using entropy or worst-case guess selection",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Guess scoring strategy
    #[arg(short, long, global = true, value_enum, default_value_t = Strategy::Shannon)]
    strategy: Strategy,

    /// Newline-separated dictionary file
    #[arg(short = 'w', long, global = true, default_value = DEFAULT_DICTIONARY)]
    wordlist: PathBuf,

    /// Word length; dictionary words of other lengths are skipped
    #[arg(short = 'n', long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Attempts before a simulated game counts as not solved
    #[arg(short, long, global = true, default_value_t = SimulatorConfig::DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Override the opening guess
    #[arg(short, long, global = true)]
    opening: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a game against one target word
    Solve {
        /// Target word (random pool word when omitted)
        word: Option<String>,

        /// Show candidate counts per attempt
        #[arg(short, long)]
        verbose: bool,
    },

    /// Simulate a game for every word in the pool
    Evaluate {
        /// Only evaluate the first N pool words
        #[arg(short, long)]
        limit: Option<usize>,

        /// Write per-word step counts to this file
        #[arg(short = 'O', long)]
        output: Option<PathBuf>,

        /// Stop at the first failed simulation
        #[arg(long)]
        fail_fast: bool,
    },

    /// Interactive advisor for a game played elsewhere
    Coach {
        /// Attempts allowed in the game being played
        #[arg(short, long, default_value_t = 6)]
        attempts: usize,
    },

    /// Statistics of a step file written by `evaluate --output`
    Stats {
        /// Step file
        file: PathBuf,

        /// Also list the words solved in exactly K attempts
        #[arg(short, long, value_name = "K")]
        list: Option<usize>,
    },

    /// Save the length-filtered dictionary as a word list
    Cache {
        /// Destination file
        #[arg(short = 'O', long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Solve { word, verbose } => {
            let pool = load_pool(&cli)?;
            run_solve_command(&build_simulator(&pool, &cli)?, word.as_deref(), *verbose)
        }
        Commands::Evaluate {
            limit,
            output,
            fail_fast,
        } => {
            let pool = load_pool(&cli)?;
            run_evaluate_command(
                &build_simulator(&pool, &cli)?,
                *limit,
                output.as_deref(),
                *fail_fast,
            )
        }
        Commands::Coach { attempts } => {
            let pool = load_pool(&cli)?;
            run_coach_command(&build_simulator(&pool, &cli)?, *attempts)
        }
        Commands::Stats { file, list } => run_stats_command(file, *list),
        Commands::Cache { output } => run_cache_command(&cli, output),
    }
}

fn load_pool(cli: &Cli) -> Result<WordPool> {
    load_word_pool(&cli.wordlist, cli.length)
        .with_context(|| format!("failed to load word list {}", cli.wordlist.display()))
}

fn build_simulator<'a>(pool: &'a WordPool, cli: &Cli) -> Result<Simulator<'a, Strategy>> {
    let mut config = SimulatorConfig::new(cli.max_attempts);
    if let Some(opening) = &cli.opening {
        config = config.with_opening(opening.clone());
    }
    Simulator::new(pool, cli.strategy, config).context("invalid solver configuration")
}

fn run_solve_command<S: ScoringStrategy>(
    simulator: &Simulator<'_, S>,
    word: Option<&str>,
    verbose: bool,
) -> Result<()> {
    let target = match word {
        Some(word) => word.to_string(),
        None => random_target(simulator.pool())
            .context("word pool is empty")?
            .text()
            .to_string(),
    };

    let game = solve_word(simulator, &target)?;
    print_simulation(&game, verbose);
    Ok(())
}

fn run_evaluate_command<S: ScoringStrategy>(
    simulator: &Simulator<'_, S>,
    limit: Option<usize>,
    output: Option<&Path>,
    fail_fast: bool,
) -> Result<()> {
    println!("\n{}", "═".repeat(70));
    println!(" Evaluating {} ", simulator.strategy().name().bright_cyan().bold());
    println!("{}", "═".repeat(70));
    println!(
        "\nPool: {} words, opening {}, max {} attempts\n",
        simulator.pool().len(),
        simulator.opening().text().to_uppercase(),
        simulator.max_attempts()
    );

    let config = EvaluateConfig {
        limit,
        policy: if fail_fast {
            FailurePolicy::FailFast
        } else {
            FailurePolicy::Continue
        },
        show_progress: true,
    };
    let evaluation = run_evaluate(simulator, config)?;

    print_statistics(&evaluation.statistics, Some(evaluation.report.elapsed()));
    print_failures(&evaluation.report);

    if let Some(path) = output {
        write_steps(path, &evaluation.report)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("\nStep counts written to {}", path.display());
    }
    Ok(())
}

fn run_coach_command<S: ScoringStrategy>(simulator: &Simulator<'_, S>, attempts: usize) -> Result<()> {
    match run_coach(simulator, attempts, io::stdin().lock(), io::stdout())? {
        CoachExit::Solved { .. } | CoachExit::OutOfAttempts => {}
        CoachExit::Quit => println!("\nBye!"),
    }
    Ok(())
}

fn run_cache_command(cli: &Cli, output: &Path) -> Result<()> {
    let pool = load_pool(cli)?;
    save_word_pool(output, &pool).with_context(|| format!("failed to write {}", output.display()))?;
    println!(
        "Saved {} {}-letter words to {}",
        pool.len(),
        pool.word_len(),
        output.display()
    );
    Ok(())
}

fn run_stats_command(file: &Path, list: Option<usize>) -> Result<()> {
    let entries = read_steps(file).with_context(|| format!("failed to read {}", file.display()))?;

    let stats = StepStatistics::from_steps(entries.iter().map(|(_, steps)| *steps));
    print_statistics(&stats, None);

    if let Some(steps) = list {
        print_word_list(steps, &words_with_steps(&entries, steps));
    }
    Ok(())
}
