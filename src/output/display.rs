//! Display functions for command results

use super::formatters::{guesses_label, histogram_bar};
use crate::commands::StepStatistics;
use crate::solver::{BatchReport, EntryResult, Outcome, Simulation};
use colored::Colorize;
use std::time::Duration;

const HISTOGRAM_WIDTH: usize = 40;

/// Print one simulated game
pub fn print_simulation(game: &Simulation, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        game.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for step in &game.steps {
        println!(
            "\nAttempt {}: {} {}",
            step.attempt,
            step.guess.text().to_uppercase(),
            step.feedback.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if step.candidates_after > 0 {
                let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} nats ({reduction:.1}x reduction)",
                    reduction.ln()
                );
            }
        }
    }

    println!();
    match game.outcome {
        Outcome::Solved { attempts } => println!(
            "{}",
            format!("✅ Solved in {attempts} {}!", guesses_label(attempts))
                .green()
                .bold()
        ),
        Outcome::Exhausted => println!(
            "{}",
            format!("❌ Not solved within {} attempts", game.steps.len())
                .red()
                .bold()
        ),
    }
}

/// Print statistics of a batch or step file
pub fn print_statistics(stats: &StepStatistics, elapsed: Option<Duration>) {
    println!("\n{}", "═".repeat(70));
    println!(" Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall".bright_cyan().bold());
    println!("  Words:               {}", stats.total);
    println!(
        "  Solved:              {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solve_rate()).green()
    );
    if stats.not_solved > 0 {
        println!(
            "  Not solved:          {} {}",
            stats.not_solved,
            format!("({:.1}%)", 100.0 - stats.solve_rate()).red()
        );
    }
    if let Some(elapsed) = elapsed {
        println!("  Total time:          {:.2}s", elapsed.as_secs_f64());
        if stats.total > 0 {
            println!(
                "  Time per word:       {:.1}ms",
                elapsed.as_millis() as f64 / stats.total as f64
            );
        }
    }

    let Some(summary) = stats.summary else {
        println!("\n{}", "No word was solved.".yellow());
        return;
    };

    println!("\n📐 {}", "Steps".bright_cyan().bold());
    println!(
        "  Mean:                {}",
        format!("{:.3}", summary.mean).bright_yellow().bold()
    );
    println!("  Median:              {:.1}", summary.median);
    println!("  Std deviation:       {:.3}", summary.std_dev);
    println!("  Min / max:           {} / {}", summary.min, summary.max);
    println!(
        "  25th / 75th pct:     {:.2} / {:.2}",
        summary.p25, summary.p75
    );

    println!("\n📈 {}", "Distribution".bright_cyan().bold());
    let max_count = stats.distribution.values().copied().max().unwrap_or(0);
    for (&steps, &count) in &stats.distribution {
        let percentage = count as f64 / stats.solved as f64 * 100.0;
        let bar = histogram_bar(count, max_count, HISTOGRAM_WIDTH);
        let filled = bar.chars().take_while(|&c| c == '█').count();
        let (filled, empty) = bar.split_at(filled * '█'.len_utf8());
        println!(
            "  {steps:3} {:7} {}{} {count:6} ({percentage:5.1}%)",
            guesses_label(steps),
            filled.green(),
            empty.bright_black()
        );
    }
}

/// Print the targets whose simulation failed
pub fn print_failures(report: &BatchReport) {
    let failures: Vec<_> = report
        .entries()
        .iter()
        .filter_map(|entry| match &entry.result {
            EntryResult::Failed(e) => Some((&entry.word, e)),
            _ => None,
        })
        .collect();

    if failures.is_empty() {
        return;
    }

    println!("\n⚠️  {}", format!("{} simulations failed", failures.len()).red().bold());
    for (word, error) in failures {
        println!("  {} {error}", word.text().to_uppercase());
    }
}

/// Print the words that needed exactly `steps` attempts
pub fn print_word_list(steps: usize, words: &[&str]) {
    println!(
        "\n{} word(s) solved in {steps} {}:",
        words.len(),
        guesses_label(steps)
    );
    for chunk in words.chunks(10) {
        println!("  {}", chunk.join(" "));
    }
}
