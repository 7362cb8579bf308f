//! Step files
//!
//! One `word step` pair per line, space-separated. Words that were not solved
//! within the attempt budget are written as `word -`.

use crate::solver::BatchReport;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const NOT_SOLVED: &str = "-";

/// Write a batch report as a step file, in report order
///
/// Failed simulations have no step count and are left out.
///
/// # Errors
/// Returns an I/O error if the file cannot be created or written.
pub fn write_steps<P: AsRef<Path>>(path: P, report: &BatchReport) -> io::Result<()> {
    let mut out = BufWriter::new(fs::File::create(path)?);
    for (word, steps) in report.steps() {
        match steps {
            Some(steps) => writeln!(out, "{word} {steps}")?,
            None => writeln!(out, "{word} {NOT_SOLVED}")?,
        }
    }
    out.flush()
}

/// Parse step-file content
///
/// # Errors
/// Returns `InvalidData` naming the first malformed line.
pub fn parse_steps(content: &str) -> io::Result<Vec<(String, Option<usize>)>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| -> io::Result<(String, Option<usize>)> {
            let invalid = || {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("line {}: expected `word steps`, got {line:?}", i + 1),
                )
            };

            let mut fields = line.split_whitespace();
            let (Some(word), Some(steps), None) = (fields.next(), fields.next(), fields.next())
            else {
                return Err(invalid());
            };

            let steps = match steps {
                NOT_SOLVED | "None" => None,
                n => Some(n.parse::<usize>().map_err(|_| invalid())?),
            };
            Ok((word.to_string(), steps))
        })
        .collect()
}

/// Read a step file written by [`write_steps`]
///
/// `None` as a step count is accepted as "not solved" as well.
///
/// # Errors
/// Returns an I/O error if the file cannot be read or a line is malformed.
pub fn read_steps<P: AsRef<Path>>(path: P) -> io::Result<Vec<(String, Option<usize>)>> {
    parse_steps(&fs::read_to_string(path)?)
}
