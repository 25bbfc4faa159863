//! Day 2: Red-Nosed Reports
//!
//! Each report is a list of levels; a report is safe when the levels are
//! strictly monotonic with steps of 1 to 3. Part 2 adds the Problem
//! Dampener: one level may be removed to make a report safe.

use anyhow::anyhow;
use aoc24_core::{ParseError, PuzzleParser, PuzzlePart, SolveError};
use aoc24_core::{Puzzle, RegisterPuzzle};
use itertools::Itertools;

#[derive(Puzzle, RegisterPuzzle)]
#[puzzle(parts = 2)]
#[register(year = 2024, day = 2, tags = ["reports"])]
pub struct Solver;

#[derive(Debug)]
pub struct Reports {
    reports: Vec<Vec<i32>>,
}

impl PuzzleParser for Solver {
    type Input<'a> = Reports;

    fn parse<'a>(text: &'a str) -> Result<Self::Input<'a>, ParseError> {
        let reports = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_idx, line)| {
                line.split_whitespace()
                    .map(|level| level.parse::<i32>().map_err(anyhow::Error::from))
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|e| {
                        ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Reports { reports })
    }
}

/// Strictly monotonic with every step in 1..=3, in either direction
fn is_safe(levels: &[i32]) -> bool {
    let ascending = levels
        .iter()
        .tuple_windows()
        .all(|(a, b)| (1..=3).contains(&(b - a)));
    let descending = levels
        .iter()
        .tuple_windows()
        .all(|(a, b)| (1..=3).contains(&(a - b)));

    ascending || descending
}

/// Safe after removing at most one level.
///
/// Brute force over single removals; removing the first level of an
/// already-safe report is always safe, so the unmodified report needs no
/// separate check.
fn is_safe_dampened(levels: &[i32]) -> bool {
    (0..levels.len()).any(|skip| {
        let mut shortened = levels.to_vec();
        shortened.remove(skip);
        is_safe(&shortened)
    })
}

impl PuzzlePart<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let safe = input.reports.iter().filter(|r| is_safe(r)).count();
        Ok(safe.to_string())
    }
}

impl PuzzlePart<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let safe = input
            .reports
            .iter()
            .filter(|r| is_safe_dampened(r))
            .count();
        Ok(safe.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9
";

    #[test]
    fn sample_part_1() {
        let mut input = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::run_part(&mut input, 1).unwrap(), "2");
    }

    #[test]
    fn sample_part_2() {
        let mut input = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::run_part(&mut input, 2).unwrap(), "4");
    }

    #[test]
    fn flat_step_is_unsafe() {
        assert!(!is_safe(&[4, 4, 5]));
        assert!(is_safe_dampened(&[4, 4, 5]));
    }

    #[test]
    fn dampener_covers_bad_first_level() {
        // only removing the leading 9 fixes this report
        assert!(!is_safe(&[9, 1, 2, 3]));
        assert!(is_safe_dampened(&[9, 1, 2, 3]));
    }

    #[test]
    fn dampener_cannot_fix_two_bad_levels() {
        assert!(!is_safe_dampened(&[1, 2, 7, 8, 9]));
    }
}
