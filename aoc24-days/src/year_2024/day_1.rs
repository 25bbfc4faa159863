//! Day 1: Historian Hysteria
//!
//! Two columns of location IDs. Part 1 pairs them up smallest-to-smallest
//! and sums the distances; part 2 scores each left ID by how often it
//! appears on the right.

use anyhow::anyhow;
use aoc24_core::{ParseError, PuzzleParser, PuzzlePart, SolveError};
use aoc24_core::{Puzzle, RegisterPuzzle};
use itertools::Itertools;

#[derive(Puzzle, RegisterPuzzle)]
#[puzzle(parts = 2)]
#[register(year = 2024, day = 1, tags = ["lists"])]
pub struct Solver;

#[derive(Debug)]
pub struct LocationLists {
    left: Vec<u32>,
    right: Vec<u32>,
}

impl PuzzleParser for Solver {
    type Input<'a> = LocationLists;

    fn parse<'a>(text: &'a str) -> Result<Self::Input<'a>, ParseError> {
        let mut left = Vec::new();
        let mut right = Vec::new();

        for (line_idx, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let parsed = line
                .split_whitespace()
                .collect_tuple()
                .ok_or_else(|| anyhow!("expected two location ids"))
                .and_then(|(l, r): (&str, &str)| {
                    Ok((l.parse::<u32>()?, r.parse::<u32>()?))
                })
                .map_err(|e| {
                    ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e))
                })?;

            left.push(parsed.0);
            right.push(parsed.1);
        }

        Ok(LocationLists { left, right })
    }
}

impl PuzzlePart<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        // pair smallest with smallest, second smallest with second smallest, ...
        input.left.sort_unstable();
        input.right.sort_unstable();

        let total_distance: u64 = input
            .left
            .iter()
            .zip(&input.right)
            .map(|(&l, &r)| u64::from(l.abs_diff(r)))
            .sum();

        Ok(total_distance.to_string())
    }
}

impl PuzzlePart<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let right_counts = input.right.iter().counts();

        let similarity: u64 = input
            .left
            .iter()
            .map(|id| u64::from(*id) * right_counts.get(id).copied().unwrap_or(0) as u64)
            .sum();

        Ok(similarity.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
3   4
4   3
2   5
1   3
3   9
3   3
";

    #[test]
    fn sample_part_1() {
        let mut input = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::run_part(&mut input, 1).unwrap(), "11");
    }

    #[test]
    fn sample_part_2() {
        let mut input = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::run_part(&mut input, 2).unwrap(), "31");
    }

    #[test]
    fn rejects_line_with_one_column() {
        let result = Solver::parse("3 4\n7\n");
        assert!(matches!(result, Err(ParseError::InvalidFormat(msg)) if msg.contains("line 2")));
    }
}
