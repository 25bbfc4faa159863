//! Day 3: Mull It Over
//!
//! Corrupted memory is scanned for `mul(X,Y)` instructions with 1-3 digit
//! operands. Part 2 adds `do()` / `don't()` toggles that enable or disable
//! the `mul`s after them.

use aoc24_core::{ParseError, PuzzleParser, PuzzlePart, SolveError};
use aoc24_core::{Puzzle, RegisterPuzzle};
use regex::Regex;

#[derive(Puzzle, RegisterPuzzle)]
#[puzzle(parts = 2)]
#[register(year = 2024, day = 3, tags = ["scan"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Do,
    Dont,
    Mul(u64, u64),
}

#[derive(Debug)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl PuzzleParser for Solver {
    type Input<'a> = Program;

    fn parse<'a>(text: &'a str) -> Result<Self::Input<'a>, ParseError> {
        // One scan over the whole input; do/don't state must carry across
        // lines, so the instruction stream keeps source order.
        let re = Regex::new(r"do\(\)|don't\(\)|mul\((\d{1,3}),(\d{1,3})\)")
            .map_err(|e| ParseError::Other(e.to_string()))?;

        let mut instructions = Vec::new();
        for caps in re.captures_iter(text) {
            let instruction = match (caps.get(1), caps.get(2)) {
                (Some(x), Some(y)) => {
                    let x = x
                        .as_str()
                        .parse()
                        .map_err(|e| ParseError::InvalidFormat(format!("mul operand: {e}")))?;
                    let y = y
                        .as_str()
                        .parse()
                        .map_err(|e| ParseError::InvalidFormat(format!("mul operand: {e}")))?;
                    Instruction::Mul(x, y)
                }
                _ if caps[0].starts_with("don't") => Instruction::Dont,
                _ => Instruction::Do,
            };
            instructions.push(instruction);
        }

        Ok(Program { instructions })
    }
}

impl PuzzlePart<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let total: u64 = input
            .instructions
            .iter()
            .filter_map(|instruction| match instruction {
                Instruction::Mul(x, y) => Some(x * y),
                _ => None,
            })
            .sum();

        Ok(total.to_string())
    }
}

impl PuzzlePart<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let mut enabled = true;
        let mut total = 0u64;

        for instruction in &input.instructions {
            match instruction {
                Instruction::Do => enabled = true,
                Instruction::Dont => enabled = false,
                Instruction::Mul(x, y) => {
                    if enabled {
                        total += x * y;
                    }
                }
            }
        }

        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_1: &str =
        "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))";
    const SAMPLE_2: &str =
        "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";

    #[test]
    fn sample_part_1() {
        let mut input = Solver::parse(SAMPLE_1).unwrap();
        assert_eq!(Solver::run_part(&mut input, 1).unwrap(), "161");
    }

    #[test]
    fn sample_part_2() {
        let mut input = Solver::parse(SAMPLE_2).unwrap();
        assert_eq!(Solver::run_part(&mut input, 2).unwrap(), "48");
    }

    #[test]
    fn operands_longer_than_three_digits_are_not_instructions() {
        let input = Solver::parse("mul(1234,5)").unwrap();
        assert!(input.instructions.is_empty());
    }

    #[test]
    fn disabled_state_carries_across_lines() {
        let mut input = Solver::parse("don't()mul(2,3)\nmul(4,5)do()\nmul(6,7)").unwrap();
        assert_eq!(Solver::run_part(&mut input, 2).unwrap(), "42");
    }
}
