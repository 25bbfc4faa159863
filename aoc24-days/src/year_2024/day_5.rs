//! Day 5: Print Queue
//!
//! Page ordering rules (`A|B`) and updates (`A,B,C,...`). Part 1 sums the
//! middle pages of updates already consistent with the rules; part 2 repairs
//! the inconsistent updates and sums their middle pages instead. The rule
//! index and reordering live in [`crate::utils::ordering`].

use crate::utils::ordering::{self, PrecedenceIndex};
use anyhow::anyhow;
use aoc24_core::{ParseError, PuzzleParser, PuzzlePart, SolveError};
use aoc24_core::{Puzzle, RegisterPuzzle};

#[derive(Puzzle, RegisterPuzzle)]
#[puzzle(parts = 2)]
#[register(year = 2024, day = 5, tags = ["ordering"])]
pub struct Solver;

#[derive(Debug)]
pub struct PrintQueue<'a> {
    rules: PrecedenceIndex<'a>,
    updates: Vec<Vec<&'a str>>,
}

impl PuzzleParser for Solver {
    type Input<'a> = PrintQueue<'a>;

    fn parse<'a>(text: &'a str) -> Result<Self::Input<'a>, ParseError> {
        let mut rules = PrecedenceIndex::new();
        let mut updates = Vec::new();

        // Lines that are neither a rule nor an update (the blank separator)
        // are skipped
        for line in text.lines() {
            let line = line.trim();
            if let Some((predecessor, successor)) = line.split_once('|') {
                rules.insert(predecessor, successor);
            } else if line.contains(',') {
                updates.push(line.split(',').collect());
            }
        }

        Ok(PrintQueue { rules, updates })
    }
}

/// The update's middle page (index `len / 2`), as a number
fn middle_page(update: &[&str]) -> Result<u64, SolveError> {
    let page = ordering::middle(update)
        .ok_or_else(|| SolveError::Failed(anyhow!("empty update").into()))?;
    page.parse()
        .map_err(|e| SolveError::Failed(anyhow!("middle page {page:?}: {e}").into()))
}

impl PuzzlePart<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let PrintQueue { rules, updates } = input;

        let mut total = 0u64;
        for update in updates.iter() {
            if rules.is_ordered(update) {
                total += middle_page(update)?;
            }
        }

        Ok(total.to_string())
    }
}

impl PuzzlePart<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let PrintQueue { rules, updates } = input;

        let mut total = 0u64;
        for update in updates.iter() {
            if rules.is_ordered(update) {
                continue;
            }

            let mut reordered = update.clone();
            rules.repair(&mut reordered);
            total += middle_page(&reordered)?;
        }

        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
47|53
97|13
97|61
97|47
75|29
61|13
75|53
29|13
97|29
53|29
61|53
97|53
61|29
47|13
75|47
97|75
47|61
75|61
47|29
75|13

75,47,61,53,29
97,61,53,29,13
75,29,13
75,97,47,61,53
61,13,29
97,13,75,29,47
";

    #[test]
    fn sample_part_1() {
        let mut input = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::run_part(&mut input, 1).unwrap(), "143");
    }

    #[test]
    fn sample_part_2() {
        let mut input = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::run_part(&mut input, 2).unwrap(), "123");
    }

    #[test]
    fn valid_and_repaired_updates_are_disjoint_and_exhaustive() {
        let input = Solver::parse(SAMPLE).unwrap();
        let valid = input
            .updates
            .iter()
            .filter(|u| input.rules.is_ordered(u))
            .count();
        assert_eq!(valid, 3);
        assert_eq!(input.updates.len() - valid, 3);
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let input = Solver::parse("47|53\ngarbage line\n\n47,53\n").unwrap();
        assert_eq!(input.updates.len(), 1);
        assert!(input.rules.knows("47", "53"));
    }

    #[test]
    fn non_numeric_middle_page_is_a_solve_error() {
        let mut input = Solver::parse("a|b\nb|c\na,b,c\n").unwrap();
        assert!(matches!(
            Solver::run_part(&mut input, 1),
            Err(SolveError::Failed(_))
        ));
    }
}
