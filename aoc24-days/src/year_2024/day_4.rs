//! Day 4: Ceres Search
//!
//! A letter grid. Part 1 counts `XMAS` read in any of the eight directions
//! from each `X`; part 2 counts `A`s whose two diagonals each spell `MAS`
//! forwards or backwards.

use aoc24_core::{ParseError, PuzzleParser, PuzzlePart, SolveError};
use aoc24_core::{Puzzle, RegisterPuzzle};

#[derive(Puzzle, RegisterPuzzle)]
#[puzzle(parts = 2)]
#[register(year = 2024, day = 4, tags = ["grid"])]
pub struct Solver;

const DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

#[derive(Debug)]
pub struct Grid<'a> {
    rows: Vec<&'a [u8]>,
}

impl<'a> Grid<'a> {
    /// Byte at (row, col), or None outside the grid
    fn at(&self, row: isize, col: isize) -> Option<u8> {
        if row < 0 || col < 0 {
            return None;
        }
        self.rows.get(row as usize)?.get(col as usize).copied()
    }

    /// Whether `word` is spelled out starting one step from (row, col) in
    /// the given direction
    fn spells(&self, row: isize, col: isize, (dr, dc): (isize, isize), word: &[u8]) -> bool {
        word.iter().enumerate().all(|(i, &letter)| {
            let step = i as isize + 1;
            self.at(row + dr * step, col + dc * step) == Some(letter)
        })
    }

    /// Whether the diagonal through (row, col) along `(dr, dc)` reads `MAS`
    /// in either direction, centered on the `A` at (row, col)
    fn crossing_mas(&self, row: isize, col: isize, (dr, dc): (isize, isize)) -> bool {
        matches!(
            (self.at(row - dr, col - dc), self.at(row + dr, col + dc)),
            (Some(b'M'), Some(b'S')) | (Some(b'S'), Some(b'M'))
        )
    }

    fn cells(&self) -> impl Iterator<Item = (isize, isize, u8)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, &byte)| (r as isize, c as isize, byte))
        })
    }
}

impl PuzzleParser for Solver {
    type Input<'a> = Grid<'a>;

    fn parse<'a>(text: &'a str) -> Result<Self::Input<'a>, ParseError> {
        let rows: Vec<&[u8]> = text
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::as_bytes)
            .collect();

        Ok(Grid { rows })
    }
}

impl PuzzlePart<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let count: usize = input
            .cells()
            .filter(|&(_, _, byte)| byte == b'X')
            .map(|(r, c, _)| {
                DIRECTIONS
                    .iter()
                    .filter(|&&dir| input.spells(r, c, dir, b"MAS"))
                    .count()
            })
            .sum();

        Ok(count.to_string())
    }
}

impl PuzzlePart<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let count = input
            .cells()
            .filter(|&(r, c, byte)| {
                byte == b'A'
                    && input.crossing_mas(r, c, (1, 1))
                    && input.crossing_mas(r, c, (1, -1))
            })
            .count();

        Ok(count.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX
";

    #[test]
    fn sample_part_1() {
        let mut input = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::run_part(&mut input, 1).unwrap(), "18");
    }

    #[test]
    fn sample_part_2() {
        let mut input = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::run_part(&mut input, 2).unwrap(), "9");
    }

    #[test]
    fn single_word_in_each_direction() {
        let mut input = Solver::parse("XMAS").unwrap();
        assert_eq!(Solver::run_part(&mut input, 1).unwrap(), "1");

        let mut input = Solver::parse("SAMX").unwrap();
        assert_eq!(Solver::run_part(&mut input, 1).unwrap(), "1");
    }

    #[test]
    fn cross_on_grid_edge_is_not_counted() {
        // the A sits on the top row, so one diagonal arm is out of bounds
        let mut input = Solver::parse("MAS\nMAS\nSSS").unwrap();
        assert_eq!(Solver::run_part(&mut input, 2).unwrap(), "0");
    }
}
