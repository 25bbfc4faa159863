//! Timed puzzle instances and type erasure

use crate::error::{ParseError, SolveError};
use crate::puzzle::{Puzzle, PuzzleExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Result from running a puzzle part, including timing information
#[derive(Debug, Clone)]
pub struct RunResult {
    /// The answer string
    pub answer: String,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl RunResult {
    /// Get the solve duration as TimeDelta
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// A puzzle instance holding parsed input for a specific year and day
///
/// Owns the parsed input (which may borrow from the raw text) together with
/// the parse timestamps recorded while building it.
pub struct PuzzleInstance<'a, P: Puzzle> {
    year: u16,
    day: u8,
    input: P::Input<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<'a, P: Puzzle> PuzzleInstance<'a, P> {
    /// Create an instance by parsing the raw input text, recording parse
    /// timing internally.
    ///
    /// # Arguments
    /// * `year` - The Advent of Code year
    /// * `day` - The day number (1-25)
    /// * `text` - The raw input text to parse
    pub fn new(year: u16, day: u8, text: &'a str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let input = P::parse(text)?;
        let parse_end = Utc::now();

        Ok(Self {
            year,
            day,
            input,
            parse_start,
            parse_end,
        })
    }
}

/// Type-erased interface for working with any puzzle through dynamic dispatch
///
/// `PuzzleInstance<P>` implements this trait, letting the registry hand out
/// different puzzle types behind one interface.
///
/// # Example
///
/// ```no_run
/// use aoc24_core::DynPuzzle;
///
/// fn example(mut puzzle: Box<dyn DynPuzzle + '_>) -> Result<(), Box<dyn std::error::Error>> {
///     let result = puzzle.run(1)?;
///     println!("Part 1: {} (took {:?})", result.answer, result.duration());
///     println!("Parse took {:?}", puzzle.parse_duration());
///     Ok(())
/// }
/// ```
pub trait DynPuzzle {
    /// Run the specified part with timing
    ///
    /// # Returns
    /// * `Ok(RunResult)` - The part was solved successfully with timing info
    /// * `Err(SolveError)` - The part is out of range or solving failed
    fn run(&mut self, part: u8) -> Result<RunResult, SolveError>;

    /// Get the parse start time (UTC)
    fn parse_start(&self) -> DateTime<Utc>;

    /// Get the parse end time (UTC)
    fn parse_end(&self) -> DateTime<Utc>;

    /// Get the year for this puzzle
    fn year(&self) -> u16;

    /// Get the day for this puzzle
    fn day(&self) -> u8;

    /// Get the number of parts this puzzle supports
    fn parts(&self) -> u8;

    /// Convenience: get parse duration as TimeDelta
    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<'a, P: Puzzle> DynPuzzle for PuzzleInstance<'a, P> {
    fn run(&mut self, part: u8) -> Result<RunResult, SolveError> {
        let solve_start = Utc::now();
        let answer = P::run_part_checked(&mut self.input, part)?;
        let solve_end = Utc::now();

        Ok(RunResult {
            answer,
            solve_start,
            solve_end,
        })
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        P::PARTS
    }
}
