//! Core puzzle traits

use crate::error::{ParseError, SolveError};

/// Trait for parsing puzzle input into a per-puzzle data structure.
///
/// The parsed type is lifetime-generic so solvers can borrow from the raw
/// input text instead of copying it.
///
/// # Example
///
/// ```
/// use aoc24_core::{ParseError, PuzzleParser};
///
/// struct Day1;
///
/// impl PuzzleParser for Day1 {
///     // zero-copy: keep references into the input text
///     type Input<'a> = Vec<&'a str>;
///
///     fn parse<'a>(text: &'a str) -> Result<Self::Input<'a>, ParseError> {
///         Ok(text.lines().collect())
///     }
/// }
/// ```
pub trait PuzzleParser {
    /// The parsed input, holding puzzle data and any intermediate results.
    ///
    /// Use any ownership strategy:
    /// - owned `Vec<T>` or custom structs when data gets transformed
    /// - types borrowing `&'a str` for zero-copy parsing
    ///
    /// The `'a` bound lets instances holding the parsed input be boxed as
    /// `dyn DynPuzzle + 'a`.
    type Input<'a>: 'a;

    /// Parse the raw input text.
    fn parse<'a>(text: &'a str) -> Result<Self::Input<'a>, ParseError>;
}

/// Trait for solving one part of a puzzle.
///
/// The const generic `N` is the part number (1, 2, ...), so each part is a
/// separate impl and missing parts are caught at compile time.
///
/// # Example
///
/// ```
/// use aoc24_core::{ParseError, PuzzleParser, PuzzlePart, SolveError};
///
/// struct Day1;
///
/// impl PuzzleParser for Day1 {
///     type Input<'a> = Vec<i32>;
///
///     fn parse<'a>(text: &'a str) -> Result<Self::Input<'a>, ParseError> {
///         text.lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
///
/// impl PuzzlePart<1> for Day1 {
///     fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
///         Ok(input.iter().sum::<i32>().to_string())
///     }
/// }
/// ```
pub trait PuzzlePart<const N: u8>: PuzzleParser {
    /// Solve this part of the puzzle.
    ///
    /// The input is mutable so parts can cache intermediate results in it.
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError>;
}

/// Core trait tying a puzzle's parts together.
///
/// Extends [`PuzzleParser`] with a declared part count and a `run_part`
/// dispatcher. Normally generated by `#[derive(Puzzle)]` with
/// `#[puzzle(parts = N)]`, which dispatches to `PuzzlePart<1>..=PuzzlePart<N>`.
pub trait Puzzle: PuzzleParser {
    /// Number of parts this puzzle implements
    const PARTS: u8;

    /// Solve a specific part of the puzzle
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - The part is not implemented
    /// * `Err(SolveError::Failed)` - An error occurred while solving
    fn run_part(input: &mut Self::Input<'_>, part: u8) -> Result<String, SolveError>;
}

/// Extension methods for [`Puzzle`]
pub trait PuzzleExt: Puzzle {
    /// Like [`Puzzle::run_part`], but rejects part numbers outside
    /// `1..=PARTS` before dispatching.
    fn run_part_checked(input: &mut Self::Input<'_>, part: u8) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::run_part(input, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Puzzle + ?Sized> PuzzleExt for T {}
