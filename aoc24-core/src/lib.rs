//! Advent of Code puzzle framework
//!
//! A trait-based framework for writing Advent of Code solvers with custom
//! input parsing, per-part solving, and a plugin registry for discovering
//! solvers at runtime.
//!
//! # Overview
//!
//! This library provides:
//! - A trait-based interface for defining puzzles ([`PuzzleParser`],
//!   [`PuzzlePart`], [`Puzzle`])
//! - Zero-copy parsed input via a lifetime-generic `Input<'a>` type
//! - Timed, type-erased puzzle instances ([`DynPuzzle`])
//! - A registry for looking up solvers by year and day
//! - Automatic registration through the [`RegisterPuzzle`] derive macro
//!
//! # Quick Example
//!
//! ```
//! use aoc24_core::{ParseError, PuzzleParser, PuzzlePart, RegistryBuilder, SolveError};
//! use aoc24_core::Puzzle;
//!
//! pub struct Day1;
//!
//! impl PuzzleParser for Day1 {
//!     type Input<'a> = Vec<i32>;
//!
//!     fn parse<'a>(text: &'a str) -> Result<Self::Input<'a>, ParseError> {
//!         text.lines()
//!             .map(|line| {
//!                 line.parse()
//!                     .map_err(|_| ParseError::InvalidFormat("expected integer".to_string()))
//!             })
//!             .collect()
//!     }
//! }
//!
//! impl PuzzlePart<1> for Day1 {
//!     fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
//!         Ok(input.iter().sum::<i32>().to_string())
//!     }
//! }
//!
//! impl Puzzle for Day1 {
//!     const PARTS: u8 = 1;
//!
//!     fn run_part(input: &mut Self::Input<'_>, part: u8) -> Result<String, SolveError> {
//!         match part {
//!             1 => <Day1 as PuzzlePart<1>>::solve(input),
//!             other => Err(SolveError::PartNotImplemented(other)),
//!         }
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register_puzzle::<Day1>(2024, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut puzzle = registry.create_puzzle(2024, 1, "1\n2\n3").unwrap();
//! assert_eq!(puzzle.run(1).unwrap().answer, "6");
//! ```
//!
//! # Key Concepts
//!
//! ## Puzzle traits
//!
//! [`PuzzleParser`] defines the parsed input type and how to produce it.
//! [`PuzzlePart<N>`] solves one part against that input. [`Puzzle`] ties the
//! parts together with a part count and a dispatching `run_part`; it is
//! usually generated with `#[derive(Puzzle)]` and `#[puzzle(parts = N)]`
//! rather than written by hand.
//!
//! ## Plugin registration
//!
//! `#[derive(RegisterPuzzle)]` with `#[register(year = ..., day = ...,
//! tags = [...])]` submits the solver to an [`inventory`] collection;
//! [`RegistryBuilder::register_all_plugins`] picks every submission up, and
//! [`RegistryBuilder::register_plugins_where`] filters by plugin metadata.

mod error;
mod instance;
mod puzzle;
mod registry;

pub use error::{ParseError, PuzzleError, RegistrationError, SolveError};
pub use instance::{DynPuzzle, PuzzleInstance, RunResult};
pub use puzzle::{Puzzle, PuzzleExt, PuzzleParser, PuzzlePart};
pub use registry::{
    PuzzleFactory, PuzzleInfo, PuzzlePlugin, PuzzleRegistry, RegisterablePuzzle, RegistryBuilder,
};

// Re-export inventory for use by the derive macros
pub use inventory;

// Re-export the derive macros
pub use aoc24_macros::{Puzzle, RegisterPuzzle};
