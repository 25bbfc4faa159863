//! Advent of Code 2024 puzzle solutions with automatic registration
//!
//! Each solution registers itself with the solver framework through the
//! `RegisterPuzzle` derive macro. Shared algorithms live under [`utils`].

pub mod utils;
pub mod year_2024;
