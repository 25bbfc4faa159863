//! Error types for the CLI

use itertools::Itertools;
use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Registration error
    #[error(transparent)]
    Registration(#[from] aoc24_core::RegistrationError),

    /// Input files that should exist but don't, listed with expected paths
    #[error("missing input file(s):\n{}", .0.iter().map(|p| format!("  - {}", p.display())).join("\n"))]
    MissingInputs(Vec<PathBuf>),

    /// One or more puzzle parts reported an error
    #[error("{0} puzzle part(s) failed")]
    PartsFailed(usize),
}
