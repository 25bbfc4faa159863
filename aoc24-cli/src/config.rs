//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use std::path::PathBuf;

/// Where puzzle input text comes from
pub enum InputSource {
    /// Per-day files under a directory
    Directory(PathBuf),
    /// A single input pasted on stdin
    Stdin,
}

/// Resolved runtime configuration
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Input source
    pub source: InputSource,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args, validating flag combinations
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let source = if args.stdin {
            // A pasted input belongs to exactly one puzzle
            if args.year.is_none() || args.day.is_none() {
                return Err(CliError::Config(
                    "--stdin requires --year and --day".to_string(),
                ));
            }
            InputSource::Stdin
        } else {
            InputSource::Directory(args.input_dir)
        };

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            source,
            quiet: args.quiet,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse_args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("aoc24").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn stdin_requires_year_and_day() {
        let result = Config::from_args(parse_args(&["--stdin"]));
        assert!(matches!(result, Err(CliError::Config(_))));

        let result = Config::from_args(parse_args(&["--stdin", "--year", "2024"]));
        assert!(matches!(result, Err(CliError::Config(_))));

        let config =
            Config::from_args(parse_args(&["--stdin", "--year", "2024", "--day", "5"])).unwrap();
        assert!(matches!(config.source, InputSource::Stdin));
    }

    #[test]
    fn default_source_is_the_inputs_directory() {
        let config = Config::from_args(parse_args(&[])).unwrap();
        assert!(
            matches!(config.source, InputSource::Directory(dir) if dir == PathBuf::from("inputs"))
        );
    }

    #[test]
    fn day_out_of_range_is_rejected_by_clap() {
        let result = Args::try_parse_from(["aoc24", "--day", "26"]);
        assert!(result.is_err());
    }
}
