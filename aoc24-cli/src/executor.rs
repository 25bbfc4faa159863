//! Sequential executor for running solvers
//!
//! Work items are collected from registry metadata, then each puzzle is
//! parsed and solved in (year, day, part) order. Every puzzle is independent,
//! so execution stays single-threaded and synchronous.

use crate::config::Config;
use crate::error::CliError;
use crate::input::InputStore;
use aoc24_core::{PuzzleError, PuzzleRegistry};
use chrono::TimeDelta;
use std::ops::RangeInclusive;

/// Source of input text for the executor
pub enum InputProvider {
    /// Per-day files
    Store(InputStore),
    /// One pasted input (stdin mode)
    Literal(String),
}

impl InputProvider {
    fn fetch(&self, year: u16, day: u8) -> Result<String, CliError> {
        match self {
            InputProvider::Store(store) => Ok(store.load(year, day)?),
            InputProvider::Literal(text) => Ok(text.clone()),
        }
    }
}

/// Work item representing a puzzle to execute
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Result from running a single puzzle part
pub struct RunReport {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, PuzzleError>,
    /// Parse timing, reported on the first part of each day only
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Sequential executor for running solvers
pub struct Executor {
    registry: PuzzleRegistry,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: PuzzleRegistry, config: &Config) -> Self {
        Self {
            registry,
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        }
    }

    /// Collect work items by filtering registry metadata, ordered by
    /// (year, day)
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let mut items: Vec<WorkItem> = self
            .registry
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect();

        items.sort_unstable_by_key(|w| (w.year, w.day));
        items
    }

    /// Filter parts based on the part filter and the puzzle's part count
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(part) if part <= max_parts => part..=part,
            Some(_) => 1..=0, // empty: the puzzle has no such part
            None => 1..=max_parts,
        }
    }

    /// Run every work item in order, collecting a report per part
    ///
    /// Input fetch failures abort the run; parse and solve failures are
    /// recorded in the reports so the remaining puzzles still run.
    pub fn execute(
        &self,
        items: &[WorkItem],
        provider: &InputProvider,
    ) -> Result<Vec<RunReport>, CliError> {
        let mut reports = Vec::new();

        for item in items {
            let text = provider.fetch(item.year, item.day)?;
            self.run_item(item, &text, &mut reports);
        }

        Ok(reports)
    }

    fn run_item(&self, item: &WorkItem, text: &str, reports: &mut Vec<RunReport>) {
        let mut puzzle = match self.registry.create_puzzle(item.year, item.day, text) {
            Ok(puzzle) => puzzle,
            Err(error) => {
                report_failed_creation(item, error, reports);
                return;
            }
        };

        let mut first = true;
        for part in item.parts.clone() {
            let (answer, solve_duration) = match puzzle.run(part) {
                Ok(result) => {
                    let duration = result.duration();
                    (Ok(result.answer), duration)
                }
                Err(error) => (Err(PuzzleError::Solve(error)), TimeDelta::zero()),
            };

            reports.push(RunReport {
                year: item.year,
                day: item.day,
                part,
                answer,
                parse_duration: first.then(|| puzzle.parse_duration()),
                solve_duration,
            });
            first = false;
        }
    }
}

/// Record a puzzle that could not even be created: a parse error is reported
/// once per requested part, anything else once.
fn report_failed_creation(item: &WorkItem, error: PuzzleError, reports: &mut Vec<RunReport>) {
    let parse_error = match error {
        PuzzleError::Parse(parse_error) => parse_error,
        other => {
            reports.push(RunReport {
                year: item.year,
                day: item.day,
                part: *item.parts.start(),
                answer: Err(other),
                parse_duration: None,
                solve_duration: TimeDelta::zero(),
            });
            return;
        }
    };

    for part in item.parts.clone() {
        reports.push(RunReport {
            year: item.year,
            day: item.day,
            part,
            answer: Err(PuzzleError::Parse(parse_error.clone())),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use aoc24_core::{ParseError, Puzzle, PuzzleParser, PuzzlePart, RegistryBuilder, SolveError};
    use clap::Parser;

    struct SumLines;

    impl PuzzleParser for SumLines {
        type Input<'a> = Vec<i64>;

        fn parse<'a>(text: &'a str) -> Result<Self::Input<'a>, ParseError> {
            text.lines()
                .map(|l| {
                    l.parse()
                        .map_err(|_| ParseError::InvalidFormat("bad int".into()))
                })
                .collect()
        }
    }

    impl PuzzlePart<1> for SumLines {
        fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
            Ok(input.iter().sum::<i64>().to_string())
        }
    }

    impl Puzzle for SumLines {
        const PARTS: u8 = 1;

        fn run_part(input: &mut Self::Input<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => <SumLines as PuzzlePart<1>>::solve(input),
                other => Err(SolveError::PartNotImplemented(other)),
            }
        }
    }

    fn make_executor(argv: &[&str]) -> Executor {
        let args =
            Args::try_parse_from(std::iter::once("aoc24").chain(argv.iter().copied())).unwrap();
        let config = Config::from_args(args).unwrap();
        let registry = RegistryBuilder::new()
            .register_puzzle::<SumLines>(2024, 1)
            .unwrap()
            .register_puzzle::<SumLines>(2024, 2)
            .unwrap()
            .build();
        Executor::new(registry, &config)
    }

    #[test]
    fn work_items_are_filtered_and_ordered() {
        let executor = make_executor(&[]);
        let items = executor.collect_work_items();
        assert_eq!(items.len(), 2);
        assert_eq!((items[0].year, items[0].day), (2024, 1));
        assert_eq!((items[1].year, items[1].day), (2024, 2));

        let executor = make_executor(&["--day", "2"]);
        let items = executor.collect_work_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].day, 2);

        let executor = make_executor(&["--year", "2023"]);
        assert!(executor.collect_work_items().is_empty());

        // part 2 isn't implemented by this solver
        let executor = make_executor(&["--part", "2"]);
        assert!(executor.collect_work_items().is_empty());
    }

    #[test]
    fn execute_reports_answers_with_timing() {
        let executor = make_executor(&["--day", "1"]);
        let items = executor.collect_work_items();
        let provider = InputProvider::Literal("1\n2\n3".to_string());

        let reports = executor.execute(&items, &provider).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].answer.as_deref().unwrap(), "6");
        assert!(reports[0].parse_duration.is_some());
    }

    #[test]
    fn execute_records_parse_failures_and_continues() {
        let executor = make_executor(&[]);
        let items = executor.collect_work_items();
        let provider = InputProvider::Literal("not a number".to_string());

        let reports = executor.execute(&items, &provider).unwrap();
        assert_eq!(reports.len(), 2);
        assert!(
            reports
                .iter()
                .all(|r| matches!(r.answer, Err(PuzzleError::Parse(_))))
        );
    }
}
