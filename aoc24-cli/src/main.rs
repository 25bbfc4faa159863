//! aoc24 - Command-line interface for running Advent of Code 2024 solvers

mod cli;
mod config;
mod error;
mod executor;
mod input;
mod output;

// Import aoc24-days to link the solver plugins
use aoc24_days as _;

use aoc24_core::{PuzzleRegistry, RegistryBuilder};
use clap::Parser;
use cli::Args;
use config::{Config, InputSource};
use error::CliError;
use executor::{Executor, InputProvider, WorkItem};
use input::InputStore;
use output::OutputFormatter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;

    let registry = build_registry(&config.tags)?;
    let executor = Executor::new(registry, &config);

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    let provider = resolve_inputs(&work_items, &config.source)?;

    let formatter = OutputFormatter::new(config.quiet);
    let reports = executor.execute(&work_items, &provider)?;
    for report in &reports {
        formatter.print_report(report);
    }
    formatter.print_summary(&reports);

    let failures = reports.iter().filter(|r| r.answer.is_err()).count();
    if failures > 0 {
        return Err(CliError::PartsFailed(failures));
    }

    Ok(())
}

/// Resolve the input provider, checking for missing input files up front
fn resolve_inputs(
    work_items: &[WorkItem],
    source: &InputSource,
) -> Result<InputProvider, CliError> {
    match source {
        InputSource::Stdin => Ok(InputProvider::Literal(input::read_stdin()?)),
        InputSource::Directory(dir) => {
            let store = InputStore::new(dir.clone());

            let missing: Vec<_> = work_items
                .iter()
                .filter(|w| !store.contains(w.year, w.day))
                .map(|w| store.input_path(w.year, w.day))
                .collect();
            if !missing.is_empty() {
                return Err(CliError::MissingInputs(missing));
            }

            Ok(InputProvider::Store(store))
        }
    }
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<PuzzleRegistry, CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_plugins_where(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
