//! Registry for looking up and creating puzzle solvers by year and day

use crate::error::{ParseError, PuzzleError, RegistrationError};
use crate::instance::{DynPuzzle, PuzzleInstance};
use crate::puzzle::Puzzle;
use std::collections::HashMap;

/// Thread-safe factory function type for creating puzzle instances
pub type PuzzleFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynPuzzle + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleInfo {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// Number of parts this puzzle supports
    pub parts: u8,
}

/// Factory entry with metadata
struct RegistryEntry {
    factory: PuzzleFactory,
    parts: u8,
}

/// Builder for constructing a [`PuzzleRegistry`] with a fluent API
///
/// The builder pattern keeps the registry immutable after construction and
/// detects duplicate registrations as they happen.
///
/// # Example
///
/// ```no_run
/// # use aoc24_core::RegistryBuilder;
/// let registry = RegistryBuilder::new()
///     .register_all_plugins()
///     .unwrap()
///     .build();
/// ```
pub struct RegistryBuilder {
    entries: HashMap<(u16, u8), RegistryEntry>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a puzzle type for a specific year and day
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the puzzle registered, ready for chaining
    /// * `Err(RegistrationError)` - Duplicate puzzle for this year-day combination
    pub fn register_puzzle<P>(self, year: u16, day: u8) -> Result<Self, RegistrationError>
    where
        P: Puzzle + 'static,
    {
        self.register_factory(year, day, P::PARTS, move |text: &str| {
            let instance = PuzzleInstance::<P>::new(year, day, text)?;
            Ok(Box::new(instance))
        })
    }

    /// Register a puzzle factory with an explicit part count
    ///
    /// # Arguments
    /// * `year` - The Advent of Code year
    /// * `day` - The day number (1-25)
    /// * `parts` - Number of parts the produced puzzles support
    /// * `factory` - A function that parses input and returns a boxed [`DynPuzzle`]
    pub fn register_factory<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynPuzzle + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        if self.entries.contains_key(&(year, day)) {
            return Err(RegistrationError::Duplicate(year, day));
        }
        self.entries.insert(
            (year, day),
            RegistryEntry {
                factory: Box::new(factory),
                parts,
            },
        );
        Ok(self)
    }

    /// Register all collected puzzle plugins
    ///
    /// Iterates through every plugin submitted via `inventory::submit!`
    /// (normally through `#[derive(RegisterPuzzle)]`) and registers each one.
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_plugins_where(|_| true)
    }

    /// Register the puzzle plugins matching the given filter predicate
    ///
    /// Only registers plugins for which the filter returns `true`, allowing
    /// selective registration based on tags, year, day, or any other
    /// metadata.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use aoc24_core::RegistryBuilder;
    /// // Register only 2024 puzzles tagged "grid"
    /// let registry = RegistryBuilder::new()
    ///     .register_plugins_where(|plugin| {
    ///         plugin.year == 2024 && plugin.tags.contains(&"grid")
    ///     })
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_plugins_where<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&PuzzlePlugin) -> bool,
    {
        for plugin in inventory::iter::<PuzzlePlugin>() {
            if filter(plugin) {
                self = plugin.puzzle.register_with(self, plugin.year, plugin.day)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> PuzzleRegistry {
        PuzzleRegistry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry for looking up and creating puzzle solvers
///
/// Maps (year, day) pairs to factory functions. Once built, it can only be
/// queried, not modified.
pub struct PuzzleRegistry {
    entries: HashMap<(u16, u8), RegistryEntry>,
}

impl PuzzleRegistry {
    /// Create a puzzle instance for a specific year and day
    ///
    /// # Returns
    /// * `Ok(Box<dyn DynPuzzle>)` - Successfully parsed and created puzzle
    /// * `Err(PuzzleError)` - Puzzle not found or parsing failed
    pub fn create_puzzle<'a>(
        &self,
        year: u16,
        day: u8,
        text: &'a str,
    ) -> Result<Box<dyn DynPuzzle + 'a>, PuzzleError> {
        let entry = self
            .entries
            .get(&(year, day))
            .ok_or(PuzzleError::NotFound(year, day))?;

        (entry.factory)(text).map_err(PuzzleError::Parse)
    }

    /// Get metadata for a specific puzzle
    pub fn get_info(&self, year: u16, day: u8) -> Option<PuzzleInfo> {
        self.entries.get(&(year, day)).map(|e| PuzzleInfo {
            year,
            day,
            parts: e.parts,
        })
    }

    /// Check if a puzzle is registered for year/day
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.entries.contains_key(&(year, day))
    }

    /// Iterate over metadata for all registered puzzles (unordered)
    pub fn iter_info(&self) -> impl Iterator<Item = PuzzleInfo> + '_ {
        self.entries.iter().map(|(&(year, day), e)| PuzzleInfo {
            year,
            day,
            parts: e.parts,
        })
    }

    /// Get the number of registered puzzles
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Trait for puzzles that can register themselves with a registry builder
///
/// A type-erased registration interface: unlike [`Puzzle`], it has no
/// associated types, so different puzzle types can sit behind one `&dyn`
/// reference in a plugin entry. Every `Puzzle` gets an implementation through
/// a blanket impl.
pub trait RegisterablePuzzle: Sync {
    /// Register this puzzle type with the builder for a specific year and day
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError>;

    /// Get the number of parts this puzzle supports
    fn parts(&self) -> u8;
}

impl<P> RegisterablePuzzle for P
where
    P: Puzzle + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register_puzzle::<P>(year, day)
    }

    fn parts(&self) -> u8 {
        P::PARTS
    }
}

/// Plugin entry for automatic puzzle registration
///
/// Submitted to the [`inventory`] collection by `#[derive(RegisterPuzzle)]`;
/// holds the year, day, a type-erased puzzle reference, and tags for
/// filtering.
pub struct PuzzlePlugin {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// The puzzle (type-erased)
    pub puzzle: &'static dyn RegisterablePuzzle,
    /// Tags for filtering (e.g. "grid", "ordering")
    pub tags: &'static [&'static str],
}

// Enable plugin collection via inventory
inventory::collect!(PuzzlePlugin);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;
    use crate::puzzle::{PuzzleParser, PuzzlePart};

    struct CountLines;

    impl PuzzleParser for CountLines {
        type Input<'a> = Vec<&'a str>;

        fn parse<'a>(text: &'a str) -> Result<Self::Input<'a>, ParseError> {
            Ok(text.lines().collect())
        }
    }

    impl PuzzlePart<1> for CountLines {
        fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
            Ok(input.len().to_string())
        }
    }

    impl Puzzle for CountLines {
        const PARTS: u8 = 1;

        fn run_part(input: &mut Self::Input<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => <CountLines as PuzzlePart<1>>::solve(input),
                other => Err(SolveError::PartNotImplemented(other)),
            }
        }
    }

    #[test]
    fn create_and_run_registered_puzzle() {
        let registry = RegistryBuilder::new()
            .register_puzzle::<CountLines>(2024, 1)
            .unwrap()
            .build();

        let mut puzzle = registry.create_puzzle(2024, 1, "a\nb\nc").unwrap();
        assert_eq!(puzzle.run(1).unwrap().answer, "3");
        assert_eq!(puzzle.year(), 2024);
        assert_eq!(puzzle.day(), 1);
        assert_eq!(puzzle.parts(), 1);
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let result = RegistryBuilder::new()
            .register_puzzle::<CountLines>(2024, 1)
            .unwrap()
            .register_puzzle::<CountLines>(2024, 1);

        assert!(matches!(
            result,
            Err(RegistrationError::Duplicate(2024, 1))
        ));
    }

    #[test]
    fn unknown_puzzle_is_not_found() {
        let registry = RegistryBuilder::new().build();
        let result = registry.create_puzzle(2024, 9, "input");
        assert!(matches!(result, Err(PuzzleError::NotFound(2024, 9))));
    }

    #[test]
    fn info_reflects_registered_puzzles() {
        let registry = RegistryBuilder::new()
            .register_puzzle::<CountLines>(2024, 1)
            .unwrap()
            .build();

        assert!(registry.contains(2024, 1));
        assert!(!registry.contains(2024, 2));
        assert_eq!(
            registry.get_info(2024, 1),
            Some(PuzzleInfo {
                year: 2024,
                day: 1,
                parts: 1,
            })
        );
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.iter_info().count(), 1);
    }

    #[test]
    fn out_of_range_part_is_rejected() {
        let registry = RegistryBuilder::new()
            .register_puzzle::<CountLines>(2024, 1)
            .unwrap()
            .build();

        let mut puzzle = registry.create_puzzle(2024, 1, "a").unwrap();
        assert!(matches!(
            puzzle.run(2),
            Err(SolveError::PartOutOfRange(2))
        ));
    }
}
