//! Pairwise precedence rules with adjacency-driven validation and repair
//!
//! A [`PrecedenceIndex`] stores rules of the form "A must appear before B
//! whenever both are present". Sequences are checked against the index by
//! inspecting *adjacent* pairs only, and out-of-order sequences are repaired
//! with a comparator-driven bubble sort over the same adjacency check.
//!
//! Both choices are deliberate. A full pairwise check would reject sequences
//! the adjacency check accepts, and a generic topological sort could pick a
//! different (equally rule-consistent) total order than the transposition
//! pattern does; either substitution changes which middle element a repaired
//! sequence reports.

use std::collections::{HashMap, HashSet};

/// Mapping from an item to the set of items required to come after it.
///
/// Built once from a batch of rules and read-only afterwards. Items are
/// opaque strings; items never named by a rule are simply absent. Duplicate
/// rules are harmless, and a contradictory pair ((A,B) together with (B,A))
/// is stored as given; the index does not inspect rules for consistency.
#[derive(Debug, Clone, Default)]
pub struct PrecedenceIndex<'a> {
    successors: HashMap<&'a str, HashSet<&'a str>>,
}

impl<'a> PrecedenceIndex<'a> {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from (predecessor, successor) pairs in a single pass
    pub fn from_rules<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut index = Self::new();
        for (predecessor, successor) in rules {
            index.insert(predecessor, successor);
        }
        index
    }

    /// Add one rule: `predecessor` must come before `successor`
    pub fn insert(&mut self, predecessor: &'a str, successor: &'a str) {
        self.successors
            .entry(predecessor)
            .or_default()
            .insert(successor);
    }

    /// Whether a rule places `predecessor` before `successor`
    pub fn knows(&self, predecessor: &str, successor: &str) -> bool {
        self.successors
            .get(predecessor)
            .is_some_and(|after| after.contains(successor))
    }

    /// Whether every *adjacent* pair of the sequence satisfies a rule.
    ///
    /// Only consecutive pairs are checked; a sequence violating a rule
    /// between non-adjacent items still passes. Empty and single-item
    /// sequences are trivially ordered.
    pub fn is_ordered(&self, sequence: &[&str]) -> bool {
        sequence
            .windows(2)
            .all(|pair| self.knows(pair[0], pair[1]))
    }

    /// Reorder the sequence until every adjacent pair satisfies a rule.
    ///
    /// Bubble-sort pattern: repeated passes swapping any adjacent pair whose
    /// order no rule supports, stopping after a pass with no swaps. At most
    /// `len` passes, so this terminates even on a rule set that is cyclic
    /// over the present items; in that case the result may still fail
    /// [`is_ordered`](Self::is_ordered).
    ///
    /// The multiset of items is never changed, only their order.
    pub fn repair(&self, sequence: &mut [&str]) {
        let n = sequence.len();

        for pass in 0..n {
            let mut swapped = false;

            for j in 0..n.saturating_sub(pass + 1) {
                if !self.knows(sequence[j], sequence[j + 1]) {
                    sequence.swap(j, j + 1);
                    swapped = true;
                }
            }

            if !swapped {
                break;
            }
        }
    }
}

/// The element at index `len / 2` (0-based, integer division).
///
/// For odd lengths this is the exact middle; for even lengths it is the item
/// just past the midpoint. The formula is part of the puzzle contract, so it
/// is preserved exactly rather than averaging or taking the lower middle.
pub fn middle<T>(sequence: &[T]) -> Option<&T> {
    sequence.get(sequence.len() / 2)
}
