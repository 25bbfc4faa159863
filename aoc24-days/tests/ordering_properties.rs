//! Property-based tests for the precedence index and adjacency repair

use aoc24_days::utils::ordering::{self, PrecedenceIndex};
use proptest::prelude::*;

/// A total order over a small set of distinct items, plus a shuffled
/// arrangement of the same items to validate or repair.
fn order_and_shuffle() -> impl Strategy<Value = (Vec<String>, Vec<String>)> {
    prop::collection::hash_set(10u32..100, 2..8)
        .prop_map(|items| {
            items
                .into_iter()
                .map(|item| item.to_string())
                .collect::<Vec<_>>()
        })
        .prop_shuffle()
        .prop_flat_map(|order| {
            let shuffled = Just(order.clone()).prop_shuffle();
            (Just(order), shuffled)
        })
}

/// Index with a rule for every ordered pair of the total order
fn full_index(order: &[String]) -> PrecedenceIndex<'_> {
    let mut index = PrecedenceIndex::new();
    for (i, predecessor) in order.iter().enumerate() {
        for successor in &order[i + 1..] {
            index.insert(predecessor, successor);
        }
    }
    index
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// A sequence validates exactly when every adjacent pair is ruled.
    #[test]
    fn validation_is_the_conjunction_of_adjacent_pairs((order, shuffled) in order_and_shuffle()) {
        let index = full_index(&order);
        let sequence: Vec<&str> = shuffled.iter().map(String::as_str).collect();

        let expected = sequence
            .windows(2)
            .all(|pair| index.knows(pair[0], pair[1]));
        prop_assert_eq!(index.is_ordered(&sequence), expected);
    }

    /// Repairing under a total order yields a sequence that validates.
    #[test]
    fn repaired_sequence_validates((order, shuffled) in order_and_shuffle()) {
        let index = full_index(&order);
        let mut sequence: Vec<&str> = shuffled.iter().map(String::as_str).collect();

        index.repair(&mut sequence);
        prop_assert!(index.is_ordered(&sequence));
    }

    /// Repair only reorders; the multiset of items never changes.
    #[test]
    fn repair_preserves_the_multiset((order, shuffled) in order_and_shuffle()) {
        let index = full_index(&order);
        let mut sequence: Vec<&str> = shuffled.iter().map(String::as_str).collect();

        let mut before = sequence.clone();
        index.repair(&mut sequence);
        let mut after = sequence.clone();

        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
    }

    /// Re-running repair on its own output produces no further swaps.
    #[test]
    fn repair_is_idempotent((order, shuffled) in order_and_shuffle()) {
        let index = full_index(&order);
        let mut sequence: Vec<&str> = shuffled.iter().map(String::as_str).collect();

        index.repair(&mut sequence);
        let repaired = sequence.clone();
        index.repair(&mut sequence);

        prop_assert_eq!(sequence, repaired);
    }

    /// The middle element sits at index len / 2, for odd and even lengths.
    #[test]
    fn middle_is_the_floor_midpoint(items in prop::collection::vec(0u32..1000, 1..20)) {
        prop_assert_eq!(ordering::middle(&items), Some(&items[items.len() / 2]));
    }
}
