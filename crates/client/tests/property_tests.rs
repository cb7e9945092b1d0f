//! Property-based tests for tag sets and query ref IDs.
//!
//! This module uses proptest to verify:
//! - Tag set laws: dedupe in first-occurrence order, idempotent add, exact remove
//! - Ref-id generation: distinct, uppercase, and never shorter for later indices

use proptest::prelude::*;
use grafana_client::Tags;
use grafana_client::models::ref_id_for_index;
use std::collections::HashSet;

// =============================================================================
// Helper Strategies
// =============================================================================

/// Short tags from a small alphabet so duplicates are common.
fn tag_strategy() -> impl Strategy<Value = String> {
    "[a-d]{1,2}"
}

fn tags_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(tag_strategy(), 0..20)
}

fn first_occurrences(input: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    input
        .iter()
        .filter(|tag| seen.insert(tag.as_str()))
        .cloned()
        .collect()
}

// =============================================================================
// Tag Set Laws
// =============================================================================

proptest! {
    #[test]
    fn set_keeps_first_occurrence_order(input in tags_strategy()) {
        let tags = Tags::new(input.clone());
        let expected = first_occurrences(&input);
        prop_assert_eq!(tags.value(), expected.as_slice());
    }

    #[test]
    fn add_never_duplicates(initial in tags_strategy(), added in tags_strategy()) {
        let mut tags = Tags::new(initial.clone());
        tags.add(added.clone());

        let mut combined = initial;
        combined.extend(added);
        let expected = first_occurrences(&combined);
        prop_assert_eq!(tags.value(), expected.as_slice());

        let unique: HashSet<&String> = tags.iter().collect();
        prop_assert_eq!(unique.len(), tags.len());
    }

    #[test]
    fn add_is_idempotent(initial in tags_strategy(), added in tags_strategy()) {
        let mut once = Tags::new(initial);
        once.add(added.clone());
        let mut twice = once.clone();
        twice.add(added);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn remove_deletes_exactly_named_tags(initial in tags_strategy(), removed in tags_strategy()) {
        let mut tags = Tags::new(initial.clone());
        tags.remove(removed.iter());

        let expected: Vec<String> = first_occurrences(&initial)
            .into_iter()
            .filter(|tag| !removed.contains(tag))
            .collect();
        prop_assert_eq!(tags.value(), expected.as_slice());
    }

    #[test]
    fn remove_absent_is_noop(initial in tags_strategy()) {
        let mut tags = Tags::new(initial);
        let before = tags.clone();
        tags.remove(["zzz"]);
        prop_assert_eq!(tags, before);
    }

    #[test]
    fn tags_survive_serde(input in tags_strategy()) {
        let tags = Tags::new(input);
        let json = serde_json::to_string(&tags).unwrap();
        let back: Tags = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, tags);
    }
}

// =============================================================================
// Ref-ID Generation
// =============================================================================

proptest! {
    #[test]
    fn ref_ids_are_uppercase_letters(index in 0usize..100_000) {
        let id = ref_id_for_index(index);
        prop_assert!(!id.is_empty());
        prop_assert!(id.chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn ref_ids_are_distinct(a in 0usize..20_000, b in 0usize..20_000) {
        prop_assume!(a != b);
        prop_assert_ne!(ref_id_for_index(a), ref_id_for_index(b));
    }

    #[test]
    fn ref_id_length_is_monotonic(index in 0usize..100_000) {
        prop_assert!(ref_id_for_index(index).len() <= ref_id_for_index(index + 1).len());
    }
}
