//! Property-based tests for the pure pipeline stages.
//!
//! The deduplicator, classifier, and renderer are plain functions over
//! plain data, which makes them good proptest targets: the invariants
//! below must hold for any input, not just the curated fixtures.

use proptest::prelude::*;

use relnote::changelog::classify::{classify, classify_one, UNCLASSIFIED};
use relnote::changelog::dedupe::dedupe;
use relnote::changelog::render::render;
use relnote::changelog::resolve::Associated;
use relnote::changelog::sort::sort_group;
use relnote::core::config::Config;
use relnote::core::types::{ChangeRequest, Commit, Section};

/// Requests drawn from a small number pool so duplicates actually occur.
fn arb_request() -> impl Strategy<Value = ChangeRequest> {
    (0u64..20, prop::collection::vec("[a-z]{1,6}", 0..3)).prop_map(|(number, labels)| {
        ChangeRequest {
            number,
            title: format!("Change {}", number),
            url: format!("https://example.com/pull/{}", number),
            labels,
            merged_at: None,
        }
    })
}

fn arb_associated() -> impl Strategy<Value = Vec<Associated>> {
    prop::collection::vec(
        prop::collection::vec(arb_request(), 0..4).prop_map(|requests| Associated {
            commit: Commit::new("c", vec![]),
            requests,
        }),
        0..6,
    )
}

/// Sections with unique titles and labels overlapping the request pool.
fn arb_sections() -> impl Strategy<Value = Vec<Section>> {
    prop::collection::vec(prop::collection::vec("[a-z]{1,6}", 0..4), 0..4).prop_map(|labels| {
        labels
            .into_iter()
            .enumerate()
            .map(|(i, labels)| Section::new(format!("Section {}", i), labels))
            .collect()
    })
}

proptest! {
    // =========================================================================
    // Deduplicator
    // =========================================================================

    #[test]
    fn dedupe_is_idempotent(associated in arb_associated()) {
        let once = dedupe(&associated);
        let twice = dedupe(&[Associated {
            commit: Commit::new("all", vec![]),
            requests: once.clone(),
        }]);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn dedupe_output_has_unique_numbers(associated in arb_associated()) {
        let unique = dedupe(&associated);
        let mut numbers: Vec<u64> = unique.iter().map(|r| r.number).collect();
        numbers.sort_unstable();
        let before = numbers.len();
        numbers.dedup();
        prop_assert_eq!(before, numbers.len());
    }

    #[test]
    fn dedupe_preserves_first_seen_order(associated in arb_associated()) {
        let unique = dedupe(&associated);

        // Expected order: numbers by first occurrence in the flattened input.
        let mut expected = Vec::new();
        for entry in &associated {
            for request in &entry.requests {
                if !expected.contains(&request.number) {
                    expected.push(request.number);
                }
            }
        }

        let actual: Vec<u64> = unique.iter().map(|r| r.number).collect();
        prop_assert_eq!(actual, expected);
    }

    // =========================================================================
    // Classifier
    // =========================================================================

    #[test]
    fn classification_is_total(
        requests in prop::collection::vec(arb_request(), 0..12),
        sections in arb_sections(),
    ) {
        let grouped = classify(requests.clone(), &sections);

        // Every request lands somewhere; nothing is duplicated or dropped.
        prop_assert_eq!(grouped.total(), requests.len());

        // And each one lands exactly where classify_one says it should.
        for request in &requests {
            let key = classify_one(request, &sections);
            prop_assert!(
                grouped.get(key).iter().any(|r| r.number == request.number),
                "request #{} missing from group '{}'", request.number, key
            );
        }
    }

    #[test]
    fn classify_one_only_yields_known_keys(
        request in arb_request(),
        sections in arb_sections(),
    ) {
        let key = classify_one(&request, &sections);
        let known = key == UNCLASSIFIED || sections.iter().any(|s| s.title == key);
        prop_assert!(known, "unexpected group key '{}'", key);
    }

    // =========================================================================
    // Sorter
    // =========================================================================

    #[test]
    fn sort_group_is_a_permutation(requests in prop::collection::vec(arb_request(), 0..12)) {
        let sorted = sort_group(requests.clone());
        prop_assert_eq!(sorted.len(), requests.len());
        for request in &requests {
            prop_assert!(sorted.contains(request));
        }
    }

    // =========================================================================
    // Renderer
    // =========================================================================

    #[test]
    fn rendered_sections_follow_declaration_order(
        requests in prop::collection::vec(arb_request(), 0..12),
        sections in arb_sections(),
    ) {
        let config = Config {
            sections: sections.clone(),
            ..Config::default()
        };
        let grouped = classify(requests, &sections);
        let body = render(&config, &grouped);

        let mut last_position = 0;
        for section in &sections {
            if let Some(position) = body.find(&format!("## {}", section.title)) {
                prop_assert!(position >= last_position, "section out of order");
                last_position = position;
            }
        }
    }
}
