//! Property-based tests for search history reconciliation.
//!
//! Ids are drawn from a small alphabet so that incoming lists overlap the
//! existing history and repeat themselves often.

use std::collections::HashSet;

use myvacation::services::reconciler::reconcile;
use myvacation::types::result::DestinationResult;
use proptest::prelude::*;

fn arb_destination() -> impl Strategy<Value = DestinationResult> {
    ("[a-f]", "[A-Z][a-z]{2,10}").prop_map(|(id, name)| DestinationResult {
        id,
        image_url: format!("https://img.example/{}.jpg", name.to_lowercase()),
        name,
    })
}

/// A list with unique ids, as the history invariant requires.
fn arb_history() -> impl Strategy<Value = Vec<DestinationResult>> {
    proptest::collection::vec(arb_destination(), 0..8).prop_map(|items| {
        let mut seen = HashSet::new();
        items
            .into_iter()
            .filter(|d| seen.insert(d.id.clone()))
            .collect()
    })
}

fn arb_incoming() -> impl Strategy<Value = Vec<DestinationResult>> {
    proptest::collection::vec(arb_destination(), 0..10)
}

fn ids(list: &[DestinationResult]) -> Vec<&str> {
    list.iter().map(|d| d.id.as_str()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn reconcile_never_duplicates_ids(existing in arb_history(), incoming in arb_incoming()) {
        let merged = reconcile(&existing, &incoming);
        let unique: HashSet<&str> = ids(&merged).into_iter().collect();
        prop_assert_eq!(unique.len(), merged.len());
    }

    #[test]
    fn reconcile_keeps_existing_as_prefix(existing in arb_history(), incoming in arb_incoming()) {
        let merged = reconcile(&existing, &incoming);
        prop_assert!(merged.len() >= existing.len());
        prop_assert_eq!(&merged[..existing.len()], &existing[..]);
    }

    #[test]
    fn reconcile_covers_every_incoming_id(existing in arb_history(), incoming in arb_incoming()) {
        let merged = reconcile(&existing, &incoming);
        let merged_ids: HashSet<&str> = ids(&merged).into_iter().collect();
        for item in &incoming {
            prop_assert!(merged_ids.contains(item.id.as_str()));
        }
    }

    #[test]
    fn reconcile_appends_in_incoming_order(existing in arb_history(), incoming in arb_incoming()) {
        let merged = reconcile(&existing, &incoming);
        let existing_ids: HashSet<&str> = ids(&existing).into_iter().collect();
        let mut seen = HashSet::new();
        let expected_tail: Vec<&str> = incoming
            .iter()
            .map(|d| d.id.as_str())
            .filter(|id| !existing_ids.contains(id) && seen.insert(*id))
            .collect();
        prop_assert_eq!(ids(&merged[existing.len()..]), expected_tail);
    }

    #[test]
    fn reconcile_with_empty_incoming_is_identity(existing in arb_history()) {
        prop_assert_eq!(reconcile(&existing, &[]), existing);
    }

    #[test]
    fn reconcile_into_empty_equals_unique_incoming(incoming in arb_history()) {
        prop_assert_eq!(reconcile(&[], &incoming), incoming);
    }

    #[test]
    fn reconcile_is_idempotent(existing in arb_history(), incoming in arb_incoming()) {
        let once = reconcile(&existing, &incoming);
        let twice = reconcile(&once, &incoming);
        prop_assert_eq!(once, twice);
    }
}

#[test]
fn reconcile_appends_new_id_after_known_one() {
    let a = DestinationResult {
        id: "1".to_string(),
        name: "A".to_string(),
        image_url: String::new(),
    };
    let b = DestinationResult {
        id: "2".to_string(),
        name: "B".to_string(),
        image_url: String::new(),
    };

    let merged = reconcile(&[a.clone()], &[a.clone(), b.clone()]);
    assert_eq!(merged, vec![a, b]);
}
