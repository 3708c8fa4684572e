//! Search history reconciliation.
//!
//! Merges a freshly fetched result list into the stored history list of the
//! same category without ever duplicating an id.

use std::collections::HashSet;

use crate::types::result::HistoryItem;

/// Merges `incoming` into `existing`.
///
/// `existing` keeps its order and its stored values. Items of `incoming`
/// whose id is not yet present are appended in `incoming` order; repeated
/// ids within `incoming` keep their first occurrence.
///
/// The result differs from `existing` exactly when it is longer, which is
/// what callers check before committing.
pub fn reconcile<T: HistoryItem>(existing: &[T], incoming: &[T]) -> Vec<T> {
    let mut seen: HashSet<&str> = existing.iter().map(|item| item.id()).collect();
    let mut merged = existing.to_vec();

    for item in incoming {
        if seen.insert(item.id()) {
            merged.push(item.clone());
        }
    }

    merged
}
