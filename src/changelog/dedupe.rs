//! changelog::dedupe
//!
//! Deduplicator: collapses repeated change-request records.
//!
//! Several commits routinely map to the same change-request (one request,
//! many commits), so the flattened association list contains duplicates.
//! Identity is the request `number`; the earliest occurrence keeps its
//! position and later ones are dropped.

use std::collections::HashSet;

use super::resolve::Associated;
use crate::core::types::ChangeRequest;

/// Flatten per-commit matches and drop later duplicates by `number`.
///
/// O(n) with a seen-set; idempotent; an empty input yields an empty
/// output.
pub fn dedupe(associated: &[Associated]) -> Vec<ChangeRequest> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();

    for entry in associated {
        for request in &entry.requests {
            if seen.insert(request.number) {
                unique.push(request.clone());
            }
        }
    }

    unique
}
