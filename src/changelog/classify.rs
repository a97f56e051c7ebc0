//! changelog::classify
//!
//! Classifier: assigns each change-request to a configured section.
//!
//! # Rule
//!
//! Only the first label counts (a request with no labels carries the empty
//! label), and the first section in declared order whose label set contains
//! it wins. A request matching no section lands in the unclassified
//! sentinel group, which is never rendered. The rule guarantees each
//! request appears in exactly one place in the output.

use std::collections::HashMap;

use crate::core::types::{ChangeRequest, Section};

/// Group key for requests matching no configured section.
pub const UNCLASSIFIED: &str = "(unclassified)";

/// Grouping of change-requests by section title.
///
/// Built once by [`classify`] and only rebuilt (never mutated) afterwards.
/// Every request appears in exactly one group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grouped {
    groups: HashMap<String, Vec<ChangeRequest>>,
}

impl Grouped {
    /// Requests in the group for `key`, or an empty slice.
    pub fn get(&self, key: &str) -> &[ChangeRequest] {
        self.groups.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of requests across all groups.
    pub fn total(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Rebuild with each group transformed independently.
    ///
    /// Used by the sorter: grouping membership is fixed here, only the
    /// order within each group may change.
    pub fn map_groups<F>(self, mut f: F) -> Grouped
    where
        F: FnMut(Vec<ChangeRequest>) -> Vec<ChangeRequest>,
    {
        Grouped {
            groups: self
                .groups
                .into_iter()
                .map(|(key, requests)| (key, f(requests)))
                .collect(),
        }
    }
}

/// Classify a single request: the group key it belongs to.
///
/// Total: every request maps to a configured section title or to
/// [`UNCLASSIFIED`], never to nothing.
pub fn classify_one<'a>(request: &ChangeRequest, sections: &'a [Section]) -> &'a str {
    let label = request.first_label();
    sections
        .iter()
        .find(|section| section.matches(label))
        .map(|section| section.title.as_str())
        .unwrap_or(UNCLASSIFIED)
}

/// Fold the request list into a grouping, preserving per-group order.
pub fn classify(requests: Vec<ChangeRequest>, sections: &[Section]) -> Grouped {
    let mut groups: HashMap<String, Vec<ChangeRequest>> = HashMap::new();

    for request in requests {
        let key = classify_one(&request, sections).to_string();
        groups.entry(key).or_default().push(request);
    }

    Grouped { groups }
}
