//! changelog::sort
//!
//! Sorter: orders each group by merge recency.
//!
//! Most recently merged first. Entries without a merge timestamp compare
//! as "not more recent" against everything, which sinks them to the end;
//! two missing timestamps compare equal, and the stable sort keeps their
//! original relative order. Cross-group order is fixed by section
//! declaration order, not by timestamp.

use std::cmp::Ordering;

use super::classify::Grouped;
use crate::core::types::ChangeRequest;

/// Comparator: descending by `merged_at`, missing timestamps last.
pub fn merge_recency(a: &ChangeRequest, b: &ChangeRequest) -> Ordering {
    match (&a.merged_at, &b.merged_at) {
        (Some(left), Some(right)) => right.cmp(left),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sort a single group by merge recency.
// Vec::sort_by is stable, which makes the missing-timestamp tail
// deterministic.
pub fn sort_group(mut requests: Vec<ChangeRequest>) -> Vec<ChangeRequest> {
    requests.sort_by(merge_recency);
    requests
}

/// Sort every group independently.
pub fn sort_groups(grouped: Grouped) -> Grouped {
    grouped.map_groups(sort_group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn request(number: u64, merged_day: Option<u32>) -> ChangeRequest {
        ChangeRequest {
            number,
            title: format!("Change {}", number),
            url: format!("https://example.com/pull/{}", number),
            labels: vec![],
            merged_at: merged_day
                .map(|day| Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap()),
        }
    }

    #[test]
    fn most_recent_first() {
        let sorted = sort_group(vec![
            request(1, Some(1)),
            request(2, Some(20)),
            request(3, Some(10)),
        ]);

        let numbers: Vec<u64> = sorted.iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![2, 3, 1]);
    }

    #[test]
    fn missing_timestamps_sink_to_the_end() {
        let sorted = sort_group(vec![
            request(1, None),
            request(2, Some(5)),
            request(3, None),
            request(4, Some(9)),
        ]);

        let numbers: Vec<u64> = sorted.iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![4, 2, 1, 3]);
    }

    #[test]
    fn missing_timestamps_keep_relative_order() {
        let sorted = sort_group(vec![request(9, None), request(7, None), request(8, None)]);

        let numbers: Vec<u64> = sorted.iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![9, 7, 8]);
    }

    #[test]
    fn equal_timestamps_keep_relative_order() {
        let sorted = sort_group(vec![
            request(1, Some(5)),
            request(2, Some(5)),
            request(3, Some(5)),
        ]);

        let numbers: Vec<u64> = sorted.iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn comparator_is_consistent() {
        let merged = request(1, Some(5));
        let unmerged = request(2, None);

        assert_eq!(merge_recency(&merged, &unmerged), Ordering::Less);
        assert_eq!(merge_recency(&unmerged, &merged), Ordering::Greater);
        assert_eq!(merge_recency(&unmerged, &unmerged), Ordering::Equal);
    }
}
