//! Property tests for snapshot diffing.

mod common;

use common::snapshot_of;
use job_monitor_core::domains::listings::activities::diff_jobs;
use job_monitor_core::domains::listings::models::JobSnapshot;
use proptest::prelude::*;
use std::collections::BTreeSet;

fn titles() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-E][a-c]{0,2}", 0..8)
}

fn build(titles: &[String]) -> JobSnapshot {
    let refs: Vec<&str> = titles.iter().map(String::as_str).collect();
    snapshot_of(&refs)
}

proptest! {
    #[test]
    fn added_never_in_previous_and_removed_never_in_current(
        prev in titles(),
        curr in titles(),
    ) {
        let previous = build(&prev);
        let current = build(&curr);
        let diff = diff_jobs(&previous, &current);

        for job in &diff.added {
            prop_assert!(!previous.contains_key(&job.id()));
            prop_assert!(current.contains_key(&job.id()));
        }
        for job in &diff.removed {
            prop_assert!(!current.contains_key(&job.id()));
            prop_assert!(previous.contains_key(&job.id()));
        }
    }

    #[test]
    fn diff_accounts_for_every_key_difference(prev in titles(), curr in titles()) {
        let previous = build(&prev);
        let current = build(&curr);
        let diff = diff_jobs(&previous, &current);

        let prev_keys: BTreeSet<_> = previous.keys().cloned().collect();
        let curr_keys: BTreeSet<_> = current.keys().cloned().collect();
        let added: BTreeSet<_> = diff.added.iter().map(|j| j.id()).collect();
        let removed: BTreeSet<_> = diff.removed.iter().map(|j| j.id()).collect();

        prop_assert_eq!(added, curr_keys.difference(&prev_keys).cloned().collect::<BTreeSet<_>>());
        prop_assert_eq!(removed, prev_keys.difference(&curr_keys).cloned().collect::<BTreeSet<_>>());
    }

    #[test]
    fn diff_is_deterministic(prev in titles(), curr in titles()) {
        let previous = build(&prev);
        let current = build(&curr);

        prop_assert_eq!(diff_jobs(&previous, &current), diff_jobs(&previous, &current));
    }

    #[test]
    fn snapshot_compared_with_itself_is_empty(curr in titles()) {
        let current = build(&curr);
        prop_assert!(diff_jobs(&current, &current).is_empty());
    }
}
