use crate::domains::listings::models::{JobRecord, JobSnapshot};

/// Jobs that appeared or disappeared between two snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobDiff {
    pub added: Vec<JobRecord>,
    pub removed: Vec<JobRecord>,
}

impl JobDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Compare snapshots by identity only.
///
/// `added` follows `current` order, `removed` follows `previous` order. A
/// job whose identity is in both is unchanged even if other fields differ.
pub fn diff_jobs(previous: &JobSnapshot, current: &JobSnapshot) -> JobDiff {
    let added = current
        .iter()
        .filter(|(id, _)| !previous.contains_key(*id))
        .map(|(_, job)| job.clone())
        .collect();

    let removed = previous
        .iter()
        .filter(|(id, _)| !current.contains_key(*id))
        .map(|(_, job)| job.clone())
        .collect();

    JobDiff { added, removed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::listings::models::JobId;
    use chrono::NaiveDate;

    fn snapshot(titles: &[&str]) -> JobSnapshot {
        let found = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        titles
            .iter()
            .map(|title| {
                let job = JobRecord {
                    title: title.to_string(),
                    location: "Windsor, ON".to_string(),
                    brand: "Loblaw".to_string(),
                    distance: None,
                    link: format!("https://careers.loblaw.ca/jobs/{}", title),
                    found_date: found,
                };
                (JobId::from_parts(title, "Windsor, ON"), job)
            })
            .collect()
    }

    fn titles(jobs: &[JobRecord]) -> Vec<&str> {
        jobs.iter().map(|j| j.title.as_str()).collect()
    }

    #[test]
    fn reports_added_and_removed() {
        let diff = diff_jobs(&snapshot(&["X", "Y"]), &snapshot(&["X", "Z"]));

        assert_eq!(titles(&diff.added), vec!["Z"]);
        assert_eq!(titles(&diff.removed), vec!["Y"]);
        assert!(!diff.is_empty());
    }

    #[test]
    fn identical_snapshots_have_no_diff() {
        let jobs = snapshot(&["A", "B", "C"]);
        assert!(diff_jobs(&jobs, &jobs).is_empty());
    }

    #[test]
    fn changed_fields_with_same_identity_are_not_a_change() {
        let previous = snapshot(&["A"]);
        let mut current = previous.clone();
        current.values_mut().for_each(|job| job.brand = "Zehrs".to_string());

        assert!(diff_jobs(&previous, &current).is_empty());
    }

    #[test]
    fn added_keeps_page_order() {
        let diff = diff_jobs(&snapshot(&[]), &snapshot(&["C", "A", "B"]));
        assert_eq!(titles(&diff.added), vec!["C", "A", "B"]);
    }
}
