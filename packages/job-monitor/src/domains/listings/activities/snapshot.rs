//! Snapshot load/save policy.
//!
//! Reads never fail a run: anything short of a readable snapshot is treated
//! as "no snapshot yet". Writes are attempted once; failures are logged.

use tracing::{info, warn};

use crate::domains::listings::models::JobSnapshot;
use crate::kernel::BaseSnapshotStore;

/// Last saved jobs, or an empty snapshot if none can be read.
pub async fn load_previous_jobs(store: &dyn BaseSnapshotStore) -> JobSnapshot {
    match store.load().await {
        Ok(Some(snapshot)) => snapshot,
        Ok(None) => {
            info!("No cached jobs found");
            JobSnapshot::new()
        }
        Err(e) => {
            warn!(error = %format!("{:#}", e), "Failed to load cached jobs, treating as first run");
            JobSnapshot::new()
        }
    }
}

/// Replace the stored snapshot. Returns whether the write succeeded.
pub async fn save_current_jobs(store: &dyn BaseSnapshotStore, jobs: &JobSnapshot) -> bool {
    match store.save(jobs).await {
        Ok(()) => {
            info!(count = jobs.len(), "Jobs snapshot saved");
            true
        }
        Err(e) => {
            warn!(error = %format!("{:#}", e), "Failed to save jobs snapshot");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::test_dependencies::MemorySnapshotStore;

    #[tokio::test]
    async fn read_failure_downgrades_to_empty() {
        let store = MemorySnapshotStore::empty().failing_load();
        assert!(load_previous_jobs(&store).await.is_empty());
    }

    #[tokio::test]
    async fn absent_snapshot_is_empty() {
        let store = MemorySnapshotStore::empty();
        assert!(load_previous_jobs(&store).await.is_empty());
    }

    #[tokio::test]
    async fn write_failure_is_reported_not_raised() {
        let store = MemorySnapshotStore::empty().failing_save();
        assert!(!save_current_jobs(&store, &JobSnapshot::new()).await);
        assert_eq!(store.saves().len(), 1);
    }
}
