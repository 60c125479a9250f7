//! One monitoring pass: fetch, extract, compare with the snapshot, notify.
//!
//! ```text
//! fetch + extract ──err──► MonitorError::Fetch (no notify, no save)
//!      │
//! load previous (never fails)
//!      │
//!      ├─ empty ──► save current ─► "started" message ─► Started
//!      │
//!      └─ diff ──┬─ empty ──► NoChanges (no notify, no save)
//!                └─ else ───► "changes" message ─► save current ─► Changed
//! ```

use chrono::{Local, NaiveDateTime};
use tracing::info;

use super::diff_jobs::diff_jobs;
use super::extract_jobs::extract_jobs;
use super::messages::{format_changes_message, format_started_message};
use super::notify::notify;
use super::snapshot::{load_previous_jobs, save_current_jobs};
use crate::domains::listings::models::{JobSnapshot, MonitorTarget};
use crate::error::{MonitorError, Result};
use crate::kernel::MonitorDeps;

/// How a successful pass ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// No prior snapshot; current jobs were recorded as the baseline.
    Started { tracked: usize },
    NoChanges,
    Changed { added: usize, removed: usize },
}

/// Fetch the listing page and extract its jobs.
pub async fn fetch_current_jobs(
    deps: &MonitorDeps,
    target: &MonitorTarget,
    found_at: NaiveDateTime,
) -> Result<JobSnapshot> {
    let html = deps
        .fetcher
        .fetch(&target.url)
        .await
        .map_err(MonitorError::Fetch)?;

    extract_jobs(&html, target, found_at).map_err(MonitorError::Fetch)
}

pub async fn check_listings(
    deps: &MonitorDeps,
    target: &MonitorTarget,
    check_interval_minutes: u32,
) -> Result<CheckOutcome> {
    let now = Local::now().naive_local();

    let current = fetch_current_jobs(deps, target, now).await?;
    info!(count = current.len(), "Found jobs on the page");

    let previous = load_previous_jobs(deps.snapshot_store.as_ref()).await;

    if previous.is_empty() {
        info!("First run - saving initial job listings");
        save_current_jobs(deps.snapshot_store.as_ref(), &current).await;

        let message = format_started_message(target, &current, check_interval_minutes);
        notify(deps.notifier.as_ref(), &message).await;

        return Ok(CheckOutcome::Started {
            tracked: current.len(),
        });
    }

    let diff = diff_jobs(&previous, &current);
    if diff.is_empty() {
        info!("No changes detected");
        return Ok(CheckOutcome::NoChanges);
    }

    info!(
        added = diff.added.len(),
        removed = diff.removed.len(),
        "Changes detected"
    );

    let message = format_changes_message(target, &diff, current.len(), now);
    notify(deps.notifier.as_ref(), &message).await;
    save_current_jobs(deps.snapshot_store.as_ref(), &current).await;

    Ok(CheckOutcome::Changed {
        added: diff.added.len(),
        removed: diff.removed.len(),
    })
}
