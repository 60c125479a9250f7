// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Policies like "a failed snapshot read means first run" live in domain activities.
//
// Naming convention: Base* for trait names (e.g., BasePageFetcher, BaseNotifier)

use anyhow::Result;
use async_trait::async_trait;

use crate::domains::listings::models::JobSnapshot;

// =============================================================================
// Page Fetcher Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BasePageFetcher: Send + Sync {
    /// Fetch raw markup for a URL. Non-success statuses are errors.
    async fn fetch(&self, url: &str) -> Result<String>;
}

// =============================================================================
// Snapshot Store Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BaseSnapshotStore: Send + Sync {
    /// Read the last saved snapshot. `Ok(None)` when nothing has been saved yet.
    async fn load(&self) -> Result<Option<JobSnapshot>>;

    /// Replace the stored snapshot wholesale.
    async fn save(&self, snapshot: &JobSnapshot) -> Result<()>;
}

// =============================================================================
// Notifier Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BaseNotifier: Send + Sync {
    /// Deliver a preformatted HTML message to the configured destination.
    async fn send_message(&self, html: &str) -> Result<()>;
}
