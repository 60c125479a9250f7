// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into MonitorDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::{BaseNotifier, BasePageFetcher, BaseSnapshotStore, MonitorDeps};
use crate::domains::listings::models::JobSnapshot;

// =============================================================================
// Mock Page Fetcher
// =============================================================================

pub struct MockPageFetcher {
    response: Mutex<std::result::Result<String, String>>,
    calls: Mutex<Vec<String>>,
}

impl MockPageFetcher {
    pub fn new() -> Self {
        Self::with_html("<html><body></body></html>")
    }

    pub fn with_html(html: &str) -> Self {
        Self {
            response: Mutex::new(Ok(html.to_string())),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every fetch fails with the given message.
    pub fn failing(message: &str) -> Self {
        Self {
            response: Mutex::new(Err(message.to_string())),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Get all URLs that were fetched
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockPageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BasePageFetcher for MockPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        self.calls.lock().unwrap().push(url.to_string());

        match &*self.response.lock().unwrap() {
            Ok(html) => Ok(html.clone()),
            Err(message) => Err(anyhow::anyhow!("{}", message)),
        }
    }
}

// =============================================================================
// In-memory Snapshot Store
// =============================================================================

pub struct MemorySnapshotStore {
    current: Mutex<Option<JobSnapshot>>,
    fail_load: bool,
    fail_save: bool,
    load_calls: Mutex<usize>,
    saves: Mutex<Vec<JobSnapshot>>,
}

impl MemorySnapshotStore {
    /// A store that has never been written to.
    pub fn empty() -> Self {
        Self {
            current: Mutex::new(None),
            fail_load: false,
            fail_save: false,
            load_calls: Mutex::new(0),
            saves: Mutex::new(Vec::new()),
        }
    }

    pub fn with_snapshot(snapshot: JobSnapshot) -> Self {
        let store = Self::empty();
        *store.current.lock().unwrap() = Some(snapshot);
        store
    }

    pub fn failing_load(mut self) -> Self {
        self.fail_load = true;
        self
    }

    pub fn failing_save(mut self) -> Self {
        self.fail_save = true;
        self
    }

    /// What a subsequent load would return.
    pub fn current(&self) -> Option<JobSnapshot> {
        self.current.lock().unwrap().clone()
    }

    /// Every snapshot passed to save, successful or not.
    pub fn saves(&self) -> Vec<JobSnapshot> {
        self.saves.lock().unwrap().clone()
    }

    pub fn load_calls(&self) -> usize {
        *self.load_calls.lock().unwrap()
    }
}

impl Default for MemorySnapshotStore {
    fn default() -> Self {
        Self::empty()
    }
}

#[async_trait]
impl BaseSnapshotStore for MemorySnapshotStore {
    async fn load(&self) -> Result<Option<JobSnapshot>> {
        *self.load_calls.lock().unwrap() += 1;

        if self.fail_load {
            anyhow::bail!("simulated snapshot read failure");
        }
        Ok(self.current.lock().unwrap().clone())
    }

    async fn save(&self, snapshot: &JobSnapshot) -> Result<()> {
        self.saves.lock().unwrap().push(snapshot.clone());

        if self.fail_save {
            anyhow::bail!("simulated snapshot write failure");
        }
        *self.current.lock().unwrap() = Some(snapshot.clone());
        Ok(())
    }
}

// =============================================================================
// Spy Notifier
// =============================================================================

pub struct SpyNotifier {
    messages: Mutex<Vec<String>>,
    fail: bool,
}

impl SpyNotifier {
    pub fn new() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// Records messages but reports every delivery as failed.
    pub fn failing() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Default for SpyNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseNotifier for SpyNotifier {
    async fn send_message(&self, html: &str) -> Result<()> {
        self.messages.lock().unwrap().push(html.to_string());

        if self.fail {
            anyhow::bail!("simulated Telegram failure");
        }
        Ok(())
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Mock services for tests. Keeps handles to each mock so assertions can
/// inspect them after a run.
pub struct TestDependencies {
    pub fetcher: Arc<MockPageFetcher>,
    pub snapshot_store: Arc<MemorySnapshotStore>,
    pub notifier: Arc<SpyNotifier>,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            fetcher: Arc::new(MockPageFetcher::new()),
            snapshot_store: Arc::new(MemorySnapshotStore::empty()),
            notifier: Arc::new(SpyNotifier::new()),
        }
    }

    pub fn mock_fetcher(mut self, fetcher: MockPageFetcher) -> Self {
        self.fetcher = Arc::new(fetcher);
        self
    }

    pub fn snapshot_store(mut self, store: MemorySnapshotStore) -> Self {
        self.snapshot_store = Arc::new(store);
        self
    }

    pub fn notifier(mut self, notifier: SpyNotifier) -> Self {
        self.notifier = Arc::new(notifier);
        self
    }

    pub fn deps(&self) -> MonitorDeps {
        MonitorDeps::new(
            self.fetcher.clone(),
            self.snapshot_store.clone(),
            self.notifier.clone(),
        )
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
