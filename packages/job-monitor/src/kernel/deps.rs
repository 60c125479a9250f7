//! Monitor dependencies (using traits for testability)
//!
//! Built once per process and shared by every check run. All external
//! services sit behind trait objects so tests can swap them out.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::sync::Arc;
use telegram::{TelegramOptions, TelegramService};

use crate::config::{Config, SnapshotBackend};
use crate::kernel::{
    BaseNotifier, BasePageFetcher, BaseSnapshotStore, FileSnapshotStore, HttpPageFetcher,
    S3SnapshotStore,
};

// =============================================================================
// TelegramService Adapter (implements BaseNotifier trait)
// =============================================================================

/// Wrapper around TelegramService that implements BaseNotifier trait
pub struct TelegramAdapter(pub Arc<TelegramService>);

impl TelegramAdapter {
    pub fn new(service: Arc<TelegramService>) -> Self {
        Self(service)
    }
}

#[async_trait]
impl BaseNotifier for TelegramAdapter {
    async fn send_message(&self, html: &str) -> Result<()> {
        self.0
            .send_html(html)
            .await
            .map(|_| ())
            .map_err(anyhow::Error::from)
    }
}

// =============================================================================
// MonitorDeps
// =============================================================================

#[derive(Clone)]
pub struct MonitorDeps {
    pub fetcher: Arc<dyn BasePageFetcher>,
    pub snapshot_store: Arc<dyn BaseSnapshotStore>,
    pub notifier: Arc<dyn BaseNotifier>,
}

impl MonitorDeps {
    pub fn new(
        fetcher: Arc<dyn BasePageFetcher>,
        snapshot_store: Arc<dyn BaseSnapshotStore>,
        notifier: Arc<dyn BaseNotifier>,
    ) -> Self {
        Self {
            fetcher,
            snapshot_store,
            notifier,
        }
    }

    /// Wire production implementations from configuration.
    ///
    /// Nothing here touches the network. Missing Telegram credentials are
    /// not an error here; the invocation handler reports them before any
    /// network call is made.
    pub fn from_config(config: &Config) -> Result<Self> {
        let fetcher = HttpPageFetcher::new(config.fetch_timeout)?;

        let snapshot_store: Arc<dyn BaseSnapshotStore> = match &config.snapshot_backend {
            SnapshotBackend::S3 { bucket, key } => Arc::new(S3SnapshotStore::from_env(
                bucket.clone(),
                key.clone(),
                config.storage_timeout,
            )),
            SnapshotBackend::File { path } => {
                Arc::new(FileSnapshotStore::new(path.clone(), config.storage_timeout))
            }
        };

        let options = TelegramOptions::new(
            config.telegram_bot_token.clone().unwrap_or_default(),
            config.telegram_chat_id.clone().unwrap_or_default(),
        )
        .with_timeout(config.notify_timeout);
        let telegram = TelegramService::new(options).context("Failed to create Telegram client")?;

        Ok(Self::new(
            Arc::new(fetcher),
            snapshot_store,
            Arc::new(TelegramAdapter::new(Arc::new(telegram))),
        ))
    }
}
