//! Kernel module - infrastructure and dependencies.

pub mod deps;
pub mod page_fetcher;
pub mod snapshot_store;
pub mod test_dependencies;
pub mod traits;

pub use deps::{MonitorDeps, TelegramAdapter};
pub use page_fetcher::HttpPageFetcher;
pub use snapshot_store::{FileSnapshotStore, S3SnapshotStore};
pub use test_dependencies::TestDependencies;
pub use traits::*;
