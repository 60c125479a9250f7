pub mod activities;
pub mod models;

// Re-export commonly used types
pub use activities::{check_listings, diff_jobs, extract_jobs, CheckOutcome, JobDiff};
pub use models::{JobId, JobRecord, JobSnapshot, MonitorTarget};
