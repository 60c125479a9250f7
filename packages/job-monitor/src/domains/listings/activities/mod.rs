pub mod check_listings;
pub mod diff_jobs;
pub mod extract_jobs;
pub mod messages;
pub mod notify;
pub mod snapshot;

pub use check_listings::{check_listings, fetch_current_jobs, CheckOutcome};
pub use diff_jobs::{diff_jobs, JobDiff};
pub use extract_jobs::{extract_jobs, CardOutcome, SkipReason};
pub use messages::{format_changes_message, format_job_details, format_started_message};
pub use notify::notify;
pub use snapshot::{load_previous_jobs, save_current_jobs};
