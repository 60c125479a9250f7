pub mod job;
pub mod target;

pub use job::{JobId, JobRecord, JobSnapshot, DISTANCE_NOT_APPLICABLE, FOUND_DATE_FORMAT};
pub use target::MonitorTarget;
