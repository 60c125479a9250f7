//! Failures visible to whoever invoked a check.
//!
//! Everything downstream of a successful fetch (snapshot I/O, notification
//! delivery) degrades gracefully and never shows up here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MonitorError {
    /// Notification credentials missing or still the placeholder
    #[error("not configured: {reason}")]
    NotConfigured { reason: String },

    /// Listing page couldn't be fetched or processed
    #[error("failed to fetch job listings: {0:#}")]
    Fetch(anyhow::Error),
}

impl MonitorError {
    /// HTTP-style status reported to the invoker.
    pub fn status_code(&self) -> u16 {
        match self {
            MonitorError::NotConfigured { .. } => 400,
            MonitorError::Fetch(_) => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, MonitorError>;
