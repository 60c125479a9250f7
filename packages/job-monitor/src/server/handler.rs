//! Invocation entry point shared by the CLI, the cron loop and the
//! serverless runtime.

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::config::Config;
use crate::domains::listings::activities::{check_listings, CheckOutcome};
use crate::domains::listings::models::FOUND_DATE_FORMAT;
use crate::error::{MonitorError, Result};
use crate::kernel::MonitorDeps;

/// Status/body pair returned to whatever triggered the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl InvocationResponse {
    pub fn is_success(&self) -> bool {
        self.status_code == 200
    }

    fn ok(body: impl Into<String>) -> Self {
        Self {
            status_code: 200,
            body: body.into(),
        }
    }
}

impl From<Result<CheckOutcome>> for InvocationResponse {
    fn from(result: Result<CheckOutcome>) -> Self {
        match result {
            Ok(CheckOutcome::Started { .. }) => Self::ok("Monitor started successfully"),
            Ok(CheckOutcome::NoChanges) => Self::ok("No changes detected"),
            Ok(CheckOutcome::Changed { added, removed }) => {
                Self::ok(format!("Changes detected: +{} -{}", added, removed))
            }
            Err(e) => {
                let body = match &e {
                    MonitorError::NotConfigured { .. } => "Telegram bot not configured!",
                    MonitorError::Fetch(_) => "Failed to fetch jobs",
                };
                Self {
                    status_code: e.status_code(),
                    body: body.to_string(),
                }
            }
        }
    }
}

/// Run one check. The event payload is accepted for runtime compatibility
/// and otherwise ignored.
pub async fn handle_invocation(
    config: &Config,
    deps: &MonitorDeps,
    _event: &serde_json::Value,
) -> InvocationResponse {
    let run_id = Uuid::new_v4();

    async move {
        info!(at = %Local::now().format(FOUND_DATE_FORMAT), "Checking job listings");

        let result = run_check(config, deps).await;
        match &result {
            Ok(outcome) => info!(?outcome, "Check finished"),
            Err(MonitorError::NotConfigured { reason }) => warn!(%reason, "Check skipped"),
            Err(e) => error!(error = %e, "Check failed"),
        }

        InvocationResponse::from(result)
    }
    .instrument(info_span!("check_listings", %run_id))
    .await
}

async fn run_check(config: &Config, deps: &MonitorDeps) -> Result<CheckOutcome> {
    if let Some(reason) = config.telegram_misconfiguration() {
        return Err(MonitorError::NotConfigured {
            reason: reason.to_string(),
        });
    }

    check_listings(deps, &config.target, config.check_interval_minutes).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_uses_runtime_field_names() {
        let value = serde_json::to_value(InvocationResponse::ok("No changes detected")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "statusCode": 200, "body": "No changes detected" })
        );
    }

    #[test]
    fn outcomes_map_to_status_and_body() {
        let changed = InvocationResponse::from(Ok(CheckOutcome::Changed {
            added: 1,
            removed: 2,
        }));
        assert_eq!(changed, InvocationResponse::ok("Changes detected: +1 -2"));

        let fetch_failed =
            InvocationResponse::from(Err(MonitorError::Fetch(anyhow::anyhow!("HTTP 503"))));
        assert_eq!(fetch_failed.status_code, 500);
        assert_eq!(fetch_failed.body, "Failed to fetch jobs");

        let not_configured = InvocationResponse::from(Err(MonitorError::NotConfigured {
            reason: "TELEGRAM_BOT_TOKEN is not set".to_string(),
        }));
        assert_eq!(not_configured.status_code, 400);
        assert!(!not_configured.is_success());
    }
}
