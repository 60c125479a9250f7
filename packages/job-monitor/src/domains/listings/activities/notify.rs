use tracing::{info, warn};

use crate::kernel::BaseNotifier;

/// Deliver a message once. Failures are logged, never raised or retried.
pub async fn notify(notifier: &dyn BaseNotifier, html: &str) -> bool {
    match notifier.send_message(html).await {
        Ok(()) => {
            info!("Telegram notification sent");
            true
        }
        Err(e) => {
            warn!(error = %e, "Failed to send Telegram notification");
            false
        }
    }
}
