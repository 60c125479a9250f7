use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::domains::listings::models::MonitorTarget;

/// Token value shipped in example env files; treated as "not configured".
pub const PLACEHOLDER_BOT_TOKEN: &str = "YOUR_BOT_TOKEN_HERE";

const DEFAULT_BUCKET_NAME: &str = "loblaw-job-monitor-cache";
const DEFAULT_SNAPSHOT_KEY: &str = "loblaw_windsor_jobs.json";

/// Where the last-known job snapshot lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotBackend {
    S3 { bucket: String, key: String },
    File { path: PathBuf },
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_id: Option<String>,
    pub snapshot_backend: SnapshotBackend,
    pub target: MonitorTarget,
    pub check_interval_minutes: u32,
    pub fetch_timeout: Duration,
    pub storage_timeout: Duration,
    pub notify_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let snapshot_backend = match env::var("SNAPSHOT_PATH").ok().filter(|p| !p.is_empty()) {
            Some(path) => SnapshotBackend::File {
                path: PathBuf::from(path),
            },
            None => SnapshotBackend::S3 {
                bucket: env::var("S3_BUCKET_NAME")
                    .unwrap_or_else(|_| DEFAULT_BUCKET_NAME.to_string()),
                key: env::var("SNAPSHOT_KEY")
                    .unwrap_or_else(|_| DEFAULT_SNAPSHOT_KEY.to_string()),
            },
        };

        let mut target = MonitorTarget::default();
        if let Ok(url) = env::var("MONITOR_URL") {
            target.url = url;
        }

        Ok(Self {
            telegram_bot_token: env::var("TELEGRAM_BOT_TOKEN").ok(),
            telegram_chat_id: env::var("TELEGRAM_CHAT_ID").ok(),
            snapshot_backend,
            target,
            check_interval_minutes: parse_or("CHECK_INTERVAL_MINUTES", 5)?,
            fetch_timeout: Duration::from_secs(parse_or("FETCH_TIMEOUT_SECS", 30)?),
            storage_timeout: Duration::from_secs(parse_or("STORAGE_TIMEOUT_SECS", 10)?),
            notify_timeout: Duration::from_secs(parse_or("NOTIFY_TIMEOUT_SECS", 10)?),
        })
    }

    /// Why the notification channel can't be used, if it can't.
    pub fn telegram_misconfiguration(&self) -> Option<&'static str> {
        match self.telegram_bot_token.as_deref().map(str::trim) {
            None | Some("") => return Some("TELEGRAM_BOT_TOKEN is not set"),
            Some(PLACEHOLDER_BOT_TOKEN) => {
                return Some("TELEGRAM_BOT_TOKEN is still the placeholder value")
            }
            Some(_) => {}
        }

        match self.telegram_chat_id.as_deref().map(str::trim) {
            None | Some("") => Some("TELEGRAM_CHAT_ID is not set"),
            Some(_) => None,
        }
    }

    pub fn is_telegram_configured(&self) -> bool {
        self.telegram_misconfiguration().is_none()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            telegram_bot_token: None,
            telegram_chat_id: None,
            snapshot_backend: SnapshotBackend::S3 {
                bucket: DEFAULT_BUCKET_NAME.to_string(),
                key: DEFAULT_SNAPSHOT_KEY.to_string(),
            },
            target: MonitorTarget::default(),
            check_interval_minutes: 5,
            fetch_timeout: Duration::from_secs(30),
            storage_timeout: Duration::from_secs(10),
            notify_timeout: Duration::from_secs(10),
        }
    }
}

fn parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a valid number", name)),
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_credentials(token: Option<&str>, chat: Option<&str>) -> Config {
        Config {
            telegram_bot_token: token.map(String::from),
            telegram_chat_id: chat.map(String::from),
            ..Config::default()
        }
    }

    #[test]
    fn missing_token_is_not_configured() {
        assert!(!with_credentials(None, Some("1")).is_telegram_configured());
        assert!(!with_credentials(Some("  "), Some("1")).is_telegram_configured());
    }

    #[test]
    fn placeholder_token_is_not_configured() {
        let config = with_credentials(Some(PLACEHOLDER_BOT_TOKEN), Some("1"));
        assert_eq!(
            config.telegram_misconfiguration(),
            Some("TELEGRAM_BOT_TOKEN is still the placeholder value")
        );
    }

    #[test]
    fn missing_chat_id_is_not_configured() {
        let config = with_credentials(Some("123:abc"), None);
        assert_eq!(
            config.telegram_misconfiguration(),
            Some("TELEGRAM_CHAT_ID is not set")
        );
    }

    #[test]
    fn real_credentials_are_configured() {
        assert!(with_credentials(Some("123:abc"), Some("-1001")).is_telegram_configured());
    }

    #[test]
    fn defaults_point_at_original_bucket() {
        let config = Config::default();
        assert_eq!(
            config.snapshot_backend,
            SnapshotBackend::S3 {
                bucket: "loblaw-job-monitor-cache".to_string(),
                key: "loblaw_windsor_jobs.json".to_string(),
            }
        );
        assert_eq!(config.fetch_timeout, Duration::from_secs(30));
    }
}
