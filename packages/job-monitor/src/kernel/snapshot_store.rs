//! Durable homes for the job snapshot: an S3 object in production, a JSON
//! file for local runs.

use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::OnceCell;
use tokio::time::timeout;
use tracing::debug;

use super::BaseSnapshotStore;
use crate::domains::listings::models::JobSnapshot;

// =============================================================================
// S3
// =============================================================================

pub struct S3SnapshotStore {
    client: OnceCell<aws_sdk_s3::Client>,
    bucket: String,
    key: String,
    timeout: Duration,
}

impl S3SnapshotStore {
    pub fn new(
        client: aws_sdk_s3::Client,
        bucket: impl Into<String>,
        key: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client: OnceCell::new_with(Some(client)),
            bucket: bucket.into(),
            key: key.into(),
            timeout,
        }
    }

    /// Store backed by the ambient AWS environment (region, credentials).
    ///
    /// The environment is resolved on first load or save, so building the
    /// store never touches the network.
    pub fn from_env(bucket: impl Into<String>, key: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: OnceCell::new(),
            bucket: bucket.into(),
            key: key.into(),
            timeout,
        }
    }

    /// Whether the AWS client has been built yet.
    pub fn is_connected(&self) -> bool {
        self.client.initialized()
    }

    async fn client(&self) -> &aws_sdk_s3::Client {
        self.client
            .get_or_init(|| async {
                debug!("Resolving AWS configuration");
                let sdk_config =
                    aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
                aws_sdk_s3::Client::new(&sdk_config)
            })
            .await
    }
}

#[async_trait]
impl BaseSnapshotStore for S3SnapshotStore {
    async fn load(&self) -> Result<Option<JobSnapshot>> {
        debug!(bucket = %self.bucket, key = %self.key, "Loading snapshot from S3");

        let request = async {
            self.client()
                .await
                .get_object()
                .bucket(&self.bucket)
                .key(&self.key)
                .send()
                .await
        };

        let output = match timeout(self.timeout, request)
            .await
            .context("Timed out reading snapshot from S3")?
        {
            Ok(output) => output,
            Err(err) => {
                if err
                    .as_service_error()
                    .map(|e| e.is_no_such_key())
                    .unwrap_or(false)
                {
                    return Ok(None);
                }
                return Err(anyhow::Error::new(err).context("Failed to read snapshot from S3"));
            }
        };

        let bytes = timeout(self.timeout, output.body.collect())
            .await
            .context("Timed out reading snapshot body")?
            .context("Failed to read snapshot body")?
            .into_bytes();

        let snapshot = serde_json::from_slice(&bytes).context("Snapshot is not valid JSON")?;
        Ok(Some(snapshot))
    }

    async fn save(&self, snapshot: &JobSnapshot) -> Result<()> {
        let body = serde_json::to_vec_pretty(snapshot).context("Failed to serialize snapshot")?;

        let request = async {
            self.client()
                .await
                .put_object()
                .bucket(&self.bucket)
                .key(&self.key)
                .content_type("application/json")
                .body(ByteStream::from(body))
                .send()
                .await
        };

        timeout(self.timeout, request)
            .await
            .context("Timed out writing snapshot to S3")?
            .context("Failed to write snapshot to S3")?;

        Ok(())
    }
}

// =============================================================================
// Local file
// =============================================================================

pub struct FileSnapshotStore {
    path: PathBuf,
    timeout: Duration,
}

impl FileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            path: path.into(),
            timeout,
        }
    }
}

#[async_trait]
impl BaseSnapshotStore for FileSnapshotStore {
    async fn load(&self) -> Result<Option<JobSnapshot>> {
        debug!(path = %self.path.display(), "Loading snapshot from file");

        let read = timeout(self.timeout, tokio::fs::read(&self.path))
            .await
            .context("Timed out reading snapshot file")?;

        let bytes = match read {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read snapshot file {}", self.path.display())
                })
            }
        };

        let snapshot = serde_json::from_slice(&bytes).context("Snapshot is not valid JSON")?;
        Ok(Some(snapshot))
    }

    async fn save(&self, snapshot: &JobSnapshot) -> Result<()> {
        let body = serde_json::to_vec_pretty(snapshot).context("Failed to serialize snapshot")?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        timeout(self.timeout, tokio::fs::write(&self.path, body))
            .await
            .context("Timed out writing snapshot file")?
            .with_context(|| format!("Failed to write snapshot file {}", self.path.display()))
    }
}
