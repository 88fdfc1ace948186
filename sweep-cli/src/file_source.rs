//! File-backed job source
//!
//! Reads a JSON array of job payloads, the same shape the job store serves.
//! A status change rewrites only the `status` field of the target row; every
//! other row is written back as it was read.

use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;
use sweep_client::payload::{JobPayload, into_records};
use sweep_client::{ClientError, JobSource, Result};
use sweep_core::domain::{JobRecord, JobStatus};

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    async fn read_payloads(&self) -> Result<Vec<JobPayload>> {
        let contents = tokio::fs::read_to_string(&self.path).await?;
        serde_json::from_str(&contents).map_err(|e| self.parse_error(e))
    }

    /// Rows as raw JSON, so fields the payload does not model survive a write
    async fn read_rows(&self) -> Result<Vec<Value>> {
        let contents = tokio::fs::read_to_string(&self.path).await?;
        serde_json::from_str(&contents).map_err(|e| self.parse_error(e))
    }

    fn parse_error(&self, e: serde_json::Error) -> ClientError {
        ClientError::ParseError(format!("{}: {}", self.path.display(), e))
    }
}

#[async_trait]
impl JobSource for FileSource {
    async fn load_jobs(&self) -> Result<Vec<JobRecord>> {
        Ok(into_records(self.read_payloads().await?))
    }

    async fn update_status(&self, job_id: &str, status: JobStatus) -> Result<JobRecord> {
        let mut rows = self.read_rows().await?;

        let fields = rows
            .iter_mut()
            .filter_map(Value::as_object_mut)
            .find(|row| row.get("id").and_then(Value::as_str) == Some(job_id))
            .ok_or_else(|| ClientError::NotFound(format!("job {}", job_id)))?;
        fields.insert(
            "status".to_string(),
            Value::String(status.as_str().to_string()),
        );

        let updated: JobPayload = serde_json::from_value(Value::Object(fields.clone()))
            .map_err(|e| self.parse_error(e))?;

        let contents =
            serde_json::to_string_pretty(&rows).map_err(|e| self.parse_error(e))?;
        tokio::fs::write(&self.path, contents).await?;

        tracing::info!("Wrote status {} for job {} to {}", status, job_id, self.path.display());

        Ok(updated.into())
    }
}
