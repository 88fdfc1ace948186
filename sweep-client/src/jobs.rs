//! Job-related API endpoints

use sweep_core::domain::{JobRecord, JobStatus, ServiceType};

use crate::SweepClient;
use crate::error::{ClientError, Result};
use crate::payload::{JobPayload, UpdateStatusRequest, into_records};

impl SweepClient {
    // =============================================================================
    // Jobs
    // =============================================================================

    /// List every job known to the store
    ///
    /// Dates are normalized on the way in; rows with an unreadable date are
    /// kept with no date rather than dropped.
    pub async fn list_jobs(&self) -> Result<Vec<JobRecord>> {
        let url = format!("{}/api/jobs", self.base_url);
        let response = self.client.get(&url).send().await?;

        let payloads: Vec<JobPayload> = self.handle_response(response).await?;
        tracing::debug!("Fetched {} job(s) from {}", payloads.len(), url);

        Ok(into_records(payloads))
    }

    /// Get a job by ID
    pub async fn get_job(&self, job_id: &str) -> Result<JobRecord> {
        let url = format!("{}/api/jobs/{}", self.base_url, job_id);
        let response = self.client.get(&url).send().await?;

        let payload: JobPayload = self.handle_response(response).await.map_err(|e| {
            if e.is_not_found() {
                ClientError::NotFound(format!("job {}", job_id))
            } else {
                e
            }
        })?;

        Ok(payload.into())
    }

    /// Change a job's status
    ///
    /// # Returns
    /// The updated record, ready to be merged into the loaded collection
    pub async fn update_job_status(&self, job_id: &str, status: JobStatus) -> Result<JobRecord> {
        let url = format!("{}/api/jobs/{}/status", self.base_url, job_id);
        let response = self
            .client
            .patch(&url)
            .json(&UpdateStatusRequest { status })
            .send()
            .await?;

        let payload: JobPayload = self.handle_response(response).await?;
        Ok(payload.into())
    }

    // =============================================================================
    // Service Types
    // =============================================================================

    /// List the service type catalog
    pub async fn list_service_types(&self) -> Result<Vec<ServiceType>> {
        let url = format!("{}/api/service-types", self.base_url);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }
}
