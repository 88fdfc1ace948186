//! Job sources
//!
//! Anything that can hand the board a job collection and apply a status
//! change. The HTTP client is the production source; the CLI adds a
//! file-backed one and tests use in-memory ones.

use async_trait::async_trait;
use sweep_core::domain::{JobRecord, JobStatus, ServiceType};

use crate::SweepClient;
use crate::error::Result;

#[async_trait]
pub trait JobSource: Send + Sync {
    /// Load the full, unfiltered job collection
    async fn load_jobs(&self) -> Result<Vec<JobRecord>>;

    /// Apply a status change and return the updated record
    async fn update_status(&self, job_id: &str, status: JobStatus) -> Result<JobRecord>;

    /// Load the service type catalog used for chip labels
    async fn load_service_types(&self) -> Result<Vec<ServiceType>> {
        Ok(Vec::new())
    }
}

#[async_trait]
impl JobSource for SweepClient {
    async fn load_jobs(&self) -> Result<Vec<JobRecord>> {
        self.list_jobs().await
    }

    async fn update_status(&self, job_id: &str, status: JobStatus) -> Result<JobRecord> {
        self.update_job_status(job_id, status).await
    }

    async fn load_service_types(&self) -> Result<Vec<ServiceType>> {
        self.list_service_types().await
    }
}

#[async_trait]
impl<T: JobSource + ?Sized> JobSource for Box<T> {
    async fn load_jobs(&self) -> Result<Vec<JobRecord>> {
        (**self).load_jobs().await
    }

    async fn update_status(&self, job_id: &str, status: JobStatus) -> Result<JobRecord> {
        (**self).update_status(job_id, status).await
    }

    async fn load_service_types(&self) -> Result<Vec<ServiceType>> {
        (**self).load_service_types().await
    }
}
