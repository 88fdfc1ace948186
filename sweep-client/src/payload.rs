//! Wire payloads from the job store
//!
//! The store's `date` column comes back either as an ISO date or as a
//! display string, depending on which view wrote it. Payloads are converted
//! into `JobRecord`s here so nothing downstream sees the raw string.

use serde::{Deserialize, Serialize};
use sweep_core::date::normalize_date;
use sweep_core::domain::{JobRecord, JobStatus, TeamMember};

/// A job row as returned by the job store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPayload {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: String,
    pub status: JobStatus,
    #[serde(default, alias = "customerName")]
    pub customer: String,
    #[serde(default)]
    pub team: Vec<TeamMember>,
    #[serde(default)]
    pub service_type_id: Option<String>,
}

impl From<JobPayload> for JobRecord {
    fn from(payload: JobPayload) -> Self {
        let date = payload
            .date
            .as_deref()
            .and_then(|raw| match normalize_date(raw) {
                Ok(date) => Some(date),
                Err(e) => {
                    tracing::warn!("Job {}: {}", payload.id, e);
                    None
                }
            });

        if !payload.status.is_legal() {
            tracing::warn!("Job {} has a status outside the known set", payload.id);
        }

        JobRecord {
            id: payload.id,
            title: payload.title,
            address: payload.address,
            date,
            time: payload.time,
            status: payload.status,
            customer: payload.customer,
            team: payload.team,
            service_type_id: payload.service_type_id,
        }
    }
}

/// Convert a batch of payloads, keeping their order
pub fn into_records(payloads: Vec<JobPayload>) -> Vec<JobRecord> {
    payloads.into_iter().map(JobRecord::from).collect()
}

/// Body of a status change request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: JobStatus,
}
