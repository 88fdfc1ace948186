//! Job domain types

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A schedulable unit of cleaning work
///
/// Produced by the loader with its date already normalized. The filter
/// engine only ever reads these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub id: String,
    pub title: String,
    pub address: String,
    /// Scheduled calendar date, `None` when the upstream value was unreadable
    pub date: Option<NaiveDate>,
    /// Display-only time slot
    pub time: String,
    pub status: JobStatus,
    /// Customer or business name
    pub customer: String,
    #[serde(default)]
    pub team: Vec<TeamMember>,
    #[serde(default)]
    pub service_type_id: Option<String>,
}

impl JobRecord {
    /// Whether any assigned member has the given id
    pub fn has_member(&self, member_id: &str) -> bool {
        self.team.iter().any(|m| m.id == member_id)
    }
}

/// A team member assigned to a job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Job lifecycle status
///
/// The five named variants form the closed set accepted by the job store.
/// `Unrecognized` stands in for anything else the loader receives so a
/// single bad record cannot fail a whole list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
    Issue,
    #[serde(other)]
    Unrecognized,
}

impl JobStatus {
    /// Every legal status, in display order
    pub const ALL: [JobStatus; 5] = [
        JobStatus::Scheduled,
        JobStatus::InProgress,
        JobStatus::Completed,
        JobStatus::Cancelled,
        JobStatus::Issue,
    ];

    /// Wire name used by the job store
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Scheduled => "scheduled",
            JobStatus::InProgress => "in-progress",
            JobStatus::Completed => "completed",
            JobStatus::Cancelled => "cancelled",
            JobStatus::Issue => "issue",
            JobStatus::Unrecognized => "unrecognized",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            JobStatus::Scheduled => "Scheduled",
            JobStatus::InProgress => "In Progress",
            JobStatus::Completed => "Completed",
            JobStatus::Cancelled => "Cancelled",
            JobStatus::Issue => "Issue",
            JobStatus::Unrecognized => "Unrecognized",
        }
    }

    pub fn is_legal(&self) -> bool {
        !matches!(self, JobStatus::Unrecognized)
    }

    /// Completed and cancelled jobs are closed
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Cancelled)
    }

    /// Whether a job in this status may be moved to `next`
    pub fn can_transition_to(&self, next: JobStatus) -> bool {
        self.is_legal() && next.is_legal() && !self.is_terminal() && *self != next
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for JobStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        JobStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| DomainError::UnknownStatus(s.to_string()))
    }
}
