//! Role policy
//!
//! The caller's role is passed in explicitly by whoever builds the view. It
//! decides which job actions are offered and never affects filtering.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::JobStatus;
use crate::error::{DomainError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Manager,
    Cleaner,
    Customer,
}

/// An action a user can take on a job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobAction {
    Start,
    MarkCompleted,
    ReportIssue,
    Cancel,
    Reschedule,
    AssignTeam,
}

impl JobAction {
    pub const ALL: [JobAction; 6] = [
        JobAction::Start,
        JobAction::MarkCompleted,
        JobAction::ReportIssue,
        JobAction::Cancel,
        JobAction::Reschedule,
        JobAction::AssignTeam,
    ];

    /// The action needed to move a job into `target`
    pub fn for_status(target: JobStatus) -> Option<JobAction> {
        match target {
            JobStatus::Scheduled => Some(JobAction::Reschedule),
            JobStatus::InProgress => Some(JobAction::Start),
            JobStatus::Completed => Some(JobAction::MarkCompleted),
            JobStatus::Cancelled => Some(JobAction::Cancel),
            JobStatus::Issue => Some(JobAction::ReportIssue),
            JobStatus::Unrecognized => None,
        }
    }
}

impl fmt::Display for JobAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobAction::Start => write!(f, "start jobs"),
            JobAction::MarkCompleted => write!(f, "mark jobs completed"),
            JobAction::ReportIssue => write!(f, "report issues"),
            JobAction::Cancel => write!(f, "cancel jobs"),
            JobAction::Reschedule => write!(f, "reschedule jobs"),
            JobAction::AssignTeam => write!(f, "assign teams"),
        }
    }
}

impl Role {
    pub fn permits(&self, action: JobAction) -> bool {
        match self {
            Role::Admin | Role::Manager => true,
            Role::Cleaner => matches!(
                action,
                JobAction::Start | JobAction::MarkCompleted | JobAction::ReportIssue
            ),
            Role::Customer => matches!(action, JobAction::Cancel | JobAction::Reschedule),
        }
    }

    pub fn allowed_actions(&self) -> Vec<JobAction> {
        JobAction::ALL
            .into_iter()
            .filter(|action| self.permits(*action))
            .collect()
    }

    /// Check that this role may move a job from `current` to `target`
    ///
    /// # Errors
    /// `NotPermitted` when the role lacks the action, `InvalidTransition`
    /// when the status change itself is not allowed.
    pub fn authorize_status_change(&self, current: JobStatus, target: JobStatus) -> Result<()> {
        let action = JobAction::for_status(target).ok_or_else(|| DomainError::InvalidTransition {
            from: current.to_string(),
            to: target.to_string(),
        })?;

        if !self.permits(action) {
            return Err(DomainError::NotPermitted {
                role: self.to_string(),
                action: action.to_string(),
            });
        }

        if !current.can_transition_to(target) {
            return Err(DomainError::InvalidTransition {
                from: current.to_string(),
                to: target.to_string(),
            });
        }

        Ok(())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Manager => write!(f, "manager"),
            Role::Cleaner => write!(f, "cleaner"),
            Role::Customer => write!(f, "customer"),
        }
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "manager" => Ok(Role::Manager),
            "cleaner" => Ok(Role::Cleaner),
            "customer" => Ok(Role::Customer),
            _ => Err(DomainError::UnknownRole(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_and_manager_have_every_action() {
        assert_eq!(Role::Admin.allowed_actions(), JobAction::ALL.to_vec());
        assert_eq!(Role::Manager.allowed_actions(), JobAction::ALL.to_vec());
    }

    #[test]
    fn test_cleaner_actions() {
        assert_eq!(
            Role::Cleaner.allowed_actions(),
            vec![JobAction::Start, JobAction::MarkCompleted, JobAction::ReportIssue]
        );
        assert!(!Role::Cleaner.permits(JobAction::Cancel));
    }

    #[test]
    fn test_customer_actions() {
        assert!(Role::Customer.permits(JobAction::Reschedule));
        assert!(!Role::Customer.permits(JobAction::MarkCompleted));
    }

    #[test]
    fn test_authorize_status_change() {
        assert!(
            Role::Cleaner
                .authorize_status_change(JobStatus::InProgress, JobStatus::Completed)
                .is_ok()
        );

        assert!(matches!(
            Role::Customer.authorize_status_change(JobStatus::Scheduled, JobStatus::Completed),
            Err(DomainError::NotPermitted { .. })
        ));

        assert!(matches!(
            Role::Admin.authorize_status_change(JobStatus::Completed, JobStatus::Scheduled),
            Err(DomainError::InvalidTransition { .. })
        ));

        assert!(matches!(
            Role::Admin.authorize_status_change(JobStatus::Scheduled, JobStatus::Unrecognized),
            Err(DomainError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_role_parse() {
        assert_eq!("Cleaner".parse::<Role>(), Ok(Role::Cleaner));
        assert!("guest".parse::<Role>().is_err());
        assert_eq!(Role::default(), Role::Manager);
    }
}
