//! Error types for Sweep domain operations
//!
//! The filter engine itself is total and never produces these. They cover
//! parsing user or upstream input into domain values.

use thiserror::Error;

/// Result type alias for domain operations
pub type Result<T> = std::result::Result<T, DomainError>;

/// Errors raised while turning raw input into domain values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Status name outside the closed status set
    #[error("Unknown job status: {0}")]
    UnknownStatus(String),

    /// Date string in none of the accepted formats
    #[error("Unrecognized date: {0}")]
    InvalidDate(String),

    /// View mode name that is not grid, list or calendar
    #[error("Unknown view mode: {0}")]
    UnknownViewMode(String),

    /// Role name outside the known roles
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// Sort key that is not recognized
    #[error("Unknown sort key: {0}")]
    UnknownSort(String),

    /// Status change rejected by the transition rules
    #[error("Cannot move job from {from} to {to}")]
    InvalidTransition {
        /// Current status
        from: String,
        /// Requested status
        to: String,
    },

    /// Role is not allowed to perform the action
    #[error("Role {role} may not {action}")]
    NotPermitted {
        /// Role attempting the action
        role: String,
        /// Action that was refused
        action: String,
    },
}
