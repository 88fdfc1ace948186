//! View mode selection

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// How the filtered job list is presented
///
/// Orthogonal to filtering: switching modes never changes which jobs are visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
    Calendar,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Grid => write!(f, "grid"),
            ViewMode::List => write!(f, "list"),
            ViewMode::Calendar => write!(f, "calendar"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            "calendar" => Ok(ViewMode::Calendar),
            _ => Err(DomainError::UnknownViewMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_mode_parse_and_display() {
        for mode in [ViewMode::Grid, ViewMode::List, ViewMode::Calendar] {
            assert_eq!(mode.to_string().parse::<ViewMode>(), Ok(mode));
        }
        assert_eq!("Calendar".parse::<ViewMode>(), Ok(ViewMode::Calendar));
        assert!("kanban".parse::<ViewMode>().is_err());
    }
}
