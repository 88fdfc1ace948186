//! Filter criteria
//!
//! Pure view state: created empty when a job view mounts, mutated by user
//! interaction, cleared per facet or all at once. Never persisted.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::job::JobStatus;

/// One independent filter dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Facet {
    Status,
    DateRange,
    TeamMembers,
    ServiceTypes,
}

impl Facet {
    pub const ALL: [Facet; 4] = [
        Facet::Status,
        Facet::DateRange,
        Facet::TeamMembers,
        Facet::ServiceTypes,
    ];
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Facet::Status => write!(f, "status"),
            Facet::DateRange => write!(f, "date range"),
            Facet::TeamMembers => write!(f, "team"),
            Facet::ServiceTypes => write!(f, "service type"),
        }
    }
}

/// Optional inclusive bounds on the scheduled date
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// True when neither bound is set
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Inclusive containment check against whichever bounds are set
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }
}

/// Currently selected facet values
///
/// Empty sets and unset bounds mean "no restriction" for that facet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub status: BTreeSet<JobStatus>,
    pub date_range: DateRange,
    pub team_members: BTreeSet<String>,
    pub service_types: BTreeSet<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    // =============================================================================
    // Builders
    // =============================================================================

    pub fn with_status(mut self, statuses: impl IntoIterator<Item = JobStatus>) -> Self {
        for status in statuses {
            if status.is_legal() {
                self.status.insert(status);
            }
        }
        self
    }

    pub fn with_date_range(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.date_range = DateRange::new(start, end);
        self
    }

    pub fn with_team_members<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.team_members.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn with_service_types<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.service_types.extend(ids.into_iter().map(Into::into));
        self
    }

    // =============================================================================
    // Mutations
    // =============================================================================

    /// Select or deselect a status. `Unrecognized` can never be selected.
    pub fn toggle_status(&mut self, status: JobStatus) {
        if !status.is_legal() {
            return;
        }
        if !self.status.remove(&status) {
            self.status.insert(status);
        }
    }

    pub fn set_date_start(&mut self, start: Option<NaiveDate>) {
        self.date_range.start = start;
    }

    pub fn set_date_end(&mut self, end: Option<NaiveDate>) {
        self.date_range.end = end;
    }

    pub fn toggle_team_member(&mut self, member_id: &str) {
        if !self.team_members.remove(member_id) {
            self.team_members.insert(member_id.to_string());
        }
    }

    pub fn toggle_service_type(&mut self, service_type_id: &str) {
        if !self.service_types.remove(service_type_id) {
            self.service_types.insert(service_type_id.to_string());
        }
    }

    /// Clear a single facet
    pub fn clear(&mut self, facet: Facet) {
        match facet {
            Facet::Status => self.status.clear(),
            Facet::DateRange => self.date_range = DateRange::default(),
            Facet::TeamMembers => self.team_members.clear(),
            Facet::ServiceTypes => self.service_types.clear(),
        }
    }

    /// Clear every facet
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether the given facet restricts anything
    pub fn is_active(&self, facet: Facet) -> bool {
        match facet {
            Facet::Status => !self.status.is_empty(),
            Facet::DateRange => !self.date_range.is_unbounded(),
            Facet::TeamMembers => !self.team_members.is_empty(),
            Facet::ServiceTypes => !self.service_types.is_empty(),
        }
    }

    /// Facets currently restricting, in display order
    pub fn active_facets(&self) -> Vec<Facet> {
        Facet::ALL
            .into_iter()
            .filter(|facet| self.is_active(*facet))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.active_facets().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_criteria_is_empty() {
        let criteria = FilterCriteria::new();
        assert!(criteria.is_empty());
        assert!(criteria.active_facets().is_empty());
    }

    #[test]
    fn test_toggle_status() {
        let mut criteria = FilterCriteria::new();
        criteria.toggle_status(JobStatus::Issue);
        assert!(criteria.status.contains(&JobStatus::Issue));

        criteria.toggle_status(JobStatus::Issue);
        assert!(criteria.status.is_empty());

        criteria.toggle_status(JobStatus::Unrecognized);
        assert!(criteria.status.is_empty());
    }

    #[test]
    fn test_toggle_team_and_service_type() {
        let mut criteria = FilterCriteria::new();
        criteria.toggle_team_member("t1");
        criteria.toggle_service_type("deep");
        assert_eq!(
            criteria.active_facets(),
            vec![Facet::TeamMembers, Facet::ServiceTypes]
        );

        criteria.toggle_team_member("t1");
        assert!(!criteria.is_active(Facet::TeamMembers));
        assert!(criteria.is_active(Facet::ServiceTypes));
    }

    #[test]
    fn test_clear_single_facet() {
        let mut criteria = FilterCriteria::new()
            .with_status([JobStatus::Scheduled])
            .with_date_range(Some(date(2024, 6, 1)), None)
            .with_team_members(["t1"]);

        criteria.clear(Facet::DateRange);
        assert_eq!(
            criteria.active_facets(),
            vec![Facet::Status, Facet::TeamMembers]
        );
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut criteria = FilterCriteria::new()
            .with_status([JobStatus::Completed])
            .with_service_types(["deep"])
            .with_date_range(None, Some(date(2024, 7, 1)));

        criteria.reset();
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn test_with_status_skips_unrecognized() {
        let criteria = FilterCriteria::new().with_status([JobStatus::Unrecognized]);
        assert!(criteria.is_empty());
    }

    #[test]
    fn test_date_range_contains() {
        let range = DateRange::new(Some(date(2024, 6, 10)), Some(date(2024, 6, 30)));
        assert!(range.contains(date(2024, 6, 10)));
        assert!(range.contains(date(2024, 6, 30)));
        assert!(!range.contains(date(2024, 6, 9)));
        assert!(!range.contains(date(2024, 7, 1)));

        let open_end = DateRange::new(Some(date(2024, 6, 10)), None);
        assert!(open_end.contains(date(2030, 1, 1)));
        assert!(!open_end.contains(date(2024, 6, 1)));

        let open_start = DateRange::new(None, Some(date(2024, 6, 10)));
        assert!(open_start.contains(date(2000, 1, 1)));
        assert!(!open_start.contains(date(2024, 6, 11)));
    }

    #[test]
    fn test_inverted_range_contains_nothing() {
        let range = DateRange::new(Some(date(2024, 7, 1)), Some(date(2024, 6, 1)));
        assert!(!range.contains(date(2024, 6, 15)));
        assert!(!range.contains(date(2024, 7, 1)));
    }
}
