//! Active-filter summary
//!
//! Re-derives a badge count and one dismissible chip per active facet from
//! the current criteria. A facet is counted only when it would actually
//! exclude something.

use std::collections::HashMap;

use serde::Serialize;

use crate::date::format_display;
use crate::domain::{Facet, FilterCriteria, JobRecord, ServiceType};

/// Display names for facet values that are stored as ids
#[derive(Debug, Clone, Default)]
pub struct FacetLabels {
    members: HashMap<String, String>,
    service_types: HashMap<String, String>,
}

impl FacetLabels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect team member names from a job collection
    pub fn from_jobs(jobs: &[JobRecord]) -> Self {
        let mut labels = Self::new();
        for member in jobs.iter().flat_map(|job| &job.team) {
            labels
                .members
                .entry(member.id.clone())
                .or_insert_with(|| member.name.clone());
        }
        labels
    }

    pub fn with_service_types(mut self, catalog: &[ServiceType]) -> Self {
        for service_type in catalog {
            self.service_types
                .insert(service_type.id.clone(), service_type.name.clone());
        }
        self
    }

    pub fn member_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.members.get(id).map(String::as_str).unwrap_or(id)
    }

    pub fn service_type_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.service_types.get(id).map(String::as_str).unwrap_or(id)
    }
}

/// A dismissible label for one active facet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterChip {
    pub facet: Facet,
    pub label: String,
}

/// Count and chips for the currently active facets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActiveFilterSummary {
    chips: Vec<FilterChip>,
}

impl ActiveFilterSummary {
    pub fn from_criteria(criteria: &FilterCriteria, labels: &FacetLabels) -> Self {
        let chips = criteria
            .active_facets()
            .into_iter()
            .map(|facet| FilterChip {
                facet,
                label: chip_label(facet, criteria, labels),
            })
            .collect();

        Self { chips }
    }

    /// Number of active facets, for the badge
    pub fn count(&self) -> usize {
        self.chips.len()
    }

    pub fn chips(&self) -> &[FilterChip] {
        &self.chips
    }

    pub fn is_empty(&self) -> bool {
        self.chips.is_empty()
    }
}

fn chip_label(facet: Facet, criteria: &FilterCriteria, labels: &FacetLabels) -> String {
    match facet {
        Facet::Status => {
            let names: Vec<&str> = criteria.status.iter().map(|s| s.label()).collect();
            format!("Status: {}", names.join(", "))
        }
        Facet::DateRange => {
            let range = criteria.date_range;
            match (range.start, range.end) {
                (Some(start), Some(end)) => format!(
                    "Date: {} – {}",
                    format_display(start),
                    format_display(end)
                ),
                (Some(start), None) => format!("From {}", format_display(start)),
                (None, Some(end)) => format!("Until {}", format_display(end)),
                (None, None) => String::new(),
            }
        }
        Facet::TeamMembers => {
            let names: Vec<&str> = criteria
                .team_members
                .iter()
                .map(|id| labels.member_name(id))
                .collect();
            format!("Team: {}", names.join(", "))
        }
        Facet::ServiceTypes => {
            let names: Vec<&str> = criteria
                .service_types
                .iter()
                .map(|id| labels.service_type_name(id))
                .collect();
            format!("Service: {}", names.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{JobStatus, TeamMember};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn labels() -> FacetLabels {
        let job = JobRecord {
            id: "j1".to_string(),
            title: "Office Cleaning".to_string(),
            address: "1 Main St".to_string(),
            date: Some(date(2024, 6, 1)),
            time: "09:00".to_string(),
            status: JobStatus::Scheduled,
            customer: "Acme".to_string(),
            team: vec![
                TeamMember {
                    id: "t1".to_string(),
                    name: "Alice".to_string(),
                    avatar: None,
                },
                TeamMember {
                    id: "t2".to_string(),
                    name: "Bob".to_string(),
                    avatar: None,
                },
            ],
            service_type_id: Some("deep".to_string()),
        };
        FacetLabels::from_jobs(&[job]).with_service_types(&[ServiceType {
            id: "deep".to_string(),
            name: "Deep Clean".to_string(),
            description: None,
        }])
    }

    #[test]
    fn test_empty_criteria_has_no_chips() {
        let summary = ActiveFilterSummary::from_criteria(&FilterCriteria::new(), &labels());
        assert_eq!(summary.count(), 0);
        assert!(summary.is_empty());
    }

    #[test]
    fn test_count_matches_active_facets() {
        let criteria = FilterCriteria::new()
            .with_status([JobStatus::Issue, JobStatus::Scheduled])
            .with_team_members(["t1"]);
        let summary = ActiveFilterSummary::from_criteria(&criteria, &labels());

        assert_eq!(summary.count(), 2);
        assert_eq!(summary.count(), criteria.active_facets().len());
        assert_eq!(summary.chips()[0].label, "Status: Scheduled, Issue");
        assert_eq!(summary.chips()[1].label, "Team: Alice");
    }

    #[test]
    fn test_cleared_facets_are_not_counted() {
        let mut criteria = FilterCriteria::new().with_status([JobStatus::Issue]);
        criteria.toggle_status(JobStatus::Issue);
        criteria.set_date_start(None);
        criteria.set_date_end(None);

        let summary = ActiveFilterSummary::from_criteria(&criteria, &labels());
        assert_eq!(summary.count(), 0);
    }

    #[test]
    fn test_date_labels() {
        let both = FilterCriteria::new()
            .with_date_range(Some(date(2024, 6, 10)), Some(date(2024, 6, 30)));
        let from = FilterCriteria::new().with_date_range(Some(date(2024, 6, 10)), None);
        let until = FilterCriteria::new().with_date_range(None, Some(date(2024, 6, 30)));

        let label = |c: &FilterCriteria| {
            ActiveFilterSummary::from_criteria(c, &labels()).chips()[0]
                .label
                .clone()
        };

        assert_eq!(label(&both), "Date: Jun 10, 2024 – Jun 30, 2024");
        assert_eq!(label(&from), "From Jun 10, 2024");
        assert_eq!(label(&until), "Until Jun 30, 2024");
    }

    #[test]
    fn test_unknown_ids_fall_back_to_id() {
        let criteria = FilterCriteria::new()
            .with_team_members(["t9"])
            .with_service_types(["deep", "windows"]);
        let summary = ActiveFilterSummary::from_criteria(&criteria, &labels());

        assert_eq!(summary.chips()[0].label, "Team: t9");
        assert_eq!(summary.chips()[1].label, "Service: Deep Clean, windows");
    }

    #[test]
    fn test_dismissing_chip_clears_facet() {
        let mut criteria = FilterCriteria::new()
            .with_status([JobStatus::Completed])
            .with_service_types(["deep"]);
        let summary = ActiveFilterSummary::from_criteria(&criteria, &labels());

        criteria.clear(summary.chips()[0].facet);
        let after = ActiveFilterSummary::from_criteria(&criteria, &labels());
        assert_eq!(after.count(), 1);
        assert_eq!(after.chips()[0].facet, Facet::ServiceTypes);
    }
}
