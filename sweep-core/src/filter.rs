//! Job filter engine
//!
//! Derives the visible subset of a job collection from a free-text query and
//! the selected facets. Facets combine with AND; values inside the status,
//! team and service-type facets combine with OR. An empty facet never
//! excludes anything.
//!
//! The engine is a pure function of its inputs. It never reorders, never
//! mutates, and never fails, so callers may re-run it on every keystroke or
//! cache the result keyed on the inputs.

use crate::domain::{FilterCriteria, JobRecord};

/// Compute the jobs visible under `query` and `criteria`
///
/// Returns owned copies in the same relative order as `all_jobs`.
pub fn compute_visible_jobs(
    all_jobs: &[JobRecord],
    query: &str,
    criteria: &FilterCriteria,
) -> Vec<JobRecord> {
    visible_jobs(all_jobs, query, criteria)
        .into_iter()
        .cloned()
        .collect()
}

/// Borrowing form of [`compute_visible_jobs`]
pub fn visible_jobs<'a>(
    all_jobs: &'a [JobRecord],
    query: &str,
    criteria: &FilterCriteria,
) -> Vec<&'a JobRecord> {
    let needle = query.to_lowercase();
    all_jobs
        .iter()
        .filter(|job| matches_lowered(job, &needle, criteria))
        .collect()
}

/// Whether a single job passes every active filter
pub fn matches(job: &JobRecord, query: &str, criteria: &FilterCriteria) -> bool {
    matches_lowered(job, &query.to_lowercase(), criteria)
}

fn matches_lowered(job: &JobRecord, needle: &str, criteria: &FilterCriteria) -> bool {
    matches_text(job, needle)
        && matches_status(job, criteria)
        && matches_date(job, criteria)
        && matches_team(job, criteria)
        && matches_service_type(job, criteria)
}

// =============================================================================
// Facet predicates
// =============================================================================

fn matches_text(job: &JobRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [&job.title, &job.address, &job.customer]
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}

// An unrecognized status never matches a non-empty status facet, even when
// `Unrecognized` itself ended up in the selected set.
fn matches_status(job: &JobRecord, criteria: &FilterCriteria) -> bool {
    criteria.status.is_empty()
        || (job.status.is_legal() && criteria.status.contains(&job.status))
}

fn matches_date(job: &JobRecord, criteria: &FilterCriteria) -> bool {
    let range = &criteria.date_range;
    if range.is_unbounded() {
        return true;
    }
    job.date.is_some_and(|date| range.contains(date))
}

fn matches_team(job: &JobRecord, criteria: &FilterCriteria) -> bool {
    criteria.team_members.is_empty()
        || criteria
            .team_members
            .iter()
            .any(|member_id| job.has_member(member_id))
}

fn matches_service_type(job: &JobRecord, criteria: &FilterCriteria) -> bool {
    criteria.service_types.is_empty()
        || job
            .service_type_id
            .as_ref()
            .is_some_and(|id| criteria.service_types.contains(id))
}

// =============================================================================
// JobFilter
// =============================================================================

/// A query and criteria pair applied together
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    pub query: String,
    pub criteria: FilterCriteria,
}

impl JobFilter {
    pub fn new(query: impl Into<String>, criteria: FilterCriteria) -> Self {
        Self {
            query: query.into(),
            criteria,
        }
    }

    pub fn apply_ref<'a>(&self, all_jobs: &'a [JobRecord]) -> Vec<&'a JobRecord> {
        visible_jobs(all_jobs, &self.query, &self.criteria)
    }

    /// True when neither the query nor any facet restricts
    pub fn is_trivial(&self) -> bool {
        self.query.is_empty() && self.criteria.is_empty()
    }
}
