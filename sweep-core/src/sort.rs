//! Job sorting
//!
//! Kept apart from filtering: the engine preserves input order and only an
//! explicit sort request reorders.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::domain::JobRecord;
use crate::error::DomainError;

/// Sort key for a job list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobSort {
    DateAscending,
    DateDescending,
    Title,
    Customer,
    Status,
}

impl fmt::Display for JobSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobSort::DateAscending => write!(f, "date"),
            JobSort::DateDescending => write!(f, "date-desc"),
            JobSort::Title => write!(f, "title"),
            JobSort::Customer => write!(f, "customer"),
            JobSort::Status => write!(f, "status"),
        }
    }
}

impl FromStr for JobSort {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" | "date-asc" => Ok(JobSort::DateAscending),
            "date-desc" => Ok(JobSort::DateDescending),
            "title" => Ok(JobSort::Title),
            "customer" => Ok(JobSort::Customer),
            "status" => Ok(JobSort::Status),
            _ => Err(DomainError::UnknownSort(s.to_string())),
        }
    }
}

/// Stable in-place sort. Undated jobs go last for both date orders.
pub fn sort_jobs(jobs: &mut [JobRecord], sort: JobSort) {
    jobs.sort_by(|a, b| compare(a, b, sort));
}

/// Sort a borrowed view without touching the collection
pub fn sort_refs(jobs: &mut [&JobRecord], sort: JobSort) {
    jobs.sort_by(|a, b| compare(a, b, sort));
}

fn compare(a: &JobRecord, b: &JobRecord, sort: JobSort) -> Ordering {
    match sort {
        JobSort::DateAscending => compare_dates(a, b, false),
        JobSort::DateDescending => compare_dates(a, b, true),
        JobSort::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        JobSort::Customer => a.customer.to_lowercase().cmp(&b.customer.to_lowercase()),
        JobSort::Status => a.status.cmp(&b.status),
    }
}

fn compare_dates(a: &JobRecord, b: &JobRecord, descending: bool) -> Ordering {
    match (a.date, b.date) {
        (Some(x), Some(y)) if descending => y.cmp(&x),
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
