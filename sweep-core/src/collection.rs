//! In-memory job collection helpers
//!
//! A status change returns the updated record; it is merged into the loaded
//! collection instead of reloading everything, then the filter is re-run.

use std::collections::HashSet;

use crate::domain::{JobRecord, TeamMember};

/// What [`merge_job`] did with the record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Replaced the record at this index
    Replaced(usize),
    /// No record had the id, so it was appended
    Appended,
}

/// Replace the job with the same id in place, or append it
pub fn merge_job(jobs: &mut Vec<JobRecord>, updated: JobRecord) -> MergeOutcome {
    match jobs.iter().position(|job| job.id == updated.id) {
        Some(index) => {
            jobs[index] = updated;
            MergeOutcome::Replaced(index)
        }
        None => {
            jobs.push(updated);
            MergeOutcome::Appended
        }
    }
}

pub fn find_job<'a>(jobs: &'a [JobRecord], id: &str) -> Option<&'a JobRecord> {
    jobs.iter().find(|job| job.id == id)
}

/// Distinct team members across the collection, in first-appearance order
pub fn team_member_options(jobs: &[JobRecord]) -> Vec<&TeamMember> {
    let mut seen = HashSet::new();
    jobs.iter()
        .flat_map(|job| &job.team)
        .filter(|member| seen.insert(member.id.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::JobStatus;

    fn member(id: &str, name: &str) -> TeamMember {
        TeamMember {
            id: id.to_string(),
            name: name.to_string(),
            avatar: None,
        }
    }

    fn job(id: &str, status: JobStatus, team: Vec<TeamMember>) -> JobRecord {
        JobRecord {
            id: id.to_string(),
            title: format!("Job {}", id),
            address: "1 Main St".to_string(),
            date: None,
            time: String::new(),
            status,
            customer: "Acme".to_string(),
            team,
            service_type_id: None,
        }
    }

    #[test]
    fn test_merge_replaces_in_place() {
        let mut jobs = vec![
            job("1", JobStatus::Scheduled, vec![]),
            job("2", JobStatus::Scheduled, vec![]),
            job("3", JobStatus::Scheduled, vec![]),
        ];

        let outcome = merge_job(&mut jobs, job("2", JobStatus::Completed, vec![]));

        assert_eq!(outcome, MergeOutcome::Replaced(1));
        assert_eq!(jobs.len(), 3);
        assert_eq!(jobs[1].status, JobStatus::Completed);
    }

    #[test]
    fn test_merge_appends_unknown() {
        let mut jobs = vec![job("1", JobStatus::Scheduled, vec![])];
        let outcome = merge_job(&mut jobs, job("9", JobStatus::Issue, vec![]));
        assert_eq!(outcome, MergeOutcome::Appended);
        assert_eq!(jobs[1].id, "9");
    }

    #[test]
    fn test_find_job() {
        let jobs = vec![
            job("1", JobStatus::Scheduled, vec![]),
            job("2", JobStatus::Issue, vec![]),
        ];
        assert_eq!(find_job(&jobs, "2").map(|j| j.status), Some(JobStatus::Issue));
        assert!(find_job(&jobs, "3").is_none());
    }

    #[test]
    fn test_team_member_options_dedupes() {
        let jobs = vec![
            job("1", JobStatus::Scheduled, vec![member("t2", "Bob"), member("t1", "Alice")]),
            job("2", JobStatus::Scheduled, vec![]),
            job("3", JobStatus::Scheduled, vec![member("t1", "Alice"), member("t3", "Cara")]),
        ];
        let names: Vec<&str> = team_member_options(&jobs)
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, vec!["Bob", "Alice", "Cara"]);
    }
}
