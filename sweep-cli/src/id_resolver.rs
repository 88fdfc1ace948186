//! ID resolver module
//!
//! Lets users type a short, unambiguous prefix instead of a full job id.
//! Resolution runs against the collection the board already loaded.

use anyhow::{Result, anyhow};
use sweep_core::domain::JobRecord;

/// Resolve a job id or prefix to a full id
///
/// An exact match always wins. Otherwise the input is treated as a
/// case-insensitive prefix that must match exactly one job.
///
/// # Errors
/// Returns an error if:
/// - No job matches the prefix
/// - Multiple jobs match the prefix (ambiguous)
pub fn resolve_job_id(jobs: &[JobRecord], input: &str) -> Result<String> {
    if let Some(job) = jobs.iter().find(|j| j.id == input) {
        return Ok(job.id.clone());
    }

    let prefix = input.to_lowercase();
    let matches: Vec<&JobRecord> = jobs
        .iter()
        .filter(|j| j.id.to_lowercase().starts_with(&prefix))
        .collect();

    match matches.as_slice() {
        [] => Err(anyhow!("No job found with ID starting with '{}'", input)),
        [job] => Ok(job.id.clone()),
        _ => {
            let ids: Vec<&str> = matches.iter().map(|j| j.id.as_str()).collect();
            Err(anyhow!(
                "Ambiguous prefix '{}' matches multiple jobs: {}",
                input,
                ids.join(", ")
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweep_core::domain::JobStatus;

    fn job(id: &str) -> JobRecord {
        JobRecord {
            id: id.to_string(),
            title: "Office Cleaning".to_string(),
            address: String::new(),
            date: None,
            time: String::new(),
            status: JobStatus::Scheduled,
            customer: String::new(),
            team: Vec::new(),
            service_type_id: None,
        }
    }

    fn jobs() -> Vec<JobRecord> {
        vec![job("a1b2c3"), job("a1ffee"), job("b7"), job("b")]
    }

    #[test]
    fn test_unique_prefix() {
        assert_eq!(resolve_job_id(&jobs(), "a1b").unwrap(), "a1b2c3");
        assert_eq!(resolve_job_id(&jobs(), "A1F").unwrap(), "a1ffee");
    }

    #[test]
    fn test_exact_match_beats_prefix() {
        assert_eq!(resolve_job_id(&jobs(), "b").unwrap(), "b");
    }

    #[test]
    fn test_ambiguous_and_missing() {
        let err = resolve_job_id(&jobs(), "a1").unwrap_err();
        assert!(err.to_string().contains("Ambiguous"));

        assert!(resolve_job_id(&jobs(), "zz").is_err());
    }
}
