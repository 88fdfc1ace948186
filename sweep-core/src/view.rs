//! View-mode adapter
//!
//! Arranges an already filtered job list for the selected view mode. The
//! adapter groups and chunks but never drops or reorders within a bucket.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::{JobRecord, ViewMode};

/// Cards per grid row
pub const GRID_COLUMNS: usize = 3;

/// Jobs arranged for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobLayout<'a> {
    Grid {
        columns: usize,
        rows: Vec<Vec<&'a JobRecord>>,
    },
    List {
        rows: Vec<&'a JobRecord>,
    },
    Calendar {
        days: BTreeMap<NaiveDate, Vec<&'a JobRecord>>,
        /// Jobs whose date could not be read
        undated: Vec<&'a JobRecord>,
    },
}

impl<'a> JobLayout<'a> {
    pub fn arrange(mode: ViewMode, jobs: &'a [JobRecord]) -> Self {
        Self::arrange_refs(mode, jobs.iter().collect())
    }

    pub fn arrange_refs(mode: ViewMode, jobs: Vec<&'a JobRecord>) -> Self {
        match mode {
            ViewMode::Grid => JobLayout::Grid {
                columns: GRID_COLUMNS,
                rows: jobs.chunks(GRID_COLUMNS).map(<[_]>::to_vec).collect(),
            },
            ViewMode::List => JobLayout::List { rows: jobs },
            ViewMode::Calendar => {
                let mut days: BTreeMap<NaiveDate, Vec<&JobRecord>> = BTreeMap::new();
                let mut undated = Vec::new();
                for job in jobs {
                    match job.date {
                        Some(date) => days.entry(date).or_default().push(job),
                        None => undated.push(job),
                    }
                }
                JobLayout::Calendar { days, undated }
            }
        }
    }

    pub fn mode(&self) -> ViewMode {
        match self {
            JobLayout::Grid { .. } => ViewMode::Grid,
            JobLayout::List { .. } => ViewMode::List,
            JobLayout::Calendar { .. } => ViewMode::Calendar,
        }
    }

    /// Total number of jobs laid out
    pub fn len(&self) -> usize {
        match self {
            JobLayout::Grid { rows, .. } => rows.iter().map(Vec::len).sum(),
            JobLayout::List { rows } => rows.len(),
            JobLayout::Calendar { days, undated } => {
                days.values().map(Vec::len).sum::<usize>() + undated.len()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::JobStatus;

    fn job(id: &str, date: Option<NaiveDate>) -> JobRecord {
        JobRecord {
            id: id.to_string(),
            title: format!("Job {}", id),
            address: "1 Main St".to_string(),
            date,
            time: "10:00".to_string(),
            status: JobStatus::Scheduled,
            customer: "Acme".to_string(),
            team: Vec::new(),
            service_type_id: None,
        }
    }

    fn jobs() -> Vec<JobRecord> {
        let d1 = NaiveDate::from_ymd_opt(2024, 6, 1);
        let d2 = NaiveDate::from_ymd_opt(2024, 6, 2);
        vec![
            job("a", d2),
            job("b", d1),
            job("c", None),
            job("d", d2),
            job("e", d1),
        ]
    }

    #[test]
    fn test_grid_chunks_rows() {
        let jobs = jobs();
        let layout = JobLayout::arrange(ViewMode::Grid, &jobs);
        let JobLayout::Grid { columns, rows } = &layout else {
            panic!("expected grid layout");
        };
        assert_eq!(*columns, GRID_COLUMNS);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 3);
        assert_eq!(rows[1][1].id, "e");
        assert_eq!(layout.len(), 5);
    }

    #[test]
    fn test_list_keeps_order() {
        let jobs = jobs();
        let layout = JobLayout::arrange(ViewMode::List, &jobs);
        let JobLayout::List { rows } = &layout else {
            panic!("expected list layout");
        };
        let ids: Vec<&str> = rows.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_calendar_groups_by_day() {
        let jobs = jobs();
        let layout = JobLayout::arrange(ViewMode::Calendar, &jobs);
        assert_eq!(layout.mode(), ViewMode::Calendar);
        let JobLayout::Calendar { days, undated } = &layout else {
            panic!("expected calendar layout");
        };

        let keys: Vec<String> = days.keys().map(|d| d.to_string()).collect();
        assert_eq!(keys, vec!["2024-06-01", "2024-06-02"]);

        let first: Vec<&str> = days
            .values()
            .next()
            .unwrap()
            .iter()
            .map(|j| j.id.as_str())
            .collect();
        assert_eq!(first, vec!["b", "e"]);
        assert_eq!(undated.len(), 1);
        assert_eq!(layout.len(), 5);
    }

    #[test]
    fn test_empty_input() {
        for mode in [ViewMode::Grid, ViewMode::List, ViewMode::Calendar] {
            assert!(JobLayout::arrange(mode, &[]).is_empty());
        }
    }
}
