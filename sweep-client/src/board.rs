//! Job board view model
//!
//! Owns everything a job view needs: the loaded collection, the search
//! query, the selected facets, the view mode and the load lifecycle. The
//! visible list is always re-derived from those through the filter engine.

use sweep_core::collection::{MergeOutcome, find_job, merge_job};
use sweep_core::domain::{FilterCriteria, JobRecord, JobStatus, ServiceType, ViewMode};
use sweep_core::filter::JobFilter;
use sweep_core::role::Role;
use sweep_core::sort::{JobSort, sort_refs};
use sweep_core::summary::{ActiveFilterSummary, FacetLabels};
use sweep_core::view::JobLayout;

use crate::error::{ClientError, Result};
use crate::source::JobSource;

/// Load lifecycle of the job collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    /// Last load failed; the previous collection is still shown
    Failed(String),
}

pub struct JobBoard<S: JobSource> {
    source: S,
    role: Role,
    jobs: Vec<JobRecord>,
    service_types: Vec<ServiceType>,
    filter: JobFilter,
    view_mode: ViewMode,
    sort: Option<JobSort>,
    state: LoadState,
}

impl<S: JobSource> JobBoard<S> {
    pub fn new(source: S, role: Role) -> Self {
        Self {
            source,
            role,
            jobs: Vec::new(),
            service_types: Vec::new(),
            filter: JobFilter::default(),
            view_mode: ViewMode::default(),
            sort: None,
            state: LoadState::Idle,
        }
    }

    // =============================================================================
    // Loading
    // =============================================================================

    /// Reload the collection from the source
    ///
    /// On failure the state becomes `Failed` and the previously loaded jobs
    /// stay in place so the view keeps working on stale data.
    pub async fn refresh(&mut self) -> Result<usize> {
        self.state = LoadState::Loading;

        match self.source.load_jobs().await {
            Ok(jobs) => {
                tracing::info!("Loaded {} job(s)", jobs.len());
                self.jobs = jobs;
                self.state = LoadState::Loaded;
            }
            Err(e) => {
                tracing::error!("Failed to load jobs: {}", e);
                self.state = LoadState::Failed(e.to_string());
                return Err(e);
            }
        }

        match self.source.load_service_types().await {
            Ok(catalog) => self.service_types = catalog,
            Err(e) => tracing::warn!("Service type catalog unavailable: {}", e),
        }

        Ok(self.jobs.len())
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn jobs(&self) -> &[JobRecord] {
        &self.jobs
    }

    pub fn service_types(&self) -> &[ServiceType] {
        &self.service_types
    }

    pub fn role(&self) -> Role {
        self.role
    }

    // =============================================================================
    // View state
    // =============================================================================

    pub fn query(&self) -> &str {
        &self.filter.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.filter.criteria
    }

    pub fn criteria_mut(&mut self) -> &mut FilterCriteria {
        &mut self.filter.criteria
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.filter.criteria = criteria;
    }

    /// Whether the query or any facet narrows the collection
    pub fn is_filtered(&self) -> bool {
        !self.filter.is_trivial()
    }

    /// Clear the query and every facet
    pub fn clear_filters(&mut self) {
        self.filter.query.clear();
        self.filter.criteria.reset();
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn set_sort(&mut self, sort: Option<JobSort>) {
        self.sort = sort;
    }

    // =============================================================================
    // Derived views
    // =============================================================================

    /// Jobs passing the current query and facets, sorted if a sort is set
    pub fn visible(&self) -> Vec<&JobRecord> {
        let mut jobs = self.filter.apply_ref(&self.jobs);
        if let Some(sort) = self.sort {
            sort_refs(&mut jobs, sort);
        }
        jobs
    }

    pub fn summary(&self) -> ActiveFilterSummary {
        ActiveFilterSummary::from_criteria(&self.filter.criteria, &self.labels())
    }

    pub fn labels(&self) -> FacetLabels {
        FacetLabels::from_jobs(&self.jobs).with_service_types(&self.service_types)
    }

    pub fn layout(&self) -> JobLayout<'_> {
        JobLayout::arrange_refs(self.view_mode, self.visible())
    }

    // =============================================================================
    // Mutations
    // =============================================================================

    /// Move a job to a new status and merge the result into the collection
    ///
    /// # Errors
    /// `NotFound` for an unknown id, a domain error when the role or the
    /// transition rules refuse the change, or whatever the source returns.
    pub async fn change_status(&mut self, job_id: &str, target: JobStatus) -> Result<JobRecord> {
        let current = find_job(&self.jobs, job_id)
            .map(|job| job.status)
            .ok_or_else(|| ClientError::NotFound(format!("job {}", job_id)))?;

        self.role.authorize_status_change(current, target)?;

        let updated = self.source.update_status(job_id, target).await?;

        match merge_job(&mut self.jobs, updated.clone()) {
            MergeOutcome::Replaced(index) => {
                tracing::info!("Job {} now {} (row {})", job_id, updated.status, index)
            }
            MergeOutcome::Appended => {
                tracing::warn!("Job {} was not in the loaded collection", updated.id)
            }
        }

        Ok(updated)
    }

    pub async fn mark_completed(&mut self, job_id: &str) -> Result<JobRecord> {
        self.change_status(job_id, JobStatus::Completed).await
    }
}
