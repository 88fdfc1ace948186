//! Core domain types
//!
//! This module contains the domain structures consumed by the filter engine.
//! Jobs are read-only input produced by the loader; criteria and view mode
//! are view state owned by the presentation layer.

pub mod criteria;
pub mod job;
pub mod service_type;
pub mod view_mode;

pub use criteria::{DateRange, Facet, FilterCriteria};
pub use job::{JobRecord, JobStatus, TeamMember};
pub use service_type::ServiceType;
pub use view_mode::ViewMode;
