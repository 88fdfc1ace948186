//! Sweep Core
//!
//! Core types and the job filtering engine for the Sweep job board.
//!
//! This crate contains:
//! - Domain types: Core business entities (JobRecord, FilterCriteria, etc.)
//! - Filter engine: The pure derivation from a job collection to the visible subset
//! - Presentation helpers: Active-filter chips, view-mode layouts, sorting
//!
//! Nothing in this crate performs I/O. Loading lives in `sweep-client`,
//! rendering in `sweep-cli`.

pub mod collection;
pub mod date;
pub mod domain;
pub mod error;
pub mod filter;
pub mod role;
pub mod sort;
pub mod summary;
pub mod view;

pub use error::{DomainError, Result};
pub use filter::{JobFilter, compute_visible_jobs};
