//! Job command handlers
//!
//! Handles listing with search and facet filters, viewing details and
//! applying status changes.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use colored::*;
use sweep_client::{JobBoard, JobSource};
use sweep_core::collection::{find_job, team_member_options};
use sweep_core::date::normalize_date;
use sweep_core::domain::{FilterCriteria, JobRecord, JobStatus, ViewMode};
use sweep_core::sort::JobSort;

use crate::config::Config;
use crate::id_resolver::resolve_job_id;
use crate::render::{colorize_status, print_filter_summary, print_job_details, print_layout};

/// Job subcommands
#[derive(Subcommand)]
pub enum JobCommands {
    /// List jobs matching the search and filters
    List(ListArgs),
    /// Get job details
    Get {
        /// Job ID or unambiguous prefix
        id: String,
    },
    /// Mark a job completed
    Complete {
        /// Job ID or unambiguous prefix
        id: String,
    },
    /// Move a job to another status
    Status {
        /// Job ID or unambiguous prefix
        id: String,

        /// Target status (scheduled, in-progress, completed, cancelled, issue)
        status: JobStatus,
    },
    /// List team members available as filter values
    Team,
    /// List the service type catalog
    Services,
    /// Count matching jobs per status
    Summary(FilterArgs),
}

/// Search text and facet selections
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Case-insensitive text matched against title, address and customer
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Status to include; repeat to include several
    #[arg(short, long = "status")]
    pub statuses: Vec<JobStatus>,

    /// Earliest scheduled date, inclusive
    #[arg(long, value_parser = parse_date)]
    pub from: Option<NaiveDate>,

    /// Latest scheduled date, inclusive
    #[arg(long, value_parser = parse_date)]
    pub to: Option<NaiveDate>,

    /// Team member id to include; repeat to include several
    #[arg(long = "team")]
    pub team_members: Vec<String>,

    /// Service type id to include; repeat to include several
    #[arg(long = "service-type")]
    pub service_types: Vec<String>,
}

impl FilterArgs {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new()
            .with_status(self.statuses.iter().copied())
            .with_date_range(self.from, self.to)
            .with_team_members(self.team_members.iter().cloned())
            .with_service_types(self.service_types.iter().cloned())
    }
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Layout: grid, list or calendar
    #[arg(long, default_value_t = ViewMode::Grid)]
    pub view: ViewMode,

    /// Sort key: date, date-desc, title, customer or status
    #[arg(long)]
    pub sort: Option<JobSort>,

    /// Print the matching jobs as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_date(s: &str) -> std::result::Result<NaiveDate, String> {
    normalize_date(s).map_err(|e| e.to_string())
}

type Board = JobBoard<Box<dyn JobSource>>;

/// Handle job commands
///
/// Loads the board once, then routes to the subcommand handler.
pub async fn handle_job_command(command: JobCommands, config: &Config) -> Result<()> {
    let mut board = JobBoard::new(config.source(), config.role);
    board.refresh().await.context("Failed to load jobs")?;

    match command {
        JobCommands::List(args) => list_jobs(&mut board, args),
        JobCommands::Get { id } => get_job(&board, &id),
        JobCommands::Complete { id } => complete_job(&mut board, &id).await,
        JobCommands::Status { id, status } => change_status(&mut board, &id, status).await,
        JobCommands::Team => list_team(&board),
        JobCommands::Services => list_services(&board),
        JobCommands::Summary(filters) => summarize(&mut board, filters),
    }
}

/// List visible jobs in the chosen layout
fn list_jobs(board: &mut Board, args: ListArgs) -> Result<()> {
    apply_filters(board, &args.filters);
    board.set_view_mode(args.view);
    board.set_sort(args.sort);

    if args.json {
        let visible = board.visible();
        println!(
            "{}",
            serde_json::to_string_pretty(&visible).context("Failed to serialize jobs")?
        );
        return Ok(());
    }

    print_filter_summary(&board.summary());

    let layout = board.layout();
    if layout.is_empty() {
        println!("{}", "No jobs match.".yellow());
        return Ok(());
    }

    let heading = if board.is_filtered() {
        format!("Showing {} of {} job(s):", layout.len(), board.jobs().len())
    } else {
        format!("Showing all {} job(s):", layout.len())
    };
    println!("{}", heading.bold());
    println!();
    print_layout(&layout);

    Ok(())
}

fn get_job(board: &Board, id: &str) -> Result<()> {
    let job_id = resolve_job_id(board.jobs(), id)?;
    let job = find_job(board.jobs(), &job_id)
        .with_context(|| format!("Job {} disappeared from the loaded list", job_id))?;

    print_job_details(job, board.role());

    Ok(())
}

async fn complete_job(board: &mut Board, id: &str) -> Result<()> {
    let job_id = resolve_job_id(board.jobs(), id)?;

    let updated = board
        .mark_completed(&job_id)
        .await
        .with_context(|| format!("Failed to complete job {}", job_id))?;

    print_status_change(&updated);
    Ok(())
}

async fn change_status(board: &mut Board, id: &str, status: JobStatus) -> Result<()> {
    let job_id = resolve_job_id(board.jobs(), id)?;

    let updated = board
        .change_status(&job_id, status)
        .await
        .with_context(|| format!("Failed to update job {}", job_id))?;

    print_status_change(&updated);
    Ok(())
}

fn print_status_change(updated: &JobRecord) {
    println!(
        "{} Job {} is now {}",
        "✓".green(),
        updated.id.cyan(),
        colorize_status(&updated.status)
    );
}

fn list_team(board: &Board) -> Result<()> {
    let members = team_member_options(board.jobs());

    if members.is_empty() {
        println!("{}", "No team members assigned to any job.".yellow());
        return Ok(());
    }

    println!("{}", format!("Found {} team member(s):", members.len()).bold());
    for member in members {
        println!("  {} {}", member.id.cyan(), member.name);
    }

    Ok(())
}

fn list_services(board: &Board) -> Result<()> {
    let catalog = board.service_types();

    if catalog.is_empty() {
        println!("{}", "No service types available.".yellow());
        return Ok(());
    }

    for service_type in catalog {
        println!("  {} {}", service_type.id.cyan(), service_type.name);
        if let Some(description) = &service_type.description {
            println!("    {}", description.dimmed());
        }
    }

    Ok(())
}

/// Per-status counts of the visible jobs
fn summarize(board: &mut Board, filters: FilterArgs) -> Result<()> {
    apply_filters(board, &filters);
    print_filter_summary(&board.summary());

    let visible = board.visible();
    println!("{}", format!("{} job(s) match:", visible.len()).bold());

    for status in JobStatus::ALL {
        let count = visible.iter().filter(|job| job.status == status).count();
        println!("  {:<14} {}", colorize_status(&status), count);
    }

    let unrecognized = visible.iter().filter(|job| !job.status.is_legal()).count();
    if unrecognized > 0 {
        println!(
            "  {:<14} {}",
            colorize_status(&JobStatus::Unrecognized),
            unrecognized
        );
    }

    Ok(())
}

fn apply_filters(board: &mut Board, filters: &FilterArgs) {
    board.set_query(filters.query.clone());
    board.set_criteria(filters.criteria());
}
