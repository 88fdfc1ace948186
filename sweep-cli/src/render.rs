//! Terminal rendering
//!
//! Prints an arranged job layout. Rendering never filters; it only shows
//! what the board hands it.

use colored::*;
use sweep_core::date::format_display;
use sweep_core::domain::{JobRecord, JobStatus};
use sweep_core::role::Role;
use sweep_core::summary::ActiveFilterSummary;
use sweep_core::view::JobLayout;

const CARD_WIDTH: usize = 30;

/// Print the active-filter chips and badge count
pub fn print_filter_summary(summary: &ActiveFilterSummary) {
    if summary.is_empty() {
        return;
    }

    let chips: Vec<String> = summary
        .chips()
        .iter()
        .map(|chip| format!("[{} ×]", chip.label))
        .collect();
    println!(
        "{} {}",
        format!("Filters ({}):", summary.count()).bold(),
        chips.join(" ").cyan()
    );
}

pub fn print_layout(layout: &JobLayout<'_>) {
    match layout {
        JobLayout::Grid { rows, .. } => {
            for row in rows {
                print_card_row(row);
                println!();
            }
        }
        JobLayout::List { rows } => {
            for job in rows {
                print_list_row(job);
            }
        }
        JobLayout::Calendar { days, undated } => {
            for (date, jobs) in days {
                println!("{}", date.format("%a, %b %-d, %Y").to_string().bold());
                for job in jobs {
                    print_calendar_entry(job);
                }
                println!();
            }
            if !undated.is_empty() {
                println!("{}", "No date".bold().dimmed());
                for job in undated {
                    print_calendar_entry(job);
                }
                println!();
            }
        }
    }
}

/// Print grid cards side by side
fn print_card_row(row: &[&JobRecord]) {
    let cards: Vec<[String; 4]> = row.iter().map(|job| card_lines(job)).collect();

    for line in 0..4 {
        let cells: Vec<String> = cards
            .iter()
            .zip(row)
            .map(|(card, job)| {
                let cell = format!("{:<width$}", card[line], width = CARD_WIDTH);
                match line {
                    0 => cell.bold().to_string(),
                    3 => colorize_status_text(&job.status, &cell).to_string(),
                    _ => cell.dimmed().to_string(),
                }
            })
            .collect();
        println!("  {}", cells.join("  "));
    }
}

fn card_lines(job: &JobRecord) -> [String; 4] {
    [
        truncate(&job.title, CARD_WIDTH),
        truncate(&job.customer, CARD_WIDTH),
        truncate(&format!("{} {}", display_date(job), job.time), CARD_WIDTH),
        truncate(job.status.label(), CARD_WIDTH),
    ]
}

fn print_list_row(job: &JobRecord) {
    println!(
        "  {:<13} {:<6} {} {:<28} {:<20} {}",
        display_date(job),
        truncate(&job.time, 6),
        colorize_status_text(&job.status, &format!("{:<12}", job.status.label())),
        truncate(&job.title, 28),
        truncate(&job.customer, 20).dimmed(),
        job.address.dimmed()
    );
}

fn print_calendar_entry(job: &JobRecord) {
    println!(
        "  {:<6} {} {} {}",
        truncate(&job.time, 6),
        job.title,
        format!("({})", job.customer).dimmed(),
        colorize_status(&job.status)
    );
}

/// Print detailed job information
pub fn print_job_details(job: &JobRecord, role: Role) {
    println!("{}", "Job Details:".bold());
    println!("  ID:        {}", job.id.cyan());
    println!("  Title:     {}", job.title);
    println!("  Customer:  {}", job.customer);
    println!("  Address:   {}", job.address);
    println!("  Date:      {}", display_date(job));
    println!("  Time:      {}", job.time);
    println!("  Status:    {}", colorize_status(&job.status));

    if let Some(service_type) = &job.service_type_id {
        println!("  Service:   {}", service_type);
    }

    if !job.team.is_empty() {
        println!("\n{}", "Team:".bold());
        for member in &job.team {
            println!("  {} {}", member.name, format!("({})", member.id).dimmed());
        }
    }

    let actions: Vec<String> = role
        .allowed_actions()
        .into_iter()
        .map(|a| a.to_string())
        .collect();
    println!(
        "\n{} {}",
        format!("Allowed as {}:", role).bold(),
        actions.join(", ")
    );
}

fn display_date(job: &JobRecord) -> String {
    job.date
        .map(format_display)
        .unwrap_or_else(|| "no date".to_string())
}

/// Colorize job status for display
pub fn colorize_status(status: &JobStatus) -> ColoredString {
    colorize_status_text(status, status.label())
}

fn colorize_status_text(status: &JobStatus, text: &str) -> ColoredString {
    match status {
        JobStatus::Scheduled => text.yellow(),
        JobStatus::InProgress => text.cyan(),
        JobStatus::Completed => text.green(),
        JobStatus::Cancelled => text.dimmed(),
        JobStatus::Issue => text.red(),
        JobStatus::Unrecognized => text.magenta(),
    }
}

/// Shorten to `max` characters, marking the cut with an ellipsis
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}
