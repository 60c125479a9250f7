//! Telegram message bodies (HTML parse mode: `<b>`, `<a>`, newlines).

use chrono::NaiveDateTime;
use html_escape::{encode_single_quoted_attribute, encode_text};
use std::fmt::Write;

use super::diff_jobs::JobDiff;
use crate::domains::listings::models::{JobRecord, JobSnapshot, MonitorTarget, FOUND_DATE_FORMAT};

/// How many current jobs the start message previews.
pub const STARTED_PREVIEW_LIMIT: usize = 3;
/// How many new jobs a change message lists in full.
pub const NEW_JOBS_LIMIT: usize = 5;
/// How many removed jobs a change message lists.
pub const REMOVED_JOBS_LIMIT: usize = 3;

fn view_all_link(target: &MonitorTarget) -> String {
    format!(
        "🔗 <a href='{}'>View All Jobs</a>",
        encode_single_quoted_attribute(&target.url)
    )
}

/// Detail block for one job.
pub fn format_job_details(job: &JobRecord) -> String {
    let mut text = format!("<b>{}</b>\n", encode_text(&job.title));
    let _ = writeln!(text, "📍 {}", encode_text(&job.location));
    let _ = writeln!(text, "🏪 {}", encode_text(&job.brand));
    if let Some(distance) = &job.distance {
        let _ = writeln!(text, "📏 Distance: {}", encode_text(distance));
    }
    let _ = writeln!(
        text,
        "🔗 <a href='{}'>Apply Now</a>",
        encode_single_quoted_attribute(&job.link)
    );
    text
}

/// First-run announcement with a short preview of what is being tracked.
pub fn format_started_message(
    target: &MonitorTarget,
    current: &JobSnapshot,
    check_interval_minutes: u32,
) -> String {
    let mut message = format!(
        "🚀 <b>{} Job Monitor Started!</b>\n\n",
        encode_text(&target.name)
    );
    let _ = writeln!(message, "📍 Location: {}", encode_text(&target.location_label));
    let _ = writeln!(message, "💼 Type: {} Jobs", encode_text(&target.employment_label));
    let _ = write!(message, "📊 Currently tracking: {} jobs\n\n", current.len());

    if !current.is_empty() {
        message.push_str("Current jobs include:\n\n");
        for (i, job) in current.values().take(STARTED_PREVIEW_LIMIT).enumerate() {
            let _ = writeln!(
                message,
                "{}. <b>{}</b> at {}",
                i + 1,
                encode_text(&job.title),
                encode_text(&job.brand)
            );
        }
    }

    let _ = writeln!(
        message,
        "\n⏰ Checking every {} minutes for changes",
        check_interval_minutes
    );
    message.push_str(&view_all_link(target));
    message
}

/// Summary of additions and removals since the last snapshot.
pub fn format_changes_message(
    target: &MonitorTarget,
    diff: &JobDiff,
    total_jobs: usize,
    checked_at: NaiveDateTime,
) -> String {
    let mut message = String::from("🚨 <b>Job Listings Updated!</b>\n\n");
    let _ = writeln!(
        message,
        "📍 {} - {}",
        encode_text(&target.location_label),
        encode_text(&target.employment_label)
    );
    let _ = write!(message, "🕐 {}\n\n", checked_at.format(FOUND_DATE_FORMAT));

    if !diff.added.is_empty() {
        let _ = write!(message, "✨ <b>NEW JOBS ({}):</b>\n\n", diff.added.len());
        for job in diff.added.iter().take(NEW_JOBS_LIMIT) {
            message.push_str(&format_job_details(job));
            message.push('\n');
        }
        if diff.added.len() > NEW_JOBS_LIMIT {
            let _ = write!(
                message,
                "... and {} more new jobs!\n\n",
                diff.added.len() - NEW_JOBS_LIMIT
            );
        }
    }

    if !diff.removed.is_empty() {
        let _ = writeln!(message, "❌ <b>REMOVED ({}):</b>", diff.removed.len());
        for job in diff.removed.iter().take(REMOVED_JOBS_LIMIT) {
            let _ = writeln!(
                message,
                "• {} at {}",
                encode_text(&job.title),
                encode_text(&job.brand)
            );
        }
        if diff.removed.len() > REMOVED_JOBS_LIMIT {
            let _ = writeln!(
                message,
                "... and {} more",
                diff.removed.len() - REMOVED_JOBS_LIMIT
            );
        }
    }

    let _ = writeln!(message, "\n📊 Total jobs now: {}", total_jobs);
    message.push_str(&view_all_link(target));
    message
}
