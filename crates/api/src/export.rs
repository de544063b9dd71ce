// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV export of a match report.
//!
//! The document holds a header block followed by `Sets`, `Players`,
//! `Setter-Attacker` and `Setting Distribution` sections. Each section starts
//! with a one-field title row and a column header row.

use std::path::Path;
use thiserror::Error;
use time::OffsetDateTime;
use time::format_description::FormatItem;
use tracing::{error, info};
use volley_stats_domain::PlayerStatLine;
use volley_stats_persistence::Persistence;

use crate::error::ApiError;
use crate::reporting::build_match_report;
use crate::request_response::MatchReport;

const TIMESTAMP_FORMAT: &[FormatItem<'_>] =
    time::macros::format_description!("[year]-[month]-[day] [hour]:[minute]:[second] UTC");

/// Export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The report could not be built (e.g. the match does not exist).
    #[error("Failed to build report: {0}")]
    Report(#[from] ApiError),

    /// A CSV record could not be written.
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The output file could not be written.
    #[error("Failed to write export file: {0}")]
    Io(#[from] std::io::Error),

    /// The generation timestamp could not be formatted.
    #[error("Failed to format timestamp: {0}")]
    Timestamp(#[from] time::error::Format),
}

/// Renders a report as a sectioned CSV document.
///
/// # Errors
///
/// Returns an error if a record or the timestamp cannot be written.
pub fn render_match_report(
    report: &MatchReport,
    generated_at: OffsetDateTime,
) -> Result<Vec<u8>, ExportError> {
    let mut writer: csv::Writer<Vec<u8>> = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());

    writer.write_record(["Match Report"])?;
    writer.write_record(["Match", report.match_id.to_string().as_str()])?;
    writer.write_record(["Played", report.played_at.as_str()])?;
    writer.write_record(["Home", report.home_team_name.as_str()])?;
    writer.write_record(["Guest", report.guest_team_name.as_str()])?;
    writer.write_record(["Generated", generated_at.format(TIMESTAMP_FORMAT)?.as_str()])?;

    writer.write_record(["Sets"])?;
    writer.write_record(["Set", "Own", "Opponent"])?;
    for set in &report.sets {
        writer.write_record([
            set.set_number.to_string(),
            set.score.own.to_string(),
            set.score.opponent.to_string(),
        ])?;
    }

    writer.write_record(["Players"])?;
    writer.write_record([
        "Player",
        "Attacks",
        "Kills",
        "Attack Errors",
        "Blocked",
        "Attack Efficiency",
        "Serves",
        "Aces",
        "Half Aces",
        "Service Errors",
        "Service Points",
        "Service In Rate",
        "Service Effect Rate",
        "Blocks",
        "Assists",
        "Set Errors",
        "Total Points",
        "Total Errors",
        "Attempts",
        "Overall Rate",
    ])?;
    for row in &report.players {
        let stats: &PlayerStatLine = &row.stats;
        writer.write_record([
            row.player_name.clone(),
            stats.attacks.to_string(),
            stats.kills.to_string(),
            stats.attack_errors.to_string(),
            stats.blocked_attacks.to_string(),
            stats.attack_efficiency.to_string(),
            stats.serves.to_string(),
            stats.aces.to_string(),
            stats.half_aces.to_string(),
            stats.service_errors.to_string(),
            stats.service_points.to_string(),
            stats.service_in_rate.to_string(),
            stats.service_effect_rate.to_string(),
            stats.blocks.to_string(),
            stats.assists.to_string(),
            stats.set_errors.to_string(),
            stats.total_points.to_string(),
            stats.total_errors.to_string(),
            stats.total_attempts.to_string(),
            stats.overall_rate.to_string(),
        ])?;
    }

    writer.write_record(["Setter-Attacker"])?;
    writer.write_record([
        "Setter",
        "Attacker",
        "Total",
        "Kills",
        "Errors",
        "Blocked",
        "Efficiency %",
    ])?;
    for row in &report.setter_attacker {
        writer.write_record([
            row.setter_name.clone(),
            row.attacker_name.clone(),
            row.line.total.to_string(),
            row.line.kills.to_string(),
            row.line.errors.to_string(),
            row.line.blocked.to_string(),
            row.line.efficiency.to_string(),
        ])?;
    }

    writer.write_record(["Setting Distribution"])?;
    writer.write_record(["Setter", "Target", "Count", "Percent"])?;
    for row in &report.setting_distribution {
        writer.write_record([
            row.setter_name.clone(),
            row.target_name.clone(),
            row.line.count.to_string(),
            row.line.percent.to_string(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|err| ExportError::Io(err.into_error()))
}

/// Builds a match report and writes it to `path`.
///
/// The document is rendered in memory first, so a failure before the final
/// write leaves no file behind.
///
/// # Errors
///
/// Returns an error if the report cannot be built, rendered or written.
pub fn try_export_match_report(
    persistence: &mut Persistence,
    match_id: i64,
    path: &Path,
) -> Result<(), ExportError> {
    let report: MatchReport = build_match_report(persistence, match_id)?;
    let document: Vec<u8> = render_match_report(&report, OffsetDateTime::now_utc())?;
    std::fs::write(path, document)?;
    info!(match_id, path = %path.display(), "Exported match report");
    Ok(())
}

/// Exports a match report, reporting success as a boolean.
///
/// `false` means no file was written; the cause is logged.
pub fn export_match_report(persistence: &mut Persistence, match_id: i64, path: &Path) -> bool {
    match try_export_match_report(persistence, match_id, path) {
        Ok(()) => true,
        Err(err) => {
            error!(match_id, path = %path.display(), error = %err, "Export failed");
            false
        }
    }
}
