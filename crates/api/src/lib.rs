// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Boundary layer of the volleyball statistics recorder.
//!
//! Front ends call these operations with raw input and a `MatchSession`.
//! Operations named after the recorder's user-facing contract
//! (`record_action`, `update_action`, `delete_action`, `end_match`,
//! `export_match_report`) never fail outright: they log the cause and report
//! a flag. Their `try_*` counterparts return typed `ApiError`s.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod export;
mod handlers;
mod reporting;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
pub use export::{ExportError, export_match_report, render_match_report, try_export_match_report};
pub use handlers::{
    action_history, active_roster, add_player, assign_player_to_team, check_set_end_condition,
    create_team, delete_action, end_match, get_action, list_matches, list_players, list_teams,
    load_match_context, match_sets, record_action, recompute_set_score, scoreboard,
    start_match, start_next_set, team_players, try_delete_action, try_record_action,
    try_update_action, try_update_player, update_action, update_player,
};
pub use reporting::build_match_report;
pub use request_response::{
    AddPlayerRequest, CreateTeamRequest, DistributionRow, ListPlayersResponse,
    ListTeamsResponse, MatchReport, PlayerReportRow, RecordActionRequest, RecordActionResponse,
    RecordOutcome, ScoreboardResponse, SetterAttackerRow,
    StartMatchRequest, StartMatchResponse, UpdateActionRequest, UpdatePlayerRequest,
};

pub use volley_stats::MatchSession;
pub use volley_stats_persistence::{ActionHistoryEntry, MatchSummary, Persistence};
