// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Requests carry raw caller input (category, result and position names as
//! text); handlers parse them into domain types.

use volley_stats_domain::{
    DistributionLine, GameSet, Player, PlayerStatLine, Score, SetterAttackerLine, Team,
};

/// API request to create a team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTeamRequest {
    /// The team name; surrounding whitespace is ignored.
    pub name: String,
}

/// API request to add a player to the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddPlayerRequest {
    pub name: String,
    pub jersey_number: Option<i32>,
    /// Position name (case-insensitive), e.g. `setter`.
    pub position: Option<String>,
    pub team_id: Option<i64>,
}

/// API request to edit a rostered player.
///
/// Team membership is changed separately via `assign_player_to_team`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePlayerRequest {
    pub player_id: i64,
    pub name: String,
    pub jersey_number: Option<i32>,
    pub position: Option<String>,
}

/// API request to start a match against a named opponent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartMatchRequest {
    /// Our team.
    pub own_team_id: i64,
    /// The opponent; created as a placeholder team when unknown.
    pub opponent_name: String,
}

/// API request to record one action against the current set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordActionRequest {
    /// The executing player, or `0` for the team.
    pub executor_id: i64,
    /// Category name: `set`/`assist`, `attack`, `serve`, `block`, `cover`,
    /// `our_point`/`point`.
    pub category: String,
    /// Category-specific result code.
    pub result: Option<String>,
    /// Intended attacker; set/assist actions only.
    pub target_id: Option<i64>,
    pub point_detail: Option<String>,
}

/// API request to correct a recorded action.
///
/// The category and point-detail code of the action are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateActionRequest {
    pub action_id: i64,
    /// The executing player, or `0` for the team.
    pub executor_id: i64,
    pub result: Option<String>,
    pub target_id: Option<i64>,
}

/// The outcome of a `record_action` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
pub struct RecordOutcome {
    /// Whether the action was validated and persisted.
    pub accepted: bool,
    /// Whether the current set met the set-end rule after this action.
    pub set_ended: bool,
}

impl RecordOutcome {
    pub(crate) const fn rejected() -> Self {
        Self {
            accepted: false,
            set_ended: false,
        }
    }
}

/// API response for a recorded action.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RecordActionResponse {
    pub action_id: i64,
    /// The set score after the action.
    pub score: Score,
    pub set_ended: bool,
}

/// API response for a started match.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct StartMatchResponse {
    pub match_id: i64,
    /// The opponent team, existing or newly created.
    pub opponent_team_id: i64,
    /// Set 1 of the match.
    pub first_set: GameSet,
}

/// API response describing the open match.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ScoreboardResponse {
    pub match_id: i64,
    pub set_id: i64,
    pub set_number: i32,
    pub score: Score,
    /// Whether the current set met the set-end rule.
    pub set_over: bool,
}

/// API response listing teams.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ListTeamsResponse {
    pub teams: Vec<Team>,
}

/// API response listing players.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ListPlayersResponse {
    pub players: Vec<Player>,
}

/// One player row of a match report.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PlayerReportRow {
    /// Roster label, e.g. `#7 Mo`.
    pub player_name: String,
    #[serde(flatten)]
    pub stats: PlayerStatLine,
}

/// One setter → attacker row of a match report.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SetterAttackerRow {
    pub setter_name: String,
    pub attacker_name: String,
    #[serde(flatten)]
    pub line: SetterAttackerLine,
}

/// One setting-distribution row of a match report.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DistributionRow {
    pub setter_name: String,
    pub target_name: String,
    #[serde(flatten)]
    pub line: DistributionLine,
}

/// The complete reporting view of one match.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MatchReport {
    pub match_id: i64,
    pub played_at: String,
    pub home_team_name: String,
    pub guest_team_name: String,
    /// Every set of the match with its stored score.
    pub sets: Vec<GameSet>,
    pub players: Vec<PlayerReportRow>,
    pub setter_attacker: Vec<SetterAttackerRow>,
    pub setting_distribution: Vec<DistributionRow>,
}
