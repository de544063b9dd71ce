// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Match reporting.
//!
//! Every report is recomputed from the stored action history; nothing is
//! cached between calls.

use std::collections::HashMap;
use tracing::debug;
use volley_stats_domain::{
    GameSet, Match, Player, RecordedAction, Team, compute_player_stats,
    compute_setter_attacker, compute_setting_distribution,
};
use volley_stats_persistence::Persistence;

use crate::error::{ApiError, translate_persistence_error};
use crate::request_response::{DistributionRow, MatchReport, PlayerReportRow, SetterAttackerRow};

/// Resolves player ids to roster labels.
struct RosterNames {
    labels: HashMap<i64, String>,
}

impl RosterNames {
    fn new(players: &[Player]) -> Self {
        let labels: HashMap<i64, String> = players
            .iter()
            .filter_map(|player| player.player_id.map(|id| (id, player.display_name())))
            .collect();
        Self { labels }
    }

    fn label(&self, player_id: i64) -> String {
        self.labels
            .get(&player_id)
            .cloned()
            .unwrap_or_else(|| format!("Player {player_id}"))
    }
}

/// Builds the full reporting view of a match.
///
/// # Errors
///
/// Returns an error if the match does not exist or the store fails.
pub fn build_match_report(
    persistence: &mut Persistence,
    match_id: i64,
) -> Result<MatchReport, ApiError> {
    let stored: Match = persistence
        .get_match(match_id)
        .map_err(translate_persistence_error)?;
    let home: Team = persistence
        .get_team(stored.home_team_id)
        .map_err(translate_persistence_error)?;
    let guest: Team = persistence
        .get_team(stored.guest_team_id)
        .map_err(translate_persistence_error)?;
    let sets: Vec<GameSet> = persistence
        .list_match_sets(match_id)
        .map_err(translate_persistence_error)?;
    let actions: Vec<RecordedAction> = persistence
        .list_match_actions(match_id)
        .map_err(translate_persistence_error)?;
    let names: RosterNames = RosterNames::new(
        &persistence
            .list_players()
            .map_err(translate_persistence_error)?,
    );
    debug!(match_id, actions = actions.len(), "Building match report");

    let players: Vec<PlayerReportRow> = compute_player_stats(&actions)
        .into_iter()
        .map(|stats| PlayerReportRow {
            player_name: names.label(stats.player_id),
            stats,
        })
        .collect();

    let setter_attacker: Vec<SetterAttackerRow> = compute_setter_attacker(&actions)
        .into_iter()
        .map(|line| SetterAttackerRow {
            setter_name: names.label(line.setter_id),
            attacker_name: names.label(line.attacker_id),
            line,
        })
        .collect();

    let setting_distribution: Vec<DistributionRow> = compute_setting_distribution(&actions)
        .into_iter()
        .map(|line| DistributionRow {
            setter_name: names.label(line.setter_id),
            target_name: names.label(line.target_id),
            line,
        })
        .collect();

    Ok(MatchReport {
        match_id,
        played_at: stored.played_at,
        home_team_name: home.name,
        guest_team_name: guest.name,
        sets,
        players,
        setter_attacker,
        setting_distribution,
    })
}
