// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use std::collections::HashMap;
use volley_stats_domain::Match;

use crate::data_models::MatchSummary;
use crate::diesel_schema::{matches, teams};
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = matches)]
struct MatchRow {
    match_id: i64,
    played_at: String,
    home_team_id: i64,
    guest_team_id: i64,
}

impl From<MatchRow> for Match {
    fn from(row: MatchRow) -> Self {
        Self {
            match_id: row.match_id,
            played_at: row.played_at,
            home_team_id: row.home_team_id,
            guest_team_id: row.guest_team_id,
        }
    }
}

/// Retrieves a match by id.
///
/// # Errors
///
/// Returns `MatchNotFound` if no such match exists.
pub fn get_match(conn: &mut SqliteConnection, match_id: i64) -> Result<Match, PersistenceError> {
    matches::table
        .filter(matches::match_id.eq(match_id))
        .select(MatchRow::as_select())
        .first(conn)
        .optional()?
        .map(Match::from)
        .ok_or(PersistenceError::MatchNotFound(match_id))
}

/// Lists all matches, newest first, with team names resolved.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_matches(conn: &mut SqliteConnection) -> Result<Vec<MatchSummary>, PersistenceError> {
    let rows: Vec<MatchRow> = matches::table
        .select(MatchRow::as_select())
        .order((matches::played_at.desc(), matches::match_id.desc()))
        .load(conn)?;

    let team_names: HashMap<i64, String> = teams::table
        .select((teams::team_id, teams::name))
        .load::<(i64, String)>(conn)?
        .into_iter()
        .collect();

    let name_of = |team_id: i64| -> String {
        team_names
            .get(&team_id)
            .cloned()
            .unwrap_or_else(|| format!("Team {team_id}"))
    };

    Ok(rows
        .into_iter()
        .map(|row| MatchSummary {
            match_id: row.match_id,
            home_team_name: name_of(row.home_team_id),
            guest_team_name: name_of(row.guest_team_id),
            played_at: row.played_at,
            home_team_id: row.home_team_id,
            guest_team_id: row.guest_team_id,
        })
        .collect())
}
