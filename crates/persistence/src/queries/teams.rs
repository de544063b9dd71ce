// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;
use volley_stats_domain::Team;

use crate::diesel_schema::teams;
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = teams)]
struct TeamRow {
    team_id: i64,
    name: String,
}

impl From<TeamRow> for Team {
    fn from(row: TeamRow) -> Self {
        Self::new(row.team_id, &row.name)
    }
}

/// Lists all teams ordered by name.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_teams(conn: &mut SqliteConnection) -> Result<Vec<Team>, PersistenceError> {
    let rows: Vec<TeamRow> = teams::table
        .select(TeamRow::as_select())
        .order(teams::name.asc())
        .load(conn)?;

    Ok(rows.into_iter().map(Team::from).collect())
}

/// Retrieves a team by id.
///
/// # Errors
///
/// Returns `TeamNotFound` if no such team exists.
pub fn get_team(conn: &mut SqliteConnection, team_id: i64) -> Result<Team, PersistenceError> {
    teams::table
        .filter(teams::team_id.eq(team_id))
        .select(TeamRow::as_select())
        .first(conn)
        .optional()?
        .map(Team::from)
        .ok_or(PersistenceError::TeamNotFound(team_id))
}

/// Looks up a team by its exact name.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no team has this name.
pub fn find_team_by_name(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<Option<Team>, PersistenceError> {
    debug!(name, "Looking up team by name");

    Ok(teams::table
        .filter(teams::name.eq(name))
        .select(TeamRow::as_select())
        .first(conn)
        .optional()?
        .map(Team::from))
}
