// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Team and player mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;
use volley_stats_domain::{Player, Position};

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::{players, teams};
use crate::error::PersistenceError;

/// Inserts a team and returns its id.
///
/// # Errors
///
/// Returns `ConstraintViolation` if the name is taken.
pub fn insert_team(conn: &mut SqliteConnection, name: &str) -> Result<i64, PersistenceError> {
    diesel::insert_into(teams::table)
        .values(teams::name.eq(name))
        .execute(conn)?;

    let team_id: i64 = get_last_insert_rowid(conn)?;
    debug!(team_id, name, "Inserted team");
    Ok(team_id)
}

/// Inserts a player and returns its id.
///
/// # Errors
///
/// Returns an error if the insert fails (e.g. an unknown team).
pub fn insert_player(
    conn: &mut SqliteConnection,
    player: &Player,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(players::table)
        .values((
            players::name.eq(&player.name),
            players::jersey_number.eq(player.jersey_number),
            players::position.eq(player.position.as_ref().map(Position::as_str)),
            players::team_id.eq(player.team_id),
        ))
        .execute(conn)?;

    let player_id: i64 = get_last_insert_rowid(conn)?;
    debug!(player_id, name = %player.name, "Inserted player");
    Ok(player_id)
}

/// Overwrites a player's name, jersey number and position.
///
/// # Returns
///
/// The number of rows updated (0 if the player does not exist).
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn update_player(
    conn: &mut SqliteConnection,
    player_id: i64,
    name: &str,
    jersey_number: Option<i32>,
    position: Option<Position>,
) -> Result<usize, PersistenceError> {
    let rows_affected: usize = diesel::update(players::table)
        .filter(players::player_id.eq(player_id))
        .set((
            players::name.eq(name),
            players::jersey_number.eq(jersey_number),
            players::position.eq(position.as_ref().map(Position::as_str)),
        ))
        .execute(conn)?;

    Ok(rows_affected)
}

/// Assigns a player to a team, or unassigns with `None`.
///
/// # Returns
///
/// The number of rows updated (0 if the player does not exist).
///
/// # Errors
///
/// Returns an error if the update fails (e.g. an unknown team).
pub fn assign_player_team(
    conn: &mut SqliteConnection,
    player_id: i64,
    team_id: Option<i64>,
) -> Result<usize, PersistenceError> {
    let rows_affected: usize = diesel::update(players::table)
        .filter(players::player_id.eq(player_id))
        .set(players::team_id.eq(team_id))
        .execute(conn)?;

    Ok(rows_affected)
}
