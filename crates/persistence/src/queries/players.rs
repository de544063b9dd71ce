// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use std::str::FromStr;
use volley_stats_domain::{Player, Position};

use crate::diesel_schema::players;
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = players)]
struct PlayerRow {
    player_id: i64,
    name: String,
    jersey_number: Option<i32>,
    position: Option<String>,
    team_id: Option<i64>,
}

fn to_player(row: PlayerRow) -> Result<Player, PersistenceError> {
    let position: Option<Position> = row
        .position
        .as_deref()
        .map(Position::from_str)
        .transpose()
        .map_err(|e| PersistenceError::ReconstructionError(e.to_string()))?;

    Ok(Player::with_id(
        row.player_id,
        &row.name,
        row.jersey_number,
        position,
        row.team_id,
    ))
}

fn to_players(rows: Vec<PlayerRow>) -> Result<Vec<Player>, PersistenceError> {
    rows.into_iter().map(to_player).collect()
}

/// Lists every rostered player, by jersey number then name.
///
/// # Errors
///
/// Returns an error if the query fails or a stored position is unknown.
pub fn list_players(conn: &mut SqliteConnection) -> Result<Vec<Player>, PersistenceError> {
    let rows: Vec<PlayerRow> = players::table
        .select(PlayerRow::as_select())
        .order((players::jersey_number.asc(), players::name.asc()))
        .load(conn)?;

    to_players(rows)
}

/// Lists the players assigned to a team, by jersey number then name.
///
/// # Errors
///
/// Returns an error if the query fails or a stored position is unknown.
pub fn list_team_players(
    conn: &mut SqliteConnection,
    team_id: i64,
) -> Result<Vec<Player>, PersistenceError> {
    let rows: Vec<PlayerRow> = players::table
        .filter(players::team_id.eq(team_id))
        .select(PlayerRow::as_select())
        .order((players::jersey_number.asc(), players::name.asc()))
        .load(conn)?;

    to_players(rows)
}

/// Retrieves a player by id.
///
/// # Errors
///
/// Returns `PlayerNotFound` if no such player exists.
pub fn get_player(conn: &mut SqliteConnection, player_id: i64) -> Result<Player, PersistenceError> {
    let row: PlayerRow = players::table
        .filter(players::player_id.eq(player_id))
        .select(PlayerRow::as_select())
        .first(conn)
        .optional()?
        .ok_or(PersistenceError::PlayerNotFound(player_id))?;

    to_player(row)
}
