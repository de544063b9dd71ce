// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::dsl::max;
use diesel::prelude::*;
use volley_stats_domain::{GameSet, Score};

use crate::diesel_schema::sets;
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = sets)]
struct SetRow {
    set_id: i64,
    match_id: i64,
    set_number: i32,
    own_score: i32,
    opponent_score: i32,
}

impl From<SetRow> for GameSet {
    fn from(row: SetRow) -> Self {
        Self::new(
            row.set_id,
            row.match_id,
            row.set_number,
            Score::new(row.own_score, row.opponent_score),
        )
    }
}

/// Retrieves a set by id.
///
/// # Errors
///
/// Returns `SetNotFound` if no such set exists.
pub fn get_set(conn: &mut SqliteConnection, set_id: i64) -> Result<GameSet, PersistenceError> {
    sets::table
        .filter(sets::set_id.eq(set_id))
        .select(SetRow::as_select())
        .first(conn)
        .optional()?
        .map(GameSet::from)
        .ok_or(PersistenceError::SetNotFound(set_id))
}

/// Lists a match's sets in set-number order.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_match_sets(
    conn: &mut SqliteConnection,
    match_id: i64,
) -> Result<Vec<GameSet>, PersistenceError> {
    let rows: Vec<SetRow> = sets::table
        .filter(sets::match_id.eq(match_id))
        .select(SetRow::as_select())
        .order(sets::set_number.asc())
        .load(conn)?;

    Ok(rows.into_iter().map(GameSet::from).collect())
}

/// Returns the set with the highest number in a match.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the match has no sets.
pub fn latest_match_set(
    conn: &mut SqliteConnection,
    match_id: i64,
) -> Result<Option<GameSet>, PersistenceError> {
    Ok(sets::table
        .filter(sets::match_id.eq(match_id))
        .select(SetRow::as_select())
        .order(sets::set_number.desc())
        .first(conn)
        .optional()?
        .map(GameSet::from))
}

/// Returns the highest set number in a match, or `None` without sets.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn max_set_number(
    conn: &mut SqliteConnection,
    match_id: i64,
) -> Result<Option<i32>, PersistenceError> {
    Ok(sets::table
        .filter(sets::match_id.eq(match_id))
        .select(max(sets::set_number))
        .first::<Option<i32>>(conn)?)
}
