// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Match, set and action mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;
use volley_stats_domain::{NewAction, PointDetail, ResultCode, Score, Side};

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::{actions, matches, sets};
use crate::error::PersistenceError;

/// Inserts a match and returns its id.
///
/// # Errors
///
/// Returns an error if either team does not exist.
pub fn insert_match(
    conn: &mut SqliteConnection,
    home_team_id: i64,
    guest_team_id: i64,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(matches::table)
        .values((
            matches::home_team_id.eq(home_team_id),
            matches::guest_team_id.eq(guest_team_id),
        ))
        .execute(conn)?;

    let match_id: i64 = get_last_insert_rowid(conn)?;
    debug!(match_id, home_team_id, guest_team_id, "Inserted match");
    Ok(match_id)
}

/// Inserts a set with a 0:0 score and returns its id.
///
/// # Errors
///
/// Returns `ConstraintViolation` if the number is already used in the match.
pub fn insert_set(
    conn: &mut SqliteConnection,
    match_id: i64,
    set_number: i32,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(sets::table)
        .values((sets::match_id.eq(match_id), sets::set_number.eq(set_number)))
        .execute(conn)?;

    let set_id: i64 = get_last_insert_rowid(conn)?;
    debug!(set_id, match_id, set_number, "Inserted set");
    Ok(set_id)
}

/// Overwrites a set's stored score.
///
/// # Returns
///
/// The number of rows updated (0 if the set does not exist).
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn update_set_score(
    conn: &mut SqliteConnection,
    set_id: i64,
    score: Score,
) -> Result<usize, PersistenceError> {
    let rows_affected: usize = diesel::update(sets::table)
        .filter(sets::set_id.eq(set_id))
        .set((
            sets::own_score.eq(score.own),
            sets::opponent_score.eq(score.opponent),
        ))
        .execute(conn)?;

    Ok(rows_affected)
}

/// Inserts an action and returns its id.
///
/// # Errors
///
/// Returns an error if the set or a referenced player does not exist.
pub fn insert_action(
    conn: &mut SqliteConnection,
    action: &NewAction,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(actions::table)
        .values((
            actions::set_id.eq(action.set_id()),
            actions::category.eq(action.category().as_str()),
            actions::executor_id.eq(action.executor().player_id()),
            actions::result.eq(action.result().as_ref().map(ResultCode::as_str)),
            actions::target_player_id.eq(action.target_player_id()),
            actions::point_detail.eq(action.point_detail().as_ref().map(PointDetail::as_str)),
            actions::point_for.eq(action.point_for().as_ref().map(Side::as_str)),
        ))
        .execute(conn)?;

    let action_id: i64 = get_last_insert_rowid(conn)?;
    debug!(
        action_id,
        set_id = action.set_id(),
        category = %action.category(),
        "Inserted action"
    );
    Ok(action_id)
}

/// Rewrites an action's executor, result, target, point detail and
/// attribution. The owning set and creation time are kept.
///
/// # Returns
///
/// The number of rows updated (0 if the action does not exist).
///
/// # Errors
///
/// Returns an error if a referenced player does not exist.
pub fn update_action(
    conn: &mut SqliteConnection,
    action_id: i64,
    action: &NewAction,
) -> Result<usize, PersistenceError> {
    let rows_affected: usize = diesel::update(actions::table)
        .filter(actions::action_id.eq(action_id))
        .set((
            actions::category.eq(action.category().as_str()),
            actions::executor_id.eq(action.executor().player_id()),
            actions::result.eq(action.result().as_ref().map(ResultCode::as_str)),
            actions::target_player_id.eq(action.target_player_id()),
            actions::point_detail.eq(action.point_detail().as_ref().map(PointDetail::as_str)),
            actions::point_for.eq(action.point_for().as_ref().map(Side::as_str)),
        ))
        .execute(conn)?;

    Ok(rows_affected)
}

/// Deletes an action.
///
/// # Returns
///
/// The number of rows deleted (0 if the action did not exist).
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_action(
    conn: &mut SqliteConnection,
    action_id: i64,
) -> Result<usize, PersistenceError> {
    let rows_affected: usize =
        diesel::delete(actions::table.filter(actions::action_id.eq(action_id))).execute(conn)?;

    debug!(action_id, rows_affected, "Deleted action");
    Ok(rows_affected)
}
