// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Action queries and row reconstruction.
//!
//! Category, result, point-detail and side columns hold the stable text
//! forms defined by the domain enums; reading an unknown value is a
//! reconstruction error, never a silent default.

use diesel::SqliteConnection;
use diesel::prelude::*;
use std::collections::HashMap;
use std::str::FromStr;
use tracing::debug;
use volley_stats_domain::{
    ActionCategory, Executor, PointDetail, RecordedAction, ResultCode, Side,
};

use crate::data_models::ActionHistoryEntry;
use crate::diesel_schema::{actions, players, sets};
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = actions)]
struct ActionRow {
    action_id: i64,
    set_id: i64,
    category: String,
    executor_id: Option<i64>,
    result: Option<String>,
    target_player_id: Option<i64>,
    point_detail: Option<String>,
    point_for: Option<String>,
    created_at: String,
}

fn reconstruction(err: impl std::fmt::Display) -> PersistenceError {
    PersistenceError::ReconstructionError(err.to_string())
}

fn to_recorded_action(row: ActionRow) -> Result<RecordedAction, PersistenceError> {
    let category: ActionCategory = ActionCategory::from_str(&row.category).map_err(reconstruction)?;
    let result: Option<ResultCode> = row
        .result
        .as_deref()
        .map(|text| ResultCode::parse(category, text))
        .transpose()
        .map_err(reconstruction)?;
    let point_detail: Option<PointDetail> = row
        .point_detail
        .as_deref()
        .map(PointDetail::from_str)
        .transpose()
        .map_err(reconstruction)?;
    let point_for: Option<Side> = row
        .point_for
        .as_deref()
        .map(Side::from_str)
        .transpose()
        .map_err(reconstruction)?;

    Ok(RecordedAction {
        action_id: row.action_id,
        set_id: row.set_id,
        category,
        executor: Executor::from_column(row.executor_id),
        result,
        target_player_id: row.target_player_id,
        point_detail,
        point_for,
        created_at: row.created_at,
    })
}

fn to_recorded_actions(rows: Vec<ActionRow>) -> Result<Vec<RecordedAction>, PersistenceError> {
    rows.into_iter().map(to_recorded_action).collect()
}

/// Retrieves an action by id.
///
/// # Errors
///
/// Returns an error if the query fails or the row cannot be reconstructed.
/// Returns `Ok(None)` if the action does not exist.
pub fn find_action(
    conn: &mut SqliteConnection,
    action_id: i64,
) -> Result<Option<RecordedAction>, PersistenceError> {
    actions::table
        .filter(actions::action_id.eq(action_id))
        .select(ActionRow::as_select())
        .first(conn)
        .optional()?
        .map(to_recorded_action)
        .transpose()
}

/// Lists a set's actions in recording order.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be reconstructed.
pub fn list_set_actions(
    conn: &mut SqliteConnection,
    set_id: i64,
) -> Result<Vec<RecordedAction>, PersistenceError> {
    let rows: Vec<ActionRow> = actions::table
        .filter(actions::set_id.eq(set_id))
        .select(ActionRow::as_select())
        .order(actions::action_id.asc())
        .load(conn)?;

    to_recorded_actions(rows)
}

/// Lists every action of a match in recording order.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be reconstructed.
pub fn list_match_actions(
    conn: &mut SqliteConnection,
    match_id: i64,
) -> Result<Vec<RecordedAction>, PersistenceError> {
    let rows: Vec<ActionRow> = actions::table
        .inner_join(sets::table)
        .filter(sets::match_id.eq(match_id))
        .select(ActionRow::as_select())
        .order(actions::action_id.asc())
        .load(conn)?;

    debug!(match_id, count = rows.len(), "Loaded match actions");
    to_recorded_actions(rows)
}

/// Returns the most recent actions of a match, newest first.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `match_id` - The match
/// * `limit` - Maximum number of entries
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be reconstructed.
pub fn action_history(
    conn: &mut SqliteConnection,
    match_id: i64,
    limit: i64,
) -> Result<Vec<ActionHistoryEntry>, PersistenceError> {
    let rows: Vec<(ActionRow, i32)> = actions::table
        .inner_join(sets::table)
        .filter(sets::match_id.eq(match_id))
        .select((ActionRow::as_select(), sets::set_number))
        .order(actions::action_id.desc())
        .limit(limit)
        .load(conn)?;

    let player_names: HashMap<i64, String> = players::table
        .select((players::player_id, players::name))
        .load::<(i64, String)>(conn)?
        .into_iter()
        .collect();
    let name_of = |id: Option<i64>| id.and_then(|id| player_names.get(&id).cloned());

    rows.into_iter()
        .map(|(row, set_number)| {
            let action: RecordedAction = to_recorded_action(row)?;
            Ok(ActionHistoryEntry {
                action_id: action.action_id,
                set_id: action.set_id,
                set_number,
                executor_name: name_of(action.executor_id()),
                category: action.category,
                result: action.result,
                target_name: name_of(action.target_player_id),
                point_detail: action.point_detail,
                point_for: action.point_for,
                created_at: action.created_at,
            })
        })
        .collect()
}
