// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the volleyball statistics recorder.
//!
//! A single `SQLite` file (or a shared in-memory database for tests) holds
//! teams, players, matches, sets and actions. Schema changes ship as
//! embedded Diesel migrations and run every time a database is opened.
//!
//! ## Testing Philosophy
//!
//! - Tests run against isolated in-memory databases (`Persistence::new_in_memory`)
//! - Every test gets its own database; no shared fixtures
//! - Foreign key enforcement is verified on every open

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

use diesel::SqliteConnection;
use diesel::prelude::*;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;
use volley_stats_domain::{
    GameSet, Match, NewAction, Player, Position, RecordedAction, Score, Team, next_set_number,
};

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use backend::sqlite::MIGRATIONS;
pub use data_models::{ActionHistoryEntry, MatchSummary};
pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter over a single `SQLite` connection.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a persistence adapter over a fresh in-memory database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// so tests never observe each other's rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String =
            format!("file:memdb_volley_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a persistence adapter over a database file, creating it if needed.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        info!(path = path_str, "Opened statistics database");
        Ok(Self { conn })
    }

    // ========================================================================
    // Teams
    // ========================================================================

    /// Lists all teams ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn list_teams(&mut self) -> Result<Vec<Team>, PersistenceError> {
        queries::list_teams(&mut self.conn)
    }

    /// Retrieves a team by id.
    ///
    /// # Errors
    ///
    /// Returns `TeamNotFound` if no such team exists.
    pub fn get_team(&mut self, team_id: i64) -> Result<Team, PersistenceError> {
        queries::get_team(&mut self.conn, team_id)
    }

    /// Looks up a team by exact name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn find_team_by_name(&mut self, name: &str) -> Result<Option<Team>, PersistenceError> {
        queries::find_team_by_name(&mut self.conn, name)
    }

    /// Creates a team and returns its id.
    ///
    /// # Errors
    ///
    /// Returns `ConstraintViolation` if the name is taken.
    pub fn create_team(&mut self, name: &str) -> Result<i64, PersistenceError> {
        mutations::insert_team(&mut self.conn, name)
    }

    // ========================================================================
    // Players
    // ========================================================================

    /// Lists every rostered player.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn list_players(&mut self) -> Result<Vec<Player>, PersistenceError> {
        queries::list_players(&mut self.conn)
    }

    /// Lists the players assigned to a team.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn list_team_players(&mut self, team_id: i64) -> Result<Vec<Player>, PersistenceError> {
        queries::list_team_players(&mut self.conn, team_id)
    }

    /// Retrieves a player by id.
    ///
    /// # Errors
    ///
    /// Returns `PlayerNotFound` if no such player exists.
    pub fn get_player(&mut self, player_id: i64) -> Result<Player, PersistenceError> {
        queries::get_player(&mut self.conn, player_id)
    }

    /// Inserts a validated player and returns its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_player(&mut self, player: &Player) -> Result<i64, PersistenceError> {
        mutations::insert_player(&mut self.conn, player)
    }

    /// Overwrites a player's name, jersey number and position.
    ///
    /// # Errors
    ///
    /// Returns `PlayerNotFound` if no such player exists.
    pub fn update_player(
        &mut self,
        player_id: i64,
        name: &str,
        jersey_number: Option<i32>,
        position: Option<Position>,
    ) -> Result<(), PersistenceError> {
        let rows: usize =
            mutations::update_player(&mut self.conn, player_id, name, jersey_number, position)?;
        if rows == 0 {
            return Err(PersistenceError::PlayerNotFound(player_id));
        }
        Ok(())
    }

    /// Assigns a player to a team, or unassigns with `None`.
    ///
    /// # Errors
    ///
    /// Returns `PlayerNotFound` if no such player exists, or a constraint
    /// violation for an unknown team.
    pub fn assign_player_team(
        &mut self,
        player_id: i64,
        team_id: Option<i64>,
    ) -> Result<(), PersistenceError> {
        let rows: usize = mutations::assign_player_team(&mut self.conn, player_id, team_id)?;
        if rows == 0 {
            return Err(PersistenceError::PlayerNotFound(player_id));
        }
        Ok(())
    }

    // ========================================================================
    // Matches and sets
    // ========================================================================

    /// Creates a match and its first set in one transaction.
    ///
    /// # Returns
    ///
    /// The new match id and set 1.
    ///
    /// # Errors
    ///
    /// Returns an error if either team does not exist or a write fails.
    pub fn create_match(
        &mut self,
        home_team_id: i64,
        guest_team_id: i64,
    ) -> Result<(i64, GameSet), PersistenceError> {
        self.conn
            .transaction::<_, PersistenceError, _>(|conn| {
                let match_id: i64 = mutations::insert_match(conn, home_team_id, guest_team_id)?;
                let set_number: i32 = next_set_number(None);
                let set_id: i64 = mutations::insert_set(conn, match_id, set_number)?;
                Ok((
                    match_id,
                    GameSet::new(set_id, match_id, set_number, Score::default()),
                ))
            })
    }

    /// Creates the next set of a match, numbered after the highest existing one.
    ///
    /// # Errors
    ///
    /// Returns `MatchNotFound` if the match does not exist.
    pub fn create_next_set(&mut self, match_id: i64) -> Result<GameSet, PersistenceError> {
        self.conn.transaction::<_, PersistenceError, _>(|conn| {
            queries::get_match(conn, match_id)?;
            let set_number: i32 = next_set_number(queries::max_set_number(conn, match_id)?);
            let set_id: i64 = mutations::insert_set(conn, match_id, set_number)?;
            Ok(GameSet::new(set_id, match_id, set_number, Score::default()))
        })
    }

    /// Retrieves a match by id.
    ///
    /// # Errors
    ///
    /// Returns `MatchNotFound` if no such match exists.
    pub fn get_match(&mut self, match_id: i64) -> Result<Match, PersistenceError> {
        queries::get_match(&mut self.conn, match_id)
    }

    /// Lists all matches, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn list_matches(&mut self) -> Result<Vec<MatchSummary>, PersistenceError> {
        queries::list_matches(&mut self.conn)
    }

    /// Lists a match's sets in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn list_match_sets(&mut self, match_id: i64) -> Result<Vec<GameSet>, PersistenceError> {
        queries::list_match_sets(&mut self.conn, match_id)
    }

    /// Returns the highest-numbered set of a match, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn latest_match_set(&mut self, match_id: i64) -> Result<Option<GameSet>, PersistenceError> {
        queries::latest_match_set(&mut self.conn, match_id)
    }

    /// Retrieves a set by id.
    ///
    /// # Errors
    ///
    /// Returns `SetNotFound` if no such set exists.
    pub fn get_set(&mut self, set_id: i64) -> Result<GameSet, PersistenceError> {
        queries::get_set(&mut self.conn, set_id)
    }

    /// Overwrites a set's stored score.
    ///
    /// # Errors
    ///
    /// Returns `SetNotFound` if no such set exists.
    pub fn update_set_score(&mut self, set_id: i64, score: Score) -> Result<(), PersistenceError> {
        let rows: usize = mutations::update_set_score(&mut self.conn, set_id, score)?;
        if rows == 0 {
            return Err(PersistenceError::SetNotFound(set_id));
        }
        Ok(())
    }

    // ========================================================================
    // Actions
    // ========================================================================

    /// Inserts an action and, when it scores, the owning set's new score.
    ///
    /// Both writes share a transaction.
    ///
    /// # Arguments
    ///
    /// * `action` - The validated action
    /// * `new_score` - The set score after this action, if it changed
    ///
    /// # Errors
    ///
    /// Returns an error if either write fails; nothing is written then.
    pub fn record_action(
        &mut self,
        action: &NewAction,
        new_score: Option<Score>,
    ) -> Result<i64, PersistenceError> {
        self.conn.transaction::<_, PersistenceError, _>(|conn| {
            let action_id: i64 = mutations::insert_action(conn, action)?;
            if let Some(score) = new_score
                && mutations::update_set_score(conn, action.set_id(), score)? == 0
            {
                return Err(PersistenceError::SetNotFound(action.set_id()));
            }
            Ok(action_id)
        })
    }

    /// Retrieves an action by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn find_action(
        &mut self,
        action_id: i64,
    ) -> Result<Option<RecordedAction>, PersistenceError> {
        queries::find_action(&mut self.conn, action_id)
    }

    /// Lists a set's actions in recording order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn list_set_actions(
        &mut self,
        set_id: i64,
    ) -> Result<Vec<RecordedAction>, PersistenceError> {
        queries::list_set_actions(&mut self.conn, set_id)
    }

    /// Lists every action of a match in recording order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn list_match_actions(
        &mut self,
        match_id: i64,
    ) -> Result<Vec<RecordedAction>, PersistenceError> {
        queries::list_match_actions(&mut self.conn, match_id)
    }

    /// Returns the most recent actions of a match, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn action_history(
        &mut self,
        match_id: i64,
        limit: i64,
    ) -> Result<Vec<ActionHistoryEntry>, PersistenceError> {
        queries::action_history(&mut self.conn, match_id, limit)
    }

    /// Rewrites an existing action.
    ///
    /// # Errors
    ///
    /// Returns `ActionNotFound` if no such action exists.
    pub fn update_action(
        &mut self,
        action_id: i64,
        action: &NewAction,
    ) -> Result<(), PersistenceError> {
        let rows: usize = mutations::update_action(&mut self.conn, action_id, action)?;
        if rows == 0 {
            return Err(PersistenceError::ActionNotFound(action_id));
        }
        Ok(())
    }

    /// Deletes an action.
    ///
    /// # Returns
    ///
    /// `true` if a row was deleted, `false` if the action did not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_action(&mut self, action_id: i64) -> Result<bool, PersistenceError> {
        Ok(mutations::delete_action(&mut self.conn, action_id)? > 0)
    }
}
