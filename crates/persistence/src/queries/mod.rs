// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query modules for the persistence layer.
//!
//! This module contains all read-only queries.
//!
//! ## Module Organization
//!
//! - `teams`: Team lookups
//! - `players`: Roster queries
//! - `matches`: Match lookups and the match list
//! - `sets`: Set lookups and set numbering
//! - `actions`: Action lookups, per-set/per-match history

pub mod actions;
pub mod matches;
pub mod players;
pub mod sets;
pub mod teams;

pub use actions::{action_history, find_action, list_match_actions, list_set_actions};
pub use matches::{get_match, list_matches};
pub use players::{get_player, list_players, list_team_players};
pub use sets::{get_set, latest_match_set, list_match_sets, max_set_number};
pub use teams::{find_team_by_name, get_team, list_teams};
