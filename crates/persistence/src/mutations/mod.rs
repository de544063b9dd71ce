// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations for the persistence layer.
//!
//! ## Module Organization
//!
//! - `roster`: Teams and players
//! - `recording`: Matches, sets, actions and set scores
//!
//! Inserted ids are read back with `last_insert_rowid()` from the
//! `backend` module; everything else is Diesel DSL.

pub mod recording;
pub mod roster;

pub use recording::{
    delete_action, insert_action, insert_match, insert_set, update_action, update_set_score,
};
pub use roster::{assign_player_team, insert_player, insert_team, update_player};
