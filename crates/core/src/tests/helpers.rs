// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, MatchSession, apply};
use volley_stats_domain::{GameSet, Score};

pub const MATCH_ID: i64 = 10;
pub const HOME_TEAM_ID: i64 = 1;

pub fn create_test_set(set_id: i64, set_number: i32, score: Score) -> GameSet {
    GameSet::new(set_id, MATCH_ID, set_number, score)
}

pub fn open_command(current_set: GameSet) -> Command {
    Command::OpenMatch {
        match_id: MATCH_ID,
        home_team_id: HOME_TEAM_ID,
        current_set,
        active_player_ids: vec![3, 4, 5],
    }
}

pub fn create_open_session(score: Score) -> MatchSession {
    apply(
        &MatchSession::new(),
        open_command(create_test_set(100, 1, score)),
    )
    .unwrap()
    .new_session
}
