// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Persistence;
use volley_stats_domain::{
    ActionCategory, Executor, GameSet, NewAction, Player, PointDetail, Position, ResultCode,
};

/// A database with a home team, an opponent and two home players.
pub struct Fixture {
    pub persistence: Persistence,
    pub home_team_id: i64,
    pub guest_team_id: i64,
    pub setter_id: i64,
    pub attacker_id: i64,
}

pub fn create_fixture() -> Fixture {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let home_team_id: i64 = persistence.create_team("Falcons").unwrap();
    let guest_team_id: i64 = persistence.create_team("Ravens").unwrap();
    let setter_id: i64 = persistence
        .insert_player(&Player::new(
            "Mo",
            Some(7),
            Some(Position::Setter),
            Some(home_team_id),
        ))
        .unwrap();
    let attacker_id: i64 = persistence
        .insert_player(&Player::new(
            "Kai",
            Some(12),
            Some(Position::Outside),
            Some(home_team_id),
        ))
        .unwrap();

    Fixture {
        persistence,
        home_team_id,
        guest_team_id,
        setter_id,
        attacker_id,
    }
}

pub fn create_match(fixture: &mut Fixture) -> (i64, GameSet) {
    fixture
        .persistence
        .create_match(fixture.home_team_id, fixture.guest_team_id)
        .unwrap()
}

pub fn new_action(
    set_id: i64,
    category: ActionCategory,
    executor: Executor,
    result: Option<ResultCode>,
    target: Option<i64>,
    detail: Option<PointDetail>,
) -> NewAction {
    NewAction::new(set_id, category, executor, result, target, detail).unwrap()
}
