// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use volley_stats::MatchSession;
use volley_stats_persistence::Persistence;

use crate::{
    AddPlayerRequest, CreateTeamRequest, RecordActionRequest, RecordOutcome, StartMatchRequest,
    StartMatchResponse, add_player, create_team, record_action, start_match,
};

pub const OPPONENT: &str = "Ravens";

/// A store with one team of three players and an empty session.
pub struct Harness {
    pub persistence: Persistence,
    pub session: MatchSession,
    pub team_id: i64,
    pub setter_id: i64,
    pub attacker_id: i64,
    pub opposite_id: i64,
}

fn add_test_player(
    persistence: &mut Persistence,
    name: &str,
    jersey_number: i32,
    position: &str,
    team_id: i64,
) -> i64 {
    add_player(
        persistence,
        &AddPlayerRequest {
            name: String::from(name),
            jersey_number: Some(jersey_number),
            position: Some(String::from(position)),
            team_id: Some(team_id),
        },
    )
    .unwrap()
}

pub fn create_harness() -> Harness {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let team_id: i64 = create_team(
        &mut persistence,
        &CreateTeamRequest {
            name: String::from("Falcons"),
        },
    )
    .unwrap()
    .team_id;

    let setter_id: i64 = add_test_player(&mut persistence, "Mo", 7, "setter", team_id);
    let attacker_id: i64 = add_test_player(&mut persistence, "Kai", 12, "outside", team_id);
    let opposite_id: i64 = add_test_player(&mut persistence, "Lea", 3, "opposite", team_id);

    Harness {
        persistence,
        session: MatchSession::new(),
        team_id,
        setter_id,
        attacker_id,
        opposite_id,
    }
}

pub fn start_test_match(harness: &mut Harness) -> StartMatchResponse {
    start_match(
        &mut harness.persistence,
        &mut harness.session,
        &StartMatchRequest {
            own_team_id: harness.team_id,
            opponent_name: String::from(OPPONENT),
        },
    )
    .unwrap()
}

pub fn action(
    executor_id: i64,
    category: &str,
    result: Option<&str>,
    target_id: Option<i64>,
    point_detail: Option<&str>,
) -> RecordActionRequest {
    RecordActionRequest {
        executor_id,
        category: String::from(category),
        result: result.map(String::from),
        target_id,
        point_detail: point_detail.map(String::from),
    }
}

/// A generic team point.
pub fn our_point() -> RecordActionRequest {
    action(0, "our_point", None, None, None)
}

/// Records an action that must be accepted.
pub fn record(harness: &mut Harness, request: &RecordActionRequest) -> RecordOutcome {
    let outcome: RecordOutcome =
        record_action(&mut harness.persistence, &mut harness.session, request);
    assert!(outcome.accepted, "action was rejected: {request:?}");
    outcome
}

/// Plays a short rally history into set 1 of a new match.
///
/// Resulting score 2:2. Mo sets Kai twice (kill, then error) and Lea once,
/// Lea kills without a set and serves an ace, a half-ace and an error.
pub fn record_sample_match(harness: &mut Harness) -> StartMatchResponse {
    let started: StartMatchResponse = start_test_match(harness);
    let (mo, kai, lea) = (harness.setter_id, harness.attacker_id, harness.opposite_id);

    let history: [RecordActionRequest; 10] = [
        action(mo, "set", Some("good"), Some(kai), None),
        action(kai, "attack", Some("kill"), None, Some("attack_point")),
        action(lea, "attack", Some("kill"), None, None),
        action(mo, "set", Some("good"), Some(kai), None),
        action(kai, "attack", Some("error"), None, Some("own_floor_error")),
        action(mo, "set", Some("medium"), Some(lea), None),
        action(lea, "serve", Some("ace"), None, None),
        action(lea, "serve", Some("half_ace"), None, None),
        action(lea, "serve", Some("error"), None, Some("own_floor_error")),
        our_point(),
    ];
    for request in &history {
        record(harness, request);
    }

    started
}
