// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use volley_stats_domain::{Executor, GameSet, RecordedAction, Score, Side};

use crate::tests::helpers::{Harness, action, create_harness, our_point, record, start_test_match};
use crate::{
    ApiError, RecordActionRequest, RecordActionResponse, RecordOutcome, StartMatchResponse,
    get_action, record_action, try_record_action,
};

fn stored_score(harness: &mut Harness, set_id: i64) -> Score {
    let set: GameSet = harness.persistence.get_set(set_id).unwrap();
    set.score
}

#[test]
fn test_action_without_open_set_is_rejected() {
    let mut harness: Harness = create_harness();

    let outcome: RecordOutcome =
        record_action(&mut harness.persistence, &mut harness.session, &our_point());
    assert_eq!(outcome, RecordOutcome::default());

    let result: Result<RecordActionResponse, ApiError> =
        try_record_action(&mut harness.persistence, &mut harness.session, &our_point());
    assert!(matches!(result, Err(ApiError::NoActiveContext { .. })));
}

#[test]
fn test_our_point_scores_for_own_team() {
    let mut harness: Harness = create_harness();
    let started: StartMatchResponse = start_test_match(&mut harness);

    let response: RecordActionResponse =
        try_record_action(&mut harness.persistence, &mut harness.session, &our_point()).unwrap();

    assert_eq!(response.score, Score::new(1, 0));
    assert!(!response.set_ended);
    assert_eq!(
        stored_score(&mut harness, started.first_set.set_id),
        Score::new(1, 0)
    );

    let stored: RecordedAction = get_action(&mut harness.persistence, response.action_id).unwrap();
    assert_eq!(stored.executor, Executor::Team);
    assert_eq!(stored.point_for, Some(Side::Own));
}

#[test]
fn test_kill_without_point_detail_is_statistics_only() {
    let mut harness: Harness = create_harness();
    let started: StartMatchResponse = start_test_match(&mut harness);

    let kill: RecordActionRequest = action(harness.attacker_id, "attack", Some("kill"), None, None);
    record(&mut harness, &kill);

    assert_eq!(harness.session.current_score(), Score::default());
    assert_eq!(
        stored_score(&mut harness, started.first_set.set_id),
        Score::default()
    );
}

#[test]
fn test_point_detail_decides_attribution() {
    let mut harness: Harness = create_harness();
    let started: StartMatchResponse = start_test_match(&mut harness);

    let request: RecordActionRequest = action(
        harness.attacker_id,
        "attack",
        Some("kill"),
        None,
        Some("attack_point"),
    );
    record(&mut harness, &request);
    let request: RecordActionRequest = action(
        harness.opposite_id,
        "attack",
        Some("error"),
        None,
        Some("own_floor_error"),
    );
    record(&mut harness, &request);
    let request: RecordActionRequest = action(
        harness.setter_id,
        "block",
        Some("touch"),
        None,
        Some("opponent_save"),
    );
    record(&mut harness, &request);

    assert_eq!(harness.session.current_score(), Score::new(1, 1));
    assert_eq!(
        stored_score(&mut harness, started.first_set.set_id),
        Score::new(1, 1)
    );
}

#[test]
fn test_block_touch_awards_no_point() {
    let mut harness: Harness = create_harness();
    start_test_match(&mut harness);

    let request: RecordActionRequest =
        action(harness.setter_id, "block", Some("touch"), None, None);
    record(&mut harness, &request);

    assert_eq!(harness.session.current_score(), Score::default());
}

#[test]
fn test_set_with_target_is_recorded() {
    let mut harness: Harness = create_harness();
    start_test_match(&mut harness);

    let response: RecordActionResponse = try_record_action(
        &mut harness.persistence,
        &mut harness.session,
        &action(
            harness.setter_id,
            "assist",
            Some("good"),
            Some(harness.attacker_id),
            None,
        ),
    )
    .unwrap();

    let stored: RecordedAction = get_action(&mut harness.persistence, response.action_id).unwrap();
    assert_eq!(stored.target_player_id, Some(harness.attacker_id));
    assert_eq!(stored.point_for, None);
}

#[test]
fn test_unrecognized_input_is_rejected() {
    let mut harness: Harness = create_harness();
    start_test_match(&mut harness);

    let cases: [(RecordActionRequest, &str); 3] = [
        (
            action(harness.attacker_id, "spike", None, None, None),
            "category",
        ),
        (
            action(harness.attacker_id, "attack", Some("ace"), None, None),
            "result",
        ),
        (
            action(
                harness.attacker_id,
                "attack",
                Some("kill"),
                None,
                Some("lucky"),
            ),
            "point_detail",
        ),
    ];

    for (request, expected_field) in cases {
        let result: Result<RecordActionResponse, ApiError> =
            try_record_action(&mut harness.persistence, &mut harness.session, &request);
        assert!(
            matches!(
                result,
                Err(ApiError::InvalidInput { ref field, .. }) if field == expected_field
            ),
            "expected invalid {expected_field}, got {result:?}"
        );
    }
}

#[test]
fn test_action_shape_is_enforced() {
    let mut harness: Harness = create_harness();
    start_test_match(&mut harness);

    let team_attack: Result<RecordActionResponse, ApiError> = try_record_action(
        &mut harness.persistence,
        &mut harness.session,
        &action(0, "attack", Some("kill"), None, None),
    );
    assert!(matches!(
        team_attack,
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "executor_matches_category"
    ));

    let player_point: Result<RecordActionResponse, ApiError> = try_record_action(
        &mut harness.persistence,
        &mut harness.session,
        &action(harness.setter_id, "our_point", None, None, None),
    );
    assert!(matches!(
        player_point,
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "executor_matches_category"
    ));

    let attack_with_target: Result<RecordActionResponse, ApiError> = try_record_action(
        &mut harness.persistence,
        &mut harness.session,
        &action(
            harness.attacker_id,
            "attack",
            Some("kill"),
            Some(harness.setter_id),
            None,
        ),
    );
    assert!(matches!(
        attack_with_target,
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "target_only_on_sets"
    ));
}

#[test]
fn test_failed_write_changes_nothing() {
    let mut harness: Harness = create_harness();
    let started: StartMatchResponse = start_test_match(&mut harness);
    record(&mut harness, &our_point());

    // Unknown executor violates the players foreign key.
    let outcome: RecordOutcome = record_action(
        &mut harness.persistence,
        &mut harness.session,
        &action(999, "attack", Some("kill"), None, Some("attack_point")),
    );

    assert!(!outcome.accepted);
    assert_eq!(harness.session.current_score(), Score::new(1, 0));
    assert_eq!(
        stored_score(&mut harness, started.first_set.set_id),
        Score::new(1, 0)
    );
    assert_eq!(
        harness
            .persistence
            .list_set_actions(started.first_set.set_id)
            .unwrap()
            .len(),
        1
    );
}
