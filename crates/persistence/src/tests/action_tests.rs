// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{Fixture, create_fixture, create_match, new_action};
use crate::{ActionHistoryEntry, PersistenceError};
use volley_stats_domain::{
    ActionCategory, AttackResult, Executor, GameSet, NewAction, PointDetail, RecordedAction,
    ResultCode, Score, SetResult, Side,
};

#[test]
fn test_record_action_with_score_update() {
    let mut fixture: Fixture = create_fixture();
    let (_, first_set) = create_match(&mut fixture);

    let action: NewAction = new_action(
        first_set.set_id,
        ActionCategory::Attack,
        Executor::Player(fixture.attacker_id),
        Some(ResultCode::Attack(AttackResult::Kill)),
        None,
        Some(PointDetail::AttackPoint),
    );

    let action_id: i64 = fixture
        .persistence
        .record_action(&action, Some(Score::new(1, 0)))
        .unwrap();

    let stored: RecordedAction = fixture.persistence.find_action(action_id).unwrap().unwrap();
    assert_eq!(stored.set_id, first_set.set_id);
    assert_eq!(stored.category, ActionCategory::Attack);
    assert_eq!(stored.executor, Executor::Player(fixture.attacker_id));
    assert_eq!(stored.result, Some(ResultCode::Attack(AttackResult::Kill)));
    assert_eq!(stored.point_detail, Some(PointDetail::AttackPoint));
    assert_eq!(stored.point_for, Some(Side::Own));
    assert!(!stored.created_at.is_empty());

    let set: GameSet = fixture.persistence.get_set(first_set.set_id).unwrap();
    assert_eq!(set.score, Score::new(1, 0));
}

#[test]
fn test_record_action_without_score_leaves_set_untouched() {
    let mut fixture: Fixture = create_fixture();
    let (_, first_set) = create_match(&mut fixture);

    let action: NewAction = new_action(
        first_set.set_id,
        ActionCategory::Set,
        Executor::Player(fixture.setter_id),
        Some(ResultCode::Set(SetResult::Good)),
        Some(fixture.attacker_id),
        None,
    );
    fixture.persistence.record_action(&action, None).unwrap();

    let set: GameSet = fixture.persistence.get_set(first_set.set_id).unwrap();
    assert_eq!(set.score, Score::default());
}

#[test]
fn test_record_action_for_unknown_set_writes_nothing() {
    let mut fixture: Fixture = create_fixture();
    let (match_id, _) = create_match(&mut fixture);

    let action: NewAction = new_action(
        999,
        ActionCategory::OurPoint,
        Executor::Team,
        None,
        None,
        None,
    );
    let result: Result<i64, PersistenceError> = fixture
        .persistence
        .record_action(&action, Some(Score::new(1, 0)));

    assert!(result.is_err());
    assert!(
        fixture
            .persistence
            .list_match_actions(match_id)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_team_action_stores_null_executor() {
    let mut fixture: Fixture = create_fixture();
    let (_, first_set) = create_match(&mut fixture);

    let action: NewAction = new_action(
        first_set.set_id,
        ActionCategory::OurPoint,
        Executor::from_id(0),
        None,
        None,
        None,
    );
    let action_id: i64 = fixture
        .persistence
        .record_action(&action, Some(Score::new(1, 0)))
        .unwrap();

    let stored: RecordedAction = fixture.persistence.find_action(action_id).unwrap().unwrap();
    assert_eq!(stored.executor, Executor::Team);
    assert_eq!(stored.executor_id(), None);
    assert_eq!(stored.point_for, Some(Side::Own));
}

#[test]
fn test_find_missing_action_is_none() {
    let mut fixture: Fixture = create_fixture();
    assert_eq!(fixture.persistence.find_action(77).unwrap(), None);
}

#[test]
fn test_match_actions_span_sets_in_recording_order() {
    let mut fixture: Fixture = create_fixture();
    let (match_id, first_set) = create_match(&mut fixture);
    let second_set: GameSet = fixture.persistence.create_next_set(match_id).unwrap();

    let first: i64 = fixture
        .persistence
        .record_action(
            &new_action(
                first_set.set_id,
                ActionCategory::OurPoint,
                Executor::Team,
                None,
                None,
                None,
            ),
            None,
        )
        .unwrap();
    let second: i64 = fixture
        .persistence
        .record_action(
            &new_action(
                second_set.set_id,
                ActionCategory::OurPoint,
                Executor::Team,
                None,
                None,
                None,
            ),
            None,
        )
        .unwrap();

    let all: Vec<RecordedAction> = fixture.persistence.list_match_actions(match_id).unwrap();
    let ids: Vec<i64> = all.iter().map(|action| action.action_id).collect();
    assert_eq!(ids, vec![first, second]);

    let only_second: Vec<RecordedAction> = fixture
        .persistence
        .list_set_actions(second_set.set_id)
        .unwrap();
    assert_eq!(only_second.len(), 1);
    assert_eq!(only_second[0].action_id, second);
}

#[test]
fn test_action_history_is_newest_first_with_names() {
    let mut fixture: Fixture = create_fixture();
    let (match_id, first_set) = create_match(&mut fixture);

    fixture
        .persistence
        .record_action(
            &new_action(
                first_set.set_id,
                ActionCategory::Set,
                Executor::Player(fixture.setter_id),
                Some(ResultCode::Set(SetResult::Good)),
                Some(fixture.attacker_id),
                None,
            ),
            None,
        )
        .unwrap();
    for _ in 0..3 {
        fixture
            .persistence
            .record_action(
                &new_action(
                    first_set.set_id,
                    ActionCategory::OurPoint,
                    Executor::Team,
                    None,
                    None,
                    None,
                ),
                None,
            )
            .unwrap();
    }

    let history: Vec<ActionHistoryEntry> =
        fixture.persistence.action_history(match_id, 10).unwrap();
    assert_eq!(history.len(), 4);
    assert!(history[0].action_id > history[1].action_id);
    assert_eq!(history[0].executor_name, None);

    let oldest: &ActionHistoryEntry = &history[3];
    assert_eq!(oldest.set_number, 1);
    assert_eq!(oldest.executor_name.as_deref(), Some("Mo"));
    assert_eq!(oldest.target_name.as_deref(), Some("Kai"));

    let limited: Vec<ActionHistoryEntry> = fixture.persistence.action_history(match_id, 2).unwrap();
    assert_eq!(limited.len(), 2);
}

#[test]
fn test_update_action_rewrites_row() {
    let mut fixture: Fixture = create_fixture();
    let (_, first_set) = create_match(&mut fixture);

    let action_id: i64 = fixture
        .persistence
        .record_action(
            &new_action(
                first_set.set_id,
                ActionCategory::Attack,
                Executor::Player(fixture.attacker_id),
                Some(ResultCode::Attack(AttackResult::Tip)),
                None,
                None,
            ),
            None,
        )
        .unwrap();

    let corrected: NewAction = new_action(
        first_set.set_id,
        ActionCategory::Attack,
        Executor::Player(fixture.attacker_id),
        Some(ResultCode::Attack(AttackResult::Error)),
        None,
        Some(PointDetail::OwnFloorError),
    );
    fixture
        .persistence
        .update_action(action_id, &corrected)
        .unwrap();

    let stored: RecordedAction = fixture.persistence.find_action(action_id).unwrap().unwrap();
    assert_eq!(stored.result, Some(ResultCode::Attack(AttackResult::Error)));
    assert_eq!(stored.point_for, Some(Side::Opponent));

    assert_eq!(
        fixture.persistence.update_action(999, &corrected),
        Err(PersistenceError::ActionNotFound(999))
    );
}

#[test]
fn test_delete_action_reports_whether_a_row_existed() {
    let mut fixture: Fixture = create_fixture();
    let (_, first_set) = create_match(&mut fixture);

    let action_id: i64 = fixture
        .persistence
        .record_action(
            &new_action(
                first_set.set_id,
                ActionCategory::OurPoint,
                Executor::Team,
                None,
                None,
                None,
            ),
            None,
        )
        .unwrap();

    assert!(fixture.persistence.delete_action(action_id).unwrap());
    assert!(!fixture.persistence.delete_action(action_id).unwrap());
    assert_eq!(fixture.persistence.find_action(action_id).unwrap(), None);
}
