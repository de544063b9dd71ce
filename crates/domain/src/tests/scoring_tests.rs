// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{attack, our_point, recorded};
use crate::{
    ActionCategory, AttackResult, Executor, PointDetail, RecordedAction, ResultCode, Score,
    ServeResult, Side, derive_point_attribution, next_set_number, tally_score,
};

#[test]
fn test_set_not_over_below_target_or_without_lead() {
    assert!(!Score::new(24, 24).is_set_over());
    assert!(!Score::new(25, 24).is_set_over());
    assert!(!Score::new(26, 25).is_set_over());
    assert!(!Score::new(0, 0).is_set_over());
}

#[test]
fn test_set_over_with_target_and_lead() {
    assert!(Score::new(25, 23).is_set_over());
    assert!(Score::new(26, 24).is_set_over());
    assert!(Score::new(30, 28).is_set_over());
    assert!(Score::new(12, 25).is_set_over());
}

#[test]
fn test_detail_code_takes_priority_over_category() {
    assert_eq!(
        derive_point_attribution(ActionCategory::OurPoint, Some(PointDetail::OwnFloorError)),
        Some(Side::Opponent)
    );
    assert_eq!(
        derive_point_attribution(ActionCategory::OurPoint, Some(PointDetail::OwnSave)),
        None
    );
}

#[test]
fn test_our_point_without_detail_scores_for_us() {
    assert_eq!(
        derive_point_attribution(ActionCategory::OurPoint, None),
        Some(Side::Own)
    );
}

#[test]
fn test_other_categories_without_detail_score_nothing() {
    for category in [
        ActionCategory::Set,
        ActionCategory::Attack,
        ActionCategory::Serve,
        ActionCategory::Block,
        ActionCategory::Cover,
    ] {
        assert_eq!(derive_point_attribution(category, None), None);
    }
}

#[test]
fn test_next_set_number() {
    assert_eq!(next_set_number(None), 1);
    assert_eq!(next_set_number(Some(1)), 2);
    assert_eq!(next_set_number(Some(4)), 5);
}

#[test]
fn test_tally_counts_attributions() {
    let actions: Vec<RecordedAction> = vec![
        our_point(1, 1),
        attack(2, 1, 7, AttackResult::Kill),
        recorded(
            3,
            1,
            ActionCategory::Serve,
            Executor::Player(7),
            Some(ResultCode::Serve(ServeResult::Error)),
            None,
            Some(PointDetail::OwnFloorError),
        ),
        recorded(
            4,
            1,
            ActionCategory::Attack,
            Executor::Player(8),
            Some(ResultCode::Attack(AttackResult::Kill)),
            None,
            Some(PointDetail::AttackPoint),
        ),
    ];

    assert_eq!(tally_score(&actions), Score::new(2, 1));
}

#[test]
fn test_tally_is_order_independent() {
    let mut actions: Vec<RecordedAction> = vec![
        our_point(1, 1),
        our_point(2, 1),
        recorded(
            3,
            1,
            ActionCategory::OurPoint,
            Executor::Team,
            None,
            None,
            Some(PointDetail::OwnFloorError),
        ),
    ];
    let forward: Score = tally_score(&actions);
    actions.reverse();

    assert_eq!(tally_score(&actions), forward);
    assert_eq!(forward, Score::new(2, 1));
}
