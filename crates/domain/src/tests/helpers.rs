// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ActionCategory, AttackResult, Executor, PointDetail, RecordedAction, ResultCode, SetResult,
    derive_point_attribution,
};

pub fn recorded(
    action_id: i64,
    set_id: i64,
    category: ActionCategory,
    executor: Executor,
    result: Option<ResultCode>,
    target_player_id: Option<i64>,
    point_detail: Option<PointDetail>,
) -> RecordedAction {
    RecordedAction {
        action_id,
        set_id,
        category,
        executor,
        result,
        target_player_id,
        point_detail,
        point_for: derive_point_attribution(category, point_detail),
        created_at: String::from("2026-03-01 18:00:00"),
    }
}

pub fn set_to(action_id: i64, set_id: i64, setter: i64, target: Option<i64>) -> RecordedAction {
    recorded(
        action_id,
        set_id,
        ActionCategory::Set,
        Executor::Player(setter),
        Some(ResultCode::Set(SetResult::Good)),
        target,
        None,
    )
}

pub fn attack(action_id: i64, set_id: i64, attacker: i64, result: AttackResult) -> RecordedAction {
    recorded(
        action_id,
        set_id,
        ActionCategory::Attack,
        Executor::Player(attacker),
        Some(ResultCode::Attack(result)),
        None,
        None,
    )
}

pub fn our_point(action_id: i64, set_id: i64) -> RecordedAction {
    recorded(
        action_id,
        set_id,
        ActionCategory::OurPoint,
        Executor::Team,
        None,
        None,
        None,
    )
}
