// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ActionCategory, AttackResult, DomainError, Executor, Player, Position, ResultCode, SetResult,
    validate_action_shape, validate_player_fields, validate_player_unique, validate_team_name,
};

fn roster() -> Vec<Player> {
    vec![
        Player::with_id(1, "Mo", Some(7), Some(Position::Setter), Some(1)),
        Player::with_id(2, "Kai", Some(12), Some(Position::Outside), Some(1)),
        Player::with_id(3, "Ren", None, None, None),
    ]
}

#[test]
fn test_validate_team_name_rejects_blank() {
    assert!(validate_team_name("Falcons").is_ok());
    assert!(matches!(
        validate_team_name("   "),
        Err(DomainError::InvalidTeamName(_))
    ));
}

#[test]
fn test_validate_player_fields_rejects_empty_name() {
    let player: Player = Player::new("  ", Some(3), None, None);
    assert!(matches!(
        validate_player_fields(&player),
        Err(DomainError::InvalidPlayerName(_))
    ));
}

#[test]
fn test_validate_player_fields_rejects_out_of_range_number() {
    let player: Player = Player::new("Ana", Some(100), None, None);
    assert_eq!(
        validate_player_fields(&player),
        Err(DomainError::InvalidJerseyNumber(100))
    );

    let negative: Player = Player::new("Ana", Some(-1), None, None);
    assert!(validate_player_fields(&negative).is_err());
}

#[test]
fn test_validate_player_fields_accepts_missing_number() {
    let player: Player = Player::new("Ana", None, None, None);
    assert!(validate_player_fields(&player).is_ok());
}

#[test]
fn test_new_player_with_taken_name_is_rejected() {
    let player: Player = Player::new("Mo", Some(99), None, None);
    assert_eq!(
        validate_player_unique(&player, &roster()),
        Err(DomainError::DuplicatePlayerName(String::from("Mo")))
    );
}

#[test]
fn test_new_player_with_taken_number_is_rejected() {
    let player: Player = Player::new("Lia", Some(7), None, None);
    assert_eq!(
        validate_player_unique(&player, &roster()),
        Err(DomainError::DuplicateJerseyNumber(7))
    );
}

#[test]
fn test_editing_own_record_unchanged_is_accepted() {
    let player: Player = Player::with_id(1, "Mo", Some(7), Some(Position::Setter), Some(1));
    assert!(validate_player_unique(&player, &roster()).is_ok());
}

#[test]
fn test_editing_into_another_players_number_is_rejected() {
    let player: Player = Player::with_id(1, "Mo", Some(12), None, Some(1));
    assert_eq!(
        validate_player_unique(&player, &roster()),
        Err(DomainError::DuplicateJerseyNumber(12))
    );
}

#[test]
fn test_players_without_numbers_do_not_collide() {
    let player: Player = Player::new("Sam", None, None, None);
    assert!(validate_player_unique(&player, &roster()).is_ok());
}

#[test]
fn test_action_shape_requires_player_for_attack() {
    let result: Result<(), DomainError> = validate_action_shape(
        ActionCategory::Attack,
        Executor::Team,
        Some(ResultCode::Attack(AttackResult::Kill)),
        None,
    );
    assert_eq!(
        result,
        Err(DomainError::ExecutorRequired {
            category: ActionCategory::Attack
        })
    );
}

#[test]
fn test_action_shape_rejects_player_for_our_point() {
    let result: Result<(), DomainError> =
        validate_action_shape(ActionCategory::OurPoint, Executor::Player(2), None, None);
    assert_eq!(
        result,
        Err(DomainError::ExecutorNotAllowed {
            category: ActionCategory::OurPoint
        })
    );
}

#[test]
fn test_action_shape_rejects_result_from_other_category() {
    let result: Result<(), DomainError> = validate_action_shape(
        ActionCategory::Serve,
        Executor::Player(2),
        Some(ResultCode::Set(SetResult::Good)),
        None,
    );
    assert!(matches!(result, Err(DomainError::InvalidResult { .. })));
}

#[test]
fn test_action_shape_accepts_set_with_target() {
    let result: Result<(), DomainError> = validate_action_shape(
        ActionCategory::Set,
        Executor::Player(1),
        Some(ResultCode::Set(SetResult::Medium)),
        Some(2),
    );
    assert!(result.is_ok());
}
