// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use volley_stats_domain::{Player, Position, Team};
use volley_stats_persistence::Persistence;

use crate::tests::helpers::{Harness, create_harness};
use crate::{
    AddPlayerRequest, ApiError, CreateTeamRequest, ListPlayersResponse, ListTeamsResponse,
    UpdatePlayerRequest, add_player, assign_player_to_team, create_team, list_players,
    list_teams, team_players, try_update_player, update_player,
};

fn new_player(name: &str, jersey_number: Option<i32>) -> AddPlayerRequest {
    AddPlayerRequest {
        name: String::from(name),
        jersey_number,
        position: None,
        team_id: None,
    }
}

#[test]
fn test_create_team_trims_name() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let team: Team = create_team(
        &mut persistence,
        &CreateTeamRequest {
            name: String::from("  Falcons  "),
        },
    )
    .unwrap();

    assert_eq!(team.name, "Falcons");
    let listed: ListTeamsResponse = list_teams(&mut persistence).unwrap();
    assert_eq!(listed.teams, vec![team]);
}

#[test]
fn test_create_team_rejects_empty_name() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let result: Result<Team, ApiError> = create_team(
        &mut persistence,
        &CreateTeamRequest {
            name: String::from("   "),
        },
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "team_name"
    ));
}

#[test]
fn test_create_team_rejects_duplicate_name() {
    let mut harness: Harness = create_harness();

    let result: Result<Team, ApiError> = create_team(
        &mut harness.persistence,
        &CreateTeamRequest {
            name: String::from("Falcons"),
        },
    );

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "unique_team_name"
    ));
}

#[test]
fn test_add_player_parses_position_and_team() {
    let mut harness: Harness = create_harness();

    let player: Player = harness.persistence.get_player(harness.setter_id).unwrap();

    assert_eq!(player.position, Some(Position::Setter));
    assert_eq!(player.team_id, Some(harness.team_id));
}

#[test]
fn test_duplicate_name_is_rejected() {
    let mut harness: Harness = create_harness();

    let result: Result<i64, ApiError> =
        add_player(&mut harness.persistence, &new_player("Mo", Some(40)));

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "unique_player_name"
    ));
}

#[test]
fn test_duplicate_jersey_number_is_rejected() {
    let mut harness: Harness = create_harness();

    let result: Result<i64, ApiError> =
        add_player(&mut harness.persistence, &new_player("Noa", Some(7)));

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "unique_jersey_number"
    ));
}

#[test]
fn test_players_without_jersey_numbers_do_not_collide() {
    let mut harness: Harness = create_harness();

    add_player(&mut harness.persistence, &new_player("Noa", None)).unwrap();
    add_player(&mut harness.persistence, &new_player("Ivy", None)).unwrap();

    let everyone: ListPlayersResponse = list_players(&mut harness.persistence).unwrap();
    assert_eq!(everyone.players.len(), 5);
}

#[test]
fn test_invalid_player_input() {
    let mut harness: Harness = create_harness();

    let bad_number: Result<i64, ApiError> =
        add_player(&mut harness.persistence, &new_player("Noa", Some(100)));
    assert!(matches!(
        bad_number,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "jersey_number"
    ));

    let bad_position: Result<i64, ApiError> = add_player(
        &mut harness.persistence,
        &AddPlayerRequest {
            position: Some(String::from("goalkeeper")),
            ..new_player("Noa", None)
        },
    );
    assert!(matches!(
        bad_position,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "position"
    ));

    let unknown_team: Result<i64, ApiError> = add_player(
        &mut harness.persistence,
        &AddPlayerRequest {
            team_id: Some(999),
            ..new_player("Noa", None)
        },
    );
    assert!(matches!(
        unknown_team,
        Err(ApiError::ResourceNotFound { .. })
    ));
}

#[test]
fn test_saving_unchanged_player_is_accepted() {
    let mut harness: Harness = create_harness();

    let accepted: bool = update_player(
        &mut harness.persistence,
        &UpdatePlayerRequest {
            player_id: harness.setter_id,
            name: String::from("Mo"),
            jersey_number: Some(7),
            position: Some(String::from("Setter")),
        },
    );

    assert!(accepted);
}

#[test]
fn test_update_player_to_taken_name_is_rejected() {
    let mut harness: Harness = create_harness();

    let accepted: bool = update_player(
        &mut harness.persistence,
        &UpdatePlayerRequest {
            player_id: harness.attacker_id,
            name: String::from("Mo"),
            jersey_number: Some(12),
            position: None,
        },
    );

    assert!(!accepted);
    let unchanged: Player = harness.persistence.get_player(harness.attacker_id).unwrap();
    assert_eq!(unchanged.name, "Kai");
}

#[test]
fn test_update_player_keeps_team() {
    let mut harness: Harness = create_harness();

    try_update_player(
        &mut harness.persistence,
        &UpdatePlayerRequest {
            player_id: harness.attacker_id,
            name: String::from("Kai"),
            jersey_number: Some(21),
            position: Some(String::from("universal")),
        },
    )
    .unwrap();

    let player: Player = harness.persistence.get_player(harness.attacker_id).unwrap();
    assert_eq!(player.jersey_number, Some(21));
    assert_eq!(player.position, Some(Position::Universal));
    assert_eq!(player.team_id, Some(harness.team_id));
}

#[test]
fn test_update_missing_player() {
    let mut harness: Harness = create_harness();

    let result: Result<(), ApiError> = try_update_player(
        &mut harness.persistence,
        &UpdatePlayerRequest {
            player_id: 999,
            name: String::from("Ghost"),
            jersey_number: None,
            position: None,
        },
    );

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_assign_player_moves_between_teams() {
    let mut harness: Harness = create_harness();
    let other_team: Team = create_team(
        &mut harness.persistence,
        &CreateTeamRequest {
            name: String::from("Herons"),
        },
    )
    .unwrap();

    assign_player_to_team(
        &mut harness.persistence,
        harness.opposite_id,
        Some(other_team.team_id),
    )
    .unwrap();

    let home: ListPlayersResponse =
        team_players(&mut harness.persistence, harness.team_id).unwrap();
    let other: ListPlayersResponse =
        team_players(&mut harness.persistence, other_team.team_id).unwrap();
    assert_eq!(home.players.len(), 2);
    assert_eq!(other.players.len(), 1);
    assert_eq!(other.players[0].name, "Lea");

    assign_player_to_team(&mut harness.persistence, harness.opposite_id, None).unwrap();
    let other_after: ListPlayersResponse =
        team_players(&mut harness.persistence, other_team.team_id).unwrap();
    assert!(other_after.players.is_empty());
}

#[test]
fn test_assign_to_unknown_team_or_player() {
    let mut harness: Harness = create_harness();

    let unknown_team: Result<(), ApiError> =
        assign_player_to_team(&mut harness.persistence, harness.setter_id, Some(999));
    assert!(matches!(unknown_team, Err(ApiError::ResourceNotFound { .. })));

    let unknown_player: Result<(), ApiError> =
        assign_player_to_team(&mut harness.persistence, 999, Some(harness.team_id));
    assert!(matches!(
        unknown_player,
        Err(ApiError::ResourceNotFound { .. })
    ));
}
