// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::action::{ActionCategory, Executor, ResultCode};
use crate::error::DomainError;
use crate::types::Player;

/// Highest jersey number accepted on the roster.
pub const MAX_JERSEY_NUMBER: i32 = 99;

/// Validates a team name.
///
/// # Errors
///
/// Returns an error if the name is empty after trimming.
pub fn validate_team_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidTeamName(String::from(
            "Team name cannot be empty",
        )));
    }
    Ok(())
}

/// Validates that a player's basic field constraints are met.
///
/// This function does NOT check for uniqueness (that requires the roster).
///
/// # Arguments
///
/// * `player` - The player to validate
///
/// # Errors
///
/// Returns an error if:
/// - The player's name is empty
/// - The jersey number is outside `0..=99`
pub fn validate_player_fields(player: &Player) -> Result<(), DomainError> {
    if player.name.trim().is_empty() {
        return Err(DomainError::InvalidPlayerName(String::from(
            "Name cannot be empty",
        )));
    }

    if let Some(number) = player.jersey_number
        && !(0..=MAX_JERSEY_NUMBER).contains(&number)
    {
        return Err(DomainError::InvalidJerseyNumber(number));
    }

    Ok(())
}

/// Validates that neither the player's name nor jersey number is taken.
///
/// The player's own record is skipped when it has an id, so saving an
/// unchanged player is accepted.
///
/// # Arguments
///
/// * `player` - The player being added or edited
/// * `existing` - All rostered players
///
/// # Errors
///
/// Returns an error if another player has the same name or jersey number.
pub fn validate_player_unique(player: &Player, existing: &[Player]) -> Result<(), DomainError> {
    let others = existing
        .iter()
        .filter(|other| player.player_id.is_none() || other.player_id != player.player_id);

    for other in others {
        if other.name == player.name {
            return Err(DomainError::DuplicatePlayerName(player.name.clone()));
        }
        if let Some(number) = player.jersey_number
            && other.jersey_number == Some(number)
        {
            return Err(DomainError::DuplicateJerseyNumber(number));
        }
    }

    Ok(())
}

/// Validates that an action's result, executor and target fit its category.
///
/// # Errors
///
/// Returns an error if:
/// - The result belongs to a different category
/// - A generic team point carries a result or a player
/// - Any other category is recorded without a player
/// - A target is given for anything but a set/assist
pub fn validate_action_shape(
    category: ActionCategory,
    executor: Executor,
    result: Option<ResultCode>,
    target_player_id: Option<i64>,
) -> Result<(), DomainError> {
    if let Some(code) = result {
        if !category.takes_result() {
            return Err(DomainError::ResultNotAllowed { category });
        }
        if code.category() != category {
            return Err(DomainError::InvalidResult {
                category,
                result: code.as_str().to_string(),
            });
        }
    }

    match (category.is_team_action(), executor) {
        (true, Executor::Player(_)) => return Err(DomainError::ExecutorNotAllowed { category }),
        (false, Executor::Team) => return Err(DomainError::ExecutorRequired { category }),
        _ => {}
    }

    if target_player_id.is_some() && !category.takes_target() {
        return Err(DomainError::TargetNotAllowed { category });
    }

    Ok(())
}
