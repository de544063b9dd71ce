// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Boundary operations over the store and the match session.
//!
//! Session-changing operations plan their transition with `apply` first,
//! persist, and only then replace the caller's session. A failed write
//! leaves the session untouched.

use std::str::FromStr;
use tracing::{debug, error, info, warn};
use volley_stats::{Command, MatchSession, TransitionResult, apply, prepare_action};
use volley_stats_domain::{
    ActionCategory, Executor, GameSet, Match, NewAction, Player, PointDetail, Position,
    RecordedAction, ResultCode, Score, Team, tally_score, validate_player_fields,
    validate_player_unique, validate_team_name,
};
use volley_stats_persistence::{ActionHistoryEntry, MatchSummary, Persistence};

use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
use crate::request_response::{
    AddPlayerRequest, CreateTeamRequest, ListPlayersResponse, ListTeamsResponse,
    RecordActionRequest, RecordActionResponse, RecordOutcome, ScoreboardResponse,
    StartMatchRequest, StartMatchResponse, UpdateActionRequest, UpdatePlayerRequest,
};

fn parse_position(value: Option<&str>) -> Result<Option<Position>, ApiError> {
    value
        .map(Position::from_str)
        .transpose()
        .map_err(translate_domain_error)
}

fn parse_result(
    category: ActionCategory,
    value: Option<&str>,
) -> Result<Option<ResultCode>, ApiError> {
    value
        .map(|text| ResultCode::parse(category, text))
        .transpose()
        .map_err(translate_domain_error)
}

// ============================================================================
// Roster
// ============================================================================

/// Creates a team.
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty
/// - A team with this name already exists
pub fn create_team(
    persistence: &mut Persistence,
    request: &CreateTeamRequest,
) -> Result<Team, ApiError> {
    validate_team_name(&request.name).map_err(translate_domain_error)?;
    let name: &str = request.name.trim();

    if persistence
        .find_team_by_name(name)
        .map_err(translate_persistence_error)?
        .is_some()
    {
        return Err(ApiError::DomainRuleViolation {
            rule: String::from("unique_team_name"),
            message: format!("A team named '{name}' already exists"),
        });
    }

    let team_id: i64 = persistence
        .create_team(name)
        .map_err(translate_persistence_error)?;
    info!(team_id, name, "Created team");

    Ok(Team::new(team_id, name))
}

/// Lists all teams ordered by name.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn list_teams(persistence: &mut Persistence) -> Result<ListTeamsResponse, ApiError> {
    let teams: Vec<Team> = persistence
        .list_teams()
        .map_err(translate_persistence_error)?;
    Ok(ListTeamsResponse { teams })
}

/// Adds a player to the roster.
///
/// Names and jersey numbers are unique across all rostered players.
///
/// # Returns
///
/// The new player's id.
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty or the jersey number is out of range
/// - The position is not recognized
/// - Another player has the same name or jersey number
/// - The team does not exist
pub fn add_player(
    persistence: &mut Persistence,
    request: &AddPlayerRequest,
) -> Result<i64, ApiError> {
    let position: Option<Position> = parse_position(request.position.as_deref())?;
    let player: Player = Player::new(
        &request.name,
        request.jersey_number,
        position,
        request.team_id,
    );
    validate_player_fields(&player).map_err(translate_domain_error)?;

    let roster: Vec<Player> = persistence
        .list_players()
        .map_err(translate_persistence_error)?;
    validate_player_unique(&player, &roster).map_err(translate_domain_error)?;

    if let Some(team_id) = player.team_id {
        persistence
            .get_team(team_id)
            .map_err(translate_persistence_error)?;
    }

    let player_id: i64 = persistence
        .insert_player(&player)
        .map_err(translate_persistence_error)?;
    info!(player_id, name = %player.name, "Added player");

    Ok(player_id)
}

/// Edits a player's name, jersey number and position.
///
/// # Errors
///
/// Returns an error if the player does not exist or the new values fail
/// validation. Keeping the player's own name and number is accepted.
pub fn try_update_player(
    persistence: &mut Persistence,
    request: &UpdatePlayerRequest,
) -> Result<(), ApiError> {
    let position: Option<Position> = parse_position(request.position.as_deref())?;
    let existing: Player = persistence
        .get_player(request.player_id)
        .map_err(translate_persistence_error)?;

    let player: Player = Player::with_id(
        request.player_id,
        &request.name,
        request.jersey_number,
        position,
        existing.team_id,
    );
    validate_player_fields(&player).map_err(translate_domain_error)?;

    let roster: Vec<Player> = persistence
        .list_players()
        .map_err(translate_persistence_error)?;
    validate_player_unique(&player, &roster).map_err(translate_domain_error)?;

    persistence
        .update_player(
            request.player_id,
            &player.name,
            player.jersey_number,
            player.position,
        )
        .map_err(translate_persistence_error)?;
    info!(player_id = request.player_id, "Updated player");

    Ok(())
}

/// Edits a player, reporting success as a boolean.
///
/// Failures are logged.
pub fn update_player(persistence: &mut Persistence, request: &UpdatePlayerRequest) -> bool {
    match try_update_player(persistence, request) {
        Ok(()) => true,
        Err(err) => {
            warn!(player_id = request.player_id, error = %err, "Player update rejected");
            false
        }
    }
}

/// Assigns a player to a team, or removes the assignment with `None`.
///
/// # Errors
///
/// Returns an error if the player or team does not exist.
pub fn assign_player_to_team(
    persistence: &mut Persistence,
    player_id: i64,
    team_id: Option<i64>,
) -> Result<(), ApiError> {
    if let Some(team_id) = team_id {
        persistence
            .get_team(team_id)
            .map_err(translate_persistence_error)?;
    }
    persistence
        .assign_player_team(player_id, team_id)
        .map_err(translate_persistence_error)?;
    info!(player_id, ?team_id, "Assigned player to team");
    Ok(())
}

/// Lists every rostered player.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn list_players(persistence: &mut Persistence) -> Result<ListPlayersResponse, ApiError> {
    let players: Vec<Player> = persistence
        .list_players()
        .map_err(translate_persistence_error)?;
    Ok(ListPlayersResponse { players })
}

/// Lists the players of one team.
///
/// # Errors
///
/// Returns an error if the team does not exist.
pub fn team_players(
    persistence: &mut Persistence,
    team_id: i64,
) -> Result<ListPlayersResponse, ApiError> {
    persistence
        .get_team(team_id)
        .map_err(translate_persistence_error)?;
    let players: Vec<Player> = persistence
        .list_team_players(team_id)
        .map_err(translate_persistence_error)?;
    Ok(ListPlayersResponse { players })
}

// ============================================================================
// Match and set lifecycle
// ============================================================================

fn roster_ids(persistence: &mut Persistence, team_id: i64) -> Result<Vec<i64>, ApiError> {
    Ok(persistence
        .list_team_players(team_id)
        .map_err(translate_persistence_error)?
        .into_iter()
        .filter_map(|player| player.player_id)
        .collect())
}

fn open_match(
    session: &mut MatchSession,
    match_id: i64,
    home_team_id: i64,
    current_set: GameSet,
    active_player_ids: Vec<i64>,
) -> Result<(), ApiError> {
    let transition: TransitionResult = apply(
        session,
        Command::OpenMatch {
            match_id,
            home_team_id,
            current_set,
            active_player_ids,
        },
    )
    .map_err(translate_core_error)?;
    *session = transition.new_session;
    Ok(())
}

/// Starts a match against a named opponent and opens set 1.
///
/// An unknown opponent is created as a placeholder team; a known name
/// reuses the existing team.
///
/// # Errors
///
/// Returns an error if:
/// - Our team does not exist
/// - The opponent name is empty or names our own team
/// - The store rejects the match
pub fn start_match(
    persistence: &mut Persistence,
    session: &mut MatchSession,
    request: &StartMatchRequest,
) -> Result<StartMatchResponse, ApiError> {
    let own_team: Team = persistence
        .get_team(request.own_team_id)
        .map_err(translate_persistence_error)?;
    validate_team_name(&request.opponent_name).map_err(translate_domain_error)?;
    let opponent_name: &str = request.opponent_name.trim();

    let opponent_team_id: i64 = match persistence
        .find_team_by_name(opponent_name)
        .map_err(translate_persistence_error)?
    {
        Some(team) if team.team_id == own_team.team_id => {
            return Err(ApiError::DomainRuleViolation {
                rule: String::from("distinct_teams"),
                message: format!("'{opponent_name}' cannot play against itself"),
            });
        }
        Some(team) => team.team_id,
        None => {
            let team_id: i64 = persistence
                .create_team(opponent_name)
                .map_err(translate_persistence_error)?;
            info!(team_id, name = opponent_name, "Created opponent team");
            team_id
        }
    };

    let (match_id, first_set) = persistence
        .create_match(own_team.team_id, opponent_team_id)
        .map_err(translate_persistence_error)?;
    let active_player_ids: Vec<i64> = roster_ids(persistence, own_team.team_id)?;

    open_match(
        session,
        match_id,
        own_team.team_id,
        first_set,
        active_player_ids,
    )?;
    info!(
        match_id,
        home = %own_team.name,
        guest = opponent_name,
        "Match started"
    );

    Ok(StartMatchResponse {
        match_id,
        opponent_team_id,
        first_set,
    })
}

/// Re-opens a stored match in the session.
///
/// The latest set becomes current; a match without sets gets set 1. The
/// active roster is the home team's current players.
///
/// # Errors
///
/// Returns an error if the match does not exist or set 1 cannot be created.
pub fn load_match_context(
    persistence: &mut Persistence,
    session: &mut MatchSession,
    match_id: i64,
) -> Result<GameSet, ApiError> {
    let stored: Match = persistence
        .get_match(match_id)
        .map_err(translate_persistence_error)?;

    let current_set: GameSet = match persistence
        .latest_match_set(match_id)
        .map_err(translate_persistence_error)?
    {
        Some(set) => set,
        None => persistence
            .create_next_set(match_id)
            .map_err(translate_persistence_error)?,
    };
    let active_player_ids: Vec<i64> = roster_ids(persistence, stored.home_team_id)?;

    open_match(
        session,
        match_id,
        stored.home_team_id,
        current_set,
        active_player_ids,
    )?;
    debug!(
        match_id,
        set_number = current_set.set_number,
        score = %current_set.score,
        "Loaded match context"
    );

    Ok(current_set)
}

/// Creates the next set of a match and makes it current.
///
/// The session is loaded for `match_id` first if it holds another match or
/// none.
///
/// # Errors
///
/// Returns an error if the match does not exist or the set cannot be stored.
pub fn start_next_set(
    persistence: &mut Persistence,
    session: &mut MatchSession,
    match_id: i64,
) -> Result<GameSet, ApiError> {
    if session.match_id() != Some(match_id) {
        load_match_context(persistence, session, match_id)?;
    }

    let set: GameSet = persistence
        .create_next_set(match_id)
        .map_err(translate_persistence_error)?;
    let transition: TransitionResult =
        apply(session, Command::AdvanceSet { set }).map_err(translate_core_error)?;
    *session = transition.new_session;
    info!(match_id, set_number = set.set_number, "Started set");

    Ok(set)
}

/// Returns whether the current set met the set-end rule.
#[must_use]
pub fn check_set_end_condition(session: &MatchSession) -> bool {
    session.is_current_set_over()
}

/// Closes the open match.
///
/// Nothing is persisted; a stored match can be loaded again later.
///
/// # Returns
///
/// `false` if no match was open.
pub fn end_match(session: &mut MatchSession) -> bool {
    let match_id: Option<i64> = session.match_id();
    match apply(session, Command::EndMatch) {
        Ok(transition) => {
            *session = transition.new_session;
            info!(?match_id, "Match ended");
            true
        }
        Err(err) => {
            warn!(error = %err, "End match rejected");
            false
        }
    }
}

/// Rebuilds a set's score from its full action history.
///
/// The stored score is overwritten; when the set is current, the session
/// follows.
///
/// # Errors
///
/// Returns an error if the set does not exist or the store fails.
pub fn recompute_set_score(
    persistence: &mut Persistence,
    session: &mut MatchSession,
    set_id: i64,
) -> Result<Score, ApiError> {
    let actions: Vec<RecordedAction> = persistence
        .list_set_actions(set_id)
        .map_err(translate_persistence_error)?;
    let score: Score = tally_score(&actions);

    persistence
        .update_set_score(set_id, score)
        .map_err(translate_persistence_error)?;
    let transition: TransitionResult =
        apply(session, Command::ApplyRecomputedScore { set_id, score })
            .map_err(translate_core_error)?;
    *session = transition.new_session;
    info!(set_id, %score, "Recomputed set score");

    Ok(score)
}

// ============================================================================
// Recording
// ============================================================================

/// Records one action against the current set.
///
/// The action row and, for scoring actions, the new set score are written
/// in one transaction.
///
/// # Errors
///
/// Returns an error if:
/// - No set is open
/// - The category, result or point-detail code is not recognized
/// - The result, executor or target does not fit the category
/// - The store rejects the write
pub fn try_record_action(
    persistence: &mut Persistence,
    session: &mut MatchSession,
    request: &RecordActionRequest,
) -> Result<RecordActionResponse, ApiError> {
    let category: ActionCategory =
        ActionCategory::from_str(&request.category).map_err(translate_domain_error)?;
    let result: Option<ResultCode> = parse_result(category, request.result.as_deref())?;
    let point_detail: Option<PointDetail> = request
        .point_detail
        .as_deref()
        .map(PointDetail::from_str)
        .transpose()
        .map_err(translate_domain_error)?;

    let action: NewAction = prepare_action(
        session,
        category,
        Executor::from_id(request.executor_id),
        result,
        request.target_id,
        point_detail,
    )
    .map_err(translate_core_error)?;

    let planned: Option<TransitionResult> = action
        .point_for()
        .map(|side| {
            apply(
                session,
                Command::ScorePoint {
                    set_id: action.set_id(),
                    side,
                },
            )
        })
        .transpose()
        .map_err(translate_core_error)?;
    let new_score: Option<Score> = planned
        .as_ref()
        .map(|transition| transition.new_session.current_score());

    let action_id: i64 = persistence
        .record_action(&action, new_score)
        .map_err(translate_persistence_error)?;

    if let Some(transition) = planned {
        *session = transition.new_session;
    }
    let score: Score = session.current_score();
    let set_ended: bool = session.is_current_set_over();

    info!(
        action_id,
        category = %category,
        point_for = ?action.point_for(),
        %score,
        set_ended,
        "Recorded action"
    );

    Ok(RecordActionResponse {
        action_id,
        score,
        set_ended,
    })
}

/// Records one action, reporting acceptance and set end as flags.
///
/// A rejected action leaves the store and the session unchanged; the cause
/// is logged.
pub fn record_action(
    persistence: &mut Persistence,
    session: &mut MatchSession,
    request: &RecordActionRequest,
) -> RecordOutcome {
    match try_record_action(persistence, session, request) {
        Ok(response) => RecordOutcome {
            accepted: true,
            set_ended: response.set_ended,
        },
        Err(err @ ApiError::Internal { .. }) => {
            error!(error = %err, "Action could not be stored");
            RecordOutcome::rejected()
        }
        Err(err) => {
            warn!(error = %err, "Action rejected");
            RecordOutcome::rejected()
        }
    }
}

// ============================================================================
// Corrections
// ============================================================================

/// Rewrites the executor, result and target of a recorded action, then
/// recomputes its set's score.
///
/// # Errors
///
/// Returns an error if the action does not exist, the new values do not
/// fit its category, or the store fails.
pub fn try_update_action(
    persistence: &mut Persistence,
    session: &mut MatchSession,
    request: &UpdateActionRequest,
) -> Result<(), ApiError> {
    let existing: RecordedAction = persistence
        .find_action(request.action_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Action"),
            message: format!("Action {} does not exist", request.action_id),
        })?;

    let result: Option<ResultCode> = parse_result(existing.category, request.result.as_deref())?;
    let action: NewAction = NewAction::new(
        existing.set_id,
        existing.category,
        Executor::from_id(request.executor_id),
        result,
        request.target_id,
        existing.point_detail,
    )
    .map_err(translate_domain_error)?;

    persistence
        .update_action(request.action_id, &action)
        .map_err(translate_persistence_error)?;
    info!(action_id = request.action_id, "Updated action");

    recompute_set_score(persistence, session, existing.set_id)?;
    Ok(())
}

/// Corrects a recorded action, reporting success as a boolean.
pub fn update_action(
    persistence: &mut Persistence,
    session: &mut MatchSession,
    request: &UpdateActionRequest,
) -> bool {
    match try_update_action(persistence, session, request) {
        Ok(()) => true,
        Err(err) => {
            warn!(action_id = request.action_id, error = %err, "Action update rejected");
            false
        }
    }
}

/// Deletes a recorded action and recomputes its set's score.
///
/// # Returns
///
/// `true` if the action was deleted, `false` if it did not exist.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn try_delete_action(
    persistence: &mut Persistence,
    session: &mut MatchSession,
    action_id: i64,
) -> Result<bool, ApiError> {
    let Some(existing) = persistence
        .find_action(action_id)
        .map_err(translate_persistence_error)?
    else {
        debug!(action_id, "Action already absent");
        return Ok(false);
    };

    let deleted: bool = persistence
        .delete_action(action_id)
        .map_err(translate_persistence_error)?;
    info!(action_id, deleted, "Deleted action");

    recompute_set_score(persistence, session, existing.set_id)?;
    Ok(deleted)
}

/// Deletes a recorded action, reporting success as a boolean.
///
/// Deleting an action that no longer exists succeeds without changing any
/// score.
pub fn delete_action(
    persistence: &mut Persistence,
    session: &mut MatchSession,
    action_id: i64,
) -> bool {
    match try_delete_action(persistence, session, action_id) {
        Ok(_) => true,
        Err(err) => {
            error!(action_id, error = %err, "Action could not be deleted");
            false
        }
    }
}

// ============================================================================
// Browsing
// ============================================================================

/// Lists all matches, newest first.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn list_matches(persistence: &mut Persistence) -> Result<Vec<MatchSummary>, ApiError> {
    persistence
        .list_matches()
        .map_err(translate_persistence_error)
}

/// Lists a match's sets in order.
///
/// # Errors
///
/// Returns an error if the match does not exist.
pub fn match_sets(persistence: &mut Persistence, match_id: i64) -> Result<Vec<GameSet>, ApiError> {
    persistence
        .get_match(match_id)
        .map_err(translate_persistence_error)?;
    persistence
        .list_match_sets(match_id)
        .map_err(translate_persistence_error)
}

/// Returns up to `limit` of a match's most recent actions, newest first.
///
/// # Errors
///
/// Returns an error if the match does not exist or `limit` is not positive.
pub fn action_history(
    persistence: &mut Persistence,
    match_id: i64,
    limit: i64,
) -> Result<Vec<ActionHistoryEntry>, ApiError> {
    if limit <= 0 {
        return Err(ApiError::InvalidInput {
            field: String::from("limit"),
            message: format!("History limit must be positive, got {limit}"),
        });
    }
    persistence
        .get_match(match_id)
        .map_err(translate_persistence_error)?;
    persistence
        .action_history(match_id, limit)
        .map_err(translate_persistence_error)
}

/// Retrieves one recorded action.
///
/// # Errors
///
/// Returns an error if the action does not exist.
pub fn get_action(
    persistence: &mut Persistence,
    action_id: i64,
) -> Result<RecordedAction, ApiError> {
    persistence
        .find_action(action_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Action"),
            message: format!("Action {action_id} does not exist"),
        })
}

/// Describes the open match and its current set.
///
/// # Errors
///
/// Returns `NoActiveContext` if no match is open.
pub fn scoreboard(session: &MatchSession) -> Result<ScoreboardResponse, ApiError> {
    let (Some(match_id), Some(set)) = (session.match_id(), session.current_set()) else {
        return Err(ApiError::NoActiveContext {
            message: String::from("No match is open"),
        });
    };

    Ok(ScoreboardResponse {
        match_id,
        set_id: set.set_id,
        set_number: set.set_number,
        score: set.score,
        set_over: set.is_over(),
    })
}

/// Resolves the open match's active roster.
///
/// # Errors
///
/// Returns an error if a rostered player can no longer be read.
pub fn active_roster(
    persistence: &mut Persistence,
    session: &MatchSession,
) -> Result<Vec<Player>, ApiError> {
    session
        .active_player_ids()
        .iter()
        .map(|&player_id| {
            persistence
                .get_player(player_id)
                .map_err(translate_persistence_error)
        })
        .collect()
}
