// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{MatchContext, MatchSession, TransitionResult};
use volley_stats_domain::{
    ActionCategory, Executor, GameSet, NewAction, PointDetail, ResultCode,
};

/// Applies a command to the session, producing a new session.
///
/// # Arguments
///
/// * `session` - The current session (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new session and the set-end flag
/// * `Err(CoreError)` if the command does not fit the session
///
/// # Errors
///
/// Returns an error if:
/// - The command needs an open match and none is open
/// - The command names a set other than the current one
/// - A new set belongs to another match or does not follow the current set
pub fn apply(session: &MatchSession, command: Command) -> Result<TransitionResult, CoreError> {
    match command {
        Command::OpenMatch {
            match_id,
            home_team_id,
            current_set,
            active_player_ids,
        } => {
            if current_set.match_id != match_id {
                return Err(CoreError::MatchMismatch {
                    expected: match_id,
                    actual: current_set.match_id,
                });
            }

            let context: MatchContext = MatchContext {
                match_id,
                home_team_id,
                current_set,
                active_player_ids,
            };
            Ok(TransitionResult::from_session(MatchSession::InProgress(context)))
        }
        Command::AdvanceSet { set } => {
            let context: &MatchContext = session.context().ok_or(CoreError::NoActiveMatch)?;

            if set.match_id != context.match_id {
                return Err(CoreError::MatchMismatch {
                    expected: context.match_id,
                    actual: set.match_id,
                });
            }
            if set.set_number <= context.current_set.set_number {
                return Err(CoreError::SetOutOfOrder {
                    current: context.current_set.set_number,
                    proposed: set.set_number,
                });
            }

            Ok(TransitionResult::from_session(with_current_set(context, set)))
        }
        Command::ScorePoint { set_id, side } => {
            let context: &MatchContext = session.context().ok_or(CoreError::NoActiveMatch)?;
            ensure_current(context, set_id)?;

            let mut set: GameSet = context.current_set;
            set.score = set.score.credit(side);

            Ok(TransitionResult::from_session(with_current_set(context, set)))
        }
        Command::ApplyRecomputedScore { set_id, score } => match session.context() {
            Some(context) if context.current_set.set_id == set_id => {
                let mut set: GameSet = context.current_set;
                set.score = score;
                Ok(TransitionResult::from_session(with_current_set(context, set)))
            }
            _ => Ok(TransitionResult::from_session(session.clone())),
        },
        Command::EndMatch => {
            if !session.is_active() {
                return Err(CoreError::NoActiveMatch);
            }
            Ok(TransitionResult {
                new_session: MatchSession::NoMatch,
                set_ended: false,
            })
        }
    }
}

/// Validates an action against the session and binds it to the current set.
///
/// No state changes; the returned action is ready to be persisted.
///
/// # Errors
///
/// Returns an error if no set is open or the action's shape is invalid.
pub fn prepare_action(
    session: &MatchSession,
    category: ActionCategory,
    executor: Executor,
    result: Option<ResultCode>,
    target_player_id: Option<i64>,
    point_detail: Option<PointDetail>,
) -> Result<NewAction, CoreError> {
    let set: &GameSet = session.current_set().ok_or(CoreError::NoActiveMatch)?;

    Ok(NewAction::new(
        set.set_id,
        category,
        executor,
        result,
        target_player_id,
        point_detail,
    )?)
}

const fn ensure_current(context: &MatchContext, set_id: i64) -> Result<(), CoreError> {
    if context.current_set.set_id != set_id {
        return Err(CoreError::SetMismatch {
            expected: context.current_set.set_id,
            actual: set_id,
        });
    }
    Ok(())
}

fn with_current_set(context: &MatchContext, set: GameSet) -> MatchSession {
    MatchSession::InProgress(MatchContext {
        current_set: set,
        ..context.clone()
    })
}
