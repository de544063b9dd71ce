// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod action;
mod combinations;
mod error;
mod player_stats;
mod scoring;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use action::{
    ActionCategory, AttackResult, BlockResult, CoverResult, Executor, NO_PLAYER_ID, NewAction,
    PointDetail, RecordedAction, ResultCode, ServeResult, SetResult, Side,
};
pub use combinations::{
    DistributionLine, SetterAttackerLine, compute_setter_attacker, compute_setting_distribution,
};
pub use error::DomainError;
pub use player_stats::{HALF_ACE_WEIGHT, PlayerStatLine, compute_player_stats, round_to};
pub use scoring::{
    SET_POINT_TARGET, SET_WIN_MARGIN, Score, derive_point_attribution, next_set_number,
    tally_score,
};
pub use types::{GameSet, Match, Player, Position, Team};
pub use validation::{
    MAX_JERSEY_NUMBER, validate_action_shape, validate_player_fields, validate_player_unique,
    validate_team_name,
};
