// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-player general statistics for a match.

use crate::action::{
    ActionCategory, AttackResult, BlockResult, RecordedAction, ResultCode, ServeResult, SetResult,
};
use serde::Serialize;
use std::collections::BTreeMap;

/// Weight of a half-ace when counting service points.
pub const HALF_ACE_WEIGHT: f64 = 0.5;

/// Raw counters and derived rates for one player over one match.
///
/// Every rate is `0.0` when its denominator is zero and is rounded to three
/// decimals.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PlayerStatLine {
    pub player_id: i64,
    pub attacks: u32,
    pub kills: u32,
    pub attack_errors: u32,
    pub blocked_attacks: u32,
    pub attack_efficiency: f64,
    pub serves: u32,
    pub aces: u32,
    pub half_aces: u32,
    pub service_errors: u32,
    pub service_points: f64,
    pub service_in_rate: f64,
    pub service_effect_rate: f64,
    pub blocks: u32,
    pub assists: u32,
    pub set_errors: u32,
    pub total_points: f64,
    pub total_errors: u32,
    pub total_attempts: u32,
    pub overall_rate: f64,
}

impl PlayerStatLine {
    fn new(player_id: i64) -> Self {
        Self {
            player_id,
            ..Self::default()
        }
    }

    fn count(&mut self, action: &RecordedAction) {
        self.total_attempts += 1;

        match action.category {
            ActionCategory::Attack => self.attacks += 1,
            ActionCategory::Serve => self.serves += 1,
            ActionCategory::Set => self.assists += 1,
            ActionCategory::Block | ActionCategory::Cover | ActionCategory::OurPoint => {}
        }

        let Some(result) = action.result else {
            return;
        };

        if result.is_error() {
            self.total_errors += 1;
        }

        match result {
            ResultCode::Attack(AttackResult::Kill) => self.kills += 1,
            ResultCode::Attack(AttackResult::Error) => self.attack_errors += 1,
            ResultCode::Attack(AttackResult::Blocked) => self.blocked_attacks += 1,
            ResultCode::Serve(ServeResult::Ace) => self.aces += 1,
            ResultCode::Serve(ServeResult::HalfAce) => self.half_aces += 1,
            ResultCode::Serve(ServeResult::Error) => self.service_errors += 1,
            ResultCode::Block(BlockResult::Point) => self.blocks += 1,
            ResultCode::Set(SetResult::Error) => self.set_errors += 1,
            _ => {}
        }
    }

    fn finish(mut self) -> Self {
        self.service_points = f64::from(self.aces) + HALF_ACE_WEIGHT * f64::from(self.half_aces);
        self.total_points =
            f64::from(self.kills) + f64::from(self.blocks) + self.service_points;

        self.attack_efficiency = ratio(
            f64::from(self.kills) - f64::from(self.attack_errors),
            self.attacks,
        );
        self.service_in_rate = ratio(
            f64::from(self.serves) - f64::from(self.service_errors),
            self.serves,
        );
        self.service_effect_rate = ratio(
            self.service_points - f64::from(self.service_errors),
            self.serves,
        );
        self.overall_rate = ratio(
            self.total_points - f64::from(self.total_errors),
            self.total_attempts,
        );
        self
    }
}

/// Computes the per-player statistics for a match's action history.
///
/// Team actions (no executing player) are excluded. Only players with at
/// least one action appear. Rows are sorted by total points, highest first,
/// then by player id.
///
/// # Arguments
///
/// * `actions` - Every action recorded in the match
#[must_use]
pub fn compute_player_stats(actions: &[RecordedAction]) -> Vec<PlayerStatLine> {
    let mut lines: BTreeMap<i64, PlayerStatLine> = BTreeMap::new();

    for action in actions {
        let Some(player_id) = action.executor_id() else {
            continue;
        };
        lines
            .entry(player_id)
            .or_insert_with(|| PlayerStatLine::new(player_id))
            .count(action);
    }

    let mut result: Vec<PlayerStatLine> = lines.into_values().map(PlayerStatLine::finish).collect();
    result.sort_by(|a, b| {
        b.total_points
            .total_cmp(&a.total_points)
            .then(a.player_id.cmp(&b.player_id))
    });
    result
}

/// Divides, defining the result as zero for an empty denominator.
fn ratio(numerator: f64, denominator: u32) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    round_to(numerator / f64::from(denominator), 3)
}

/// Rounds half away from zero to the given number of decimals.
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor: f64 = 10_f64.powi(decimals);
    (value * factor).round() / factor
}
