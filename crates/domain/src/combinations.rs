// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Setter-to-attacker sequences and setting distribution.

use crate::action::{ActionCategory, AttackResult, Executor, RecordedAction, ResultCode};
use crate::player_stats::round_to;
use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome counts for one setter → attacker pairing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetterAttackerLine {
    pub setter_id: i64,
    pub attacker_id: i64,
    pub total: u32,
    pub kills: u32,
    pub errors: u32,
    pub blocked: u32,
    /// `(kills - errors) / total * 100`, one decimal.
    pub efficiency: f64,
}

/// How often a setter set a given target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionLine {
    pub setter_id: i64,
    pub target_id: i64,
    pub count: u32,
    /// Share of the setter's total sets, one decimal.
    pub percent: f64,
}

#[derive(Default)]
struct PairCounts {
    total: u32,
    kills: u32,
    errors: u32,
    blocked: u32,
}

/// Groups actions by set and orders each group chronologically.
fn per_set_sequences(actions: &[RecordedAction]) -> BTreeMap<i64, Vec<&RecordedAction>> {
    let mut sets: BTreeMap<i64, Vec<&RecordedAction>> = BTreeMap::new();
    for action in actions {
        sets.entry(action.set_id).or_default().push(action);
    }
    for sequence in sets.values_mut() {
        sequence.sort_by_key(|action| action.action_id);
    }
    sets
}

/// Finds setter → attacker sequences in a match.
///
/// A sequence is a set/assist with a target immediately followed, within the
/// same set, by an attack executed by that target. Rows are sorted by
/// efficiency, highest first.
#[must_use]
pub fn compute_setter_attacker(actions: &[RecordedAction]) -> Vec<SetterAttackerLine> {
    let mut pairs: BTreeMap<(i64, i64), PairCounts> = BTreeMap::new();

    for sequence in per_set_sequences(actions).values() {
        for window in sequence.windows(2) {
            let (set, attack) = (window[0], window[1]);
            if set.category != ActionCategory::Set || attack.category != ActionCategory::Attack {
                continue;
            }
            let (Executor::Player(setter_id), Some(target_id)) =
                (set.executor, set.target_player_id)
            else {
                continue;
            };
            if attack.executor != Executor::Player(target_id) {
                continue;
            }

            let counts: &mut PairCounts = pairs.entry((setter_id, target_id)).or_default();
            counts.total += 1;
            match attack.result {
                Some(ResultCode::Attack(AttackResult::Kill)) => counts.kills += 1,
                Some(ResultCode::Attack(AttackResult::Error)) => counts.errors += 1,
                Some(ResultCode::Attack(AttackResult::Blocked)) => counts.blocked += 1,
                _ => {}
            }
        }
    }

    let mut lines: Vec<SetterAttackerLine> = pairs
        .into_iter()
        .map(|((setter_id, attacker_id), counts)| SetterAttackerLine {
            setter_id,
            attacker_id,
            total: counts.total,
            kills: counts.kills,
            errors: counts.errors,
            blocked: counts.blocked,
            efficiency: percent(
                f64::from(counts.kills) - f64::from(counts.errors),
                counts.total,
            ),
        })
        .collect();
    lines.sort_by(|a, b| b.efficiency.total_cmp(&a.efficiency));
    lines
}

/// Counts, per setter, how often each target received a set.
///
/// Sets recorded without a target are not counted. Rows are grouped by
/// setter and sorted by count, highest first.
#[must_use]
pub fn compute_setting_distribution(actions: &[RecordedAction]) -> Vec<DistributionLine> {
    let mut counts: BTreeMap<i64, BTreeMap<i64, u32>> = BTreeMap::new();

    for action in actions {
        if action.category != ActionCategory::Set {
            continue;
        }
        let (Some(setter_id), Some(target_id)) = (action.executor_id(), action.target_player_id)
        else {
            continue;
        };
        *counts.entry(setter_id).or_default().entry(target_id).or_default() += 1;
    }

    let mut lines: Vec<DistributionLine> = Vec::new();
    for (setter_id, targets) in counts {
        let setter_total: u32 = targets.values().sum();
        let mut setter_lines: Vec<DistributionLine> = targets
            .into_iter()
            .map(|(target_id, count)| DistributionLine {
                setter_id,
                target_id,
                count,
                percent: percent(f64::from(count), setter_total),
            })
            .collect();
        setter_lines.sort_by(|a, b| b.count.cmp(&a.count));
        lines.extend(setter_lines);
    }
    lines
}

fn percent(numerator: f64, denominator: u32) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    round_to(numerator / f64::from(denominator) * 100.0, 1)
}
