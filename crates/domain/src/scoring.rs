// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::action::{ActionCategory, PointDetail, RecordedAction, Side};
use serde::{Deserialize, Serialize};

/// Points a side needs before a set can end.
pub const SET_POINT_TARGET: i32 = 25;

/// Lead required to close a set once the target is reached.
pub const SET_WIN_MARGIN: i32 = 2;

/// The running score of a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Score {
    pub own: i32,
    pub opponent: i32,
}

impl Score {
    #[must_use]
    pub const fn new(own: i32, opponent: i32) -> Self {
        Self { own, opponent }
    }

    /// Returns this score with one more point for `side`.
    #[must_use]
    pub const fn credit(self, side: Side) -> Self {
        match side {
            Side::Own => Self::new(self.own + 1, self.opponent),
            Side::Opponent => Self::new(self.own, self.opponent + 1),
        }
    }

    /// Returns whether either side has reached the target with the required lead.
    ///
    /// The same rule applies to every set, including a deciding set.
    #[must_use]
    pub const fn is_set_over(&self) -> bool {
        let leader: i32 = if self.own > self.opponent {
            self.own
        } else {
            self.opponent
        };
        leader >= SET_POINT_TARGET && (self.own - self.opponent).abs() >= SET_WIN_MARGIN
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.own, self.opponent)
    }
}

/// Derives which side, if any, is credited with a point.
///
/// A supplied point-detail code always decides. Without one, only the generic
/// team point scores; every other action is recorded for statistics only.
///
/// # Arguments
///
/// * `category` - The action category
/// * `point_detail` - The follow-up classification, if one was captured
#[must_use]
pub const fn derive_point_attribution(
    category: ActionCategory,
    point_detail: Option<PointDetail>,
) -> Option<Side> {
    match (point_detail, category) {
        (Some(detail), _) => detail.attribution(),
        (None, ActionCategory::OurPoint) => Some(Side::Own),
        (None, _) => None,
    }
}

/// Returns the number the next set of a match receives.
///
/// # Arguments
///
/// * `current_max` - The highest existing set number, or `None` if the match has no sets
#[must_use]
pub const fn next_set_number(current_max: Option<i32>) -> i32 {
    match current_max {
        Some(max) => max + 1,
        None => 1,
    }
}

/// Counts point attributions over a set's full action history.
#[must_use]
pub fn tally_score(actions: &[RecordedAction]) -> Score {
    actions
        .iter()
        .filter_map(|action| action.point_for)
        .fold(Score::default(), Score::credit)
}
