// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::Serialize;
use volley_stats_domain::{ActionCategory, PointDetail, ResultCode, Side};

/// A match with both team names resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    pub match_id: i64,
    pub played_at: String,
    pub home_team_id: i64,
    pub home_team_name: String,
    pub guest_team_id: i64,
    pub guest_team_name: String,
}

/// One line of a match's action history, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionHistoryEntry {
    pub action_id: i64,
    pub set_id: i64,
    pub set_number: i32,
    pub created_at: String,
    /// `None` for team actions.
    pub executor_name: Option<String>,
    pub category: ActionCategory,
    pub result: Option<ResultCode>,
    pub target_name: Option<String>,
    pub point_detail: Option<PointDetail>,
    pub point_for: Option<Side>,
}
