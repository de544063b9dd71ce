// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use volley_stats_domain::{GameSet, Score, Side};

/// A command represents lifecycle intent as data only.
///
/// Commands are issued after the corresponding rows have been persisted and
/// are the only way to change the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open a match, started fresh or resumed from storage.
    OpenMatch {
        match_id: i64,
        home_team_id: i64,
        /// The set to record against: set 1, or the latest set when resuming.
        current_set: GameSet,
        active_player_ids: Vec<i64>,
    },
    /// Make a newly created set of the open match current.
    AdvanceSet {
        /// The new set.
        set: GameSet,
    },
    /// Credit one point of the current set.
    ScorePoint {
        /// The set the scoring action was recorded against.
        set_id: i64,
        /// The side credited.
        side: Side,
    },
    /// Replace a set's score with one recomputed from its history.
    ///
    /// Ignored when the set is not current.
    ApplyRecomputedScore { set_id: i64, score: Score },
    /// Clear the open match.
    EndMatch,
}
