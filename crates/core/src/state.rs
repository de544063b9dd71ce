// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use volley_stats_domain::{GameSet, Score};

/// The match currently being recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchContext {
    /// The open match.
    pub match_id: i64,
    /// Our team in this match.
    pub home_team_id: i64,
    /// The set actions are recorded against.
    pub current_set: GameSet,
    /// Players of the home team available for selection.
    pub active_player_ids: Vec<i64>,
}

/// The recording session.
///
/// A session is created once per process and passed to every lifecycle
/// operation. At most one set is current at any time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MatchSession {
    /// No match is open; actions are rejected.
    #[default]
    NoMatch,
    /// A match and one of its sets are open.
    InProgress(MatchContext),
}

impl MatchSession {
    /// Creates a session with no open match.
    #[must_use]
    pub const fn new() -> Self {
        Self::NoMatch
    }

    /// Returns the open match context, if any.
    #[must_use]
    pub const fn context(&self) -> Option<&MatchContext> {
        match self {
            Self::NoMatch => None,
            Self::InProgress(context) => Some(context),
        }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::InProgress(_))
    }

    #[must_use]
    pub fn match_id(&self) -> Option<i64> {
        self.context().map(|context| context.match_id)
    }

    #[must_use]
    pub fn current_set(&self) -> Option<&GameSet> {
        self.context().map(|context| &context.current_set)
    }

    /// The running score of the current set, or `0:0` without one.
    #[must_use]
    pub fn current_score(&self) -> Score {
        self.current_set()
            .map(|set| set.score)
            .unwrap_or_default()
    }

    /// The number of the current set, or `0` without one.
    #[must_use]
    pub fn current_set_number(&self) -> i32 {
        self.current_set().map_or(0, |set| set.set_number)
    }

    #[must_use]
    pub fn active_player_ids(&self) -> &[i64] {
        match self {
            Self::NoMatch => &[],
            Self::InProgress(context) => &context.active_player_ids,
        }
    }

    /// Returns whether the current set satisfies the set-end rule.
    ///
    /// Always `false` without an open set.
    #[must_use]
    pub fn is_current_set_over(&self) -> bool {
        self.current_set().is_some_and(GameSet::is_over)
    }
}

/// The result of a successful session transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The session after the transition.
    pub new_session: MatchSession,
    /// Whether the current set met the set-end rule after the transition.
    pub set_ended: bool,
}

impl TransitionResult {
    pub(crate) fn from_session(new_session: MatchSession) -> Self {
        let set_ended: bool = new_session.is_current_set_over();
        Self {
            new_session,
            set_ended,
        }
    }
}
