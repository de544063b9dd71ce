// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::action::ActionCategory;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Team name is empty or invalid.
    InvalidTeamName(String),
    /// Player name is empty or invalid.
    InvalidPlayerName(String),
    /// Jersey number is outside the accepted range.
    InvalidJerseyNumber(i32),
    /// Another player already uses this name.
    DuplicatePlayerName(String),
    /// Another player already wears this jersey number.
    DuplicateJerseyNumber(i32),
    /// Player position string is not recognized.
    InvalidPosition(String),
    /// Action category string is not recognized.
    InvalidCategory(String),
    /// Result code is not valid for the action category.
    InvalidResult {
        /// The category the result was given for.
        category: ActionCategory,
        /// The rejected result code.
        result: String,
    },
    /// The category does not take a result code.
    ResultNotAllowed {
        /// The category that was given a result.
        category: ActionCategory,
    },
    /// Point-detail code is not recognized.
    InvalidPointDetail(String),
    /// Point side string is not recognized.
    InvalidSide(String),
    /// Only set/assist actions carry a target player.
    TargetNotAllowed {
        /// The category that was given a target.
        category: ActionCategory,
    },
    /// The category must be executed by a specific player.
    ExecutorRequired {
        /// The category recorded without a player.
        category: ActionCategory,
    },
    /// The category is always recorded for the team, never for a player.
    ExecutorNotAllowed {
        /// The category recorded with a player.
        category: ActionCategory,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTeamName(msg) => write!(f, "Invalid team name: {msg}"),
            Self::InvalidPlayerName(msg) => write!(f, "Invalid player name: {msg}"),
            Self::InvalidJerseyNumber(number) => {
                write!(f, "Invalid jersey number: {number}. Must be between 0 and 99")
            }
            Self::DuplicatePlayerName(name) => {
                write!(f, "A player named '{name}' already exists")
            }
            Self::DuplicateJerseyNumber(number) => {
                write!(f, "A player with jersey number {number} already exists")
            }
            Self::InvalidPosition(value) => write!(f, "Invalid position: '{value}'"),
            Self::InvalidCategory(value) => write!(f, "Invalid action category: '{value}'"),
            Self::InvalidResult { category, result } => {
                write!(f, "Result '{result}' is not valid for {category} actions")
            }
            Self::ResultNotAllowed { category } => {
                write!(f, "{category} actions do not take a result")
            }
            Self::InvalidPointDetail(value) => write!(f, "Invalid point detail: '{value}'"),
            Self::InvalidSide(value) => write!(f, "Invalid point side: '{value}'"),
            Self::TargetNotAllowed { category } => {
                write!(f, "{category} actions cannot have a target player")
            }
            Self::ExecutorRequired { category } => {
                write!(f, "{category} actions must be executed by a player")
            }
            Self::ExecutorNotAllowed { category } => {
                write!(f, "{category} actions are recorded for the team, not a player")
            }
        }
    }
}

impl std::error::Error for DomainError {}
