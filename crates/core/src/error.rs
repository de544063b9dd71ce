// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use volley_stats_domain::DomainError;

/// Errors that can occur during session transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The command needs an open match and set.
    NoActiveMatch,
    /// The command names a set that is not the current one.
    SetMismatch {
        /// The current set.
        expected: i64,
        /// The set named by the command.
        actual: i64,
    },
    /// The set belongs to a different match.
    MatchMismatch {
        /// The open match.
        expected: i64,
        /// The match owning the set.
        actual: i64,
    },
    /// A new set must be numbered after the current one.
    SetOutOfOrder {
        /// The current set number.
        current: i32,
        /// The number of the proposed set.
        proposed: i32,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::NoActiveMatch => write!(f, "No match is currently open"),
            Self::SetMismatch { expected, actual } => {
                write!(f, "Set {actual} is not the current set ({expected})")
            }
            Self::MatchMismatch { expected, actual } => {
                write!(f, "Set belongs to match {actual}, but match {expected} is open")
            }
            Self::SetOutOfOrder { current, proposed } => write!(
                f,
                "Set number {proposed} does not follow the current set number {current}"
            ),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
