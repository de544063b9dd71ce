// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use volley_stats::CoreError;
use volley_stats_domain::DomainError;
use volley_stats_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The operation needs an open match and set.
    NoActiveContext {
        /// A human-readable description of what was attempted.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::NoActiveContext { message } => write!(f, "No active match: {message}"),
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::InvalidTeamName(_) => ApiError::InvalidInput {
            field: String::from("team_name"),
            message,
        },
        DomainError::InvalidPlayerName(_) => ApiError::InvalidInput {
            field: String::from("name"),
            message,
        },
        DomainError::InvalidJerseyNumber(_) => ApiError::InvalidInput {
            field: String::from("jersey_number"),
            message,
        },
        DomainError::DuplicatePlayerName(_) => ApiError::DomainRuleViolation {
            rule: String::from("unique_player_name"),
            message,
        },
        DomainError::DuplicateJerseyNumber(_) => ApiError::DomainRuleViolation {
            rule: String::from("unique_jersey_number"),
            message,
        },
        DomainError::InvalidPosition(_) => ApiError::InvalidInput {
            field: String::from("position"),
            message,
        },
        DomainError::InvalidCategory(_) => ApiError::InvalidInput {
            field: String::from("category"),
            message,
        },
        DomainError::InvalidResult { .. } | DomainError::ResultNotAllowed { .. } => {
            ApiError::InvalidInput {
                field: String::from("result"),
                message,
            }
        }
        DomainError::InvalidPointDetail(_) => ApiError::InvalidInput {
            field: String::from("point_detail"),
            message,
        },
        DomainError::InvalidSide(_) => ApiError::InvalidInput {
            field: String::from("point_for"),
            message,
        },
        DomainError::TargetNotAllowed { .. } => ApiError::DomainRuleViolation {
            rule: String::from("target_only_on_sets"),
            message,
        },
        DomainError::ExecutorRequired { .. } | DomainError::ExecutorNotAllowed { .. } => {
            ApiError::DomainRuleViolation {
                rule: String::from("executor_matches_category"),
                message,
            }
        }
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::NoActiveMatch => ApiError::NoActiveContext {
            message: String::from("Start or load a match first"),
        },
        CoreError::SetMismatch { .. }
        | CoreError::MatchMismatch { .. }
        | CoreError::SetOutOfOrder { .. } => ApiError::DomainRuleViolation {
            rule: String::from("set_sequence"),
            message: err.to_string(),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// Lookup misses become `ResourceNotFound`; constraint violations become
/// domain rule violations; everything else is internal.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    let not_found = |resource_type: &str, id: i64| ApiError::ResourceNotFound {
        resource_type: resource_type.to_string(),
        message: format!("{resource_type} {id} does not exist"),
    };

    match err {
        PersistenceError::TeamNotFound(id) => not_found("Team", id),
        PersistenceError::PlayerNotFound(id) => not_found("Player", id),
        PersistenceError::MatchNotFound(id) => not_found("Match", id),
        PersistenceError::SetNotFound(id) => not_found("Set", id),
        PersistenceError::ActionNotFound(id) => not_found("Action", id),
        PersistenceError::NotFound(message) => ApiError::ResourceNotFound {
            resource_type: String::from("Record"),
            message,
        },
        PersistenceError::ConstraintViolation(message) => ApiError::DomainRuleViolation {
            rule: String::from("storage_constraint"),
            message,
        },
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}
