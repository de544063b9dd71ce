// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::scoring::Score;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A team. Opponents are stored as placeholder teams holding only a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// The canonical numeric identifier assigned by the database.
    pub team_id: i64,
    /// Unique team name.
    pub name: String,
}

impl Team {
    /// Creates a new `Team`.
    ///
    /// # Arguments
    ///
    /// * `team_id` - The database identifier
    /// * `name` - The team name
    #[must_use]
    pub fn new(team_id: i64, name: &str) -> Self {
        Self {
            team_id,
            name: name.to_string(),
        }
    }
}

/// Court position of a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Middle,
    Outside,
    Opposite,
    Setter,
    Libero,
    Universal,
}

impl Position {
    /// All positions, in display order.
    pub const ALL: [Self; 6] = [
        Self::Middle,
        Self::Outside,
        Self::Opposite,
        Self::Setter,
        Self::Libero,
        Self::Universal,
    ];

    /// Converts this position to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Middle => "Middle",
            Self::Outside => "Outside",
            Self::Opposite => "Opposite",
            Self::Setter => "Setter",
            Self::Libero => "Libero",
            Self::Universal => "Universal",
        }
    }
}

impl FromStr for Position {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed: &str = s.trim();
        Self::ALL
            .into_iter()
            .find(|position| position.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| DomainError::InvalidPosition(s.to_string()))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A rostered player.
///
/// A player may be unassigned (`team_id` is `None`). Name and jersey number
/// are each unique across all players; see [`crate::validate_player_unique`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the player has not been persisted yet.
    pub player_id: Option<i64>,
    pub name: String,
    pub jersey_number: Option<i32>,
    pub position: Option<Position>,
    pub team_id: Option<i64>,
}

impl Player {
    /// Creates a new `Player` without a persisted ID.
    ///
    /// # Arguments
    ///
    /// * `name` - The player's name
    /// * `jersey_number` - Optional jersey number
    /// * `position` - Optional court position
    /// * `team_id` - Optional team assignment
    #[must_use]
    pub fn new(
        name: &str,
        jersey_number: Option<i32>,
        position: Option<Position>,
        team_id: Option<i64>,
    ) -> Self {
        Self {
            player_id: None,
            name: name.trim().to_string(),
            jersey_number,
            position,
            team_id,
        }
    }

    /// Creates a `Player` with an existing persisted ID.
    #[must_use]
    pub fn with_id(
        player_id: i64,
        name: &str,
        jersey_number: Option<i32>,
        position: Option<Position>,
        team_id: Option<i64>,
    ) -> Self {
        Self {
            player_id: Some(player_id),
            ..Self::new(name, jersey_number, position, team_id)
        }
    }

    /// Label used in reports: `#7 Mo` or just `Mo` without a jersey number.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self.jersey_number {
            Some(number) => format!("#{number} {}", self.name),
            None => self.name.clone(),
        }
    }
}

/// A match between our (home) team and an opponent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub match_id: i64,
    /// When the match was started (`YYYY-MM-DD HH:MM:SS`, UTC).
    pub played_at: String,
    pub home_team_id: i64,
    pub guest_team_id: i64,
}

/// A set within a match, with its stored running score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSet {
    pub set_id: i64,
    pub match_id: i64,
    /// Sequential number within the match, starting at 1.
    pub set_number: i32,
    pub score: Score,
}

impl GameSet {
    /// Creates a new `GameSet`.
    #[must_use]
    pub const fn new(set_id: i64, match_id: i64, set_number: i32, score: Score) -> Self {
        Self {
            set_id,
            match_id,
            set_number,
            score,
        }
    }

    /// Returns whether this set's score satisfies the set-end rule.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.score.is_set_over()
    }
}
