// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Action categories, per-category result codes and point-detail codes.
//!
//! Every lookup that decides whether an action scores is expressed as a
//! `match` over these enums, so adding a variant forces every table to be
//! revisited at compile time.

use crate::error::DomainError;
use crate::scoring::derive_point_attribution;
use crate::validation::validate_action_shape;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Executor id used by callers to record an action for the team rather than a player.
pub const NO_PLAYER_ID: i64 = 0;

/// Generates a result-code enum with its stable text representation.
macro_rules! result_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// All variants, in display order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the stable text representation used for persistence.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }

            fn parse_str(s: &str) -> Option<Self> {
                match s {
                    $($text => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }
    };
}

/// The kind of statistical event being recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionCategory {
    /// A set (assist) towards an attacker.
    Set,
    /// An attack.
    Attack,
    /// A serve.
    Serve,
    /// A block.
    Block,
    /// A cover or dig.
    Cover,
    /// A point for our team with no specific player credited.
    OurPoint,
}

impl ActionCategory {
    /// All categories, in display order.
    pub const ALL: [Self; 6] = [
        Self::Set,
        Self::Attack,
        Self::Serve,
        Self::Block,
        Self::Cover,
        Self::OurPoint,
    ];

    /// Returns the stable text representation used for persistence.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Set => "set",
            Self::Attack => "attack",
            Self::Serve => "serve",
            Self::Block => "block",
            Self::Cover => "cover",
            Self::OurPoint => "our_point",
        }
    }

    /// Returns whether actions of this category carry a result code.
    #[must_use]
    pub const fn takes_result(&self) -> bool {
        !matches!(self, Self::OurPoint)
    }

    /// Returns whether actions of this category may name a target player.
    #[must_use]
    pub const fn takes_target(&self) -> bool {
        matches!(self, Self::Set)
    }

    /// Returns whether this category is recorded for the team instead of a player.
    #[must_use]
    pub const fn is_team_action(&self) -> bool {
        matches!(self, Self::OurPoint)
    }
}

impl FromStr for ActionCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "set" | "assist" => Ok(Self::Set),
            "attack" => Ok(Self::Attack),
            "serve" => Ok(Self::Serve),
            "block" => Ok(Self::Block),
            "cover" => Ok(Self::Cover),
            "our_point" | "our-point" | "point" => Ok(Self::OurPoint),
            _ => Err(DomainError::InvalidCategory(s.to_string())),
        }
    }
}

impl std::fmt::Display for ActionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

result_enum! {
    /// Outcome of a set (assist).
    SetResult {
        /// Ideal ball for the attacker.
        Good => "good",
        /// Playable ball.
        Medium => "medium",
        /// Barely playable ball.
        Poor => "poor",
        /// Setting error.
        Error => "error",
    }
}

result_enum! {
    /// Outcome of an attack.
    AttackResult {
        /// Direct point.
        Kill => "kill",
        /// Attack that forced a weak return.
        Half => "half",
        /// Lob shot.
        Lob => "lob",
        /// Tip or placed shot.
        Tip => "tip",
        /// Pushed (overhand) ball.
        Pushed => "pushed",
        /// Attack error.
        Error => "error",
        /// Attack stopped by the opponent's block.
        Blocked => "blocked",
    }
}

result_enum! {
    /// Outcome of a serve.
    ServeResult {
        /// Direct point.
        Ace => "ace",
        /// Serve that prevented an organised attack.
        HalfAce => "half_ace",
        /// Serve in play.
        In => "in",
        /// Service error.
        Error => "error",
    }
}

result_enum! {
    /// Outcome of a block.
    BlockResult {
        /// Block point.
        Point => "point",
        /// Block error.
        Error => "error",
        /// Touched ball, rally continues.
        Touch => "touch",
    }
}

result_enum! {
    /// Outcome of a cover or dig.
    CoverResult {
        /// Ball kept in play.
        Good => "good",
        /// Cover error.
        Error => "error",
    }
}

/// A point-detail code captured as a follow-up to rally-deciding outcomes.
///
/// Only this code decides who is credited with a point for a non-generic action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointDetail {
    /// Our attack was not returned.
    AttackPoint,
    /// Our block scored.
    BlockPoint,
    /// Opponent error; ball landed on their floor.
    OpponentFloorError,
    /// Own error; ball landed on our floor.
    OwnFloorError,
    /// Opponent saved the ball; rally continues.
    OpponentSave,
    /// We saved the ball; rally continues.
    OwnSave,
}

impl PointDetail {
    /// All point-detail codes, in display order.
    pub const ALL: [Self; 6] = [
        Self::AttackPoint,
        Self::BlockPoint,
        Self::OpponentFloorError,
        Self::OwnFloorError,
        Self::OpponentSave,
        Self::OwnSave,
    ];

    /// Returns the stable text representation used for persistence.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AttackPoint => "attack_point",
            Self::BlockPoint => "block_point",
            Self::OpponentFloorError => "opponent_floor_error",
            Self::OwnFloorError => "own_floor_error",
            Self::OpponentSave => "opponent_save",
            Self::OwnSave => "own_save",
        }
    }

    /// The side credited with the point, if any.
    #[must_use]
    pub const fn attribution(&self) -> Option<Side> {
        match self {
            Self::AttackPoint | Self::BlockPoint | Self::OpponentFloorError => Some(Side::Own),
            Self::OwnFloorError => Some(Side::Opponent),
            Self::OpponentSave | Self::OwnSave => None,
        }
    }
}

impl FromStr for PointDetail {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|detail| detail.as_str() == normalized)
            .ok_or_else(|| DomainError::InvalidPointDetail(s.to_string()))
    }
}

impl std::fmt::Display for PointDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The side of the net credited with a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Our team.
    Own,
    /// The opponent.
    Opponent,
}

impl Side {
    /// Returns the stable text representation used for persistence.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Own => "own",
            Self::Opponent => "opponent",
        }
    }
}

impl FromStr for Side {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "own" => Ok(Self::Own),
            "opponent" => Ok(Self::Opponent),
            _ => Err(DomainError::InvalidSide(s.to_string())),
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A category-specific result code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultCode {
    /// Result of a set.
    Set(SetResult),
    /// Result of an attack.
    Attack(AttackResult),
    /// Result of a serve.
    Serve(ServeResult),
    /// Result of a block.
    Block(BlockResult),
    /// Result of a cover.
    Cover(CoverResult),
}

impl ResultCode {
    /// Parses a result code in the context of its action category.
    ///
    /// # Errors
    ///
    /// Returns an error if the category takes no result or the text is not
    /// one of the category's result codes.
    pub fn parse(category: ActionCategory, s: &str) -> Result<Self, DomainError> {
        let normalized: String = s.trim().to_lowercase().replace('-', "_");
        let parsed: Option<Self> = match category {
            ActionCategory::Set => SetResult::parse_str(&normalized).map(Self::Set),
            ActionCategory::Attack => AttackResult::parse_str(&normalized).map(Self::Attack),
            ActionCategory::Serve => ServeResult::parse_str(&normalized).map(Self::Serve),
            ActionCategory::Block => BlockResult::parse_str(&normalized).map(Self::Block),
            ActionCategory::Cover => CoverResult::parse_str(&normalized).map(Self::Cover),
            ActionCategory::OurPoint => {
                return Err(DomainError::ResultNotAllowed { category });
            }
        };

        parsed.ok_or_else(|| DomainError::InvalidResult {
            category,
            result: s.to_string(),
        })
    }

    /// The category this result belongs to.
    #[must_use]
    pub const fn category(&self) -> ActionCategory {
        match self {
            Self::Set(_) => ActionCategory::Set,
            Self::Attack(_) => ActionCategory::Attack,
            Self::Serve(_) => ActionCategory::Serve,
            Self::Block(_) => ActionCategory::Block,
            Self::Cover(_) => ActionCategory::Cover,
        }
    }

    /// Returns the stable text representation used for persistence.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Set(result) => result.as_str(),
            Self::Attack(result) => result.as_str(),
            Self::Serve(result) => result.as_str(),
            Self::Block(result) => result.as_str(),
            Self::Cover(result) => result.as_str(),
        }
    }

    /// The side a rally-deciding outcome normally favours.
    ///
    /// This never credits a point by itself; it marks outcomes that call for
    /// a point-detail follow-up and classifies errors for reporting.
    #[must_use]
    pub const fn rally_side(&self) -> Option<Side> {
        match self {
            Self::Attack(AttackResult::Kill)
            | Self::Block(BlockResult::Point)
            | Self::Serve(ServeResult::Ace) => Some(Side::Own),
            Self::Attack(AttackResult::Error | AttackResult::Blocked)
            | Self::Serve(ServeResult::Error)
            | Self::Set(SetResult::Error)
            | Self::Block(BlockResult::Error)
            | Self::Cover(CoverResult::Error) => Some(Side::Opponent),
            Self::Attack(
                AttackResult::Half | AttackResult::Lob | AttackResult::Tip | AttackResult::Pushed,
            )
            | Self::Serve(ServeResult::HalfAce | ServeResult::In)
            | Self::Set(SetResult::Good | SetResult::Medium | SetResult::Poor)
            | Self::Block(BlockResult::Touch)
            | Self::Cover(CoverResult::Good) => None,
        }
    }

    /// Returns whether this outcome should be followed by a point-detail prompt.
    #[must_use]
    pub const fn needs_point_detail(&self) -> bool {
        self.rally_side().is_some()
    }

    /// Returns whether this outcome counts as an error by the executing player.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.rally_side(), Some(Side::Opponent))
    }
}

impl std::fmt::Display for ResultCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Who executed an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Executor {
    /// No specific player (e.g. an opponent error credited to us).
    Team,
    /// A rostered player.
    Player(i64),
}

impl Executor {
    /// Interprets a caller-supplied executor id, where [`NO_PLAYER_ID`] means the team.
    #[must_use]
    pub const fn from_id(id: i64) -> Self {
        if id == NO_PLAYER_ID {
            Self::Team
        } else {
            Self::Player(id)
        }
    }

    /// Interprets a nullable executor column.
    #[must_use]
    pub const fn from_column(value: Option<i64>) -> Self {
        match value {
            Some(id) => Self::from_id(id),
            None => Self::Team,
        }
    }

    /// The player id, or `None` for team actions.
    #[must_use]
    pub const fn player_id(&self) -> Option<i64> {
        match self {
            Self::Team => None,
            Self::Player(id) => Some(*id),
        }
    }
}

/// A validated action that has not yet been persisted.
///
/// The point attribution is derived on construction and cannot be set by
/// callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAction {
    set_id: i64,
    category: ActionCategory,
    executor: Executor,
    result: Option<ResultCode>,
    target_player_id: Option<i64>,
    point_detail: Option<PointDetail>,
    point_for: Option<Side>,
}

impl NewAction {
    /// Validates the action shape and derives its point attribution.
    ///
    /// # Errors
    ///
    /// Returns an error if the result, target or executor do not fit the category.
    pub fn new(
        set_id: i64,
        category: ActionCategory,
        executor: Executor,
        result: Option<ResultCode>,
        target_player_id: Option<i64>,
        point_detail: Option<PointDetail>,
    ) -> Result<Self, DomainError> {
        validate_action_shape(category, executor, result, target_player_id)?;

        Ok(Self {
            set_id,
            category,
            executor,
            result,
            target_player_id,
            point_detail,
            point_for: derive_point_attribution(category, point_detail),
        })
    }

    #[must_use]
    pub const fn set_id(&self) -> i64 {
        self.set_id
    }

    #[must_use]
    pub const fn category(&self) -> ActionCategory {
        self.category
    }

    #[must_use]
    pub const fn executor(&self) -> Executor {
        self.executor
    }

    #[must_use]
    pub const fn result(&self) -> Option<ResultCode> {
        self.result
    }

    #[must_use]
    pub const fn target_player_id(&self) -> Option<i64> {
        self.target_player_id
    }

    #[must_use]
    pub const fn point_detail(&self) -> Option<PointDetail> {
        self.point_detail
    }

    /// The side credited with a point, if any.
    #[must_use]
    pub const fn point_for(&self) -> Option<Side> {
        self.point_for
    }
}

/// A persisted action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordedAction {
    /// Database identifier; increases with recording order.
    pub action_id: i64,
    /// The owning set.
    pub set_id: i64,
    pub category: ActionCategory,
    pub executor: Executor,
    pub result: Option<ResultCode>,
    /// Intended attacker of a set/assist.
    pub target_player_id: Option<i64>,
    pub point_detail: Option<PointDetail>,
    /// The side credited with a point, if any.
    pub point_for: Option<Side>,
    /// Creation timestamp (`YYYY-MM-DD HH:MM:SS`, UTC).
    pub created_at: String,
}

impl RecordedAction {
    /// Returns the executing player's id, or `None` for team actions.
    #[must_use]
    pub const fn executor_id(&self) -> Option<i64> {
        self.executor.player_id()
    }
}
