// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

/// Volley Stats - records volleyball match actions and reports player statistics
#[derive(Parser, Debug)]
#[command(name = "volley-stats", author, version, about, long_about = None)]
pub struct Args {
    /// Directory holding the statistics database (`stats.db`). Created if missing.
    #[arg(
        long,
        env = "VOLLEY_STATS_DATA_DIR",
        default_value = "data",
        conflicts_with = "in_memory"
    )]
    pub data_dir: PathBuf,

    /// Use a throwaway in-memory database instead of the data directory
    #[arg(long)]
    pub in_memory: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Manage teams
    #[command(subcommand)]
    Team(TeamCommand),

    /// Manage players
    #[command(subcommand)]
    Player(PlayerCommand),

    /// Start, list or close matches
    #[command(subcommand)]
    Match(MatchCommand),

    /// Open the next set or rebuild a set's score
    #[command(subcommand)]
    Set(SetCommand),

    /// Record one action in the current set of a match
    Record(RecordArgs),

    /// Correct or remove a recorded action
    #[command(subcommand)]
    Action(ActionCommand),

    /// Show the most recent actions of a match
    History {
        match_id: i64,

        /// Number of entries to show
        #[arg(short, long, default_value_t = 20)]
        limit: i64,
    },

    /// Show the current set and score of a match
    Score { match_id: i64 },

    /// Show the statistics report of a match
    Report {
        match_id: i64,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the statistics report of a match to a CSV file
    Export { match_id: i64, output: PathBuf },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum TeamCommand {
    /// Create a team
    Add { name: String },
    /// List teams by name
    List,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Register a player
    Add {
        name: String,
        #[arg(short, long)]
        jersey: Option<i32>,
        #[arg(short, long)]
        position: Option<String>,
        #[arg(short, long)]
        team: Option<i64>,
    },
    /// Replace a player's name, jersey number and position
    Edit {
        player_id: i64,
        name: String,
        #[arg(short, long)]
        jersey: Option<i32>,
        #[arg(short, long)]
        position: Option<String>,
    },
    /// Move a player to a team, or release them when no team is given
    Assign {
        player_id: i64,
        #[arg(short, long)]
        team: Option<i64>,
    },
    /// List players, optionally only one team's
    List {
        #[arg(short, long)]
        team: Option<i64>,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum MatchCommand {
    /// Start a match for our team against a named opponent
    Start {
        /// Our team's id
        #[arg(short, long)]
        team: i64,
        opponent: String,
    },
    /// List matches, newest first
    List,
    /// Close a match
    End { match_id: i64 },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetCommand {
    /// Open the next set of a match
    Next { match_id: i64 },
    /// Rebuild a set's score from its actions
    Recompute { set_id: i64 },
}

#[derive(ClapArgs, Debug, Clone, PartialEq, Eq)]
pub struct RecordArgs {
    pub match_id: i64,

    /// Action category (set, attack, serve, block, cover, our_point)
    pub category: String,

    /// Executing player; omit for team actions
    #[arg(short, long)]
    pub player: Option<i64>,

    /// Result code for the category
    #[arg(short, long)]
    pub result: Option<String>,

    /// Set target (sets only)
    #[arg(short, long)]
    pub target: Option<i64>,

    /// Point detail deciding who won the rally
    #[arg(short, long)]
    pub detail: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ActionCommand {
    /// Replace an action's executor, result and target
    Edit {
        action_id: i64,
        #[arg(short, long)]
        player: Option<i64>,
        #[arg(short, long)]
        result: Option<String>,
        #[arg(short, long)]
        target: Option<i64>,
    },
    /// Delete an action
    Delete { action_id: i64 },
}
