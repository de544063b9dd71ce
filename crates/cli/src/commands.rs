// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Subcommand execution.
//!
//! Every invocation starts with an empty `MatchSession`; commands that act
//! on a running match load its context from the store first.

use std::fmt::Display;
use std::io::Write;

use color_eyre::Result;
use tracing::debug;
use volley_stats_api::{
    ActionHistoryEntry, AddPlayerRequest, CreateTeamRequest, MatchReport, MatchSession,
    MatchSummary, Persistence, RecordActionRequest, RecordActionResponse, ScoreboardResponse,
    StartMatchRequest, StartMatchResponse, UpdateActionRequest, UpdatePlayerRequest,
    action_history, add_player, assign_player_to_team, build_match_report, create_team,
    end_match, list_matches, list_players, list_teams, load_match_context, recompute_set_score,
    scoreboard, start_match, start_next_set, team_players, try_delete_action,
    try_export_match_report, try_record_action, try_update_action, try_update_player,
};
use volley_stats_domain::{GameSet, Player, PlayerStatLine, RecordedAction, Score, Team};

use crate::cli::{
    ActionCommand, Command, MatchCommand, PlayerCommand, RecordArgs, SetCommand, TeamCommand,
};

/// Executor id meaning "the team as a whole".
const TEAM_EXECUTOR: i64 = 0;

/// Runs one subcommand against the store, writing its output to `out`.
///
/// # Errors
///
/// Returns an error if the operation is rejected or the output cannot be
/// written.
pub fn execute<W: Write>(
    command: Command,
    persistence: &mut Persistence,
    out: &mut W,
) -> Result<()> {
    let mut session: MatchSession = MatchSession::new();

    match command {
        Command::Team(team) => team_command(team, persistence, out),
        Command::Player(player) => player_command(player, persistence, out),
        Command::Match(command) => match_command(command, persistence, &mut session, out),
        Command::Set(command) => set_command(command, persistence, &mut session, out),
        Command::Record(args) => record(args, persistence, &mut session, out),
        Command::Action(command) => action_command(command, persistence, &mut session, out),
        Command::History { match_id, limit } => {
            let entries: Vec<ActionHistoryEntry> = action_history(persistence, match_id, limit)?;
            if entries.is_empty() {
                writeln!(out, "No actions recorded")?;
            }
            for entry in &entries {
                write_history_entry(out, entry)?;
            }
            Ok(())
        }
        Command::Score { match_id } => {
            load_match_context(persistence, &mut session, match_id)?;
            write_scoreboard(out, &scoreboard(&session)?)
        }
        Command::Report { match_id, json } => {
            let report: MatchReport = build_match_report(persistence, match_id)?;
            if json {
                serde_json::to_writer_pretty(&mut *out, &report)?;
                writeln!(out)?;
                Ok(())
            } else {
                write_report(out, &report)
            }
        }
        Command::Export { match_id, output } => {
            try_export_match_report(persistence, match_id, &output)?;
            writeln!(out, "Exported match {match_id} to {}", output.display())?;
            Ok(())
        }
    }
}

fn team_command<W: Write>(
    command: TeamCommand,
    persistence: &mut Persistence,
    out: &mut W,
) -> Result<()> {
    match command {
        TeamCommand::Add { name } => {
            let team: Team = create_team(persistence, &CreateTeamRequest { name })?;
            writeln!(out, "Created team {} ({})", team.team_id, team.name)?;
        }
        TeamCommand::List => {
            let teams: Vec<Team> = list_teams(persistence)?.teams;
            for team in &teams {
                writeln!(out, "{:>4}  {}", team.team_id, team.name)?;
            }
        }
    }
    Ok(())
}

fn player_command<W: Write>(
    command: PlayerCommand,
    persistence: &mut Persistence,
    out: &mut W,
) -> Result<()> {
    match command {
        PlayerCommand::Add {
            name,
            jersey,
            position,
            team,
        } => {
            let player_id: i64 = add_player(
                persistence,
                &AddPlayerRequest {
                    name,
                    jersey_number: jersey,
                    position,
                    team_id: team,
                },
            )?;
            writeln!(out, "Added player {player_id}")?;
        }
        PlayerCommand::Edit {
            player_id,
            name,
            jersey,
            position,
        } => {
            try_update_player(
                persistence,
                &UpdatePlayerRequest {
                    player_id,
                    name,
                    jersey_number: jersey,
                    position,
                },
            )?;
            writeln!(out, "Updated player {player_id}")?;
        }
        PlayerCommand::Assign { player_id, team } => {
            assign_player_to_team(persistence, player_id, team)?;
            match team {
                Some(team_id) => writeln!(out, "Player {player_id} joined team {team_id}")?,
                None => writeln!(out, "Player {player_id} released from their team")?,
            }
        }
        PlayerCommand::List { team } => {
            let players: Vec<Player> = match team {
                Some(team_id) => team_players(persistence, team_id)?.players,
                None => list_players(persistence)?.players,
            };
            for player in &players {
                writeln!(
                    out,
                    "{:>4}  {:>3}  {:<20} {:<8} {}",
                    or_dash(player.player_id),
                    or_dash(player.jersey_number),
                    player.name,
                    or_dash(player.position),
                    player
                        .team_id
                        .map_or_else(|| String::from("free"), |id| format!("team {id}")),
                )?;
            }
        }
    }
    Ok(())
}

fn match_command<W: Write>(
    command: MatchCommand,
    persistence: &mut Persistence,
    session: &mut MatchSession,
    out: &mut W,
) -> Result<()> {
    match command {
        MatchCommand::Start { team, opponent } => {
            let started: StartMatchResponse = start_match(
                persistence,
                session,
                &StartMatchRequest {
                    own_team_id: team,
                    opponent_name: opponent,
                },
            )?;
            writeln!(
                out,
                "Started match {} (set {} open)",
                started.match_id, started.first_set.set_number
            )?;
        }
        MatchCommand::List => {
            let matches: Vec<MatchSummary> = list_matches(persistence)?;
            for summary in &matches {
                writeln!(
                    out,
                    "{:>4}  {}  {} vs {}",
                    summary.match_id,
                    summary.played_at,
                    summary.home_team_name,
                    summary.guest_team_name
                )?;
            }
        }
        MatchCommand::End { match_id } => {
            load_match_context(persistence, session, match_id)?;
            let score: Score = session.current_score();
            if end_match(session) {
                writeln!(out, "Closed match {match_id} at {score}")?;
            }
        }
    }
    Ok(())
}

fn set_command<W: Write>(
    command: SetCommand,
    persistence: &mut Persistence,
    session: &mut MatchSession,
    out: &mut W,
) -> Result<()> {
    match command {
        SetCommand::Next { match_id } => {
            let set: GameSet = start_next_set(persistence, session, match_id)?;
            writeln!(out, "Match {match_id}: set {} open", set.set_number)?;
        }
        SetCommand::Recompute { set_id } => {
            let score: Score = recompute_set_score(persistence, session, set_id)?;
            writeln!(out, "Set {set_id} score is {score}")?;
        }
    }
    Ok(())
}

fn record<W: Write>(
    args: RecordArgs,
    persistence: &mut Persistence,
    session: &mut MatchSession,
    out: &mut W,
) -> Result<()> {
    load_match_context(persistence, session, args.match_id)?;

    let response: RecordActionResponse = try_record_action(
        persistence,
        session,
        &RecordActionRequest {
            executor_id: args.player.unwrap_or(TEAM_EXECUTOR),
            category: args.category,
            result: args.result,
            target_id: args.target,
            point_detail: args.detail,
        },
    )?;
    writeln!(
        out,
        "Recorded action {} (score {})",
        response.action_id, response.score
    )?;
    if response.set_ended {
        writeln!(
            out,
            "Set {} is over; start the next one with `set next {}`",
            session.current_set_number(),
            args.match_id
        )?;
    }
    Ok(())
}

fn action_command<W: Write>(
    command: ActionCommand,
    persistence: &mut Persistence,
    session: &mut MatchSession,
    out: &mut W,
) -> Result<()> {
    match command {
        ActionCommand::Edit {
            action_id,
            player,
            result,
            target,
        } => {
            let action: Option<RecordedAction> = persistence.find_action(action_id)?;
            if let Some(action) = action {
                load_owning_match(persistence, session, &action)?;
            }
            try_update_action(
                persistence,
                session,
                &UpdateActionRequest {
                    action_id,
                    executor_id: player.unwrap_or(TEAM_EXECUTOR),
                    result,
                    target_id: target,
                },
            )?;
            writeln!(out, "Updated action {action_id}")?;
            write_scoreboard(out, &scoreboard(session)?)
        }
        ActionCommand::Delete { action_id } => {
            let action: Option<RecordedAction> = persistence.find_action(action_id)?;
            if let Some(action) = action {
                load_owning_match(persistence, session, &action)?;
            }
            if try_delete_action(persistence, session, action_id)? {
                writeln!(out, "Deleted action {action_id}")?;
                write_scoreboard(out, &scoreboard(session)?)
            } else {
                writeln!(out, "Action {action_id} was already gone")?;
                Ok(())
            }
        }
    }
}

fn load_owning_match(
    persistence: &mut Persistence,
    session: &mut MatchSession,
    action: &RecordedAction,
) -> Result<()> {
    let set: GameSet = persistence.get_set(action.set_id)?;
    debug!(action_id = action.action_id, match_id = set.match_id, "Loading owning match");
    load_match_context(persistence, session, set.match_id)?;
    Ok(())
}

// ============================================================================
// Output
// ============================================================================

fn or_dash<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| String::from("-"), |value| value.to_string())
}

fn write_scoreboard<W: Write>(out: &mut W, board: &ScoreboardResponse) -> Result<()> {
    write!(
        out,
        "Match {} set {}: {}",
        board.match_id, board.set_number, board.score
    )?;
    if board.set_over {
        write!(out, " (set over)")?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_history_entry<W: Write>(out: &mut W, entry: &ActionHistoryEntry) -> Result<()> {
    writeln!(
        out,
        "{:>5}  set {}  {}  {:<12} {:<10} {:<18} {:<12} {}",
        entry.action_id,
        entry.set_number,
        entry.created_at,
        entry.executor_name.as_deref().unwrap_or("Team"),
        entry.category.as_str(),
        or_dash(entry.result),
        entry
            .target_name
            .as_deref()
            .map_or_else(|| String::from("-"), |name| format!("-> {name}")),
        or_dash(entry.point_for),
    )?;
    Ok(())
}

fn write_report<W: Write>(out: &mut W, report: &MatchReport) -> Result<()> {
    writeln!(
        out,
        "Match {}: {} vs {} ({})",
        report.match_id, report.home_team_name, report.guest_team_name, report.played_at
    )?;

    writeln!(out, "\nSets")?;
    for set in &report.sets {
        writeln!(out, "  {:>2}  {}", set.set_number, set.score)?;
    }

    writeln!(out, "\nPlayers")?;
    writeln!(
        out,
        "  {:<20} {:>5} {:>5} {:>5} {:>7} {:>6} {:>5} {:>6} {:>7} {:>7} {:>6} {:>7}",
        "Player", "Att", "Kill", "Err", "AttEff", "Serve", "Ace", "SrvPt", "SrvIn", "SrvEff",
        "Pts", "Overall"
    )?;
    for row in &report.players {
        let stats: &PlayerStatLine = &row.stats;
        writeln!(
            out,
            "  {:<20} {:>5} {:>5} {:>5} {:>7.3} {:>6} {:>5} {:>6.1} {:>7.3} {:>7.3} {:>6.1} {:>7.3}",
            row.player_name,
            stats.attacks,
            stats.kills,
            stats.attack_errors,
            stats.attack_efficiency,
            stats.serves,
            stats.aces,
            stats.service_points,
            stats.service_in_rate,
            stats.service_effect_rate,
            stats.total_points,
            stats.overall_rate,
        )?;
    }

    writeln!(out, "\nSetter-Attacker")?;
    for row in &report.setter_attacker {
        writeln!(
            out,
            "  {} -> {}: {} attacks, {} kills, {} errors, {} blocked, efficiency {:.3}",
            row.setter_name,
            row.attacker_name,
            row.line.total,
            row.line.kills,
            row.line.errors,
            row.line.blocked,
            row.line.efficiency,
        )?;
    }

    writeln!(out, "\nSetting Distribution")?;
    for row in &report.setting_distribution {
        writeln!(
            out,
            "  {} -> {}: {} ({:.1}%)",
            row.setter_name,
            row.target_name,
            row.line.count,
            row.line.percent,
        )?;
    }
    Ok(())
}
