// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clap::Parser;
use volley_stats_api::Persistence;

use crate::cli::Args;
use crate::commands::execute;

/// Parses a command line, prepending the binary name.
pub fn parse(args: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("volley-stats").chain(args.iter().copied())).unwrap()
}

/// Runs a command line and returns everything it printed.
pub fn run(persistence: &mut Persistence, args: &[&str]) -> String {
    let parsed: Args = parse(args);
    let mut out: Vec<u8> = Vec::new();
    execute(parsed.command, persistence, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

/// Runs a command line that is expected to fail.
pub fn run_err(persistence: &mut Persistence, args: &[&str]) -> color_eyre::Report {
    let parsed: Args = parse(args);
    let mut out: Vec<u8> = Vec::new();
    execute(parsed.command, persistence, &mut out).unwrap_err()
}

/// A store with team 1 "Falcons" (Mo #7 = player 1, Kai #12 = player 2)
/// and match 1 against "Ravens".
pub fn seeded() -> Persistence {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    run(&mut persistence, &["team", "add", "Falcons"]);
    run(
        &mut persistence,
        &["player", "add", "Mo", "--jersey", "7", "--position", "setter", "--team", "1"],
    );
    run(
        &mut persistence,
        &["player", "add", "Kai", "--jersey", "12", "--position", "outside", "--team", "1"],
    );
    run(&mut persistence, &["match", "start", "--team", "1", "Ravens"]);
    persistence
}
