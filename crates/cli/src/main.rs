// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::{Result, eyre::Context};
use tracing::info;
use volley_stats_api::Persistence;

use crate::cli::Args;

/// File name of the database inside the data directory.
const DATABASE_FILE: &str = "stats.db";

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    // Logs go to stderr so command output stays clean on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let mut persistence: Persistence = if args.in_memory {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    } else {
        open_data_dir(&args.data_dir)?
    };

    let stdout: io::Stdout = io::stdout();
    let mut out: io::StdoutLock<'_> = stdout.lock();
    commands::execute(args.command, &mut persistence, &mut out)?;
    out.flush()?;

    Ok(())
}

/// Opens the database inside `data_dir`, creating the directory if needed.
fn open_data_dir(data_dir: &Path) -> Result<Persistence> {
    std::fs::create_dir_all(data_dir)
        .wrap_err_with(|| format!("failed to create data directory {}", data_dir.display()))?;
    let db_path: PathBuf = data_dir.join(DATABASE_FILE);
    info!("Using file-based database at: {}", db_path.display());
    let persistence: Persistence = Persistence::new_with_file(&db_path)
        .wrap_err_with(|| format!("failed to open {}", db_path.display()))?;
    Ok(persistence)
}
