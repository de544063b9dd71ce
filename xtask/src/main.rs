// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask - project automation for the statistics recorder
//!
//! - `cargo xtask ci` runs lint, build, test and migration verification
//! - `cargo xtask verify-migrations` applies the embedded `SQLite` migrations
//!   to a scratch database, checks the resulting schema, then reverts and
//!   re-applies them
//!
//! Standard `cargo test` stays infrastructure-free; everything here shells
//! out to cargo or opens an in-memory database.

#![deny(
    clippy::pedantic,
    //clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::{
    collections::{BTreeMap, BTreeSet},
    io,
    process::Output,
};

use cargo_metadata::MetadataCommand;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{
    eyre::{eyre, Context},
    Result,
};
use diesel::sql_types::{Integer, Text};
use diesel::{Connection, QueryableByName, RunQueryDsl, SqliteConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use duct::cmd;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("../crates/persistence/migrations");

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<()> {
        self.command.run()
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Run CI checks (lint, build, test, verify migrations)
    CI,

    /// Build the project
    #[command(visible_alias = "b")]
    Build,

    /// Run cargo check
    #[command(visible_alias = "c")]
    Check,

    /// Generate code coverage report
    #[command(visible_alias = "cov")]
    Coverage,

    /// Lint formatting, clippy, and docs
    #[command(visible_alias = "l")]
    Lint,

    /// Run clippy on the project
    #[command(visible_alias = "cl")]
    LintClippy,

    /// Check documentation for errors and warnings
    #[command(visible_alias = "d")]
    LintDocs,

    /// Check for formatting issues in the project
    #[command(visible_alias = "lf")]
    LintFormatting,

    /// Fix clippy warnings in the project
    #[command(visible_alias = "fc")]
    FixClippy,

    /// Fix formatting issues in the project
    #[command(visible_alias = "fmt")]
    FixFormatting,

    /// Run tests
    #[command(visible_alias = "t")]
    Test,

    /// Run doc tests
    #[command(visible_alias = "td")]
    TestDocs,

    /// Run lib tests
    #[command(visible_alias = "tl")]
    TestLibs,

    /// Apply, check, revert and re-apply the `SQLite` migrations
    #[command(visible_alias = "vm")]
    VerifyMigrations,
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => ci(),
            Self::Build => build(),
            Self::Check => check(),
            Self::Coverage => coverage(),
            Self::Lint => lint(),
            Self::LintClippy => lint_clippy(),
            Self::LintDocs => lint_docs(),
            Self::LintFormatting => lint_format(),
            Self::FixClippy => fix_clippy(),
            Self::FixFormatting => fix_format(),
            Self::Test => test(),
            Self::TestDocs => test_docs(),
            Self::TestLibs => test_libs(),
            Self::VerifyMigrations => verify_migrations(),
        }
    }
}

/// Run CI checks (lint, build, test, verify migrations)
fn ci() -> Result<()> {
    lint()?;
    build()?;
    test()?;
    verify_migrations()?;
    Ok(())
}

/// Build the project
fn build() -> Result<()> {
    run_cargo(vec!["build", "--all-targets", "--all-features"])
}

/// Run cargo check
fn check() -> Result<()> {
    run_cargo(vec!["check", "--all-targets", "--all-features"])
}

/// Generate code coverage report
fn coverage() -> Result<()> {
    run_cargo(vec![
        "llvm-cov",
        "--lcov",
        "--output-path",
        "target/lcov.info",
        "--all-features",
    ])
}

/// Lint formatting, clippy, and docs
fn lint() -> Result<()> {
    lint_clippy()?;
    lint_docs()?;
    lint_format()?;
    Ok(())
}

/// Run clippy on the project
fn lint_clippy() -> Result<()> {
    run_cargo(vec![
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ])
}

/// Fix clippy warnings in the project
fn fix_clippy() -> Result<()> {
    run_cargo(vec![
        "clippy",
        "--all-targets",
        "--all-features",
        "--fix",
        "--allow-dirty",
        "--allow-staged",
        "--",
        "-D",
        "warnings",
    ])
}

/// Check that docs build without errors using docs.rs-equivalent flags
fn lint_docs() -> Result<()> {
    let meta = MetadataCommand::new()
        .exec()
        .wrap_err("failed to get cargo metadata")?;

    for package in meta.workspace_default_packages() {
        cmd(
            "cargo",
            [
                "doc",
                "--no-deps",
                "--all-features",
                "--package",
                &package.name,
            ],
        )
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .env("RUSTDOCFLAGS", "--cfg docsrs -D warnings")
        .run_with_trace()?;
    }

    Ok(())
}

/// Lint formatting issues in the project
fn lint_format() -> Result<()> {
    run_cargo_nightly(vec!["fmt", "--all", "--check"])
}

/// Fix formatting issues in the project
fn fix_format() -> Result<()> {
    run_cargo_nightly(vec!["fmt", "--all"])
}

/// Run lib and doc tests
fn test() -> Result<()> {
    test_libs()?;
    test_docs()?; // run last because it's slow
    Ok(())
}

/// Run doc tests for the workspace's default packages
fn test_docs() -> Result<()> {
    run_cargo(vec!["test", "--doc", "--all-features"])
}

/// Run lib tests for the workspace's default packages
fn test_libs() -> Result<()> {
    run_cargo(vec!["test", "--all-targets", "--all-features"])
}

/// Run a cargo subcommand with the default toolchain
fn run_cargo(args: Vec<&str>) -> Result<()> {
    cmd("cargo", args).run_with_trace()?;
    Ok(())
}

/// Run a cargo subcommand with the nightly toolchain
fn run_cargo_nightly(args: Vec<&str>) -> Result<()> {
    cmd("cargo", args)
        // CARGO env var is set because we're running in a cargo subcommand
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .run_with_trace()?;
    Ok(())
}

/// Verify the embedded `SQLite` migrations
///
/// 1. Applies every migration to a fresh in-memory database with foreign keys on
/// 2. Introspects the schema and compares it with the tables the store expects
/// 3. Reverts every migration and checks that no table is left behind
/// 4. Re-applies the migrations and compares the schema again
///
/// ## Failures
///
/// The command fails if a migration does not apply or revert cleanly, or if
/// a table, column, foreign key or unique constraint differs.
fn verify_migrations() -> Result<()> {
    tracing::info!("Starting migration verification");

    let mut conn = SqliteConnection::establish(":memory:")
        .wrap_err("Failed to create SQLite in-memory database")?;
    diesel::sql_query("PRAGMA foreign_keys = ON")
        .execute(&mut conn)
        .wrap_err("Failed to enable foreign keys on SQLite")?;

    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| eyre!("Failed to apply migrations: {}", e))?;
    tracing::info!("Migrations applied");

    let expected = expected_schema();
    let applied = introspect_sqlite_schema(&mut conn)?;
    compare_schemas(&expected, &applied)?;
    tracing::info!("Schema matches the expected tables");

    conn.revert_all_migrations(MIGRATIONS)
        .map_err(|e| eyre!("Failed to revert migrations: {}", e))?;
    let reverted = introspect_sqlite_schema(&mut conn)?;
    if !reverted.tables.is_empty() {
        let leftover: Vec<&String> = reverted.tables.keys().collect();
        return Err(eyre!("Tables left after revert: {leftover:?}"));
    }
    tracing::info!("Migrations reverted cleanly");

    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| eyre!("Failed to re-apply migrations: {}", e))?;
    let reapplied = introspect_sqlite_schema(&mut conn)?;
    compare_schemas(&expected, &reapplied)?;

    tracing::info!("✓ Migration verification passed");
    Ok(())
}

/// Normalized schema representation
#[derive(Debug, Clone, PartialEq, Eq)]
struct Schema {
    tables: BTreeMap<String, Table>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Table {
    columns: BTreeMap<String, Column>,
    primary_keys: BTreeSet<String>,
    foreign_keys: BTreeSet<ForeignKey>,
    unique_constraints: BTreeSet<UniqueConstraint>,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Column {
    name: String,
    normalized_type: String,
    nullable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct ForeignKey {
    from_column: String,
    to_table: String,
    to_column: String,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct UniqueConstraint {
    columns: Vec<String>,
}

/// Builds one table description from `(name, type, nullable)` columns.
fn table(
    primary_key: &str,
    columns: &[(&str, &str, bool)],
    foreign_keys: &[(&str, &str, &str)],
    unique_constraints: &[&[&str]],
) -> Table {
    Table {
        columns: columns
            .iter()
            .map(|&(name, normalized_type, nullable)| {
                (
                    name.to_string(),
                    Column {
                        name: name.to_string(),
                        normalized_type: normalized_type.to_string(),
                        nullable,
                    },
                )
            })
            .collect(),
        primary_keys: BTreeSet::from([primary_key.to_string()]),
        foreign_keys: foreign_keys
            .iter()
            .map(|&(from_column, to_table, to_column)| ForeignKey {
                from_column: from_column.to_string(),
                to_table: to_table.to_string(),
                to_column: to_column.to_string(),
            })
            .collect(),
        unique_constraints: unique_constraints
            .iter()
            .map(|columns| UniqueConstraint {
                columns: columns.iter().map(ToString::to_string).collect(),
            })
            .collect(),
    }
}

/// The tables the persistence crate reads and writes.
#[allow(clippy::too_many_lines)]
fn expected_schema() -> Schema {
    // INTEGER PRIMARY KEY columns report notnull = 0 in SQLite.
    let tables = BTreeMap::from([
        (
            "teams".to_string(),
            table(
                "team_id",
                &[("team_id", "integer", true), ("name", "text", false)],
                &[],
                &[&["name"]],
            ),
        ),
        (
            "players".to_string(),
            table(
                "player_id",
                &[
                    ("player_id", "integer", true),
                    ("name", "text", false),
                    ("jersey_number", "integer", true),
                    ("position", "text", true),
                    ("team_id", "integer", true),
                ],
                &[("team_id", "teams", "team_id")],
                &[],
            ),
        ),
        (
            "matches".to_string(),
            table(
                "match_id",
                &[
                    ("match_id", "integer", true),
                    ("played_at", "text", false),
                    ("home_team_id", "integer", false),
                    ("guest_team_id", "integer", false),
                ],
                &[
                    ("home_team_id", "teams", "team_id"),
                    ("guest_team_id", "teams", "team_id"),
                ],
                &[],
            ),
        ),
        (
            "sets".to_string(),
            table(
                "set_id",
                &[
                    ("set_id", "integer", true),
                    ("match_id", "integer", false),
                    ("set_number", "integer", false),
                    ("own_score", "integer", false),
                    ("opponent_score", "integer", false),
                ],
                &[("match_id", "matches", "match_id")],
                &[&["match_id", "set_number"]],
            ),
        ),
        (
            "actions".to_string(),
            table(
                "action_id",
                &[
                    ("action_id", "integer", true),
                    ("set_id", "integer", false),
                    ("category", "text", false),
                    ("executor_id", "integer", true),
                    ("result", "text", true),
                    ("target_player_id", "integer", true),
                    ("point_detail", "text", true),
                    ("point_for", "text", true),
                    ("created_at", "text", false),
                ],
                &[
                    ("set_id", "sets", "set_id"),
                    ("executor_id", "players", "player_id"),
                    ("target_player_id", "players", "player_id"),
                ],
                &[],
            ),
        ),
    ]);

    Schema { tables }
}

/// Introspect `SQLite` schema
fn introspect_sqlite_schema(conn: &mut SqliteConnection) -> Result<Schema> {
    #[derive(QueryableByName)]
    struct TableName {
        #[diesel(sql_type = Text)]
        name: String,
    }

    #[derive(QueryableByName)]
    struct ColumnInfo {
        #[diesel(sql_type = Text)]
        name: String,
        #[diesel(sql_type = Text)]
        r#type: String,
        #[diesel(sql_type = Integer)]
        notnull: i32,
        #[diesel(sql_type = Integer)]
        pk: i32,
    }

    #[derive(QueryableByName)]
    struct ForeignKeyInfo {
        #[diesel(sql_type = Text)]
        table: String,
        #[diesel(sql_type = Text)]
        from: String,
        #[diesel(sql_type = Text)]
        to: String,
    }

    #[derive(QueryableByName)]
    struct IndexInfo {
        #[diesel(sql_type = Text)]
        name: String,
        #[diesel(sql_type = Text)]
        origin: String,
    }

    #[derive(QueryableByName)]
    struct IndexColumnInfo {
        #[diesel(sql_type = Text)]
        name: String,
    }

    let mut schema = Schema {
        tables: BTreeMap::new(),
    };

    let tables: Vec<TableName> = diesel::sql_query(
        "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' \
         AND name != '__diesel_schema_migrations' ORDER BY name",
    )
    .load(conn)
    .wrap_err("Failed to query SQLite tables")?;

    for table in tables {
        let mut table_info = Table {
            columns: BTreeMap::new(),
            primary_keys: BTreeSet::new(),
            foreign_keys: BTreeSet::new(),
            unique_constraints: BTreeSet::new(),
        };

        let columns: Vec<ColumnInfo> =
            diesel::sql_query(format!("PRAGMA table_info({})", table.name))
                .load(conn)
                .wrap_err(format!("Failed to get columns for table {}", table.name))?;

        for col in columns {
            let normalized_type = normalize_sqlite_type(&col.r#type);
            table_info.columns.insert(
                col.name.clone(),
                Column {
                    name: col.name.clone(),
                    normalized_type,
                    nullable: col.notnull == 0,
                },
            );

            if col.pk > 0 {
                table_info.primary_keys.insert(col.name);
            }
        }

        let fks: Vec<ForeignKeyInfo> =
            diesel::sql_query(format!("PRAGMA foreign_key_list({})", table.name))
                .load(conn)
                .wrap_err(format!(
                    "Failed to get foreign keys for table {}",
                    table.name
                ))?;

        for fk in fks {
            table_info.foreign_keys.insert(ForeignKey {
                from_column: fk.from,
                to_table: fk.table,
                to_column: fk.to,
            });
        }

        let indexes: Vec<IndexInfo> =
            diesel::sql_query(format!("PRAGMA index_list({})", table.name))
                .load(conn)
                .wrap_err(format!("Failed to get indexes for table {}", table.name))?;

        // Plain indexes are tuning, not structure; only unique constraints count.
        for idx in indexes.into_iter().filter(|idx| idx.origin == "u") {
            let index_columns: Vec<IndexColumnInfo> =
                diesel::sql_query(format!("PRAGMA index_info({})", idx.name))
                    .load(conn)
                    .wrap_err(format!("Failed to get index columns for {}", idx.name))?;

            table_info.unique_constraints.insert(UniqueConstraint {
                columns: index_columns.into_iter().map(|c| c.name).collect(),
            });
        }

        schema.tables.insert(table.name, table_info);
    }

    Ok(schema)
}

/// Normalize `SQLite` type to common representation
fn normalize_sqlite_type(sqlite_type: &str) -> String {
    let normalized = sqlite_type.to_uppercase();
    if normalized.contains("INT") {
        "integer".to_string()
    } else if normalized.contains("REAL")
        || normalized.contains("FLOA")
        || normalized.contains("DOUB")
    {
        "real".to_string()
    } else if normalized.contains("BLOB") {
        "blob".to_string()
    } else {
        "text".to_string() // Default for SQLite
    }
}

/// Compare an expected schema with an introspected one, reporting every difference
fn compare_schemas(expected: &Schema, actual: &Schema) -> Result<()> {
    let mut differences: Vec<String> = Vec::new();

    for name in expected.tables.keys() {
        if !actual.tables.contains_key(name) {
            differences.push(format!("missing table {name}"));
        }
    }
    for name in actual.tables.keys() {
        if !expected.tables.contains_key(name) {
            differences.push(format!("unexpected table {name}"));
        }
    }

    for (name, expected_table) in &expected.tables {
        let Some(actual_table) = actual.tables.get(name) else {
            continue;
        };

        for (column_name, column) in &expected_table.columns {
            match actual_table.columns.get(column_name) {
                None => differences.push(format!("{name}: missing column {column_name}")),
                Some(found) if found != column => differences.push(format!(
                    "{name}.{column_name}: expected {column:?}, found {found:?}"
                )),
                Some(_) => {}
            }
        }
        for column_name in actual_table.columns.keys() {
            if !expected_table.columns.contains_key(column_name) {
                differences.push(format!("{name}: unexpected column {column_name}"));
            }
        }

        if expected_table.primary_keys != actual_table.primary_keys {
            differences.push(format!(
                "{name}: primary key {:?} != {:?}",
                expected_table.primary_keys, actual_table.primary_keys
            ));
        }
        if expected_table.foreign_keys != actual_table.foreign_keys {
            differences.push(format!(
                "{name}: foreign keys {:?} != {:?}",
                expected_table.foreign_keys, actual_table.foreign_keys
            ));
        }
        if expected_table.unique_constraints != actual_table.unique_constraints {
            differences.push(format!(
                "{name}: unique constraints {:?} != {:?}",
                expected_table.unique_constraints, actual_table.unique_constraints
            ));
        }
    }

    if differences.is_empty() {
        return Ok(());
    }
    for difference in &differences {
        tracing::error!("{difference}");
    }
    Err(eyre!(
        "Schema verification found {} difference(s)",
        differences.len()
    ))
}

/// An extension trait for `duct::Expression` that logs the command being run
/// before running it.
trait ExpressionExt {
    /// Run the command and log the command being run
    fn run_with_trace(&self) -> io::Result<Output>;
}

impl ExpressionExt for duct::Expression {
    fn run_with_trace(&self) -> io::Result<Output> {
        tracing::info!("running command: {:?}", self);
        self.run().inspect_err(|_| {
            // The command that was run may have scrolled off the screen, so repeat it here
            tracing::error!("failed to run command: {:?}", self);
        })
    }
}
