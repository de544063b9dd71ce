// Copyright (C) 2026 The Volley Stats Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::PathBuf;
use time::macros::datetime;

use crate::tests::helpers::{Harness, create_harness, record_sample_match};
use crate::{
    ExportError, MatchReport, StartMatchResponse, build_match_report, export_match_report,
    render_match_report, try_export_match_report,
};

#[test]
fn test_render_contains_every_section() {
    let mut harness: Harness = create_harness();
    let started: StartMatchResponse = record_sample_match(&mut harness);
    let report: MatchReport =
        build_match_report(&mut harness.persistence, started.match_id).unwrap();

    let document: Vec<u8> =
        render_match_report(&report, datetime!(2026-03-01 12:30:00 UTC)).unwrap();
    let text: String = String::from_utf8(document).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Match Report");
    assert!(lines.contains(&"Generated,2026-03-01 12:30:00 UTC"));
    assert!(lines.contains(&"Home,Falcons"));
    assert!(lines.contains(&"Sets"));
    assert!(lines.contains(&"1,2,2"));
    assert!(lines.contains(&"Players"));
    assert!(lines.contains(&"Setter-Attacker"));
    assert!(lines.contains(&"Setting Distribution"));
    assert!(lines.contains(&"#7 Mo,#12 Kai,2,66.7"));
    assert!(lines.iter().any(|line| line.starts_with("#3 Lea,1,1,0,0,1,3,1,1,1,1.5,")));
}

#[test]
fn test_export_writes_file() {
    let mut harness: Harness = create_harness();
    let started: StartMatchResponse = record_sample_match(&mut harness);
    let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join("report.csv");

    assert!(export_match_report(
        &mut harness.persistence,
        started.match_id,
        &path
    ));

    let text: String = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("Match Report"));
    assert!(text.contains("Guest,Ravens"));
}

#[test]
fn test_export_of_unknown_match_writes_nothing() {
    let mut harness: Harness = create_harness();
    let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join("missing.csv");

    assert!(!export_match_report(&mut harness.persistence, 99, &path));
    assert!(!path.exists());

    let result: Result<(), ExportError> =
        try_export_match_report(&mut harness.persistence, 99, &path);
    assert!(matches!(result, Err(ExportError::Report(_))));
}

#[test]
fn test_export_into_missing_directory_fails() {
    let mut harness: Harness = create_harness();
    let started: StartMatchResponse = record_sample_match(&mut harness);
    let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join("nope").join("report.csv");

    let result: Result<(), ExportError> =
        try_export_match_report(&mut harness.persistence, started.match_id, &path);

    assert!(matches!(result, Err(ExportError::Io(_))));
}
