#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const NOW: &str = "2026-06-01T00:00:00Z";

const TIMELINE: &str = r#"
{
  "login": "octocat",
  "timeline": [
    {
      "year": 2025,
      "totalCommits": 200,
      "totalIssues": 10,
      "totalPRs": 30,
      "ownedRepos": [
        {
          "contributions": { "totalCount": 150 },
          "repository": {
            "url": "https://github.com/octocat/engine",
            "name": "engine",
            "owner": { "login": "octocat" },
            "stargazerCount": 120,
            "forkCount": 12,
            "primaryLanguage": { "name": "Rust" },
            "description": "scoring engine",
            "createdAt": "2021-01-01T00:00:00Z"
          }
        }
      ],
      "contributions": [
        {
          "contributions": { "totalCount": 5 },
          "repository": {
            "url": "https://github.com/rust-lang/cargo",
            "name": "cargo",
            "owner": { "login": "rust-lang" },
            "primaryLanguage": { "name": "Rust" }
          }
        }
      ]
    },
    {
      "year": 2024,
      "totalCommits": 100,
      "ownedRepos": [
        {
          "contributions": { "totalCount": 100 },
          "repository": {
            "url": "https://github.com/octocat/engine",
            "name": "engine",
            "owner": { "login": "octocat" },
            "stargazerCount": 80,
            "forkCount": 8,
            "primaryLanguage": { "name": "Rust" },
            "createdAt": "2021-01-01T00:00:00Z"
          }
        }
      ]
    }
  ]
}
"#;

fn write_timeline(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("timeline.json");
    fs::write(&path, content).expect("timeline should write");
    path
}

fn gitscore() -> Command {
    Command::cargo_bin("gitscore").expect("binary should compile")
}

fn score_json(path: &Path, extra: &[&str]) -> Value {
    let output = gitscore()
        .arg("score")
        .arg(path)
        .args(["--format", "json", "--now", NOW])
        .args(extra)
        .output()
        .expect("score should run");
    assert!(output.status.success(), "score should succeed");
    serde_json::from_slice(&output.stdout).expect("stdout should be json")
}

#[test]
fn score_renders_json_report() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_timeline(dir.path(), TIMELINE);

    let report = score_json(&path, &[]);
    assert_eq!(report["login"], "octocat");
    assert_eq!(report["metrics"]["activity"]["breakdown"]["recentCommits"], 40);
    assert_eq!(report["metrics"]["growth"]["details"]["commitsYoYChange"], 100.0);
    assert_eq!(report["metrics"]["collaboration"]["details"]["contributionPercentage"], 50.0);

    let categories = report["categories"].as_array().expect("categories array");
    let names: Vec<&str> = categories
        .iter()
        .map(|category| category["category"].as_str().unwrap_or_default())
        .collect();
    assert_eq!(names, vec!["OUTPUT", "QUALITY", "TRUST"]);
}

#[test]
fn score_is_reproducible_with_pinned_clock() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_timeline(dir.path(), TIMELINE);

    let first = score_json(&path, &[]);
    let second = score_json(&path, &[]);
    assert_eq!(first, second);
    assert_eq!(first["generatedAt"], "2026-06-01T00:00:00Z");
    assert_eq!(first["metrics"]["quality"]["breakdown"]["maturity"], 15);
}

#[test]
fn score_single_metric() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_timeline(dir.path(), TIMELINE);

    let metric = score_json(&path, &["--metric", "Collaboration"]);
    assert_eq!(metric["key"], "collaboration");
    assert!(metric["breakdown"]["contributionRatio"].is_number());
}

#[test]
fn score_rejects_unknown_metric() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_timeline(dir.path(), TIMELINE);

    gitscore()
        .arg("score")
        .arg(&path)
        .args(["--metric", "stars"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown metric: stars"));
}

#[test]
fn score_markdown_is_default_format() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_timeline(dir.path(), TIMELINE);

    gitscore()
        .arg("score")
        .arg(&path)
        .args(["--now", NOW])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("# Profile Report: octocat"))
        .stdout(predicate::str::contains("## Categories"));
}

#[test]
fn config_next_to_timeline_sets_format_and_clock() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_timeline(dir.path(), TIMELINE);
    fs::write(
        dir.path().join("gitscore.toml"),
        r#"
[clock]
now = "2026-06-01T00:00:00Z"

[report]
format = "json"
include_categories = false
"#,
    )
    .expect("config should write");

    let output = gitscore()
        .arg("score")
        .arg(&path)
        .env("HOME", dir.path())
        .output()
        .expect("score should run");
    assert!(output.status.success());
    let report: Value = serde_json::from_slice(&output.stdout).expect("stdout should be json");
    assert_eq!(report["generatedAt"], "2026-06-01T00:00:00Z");
    assert!(report.get("categories").is_none());
}

#[test]
fn invalid_config_is_a_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_timeline(dir.path(), TIMELINE);
    fs::write(dir.path().join("gitscore.toml"), "[check]\nmax_year_gap = 0\n")
        .expect("config should write");

    gitscore()
        .arg("score")
        .arg(&path)
        .env("HOME", dir.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("check.max_year_gap"));
}

#[test]
fn categories_command_prints_three_categories() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_timeline(dir.path(), TIMELINE);

    gitscore()
        .arg("categories")
        .arg(&path)
        .args(["--now", NOW])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("- Output:"))
        .stdout(predicate::str::contains("- Quality:"))
        .stdout(predicate::str::contains("- Trust:"));
}

#[test]
fn missing_timeline_file_fails() {
    let dir = TempDir::new().expect("temp dir should be created");

    gitscore()
        .arg("score")
        .arg(dir.path().join("absent.json"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("input file not found"));
}

#[test]
fn malformed_timeline_fails() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_timeline(dir.path(), "{ not json");

    gitscore()
        .arg("score")
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("timeline parse error"));
}

#[test]
fn check_passes_clean_timeline() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_timeline(dir.path(), TIMELINE);

    gitscore()
        .arg("check")
        .arg(&path)
        .args(["--now", NOW])
        .env("HOME", dir.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("check: no findings"));
}

#[test]
fn check_warns_on_ascending_timeline() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_timeline(
        dir.path(),
        r#"[{"year": 2024, "totalCommits": 3}, {"year": 2025, "totalCommits": 4}]"#,
    );

    gitscore()
        .arg("check")
        .arg(&path)
        .env("HOME", dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[WARN] timeline.order"));
}

#[test]
fn check_blocks_on_duplicate_years() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_timeline(
        dir.path(),
        r#"[{"year": 2025, "totalCommits": 3}, {"year": 2025, "totalCommits": 4}]"#,
    );

    gitscore()
        .arg("check")
        .arg(&path)
        .env("HOME", dir.path())
        .assert()
        .code(2)
        .stdout(predicate::str::contains("[BLOCKING] timeline.duplicate_year"));
}
