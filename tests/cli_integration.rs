//! Integration tests for the `trip` CLI.
//!
//! Each test runs `trip` as a subprocess against the built-in dataset or a
//! temp trip file, and checks stdout and the exit status.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Get the path to the built `trip` binary.
fn trip_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("trip");
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(trip_bin())
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to run trip")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

const SMALL_TRIP: &str = r#"
[trip]
name = "Weekend"

[[days]]
date = "3/1"
day_label = "D1"
weekday = "SAT"
weather = { temp = "12C", condition = "Sunny", icon = "sun" }

[[days.items]]
id = "a"
time = "09:00"
title = "Bakery breakfast"
category = "food"
tags = ["must-eat"]

[[days.items]]
id = "b"
time = "11:00"
title = "Museum"
category = "activity"
location = "Old town"

[[days]]
date = "3/2"
day_label = "D2"
weekday = "SUN"
weather = { temp = "10C", condition = "Rain", icon = "rain" }

[[days.items]]
id = "c"
time = "10:00"
title = "Train home"
category = "transport"
"#;

fn write_trip(dir: &Path, text: &str) -> PathBuf {
    let path = dir.join("trip.toml");
    fs::write(&path, text).unwrap();
    path
}

// ---------------------------------------------------------------------------
// Built-in dataset
// ---------------------------------------------------------------------------

#[test]
fn days_lists_builtin_trip() {
    let out = run(&["days"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let text = stdout(&out);
    assert!(text.contains("D1"));
    assert!(text.contains("1/24"));
    assert!(text.contains("D8"));
}

#[test]
fn days_json_counts_days() {
    let out = run(&["days", "--json"]);
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    let days = v.as_array().unwrap();
    assert_eq!(days.len(), 8);
    assert_eq!(days[0]["index"], 1);
    assert_eq!(days[0]["day_label"], "D1");
}

#[test]
fn show_json_keeps_stored_order() {
    let out = run(&["show", "D1", "--json"]);
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    let ids: Vec<&str> = v["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["d1-1", "d1-2", "d1-3", "d1-4", "d1-5", "d1-6"]);
}

#[test]
fn item_json_reports_next_stop() {
    let out = run(&["item", "d1-1", "--json"]);
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(v["id"], "d1-1");
    assert_eq!(v["day_label"], "D1");
    assert_eq!(v["next"]["id"], "d1-2");
}

#[test]
fn reference_lists_sections() {
    let out = run(&["reference", "--json"]);
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert!(!v["essentials"].as_array().unwrap().is_empty());
    assert!(!v["contacts"].as_array().unwrap().is_empty());
    assert!(v["flights"].is_array());
    assert!(v["hotels"].is_array());
}

#[test]
fn check_builtin_is_valid() {
    let out = run(&["check"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert!(stdout(&out).contains("valid"));
}

#[test]
fn unknown_day_is_an_error() {
    let out = run(&["show", "D99"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("day not found: D99"));
}

#[test]
fn unknown_item_is_an_error() {
    let out = run(&["item", "nope"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("item not found: nope"));
}

// ---------------------------------------------------------------------------
// --trip file
// ---------------------------------------------------------------------------

#[test]
fn show_accepts_index_label_and_date() {
    let tmp = TempDir::new().unwrap();
    let path = write_trip(tmp.path(), SMALL_TRIP);
    let path = path.to_str().unwrap();
    for day in ["2", "D2", "d2", "3/2"] {
        let out = run(&["--trip", path, "show", day]);
        assert!(out.status.success(), "{}: {}", day, stderr(&out));
        assert!(stdout(&out).contains("Train home"), "{}", day);
    }
}

#[test]
fn last_item_has_no_next_stop() {
    let tmp = TempDir::new().unwrap();
    let path = write_trip(tmp.path(), SMALL_TRIP);
    let out = run(&["--trip", path.to_str().unwrap(), "item", "b"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("Museum"));
    assert!(text.contains("@ Old town") || text.contains("Old town"));
    assert!(text.contains("last stop of the day"));
}

#[test]
fn search_filters_by_category_and_tag() {
    let tmp = TempDir::new().unwrap();
    let path = write_trip(tmp.path(), SMALL_TRIP);
    let path = path.to_str().unwrap();

    let out = run(&["--trip", path, "search", "--json", "."]);
    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(v.as_array().unwrap().len(), 3);

    let out = run(&["--trip", path, "search", "--json", "--category", "food", "."]);
    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    let hits = v.as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["item_id"], "a");

    let out = run(&["--trip", path, "search", "--json", "--tag", "must-eat", "."]);
    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(v.as_array().unwrap().len(), 1);
}

#[test]
fn search_is_case_insensitive() {
    let tmp = TempDir::new().unwrap();
    let path = write_trip(tmp.path(), SMALL_TRIP);
    let out = run(&["--trip", path.to_str().unwrap(), "search", "MUSEUM"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("Museum"));
}

#[test]
fn search_rejects_unknown_category() {
    let tmp = TempDir::new().unwrap();
    let path = write_trip(tmp.path(), SMALL_TRIP);
    let out = run(&["--trip", path.to_str().unwrap(), "search", "--category", "spa", "x"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("unknown category"));
}

#[test]
fn duplicate_ids_fail_check_and_loading() {
    let tmp = TempDir::new().unwrap();
    let text = SMALL_TRIP.replace("id = \"c\"", "id = \"a\"");
    let path = write_trip(tmp.path(), &text);
    let path = path.to_str().unwrap();

    let out = run(&["--trip", path, "check"]);
    assert!(!out.status.success());
    assert!(stdout(&out).contains("duplicate item id a"));

    let out = run(&["--trip", path, "check", "--json"]);
    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(v["valid"], false);
    assert_eq!(v["errors"][0]["type"], "duplicate_id");

    let out = run(&["--trip", path, "show", "1"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("invalid trip data"));
}

#[test]
fn missing_trip_file_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("absent.toml");
    let out = run(&["--trip", path.to_str().unwrap(), "days"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("could not read"));
}

#[test]
fn json_output_has_quiet_stderr_by_default() {
    let tmp = TempDir::new().unwrap();
    let path = write_trip(tmp.path(), SMALL_TRIP);
    let out = Command::new(trip_bin())
        .args(["--trip", path.to_str().unwrap(), "days", "--json"])
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run trip");
    assert!(out.status.success());
    assert_eq!(stderr(&out), "");
    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(v.as_array().unwrap().len(), 2);
}
