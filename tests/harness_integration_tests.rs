//! End-to-end integration tests demonstrating the test harness.
//!
//! These tests exercise the CLI through the harness API, showing how to
//! set up sink directories, append entries, rebuild the index, and make
//! assertions. They also mix direct library calls with binary runs to
//! check that both paths see the same document state.

mod common;

use common::harness::{TestEntry, TestEnv};
use predicates::prelude::*;

// ===========================================
// Harness Round-Trips
// ===========================================

#[test]
fn test_find_on_empty_sink_reports_nothing() {
    let env = TestEnv::new();

    env.sync_index().expect("Should build index");

    env.cmd()
        .find_all()
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching entries found."));
}

#[test]
fn test_find_lists_added_entries() {
    let env = TestEnv::new();

    let entry = TestEntry::new("architecture decisions")
        .description("why the index is a snapshot")
        .keyword("adr");
    env.add_entry(&entry);
    env.sync_index().expect("Should build index");

    env.cmd()
        .find("adr")
        .assert()
        .success()
        .stdout(predicate::str::contains("Architecture decisions"));
}

#[test]
fn test_find_json_format() {
    let env = TestEnv::new();

    let entry = TestEntry::new("json entry").id("2000").keyword("json-test");
    env.add_entry(&entry);
    env.sync_index().expect("Should build index");

    let output: serde_json::Value = env.cmd().find("json-test").format_json().output_json();

    assert!(output.is_object(), "Output should be a JSON object");
    let data = output.get("data").expect("Should have 'data' field");
    let entries = data.as_array().expect("data should be an array");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["id"], "2000");
    assert_eq!(entries[0]["title"], "json entry");
}

#[test]
fn test_sync_indexes_document_and_extra_files() {
    let env = TestEnv::new();

    env.add_entry(&TestEntry::new("from document").keyword("doc"));
    env.write_memo_file(
        "extra.md",
        "# extra\n\n## e1\n\n\
         | title | description | source | keywords |\n\
         | - | - | - | - |\n\
         | from file | side memo | | file |\n",
    );

    let tree = env.sync_index().expect("Should build index");

    assert_eq!(tree.entry_count(), 2);
}

#[test]
fn test_cli_created_entry_parses_back() {
    let env = TestEnv::new();

    env.cmd()
        .new_entry()
        .args(["--title", "round trip", "--keywords", "loop"])
        .assert()
        .success();

    let tree = zinc::parser::parse_document(&env.read_document())
        .expect("CLI output should stay parseable");
    assert_eq!(tree.entry_count(), 1);
}

#[test]
fn test_library_edits_are_visible_to_the_cli() {
    let env = TestEnv::new();

    env.add_entry(&TestEntry::new("doomed").id("3000").keyword("gone"));
    env.add_entry(&TestEntry::new("kept").id("3001").keyword("stays"));
    env.sync_index().expect("Should build index");

    zinc::document::remove_entry(env.sink_dir(), "3000").expect("Should remove entry");

    env.cmd()
        .sync()
        .assert()
        .success()
        .stdout(predicate::str::contains("Indexed 1 entries"));
    env.cmd()
        .find("gone")
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching entries found."));
}
