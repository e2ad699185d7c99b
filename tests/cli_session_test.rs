//! Integration tests for the interactive session via CLI.
//!
//! These drive `tg session` over stdin and verify:
//! - task intake, id assignment, and the un-scored list
//! - validation and bulk-JSON error paths leave the session intact
//! - the analyze preconditions (non-empty store, parseable bulk JSON)
//! - matrix gating on a prior analysis
//! - JSON and human-readable output formats

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_add_and_list_json() {
    let env = TestEnv::new();
    env.tg()
        .write_stdin("add \"Ship report\" --due 2024-01-01 --hours 2 --importance 9\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\":\"Ship report\""))
        .stdout(predicate::str::contains("\"id\":1"));
}

#[test]
fn test_ids_increase_across_adds() {
    let env = TestEnv::new();
    env.tg()
        .write_stdin(
            "add A --due 2024-01-01 --hours 1 --importance 3\n\
             add B --due 2024-01-02 --hours 2 --importance 4\n\
             list\nquit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\":1"))
        .stdout(predicate::str::contains("\"id\":2"))
        .stdout(predicate::str::contains("\"count\":2"));
}

#[test]
fn test_add_with_dependency_string() {
    let env = TestEnv::new();
    env.tg()
        .write_stdin("add A --due 2024-01-01 --hours 1 --importance 3 --deps \"1, 2, x, 3\"\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"dependencies\":[1,2,3]"));
}

#[test]
fn test_empty_title_is_rejected_and_store_unchanged() {
    let env = TestEnv::new();
    env.tg()
        .write_stdin("add \"  \" --due 2024-01-01 --hours 1 --importance 3\nlist\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\":0"))
        .stderr(predicate::str::contains("title must not be empty"));
}

#[test]
fn test_bad_due_date_is_rejected() {
    let env = TestEnv::new();
    env.tg()
        .write_stdin("add A --due someday --hours 1 --importance 3\nlist\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\":0"))
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}

#[test]
fn test_analyze_empty_store_reports_inline() {
    let env = TestEnv::new();
    env.tg()
        .write_stdin("analyze\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Add at least one task before analyzing",
        ));
}

#[test]
fn test_invalid_bulk_json_keeps_store() {
    let env = TestEnv::new();
    env.tg()
        .write_stdin(
            "add A --due 2024-01-01 --hours 1 --importance 3\n\
             paste {not valid\n\
             analyze\n\
             list\nquit\n",
        )
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid JSON format"))
        .stdout(predicate::str::contains("\"count\":1"))
        .stdout(predicate::str::contains("\"title\":\"A\""));
}

#[test]
fn test_empty_bulk_array_yields_empty_store_error() {
    let env = TestEnv::new();
    env.tg()
        .write_stdin("paste []\nanalyze\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Add at least one task before analyzing",
        ));
}

#[test]
fn test_matrix_requires_prior_analysis() {
    let env = TestEnv::new();
    env.tg()
        .write_stdin("matrix\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Analyze tasks first, then open the matrix.",
        ));
}

#[test]
fn test_unreachable_service_reports_api_error() {
    let env = TestEnv::new();
    env.tg()
        .args(["--service-url", "http://127.0.0.1:1/analyze/"])
        .write_stdin("add A --due 2024-01-01 --hours 1 --importance 3\nanalyze\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("API error"));
}

#[test]
fn test_strategy_selection_acknowledged() {
    let env = TestEnv::new();
    env.tg()
        .write_stdin("strategy deadline\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Strategy set to deadline"));
}

#[test]
fn test_reset_clears_store() {
    let env = TestEnv::new();
    env.tg()
        .write_stdin(
            "add A --due 2024-01-01 --hours 1 --importance 3\n\
             reset\n\
             list\nquit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Session reset"))
        .stdout(predicate::str::contains("\"count\":0"));
}

#[test]
fn test_human_readable_output() {
    let env = TestEnv::new();
    env.tg()
        .arg("-H")
        .write_stdin("add \"Ship report\" --due 2024-01-01 --hours 2 --importance 9\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("triage session"))
        .stdout(predicate::str::contains("Current tasks (not yet analyzed):"))
        .stdout(predicate::str::contains(
            "1. Ship report (due: 2024-01-01, imp: 9, hrs: 2)",
        ));
}

#[test]
fn test_exit_alias_ends_session() {
    let env = TestEnv::new();
    env.tg().write_stdin("exit\n").assert().success();
}

#[test]
fn test_unknown_command_keeps_session_alive() {
    let env = TestEnv::new();
    env.tg()
        .write_stdin("frobnicate\nadd A --due 2024-01-01 --hours 1 --importance 3\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\":\"A\""));
}

#[test]
fn test_load_bulk_from_file() {
    let env = TestEnv::new();
    let bulk = env.data_dir.path().join("tasks.json");
    std::fs::write(
        &bulk,
        r#"[{"title":"A","due_date":"2024-01-01","estimated_hours":2,"importance":9,"dependencies":[]}]"#,
    )
    .unwrap();

    env.tg()
        .write_stdin(format!("load {}\nquit\n", bulk.display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded bulk JSON from"));
}
