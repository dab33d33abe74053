//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn quizstore(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("quizstore").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("QUIZSTORE_CATALOG_URL")
        .env_remove("QUIZSTORE_STATE_DIR")
        .env_remove("RUST_LOG");
    cmd
}

/// A directory with the sample config and catalog, catalog already fetched.
fn ready_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    quizstore(&dir).arg("init").assert().success();
    quizstore(&dir)
        .arg("fetch")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 2 quizzes"));
    dir
}

fn answer(dir: &TempDir, id: u32, option: &str) {
    let id = id.to_string();
    quizstore(dir)
        .args(["answer", id.as_str(), option])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    quizstore(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created quizstore.toml"))
        .stdout(predicate::str::contains("Created data.json"));

    assert!(dir.path().join("quizstore.toml").exists());
    assert!(dir.path().join("data.json").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();
    quizstore(&dir).arg("init").assert().success();

    quizstore(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn list_shows_catalog() {
    let dir = ready_dir();

    quizstore(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Effort"))
        .stdout(predicate::str::contains("HTML"));
}

#[test]
fn list_before_fetch() {
    let dir = TempDir::new().unwrap();
    quizstore(&dir).arg("init").assert().success();

    quizstore(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No quizzes loaded"));
}

#[test]
fn full_quiz_high_effort() {
    let dir = ready_dir();

    quizstore(&dir)
        .args(["select", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Started \"Effort\" (10 questions)"));

    for id in 1..=10 {
        answer(&dir, id, "1");
    }

    quizstore(&dir)
        .arg("complete")
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 30"))
        .stdout(predicate::str::contains("outstanding drive"));

    let output = quizstore(&dir)
        .args(["result", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["score"], 30);
    assert_eq!(report["max_score"], 30);
    assert_eq!(report["level"], "high");
    assert_eq!(report["questions"].as_array().unwrap().len(), 10);
}

#[test]
fn partial_quiz_low_effort() {
    let dir = ready_dir();
    quizstore(&dir).args(["select", "effort"]).assert().success();

    answer(&dir, 1, "3");
    answer(&dir, 2, "Cram the night before");
    answer(&dir, 3, "something else entirely");

    quizstore(&dir)
        .arg("complete")
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 4"));

    quizstore(&dir)
        .arg("result")
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 4/30 (low effort)"));
}

#[test]
fn navigation_is_bounded() {
    let dir = ready_dir();
    quizstore(&dir).args(["select", "HTML"]).assert().success();

    quizstore(&dir)
        .arg("prev")
        .assert()
        .success()
        .stdout(predicate::str::contains("Already at the first question"));

    quizstore(&dir).arg("next").assert().success();
    quizstore(&dir)
        .arg("next")
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 3 of 3"));

    quizstore(&dir)
        .arg("next")
        .assert()
        .success()
        .stdout(predicate::str::contains("Already at the last question"));

    quizstore(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Phase: in progress"))
        .stdout(predicate::str::contains("Question 3 of 3"));
}

#[test]
fn answer_without_quiz() {
    let dir = ready_dir();

    quizstore(&dir)
        .args(["answer", "1", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No quiz in progress"));
}

#[test]
fn answer_unknown_question() {
    let dir = ready_dir();
    quizstore(&dir).args(["select", "1"]).assert().success();

    quizstore(&dir)
        .args(["answer", "99", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No question with id 99"));
}

#[test]
fn select_unknown_quiz_fails() {
    let dir = ready_dir();

    quizstore(&dir)
        .args(["select", "Rust"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no quiz matching 'Rust'"));
}

#[test]
fn result_requires_completion() {
    let dir = ready_dir();
    quizstore(&dir).args(["select", "1"]).assert().success();

    quizstore(&dir)
        .arg("result")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no completed quiz"));
}

#[test]
fn reset_returns_to_idle_and_keeps_catalog() {
    let dir = ready_dir();
    quizstore(&dir).args(["select", "1"]).assert().success();
    answer(&dir, 1, "1");
    quizstore(&dir).arg("complete").assert().success();

    quizstore(&dir)
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Session reset"));

    quizstore(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Phase: idle"))
        .stdout(predicate::str::contains("Catalog: 2 quizzes"));
}

#[test]
fn html_result_written_to_file() {
    let dir = ready_dir();
    quizstore(&dir).args(["select", "2"]).assert().success();
    answer(&dir, 1, "1");
    quizstore(&dir).arg("complete").assert().success();

    let out = dir.path().join("results/result.html");
    quizstore(&dir)
        .args(["result", "--format", "html", "--output"])
        .arg(&out)
        .assert()
        .success();

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.contains("<html"));
    assert!(html.contains("HTML"));
}

#[test]
fn failed_fetch_keeps_cached_catalog() {
    let dir = ready_dir();
    std::fs::remove_file(dir.path().join("data.json")).unwrap();

    quizstore(&dir)
        .arg("fetch")
        .assert()
        .success()
        .stdout(predicate::str::contains("keeping 2 cached"));
}

#[test]
fn mismatched_state_version_starts_fresh() {
    let dir = ready_dir();
    let state_file = dir.path().join(".quizstore/quizz.json");
    let raw = std::fs::read_to_string(&state_file).unwrap();
    let mut blob: serde_json::Value = serde_json::from_str(&raw).unwrap();
    blob["version"] = serde_json::json!(2);
    std::fs::write(&state_file, blob.to_string()).unwrap();

    quizstore(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog: 0 quizzes"));
}

#[test]
fn explicit_config_path() {
    let dir = ready_dir();
    let other = TempDir::new().unwrap();

    // The state dir and catalog in the config resolve next to the file.
    quizstore(&other)
        .arg("--config")
        .arg(dir.path().join("quizstore.toml"))
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog: 2 quizzes"));

    quizstore(&other)
        .arg("--config")
        .arg(dir.path().join("quizstore.toml"))
        .arg("fetch")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 2 quizzes"));
    assert!(!other.path().join(".quizstore").exists());

    quizstore(&other)
        .args(["status", "--config", "missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn transition_logs_follow_rust_log() {
    let dir = ready_dir();

    quizstore(&dir)
        .args(["select", "1"])
        .env("RUST_LOG", "quizstore=info")
        .assert()
        .success()
        .stderr(predicate::str::contains("quiz selected"));

    quizstore(&dir)
        .args(["select", "1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("quiz selected").not());
}

#[test]
fn help_output() {
    let dir = TempDir::new().unwrap();
    quizstore(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Step through quizzes from the terminal"));
}

#[test]
fn version_output() {
    let dir = TempDir::new().unwrap();
    quizstore(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quizstore"));
}
