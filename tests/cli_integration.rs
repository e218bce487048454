use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn todoz(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("todoz").unwrap();
    cmd.env("TODOZ_HOME", home)
        .env_remove("TODOZ_LOG")
        .arg("--no-color");
    cmd
}

fn saved_snapshot(path: &Path) -> serde_json::Value {
    let content = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn add_then_list_across_runs() {
    let home = tempfile::tempdir().unwrap();

    todoz(home.path())
        .args(["add", "Buy", "milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Todo added (1): Buy milk"));

    todoz(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Todos [all]"))
        .stdout(predicate::str::contains("[ ] 1. Buy milk"));
}

#[test]
fn snapshot_is_written_to_the_data_dir() {
    let home = tempfile::tempdir().unwrap();

    todoz(home.path())
        .arg("add Walk dog; done 1")
        .assert()
        .success();

    let snapshot = saved_snapshot(&home.path().join("todos.json"));
    assert_eq!(snapshot["nextId"], 2);
    assert_eq!(snapshot["currentView"], "all");
    assert_eq!(snapshot["todos"][0]["title"], "Walk dog");
    assert_eq!(snapshot["todos"][0]["completed"], true);
}

#[test]
fn batch_runs_in_order() {
    let home = tempfile::tempdir().unwrap();

    todoz(home.path())
        .arg("add a; add b; add c; complete 2; stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Todo added (3): c"))
        .stdout(predicate::str::contains("Total:      3"))
        .stdout(predicate::str::contains("Completed:  1"))
        .stdout(predicate::str::contains("Progress:   33%"));
}

#[test]
fn sort_and_search() {
    let home = tempfile::tempdir().unwrap();
    todoz(home.path())
        .arg("add banana; add Apple; add cherry pie")
        .assert()
        .success();

    let output = todoz(home.path())
        .args(["sort", "title", "desc"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let cherry = stdout.find("cherry pie").unwrap();
    let banana = stdout.find("banana").unwrap();
    let apple = stdout.find("Apple").unwrap();
    assert!(cherry < banana && banana < apple);

    todoz(home.path())
        .args(["search", "PIE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cherry pie"))
        .stdout(predicate::str::contains("banana").not());
}

#[test]
fn unknown_command_fails_with_message() {
    let home = tempfile::tempdir().unwrap();

    todoz(home.path())
        .args(["frobnicate", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown command: 'frobnicate 3'"));
}

#[test]
fn missing_todo_fails_without_saving() {
    let home = tempfile::tempdir().unwrap();

    todoz(home.path())
        .args(["delete", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Todo not found: 9"));

    assert!(!home.path().join("todos.json").exists());
}

#[test]
fn stdin_session_stops_at_exit() {
    let home = tempfile::tempdir().unwrap();

    todoz(home.path())
        .write_stdin("add first\nlist\nexit\nadd never\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[ ] 1. first"))
        .stdout(predicate::str::contains("Goodbye!"))
        .stdout(predicate::str::contains("todoz>").not());

    let snapshot = saved_snapshot(&home.path().join("todos.json"));
    assert_eq!(snapshot["todos"].as_array().unwrap().len(), 1);
}

#[test]
fn stdin_session_keeps_going_after_errors() {
    let home = tempfile::tempdir().unwrap();

    todoz(home.path())
        .write_stdin("delete 4\nadd still here\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Todo not found: 4"))
        .stdout(predicate::str::contains("Todo added (1): still here"));
}

#[test]
fn stdin_session_skips_undecodable_lines() {
    let home = tempfile::tempdir().unwrap();

    todoz(home.path())
        .write_stdin(b"add first\n\xff\xfe broken\nadd second\n".to_vec())
        .assert()
        .success()
        .stdout(predicate::str::contains("Todo added (1): first"))
        .stdout(predicate::str::contains("Todo added (2): second"));
}

#[test]
fn file_flag_overrides_the_data_file() {
    let home = tempfile::tempdir().unwrap();
    let custom = home.path().join("work.json");

    todoz(home.path())
        .arg("--file")
        .arg(&custom)
        .args(["add", "Ship", "it"])
        .assert()
        .success();

    assert!(custom.exists());
    assert!(!home.path().join("todos.json").exists());
}

#[test]
fn config_file_picks_the_data_file() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(
        home.path().join("config.json"),
        r#"{ "data-file": "personal.json" }"#,
    )
    .unwrap();

    todoz(home.path()).args(["add", "Call", "mom"]).assert().success();

    let snapshot = saved_snapshot(&home.path().join("personal.json"));
    assert_eq!(snapshot["todos"][0]["title"], "Call mom");
}

#[test]
fn corrupt_snapshot_starts_empty() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(home.path().join("todos.json"), "{ not json").unwrap();

    todoz(home.path())
        .arg("add fresh start")
        .assert()
        .success()
        .stdout(predicate::str::contains("Todo added (1): fresh start"));
}

#[test]
fn help_lists_commands() {
    let home = tempfile::tempdir().unwrap();

    todoz(home.path())
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("add <title>"))
        .stdout(predicate::str::contains("clear completed"));
}
