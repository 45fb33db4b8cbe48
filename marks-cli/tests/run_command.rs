//! Integration tests for the `run` command.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_run_script() {
    let env = TestEnv::new();
    let script = env.write_script(
        "build.marks",
        &[
            "# Build a reading list",
            "mkdir Reading",
            "cd Reading",
            "",
            r#"add "The Book" https://doc.rust-lang.org/book --tags rust"#,
            "pwd",
            "open \"The Book\"",
        ],
    );

    env.command()
        .arg("run")
        .arg(&script)
        .assert()
        .success()
        .stdout("/bookmarks/Reading\nhttps://doc.rust-lang.org/book\n");
}

#[test]
fn test_run_stops_at_first_error() {
    let env = TestEnv::new();
    let script = env.write_script("stop.marks", &["pwd", "cd Google", "pwd"]);

    env.command()
        .arg("run")
        .arg(&script)
        .assert()
        .code(1)
        .stdout("/bookmarks\n")
        .stderr(predicate::str::contains("cannot enter a bookmark"))
        .stderr(predicate::str::contains("stop.marks:2"));
}

#[test]
fn test_run_error_code_follows_failing_line() {
    let env = TestEnv::new();
    let script = env.write_script("missing.marks", &["rm Nope"]);

    env.command().arg("run").arg(&script).assert().code(2);
}

#[test]
fn test_keep_going_runs_every_line() {
    let env = TestEnv::new();
    let script = env.write_script(
        "keep.marks",
        &["rm Nope", "pwd", "paste", "cd Tech", "pwd"],
    );

    env.command()
        .arg("run")
        .arg(&script)
        .arg("--keep-going")
        .assert()
        .code(1)
        .stdout("/bookmarks\n/bookmarks/Tech\n")
        .stderr(predicate::str::contains("line 1"))
        .stderr(predicate::str::contains("line 3"))
        .stderr(predicate::str::contains("nothing to paste"))
        .stderr(predicate::str::contains("2 line(s)"));
}

#[test]
fn test_exit_ends_script_successfully() {
    let env = TestEnv::new();
    let script = env.write_script("exit.marks", &["pwd", "exit", "rm Nope"]);

    env.command()
        .arg("run")
        .arg(&script)
        .assert()
        .success()
        .stdout("/bookmarks\n");
}

#[test]
fn test_missing_script_is_io_error() {
    let env = TestEnv::new();

    env.command()
        .args(["run", "does-not-exist.marks"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains(
            "failed to read script does-not-exist.marks",
        ));
}
