//! CLI integration tests using assert_cmd.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn times_drill() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("times-drill").unwrap()
}

#[test]
fn empty_input_exits_cleanly() {
    times_drill()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Type a table number"));
}

#[test]
fn preselected_table_starts_practice() {
    times_drill()
        .args(["--tables", "10", "--seed", "1"])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Practicing: Table of 10"))
        .stdout(predicate::str::contains("10 x "))
        .stdout(predicate::str::contains("Options: "));
}

#[test]
fn interactive_selection_then_start() {
    times_drill()
        .args(["--seed", "3"])
        .write_stdin("12\n15\nstart\nback\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Selected tables: 12, 15"))
        .stdout(predicate::str::contains("Practicing: Tables of 12, 15"))
        .stdout(predicate::str::contains("Back to table selection"));
}

#[test]
fn start_without_tables_is_refused() {
    times_drill()
        .write_stdin("start\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("select at least one table before starting"));
}

#[test]
fn wrong_answer_shows_try_again() {
    times_drill()
        .args(["--tables", "10", "--seed", "5", "--delay-ms", "0"])
        .write_stdin("0\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Try again..."));
}

#[test]
fn out_of_range_table_fails() {
    times_drill()
        .args(["--tables", "5"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside the available range"));
}

#[test]
fn json_mode_emits_snapshot() {
    times_drill()
        .args(["--tables", "20,21", "--seed", "9", "--json"])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""type":"snapshot""#))
        .stdout(predicate::str::contains(r#""type":"options""#));
}

#[test]
fn config_file_changes_table_range() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "table_min = 2\ntable_max = 12\n\n[multiplier_range]\nmin = 1\nmax = 12").unwrap();

    times_drill()
        .arg("--config")
        .arg(file.path())
        .args(["--tables", "3", "--seed", "2"])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Practicing: Table of 3"));
}

#[test]
fn invalid_config_file_fails() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "max_display_options = 0").unwrap();

    times_drill()
        .arg("--config")
        .arg(file.path())
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn zero_max_options_flag_fails() {
    times_drill()
        .args(["--max-options", "0"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_display_options"));
}
