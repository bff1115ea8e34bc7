//! Integration tests for the kb CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn kb() -> Command {
    Command::cargo_bin("kb").unwrap()
}

// ---------------------------------------------------------------------------
// roll
// ---------------------------------------------------------------------------

#[test]
fn roll_simple_notation() {
    kb().args(["roll", "2d6", "--seed", "42", "--name", "Kael"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Kael rolled a 2d6! The result was:")
                .and(predicate::str::contains("Total:")),
        );
}

#[test]
fn roll_group_modifier_shows_breakdown() {
    kb().args(["roll", "(3d8)+3", "--seed", "7"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("with a +3 modifier")
                .and(predicate::str::contains("(")),
        );
}

#[test]
fn roll_multiple_terms_in_order() {
    let output = kb()
        .args(["roll", "2d8, 2d6", "--seed", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let d8_pos = stdout.find("2d8").unwrap();
    let d6_pos = stdout.find("2d6").unwrap();
    assert!(d8_pos < d6_pos);
    assert!(stdout.contains("\n\n"));
}

#[test]
fn roll_rejects_unknown_die() {
    kb().args(["roll", "3d7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "allowed dice are: d4, d6, d8, d10, d12, d20, d100",
        ));
}

#[test]
fn roll_rejects_garbage() {
    kb().args(["roll", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid roll: [abc]"));
}

#[test]
fn roll_is_reproducible_with_a_seed() {
    let first = kb()
        .args(["roll", "2d8, (3d6)-1, d20", "--seed", "42"])
        .output()
        .unwrap();
    let second = kb()
        .args(["roll", "2d8, (3d6)-1, d20", "--seed", "42"])
        .output()
        .unwrap();
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn roll_json_is_parseable() {
    let output = kb()
        .args(["roll", "2d6+1", "--seed", "42", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let results: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["term"]["sides"], 6);
    assert_eq!(results[0]["outcomes"].as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// d20
// ---------------------------------------------------------------------------

#[test]
fn d20_defaults_to_one_die() {
    kb().args(["d20", "--seed", "42", "--name", "Kael"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kael rolled a 1d20!"));
}

#[test]
fn d20_takes_a_count() {
    kb().args(["d20", "3", "--seed", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rolled a 3d20!"));
}

#[test]
fn d20_rejects_a_bad_count() {
    kb().args(["d20", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "[abc] is not a valid number of dice",
        ));
}

// ---------------------------------------------------------------------------
// commands
// ---------------------------------------------------------------------------

#[test]
fn commands_lists_the_registry() {
    kb().arg("commands")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("!commands")
                .and(predicate::str::contains("!d20"))
                .and(predicate::str::contains("!roll"))
                .and(predicate::str::contains("3 commands")),
        );
}

// ---------------------------------------------------------------------------
// chat
// ---------------------------------------------------------------------------

#[test]
fn chat_session_dispatches_commands() {
    kb().args(["chat", "--seed", "42", "--name", "Kael"])
        .write_stdin("!roll 2d6\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Kael rolled a 2d6!"));
}

#[test]
fn chat_session_flags_unknown_commands() {
    kb().args(["chat", "--seed", "42"])
        .write_stdin("!dance\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("no such command"));
}
