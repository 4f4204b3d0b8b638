//! End-to-end CLI tests that run the compiled binary
//!
//! Every command here points ABSURDA_DATA_DIR at its own temporary
//! directory, so the tests never touch real user data and never need a
//! network or an API key.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn absurda(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("absurda").expect("binary not built");
    cmd.env("ABSURDA_DATA_DIR", dir.path());
    cmd.env_remove("GEMINI_API_KEY");
    cmd
}

#[test]
fn test_help_lists_commands() {
    let dir = tempdir().expect("tempdir");
    absurda(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("share"))
        .stdout(predicate::str::contains("auth"));
}

#[test]
fn test_list_empty_history() {
    let dir = tempdir().expect("tempdir");
    absurda(&dir)
        .args(["list", "haiku"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Geen haiku items"));
}

#[test]
fn test_list_json_empty_is_valid_json() {
    let dir = tempdir().expect("tempdir");
    absurda(&dir)
        .args(["list", "cv", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn test_generate_without_key_fails() {
    let dir = tempdir().expect("tempdir");
    absurda(&dir)
        .args(["generate", "tongbreker"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GEMINI_API_KEY"));
}

#[test]
fn test_auth_round_trip() {
    let dir = tempdir().expect("tempdir");

    absurda(&dir)
        .args(["auth", "AIzaSyA1234567890abcdefghijklmnopqrstu"])
        .assert()
        .success()
        .stdout(predicate::str::contains("API key opgeslagen"));

    absurda(&dir)
        .args(["auth", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("AIzaSyA1...rstu"));

    absurda(&dir)
        .args(["auth", "--clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("API key verwijderd"));

    absurda(&dir)
        .args(["auth", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Geen API key opgeslagen"));
}

#[test]
fn test_auth_rejects_malformed_key() {
    let dir = tempdir().expect("tempdir");
    absurda(&dir)
        .args(["auth", "niet-een-key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Gemini API key"));
}

#[test]
fn test_share_unsupported_kind_fails() {
    let dir = tempdir().expect("tempdir");
    absurda(&dir)
        .args(["share", "tongbreker", "abcd1234"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("kunnen niet gedeeld worden"));
}

#[test]
fn test_import_malformed_token_fails() {
    let dir = tempdir().expect("tempdir");
    absurda(&dir)
        .args(["import", "haiku", "niet-een-token"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Ongeldige share token"));
}

#[test]
fn test_import_then_list_then_share() {
    let dir = tempdir().expect("tempdir");

    // Token produced by the same codec the binary uses.
    let payload = serde_json::json!({"text": "drie\nregels\nhier", "extraHopeloosheid": false});
    let token = absurda::share::encode(&payload).expect("encode failed");

    absurda(&dir)
        .args(["import", "haiku", &token])
        .assert()
        .success()
        .stdout(predicate::str::contains("Geïmporteerd"));

    let output = absurda(&dir)
        .args(["list", "haiku", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let items: serde_json::Value = serde_json::from_slice(&output).expect("invalid JSON");
    let id = items[0]["id"].as_str().expect("missing id").to_string();

    absurda(&dir)
        .args(["share", "haiku", &id[..8]])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());

    absurda(&dir)
        .args(["clear", "haiku"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gewist"));
}
