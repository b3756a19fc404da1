//! Integration tests for the nw CLI commands.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn nw() -> Command {
    Command::cargo_bin("nw").unwrap()
}

fn nw_in(dir: &TempDir) -> Command {
    let mut cmd = nw();
    cmd.args(["-d", dir.path().to_str().unwrap()]);
    cmd
}

// ---------------------------------------------------------------------------
// settings
// ---------------------------------------------------------------------------

#[test]
fn settings_show_defaults() {
    let dir = TempDir::new().unwrap();
    nw_in(&dir)
        .args(["settings", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Active dice: 3")
                .and(predicate::str::contains("Die 1"))
                .and(predicate::str::contains("Die 6")),
        );
}

#[test]
fn settings_set_persists_blob() {
    let dir = TempDir::new().unwrap();
    nw_in(&dir)
        .args(["settings", "set", "--count", "4"])
        .args(["--name", "1=", "--name", "2=Two", "--name", "4=Four", "--name", "6=Six"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Active dice: 4"));

    let blob = fs::read_to_string(dir.path().join("diceAppSettings.json")).unwrap();
    assert_eq!(
        blob,
        r#"{"numDice":4,"diceNames":["Die 1","Two","Die 3","Four","Die 5","Six"]}"#
    );

    nw_in(&dir)
        .args(["settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Four").and(predicate::str::contains("Active dice: 4")));
}

#[test]
fn settings_set_rejects_bad_count() {
    let dir = TempDir::new().unwrap();
    nw_in(&dir)
        .args(["settings", "set", "--count", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid die count"));
    assert!(!dir.path().join("diceAppSettings.json").exists());
}

#[test]
fn settings_set_rejects_bad_name() {
    let dir = TempDir::new().unwrap();
    nw_in(&dir)
        .args(["settings", "set", "--name", "Two"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected POS=TEXT"));
}

#[test]
fn corrupt_settings_are_repaired_on_load() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("diceAppSettings.json"),
        r#"{"numDice": "5", "diceNames": ["only", "two"]}"#,
    )
    .unwrap();
    nw_in(&dir)
        .args(["settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Active dice: 5").and(predicate::str::contains("Die 2")));
}

#[test]
fn settings_reset_forgets_file() {
    let dir = TempDir::new().unwrap();
    nw_in(&dir)
        .args(["settings", "set", "--count", "1"])
        .assert()
        .success();
    nw_in(&dir).args(["settings", "reset"]).assert().success();
    assert!(!dir.path().join("diceAppSettings.json").exists());
    nw_in(&dir)
        .args(["settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Active dice: 3"));
}

// ---------------------------------------------------------------------------
// roll
// ---------------------------------------------------------------------------

#[test]
fn roll_uses_face_names() {
    let dir = TempDir::new().unwrap();
    let mut set = nw_in(&dir);
    set.args(["settings", "set", "--count", "2"]);
    for pos in 1..=6 {
        set.args(["--name", &format!("{pos}=Same")]);
    }
    set.assert().success();

    nw_in(&dir)
        .args(["roll", "--seed", "42"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Rolled: Same, Same\n")
                .and(predicate::str::contains("Die 3:").not()),
        );
}

#[test]
fn roll_is_reproducible_with_seed() {
    let dir = TempDir::new().unwrap();
    let first = nw_in(&dir).args(["roll", "-s", "7"]).output().unwrap();
    let second = nw_in(&dir).args(["roll", "-s", "7"]).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_session() {
    let dir = TempDir::new().unwrap();
    nw_in(&dir)
        .args(["play", "--seed", "1", "--delay-ms", "0"])
        .write_stdin("count 1\nname 1 A\nname 2 A\nname 3 A\nname 4 A\nname 5 A\nname 6 A\nroll\nhistory\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Active dice: 1")
                .and(predicate::str::contains("Rolled: A"))
                .and(predicate::str::contains(" - A"))
                .and(predicate::str::contains("Goodbye!")),
        );

    let blob = fs::read_to_string(dir.path().join("diceAppSettings.json")).unwrap();
    assert!(blob.contains(r#""numDice":1"#));
}

#[test]
fn play_reports_unknown_command() {
    let dir = TempDir::new().unwrap();
    nw_in(&dir)
        .args(["play", "--delay-ms", "0"])
        .write_stdin("dance\nclear\nhistory\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("unknown command: dance")
                .and(predicate::str::contains("History cleared."))
                .and(predicate::str::contains("No rolls yet.")),
        );
}

// ---------------------------------------------------------------------------
// offline
// ---------------------------------------------------------------------------

fn asset_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    for file in ["index.html", "style.css", "app.js", "manifest.json"] {
        fs::write(dir.path().join(file), format!("/* {file} */")).unwrap();
    }
    fs::create_dir(dir.path().join("icons")).unwrap();
    for icon in ["icon-192x192.png", "icon-512x512.png"] {
        fs::write(dir.path().join("icons").join(icon), [0u8; 4]).unwrap();
    }
    fs::write(dir.path().join("extra.txt"), "extra").unwrap();
    dir
}

#[test]
fn offline_serves_cache_first() {
    let assets = asset_dir();
    nw()
        .args(["offline", "-a", assets.path().to_str().unwrap()])
        .args(["/app.js", "/extra.txt"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("7 assets into 'dice-roller-cache-v1'")
                .and(predicate::str::contains("/app.js: 12 bytes from cache"))
                .and(predicate::str::contains("/extra.txt: 5 bytes from network")),
        );
}

#[test]
fn offline_install_fails_without_manifest_assets() {
    let assets = TempDir::new().unwrap();
    nw()
        .args(["offline", "-a", assets.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("installation failed"));
}

#[test]
fn offline_reports_missing_path() {
    let assets = asset_dir();
    nw()
        .args(["offline", "-a", assets.path().to_str().unwrap(), "/missing.css"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("not found: /missing.css"))
        .stderr(predicate::str::contains("1 of 1 paths"));
}
