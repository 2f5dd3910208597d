//
//  antarctica-cli
//  tests/cli_tests.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn antarctica(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("antarctica").unwrap();
    cmd.env("ANTARCTICA_CONFIG_DIR", config_dir.path())
        .env_remove("ANTARCTICA_SERVER")
        .env_remove("ANTARCTICA_DEBUG");
    cmd
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    antarctica(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("file"))
        .stdout(predicate::str::contains("repo"));
}

#[test]
fn test_version() {
    let dir = TempDir::new().unwrap();
    antarctica(&dir)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("antarctica version"));
}

#[test]
fn test_config_path_honours_override() {
    let dir = TempDir::new().unwrap();
    antarctica(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(dir.path().to_string_lossy().as_ref()))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_set_then_get() {
    let dir = TempDir::new().unwrap();
    antarctica(&dir)
        .args(["config", "set", "server.url", "https://example.org/"])
        .assert()
        .success();

    antarctica(&dir)
        .args(["config", "get", "server.url"])
        .assert()
        .success()
        .stdout("https://example.org\n");

    assert!(dir.path().join("config.toml").exists());
}

#[test]
fn test_config_rejects_unknown_key() {
    let dir = TempDir::new().unwrap();
    antarctica(&dir)
        .args(["config", "set", "editor", "vim"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_file_list_requires_login() {
    let dir = TempDir::new().unwrap();
    antarctica(&dir)
        .args(["--local", "file", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));
}

#[test]
fn test_completion_for_bash() {
    let dir = TempDir::new().unwrap();
    antarctica(&dir)
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("antarctica"));
}

#[test]
fn test_bad_arguments_exit_with_usage_code() {
    let dir = TempDir::new().unwrap();
    antarctica(&dir)
        .args(["repo", "get", "not-a-number"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value"));
}
