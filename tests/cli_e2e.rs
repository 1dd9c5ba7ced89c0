//! End-to-end tests for the eml-export binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn eml_export_cmd() -> Command {
    Command::cargo_bin("eml-export").expect("binary should build")
}

#[test]
fn test_cli_without_args_shows_usage() {
    eml_export_cmd()
        .env_remove("ESN_BASE_URL")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_without_base_url_fails_with_hint() {
    eml_export_cmd()
        .env_remove("ESN_BASE_URL")
        .args(["domainId", "repo", "key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ESN_BASE_URL"));
}

#[test]
fn test_cli_help_mentions_output_dir() {
    eml_export_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--output-dir"));
}

#[tokio::test]
async fn test_cli_downloads_and_saves_eml() {
    let mock_server = MockServer::start().await;
    let temp_dir = TempDir::new().expect("failed to create temp dir");

    Mock::given(method("GET"))
        .and(path(
            "/james/domains/domainId/mailRepositories/repo/mails/key-1/download",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"Subject: hi\r\n\r\nbody"))
        .mount(&mock_server)
        .await;

    let base_url = mock_server.uri();
    let output_dir = temp_dir.path().to_path_buf();

    // assert_cmd is blocking; keep it off the test runtime.
    let assert = tokio::task::spawn_blocking(move || {
        eml_export_cmd()
            .args(["domainId", "repo", "key-1"])
            .arg("--base-url")
            .arg(&base_url)
            .arg("--output-dir")
            .arg(&output_dir)
            .assert()
    })
    .await
    .expect("spawn_blocking should not panic");

    assert.success();
    let written =
        std::fs::read(temp_dir.path().join("key-1.eml")).expect("saved eml should exist");
    assert_eq!(written, b"Subject: hi\r\n\r\nbody");
}

#[tokio::test]
async fn test_cli_reports_backend_failure() {
    let mock_server = MockServer::start().await;
    let temp_dir = TempDir::new().expect("failed to create temp dir");

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let base_url = mock_server.uri();
    let output_dir = temp_dir.path().to_path_buf();

    let assert = tokio::task::spawn_blocking(move || {
        eml_export_cmd()
            .args(["domainId", "repo", "missing"])
            .arg("--base-url")
            .arg(&base_url)
            .arg("--output-dir")
            .arg(&output_dir)
            .assert()
    })
    .await
    .expect("spawn_blocking should not panic");

    assert
        .failure()
        .stderr(predicate::str::contains("HTTP 404"));
}
