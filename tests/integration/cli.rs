//! Tests for the `relver` binary

use super::common::{isolated_command, mount_release_pages, relver_command, release_json};
use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const REPO: &str = "neovim/neovim";
const ASSETS: &[&str] = &["nvim-linux-x86_64.tar.gz"];

#[test]
fn test_help_lists_commands() {
    relver_command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("install"))
        .stdout(predicate::str::contains("login"));
}

#[test]
fn test_unknown_tool_is_rejected() {
    relver_command()
        .args(["resolve", "latest", "--tool", "emacs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown tool 'emacs'"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_resolve_prints_version() {
    let server = MockServer::start().await;
    let uri = server.uri();
    mount_release_pages(
        &server,
        REPO,
        30,
        &[vec![
            release_json(&uri, REPO, "v0.10.1", ASSETS),
            release_json(&uri, REPO, "v0.10.0", ASSETS),
            release_json(&uri, REPO, "v0.9.5", ASSETS),
        ]],
    )
    .await;

    let home = TempDir::new().unwrap();
    isolated_command(home.path(), &uri)
        .args(["resolve", "0.10.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("v0.10.0"));

    // First run writes the default config
    assert!(home.path().join("config/relver/config.yaml").is_file());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_resolve_missing_tag_shows_help() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/neovim/neovim/releases/tags/nope"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    isolated_command(home.path(), &server.uri())
        .args(["resolve", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no release tagged 'nope'"))
        .stderr(predicate::str::contains("help:"));
}

#[test]
fn test_install_rejects_invalid_pattern() {
    let home = TempDir::new().unwrap();
    isolated_command(home.path(), "http://127.0.0.1:9")
        .args(["install", "latest", "--pattern", "nvim-("])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid asset pattern"));
}
