//! End-to-end resolution against a mock GitHub API

use super::common::{
    container_for, mount_annotated_tag, mount_lightweight_tag, mount_release_pages, release_json,
};
use relver::core::RelverError;
use relver::github::Repository;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const REPO: &str = "neovim/neovim";
const ASSETS: &[&str] = &["nvim-linux-x86_64.tar.gz", "nvim-win64.zip"];
const COMMIT: &str = "5ff2e4a1d6c3b0e9f8a7c6b5d4e3f2a1b0c9d8e7";

fn repo() -> Repository {
    REPO.parse().unwrap()
}

async fn pages_requested(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|r| r.url.path() == "/repos/neovim/neovim/releases")
        .filter_map(|r| {
            r.url
                .query_pairs()
                .find(|(k, _)| k == "page")
                .map(|(_, v)| v.into_owned())
        })
        .collect()
}

#[tokio::test]
async fn test_constraint_walks_pages_until_boundary() {
    let server = MockServer::start().await;
    let uri = server.uri();
    let pages = vec![
        vec![
            release_json(&uri, REPO, "nightly", ASSETS),
            release_json(&uri, REPO, "stable", ASSETS),
        ],
        vec![
            release_json(&uri, REPO, "v0.10.1", ASSETS),
            release_json(&uri, REPO, "v0.10.0", ASSETS),
        ],
        vec![
            release_json(&uri, REPO, "v0.9.5", ASSETS),
            release_json(&uri, REPO, "v0.9.4", ASSETS),
        ],
        vec![release_json(&uri, REPO, "v0.9.0", ASSETS)],
    ];
    mount_release_pages(&server, REPO, 2, &pages).await;

    let temp = TempDir::new().unwrap();
    let container = container_for(&server, temp.path(), 2);
    let mut resolver = container.resolver(repo());

    let resolution = resolver.resolve("0.9.6").await.unwrap();

    assert_eq!(resolution.version.as_str(), "v0.10.0");
    assert_eq!(pages_requested(&server).await, vec!["1", "2", "3"]);
}

#[tokio::test]
async fn test_floating_tag_reconciles_to_numbered_release() {
    let server = MockServer::start().await;
    let uri = server.uri();

    Mock::given(method("GET"))
        .and(path("/repos/neovim/neovim/releases/tags/stable"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(release_json(&uri, REPO, "stable", ASSETS)),
        )
        .mount(&server)
        .await;
    mount_release_pages(
        &server,
        REPO,
        30,
        &[vec![
            release_json(&uri, REPO, "nightly", ASSETS),
            release_json(&uri, REPO, "stable", ASSETS),
            release_json(&uri, REPO, "v0.10.1", ASSETS),
        ]],
    )
    .await;
    mount_annotated_tag(&server, REPO, "stable", "a1a1a1a1", COMMIT).await;
    mount_lightweight_tag(&server, REPO, "v0.10.1", COMMIT).await;

    let temp = TempDir::new().unwrap();
    let container = container_for(&server, temp.path(), 30);
    let mut resolver = container.resolver(repo());

    let resolution = resolver.resolve("stable").await.unwrap();

    assert_eq!(resolution.version.as_str(), "v0.10.1");
    assert_eq!(resolution.release.tag_name, "stable");
    // The asset lookup key is the reconciled version
    assert!(resolver.cache().contains(&resolution.version));
}

#[tokio::test]
async fn test_latest_release() {
    let server = MockServer::start().await;
    let uri = server.uri();

    Mock::given(method("GET"))
        .and(path("/repos/neovim/neovim/releases/latest"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(release_json(&uri, REPO, "v0.10.1", ASSETS)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let container = container_for(&server, temp.path(), 30);
    let mut resolver = container.resolver(repo());

    let resolution = resolver.resolve("latest").await.unwrap();
    assert_eq!(resolution.version.as_str(), "v0.10.1");
}

#[tokio::test]
async fn test_unknown_tag_is_release_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/neovim/neovim/releases/tags/v0.1"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "message": "Not Found"
        })))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let container = container_for(&server, temp.path(), 30);
    let mut resolver = container.resolver(repo());

    let err = resolver.resolve("v0.1").await.unwrap_err();

    assert!(matches!(err, RelverError::ReleaseNotFound(_)));
    assert!(resolver.cache().is_empty());
}
