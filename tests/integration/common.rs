//! Common utilities for integration tests

use relver::config::Config;
use relver::di::mocks::MockCredentialProvider;
use relver::di::ServiceContainer;
use serde_json::{json, Value};
use std::path::Path;
use std::process::Command;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn relver_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_relver"))
}

/// `relver` with config, cache and data directories inside `home`
/// and the API pointed at `api_url`
pub fn isolated_command(home: &Path, api_url: &str) -> Command {
    let mut cmd = relver_command();
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_CACHE_HOME", home.join("cache"))
        .env("XDG_DATA_HOME", home.join("data"))
        .env("RELVER_GITHUB_API_URL", api_url)
        .env("RELVER_INSTALL_DIR", home.join("installs"))
        .env("RELVER_DOWNLOAD_DIR", home.join("downloads"))
        .env("GITHUB_TOKEN", "test-token")
        .env_remove("GH_TOKEN")
        .env_remove("RUST_LOG");
    cmd
}

/// Container wired to a mock API, with install and download dirs in `root`
pub fn container_for(server: &MockServer, root: &Path, per_page: u32) -> ServiceContainer {
    let config = Config {
        github_api_url: server.uri(),
        per_page,
        install_dir: Some(root.join("installs").to_string_lossy().into_owned()),
        download_dir: Some(root.join("downloads").to_string_lossy().into_owned()),
    };
    let credentials = MockCredentialProvider {
        token: Some("test-token".to_string()),
    };
    ServiceContainer::from_config(config, &credentials).unwrap()
}

/// Release JSON as returned by the GitHub API
pub fn release_json(server_uri: &str, repo: &str, tag: &str, assets: &[&str]) -> Value {
    let assets: Vec<Value> = assets
        .iter()
        .map(|name| {
            json!({
                "name": name,
                "browser_download_url": format!("{}/download/{}/{}/{}", server_uri, repo, tag, name),
                "size": 0
            })
        })
        .collect();
    json!({
        "tag_name": tag,
        "name": tag,
        "draft": false,
        "prerelease": false,
        "assets": assets,
        "published_at": "2024-05-16T12:00:00Z"
    })
}

/// Serve `pages` of `/repos/{repo}/releases`, linking each page to the next
pub async fn mount_release_pages(
    server: &MockServer,
    repo: &str,
    per_page: u32,
    pages: &[Vec<Value>],
) {
    for (index, releases) in pages.iter().enumerate() {
        let page = index + 1;
        let mut response = ResponseTemplate::new(200).set_body_json(releases);
        if page < pages.len() {
            let link = format!(
                "<{}/repos/{}/releases?per_page={}&page={}>; rel=\"next\"",
                server.uri(),
                repo,
                per_page,
                page + 1
            );
            response = response.insert_header("link", link.as_str());
        }
        Mock::given(method("GET"))
            .and(path(format!("/repos/{}/releases", repo)))
            .and(query_param("page", page.to_string()))
            .respond_with(response)
            .mount(server)
            .await;
    }
}

/// Serve `/repos/{repo}/git/ref/tags/{tag}` as a lightweight tag on `commit`
pub async fn mount_lightweight_tag(server: &MockServer, repo: &str, tag: &str, commit: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/repos/{}/git/ref/tags/{}", repo, tag)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ref": format!("refs/tags/{}", tag),
            "object": {"type": "commit", "sha": commit}
        })))
        .mount(server)
        .await;
}

/// Serve an annotated tag: the ref points at `tag_sha`, which targets `commit`
pub async fn mount_annotated_tag(
    server: &MockServer,
    repo: &str,
    tag: &str,
    tag_sha: &str,
    commit: &str,
) {
    Mock::given(method("GET"))
        .and(path(format!("/repos/{}/git/ref/tags/{}", repo, tag)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ref": format!("refs/tags/{}", tag),
            "object": {"type": "tag", "sha": tag_sha}
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/repos/{}/git/tags/{}", repo, tag_sha)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tag": tag,
            "sha": tag_sha,
            "object": {"type": "commit", "sha": commit}
        })))
        .mount(server)
        .await;
}
