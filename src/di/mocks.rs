//! Mock implementations of service traits for testing

use super::traits::{ArtifactFetcher, ConfigProvider, CredentialProvider, ReleaseCatalog};
use crate::core::{RelverError, RelverResult};
use crate::github::types::{GitObject, Release, ReleaseAsset, ReleasePage, Repository};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Build a release with one asset per name
///
/// Download URLs follow the GitHub layout
/// `https://github.com/owner/tool/releases/download/{tag}/{name}`.
pub fn mock_release(tag: &str, assets: &[&str]) -> Release {
    Release {
        tag_name: tag.to_string(),
        name: Some(tag.to_string()),
        draft: false,
        prerelease: false,
        assets: assets
            .iter()
            .map(|name| ReleaseAsset {
                name: name.to_string(),
                browser_download_url: format!(
                    "https://github.com/owner/tool/releases/download/{}/{}",
                    tag, name
                ),
                size: 0,
            })
            .collect(),
        published_at: None,
    }
}

/// Mock configuration provider for testing
///
/// # Example
///
/// ```
/// use relver::di::mocks::MockConfigProvider;
/// use relver::di::ConfigProvider;
///
/// let config = MockConfigProvider {
///     per_page: 5,
///     ..Default::default()
/// };
///
/// assert_eq!(config.per_page(), 5);
/// ```
#[derive(Clone)]
pub struct MockConfigProvider {
    pub api_url: String,
    pub per_page: u32,
    pub install_dir: PathBuf,
    pub download_dir: PathBuf,
}

impl Default for MockConfigProvider {
    fn default() -> Self {
        Self {
            api_url: "https://api.github.com".to_string(),
            per_page: 30,
            install_dir: PathBuf::from("/tmp/relver-test/installs"),
            download_dir: PathBuf::from("/tmp/relver-test/downloads"),
        }
    }
}

impl ConfigProvider for MockConfigProvider {
    fn github_api_url(&self) -> &str {
        &self.api_url
    }

    fn per_page(&self) -> u32 {
        self.per_page
    }

    fn install_dir(&self) -> RelverResult<PathBuf> {
        Ok(self.install_dir.clone())
    }

    fn download_dir(&self) -> RelverResult<PathBuf> {
        Ok(self.download_dir.clone())
    }
}

/// Mock credential provider returning a fixed token
#[derive(Clone, Default)]
pub struct MockCredentialProvider {
    pub token: Option<String>,
}

impl CredentialProvider for MockCredentialProvider {
    fn token(&self) -> Option<String> {
        self.token.clone()
    }
}

/// In-memory release catalog
///
/// Releases are served newest first in the order they were added, split into
/// pages of `page_size`. Every page request is recorded so tests can assert
/// how far a scan went.
///
/// # Example
///
/// ```
/// use relver::di::mocks::{mock_release, MockReleaseCatalog};
///
/// let catalog = MockReleaseCatalog::new(2);
/// catalog.add_release(mock_release("v0.10.0", &["nvim-win64.zip"]));
/// catalog.add_lightweight_tag("v0.10.0", "aaaa");
/// ```
#[derive(Clone)]
pub struct MockReleaseCatalog {
    page_size: usize,
    releases: Arc<Mutex<Vec<Release>>>,
    latest: Arc<Mutex<Option<String>>>,
    refs: Arc<Mutex<HashMap<String, GitObject>>>,
    tag_objects: Arc<Mutex<HashMap<String, GitObject>>>,
    pages_requested: Arc<Mutex<Vec<u32>>>,
}

impl MockReleaseCatalog {
    /// Create an empty catalog serving `page_size` releases per page
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            releases: Arc::new(Mutex::new(Vec::new())),
            latest: Arc::new(Mutex::new(None)),
            refs: Arc::new(Mutex::new(HashMap::new())),
            tag_objects: Arc::new(Mutex::new(HashMap::new())),
            pages_requested: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Append a release (older than every release already added)
    pub fn add_release(&self, release: Release) {
        self.releases.lock().unwrap().push(release);
    }

    /// Choose which tag `latest_release` returns
    pub fn set_latest(&self, tag: &str) {
        *self.latest.lock().unwrap() = Some(tag.to_string());
    }

    /// Point `refs/tags/{tag}` directly at a commit
    pub fn add_lightweight_tag(&self, tag: &str, commit: &str) {
        self.refs
            .lock()
            .unwrap()
            .insert(tag.to_string(), GitObject::commit(commit));
    }

    /// Point `refs/tags/{tag}` at an annotated tag object targeting a commit
    pub fn add_annotated_tag(&self, tag: &str, tag_sha: &str, commit: &str) {
        self.refs
            .lock()
            .unwrap()
            .insert(tag.to_string(), GitObject::tag(tag_sha));
        self.tag_objects
            .lock()
            .unwrap()
            .insert(tag_sha.to_string(), GitObject::commit(commit));
    }

    /// Page numbers requested so far, in order
    pub fn pages_requested(&self) -> Vec<u32> {
        self.pages_requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReleaseCatalog for MockReleaseCatalog {
    async fn latest_release(&self, repo: &Repository) -> RelverResult<Release> {
        let releases = self.releases.lock().unwrap();
        let latest = self.latest.lock().unwrap().clone();
        let found = match latest {
            Some(tag) => releases.iter().find(|r| r.tag_name == tag),
            None => releases.first(),
        };
        found
            .cloned()
            .ok_or_else(|| RelverError::ReleaseNotFound(format!("{} has no latest release", repo)))
    }

    async fn release_by_tag(&self, repo: &Repository, tag: &str) -> RelverResult<Release> {
        self.releases
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.tag_name == tag)
            .cloned()
            .ok_or_else(|| {
                RelverError::ReleaseNotFound(format!("{} has no release tagged '{}'", repo, tag))
            })
    }

    async fn list_releases_page(&self, _repo: &Repository, page: u32) -> RelverResult<ReleasePage> {
        self.pages_requested.lock().unwrap().push(page);

        let releases = self.releases.lock().unwrap();
        let start = (page.saturating_sub(1) as usize) * self.page_size;
        let end = (start + self.page_size).min(releases.len());
        if start >= releases.len() {
            return Ok(ReleasePage::default());
        }

        Ok(ReleasePage {
            releases: releases[start..end].to_vec(),
            has_next: end < releases.len(),
        })
    }

    async fn tag_ref(&self, repo: &Repository, tag: &str) -> RelverResult<GitObject> {
        self.refs
            .lock()
            .unwrap()
            .get(tag)
            .cloned()
            .ok_or_else(|| RelverError::GitHub {
                status: 404,
                url: format!("mock://{}/git/ref/tags/{}", repo, tag),
            })
    }

    async fn tag_object(&self, repo: &Repository, sha: &str) -> RelverResult<GitObject> {
        self.tag_objects
            .lock()
            .unwrap()
            .get(sha)
            .cloned()
            .ok_or_else(|| RelverError::GitHub {
                status: 404,
                url: format!("mock://{}/git/tags/{}", repo, sha),
            })
    }
}

/// Mock artifact fetcher for testing
///
/// Records every URL and returns `<download dir>/<file name>` without
/// touching the network. The download dir defaults to
/// `/tmp/relver-test/downloads`; point it at a directory holding prepared
/// artifacts with [`with_download_dir`](Self::with_download_dir).
#[derive(Clone, Default)]
pub struct MockArtifactFetcher {
    fetched: Arc<Mutex<Vec<String>>>,
    download_dir: Option<PathBuf>,
}

impl MockArtifactFetcher {
    /// Create a new mock artifact fetcher
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve artifacts from `dir`
    pub fn with_download_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            fetched: Arc::default(),
            download_dir: Some(dir.into()),
        }
    }

    /// URLs fetched so far, in order
    pub fn fetched_urls(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArtifactFetcher for MockArtifactFetcher {
    async fn fetch(&self, url: &str) -> RelverResult<PathBuf> {
        self.fetched.lock().unwrap().push(url.to_string());
        let file_name = url.rsplit('/').next().unwrap_or("artifact");
        let dir = self
            .download_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("/tmp/relver-test/downloads"));
        Ok(dir.join(file_name))
    }
}
