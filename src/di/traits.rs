//! Trait definitions for dependency injection

use crate::core::RelverResult;
use crate::github::types::{GitObject, Release, ReleasePage, Repository};
use async_trait::async_trait;
use std::path::PathBuf;

/// Trait for configuration access
///
/// Provides read-only access to application configuration.
pub trait ConfigProvider: Send + Sync {
    /// GitHub REST API base URL, without a trailing slash
    fn github_api_url(&self) -> &str;

    /// Page size used when listing releases
    fn per_page(&self) -> u32;

    /// Directory tools are installed into
    fn install_dir(&self) -> RelverResult<PathBuf>;

    /// Directory release assets are downloaded into
    fn download_dir(&self) -> RelverResult<PathBuf>;
}

/// Source of the GitHub token
///
/// The token is opaque: it is handed to the catalog client unchanged and
/// never inspected or validated.
pub trait CredentialProvider: Send + Sync {
    fn token(&self) -> Option<String>;
}

/// Remote, paginated release catalog
///
/// Every call is one request; nothing is retried. Pages are returned newest
/// first and may contain releases with no assets.
#[async_trait]
pub trait ReleaseCatalog: Send + Sync {
    /// The release the catalog designates as latest
    async fn latest_release(&self, repo: &Repository) -> RelverResult<Release>;

    /// The release published for `tag`; `ReleaseNotFound` if there is none
    async fn release_by_tag(&self, repo: &Repository, tag: &str) -> RelverResult<Release>;

    /// One page of releases (pages start at 1)
    async fn list_releases_page(&self, repo: &Repository, page: u32) -> RelverResult<ReleasePage>;

    /// The object `refs/tags/{tag}` points at (a commit or an annotated tag)
    async fn tag_ref(&self, repo: &Repository, tag: &str) -> RelverResult<GitObject>;

    /// The target of the annotated tag object `sha`
    async fn tag_object(&self, repo: &Repository, sha: &str) -> RelverResult<GitObject>;
}

/// Downloads a URL to a local file
#[async_trait]
pub trait ArtifactFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> RelverResult<PathBuf>;
}
