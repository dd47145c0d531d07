use super::reconciler::reconcile;
use super::request::VersionRequest;
use crate::core::version::normalize;
use crate::core::{RelverError, RelverResult};
use crate::di::{ArtifactFetcher, ReleaseCatalog};
use crate::github::pager::ReleasePager;
use crate::github::types::{Release, Repository};
use semver::Version;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// The stable handle a resolution produces
///
/// Always one of: a semver release tag, a tag the caller asked for, or a raw
/// 40 character commit SHA when a floating tag has no numbered alias.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedVersion(String);

impl ResolvedVersion {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResolvedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Releases selected by one resolver, keyed by the version handed out
///
/// Only ever appended to by [`ReleaseResolver::resolve`]; read by the asset
/// download that follows.
#[derive(Debug, Clone, Default)]
pub struct ResolutionCache {
    entries: HashMap<ResolvedVersion, Release>,
}

impl ResolutionCache {
    pub fn get(&self, version: &ResolvedVersion) -> Option<&Release> {
        self.entries.get(version)
    }

    pub fn contains(&self, version: &ResolvedVersion) -> bool {
        self.entries.contains_key(version)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, version: ResolvedVersion, release: Release) {
        self.entries.insert(version, release);
    }
}

/// Outcome of one resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub version: ResolvedVersion,
    pub release: Release,
}

/// Resolves version requests for one repository
///
/// Owns the [`ResolutionCache`], the only state carried from
/// [`resolve`](Self::resolve) to [`download_asset`](Self::download_asset).
pub struct ReleaseResolver {
    repository: Repository,
    pub(super) catalog: Arc<dyn ReleaseCatalog>,
    pub(super) fetcher: Arc<dyn ArtifactFetcher>,
    pub(super) cache: ResolutionCache,
}

impl ReleaseResolver {
    pub fn new(
        repository: Repository,
        catalog: Arc<dyn ReleaseCatalog>,
        fetcher: Arc<dyn ArtifactFetcher>,
    ) -> Self {
        Self {
            repository,
            catalog,
            fetcher,
            cache: ResolutionCache::default(),
        }
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    pub fn cache(&self) -> &ResolutionCache {
        &self.cache
    }

    /// Resolve a request string to one release and its stable version
    ///
    /// # Errors
    ///
    /// `ReleaseNotFound` when nothing matches; catalog failures are returned
    /// unchanged.
    pub async fn resolve(&mut self, request: &str) -> RelverResult<Resolution> {
        let request = VersionRequest::parse(request);
        info!(repository = %self.repository, %request, "Resolving version");

        let release = match &request {
            VersionRequest::Head => self.find_head().await?,
            VersionRequest::Latest => self.catalog.latest_release(&self.repository).await?,
            VersionRequest::AtLeast(version) => self.find_closest_at_least(version).await?,
            VersionRequest::Tag(tag) => self.catalog.release_by_tag(&self.repository, tag).await?,
        };

        let version = reconcile(self.catalog.as_ref(), &self.repository, &release).await?;
        info!(%version, tag = %release.tag_name, "Resolved release");

        self.cache.insert(version.clone(), release.clone());
        Ok(Resolution { version, release })
    }

    /// Newest release that has at least one asset
    async fn find_head(&self) -> RelverResult<Release> {
        let mut pager = ReleasePager::new(self.catalog.as_ref(), &self.repository);

        while let Some(page) = pager.next_page().await? {
            if let Some(release) = page.into_iter().find(Release::has_assets) {
                return Ok(release);
            }
        }

        Err(RelverError::ReleaseNotFound(format!(
            "{} has no release with assets",
            self.repository
        )))
    }

    /// Oldest release whose version is still `>= requested`
    ///
    /// Walks releases newest first. Every release at or above the requested
    /// version replaces the current candidate; the first one below it ends
    /// the run, and no later page can contain a better match.
    async fn find_closest_at_least(&self, requested: &Version) -> RelverResult<Release> {
        let mut pager = ReleasePager::new(self.catalog.as_ref(), &self.repository);
        let mut candidate: Option<Release> = None;

        'pages: while let Some(page) = pager.next_page().await? {
            for release in page {
                if !release.has_assets() {
                    debug!(tag = %release.tag_name, "Skipping release without assets");
                    continue;
                }
                let Some(version) = normalize(&release.tag_name) else {
                    debug!(tag = %release.tag_name, "Skipping non-semver tag");
                    continue;
                };
                if version < *requested {
                    break 'pages;
                }
                candidate = Some(release);
            }
        }

        candidate.ok_or_else(|| {
            RelverError::ReleaseNotFound(format!(
                "{} has no release >= {}",
                self.repository, requested
            ))
        })
    }
}
