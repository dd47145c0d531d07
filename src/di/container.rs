//! Service container for dependency injection

use super::traits::{ArtifactFetcher, ConfigProvider, CredentialProvider, ReleaseCatalog};
use crate::cache::{DownloadCache, HttpArtifactFetcher};
use crate::config::Config;
use crate::core::RelverResult;
use crate::github::{GitHubClient, GitHubTokenProvider, Repository};
use crate::resolver::ReleaseResolver;
use std::sync::Arc;
use tracing::warn;

/// Service container for dependency injection
///
/// Holds the configuration, the release catalog and the artifact fetcher as
/// trait objects. The GitHub client is constructed exactly once here and
/// shared by every resolver the container hands out.
///
/// # Example (Testing)
///
/// ```
/// use relver::di::{ServiceContainer, mocks::*};
/// use relver::github::Repository;
/// use std::sync::Arc;
///
/// let container = ServiceContainer::with_providers(
///     Arc::new(MockConfigProvider::default()),
///     Arc::new(MockReleaseCatalog::new(30)),
///     Arc::new(MockArtifactFetcher::new()),
/// );
/// let resolver = container.resolver(Repository::new("neovim", "neovim"));
/// assert!(resolver.cache().is_empty());
/// ```
#[derive(Clone)]
pub struct ServiceContainer {
    pub config: Arc<dyn ConfigProvider>,
    pub catalog: Arc<dyn ReleaseCatalog>,
    pub fetcher: Arc<dyn ArtifactFetcher>,
}

impl ServiceContainer {
    /// Create a new service container with production implementations
    ///
    /// - Loads config from disk (applying environment overrides)
    /// - Looks up the GitHub token (environment, then keychain)
    /// - Builds the GitHub client and the download cache
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be loaded, the token is not a
    /// valid header value, or the download directory cannot be created.
    pub fn new() -> RelverResult<Self> {
        Self::from_config(Config::load()?, &GitHubTokenProvider)
    }

    /// Create a container from an explicit config and credential source
    pub fn from_config(config: Config, credentials: &dyn CredentialProvider) -> RelverResult<Self> {
        let token = credentials.token();
        if token.is_none() {
            warn!("No GitHub token found; API requests are limited to 60/hour");
        }

        let catalog = GitHubClient::new(&config, token)?;
        let cache = DownloadCache::new(config.get_download_dir()?)?;

        Ok(Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            fetcher: Arc::new(HttpArtifactFetcher::new(cache)?),
        })
    }

    /// Create a service container with custom provider implementations
    ///
    /// This is primarily useful for testing, where you can inject mock
    /// implementations of each service.
    pub fn with_providers(
        config: Arc<dyn ConfigProvider>,
        catalog: Arc<dyn ReleaseCatalog>,
        fetcher: Arc<dyn ArtifactFetcher>,
    ) -> Self {
        Self {
            config,
            catalog,
            fetcher,
        }
    }

    /// Get the configuration provider
    pub fn config(&self) -> &dyn ConfigProvider {
        self.config.as_ref()
    }

    /// Create a resolver for one repository
    ///
    /// Each resolver owns its own resolution cache.
    pub fn resolver(&self, repository: Repository) -> ReleaseResolver {
        ReleaseResolver::new(
            repository,
            Arc::clone(&self.catalog),
            Arc::clone(&self.fetcher),
        )
    }
}
