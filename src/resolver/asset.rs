use super::version_resolver::{ReleaseResolver, ResolvedVersion};
use crate::core::{RelverError, RelverResult};
use crate::github::types::ReleaseAsset;
use regex::Regex;
use std::path::PathBuf;
use tracing::info;

impl ReleaseResolver {
    /// First asset of a previously resolved release whose name matches
    ///
    /// # Errors
    ///
    /// `UnknownVersion` if `version` was not returned by this resolver,
    /// `AssetNotFound` (listing every asset name) if nothing matches.
    pub fn find_asset(
        &self,
        version: &ResolvedVersion,
        pattern: &Regex,
    ) -> RelverResult<&ReleaseAsset> {
        let release = self
            .cache
            .get(version)
            .ok_or_else(|| RelverError::UnknownVersion(version.to_string()))?;

        release
            .assets
            .iter()
            .find(|asset| pattern.is_match(&asset.name))
            .ok_or_else(|| RelverError::AssetNotFound {
                pattern: pattern.as_str().to_string(),
                available: release.asset_names(),
            })
    }

    /// Download the matching asset of a resolved release
    ///
    /// Returns whatever local path the artifact fetcher produced; fetch
    /// failures are returned unchanged.
    pub async fn download_asset(
        &self,
        version: &ResolvedVersion,
        pattern: &Regex,
    ) -> RelverResult<PathBuf> {
        let asset = self.find_asset(version, pattern)?;
        info!(%version, asset = %asset.name, "Selected asset");
        self.fetcher.fetch(&asset.browser_download_url).await
    }
}
