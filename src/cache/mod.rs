//! Download cache and HTTP artifact fetcher

use crate::core::path::ensure_dir;
use crate::core::{RelverError, RelverResult};
use crate::di::ArtifactFetcher;
use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client as HttpClient;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

/// Directory that downloaded release assets are written into
///
/// Each URL gets its own sub-directory so assets that share a file name
/// across releases (e.g. `nvim-linux-x86_64.tar.gz`) never collide. A file
/// is overwritten when its URL is downloaded again.
#[derive(Clone)]
pub struct DownloadCache {
    root: PathBuf,
}

impl DownloadCache {
    /// Create a new download cache rooted at `root`
    pub fn new(root: PathBuf) -> RelverResult<Self> {
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Local path for the asset at `url`
    pub fn artifact_path(&self, url: &str) -> PathBuf {
        self.root
            .join(Self::url_hash(url))
            .join(Self::file_name(url))
    }

    /// Last path segment of a URL, percent-decoded
    fn file_name(url: &str) -> String {
        let without_query = url.split(['?', '#']).next().unwrap_or(url);
        let segment = without_query
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|s| !s.is_empty())
            .unwrap_or("artifact");
        urlencoding::decode(segment)
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| segment.to_string())
    }

    /// Hash a URL for use as a directory name
    fn url_hash(url: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(url.as_bytes());
        let hash = hasher.finalize();
        hex::encode(&hash[..16])
    }
}

/// Downloads release assets over HTTP into a [`DownloadCache`]
pub struct HttpArtifactFetcher {
    http_client: HttpClient,
    cache: DownloadCache,
}

impl HttpArtifactFetcher {
    pub fn new(cache: DownloadCache) -> RelverResult<Self> {
        let http_client = HttpClient::builder()
            .user_agent(concat!("relver/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RelverError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { http_client, cache })
    }
}

#[async_trait]
impl ArtifactFetcher for HttpArtifactFetcher {
    async fn fetch(&self, url: &str) -> RelverResult<PathBuf> {
        let dest = self.cache.artifact_path(url);
        if let Some(parent) = dest.parent() {
            ensure_dir(parent)?;
        }

        info!(%url, "Downloading asset");
        let mut response = self.http_client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(RelverError::GitHub {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        let progress = match response.content_length() {
            Some(len) => {
                let bar = ProgressBar::new(len);
                bar.set_style(
                    ProgressStyle::default_bar()
                        .template("{msg} [{bar:30}] {bytes}/{total_bytes}")
                        .unwrap_or_else(|_| ProgressStyle::default_bar()),
                );
                bar
            }
            None => ProgressBar::new_spinner(),
        };
        progress.set_message(DownloadCache::file_name(url));

        let mut file = tokio::fs::File::create(&dest).await?;
        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk).await?;
            progress.inc(chunk.len() as u64);
        }
        file.flush().await?;
        progress.finish_and_clear();

        debug!(path = %dest.display(), "Download complete");
        Ok(dest)
    }
}
