//! GitHub API client implementation

use crate::core::{RelverError, RelverResult};
use crate::di::traits::{ConfigProvider, ReleaseCatalog};
use crate::github::types::{GitObject, ObjectEnvelope, Release, ReleasePage, Repository};
use async_trait::async_trait;
use reqwest::{header, Client as HttpClient, StatusCode};
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tokio::sync::Mutex;
use tracing::debug;

/// GitHub API client
///
/// Built once per process and shared; holds the authenticated HTTP client.
pub struct GitHubClient {
    http_client: HttpClient,
    api_url: String,
    per_page: u32,
    authenticated: bool,
    rate_limiter: Arc<RateLimiter>,
}

/// Rate limit state reported by the GitHub API
struct RateLimiter {
    remaining: Mutex<u64>,
    reset_time: Mutex<SystemTime>,
}

impl GitHubClient {
    /// Create a new GitHub client
    ///
    /// The token is passed through opaquely as a bearer credential.
    pub fn new(config: &dyn ConfigProvider, token: Option<String>) -> RelverResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(concat!("relver/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );

        if let Some(ref token) = token {
            let mut value = header::HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| RelverError::Credential(format!("Invalid GitHub token: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
        }

        let http_client = HttpClient::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| RelverError::Config(format!("Failed to create HTTP client: {}", e)))?;

        let authenticated = token.is_some();
        Ok(Self {
            http_client,
            api_url: config.github_api_url().trim_end_matches('/').to_string(),
            per_page: config.per_page(),
            authenticated,
            rate_limiter: Arc::new(RateLimiter {
                remaining: Mutex::new(if authenticated { 5000 } else { 60 }),
                reset_time: Mutex::new(SystemTime::now() + Duration::from_secs(3600)),
            }),
        })
    }

    fn repo_url(&self, repo: &Repository) -> String {
        format!("{}/repos/{}/{}", self.api_url, repo.owner, repo.name)
    }

    /// Get the release GitHub designates as latest
    pub async fn get_latest_release(&self, repo: &Repository) -> RelverResult<Release> {
        let url = format!("{}/releases/latest", self.repo_url(repo));
        self.api_get(&url).await.map_err(|e| match e {
            RelverError::GitHub { status: 404, .. } => {
                RelverError::ReleaseNotFound(format!("{} has no latest release", repo))
            }
            other => other,
        })
    }

    /// Get the release published for a tag
    pub async fn get_release_by_tag(&self, repo: &Repository, tag: &str) -> RelverResult<Release> {
        let url = format!(
            "{}/releases/tags/{}",
            self.repo_url(repo),
            urlencoding::encode(tag)
        );
        self.api_get(&url).await.map_err(|e| match e {
            RelverError::GitHub { status: 404, .. } => {
                RelverError::ReleaseNotFound(format!("{} has no release tagged '{}'", repo, tag))
            }
            other => other,
        })
    }

    /// Get one page of releases, newest first
    pub async fn get_releases_page(&self, repo: &Repository, page: u32) -> RelverResult<ReleasePage> {
        let url = format!(
            "{}/releases?per_page={}&page={}",
            self.repo_url(repo),
            self.per_page,
            page
        );

        let response = self.api_request(&url).await?;
        let has_next = has_next_link(response.headers());
        let releases: Vec<Release> = response.json().await?;

        debug!(%repo, page, count = releases.len(), has_next, "Fetched release page");
        Ok(ReleasePage { releases, has_next })
    }

    /// Resolve `refs/tags/{tag}` to the object it points at
    pub async fn get_tag_ref(&self, repo: &Repository, tag: &str) -> RelverResult<GitObject> {
        let url = format!(
            "{}/git/ref/tags/{}",
            self.repo_url(repo),
            urlencoding::encode(tag)
        );
        let envelope: ObjectEnvelope = self.api_get(&url).await?;
        Ok(envelope.object)
    }

    /// Read an annotated tag object and return its target
    pub async fn get_tag_object(&self, repo: &Repository, sha: &str) -> RelverResult<GitObject> {
        let url = format!("{}/git/tags/{}", self.repo_url(repo), sha);
        let envelope: ObjectEnvelope = self.api_get(&url).await?;
        Ok(envelope.object)
    }

    /// Make an API request and handle rate limiting
    async fn api_request(&self, url: &str) -> RelverResult<reqwest::Response> {
        self.check_rate_limit().await?;

        debug!(%url, "GitHub API request");
        let response = self.http_client.get(url).send().await?;

        self.update_rate_limit(&response).await;

        let status = response.status();
        if !status.is_success() {
            if is_rate_limited(status, response.headers()) {
                return Err(RelverError::RateLimited(self.rate_limit_message().await));
            }
            return Err(RelverError::GitHub {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response)
    }

    /// Make an API GET request and parse JSON response
    async fn api_get<T: serde::de::DeserializeOwned>(&self, url: &str) -> RelverResult<T> {
        let response = self.api_request(url).await?;
        Ok(response.json().await?)
    }

    /// Check if we're within rate limits
    async fn check_rate_limit(&self) -> RelverResult<()> {
        let remaining = *self.rate_limiter.remaining.lock().await;
        let reset_time = *self.rate_limiter.reset_time.lock().await;

        if remaining == 0 && SystemTime::now() < reset_time {
            return Err(RelverError::RateLimited(self.rate_limit_message().await));
        }

        Ok(())
    }

    async fn rate_limit_message(&self) -> String {
        let reset_time = *self.rate_limiter.reset_time.lock().await;
        let wait = reset_time
            .duration_since(SystemTime::now())
            .unwrap_or(Duration::ZERO);
        format!(
            "reset in {} seconds{}",
            wait.as_secs(),
            if self.authenticated {
                ""
            } else {
                " (unauthenticated requests are limited to 60/hour)"
            }
        )
    }

    /// Update rate limit from response headers
    async fn update_rate_limit(&self, response: &reqwest::Response) {
        if let Some(remaining) = header_u64(response.headers(), "x-ratelimit-remaining") {
            *self.rate_limiter.remaining.lock().await = remaining;
        }

        if let Some(reset) = header_u64(response.headers(), "x-ratelimit-reset") {
            *self.rate_limiter.reset_time.lock().await =
                SystemTime::UNIX_EPOCH + Duration::from_secs(reset);
        }
    }
}

fn header_u64(headers: &header::HeaderMap, name: &str) -> Option<u64> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
}

fn is_rate_limited(status: StatusCode, headers: &header::HeaderMap) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS
        || (status == StatusCode::FORBIDDEN
            && header_u64(headers, "x-ratelimit-remaining") == Some(0))
}

/// Whether a `Link` header advertises a `rel="next"` page
fn has_next_link(headers: &header::HeaderMap) -> bool {
    headers
        .get(header::LINK)
        .and_then(|v| v.to_str().ok())
        .map(|link| link.split(',').any(|part| part.contains("rel=\"next\"")))
        .unwrap_or(false)
}

#[async_trait]
impl ReleaseCatalog for GitHubClient {
    async fn latest_release(&self, repo: &Repository) -> RelverResult<Release> {
        self.get_latest_release(repo).await
    }

    async fn release_by_tag(&self, repo: &Repository, tag: &str) -> RelverResult<Release> {
        self.get_release_by_tag(repo, tag).await
    }

    async fn list_releases_page(&self, repo: &Repository, page: u32) -> RelverResult<ReleasePage> {
        self.get_releases_page(repo, page).await
    }

    async fn tag_ref(&self, repo: &Repository, tag: &str) -> RelverResult<GitObject> {
        self.get_tag_ref(repo, tag).await
    }

    async fn tag_object(&self, repo: &Repository, sha: &str) -> RelverResult<GitObject> {
        self.get_tag_object(repo, sha).await
    }
}
