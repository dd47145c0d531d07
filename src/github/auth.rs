use crate::core::credentials::{CredentialStore, GITHUB_TOKEN_KEY};
use crate::di::CredentialProvider;
use tracing::debug;

/// Looks up a GitHub token from `GITHUB_TOKEN`, then `GH_TOKEN`, then the
/// OS keychain entry written by `relver login`.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitHubTokenProvider;

impl CredentialProvider for GitHubTokenProvider {
    fn token(&self) -> Option<String> {
        for var in ["GITHUB_TOKEN", "GH_TOKEN"] {
            if let Ok(token) = std::env::var(var) {
                if !token.trim().is_empty() {
                    debug!(source = var, "Using GitHub token from environment");
                    return Some(token.trim().to_string());
                }
            }
        }

        match CredentialStore::retrieve(GITHUB_TOKEN_KEY) {
            Ok(token) => {
                debug!("Using GitHub token from keychain");
                Some(token)
            }
            Err(_) => None,
        }
    }
}
