//! GitHub API type definitions

use crate::core::{RelverError, RelverResult};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// A GitHub repository, written `owner/name`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

impl Repository {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for Repository {
    type Err = RelverError;

    fn from_str(s: &str) -> RelverResult<Self> {
        match s.split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self::new(owner, name))
            }
            _ => Err(RelverError::Config(format!(
                "Invalid repository '{}'. Expected format: owner/name",
                s
            ))),
        }
    }
}

/// GitHub release information
///
/// Releases are listed newest first; that order is relied upon by the
/// resolver.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Release {
    pub tag_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub prerelease: bool,
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
    #[serde(default)]
    pub published_at: Option<String>,
}

impl Release {
    pub fn has_assets(&self) -> bool {
        !self.assets.is_empty()
    }

    pub fn asset_names(&self) -> Vec<String> {
        self.assets.iter().map(|a| a.name.clone()).collect()
    }
}

/// GitHub release asset
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReleaseAsset {
    pub name: String,
    pub browser_download_url: String,
    #[serde(default)]
    pub size: u64,
}

/// One page of the release list
#[derive(Debug, Clone, Default)]
pub struct ReleasePage {
    pub releases: Vec<Release>,
    /// Whether the API advertised a following page
    pub has_next: bool,
}

/// Target of a git ref or annotated tag object
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GitObject {
    #[serde(rename = "type")]
    pub object_type: String,
    pub sha: String,
}

impl GitObject {
    pub fn commit(sha: impl Into<String>) -> Self {
        Self {
            object_type: "commit".to_string(),
            sha: sha.into(),
        }
    }

    pub fn tag(sha: impl Into<String>) -> Self {
        Self {
            object_type: "tag".to_string(),
            sha: sha.into(),
        }
    }

    /// Whether this points at an annotated tag object rather than a commit
    pub fn is_annotated_tag(&self) -> bool {
        self.object_type == "tag"
    }
}

/// Response of `GET /repos/{owner}/{repo}/git/ref/tags/{tag}`
/// and `GET /repos/{owner}/{repo}/git/tags/{sha}`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ObjectEnvelope {
    pub object: GitObject,
}
