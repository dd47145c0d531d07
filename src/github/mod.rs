//! GitHub Releases catalog
//!
//! This module provides functionality for interacting with GitHub to:
//! - Fetch the latest release, a release by tag, or pages of releases
//! - Resolve tag refs (and annotated tag objects) to commit SHAs
//! - Walk the release list lazily, newest first

pub mod auth;
pub mod client;
pub mod pager;
pub mod types;

pub use auth::GitHubTokenProvider;
pub use client::GitHubClient;
pub use pager::ReleasePager;
pub use types::{GitObject, Release, ReleaseAsset, ReleasePage, Repository};
