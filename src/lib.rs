//! relver: resolve loose version requests against GitHub releases
//!
//! This crate provides the main relver library, re-exporting core
//! functionality from `relver-core` and organizing the release catalog
//! client, the version resolver and the installers built on top of it.

pub use relver_core::{format_error_with_help, CredentialStore, ErrorHelp, RelverError, RelverResult};

/// Core module re-exported from relver-core.
pub mod core {
    pub use relver_core::core::*;
}

/// Configuration management.
pub mod config;

/// Download cache and HTTP artifact fetcher.
pub mod cache;

/// GitHub release catalog client.
pub mod github;

/// Dependency injection seams and test doubles.
pub mod di;

/// Version request resolution and tag reconciliation.
pub mod resolver;

/// Tool-specific installers.
pub mod installer;
