//! Version resolution
//!
//! Turns a loose version request (`head`, `latest`, a semver version or an
//! explicit tag) into one concrete release of a repository, then into one
//! downloadable asset of that release.
//!
//! ```text
//! request ──classify──▶ VersionRequest ──scan/lookup──▶ Release
//!                                                          │
//!                                        reconcile tag ◀───┘
//!                                              │
//!                         ResolvedVersion ─────┴──▶ ResolutionCache
//!                                │
//!          download_asset(version, pattern) ──▶ ArtifactFetcher ──▶ local path
//! ```

mod asset;
mod reconciler;
mod request;
mod version_resolver;

pub use reconciler::{reconcile, resolve_tag_commit};
pub use request::VersionRequest;
pub use version_resolver::{ReleaseResolver, Resolution, ResolutionCache, ResolvedVersion};
