//! Dependency injection infrastructure for relver
//!
//! The resolver talks to GitHub, the filesystem and the credential store only
//! through the traits in [`traits`], so tests can swap in the in-memory
//! implementations from [`mocks`].
//!
//! # Example (Production)
//! ```no_run
//! use relver::di::ServiceContainer;
//!
//! # fn example() -> relver::core::RelverResult<()> {
//! let container = ServiceContainer::new()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example (Testing)
//! ```
//! use relver::di::{ServiceContainer, mocks::*};
//! use std::sync::Arc;
//!
//! let config = Arc::new(MockConfigProvider::default());
//! let catalog = Arc::new(MockReleaseCatalog::new(30));
//! let fetcher = Arc::new(MockArtifactFetcher::new());
//!
//! let container = ServiceContainer::with_providers(config, catalog, fetcher);
//! ```

pub mod container;
pub mod mocks;
pub mod traits;

// Re-export key types
pub use container::ServiceContainer;
pub use traits::{ArtifactFetcher, ConfigProvider, CredentialProvider, ReleaseCatalog};
