//! Installer variants
//!
//! Each distributable flavour of a tool (tarball, AppImage, ...) lives in its
//! own GitHub repository with its own asset naming. An [`Installer`] bundles
//! that knowledge; the resolver itself never depends on a concrete variant.

pub mod extractor;
pub mod neovim;
pub mod vim;

pub use extractor::{ArchiveExtractor, ArtifactKind};
pub use neovim::NeovimInstaller;
pub use vim::VimAppImageInstaller;

use crate::core::version::normalize;
use crate::core::{RelverError, RelverResult};
use crate::github::Repository;
use crate::resolver::{ReleaseResolver, ResolvedVersion};
use async_trait::async_trait;
use regex::Regex;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Capabilities of one installable tool variant
#[async_trait]
pub trait Installer: Send + Sync {
    /// Short name, used as the install sub-directory
    fn name(&self) -> &str;

    /// Repository whose releases carry this variant
    fn repository(&self) -> &Repository;

    /// Pattern selecting this variant's asset for the current platform
    fn asset_pattern(&self) -> &Regex;

    /// File name of the installed executable
    fn executable_name(&self) -> String;

    /// Display form of a resolved version
    ///
    /// Semver tags are rendered normalized (`v9.1.0000` -> `9.1.0`);
    /// symbolic tags and commit SHAs are returned unchanged.
    fn version_string(&self, version: &ResolvedVersion) -> String {
        match normalize(version.as_str()) {
            Some(semver) => semver.to_string(),
            None => version.to_string(),
        }
    }

    /// Directory a given version is installed into
    fn install_dir(&self, install_root: &Path, version: &ResolvedVersion) -> PathBuf {
        install_root
            .join(self.name())
            .join(self.version_string(version))
    }

    /// Path of the executable once `version` is installed
    fn bin_path(&self, install_root: &Path, version: &ResolvedVersion) -> PathBuf;

    /// Download and unpack a version previously returned by `resolver`
    async fn install(
        &self,
        resolver: &ReleaseResolver,
        version: &ResolvedVersion,
        install_root: &Path,
    ) -> RelverResult<PathBuf>;
}

/// Built-in installer variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Neovim,
    Vim,
}

impl Tool {
    /// Repository publishing this tool's releases
    pub fn repository(self) -> Repository {
        match self {
            Tool::Neovim => Repository::new("neovim", "neovim"),
            Tool::Vim => Repository::new("vim", "vim-appimage"),
        }
    }

    /// Build the installer, optionally overriding its asset pattern
    pub fn installer(self, pattern: Option<Regex>) -> RelverResult<Box<dyn Installer>> {
        Ok(match self {
            Tool::Neovim => Box::new(match pattern {
                Some(p) => NeovimInstaller::with_pattern(p),
                None => NeovimInstaller::new()?,
            }),
            Tool::Vim => Box::new(match pattern {
                Some(p) => VimAppImageInstaller::with_pattern(p),
                None => VimAppImageInstaller::new()?,
            }),
        })
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tool::Neovim => write!(f, "neovim"),
            Tool::Vim => write!(f, "vim"),
        }
    }
}

impl FromStr for Tool {
    type Err = RelverError;

    fn from_str(s: &str) -> RelverResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "neovim" | "nvim" => Ok(Tool::Neovim),
            "vim" => Ok(Tool::Vim),
            other => Err(RelverError::Config(format!(
                "Unknown tool '{}'. Expected one of: neovim, vim",
                other
            ))),
        }
    }
}

/// Compile a user-supplied asset pattern
pub fn compile_pattern(pattern: &str) -> RelverResult<Regex> {
    Regex::new(pattern)
        .map_err(|e| RelverError::Config(format!("Invalid asset pattern '{}': {}", pattern, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_parse() {
        assert_eq!("neovim".parse::<Tool>().unwrap(), Tool::Neovim);
        assert_eq!("NVIM".parse::<Tool>().unwrap(), Tool::Neovim);
        assert_eq!("vim".parse::<Tool>().unwrap(), Tool::Vim);
        assert!("emacs".parse::<Tool>().is_err());
    }

    #[test]
    fn test_installer_with_pattern_override() {
        let pattern = compile_pattern(r"^custom\.tar\.gz$").unwrap();
        let installer = Tool::Vim.installer(Some(pattern)).unwrap();

        assert_eq!(installer.repository().to_string(), "vim/vim-appimage");
        assert_eq!(installer.asset_pattern().as_str(), r"^custom\.tar\.gz$");
    }

    #[test]
    fn test_version_string() {
        let installer = Tool::Neovim
            .installer(Some(compile_pattern("nvim").unwrap()))
            .unwrap();

        assert_eq!(
            installer.version_string(&ResolvedVersion::new("v9.1.0000")),
            "9.1.0"
        );
        assert_eq!(
            installer.version_string(&ResolvedVersion::new("nightly")),
            "nightly"
        );
        let sha = "0123456789abcdef0123456789abcdef01234567";
        assert_eq!(installer.version_string(&ResolvedVersion::new(sha)), sha);
    }

    #[test]
    fn test_install_dir_layout() {
        let installer = Tool::Neovim
            .installer(Some(compile_pattern("nvim").unwrap()))
            .unwrap();
        let dir = installer.install_dir(Path::new("/opt/relver"), &ResolvedVersion::new("v0.10.0"));
        assert_eq!(dir, PathBuf::from("/opt/relver/neovim/0.10.0"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = compile_pattern("nvim-(").unwrap_err();
        assert!(err.to_string().contains("Invalid asset pattern"));
    }
}
