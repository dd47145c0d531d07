use super::extractor::ArchiveExtractor;
use super::{Installer, Tool};
use crate::core::{RelverError, RelverResult};
use crate::github::Repository;
use crate::resolver::{ReleaseResolver, ResolvedVersion};
use async_trait::async_trait;
use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::info;

/// Official Neovim release archives from `neovim/neovim`
pub struct NeovimInstaller {
    repository: Repository,
    pattern: Regex,
}

impl NeovimInstaller {
    /// Installer matching the archive for the running platform
    pub fn new() -> RelverResult<Self> {
        let pattern = platform_pattern(std::env::consts::OS, std::env::consts::ARCH)?;
        let pattern = Regex::new(pattern)
            .map_err(|e| RelverError::Install(format!("Invalid asset pattern: {}", e)))?;
        Ok(Self::with_pattern(pattern))
    }

    pub fn with_pattern(pattern: Regex) -> Self {
        Self {
            repository: Tool::Neovim.repository(),
            pattern,
        }
    }
}

/// Asset name pattern for an OS/architecture pair
///
/// Linux archives were renamed from `nvim-linux64` to `nvim-linux-x86_64`
/// in 0.10.4; both spellings are accepted.
pub(crate) fn platform_pattern(os: &str, arch: &str) -> RelverResult<&'static str> {
    match (os, arch) {
        ("linux", "x86_64") => Ok(r"^nvim-linux(64|-x86_64)\.tar\.gz$"),
        ("linux", "aarch64") => Ok(r"^nvim-linux-arm64\.tar\.gz$"),
        ("macos", "x86_64") => Ok(r"^nvim-macos(-x86_64)?\.tar\.gz$"),
        ("macos", "aarch64") => Ok(r"^nvim-macos(-arm64)?\.tar\.gz$"),
        ("windows", "x86_64") => Ok(r"^nvim-win64\.zip$"),
        _ => Err(RelverError::Install(format!(
            "No Neovim release archive for {}-{}. Pass --pattern to choose an asset",
            os, arch
        ))),
    }
}

#[async_trait]
impl Installer for NeovimInstaller {
    fn name(&self) -> &str {
        "neovim"
    }

    fn repository(&self) -> &Repository {
        &self.repository
    }

    fn asset_pattern(&self) -> &Regex {
        &self.pattern
    }

    fn executable_name(&self) -> String {
        if cfg!(windows) {
            "nvim.exe".to_string()
        } else {
            "nvim".to_string()
        }
    }

    fn bin_path(&self, install_root: &Path, version: &ResolvedVersion) -> PathBuf {
        self.install_dir(install_root, version)
            .join("bin")
            .join(self.executable_name())
    }

    async fn install(
        &self,
        resolver: &ReleaseResolver,
        version: &ResolvedVersion,
        install_root: &Path,
    ) -> RelverResult<PathBuf> {
        let archive = resolver.download_asset(version, &self.pattern).await?;
        let dest = self.install_dir(install_root, version);

        ArchiveExtractor::new(dest.clone()).extract(&archive)?;

        let bin = self.bin_path(install_root, version);
        if !bin.is_file() {
            return Err(RelverError::Install(format!(
                "Archive did not contain {}",
                Path::new("bin").join(self.executable_name()).display()
            )));
        }

        info!(%version, path = %dest.display(), "Installed Neovim");
        Ok(bin)
    }
}
