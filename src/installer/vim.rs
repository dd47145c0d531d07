use super::extractor::ArchiveExtractor;
use super::{Installer, Tool};
use crate::core::{RelverError, RelverResult};
use crate::github::Repository;
use crate::resolver::{ReleaseResolver, ResolvedVersion};
use async_trait::async_trait;
use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::info;

const APPIMAGE_PATTERN: &str = r"^Vim-.*\.AppImage$";

/// Vim AppImage builds published by `vim/vim-appimage`
///
/// The AppImage is a single self-contained executable; it is copied to
/// `<install root>/vim/<version>/vim`.
pub struct VimAppImageInstaller {
    repository: Repository,
    pattern: Regex,
}

impl VimAppImageInstaller {
    pub fn new() -> RelverResult<Self> {
        if std::env::consts::OS != "linux" {
            return Err(RelverError::Install(format!(
                "Vim AppImages only run on Linux (this is {})",
                std::env::consts::OS
            )));
        }
        let pattern = Regex::new(APPIMAGE_PATTERN)
            .map_err(|e| RelverError::Install(format!("Invalid asset pattern: {}", e)))?;
        Ok(Self::with_pattern(pattern))
    }

    pub fn with_pattern(pattern: Regex) -> Self {
        Self {
            repository: Tool::Vim.repository(),
            pattern,
        }
    }
}

#[async_trait]
impl Installer for VimAppImageInstaller {
    fn name(&self) -> &str {
        "vim"
    }

    fn repository(&self) -> &Repository {
        &self.repository
    }

    fn asset_pattern(&self) -> &Regex {
        &self.pattern
    }

    fn executable_name(&self) -> String {
        "vim".to_string()
    }

    fn bin_path(&self, install_root: &Path, version: &ResolvedVersion) -> PathBuf {
        self.install_dir(install_root, version)
            .join(self.executable_name())
    }

    async fn install(
        &self,
        resolver: &ReleaseResolver,
        version: &ResolvedVersion,
        install_root: &Path,
    ) -> RelverResult<PathBuf> {
        let artifact = resolver.download_asset(version, &self.pattern).await?;
        let dest = self.install_dir(install_root, version);

        let bin = ArchiveExtractor::new(dest).install_executable(&artifact, &self.executable_name())?;

        info!(%version, path = %bin.display(), "Installed Vim AppImage");
        Ok(bin)
    }
}
