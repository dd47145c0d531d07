use crate::core::path::{config_file, ensure_dir};
use crate::core::{RelverError, RelverResult};
use crate::di::ConfigProvider;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding `github_api_url`
pub const ENV_API_URL: &str = "RELVER_GITHUB_API_URL";
/// Environment variable overriding `install_dir`
pub const ENV_INSTALL_DIR: &str = "RELVER_INSTALL_DIR";
/// Environment variable overriding `download_dir`
pub const ENV_DOWNLOAD_DIR: &str = "RELVER_DOWNLOAD_DIR";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// GitHub REST API base URL
    #[serde(default = "default_github_api_url")]
    pub github_api_url: String,

    /// Page size requested when listing releases (GitHub caps this at 100)
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    /// Directory tools are installed into
    ///
    /// Default locations:
    /// - Windows: %LOCALAPPDATA%\relver\installs
    /// - Linux: ~/.local/share/relver/installs
    /// - macOS: ~/Library/Application Support/relver/installs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_dir: Option<String>,

    /// Directory release assets are downloaded into
    ///
    /// Default locations:
    /// - Windows: %LOCALAPPDATA%\relver\downloads
    /// - Linux: ~/.cache/relver/downloads
    /// - macOS: ~/Library/Caches/relver/downloads
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_dir: Option<String>,
}

fn default_github_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_per_page() -> u32 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_api_url: default_github_api_url(),
            per_page: default_per_page(),
            install_dir: None,
            download_dir: None,
        }
    }
}

impl Config {
    /// Load config from the platform-specific config directory, creating the
    /// default file if it doesn't exist. Environment overrides are applied
    /// after the file is read.
    ///
    /// Config locations:
    /// - Windows: %APPDATA%\relver\config.yaml
    /// - Linux: ~/.config/relver/config.yaml
    /// - macOS: ~/Library/Application Support/relver/config.yaml
    pub fn load() -> RelverResult<Self> {
        let config_path = config_file()?;

        if !config_path.exists() {
            let config = Self::default();
            config.save_to(&config_path)?;
            return Ok(config.with_env_overrides());
        }

        Ok(Self::load_from(&config_path)?.with_env_overrides())
    }

    /// Load config from an explicit path without applying overrides
    pub fn load_from(path: &Path) -> RelverResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| RelverError::Config(format!("Failed to parse config: {}", e)))?;

        if config.per_page == 0 || config.per_page > 100 {
            return Err(RelverError::Config(format!(
                "per_page must be between 1 and 100, got {}",
                config.per_page
            )));
        }

        Ok(config)
    }

    /// Save config to an explicit path
    pub fn save_to(&self, path: &Path) -> RelverResult<()> {
        let config_dir = path
            .parent()
            .ok_or_else(|| RelverError::Path("Invalid config path".to_string()))?;

        ensure_dir(config_dir)?;

        let content = serde_yaml::to_string(self)
            .map_err(|e| RelverError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content)?;
        Ok(())
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(ENV_API_URL) {
            self.github_api_url = url;
        }
        if let Ok(dir) = std::env::var(ENV_INSTALL_DIR) {
            self.install_dir = Some(dir);
        }
        if let Ok(dir) = std::env::var(ENV_DOWNLOAD_DIR) {
            self.download_dir = Some(dir);
        }
        self
    }

    /// Get the install directory path
    pub fn get_install_dir(&self) -> RelverResult<PathBuf> {
        match self.install_dir {
            Some(ref dir) => Ok(PathBuf::from(dir)),
            None => crate::core::path::install_dir(),
        }
    }

    /// Get the download directory path
    pub fn get_download_dir(&self) -> RelverResult<PathBuf> {
        match self.download_dir {
            Some(ref dir) => Ok(PathBuf::from(dir)),
            None => crate::core::path::download_dir(),
        }
    }
}

impl ConfigProvider for Config {
    fn github_api_url(&self) -> &str {
        self.github_api_url.trim_end_matches('/')
    }

    fn per_page(&self) -> u32 {
        self.per_page
    }

    fn install_dir(&self) -> RelverResult<PathBuf> {
        self.get_install_dir()
    }

    fn download_dir(&self) -> RelverResult<PathBuf> {
        self.get_download_dir()
    }
}
