use crate::core::error::{RelverError, RelverResult};
use std::path::{Path, PathBuf};

/// Get the relver home directory
///
/// Platform-specific locations:
/// - Windows: %APPDATA%\relver
/// - Linux: ~/.config/relver
/// - macOS: ~/Library/Application Support/relver
pub fn relver_home() -> RelverResult<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| RelverError::Path("Could not determine config directory".to_string()))?;
    Ok(config_dir.join("relver"))
}

/// Get the config file path (`<relver_home>/config.yaml`)
pub fn config_file() -> RelverResult<PathBuf> {
    Ok(relver_home()?.join("config.yaml"))
}

/// Get the download directory
///
/// Platform-specific locations:
/// - Windows: %LOCALAPPDATA%\relver\downloads
/// - Linux: ~/.cache/relver/downloads
/// - macOS: ~/Library/Caches/relver/downloads
pub fn download_dir() -> RelverResult<PathBuf> {
    let cache_dir = dirs::cache_dir()
        .ok_or_else(|| RelverError::Path("Could not determine cache directory".to_string()))?;
    Ok(cache_dir.join("relver").join("downloads"))
}

/// Get the directory tools are installed into
///
/// Platform-specific locations:
/// - Windows: %LOCALAPPDATA%\relver\installs
/// - Linux: ~/.local/share/relver/installs
/// - macOS: ~/Library/Application Support/relver/installs
pub fn install_dir() -> RelverResult<PathBuf> {
    let data_dir = dirs::data_local_dir()
        .ok_or_else(|| RelverError::Path("Could not determine data directory".to_string()))?;
    Ok(data_dir.join("relver").join("installs"))
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> RelverResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
