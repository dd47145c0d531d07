use crate::core::path::ensure_dir;
use crate::core::{RelverError, RelverResult};
use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tar::Archive;

/// Kind of downloaded artifact, decided by file name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    TarGz,
    Zip,
    AppImage,
}

impl ArtifactKind {
    pub fn from_file_name(name: &str) -> RelverResult<Self> {
        let lower = name.to_ascii_lowercase();
        if lower.ends_with(".tar.gz") || lower.ends_with(".tgz") {
            Ok(ArtifactKind::TarGz)
        } else if lower.ends_with(".zip") {
            Ok(ArtifactKind::Zip)
        } else if lower.ends_with(".appimage") {
            Ok(ArtifactKind::AppImage)
        } else {
            Err(RelverError::Install(format!(
                "Unsupported artifact format: {}",
                name
            )))
        }
    }
}

/// Unpacks a downloaded artifact into a fixed destination directory
///
/// Archives with a single top-level directory have that directory's contents
/// placed directly in the destination, so `nvim-linux-x86_64/bin/nvim`
/// lands at `<dest>/bin/nvim`. Any previous contents of `dest` are replaced.
pub struct ArchiveExtractor {
    dest_dir: PathBuf,
}

impl ArchiveExtractor {
    pub fn new(dest_dir: PathBuf) -> Self {
        Self { dest_dir }
    }

    /// Extract an archive, returning the destination directory
    pub fn extract(&self, archive_path: &Path) -> RelverResult<PathBuf> {
        let file_name = archive_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| RelverError::Install("Artifact has no file name".to_string()))?;

        let kind = ArtifactKind::from_file_name(file_name)?;

        let staging = self.staging_dir();
        if staging.exists() {
            fs::remove_dir_all(&staging)?;
        }
        ensure_dir(&staging)?;

        let result = match kind {
            ArtifactKind::TarGz => self.unpack_targz(archive_path, &staging),
            ArtifactKind::Zip => self.unpack_zip(archive_path, &staging),
            ArtifactKind::AppImage => Err(RelverError::Install(format!(
                "{} is not an archive",
                file_name
            ))),
        }
        .and_then(|()| self.promote(&staging));

        // Cleanup staging directory on error
        if result.is_err() {
            let _ = fs::remove_dir_all(&staging);
        }
        result
    }

    /// Copy a single-file executable to `<dest>/<name>` and mark it executable
    pub fn install_executable(&self, artifact_path: &Path, name: &str) -> RelverResult<PathBuf> {
        ensure_dir(&self.dest_dir)?;
        let target = self.dest_dir.join(name);
        fs::copy(artifact_path, &target)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&target)?.permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&target, perms)?;
        }

        Ok(target)
    }

    fn staging_dir(&self) -> PathBuf {
        let name = self
            .dest_dir
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown");
        self.dest_dir.with_file_name(format!(".tmp-{}", name))
    }

    fn unpack_targz(&self, archive_path: &Path, staging: &Path) -> RelverResult<()> {
        let file = File::open(archive_path)?;
        let mut archive = Archive::new(GzDecoder::new(file));
        archive.unpack(staging)?;
        Ok(())
    }

    fn unpack_zip(&self, archive_path: &Path, staging: &Path) -> RelverResult<()> {
        use zip::ZipArchive;

        let file = File::open(archive_path)?;
        let mut archive = ZipArchive::new(file)
            .map_err(|e| RelverError::Install(format!("Invalid zip: {}", e)))?;
        archive
            .extract(staging)
            .map_err(|e| RelverError::Install(format!("Extract failed: {}", e)))
    }

    /// Move the unpacked tree into place, unwrapping a lone root directory
    fn promote(&self, staging: &Path) -> RelverResult<PathBuf> {
        let entries = fs::read_dir(staging)?.collect::<Result<Vec<_>, std::io::Error>>()?;
        let root = match entries.as_slice() {
            [] => {
                return Err(RelverError::Install("Archive is empty".to_string()));
            }
            [only] if only.path().is_dir() => only.path(),
            _ => staging.to_path_buf(),
        };

        if self.dest_dir.exists() {
            fs::remove_dir_all(&self.dest_dir)?;
        }
        if let Some(parent) = self.dest_dir.parent() {
            ensure_dir(parent)?;
        }
        fs::rename(&root, &self.dest_dir)?;
        if staging.exists() {
            fs::remove_dir_all(staging)?;
        }

        Ok(self.dest_dir.clone())
    }
}
