use super::error::InfrastructureError;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;

/// Reads and writes image files on the local file system.
#[derive(Debug, Clone, Default)]
pub struct LocalFileStorage;

impl LocalFileStorage {
    pub fn new() -> Self {
        Self
    }

    pub async fn read_image(&self, path: &Path) -> Result<Vec<u8>, InfrastructureError> {
        let data = fs::read(path).await.map_err(InfrastructureError::IoError)?;
        tracing::debug!("read {} bytes from {}", data.len(), path.display());
        Ok(data)
    }

    /// Writes `data` to a sibling `.partial` file first and renames it over `path` once
    /// everything is flushed, so `path` never holds a half-written image.
    pub async fn save_image(&self, path: &Path, data: &[u8]) -> Result<(), InfrastructureError> {
        let partial = partial_path(path)?;

        let written = async {
            let mut file = File::create(&partial).await?;
            file.write_all(data).await?;
            file.sync_all().await
        }
        .await;
        if let Err(error) = written {
            // Best effort: the write already failed.
            let _ = fs::remove_file(&partial).await;
            return Err(InfrastructureError::IoError(error));
        }

        tracing::debug!("renaming {} to {}", partial.display(), path.display());
        fs::rename(&partial, path).await.map_err(InfrastructureError::IoError)?;
        Ok(())
    }
}

fn partial_path(path: &Path) -> Result<PathBuf, InfrastructureError> {
    let file_name = path.file_name().ok_or_else(|| {
        InfrastructureError::FileStorageError(format!("{} has no file name", path.display()))
    })?;
    let mut partial_name = OsString::from(file_name);
    partial_name.push(".partial");
    Ok(path.with_file_name(partial_name))
}
