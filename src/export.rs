//! Export helper: save the store's download payload as a local file.
//!
//! The payload is written to a hidden `.part` file beside the target and
//! renamed into place, so an interrupted export never leaves a truncated
//! `rectangle-dimensions.json` behind.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::consts::EXPORT_FILE_NAME;
use crate::error::SyncError;
use crate::store::RemoteStore;

/// Fetch the persisted dimensions and save them as [`EXPORT_FILE_NAME`] in `dir`.
///
/// Returns the path written. The payload bytes are saved unchanged. An
/// existing export in `dir` is replaced.
///
/// # Errors
///
/// Returns [`SyncError::DownloadFailure`] if the store request fails and
/// [`SyncError::ExportWrite`] if the file cannot be written.
pub async fn download_dimensions<R: RemoteStore + ?Sized>(store: &R, dir: &Path) -> Result<PathBuf, SyncError> {
    let bytes = store.download().await.map_err(|e| {
        error!(error = %e, code = e.error_code(), "export download failed");
        SyncError::DownloadFailure(e)
    })?;

    let target = dir.join(EXPORT_FILE_NAME);
    let partial = PartialFile::new(dir.join(format!(".{EXPORT_FILE_NAME}.part")));

    tokio::fs::create_dir_all(dir).await.map_err(|e| write_error(dir, e))?;
    tokio::fs::write(partial.path(), &bytes).await.map_err(|e| write_error(partial.path(), e))?;
    tokio::fs::rename(partial.path(), &target).await.map_err(|e| write_error(&target, e))?;
    partial.committed();

    info!(path = %target.display(), bytes = bytes.len(), "dimensions exported");
    Ok(target)
}

fn write_error(path: &Path, source: std::io::Error) -> SyncError {
    let err = SyncError::ExportWrite { path: path.to_path_buf(), source };
    error!(error = %err, "export write failed");
    err
}

/// Removes the temp file on drop unless it was renamed into place.
struct PartialFile {
    path: PathBuf,
    committed: bool,
}

impl PartialFile {
    fn new(path: PathBuf) -> Self {
        Self { path, committed: false }
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn committed(mut self) {
        self.committed = true;
    }
}

impl Drop for PartialFile {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        match std::fs::remove_file(&self.path) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), error = %e, "partial export not removed");
            }
            _ => {}
        }
    }
}
