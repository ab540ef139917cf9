use std::path::{Path, PathBuf};

use crate::storage::{RecordStore, StoreError};

/// Errors that can occur when exporting the record list to a file.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The store could not produce a payload (e.g. it is empty).
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The payload could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        /// Destination of the export.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Writes the exported record list to `file_name` inside `dir`.
///
/// Any existing file of that name is overwritten. Nothing is written when the
/// store is empty.
///
/// # Errors
///
/// - [`ExportError::Store`] wrapping [`StoreError::EmptyStore`] if there are no
///   students
/// - [`ExportError::Io`] if the file cannot be written
pub fn export_to_dir(
    store: &RecordStore,
    dir: &Path,
    file_name: &str,
) -> Result<PathBuf, ExportError> {
    let payload = store.export()?;
    let path = dir.join(file_name);

    std::fs::write(&path, payload).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;

    tracing::info!(path = %path.display(), students = store.len(), "exported students");
    Ok(path)
}
