// ============================================================
// Layer 5 — Staged Output Batch
// ============================================================
// A run writes up to three files. Either all of them reach
// disk or none do:
//
//   stage()  → payload goes to a temp file created in the
//              destination's own directory
//   commit() → every temp file is renamed over its destination
//
// A batch dropped before commit() removes its temp files, so an
// error while staging any payload leaves the destinations as
// they were. Staging in the destination directory keeps each
// rename on one filesystem.

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::domain::error::SampleError;

/// Payloads waiting to be renamed into place.
#[derive(Default)]
pub struct OutputBatch {
    staged: Vec<(NamedTempFile, PathBuf)>,
}

impl OutputBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `contents` to a temp file next to `path`.
    /// Fails if the destination directory is missing or read-only.
    pub fn stage(&mut self, path: &Path, contents: &str) -> Result<(), SampleError> {
        let unwritable = |source| SampleError::OutputUnwritable {
            path: path.to_path_buf(),
            source,
        };

        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(unwritable)?;
        tmp.write_all(contents.as_bytes()).map_err(unwritable)?;
        tmp.flush().map_err(unwritable)?;

        self.staged.push((tmp, path.to_path_buf()));
        Ok(())
    }

    /// Rename every staged payload over its destination,
    /// replacing existing files.
    pub fn commit(self) -> Result<(), SampleError> {
        for (tmp, path) in self.staged {
            tmp.persist(&path).map_err(|e| SampleError::OutputUnwritable {
                path:   path.clone(),
                source: e.error,
            })?;
            tracing::debug!("Wrote '{}'", path.display());
        }
        Ok(())
    }
}
