// ============================================================
// Layer 5 — Sample Store
// ============================================================
// Persists the finished validation sample as JSON.
//
// What gets written per run:
//   1. <output>: JSON array of sampled ingredients
//   2. <output stem>.manifest.json: fraction, seed and per-stratum
//      counts (unless disabled)
//   3. the strata CSV, when a report path is configured
//
// Layout with the defaults:
//   <base-dir>/
//     recipes.json                    ← input, never modified
//     validation_set.json             ← the sample
//     validation_set.manifest.json    ← how it was drawn
//
// Every payload is rendered in memory and staged through an
// OutputBatch; the files are renamed into place only once all
// of them were staged. Existing files are overwritten without
// confirmation.
//
// Reference: Rust Book §9 (Error Handling)
//            serde_json / tempfile crate documentation

use std::{fs, path::PathBuf};

use crate::domain::error::SampleError;
use crate::domain::stratum::SampleManifest;
use crate::domain::traits::SampleSink;
use crate::infra::{staging::OutputBatch, strata_report};

/// Reads and writes the sample file and its companions.
pub struct SampleStore {
    /// Full path of the sample file
    path: PathBuf,

    /// Write <output stem>.manifest.json alongside the sample
    write_manifest: bool,

    /// Full path of the strata CSV, if one was asked for
    report: Option<PathBuf>,
}

impl SampleStore {
    /// Create a store writing to `path`, with a manifest and no report.
    /// The parent directory must already exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path:           path.into(),
            write_manifest: true,
            report:         None,
        }
    }

    pub fn with_manifest(mut self, write_manifest: bool) -> Self {
        self.write_manifest = write_manifest;
        self
    }

    pub fn with_report(mut self, report: Option<PathBuf>) -> Self {
        self.report = report;
        self
    }

    /// Path of the manifest written next to the sample:
    /// `validation_set.json` → `validation_set.manifest.json`
    pub fn manifest_path(&self) -> PathBuf {
        let stem = self
            .path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("sample");
        self.path.with_file_name(format!("{stem}.manifest.json"))
    }

    /// Read a previously saved sample back
    pub fn load_sample(&self) -> Result<Vec<String>, SampleError> {
        let json = fs::read_to_string(&self.path).map_err(|source| {
            SampleError::InputUnreadable { path: self.path.clone(), source }
        })?;

        serde_json::from_str(&json).map_err(|e| SampleError::InvalidInputFormat {
            path:   self.path.clone(),
            reason: e.to_string(),
        })
    }

    /// Read the manifest saved next to the sample, if there is one
    pub fn load_manifest(&self) -> Result<Option<SampleManifest>, SampleError> {
        let path = self.manifest_path();
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&path)
            .map_err(|source| SampleError::InputUnreadable { path: path.clone(), source })?;

        serde_json::from_str(&json)
            .map(Some)
            .map_err(|e| SampleError::InvalidInputFormat {
                path,
                reason: e.to_string(),
            })
    }
}

impl SampleSink for SampleStore {
    fn save(&self, sample: &[String], manifest: &SampleManifest) -> Result<(), SampleError> {
        let mut batch = OutputBatch::new();

        batch.stage(&self.path, &serde_json::to_string_pretty(sample)?)?;
        if self.write_manifest {
            batch.stage(&self.manifest_path(), &serde_json::to_string_pretty(manifest)?)?;
        }
        if let Some(report) = &self.report {
            batch.stage(report, &strata_report::render(&manifest.strata))?;
        }

        batch.commit()?;
        tracing::info!("Saved {} sampled ingredients to '{}'", sample.len(), self.path.display());
        Ok(())
    }
}
