// ============================================================
// Layer 3 — Error Taxonomy
// ============================================================
// Input errors:     the recipe file is missing or malformed
// Parameter errors: the sampling rate is out of range
// Output errors:    the destination cannot be written
//
// Every variant aborts the run; nothing is persisted after
// an error. The CLI layer wraps these in anyhow with context.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure conditions of a sampling run.
#[derive(Debug, Error)]
pub enum SampleError {
    #[error("cannot read input '{}'", path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid input format in '{}': {reason}", path.display())]
    InvalidInputFormat { path: PathBuf, reason: String },
    #[error("invalid sampling rate {0}: must be in (0, 1]")]
    InvalidSamplingRate(f64),
    #[error("cannot write output '{}'", path.display())]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}
