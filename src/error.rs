//! Error types for table comparison and report generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised around a comparison. The comparison itself never fails;
/// these cover verdicts, reading inputs and persisting reports.
#[derive(Debug, Error)]
pub enum CompareError {
    /// The two row-sets differ in at least one compared cell.
    #[error("table comparison failed: {diffs} differences found. See HTML report: {report}")]
    Mismatch { diffs: usize, report: PathBuf },

    /// The two sides do not hold the same number of rows.
    #[error("row count mismatch: expected {expected} rows, got {actual}")]
    RowCountMismatch { expected: usize, actual: usize },

    /// Writing the rendered report failed.
    #[error("failed to write report {path}: {source}")]
    ReportIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading or writing an input file failed.
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV content could not be parsed or written.
    #[error("CSV error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),
}

impl CompareError {
    /// True for a data mismatch, false for failures of the reporting machinery.
    pub fn is_mismatch(&self) -> bool {
        matches!(
            self,
            CompareError::Mismatch { .. } | CompareError::RowCountMismatch { .. }
        )
    }
}

/// Result type for comparison and reporting operations.
pub type Result<T> = std::result::Result<T, CompareError>;
