use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ReportSettings;
use crate::error::{CompareError, Result};
use crate::report::TestInfo;
use crate::utils::safe_file_name;

/// Location of a test's report: `{dir}/{safe class}/{safe test name}.{ext}`.
/// Both components are sanitized so the path stays under the report dir.
pub fn report_path(settings: &ReportSettings, info: &TestInfo, extension: &str) -> PathBuf {
    settings
        .report_dir()
        .join(safe_file_name(&info.class_name))
        .join(format!("{}.{}", safe_file_name(&info.test_name), extension))
}

/// Persist a rendered report, creating directories as needed.
///
/// Returns the absolute path when it can be resolved, otherwise the path as
/// written.
pub fn write_report(path: &Path, contents: &str) -> Result<PathBuf> {
    let io_error = |source: std::io::Error| CompareError::ReportIo {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    fs::write(path, contents.as_bytes()).map_err(io_error)?;

    let absolute = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    tracing::info!(path = %absolute.display(), "Test result file is here");
    Ok(absolute)
}
