use std::path::{Path, PathBuf};

/// Directory reports are written to when nothing else is configured.
pub const DEFAULT_REPORT_DIR: &str = "test-reports";

/// Environment variable overriding the report directory.
pub const REPORT_DIR_ENV: &str = "TABLE_COMPARE_REPORT_DIR";

/// Where and how reports are persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    pub report_dir: PathBuf,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            report_dir: PathBuf::from(DEFAULT_REPORT_DIR),
        }
    }
}

impl ReportSettings {
    pub fn new(report_dir: impl Into<PathBuf>) -> Self {
        Self {
            report_dir: report_dir.into(),
        }
    }

    /// Defaults, with the report directory taken from
    /// `TABLE_COMPARE_REPORT_DIR` when set and non-empty.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(REPORT_DIR_ENV).ok())
    }

    fn from_env_value(value: Option<String>) -> Self {
        match value.filter(|v| !v.trim().is_empty()) {
            Some(dir) => Self::new(dir),
            None => Self::default(),
        }
    }

    pub fn report_dir(&self) -> &Path {
        &self.report_dir
    }
}
