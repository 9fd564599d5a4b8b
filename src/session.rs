//! Per-test capture and verdict.
//!
//! A test captures its expected and actual rows on a [`CompareSession`] it
//! owns, then calls [`CompareSession::finish`] once it is done. Nothing is
//! stored outside the session, so tests running in parallel never see each
//! other's rows.

use std::path::PathBuf;

use crate::config::ReportSettings;
use crate::core::compare_row_sets;
use crate::error::{CompareError, Result};
use crate::html::{HtmlRenderer, ReportRenderer};
use crate::report::TestInfo;
use crate::types::{ComparisonConfig, ComparisonResult, Record, RowSet};
use crate::writer::{report_path, write_report};

#[derive(Debug, Clone)]
struct Captured {
    expected: RowSet,
    actual: RowSet,
    config: ComparisonConfig,
}

/// Outcome of a session that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Nothing was captured; no report was written.
    NothingToReport,
    /// Every compared cell matched.
    Passed {
        report: PathBuf,
        result: ComparisonResult,
    },
}

#[derive(Debug, Clone)]
pub struct CompareSession {
    info: TestInfo,
    captured: Option<Captured>,
}

impl CompareSession {
    pub fn new(info: TestInfo) -> Self {
        Self {
            info,
            captured: None,
        }
    }

    pub fn info(&self) -> &TestInfo {
        &self.info
    }

    pub fn has_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Capture both sides with the default configuration.
    pub fn capture(&mut self, expected: RowSet, actual: RowSet) {
        self.capture_with(expected, actual, ComparisonConfig::default());
    }

    /// Capture both sides; replaces any earlier capture.
    pub fn capture_with(&mut self, expected: RowSet, actual: RowSet, config: ComparisonConfig) {
        self.captured = Some(Captured {
            expected,
            actual,
            config,
        });
    }

    /// Compare the captured rows without writing anything.
    pub fn compare(&self) -> Option<ComparisonResult> {
        self.captured
            .as_ref()
            .map(|c| compare_row_sets(&c.expected, &c.actual, &c.config))
    }

    /// Compare, render and write the report with the HTML renderer.
    pub fn finish(self, settings: &ReportSettings) -> Result<Verdict> {
        let renderer = match self
            .captured
            .as_ref()
            .and_then(|c| c.config.id_field.as_deref())
        {
            Some(id_field) => HtmlRenderer::new().with_id_label(id_field),
            None => HtmlRenderer::new(),
        };
        self.finish_with(settings, &renderer)
    }

    /// Compare, render and write the report.
    ///
    /// A failure to write the report is returned as
    /// [`CompareError::ReportIo`] whatever the comparison found; a data
    /// mismatch is only reported once the report is on disk.
    pub fn finish_with<R: ReportRenderer>(
        self,
        settings: &ReportSettings,
        renderer: &R,
    ) -> Result<Verdict> {
        let Some(captured) = self.captured else {
            tracing::debug!(test = %self.info.test_name, "no rows captured, skipping report");
            return Ok(Verdict::NothingToReport);
        };

        let result = compare_row_sets(&captured.expected, &captured.actual, &captured.config);
        let document = renderer.render(&self.info, &result);
        let path = report_path(settings, &self.info, renderer.extension());

        let report = write_report(&path, &document).inspect_err(|err| {
            tracing::warn!(test = %self.info.test_name, error = %err, "failed to write compare report");
        })?;

        if result.diff_count > 0 {
            tracing::warn!(
                test = %self.info.test_name,
                diffs = result.diff_count,
                report = %report.display(),
                "table comparison found differences"
            );
            return Err(CompareError::Mismatch {
                diffs: result.diff_count,
                report,
            });
        }

        Ok(Verdict::Passed { report, result })
    }
}

/// Completeness check for the rows a positional comparison leaves out.
pub fn assert_same_row_count(expected: &[Record], actual: &[Record]) -> Result<()> {
    if expected.len() != actual.len() {
        return Err(CompareError::RowCountMismatch {
            expected: expected.len(),
            actual: actual.len(),
        });
    }
    Ok(())
}
