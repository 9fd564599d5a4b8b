//! Renderable view over a [`ComparisonResult`].
//!
//! The projection never re-derives comparison logic: fields, counts and
//! equality flags are read straight from the result.

use chrono::{Local, NaiveDateTime};
use serde::Serialize;

use crate::core::diff_text_internal;
use crate::types::{Cell, ComparisonResult, DiffChange};
use crate::utils::or_empty;

/// Identifies the test a report belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestInfo {
    pub class_name: String,
    pub test_name: String,
    pub display_name: String,
    pub generated_at: NaiveDateTime,
}

impl TestInfo {
    /// Test info stamped with the current local time. The display name
    /// defaults to the test name.
    pub fn new(class_name: impl Into<String>, test_name: impl Into<String>) -> Self {
        let test_name = test_name.into();
        Self {
            class_name: class_name.into(),
            display_name: test_name.clone(),
            test_name,
            generated_at: Local::now().naive_local(),
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Pin the timestamp, for reproducible output.
    pub fn with_generated_at(mut self, generated_at: NaiveDateTime) -> Self {
        self.generated_at = generated_at;
        self
    }

    pub fn timestamp(&self) -> String {
        self.generated_at.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// How a single cell is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CellDisplay {
    /// Both sides agree; show the shared value once.
    Equal { value: String },
    /// Show both sides, missing values as empty text. `changes` is only
    /// filled when both sides carry a value.
    Different {
        input: String,
        output: String,
        changes: Vec<DiffChange>,
    },
}

impl CellDisplay {
    pub fn for_cell(cell: &Cell) -> Self {
        let input = or_empty(cell.input_value.as_deref());
        let output = or_empty(cell.output_value.as_deref());

        if cell.equal {
            return CellDisplay::Equal {
                value: input.to_string(),
            };
        }

        let changes = match (&cell.input_value, &cell.output_value) {
            (Some(old), Some(new)) => diff_text_internal(old, new),
            _ => Vec::new(),
        };

        CellDisplay::Different {
            input: input.to_string(),
            output: output.to_string(),
            changes,
        }
    }

    pub fn is_equal(&self) -> bool {
        matches!(self, CellDisplay::Equal { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub id_value: Option<String>,
    pub cells: Vec<CellDisplay>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub rows_compared: usize,
    pub cells_compared: usize,
    pub diff_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportModel {
    pub show_id_column: bool,
    pub fields: Vec<String>,
    pub rows: Vec<ReportRow>,
    pub summary: ReportSummary,
}

impl ReportModel {
    pub fn from_result(result: &ComparisonResult) -> Self {
        let show_id_column = result.rows.iter().any(|row| row.id_value.is_some());

        let rows = result
            .rows
            .iter()
            .map(|row| ReportRow {
                id_value: row.id_value.clone(),
                cells: row.cells.iter().map(CellDisplay::for_cell).collect(),
            })
            .collect();

        Self {
            show_id_column,
            fields: result.fields.clone(),
            rows,
            summary: ReportSummary {
                rows_compared: result.rows_compared,
                cells_compared: result.cells_compared,
                diff_count: result.diff_count,
            },
        }
    }
}

impl From<&ComparisonResult> for ReportModel {
    fn from(result: &ComparisonResult) -> Self {
        Self::from_result(result)
    }
}
