//! Positional, field-by-field comparison of two row-sets with an HTML diff
//! report and a pass/fail verdict.
//!
//! ```
//! use table_compare::{compare_row_sets, ComparisonConfig, Record};
//!
//! let expected = vec![Record::new().with("ID", "1").with("NAME", "John")];
//! let actual = vec![Record::new().with("ID", "1").with("NAME", "Jane")];
//! let result = compare_row_sets(&expected, &actual, &ComparisonConfig::new().with_id_field("ID"));
//! assert_eq!(result.diff_count, 1);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod html;
pub mod logging;
pub mod parse;
pub mod report;
pub mod session;
pub mod types;
pub mod utils;
pub mod wasm_api;
pub mod writer;

#[cfg(test)]
mod test_data;

pub use crate::config::ReportSettings;
pub use crate::core::{compare_optional, compare_row_sets};
pub use crate::error::{CompareError, Result};
pub use crate::html::{HtmlRenderer, ReportRenderer};
pub use crate::report::{CellDisplay, ReportModel, TestInfo};
pub use crate::session::{assert_same_row_count, CompareSession, Verdict};
pub use crate::types::{Cell, ComparedRow, ComparisonConfig, ComparisonResult, Record, RowSet};
