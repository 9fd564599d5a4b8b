//! Self-contained HTML rendering of a comparison.

// fmt::Write for String is infallible; the `let _ = write!` results are always Ok.
use std::fmt::Write;

use crate::report::{CellDisplay, ReportModel, TestInfo};
use crate::types::{ComparisonResult, DiffChange};
use crate::utils::escape_html;

const STYLE: &str = "<style>\
body{font-family:Arial,Helvetica,sans-serif;margin:20px;}\
h1{margin:0 0 10px 0;font-size:20px;}\
.meta{color:#555;margin-bottom:16px;font-size:12px;}\
table{border-collapse:collapse;width:100%;}\
th,td{border:1px solid #ddd;padding:6px;text-align:left;}\
th{background:#f5f5f5;position:sticky;top:0;}\
td.equal{background:#ffffff;}\
td.diff{background:#ffcccc;}\
td.id{background:#fafafa;font-weight:bold;}\
del{background:#f4a6a6;}\
ins{background:#b6e3b6;text-decoration:none;}\
.legend{margin:10px 0 16px 0;font-size:12px;}\
.badge{display:inline-block;padding:2px 8px;border-radius:10px;background:#eee;margin-right:6px;}\
</style>";

/// Turns a comparison into a report document.
pub trait ReportRenderer {
    fn render(&self, info: &TestInfo, result: &ComparisonResult) -> String;

    /// File extension of the rendered document, without the dot.
    fn extension(&self) -> &'static str;
}

#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    id_label: String,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self {
            id_label: "ID".to_string(),
        }
    }
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Header text of the leading id column.
    pub fn with_id_label(mut self, label: impl Into<String>) -> Self {
        self.id_label = label.into();
        self
    }
}

impl ReportRenderer for HtmlRenderer {
    fn render(&self, info: &TestInfo, result: &ComparisonResult) -> String {
        let model = ReportModel::from_result(result);
        let mut html = String::with_capacity(4096);

        html.push_str("<!doctype html><html><head><meta charset='utf-8'>");
        let _ = write!(
            html,
            "<title>Table Compare Report - {}</title>",
            escape_html(&info.display_name)
        );
        html.push_str(STYLE);
        html.push_str("</head><body>");
        html.push_str("<h1>Table Compare Report</h1>");
        render_meta(&mut html, info);
        render_legend(&mut html, &model);

        html.push_str("<table>");
        self.render_header(&mut html, &model);
        render_body(&mut html, &model);
        html.push_str("</table>");
        html.push_str("</body></html>");
        html
    }

    fn extension(&self) -> &'static str {
        "html"
    }
}

impl HtmlRenderer {
    fn render_header(&self, html: &mut String, model: &ReportModel) {
        html.push_str("<thead><tr>");
        if model.show_id_column {
            let _ = write!(html, "<th>{}</th>", escape_html(&self.id_label));
        }
        for field in &model.fields {
            let _ = write!(html, "<th>{}</th>", escape_html(field));
        }
        html.push_str("</tr></thead>");
    }
}

fn render_meta(html: &mut String, info: &TestInfo) {
    let _ = write!(
        html,
        "<div class='meta'>\
         <div><b>Class:</b> {}</div>\
         <div><b>Test:</b> {}</div>\
         <div><b>Display name:</b> {}</div>\
         <div><b>Generated:</b> {}</div>\
         </div>",
        escape_html(&info.class_name),
        escape_html(&info.test_name),
        escape_html(&info.display_name),
        escape_html(&info.timestamp()),
    );
}

fn render_legend(html: &mut String, model: &ReportModel) {
    let summary = &model.summary;
    let _ = write!(
        html,
        "<div class='legend'>\
         <span class='badge'>Rows: {}</span>\
         <span class='badge'>Cells: {}</span>\
         <span class='badge'>Diffs: {}</span>\
         <span class='badge' style='background:#fff;border:1px solid #ddd;'>Equal</span>\
         <span class='badge' style='background:#ffcccc;'>Different</span>\
         </div>",
        summary.rows_compared, summary.cells_compared, summary.diff_count,
    );
}

fn render_body(html: &mut String, model: &ReportModel) {
    html.push_str("<tbody>");
    for row in &model.rows {
        html.push_str("<tr>");
        if model.show_id_column {
            let id = row.id_value.as_deref().unwrap_or("");
            let _ = write!(html, "<td class='id'>{}</td>", escape_html(id));
        }
        for cell in &row.cells {
            render_cell(html, cell);
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody>");
}

fn render_cell(html: &mut String, cell: &CellDisplay) {
    match cell {
        CellDisplay::Equal { value } => {
            let _ = write!(html, "<td class='equal'>{}</td>", escape_html(value));
        }
        CellDisplay::Different {
            input,
            output,
            changes,
        } => {
            html.push_str("<td class='diff'>");
            html.push_str("<div><b>IN:</b> ");
            render_side(html, input, changes, Side::Input);
            html.push_str("</div><div><b>OUT:</b> ");
            render_side(html, output, changes, Side::Output);
            html.push_str("</div></td>");
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Side {
    Input,
    Output,
}

fn render_side(html: &mut String, value: &str, changes: &[DiffChange], side: Side) {
    if changes.is_empty() {
        html.push_str(&escape_html(value));
        return;
    }
    for change in changes {
        let text = escape_html(&change.value);
        match (side, change.added, change.removed) {
            (_, false, false) => html.push_str(&text),
            (Side::Input, false, true) => {
                let _ = write!(html, "<del>{}</del>", text);
            }
            (Side::Output, true, false) => {
                let _ = write!(html, "<ins>{}</ins>", text);
            }
            _ => {}
        }
    }
}
