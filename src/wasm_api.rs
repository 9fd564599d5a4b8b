use wasm_bindgen::prelude::*;
use serde::Serialize;

use crate::core::compare_row_sets;
use crate::error::Result;
use crate::html::{HtmlRenderer, ReportRenderer};
use crate::parse::read_csv_str;
use crate::report::TestInfo;
use crate::types::{ComparisonConfig, ComparisonResult, RowSet};

fn parse_config(config_json: &str) -> Result<ComparisonConfig> {
    if config_json.trim().is_empty() {
        return Ok(ComparisonConfig::default());
    }
    Ok(serde_json::from_str(config_json)?)
}

/// Compare two JSON arrays of row objects. An empty config string means the
/// default configuration.
pub fn compare_json(source_json: &str, target_json: &str, config_json: &str) -> Result<ComparisonResult> {
    let source: RowSet = serde_json::from_str(source_json)?;
    let target: RowSet = serde_json::from_str(target_json)?;
    let config = parse_config(config_json)?;
    Ok(compare_row_sets(&source, &target, &config))
}

/// Compare two CSV documents with header lines.
pub fn compare_csv(source_csv: &str, target_csv: &str, config_json: &str) -> Result<ComparisonResult> {
    let source = read_csv_str(source_csv)?;
    let target = read_csv_str(target_csv)?;
    let config = parse_config(config_json)?;
    Ok(compare_row_sets(&source, &target, &config))
}

/// Compare two JSON row arrays and render the HTML report.
pub fn render_html_json(
    source_json: &str,
    target_json: &str,
    config_json: &str,
    title: &str,
) -> Result<String> {
    let source: RowSet = serde_json::from_str(source_json)?;
    let target: RowSet = serde_json::from_str(target_json)?;
    let config = parse_config(config_json)?;
    let result = compare_row_sets(&source, &target, &config);
    let renderer = match config.id_field.as_deref() {
        Some(id_field) => HtmlRenderer::new().with_id_label(id_field),
        None => HtmlRenderer::new(),
    };
    let info = TestInfo::new("browser", title);
    Ok(renderer.render(&info, &result))
}

fn to_js<T: Serialize>(value: &T) -> std::result::Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value
        .serialize(&serializer)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
pub fn compare_rows(source_json: &str, target_json: &str, config_json: &str) -> std::result::Result<JsValue, JsValue> {
    let result = compare_json(source_json, target_json, config_json)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_js(&result)
}

#[wasm_bindgen]
pub fn compare_csv_rows(source_csv: &str, target_csv: &str, config_json: &str) -> std::result::Result<JsValue, JsValue> {
    let result = compare_csv(source_csv, target_csv, config_json)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_js(&result)
}

#[wasm_bindgen]
pub fn render_report(
    source_json: &str,
    target_json: &str,
    config_json: &str,
    title: &str,
) -> std::result::Result<String, JsValue> {
    render_html_json(source_json, target_json, config_json, title)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
