use similar::{ChangeTag, TextDiff};
use crate::types::*;
use crate::utils::FieldSet;

/// Compare two row-sets positionally, field by field.
///
/// Only the first `min(source.len(), target.len())` rows on each side take
/// part; surplus rows on the longer side are left for the caller to flag.
/// The compared fields are the union of keys seen in those rows (source
/// before target, row by row, first-seen order) minus the ignored fields and
/// the id field. Never fails: a field missing on one side is a diff.
pub fn compare_row_sets(
    source_rows: &[Record],
    target_rows: &[Record],
    config: &ComparisonConfig,
) -> ComparisonResult {
    let rows_compared = source_rows.len().min(target_rows.len());
    let source_rows = &source_rows[..rows_compared];
    let target_rows = &target_rows[..rows_compared];

    let mut observed = FieldSet::new();
    for (source_row, target_row) in source_rows.iter().zip(target_rows) {
        observed.extend(source_row.keys());
        observed.extend(target_row.keys());
    }

    let id_field = config
        .id_field
        .as_deref()
        .filter(|id| observed.contains(id));

    let fields: Vec<String> = observed
        .into_vec()
        .into_iter()
        .filter(|field| !config.excludes(field))
        .collect();

    let mut rows = Vec::with_capacity(rows_compared);
    let mut cells_compared = 0;
    let mut diff_count = 0;

    for (source_row, target_row) in source_rows.iter().zip(target_rows) {
        let id_value = id_field.map(|id| {
            source_row
                .get(id)
                .or_else(|| target_row.get(id))
                .unwrap_or("")
                .to_string()
        });

        let cells: Vec<Cell> = fields
            .iter()
            .map(|field| Cell::new(source_row.get(field), target_row.get(field)))
            .collect();

        cells_compared += cells.len();
        diff_count += cells.iter().filter(|cell| !cell.equal).count();
        rows.push(ComparedRow { id_value, cells });
    }

    tracing::debug!(
        rows_compared,
        cells_compared,
        diff_count,
        fields = fields.len(),
        "compared row sets"
    );

    ComparisonResult {
        fields,
        rows,
        rows_compared,
        cells_compared,
        diff_count,
    }
}

/// Like [`compare_row_sets`], treating an absent side as an empty row-set.
pub fn compare_optional(
    source_rows: Option<&[Record]>,
    target_rows: Option<&[Record]>,
    config: &ComparisonConfig,
) -> ComparisonResult {
    compare_row_sets(
        source_rows.unwrap_or_default(),
        target_rows.unwrap_or_default(),
        config,
    )
}

/// Word-level diff between two cell values.
pub fn diff_text_internal(old: &str, new: &str) -> Vec<DiffChange> {
    let diff = TextDiff::from_words(old, new);
    let mut changes = Vec::new();

    for change in diff.iter_all_changes() {
        let (added, removed) = match change.tag() {
            ChangeTag::Delete => (false, true),
            ChangeTag::Insert => (true, false),
            ChangeTag::Equal => (false, false),
        };

        changes.push(DiffChange {
            added,
            removed,
            value: change.value().to_string(),
        });
    }
    changes
}
