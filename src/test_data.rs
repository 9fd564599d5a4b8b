//! Inline comparison cases with known results.
//!
//! Rows are written as JSON arrays so key order and nulls are explicit.

/// A source/target pair together with its configuration and expected outcome.
pub struct TestCase {
    pub name: &'static str,
    #[allow(dead_code)]
    pub description: &'static str,
    pub source_json: &'static str,
    pub target_json: &'static str,
    pub options: TestOptions,
    pub expected: ExpectedResult,
}

pub struct TestOptions {
    pub ignored_fields: &'static [&'static str],
    pub id_field: Option<&'static str>,
}

pub struct ExpectedResult {
    pub fields: &'static [&'static str],
    pub rows_compared: usize,
    pub cells_compared: usize,
    pub diff_count: usize,
    pub show_id_column: bool,
    pub id_values: &'static [&'static str],
}

const NO_OPTIONS: TestOptions = TestOptions {
    ignored_fields: &[],
    id_field: None,
};

pub mod basic {
    use super::*;

    pub const IDENTICAL_IGNORING_ID: TestCase = TestCase {
        name: "identical_ignoring_id",
        description: "Same single row, ID ignored",
        source_json: r#"[{"ID":"1","NAME":"John"}]"#,
        target_json: r#"[{"ID":"1","NAME":"John"}]"#,
        options: TestOptions {
            ignored_fields: &["ID"],
            id_field: None,
        },
        expected: ExpectedResult {
            fields: &["NAME"],
            rows_compared: 1,
            cells_compared: 1,
            diff_count: 0,
            show_id_column: false,
            id_values: &[],
        },
    };

    pub const ONE_VALUE_CHANGED: TestCase = TestCase {
        name: "one_value_changed",
        description: "NAME differs, ID ignored",
        source_json: r#"[{"ID":"1","NAME":"John"}]"#,
        target_json: r#"[{"ID":"1","NAME":"Jane"}]"#,
        options: TestOptions {
            ignored_fields: &["ID"],
            id_field: None,
        },
        expected: ExpectedResult {
            fields: &["NAME"],
            rows_compared: 1,
            cells_compared: 1,
            diff_count: 1,
            show_id_column: false,
            id_values: &[],
        },
    };

    pub const ID_COLUMN_SHOWN: TestCase = TestCase {
        name: "id_column_shown",
        description: "ID displayed as row identifier, never compared",
        source_json: r#"[{"ID":"7","NAME":"Sam"}]"#,
        target_json: r#"[{"ID":"7","NAME":"Sam"}]"#,
        options: TestOptions {
            ignored_fields: &[],
            id_field: Some("ID"),
        },
        expected: ExpectedResult {
            fields: &["NAME"],
            rows_compared: 1,
            cells_compared: 1,
            diff_count: 0,
            show_id_column: true,
            id_values: &["7"],
        },
    };

    pub const MULTIPLE_ROWS: TestCase = TestCase {
        name: "multiple_rows",
        description: "Five employees, two fields changed in different rows",
        source_json: r#"[
            {"EMP_ID":"1","FIRST_NAME":"John","LAST_NAME":"Doe","AGE":"30","GENDER":"Male"},
            {"EMP_ID":"2","FIRST_NAME":"Jane","LAST_NAME":"Smith","AGE":"25","GENDER":"Female"},
            {"EMP_ID":"3","FIRST_NAME":"Alex","LAST_NAME":"Brown","AGE":"41","GENDER":"Male"},
            {"EMP_ID":"4","FIRST_NAME":"Emily","LAST_NAME":"Lee","AGE":"35","GENDER":"Female"},
            {"EMP_ID":"5","FIRST_NAME":"Chris","LAST_NAME":"Clark","AGE":"29","GENDER":"Male"}
        ]"#,
        target_json: r#"[
            {"EMP_ID":"1","FIRST_NAME":"John","LAST_NAME":"Doe","AGE":"30","GENDER":"Male"},
            {"EMP_ID":"2","FIRST_NAME":"Jane","LAST_NAME":"Smith","AGE":"26","GENDER":"Female"},
            {"EMP_ID":"3","FIRST_NAME":"Alex","LAST_NAME":"Brown","AGE":"41","GENDER":"Male"},
            {"EMP_ID":"4","FIRST_NAME":"Emily","LAST_NAME":"Lewis","AGE":"35","GENDER":"Female"},
            {"EMP_ID":"5","FIRST_NAME":"Chris","LAST_NAME":"Clark","AGE":"29","GENDER":"Male"}
        ]"#,
        options: TestOptions {
            ignored_fields: &[],
            id_field: Some("EMP_ID"),
        },
        expected: ExpectedResult {
            fields: &["FIRST_NAME", "LAST_NAME", "AGE", "GENDER"],
            rows_compared: 5,
            cells_compared: 20,
            diff_count: 2,
            show_id_column: true,
            id_values: &["1", "2", "3", "4", "5"],
        },
    };

    pub const IGNORED_FIELDS_HIDE_DIFFS: TestCase = TestCase {
        name: "ignored_fields_hide_diffs",
        description: "AGE and GENDER differ but are ignored",
        source_json: r#"[{"EMP_ID":"1","FIRST_NAME":"John","AGE":"30","GENDER":"Male"}]"#,
        target_json: r#"[{"EMP_ID":"1","FIRST_NAME":"John","AGE":"31","GENDER":"Female"}]"#,
        options: TestOptions {
            ignored_fields: &["AGE", "GENDER"],
            id_field: None,
        },
        expected: ExpectedResult {
            fields: &["EMP_ID", "FIRST_NAME"],
            rows_compared: 1,
            cells_compared: 2,
            diff_count: 0,
            show_id_column: false,
            id_values: &[],
        },
    };
}

pub mod schema_edge_cases {
    use super::*;

    pub const DISJOINT_FIELDS: TestCase = TestCase {
        name: "disjoint_fields",
        description: "Each side has a field the other lacks",
        source_json: r#"[{"X":"1"}]"#,
        target_json: r#"[{"Y":"2"}]"#,
        options: NO_OPTIONS,
        expected: ExpectedResult {
            fields: &["X", "Y"],
            rows_compared: 1,
            cells_compared: 2,
            diff_count: 2,
            show_id_column: false,
            id_values: &[],
        },
    };

    pub const FIELD_ONLY_IN_LATER_ROW: TestCase = TestCase {
        name: "field_only_in_later_row",
        description: "A field first appears in the second target row",
        source_json: r#"[{"A":"1"},{"A":"2"}]"#,
        target_json: r#"[{"A":"1"},{"A":"2","EXTRA":"x"}]"#,
        options: NO_OPTIONS,
        expected: ExpectedResult {
            fields: &["A", "EXTRA"],
            rows_compared: 2,
            cells_compared: 4,
            diff_count: 1,
            show_id_column: false,
            id_values: &[],
        },
    };

    pub const NULL_VERSUS_EMPTY: TestCase = TestCase {
        name: "null_versus_empty",
        description: "Null on both sides is equal, null against empty text is not",
        source_json: r#"[{"A":null,"B":null}]"#,
        target_json: r#"[{"A":null,"B":""}]"#,
        options: NO_OPTIONS,
        expected: ExpectedResult {
            fields: &["A", "B"],
            rows_compared: 1,
            cells_compared: 2,
            diff_count: 1,
            show_id_column: false,
            id_values: &[],
        },
    };

    pub const ID_MISSING_ON_SOURCE: TestCase = TestCase {
        name: "id_missing_on_source",
        description: "Id taken from the target, then empty when absent on both sides",
        source_json: r#"[{"NAME":"a"},{"NAME":"b"}]"#,
        target_json: r#"[{"ID":"9","NAME":"a"},{"NAME":"b"}]"#,
        options: TestOptions {
            ignored_fields: &[],
            id_field: Some("ID"),
        },
        expected: ExpectedResult {
            fields: &["NAME"],
            rows_compared: 2,
            cells_compared: 2,
            diff_count: 0,
            show_id_column: true,
            id_values: &["9", ""],
        },
    };
}

pub mod size_edge_cases {
    use super::*;

    pub const TARGET_LONGER: TestCase = TestCase {
        name: "target_longer",
        description: "Two source rows against three target rows",
        source_json: r#"[{"A":"1"},{"A":"2"}]"#,
        target_json: r#"[{"A":"1"},{"A":"2"},{"A":"3","B":"x"}]"#,
        options: NO_OPTIONS,
        expected: ExpectedResult {
            fields: &["A"],
            rows_compared: 2,
            cells_compared: 2,
            diff_count: 0,
            show_id_column: false,
            id_values: &[],
        },
    };

    pub const EMPTY_SOURCE: TestCase = TestCase {
        name: "empty_source",
        description: "No source rows at all",
        source_json: "[]",
        target_json: r#"[{"A":"1"}]"#,
        options: NO_OPTIONS,
        expected: ExpectedResult {
            fields: &[],
            rows_compared: 0,
            cells_compared: 0,
            diff_count: 0,
            show_id_column: false,
            id_values: &[],
        },
    };

    pub const BOTH_EMPTY: TestCase = TestCase {
        name: "both_empty",
        description: "Nothing on either side",
        source_json: "[]",
        target_json: "[]",
        options: TestOptions {
            ignored_fields: &["ID"],
            id_field: Some("ID"),
        },
        expected: ExpectedResult {
            fields: &[],
            rows_compared: 0,
            cells_compared: 0,
            diff_count: 0,
            show_id_column: false,
            id_values: &[],
        },
    };
}
