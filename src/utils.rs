use ahash::AHashSet;

/// Insertion-ordered set of field names.
///
/// The union of observed keys is rendered as table columns, so the order in
/// which names are first seen has to survive.
#[derive(Debug, Default)]
pub struct FieldSet {
    order: Vec<String>,
    seen: AHashSet<String>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &str) {
        if !self.seen.contains(field) {
            self.seen.insert(field.to_string());
            self.order.push(field.to_string());
        }
    }

    pub fn extend<'a>(&mut self, fields: impl IntoIterator<Item = &'a str>) {
        for field in fields {
            self.insert(field);
        }
    }

    pub fn contains(&self, field: &str) -> bool {
        self.seen.contains(field)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.order
    }
}

pub fn or_empty(value: Option<&str>) -> &str {
    value.unwrap_or("")
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Replace anything outside `[A-Za-z0-9._-]` so the name is usable as a single
/// path component. Leading dots also become `_`, so `..` and hidden names
/// cannot be produced. Empty input yields `_`.
pub fn safe_file_name(raw: &str) -> String {
    let mut leading = true;
    let name: String = raw
        .chars()
        .map(|c| {
            let keep = c.is_ascii_alphanumeric() || matches!(c, '_' | '-') || (c == '.' && !leading);
            leading = leading && c == '.';
            if keep {
                c
            } else {
                '_'
            }
        })
        .collect();
    if name.is_empty() {
        "_".to_string()
    } else {
        name
    }
}
