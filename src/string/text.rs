use serde::{Deserialize, Serialize};

/// Options for [`truncate`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TruncateOptions {
    /// Maximum number of characters kept before the suffix
    pub length: usize,
    pub suffix: String,
}

impl Default for TruncateOptions {
    fn default() -> Self {
        Self {
            length: 72,
            suffix: "...".to_string(),
        }
    }
}

impl TruncateOptions {
    pub fn with_length(length: usize) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }
}

/// Shorten `s` to at most `length` characters, cutting at the last space
/// when there is one, and append the suffix.
pub fn truncate(s: &str, options: &TruncateOptions) -> String {
    if s.chars().count() <= options.length {
        return s.to_string();
    }

    let cut: String = s.chars().take(options.length).collect();
    let head = match cut.rfind(' ') {
        Some(space) => &cut[..space],
        None => cut.as_str(),
    };
    format!("{head}{}", options.suffix)
}

/// Insert `insert` at character `index` (clamped to the string length).
pub fn insert_at(s: &str, insert: &str, index: usize) -> String {
    let byte = s.char_indices().nth(index).map_or(s.len(), |(i, _)| i);
    let mut out = String::with_capacity(s.len() + insert.len());
    out.push_str(&s[..byte]);
    out.push_str(insert);
    out.push_str(&s[byte..]);
    out
}

/// Whether `s` holds a finite decimal number, ignoring surrounding whitespace.
pub fn is_numeric(s: &str) -> bool {
    let s = s.trim();
    // f64::from_str also accepts "inf" and "NaN"
    if !s.bytes().any(|b| b.is_ascii_digit()) {
        return false;
    }
    s.parse::<f64>().is_ok_and(f64::is_finite)
}
