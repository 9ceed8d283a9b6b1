//! Number formatting helpers.

use serde::{Deserialize, Serialize};

pub use crate::util::time::seconds_to_time_string;

/// How [`format`] renders a number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberFormat {
    pub decimals: u32,
    pub decimal_point: String,
    pub thousands_separator: String,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            decimals: 2,
            decimal_point: ".".to_string(),
            thousands_separator: ",".to_string(),
        }
    }
}

impl NumberFormat {
    pub fn with_decimals(decimals: u32) -> Self {
        Self {
            decimals,
            ..Self::default()
        }
    }
}

/// Format `num` with grouped thousands and a fixed number of decimals.
///
/// Rounds half up (towards positive infinity). Non-finite input formats as 0.
pub fn format(num: f64, fmt: &NumberFormat) -> String {
    let n = if num.is_finite() { num } else { 0.0 };
    let precision = fmt.decimals as usize;

    let factor = 10f64.powi(fmt.decimals as i32);
    let mut rounded = (n * factor + 0.5).floor() / factor;
    if !rounded.is_finite() {
        rounded = n;
    }
    if rounded == 0.0 {
        // avoid "-0.00"
        rounded = 0.0;
    }

    let fixed = format!("{rounded:.precision$}");
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let mut out = group_thousands(int_part, &fmt.thousands_separator);
    if let Some(frac) = frac_part {
        out.push_str(&fmt.decimal_point);
        out.push_str(frac);
    }
    out
}

/// Like [`format`], but reads the number from text first.
///
/// Everything except digits, signs, exponent markers and dots is dropped
/// before parsing; unparseable input formats as 0.
pub fn format_str(s: &str, fmt: &NumberFormat) -> String {
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | 'E' | 'e' | '.'))
        .collect();
    format(cleaned.parse().unwrap_or(0.0), fmt)
}

/// Render a byte count as `b`, `kb` or `MB`.
pub fn bytes_to_string(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{bytes} b");
    }

    let kilobytes = bytes / 1024;
    if kilobytes <= 1024 {
        return format!("{kilobytes} kb");
    }

    format!("{} MB", kilobytes / 1024)
}

fn group_thousands(int_part: &str, separator: &str) -> String {
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", int_part),
    };

    let mut out = String::with_capacity(int_part.len() + digits.len() / 3 * separator.len());
    out.push_str(sign);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(c);
    }
    out
}
