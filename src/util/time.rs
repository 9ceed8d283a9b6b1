/// Multipliers for seconds, minutes and hours fields, right to left
const FIELD_SECONDS: [u64; 3] = [1, 60, 3600];

/// Convert `hh:mm:ss` (or `mm:ss`, or `ss`) to a number of seconds.
///
/// When the string has no `:` the fields may be separated with `.` instead.
/// Each field is read up to its first non-digit. Returns `None` for more
/// than three fields, for a field with no leading digits, or when the
/// total does not fit in a `u64`.
pub fn time_string_to_seconds(s: &str) -> Option<u64> {
    let separator = if s.contains(':') { ':' } else { '.' };
    let fields: Vec<&str> = s.split(separator).collect();
    if fields.len() > FIELD_SECONDS.len() {
        return None;
    }

    fields
        .iter()
        .rev()
        .zip(FIELD_SECONDS)
        .try_fold(0u64, |total, (field, multiplier)| {
            leading_integer(field)?
                .checked_mul(multiplier)?
                .checked_add(total)
        })
}

/// Convert a number of seconds to `h:mm:ss`.
///
/// Seconds are rounded before splitting so the output never shows `:60`.
pub fn seconds_to_time_string(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.round() as u64
    } else {
        0
    };

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    format!("{hours}:{minutes:02}:{secs:02}")
}

/// Parse the leading run of ASCII digits, skipping leading whitespace.
fn leading_integer(field: &str) -> Option<u64> {
    let field = field.trim_start();
    let end = field
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(field.len());
    field[..end].parse().ok()
}
