use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static LOWER_UPPER: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z])([A-Z])").unwrap());
static LOWER_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z])([0-9])").unwrap());

/// Default separator for [`to_separated`]
pub const DEFAULT_SEPARATOR: &str = "-";

/// Convert a camelCased string to lowercase words joined by `separator`.
///
/// `thisIsCamelCase1` becomes `this-is-camel-case-1`.
pub fn to_separated(s: &str, separator: Option<&str>) -> String {
    let separator = separator.filter(|sep| !sep.is_empty()).unwrap_or(DEFAULT_SEPARATOR);
    let join = |caps: &Captures<'_>| format!("{}{}{}", &caps[1], separator, &caps[2]);

    let split = LOWER_UPPER.replace_all(s, join).to_lowercase();
    LOWER_DIGIT.replace_all(&split, join).into_owned()
}

/// Convert a `-`, `_` or whitespace separated string to camelCase.
///
/// The first word is left as it is; every later word gets its first
/// character upper-cased.
pub fn to_camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut upper_next = false;
    for c in s.chars() {
        if c == '-' || c == '_' || c.is_whitespace() {
            upper_next = !out.is_empty();
            continue;
        }
        if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Upper-case the first letter of every whitespace-delimited word.
pub fn to_upper_case_words(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if at_word_start && !c.is_whitespace() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c.is_whitespace();
    }
    out
}
