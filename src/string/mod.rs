//! String helpers: interpolation, random strings, trimming, case
//! conversion and small HTML text transforms.

mod case;
mod html;
pub mod random;
mod text;
mod trim;
mod variables;

pub use case::{to_camel_case, to_separated, to_upper_case_words, DEFAULT_SEPARATOR};
pub use html::{escape_html, nl2br, parse_links, strip_tags, unescape_html};
pub use random::{random, random_with, RandomOptions};
pub use text::{insert_at, is_numeric, truncate, TruncateOptions};
pub use trim::{trim, DEFAULT_CHARLIST};
pub use variables::{parse_variables, Variables};

pub use crate::util::time::time_string_to_seconds;
