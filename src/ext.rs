//! Method-call forms of the string, slice and number helpers.
//!
//! Import the traits you want (or [`crate::prelude`]) to write
//! `"fooBar".to_separated(None)` instead of `string::to_separated("fooBar", None)`.
//! Every method forwards to the free function with default options.

use std::hash::Hash;

use serde_json::Value;

use crate::number::{self, NumberFormat};
use crate::string::{self, TruncateOptions, Variables};
use crate::{array, util};

pub trait StrExt {
    fn parse_variables<V: Variables + ?Sized>(&self, variables: &V) -> String;
    fn trim_chars(&self, chars: Option<&str>) -> String;
    fn to_camel_case(&self) -> String;
    fn to_separated(&self, separator: Option<&str>) -> String;
    fn to_upper_case_words(&self) -> String;
    fn nl2br(&self) -> String;
    fn strip_tags(&self) -> String;
    fn parse_links(&self) -> String;
    fn truncate_words(&self, length: usize) -> String;
    fn escape_html(&self) -> String;
    fn unescape_html(&self) -> String;
    fn insert_at(&self, insert: &str, index: usize) -> String;
    fn time_string_to_seconds(&self) -> Option<u64>;
    fn is_numeric(&self) -> bool;
}

impl StrExt for str {
    fn parse_variables<V: Variables + ?Sized>(&self, variables: &V) -> String {
        string::parse_variables(self, variables)
    }

    fn trim_chars(&self, chars: Option<&str>) -> String {
        string::trim(self, chars)
    }

    fn to_camel_case(&self) -> String {
        string::to_camel_case(self)
    }

    fn to_separated(&self, separator: Option<&str>) -> String {
        string::to_separated(self, separator)
    }

    fn to_upper_case_words(&self) -> String {
        string::to_upper_case_words(self)
    }

    fn nl2br(&self) -> String {
        string::nl2br(self)
    }

    fn strip_tags(&self) -> String {
        string::strip_tags(self)
    }

    fn parse_links(&self) -> String {
        string::parse_links(self)
    }

    fn truncate_words(&self, length: usize) -> String {
        string::truncate(self, &TruncateOptions::with_length(length))
    }

    fn escape_html(&self) -> String {
        string::escape_html(self)
    }

    fn unescape_html(&self) -> String {
        string::unescape_html(self)
    }

    fn insert_at(&self, insert: &str, index: usize) -> String {
        string::insert_at(self, insert, index)
    }

    fn time_string_to_seconds(&self) -> Option<u64> {
        util::time::time_string_to_seconds(self)
    }

    fn is_numeric(&self) -> bool {
        string::is_numeric(self)
    }
}

pub trait SliceExt<T> {
    fn unique(&self) -> Vec<T>;
}

impl<T: Eq + Hash + Clone> SliceExt<T> for [T] {
    fn unique(&self) -> Vec<T> {
        array::unique(self)
    }
}

/// Type-sensitive dedup for JSON arrays
pub trait ValuesExt {
    fn unique_values(&self) -> Vec<Value>;
}

impl ValuesExt for [Value] {
    fn unique_values(&self) -> Vec<Value> {
        array::unique_values(self)
    }
}

pub trait NumberExt {
    /// [`number::format`] with default separators and `decimals` places
    fn format_number(&self, decimals: u32) -> String;
    fn to_time_string(&self) -> String;
}

impl NumberExt for f64 {
    fn format_number(&self, decimals: u32) -> String {
        number::format(*self, &NumberFormat::with_decimals(decimals))
    }

    fn to_time_string(&self) -> String {
        number::seconds_to_time_string(*self)
    }
}

pub trait BytesExt {
    fn to_byte_string(&self) -> String;
}

impl BytesExt for u64 {
    fn to_byte_string(&self) -> String {
        number::bytes_to_string(*self)
    }
}
