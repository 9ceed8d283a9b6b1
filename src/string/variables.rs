use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::hash::BuildHasher;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::{Map, Value};

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{(\$?[0-9A-Za-z_]+)\}").unwrap());

/// A source of values for [`parse_variables`]
pub trait Variables {
    /// The text to substitute for `key`, or `None` if the key is missing
    fn lookup(&self, key: &str) -> Option<String>;
}

impl Variables for Map<String, Value> {
    fn lookup(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

impl Variables for Value {
    fn lookup(&self, key: &str) -> Option<String> {
        self.as_object()?.lookup(key)
    }
}

impl<V: Display, S: BuildHasher> Variables for HashMap<String, V, S> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).map(ToString::to_string)
    }
}

impl<V: Display> Variables for BTreeMap<String, V> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).map(ToString::to_string)
    }
}

impl<T: Variables + ?Sized> Variables for &T {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

/// Replace `{name}` and `{$name}` placeholders with values from `variables`.
///
/// Names are ASCII letters, digits and `_`. A missing `{$name}` is removed,
/// a missing `{name}` stays as written.
pub fn parse_variables<V: Variables + ?Sized>(s: &str, variables: &V) -> String {
    PLACEHOLDER
        .replace_all(s, |caps: &Captures<'_>| {
            let raw = &caps[1];
            let (key, dollar) = match raw.strip_prefix('$') {
                Some(key) => (key, true),
                None => (raw, false),
            };

            match variables.lookup(key) {
                Some(value) => value,
                None if dollar => String::new(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
