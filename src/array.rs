//! Helpers for slices.

use std::collections::HashSet;
use std::hash::Hash;

use serde_json::Value;

/// Distinct elements of `items`, first occurrence wins and order is kept.
pub fn unique<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// Type-sensitive [`unique`] for mixed JSON arrays.
///
/// `1` and `"1"` are different values and both survive, while numbers
/// compare by value, so `1` and `1.0` are the same.
pub fn unique_values(items: &[Value]) -> Vec<Value> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(ValueKey::of(item)))
        .cloned()
        .collect()
}

#[derive(PartialEq, Eq, Hash)]
enum ValueKey {
    /// Bits of the `f64` value, with `-0.0` folded into `0.0`
    Number(u64),
    /// Serialized JSON text of anything else
    Other(String),
}

impl ValueKey {
    fn of(value: &Value) -> Self {
        match value.as_f64() {
            Some(n) => {
                let n = if n == 0.0 { 0.0 } else { n };
                Self::Number(n.to_bits())
            }
            _ => Self::Other(value.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unique() {
        assert_eq!(unique(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
        assert_eq!(unique::<u8>(&[]), Vec::<u8>::new());
        assert_eq!(unique(&["a", "b", "a"]), vec!["a", "b"]);
    }

    #[test]
    fn test_unique_values_type_sensitive() {
        let input = json!([1, 2, 3, 0, "0", "1", "2", "3", "4", "5", 0, 1, 2, 3, 4]);
        let result = unique_values(input.as_array().unwrap());
        assert_eq!(result, json!([1, 2, 3, 0, "0", "1", "2", "3", "4", "5", 4]).as_array().unwrap().clone());
        assert!(result.contains(&json!(1)));
        assert!(result.contains(&json!("1")));
    }

    #[test]
    fn test_unique_values_numbers_by_value() {
        let input = json!([1, 1.0, 0, -0.0]);
        assert_eq!(unique_values(input.as_array().unwrap()), vec![json!(1), json!(0)]);

        let input = json!([2.5, "2.5", 2.50, -3, -3.0]);
        assert_eq!(unique_values(input.as_array().unwrap()), vec![json!(2.5), json!("2.5"), json!(-3)]);
    }

    #[test]
    fn test_unique_values_nested() {
        let input = json!([{ "a": 1 }, { "a": 1 }, [1], null, null]);
        assert_eq!(unique_values(input.as_array().unwrap()).len(), 3);
    }
}
