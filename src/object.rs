//! Helpers for JSON objects.

use std::cmp::Ordering;

use serde_json::{Map, Value};

/// Number of own keys in the object.
pub fn size(obj: &Map<String, Value>) -> usize {
    obj.len()
}

/// The object's entries as pairs ordered by key.
pub fn sort_by_key(obj: &Map<String, Value>) -> Vec<(String, Value)> {
    let mut pairs = to_pairs(obj);
    pairs.sort_by(|(a, _), (b, _)| a.cmp(b));
    pairs
}

/// The object's entries as pairs ordered by value, then by key.
///
/// Values of different kinds order as null, bool, number, string, array,
/// object.
pub fn sort_by_value(obj: &Map<String, Value>) -> Vec<(String, Value)> {
    let mut pairs = to_pairs(obj);
    pairs.sort_by(|(ka, va), (kb, vb)| compare_values(va, vb).then_with(|| ka.cmp(kb)));
    pairs
}

/// Total order over JSON values used by [`sort_by_value`].
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or(0.0);
            let y = y.as_f64().unwrap_or(0.0);
            x.total_cmp(&y)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Array(x), Value::Array(y)) => x
            .iter()
            .zip(y)
            .map(|(x, y)| compare_values(x, y))
            .find(|ord| ord.is_ne())
            .unwrap_or_else(|| x.len().cmp(&y.len())),
        (Value::Object(x), Value::Object(y)) => x.len().cmp(&y.len()),
        _ => kind_rank(a).cmp(&kind_rank(b)),
    }
}

fn kind_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

fn to_pairs(obj: &Map<String, Value>) -> Vec<(String, Value)> {
    obj.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn test_size() {
        assert_eq!(size(&Map::new()), 0);
        assert_eq!(size(&object(json!({ "a": 1, "b": 2 }))), 2);
    }

    #[test]
    fn test_size_duplicate_keys() {
        let parsed: Map<String, Value> = serde_json::from_str(r#"{"a":1,"b":2,"a":1}"#).unwrap();
        assert_eq!(size(&parsed), 2);
    }

    #[test]
    fn test_sort_by_key() {
        let pairs = sort_by_key(&object(json!({ "b": 1, "c": 0, "a": 2 })));
        let keys: Vec<_> = pairs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["a", "b", "c"]);
    }

    #[test]
    fn test_sort_by_value() {
        let pairs = sort_by_value(&object(json!({
            "s": "x",
            "n2": 10,
            "n1": 2.5,
            "z": null,
            "t": true,
            "tie": 10,
        })));
        let keys: Vec<_> = pairs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["z", "t", "n1", "n2", "tie", "s"]);
    }
}
