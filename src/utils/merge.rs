//! Settings trees
//!
//! Settings arrive as plain key/value trees in three layers (defaults,
//! global, per-instance) and are merged recursively, later layers winning
//! key by key. Per-instance values come from `data-*` attributes where `__`
//! separates the segments of a nested key path.

use indexmap::IndexMap;
use serde_json::{Map, Number, Value};

/// Separator between key path segments in attribute names
pub const KEY_PATH_SEPARATOR: &str = "__";

/// Merge `source` into `target`
///
/// Objects merge key by key and arrays index by index; any other value
/// replaces what was there. A container in `source` replaces a scalar in
/// `target` before merging.
pub fn deep_merge(target: &mut Value, source: &Value) {
    match source {
        Value::Object(src) => {
            if !target.is_object() {
                *target = Value::Object(Map::new());
            }
            if let Value::Object(dst) = target {
                for (key, value) in src {
                    match value {
                        Value::Object(_) | Value::Array(_) => {
                            let slot = dst.entry(key.clone()).or_insert(Value::Null);
                            deep_merge(slot, value);
                        }
                        _ => {
                            dst.insert(key.clone(), value.clone());
                        }
                    }
                }
            }
        }
        Value::Array(src) => {
            if !target.is_array() {
                *target = Value::Array(Vec::new());
            }
            if let Value::Array(dst) = target {
                for (index, value) in src.iter().enumerate() {
                    if index >= dst.len() {
                        dst.resize(index + 1, Value::Null);
                    }
                    match value {
                        Value::Object(_) | Value::Array(_) => deep_merge(&mut dst[index], value),
                        _ => dst[index] = value.clone(),
                    }
                }
            }
        }
        _ => *target = source.clone(),
    }
}

/// Merge layers left to right into a fresh tree; `null` layers are absent
pub fn merge_layers(layers: &[&Value]) -> Value {
    let mut merged = Value::Object(Map::new());
    for layer in layers.iter().filter(|layer| !layer.is_null()) {
        deep_merge(&mut merged, layer);
    }
    merged
}

/// Build the per-instance tree from dataset entries
pub fn instance_tree(dataset: &IndexMap<String, String>) -> Value {
    let mut tree = Value::Object(Map::new());
    for (key_path, raw) in dataset {
        set_nested(&mut tree, key_path, parse_attr(raw));
    }
    tree
}

/// Set `value` at a `__`-separated key path, creating objects on the way
pub fn set_nested(tree: &mut Value, key_path: &str, value: Value) {
    let keys: Vec<&str> = key_path.split(KEY_PATH_SEPARATOR).collect();
    let mut current = tree;
    for (index, key) in keys.iter().enumerate() {
        if !current.is_object() {
            *current = Value::Object(Map::new());
        }
        let Value::Object(map) = current else {
            return;
        };
        if index == keys.len() - 1 {
            map.insert(key.to_string(), value);
            return;
        }
        current = map
            .entry(key.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }
}

/// Coerce an attribute string into a typed value
///
/// `"true"`/`"false"` become booleans, numbers written in canonical form
/// become numbers, and everything else stays a string (`"05"` included).
pub fn parse_attr(raw: &str) -> Value {
    match raw {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }
    if let Ok(number) = raw.parse::<f64>() {
        if number.is_finite() && canonical_number(number) == raw {
            if number.fract() == 0.0 && number.abs() < i64::MAX as f64 {
                return Value::Number(Number::from(number as i64));
            }
            if let Some(n) = Number::from_f64(number) {
                return Value::Number(n);
            }
        }
    }
    Value::String(raw.to_string())
}

fn canonical_number(number: f64) -> String {
    if number == 0.0 {
        // -0 prints as "0"
        return "0".to_string();
    }
    number.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_later_layers_win() {
        let defaults = json!({"layout": "horizontal", "itemsPerPage": 12});
        let global = json!({"itemsPerPage": 5});
        let instance = json!({"layout": "vertical"});
        let merged = merge_layers(&[&defaults, &global, &instance]);
        assert_eq!(merged, json!({"layout": "vertical", "itemsPerPage": 5}));
    }

    #[test]
    fn test_nested_objects_merge_key_by_key() {
        let mut target = json!({"theme": {"accent": "red", "border": 1}});
        deep_merge(&mut target, &json!({"theme": {"accent": "blue"}}));
        assert_eq!(target, json!({"theme": {"accent": "blue", "border": 1}}));
    }

    #[test]
    fn test_arrays_merge_by_index() {
        let mut target = json!({"list": [1, 2, 3]});
        deep_merge(&mut target, &json!({"list": [9]}));
        assert_eq!(target, json!({"list": [9, 2, 3]}));

        deep_merge(&mut target, &json!({"list": [0, 0, 0, 4]}));
        assert_eq!(target, json!({"list": [0, 0, 0, 4]}));
    }

    #[test]
    fn test_layers_are_not_mutated() {
        let defaults = json!({"nested": {"a": 1}});
        let instance = json!({"nested": {"b": 2}});
        let merged = merge_layers(&[&defaults, &instance]);
        assert_eq!(merged, json!({"nested": {"a": 1, "b": 2}}));
        assert_eq!(defaults, json!({"nested": {"a": 1}}));
    }

    #[test]
    fn test_null_layer_is_skipped() {
        let defaults = json!({"layout": "horizontal"});
        let merged = merge_layers(&[&defaults, &Value::Null]);
        assert_eq!(merged, defaults);
    }

    #[test]
    fn test_instance_tree_key_paths() {
        let mut dataset = IndexMap::new();
        dataset.insert("layout".to_string(), "select".to_string());
        dataset.insert("theme__accent".to_string(), "red".to_string());
        dataset.insert("theme__size".to_string(), "2".to_string());
        let tree = instance_tree(&dataset);
        assert_eq!(
            tree,
            json!({"layout": "select", "theme": {"accent": "red", "size": 2}})
        );
    }

    #[test]
    fn test_parse_attr() {
        assert_eq!(parse_attr("true"), json!(true));
        assert_eq!(parse_attr("false"), json!(false));
        assert_eq!(parse_attr("12"), json!(12));
        assert_eq!(parse_attr("2.5"), json!(2.5));
        assert_eq!(parse_attr("-3"), json!(-3));
        assert_eq!(parse_attr("05"), json!("05"));
        assert_eq!(parse_attr("1.50"), json!("1.50"));
        assert_eq!(parse_attr("NaN"), json!("NaN"));
        assert_eq!(parse_attr("inf"), json!("inf"));
        assert_eq!(parse_attr("stack"), json!("stack"));
        assert_eq!(parse_attr(""), json!(""));
    }
}
