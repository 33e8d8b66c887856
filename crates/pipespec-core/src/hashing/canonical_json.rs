//! Canonical JSON minimal: objetos con claves ordenadas y sin espacios.
//!
//! Es la forma en que se almacenan los parámetros estructurados dentro de
//! las execution properties, y la base del fingerprint de instancias.

use serde_json::Value;
use std::collections::BTreeMap;

pub fn to_canonical_json(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        // Display de Value::String produce el literal JSON escapado
        Value::String(_) => value.to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(to_canonical_json).collect();
            format!("[{}]", items.join(","))
        }
        Value::Object(map) => {
            let mut tree = BTreeMap::new();
            for (k, v) in map {
                tree.insert(k, to_canonical_json(v));
            }
            let items: Vec<String> = tree
                .into_iter()
                .map(|(k, v)| format!("{}:{}", Value::String(k.clone()), v))
                .collect();
            format!("{{{}}}", items.join(","))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::to_canonical_json;
    use serde_json::json;

    #[test]
    fn primitives() {
        assert_eq!(to_canonical_json(&json!(null)), "null");
        assert_eq!(to_canonical_json(&json!(true)), "true");
        assert_eq!(to_canonical_json(&json!(10)), "10");
        assert_eq!(to_canonical_json(&json!("a\"b")), "\"a\\\"b\"");
    }

    #[test]
    fn nested_objects_are_sorted() {
        let v = json!({"splits": [{"pattern": "p1", "name": "n1"}], "a": {"z": 1, "b": 2}});
        assert_eq!(to_canonical_json(&v),
                   r#"{"a":{"b":2,"z":1},"splits":[{"name":"n1","pattern":"p1"}]}"#);
    }
}
