//! External token document traversal
//!
//! The document is an untyped JSON tree (`serde_json::Value` is the closed
//! object/array/scalar/null variant). Lookups never fail loudly: a path that
//! cannot be walked simply yields `None`.

use serde_json::Value;

/// Maximum wrapper objects peeled off in one unwrap pass
pub const MAX_UNWRAP_DEPTH: usize = 5;

/// Keys that mark a metadata-plus-value wrapper, in preference order
const WRAPPER_KEYS: [&str; 2] = ["$value", "value"];

/// Peel one wrapper level, if the node is a wrapper object
fn unwrap_once(node: &Value) -> Option<&Value> {
    let map = node.as_object()?;
    WRAPPER_KEYS.iter().find_map(|key| map.get(*key))
}

/// Descend through `{ "$value": .. }` / `{ "value": .. }` wrappers.
///
/// At most [`MAX_UNWRAP_DEPTH`] levels are removed; anything deeper is
/// returned as the (still wrapped) object.
pub fn unwrap_token_value(node: &Value) -> &Value {
    let mut current = node;
    for _ in 0..MAX_UNWRAP_DEPTH {
        match unwrap_once(current) {
            Some(inner) => current = inner,
            None => return current,
        }
    }
    current
}

/// Look up a child key on a plain object node
fn child<'a>(node: &'a Value, segment: &str) -> Option<&'a Value> {
    node.as_object().and_then(|map| map.get(segment))
}

/// Walk a dotted path (`"colors.primary.hover"`) through the document.
///
/// Each segment is looked up on the current node; when that misses, the
/// node is unwrapped and the same segment retried, so a path may pass
/// through `{ "value": { .. } }` wrappers. Arrays are never indexed.
/// The final node is unwrapped before it is returned.
pub fn get_by_path<'a>(source: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = source;

    for segment in path.split('.') {
        current = match child(current, segment) {
            Some(next) => next,
            None => child(unwrap_token_value(current), segment)?,
        };
    }

    Some(unwrap_token_value(current))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unwrap_prefers_dollar_value() {
        let node = json!({ "$value": "#111111", "value": "#222222" });
        assert_eq!(unwrap_token_value(&node), &json!("#111111"));
    }

    #[test]
    fn test_unwrap_nested_wrappers() {
        let node = json!({ "$value": { "value": "8px" } });
        assert_eq!(unwrap_token_value(&node), &json!("8px"));
    }

    #[test]
    fn test_unwrap_stops_at_depth_limit() {
        let node = json!({ "value": { "value": { "value": { "value": { "value": { "value": "x" } } } } } });
        assert_eq!(unwrap_token_value(&node), &json!({ "value": "x" }));
    }

    #[test]
    fn test_unwrap_leaves_plain_nodes() {
        assert_eq!(unwrap_token_value(&json!(12)), &json!(12));
        let node = json!({ "foo": 1 });
        assert_eq!(unwrap_token_value(&node), &node);
    }

    #[test]
    fn test_get_by_path_plain() {
        let doc = json!({ "colors": { "primary": "#112233" } });
        assert_eq!(get_by_path(&doc, "colors.primary"), Some(&json!("#112233")));
        assert_eq!(get_by_path(&doc, "colors.secondary"), None);
        assert_eq!(get_by_path(&doc, "color.primary"), None);
    }

    #[test]
    fn test_get_by_path_through_wrappers() {
        let doc = json!({
            "typography": {
                "body": { "value": { "fontSize": { "$value": 14 } } }
            }
        });
        assert_eq!(get_by_path(&doc, "typography.body.fontSize"), Some(&json!(14)));
        assert_eq!(
            get_by_path(&doc, "typography.body.value.fontSize"),
            Some(&json!(14))
        );
    }

    #[test]
    fn test_get_by_path_numeric_segment_matches_object_key_only() {
        let doc = json!({ "spacing": { "2": "4px" }, "space": ["a", "b", "c"] });
        assert_eq!(get_by_path(&doc, "spacing.2"), Some(&json!("4px")));
        assert_eq!(get_by_path(&doc, "space.2"), None);
    }

    #[test]
    fn test_get_by_path_on_non_objects() {
        assert_eq!(get_by_path(&Value::Null, "colors.primary"), None);
        assert_eq!(get_by_path(&json!([1, 2]), "colors"), None);
        assert_eq!(get_by_path(&json!("text"), "colors"), None);
    }
}
