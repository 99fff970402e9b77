//! Pointer walking.
//!
//! A walk consumes a path token by token, recording for each token the
//! container it was looked up in and the value it resolved to. Mutating
//! callers use [`parent_mut`] instead, which stops one token short and hands
//! back the container together with the final token.

use serde_json::Value;

use crate::types::{Step, WalkMode};
use crate::util::{format_json_pointer, is_valid_index};
use crate::JsonPointerError;

fn member<'v>(node: &'v Value, token: &str) -> Option<&'v Value> {
    match node {
        Value::Object(map) => map.get(token),
        Value::Array(arr) if is_valid_index(token) => {
            token.parse::<usize>().ok().and_then(|idx| arr.get(idx))
        }
        _ => None,
    }
}

fn member_mut<'v>(node: &'v mut Value, token: &str) -> Option<&'v mut Value> {
    match node {
        Value::Object(map) => map.get_mut(token),
        Value::Array(arr) if is_valid_index(token) => {
            token.parse::<usize>().ok().and_then(|idx| arr.get_mut(idx))
        }
        _ => None,
    }
}

fn invalid_pointer(path: &[String]) -> JsonPointerError {
    JsonPointerError::InvalidPointer(format_json_pointer(path))
}

/// Walk `path` through `doc`, returning one [`Step`] per token.
///
/// The root path yields no steps. Array members are only reachable through
/// canonical indexes, so `-` never resolves to a node.
///
/// # Errors
///
/// [`JsonPointerError::InvalidPointer`] when a token that must exist under
/// `mode` does not.
///
/// # Example
///
/// ```
/// use docpatch_json_pointer::{parse_json_pointer, walk, WalkMode};
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": 1}});
/// let path = parse_json_pointer("/a/c").unwrap();
///
/// let steps = walk(&doc, &path, WalkMode::Permissive).unwrap();
/// assert_eq!(steps[1].parent, &json!({"b": 1}));
/// assert_eq!(steps[1].node, None);
///
/// assert!(walk(&doc, &path, WalkMode::Strict).is_err());
/// ```
pub fn walk<'v, 'p>(
    doc: &'v Value,
    path: &'p [String],
    mode: WalkMode,
) -> Result<Vec<Step<'v, 'p>>, JsonPointerError> {
    let mut steps = Vec::with_capacity(path.len());
    let mut current = doc;
    for (idx, token) in path.iter().enumerate() {
        let is_last = idx + 1 == path.len();
        let node = member(current, token);
        steps.push(Step {
            parent: current,
            node,
            token: token.as_str(),
        });
        match node {
            Some(next) => current = next,
            None if is_last && mode == WalkMode::Permissive => {}
            None => return Err(invalid_pointer(path)),
        }
    }
    Ok(steps)
}

/// Resolve every ancestor of the final token and return the parent container
/// mutably, paired with the final token.
///
/// Returns `Ok(None)` for the root path, which has no parent. The returned
/// parent is not guaranteed to be a container; callers decide what a scalar
/// parent means for them.
///
/// # Errors
///
/// [`JsonPointerError::InvalidPointer`] when an ancestor does not exist.
pub fn parent_mut<'v, 'p>(
    doc: &'v mut Value,
    path: &'p [String],
) -> Result<Option<(&'v mut Value, &'p str)>, JsonPointerError> {
    let Some((last, ancestors)) = path.split_last() else {
        return Ok(None);
    };
    let mut current = doc;
    for token in ancestors {
        current = member_mut(current, token).ok_or_else(|| invalid_pointer(path))?;
    }
    Ok(Some((current, last.as_str())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::parse_json_pointer;
    use serde_json::json;

    fn path(pointer: &str) -> Vec<String> {
        parse_json_pointer(pointer).unwrap()
    }

    #[test]
    fn walk_root_yields_no_steps() {
        let doc = json!({"a": 1});
        assert!(walk(&doc, &[], WalkMode::Strict).unwrap().is_empty());
    }

    #[test]
    fn walk_records_parent_node_and_token() {
        let doc = json!({"a": {"b": {"c": 42}}});
        let p = path("/a/b/c");
        let steps = walk(&doc, &p, WalkMode::Strict).unwrap();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].parent, &doc);
        assert_eq!(steps[0].node, Some(&json!({"b": {"c": 42}})));
        assert_eq!(steps[2].parent, &json!({"c": 42}));
        assert_eq!(steps[2].node, Some(&json!(42)));
        assert_eq!(steps[2].token, "c");
    }

    #[test]
    fn walk_strict_rejects_missing_final_member() {
        let doc = json!({"a": 42});
        assert_eq!(
            walk(&doc, &path("/z"), WalkMode::Strict),
            Err(JsonPointerError::InvalidPointer("/z".to_string()))
        );
    }

    #[test]
    fn walk_permissive_allows_missing_final_member() {
        let doc = json!({"a": 42});
        let p = path("/z");
        let steps = walk(&doc, &p, WalkMode::Permissive).unwrap();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].node, None);
    }

    #[test]
    fn walk_permissive_rejects_missing_ancestor() {
        let doc = json!({"q": {"bar": 2}});
        assert_eq!(
            walk(&doc, &path("/a/b"), WalkMode::Permissive),
            Err(JsonPointerError::InvalidPointer("/a/b".to_string()))
        );
    }

    #[test]
    fn walk_array_indexes() {
        let doc = json!({"arr": [10, 20, 30]});
        let p = path("/arr/1");
        let steps = walk(&doc, &p, WalkMode::Strict).unwrap();
        assert!(steps[1].parent.is_array());
        assert_eq!(steps[1].node, Some(&json!(20)));

        assert!(walk(&doc, &path("/arr/3"), WalkMode::Strict).is_err());
        assert!(walk(&doc, &path("/arr/-"), WalkMode::Strict).is_err());
        assert!(walk(&doc, &path("/arr/01"), WalkMode::Strict).is_err());

        let p = path("/arr/-");
        let steps = walk(&doc, &p, WalkMode::Permissive).unwrap();
        assert_eq!(steps[1].node, None);
    }

    #[test]
    fn walk_through_scalar() {
        let doc = json!({"s": "text"});
        assert!(walk(&doc, &path("/s/0"), WalkMode::Strict).is_err());
        let p = path("/s/0");
        let steps = walk(&doc, &p, WalkMode::Permissive).unwrap();
        assert_eq!(steps[1].parent, &json!("text"));
        assert_eq!(steps[1].node, None);
        assert!(walk(&doc, &path("/s/0/x"), WalkMode::Permissive).is_err());
    }

    #[test]
    fn parent_mut_root_has_no_parent() {
        let mut doc = json!({});
        assert!(parent_mut(&mut doc, &[]).unwrap().is_none());
    }

    #[test]
    fn parent_mut_returns_container_and_token() {
        let mut doc = json!({"a": {"b": [1, 2]}});
        let p = path("/a/b/-");
        let (parent, token) = parent_mut(&mut doc, &p).unwrap().unwrap();
        assert_eq!(token, "-");
        parent.as_array_mut().unwrap().push(json!(3));
        assert_eq!(doc, json!({"a": {"b": [1, 2, 3]}}));
    }

    #[test]
    fn parent_mut_rejects_missing_ancestor() {
        let mut doc = json!({"a": {}});
        assert_eq!(
            parent_mut(&mut doc, &path("/a/b/c")).unwrap_err(),
            JsonPointerError::InvalidPointer("/a/b/c".to_string())
        );
    }
}
