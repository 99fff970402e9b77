use serde_json::Value;

use crate::types::WalkMode;
use crate::util::parse_json_pointer;
use crate::walk::walk;
use crate::JsonPointerError;

/// Get the value at `path`, which must exist in full.
///
/// The empty path returns `doc` itself.
///
/// # Example
///
/// ```
/// use docpatch_json_pointer::get;
/// use serde_json::json;
///
/// let doc = json!({"foo": {"bar": 42}});
/// let val = get(&doc, &["foo".to_string(), "bar".to_string()]);
/// assert_eq!(val, Ok(&json!(42)));
///
/// assert!(get(&doc, &["missing".to_string()]).is_err());
/// ```
pub fn get<'v>(doc: &'v Value, path: &[String]) -> Result<&'v Value, JsonPointerError> {
    let steps = walk(doc, path, WalkMode::Strict)?;
    Ok(steps.last().and_then(|step| step.node).unwrap_or(doc))
}

/// Parse `pointer` and [`get`] the value it addresses.
pub fn get_by_pointer<'v>(doc: &'v Value, pointer: &str) -> Result<&'v Value, JsonPointerError> {
    let path = parse_json_pointer(pointer)?;
    get(doc, &path)
}
