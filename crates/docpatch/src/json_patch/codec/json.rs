//! JSON codec for JSON Patch operations.
//!
//! Converts operations to/from `serde_json::Value` in the RFC 6902 record
//! format `{ "op", "path", "value"?, "from"? }`. Members a record's `op` does
//! not use are ignored.

use docpatch_json_pointer::{format_json_pointer, parse_json_pointer};
use serde_json::{json, Map, Value};

use crate::json_patch::types::{Op, PatchError};

// ── Path helpers ──────────────────────────────────────────────────────────

fn encode_path(path: &[String]) -> Value {
    Value::String(format_json_pointer(path))
}

fn decode_path(obj: &Map<String, Value>, key: &str, op: &str) -> Result<Vec<String>, PatchError> {
    let pointer = obj
        .get(key)
        .ok_or_else(|| PatchError::InvalidOperation(format!("{op} requires '{key}'")))?
        .as_str()
        .ok_or_else(|| PatchError::InvalidOperation(format!("'{key}' must be a string")))?;
    Ok(parse_json_pointer(pointer)?)
}

fn decode_value(obj: &Map<String, Value>, op: &str) -> Result<Value, PatchError> {
    obj.get("value")
        .cloned()
        .ok_or_else(|| PatchError::InvalidOperation(format!("{op} requires 'value'")))
}

// ── Serialization ─────────────────────────────────────────────────────────

/// Serialize an `Op` to a `serde_json::Value` in the JSON Patch format.
pub fn to_json(op: &Op) -> Value {
    match op {
        Op::Add { path, value } | Op::Replace { path, value } | Op::Test { path, value } => json!({
            "op": op.op_name(),
            "path": encode_path(path),
            "value": value
        }),
        Op::Remove { path } => json!({
            "op": "remove",
            "path": encode_path(path)
        }),
        Op::Copy { path, from } | Op::Move { path, from } => json!({
            "op": op.op_name(),
            "from": encode_path(from),
            "path": encode_path(path)
        }),
    }
}

/// Serialize a list of operations to a JSON Patch array.
pub fn to_json_patch(ops: &[Op]) -> Value {
    Value::Array(ops.iter().map(to_json).collect())
}

// ── Deserialization ───────────────────────────────────────────────────────

/// Deserialize one operation record.
///
/// The `op` member is checked first: a record whose `op` is missing or not
/// one of the six RFC 6902 names is an [`PatchError::UnsupportedOperation`]
/// regardless of its other members.
pub fn from_json(v: &Value) -> Result<Op, PatchError> {
    let obj = v
        .as_object()
        .ok_or_else(|| PatchError::InvalidOperation("operation must be an object".into()))?;
    let op_str = obj.get("op").and_then(Value::as_str).unwrap_or_default();

    match op_str {
        "add" => Ok(Op::Add {
            path: decode_path(obj, "path", op_str)?,
            value: decode_value(obj, op_str)?,
        }),
        "remove" => Ok(Op::Remove {
            path: decode_path(obj, "path", op_str)?,
        }),
        "replace" => Ok(Op::Replace {
            path: decode_path(obj, "path", op_str)?,
            value: decode_value(obj, op_str)?,
        }),
        "copy" => Ok(Op::Copy {
            path: decode_path(obj, "path", op_str)?,
            from: decode_path(obj, "from", op_str)?,
        }),
        "move" => Ok(Op::Move {
            path: decode_path(obj, "path", op_str)?,
            from: decode_path(obj, "from", op_str)?,
        }),
        "test" => Ok(Op::Test {
            path: decode_path(obj, "path", op_str)?,
            value: decode_value(obj, op_str)?,
        }),
        other => Err(PatchError::UnsupportedOperation(other.to_string())),
    }
}

/// Deserialize a whole JSON Patch array, failing on the first bad record.
pub fn from_json_patch(v: &Value) -> Result<Vec<Op>, PatchError> {
    let arr = v
        .as_array()
        .ok_or_else(|| PatchError::InvalidOperation("patch must be an array".into()))?;
    arr.iter().map(from_json).collect()
}
