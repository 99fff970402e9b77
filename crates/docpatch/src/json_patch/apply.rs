//! JSON Patch apply logic.
//!
//! Every handler mutates the document in place and stops at the first
//! violated precondition. `replace` and `move` are compositions of the
//! simpler handlers and are not atomic on their own: when the trailing `add`
//! fails, the preceding `remove` has already happened. Use
//! [`ApplyPatchOptions::atomic`] to stage a whole patch instead.

use std::borrow::Borrow;

use docpatch_json_pointer::{
    format_json_pointer, is_child, parent_mut, resolve_existing_index, resolve_index,
};
use docpatch_util::{deep_equal, positional_equal};
use serde_json::Value;
use tracing::{debug, trace};

use super::codec::json::from_json;
use super::types::{ApplyPatchOptions, ArrayBounds, Equality, MemberRemoval, Op, PatchError};

fn invalid_pointer(path: &[String]) -> PatchError {
    PatchError::InvalidPointer(format_json_pointer(path))
}

// ── Individual operation applicators ─────────────────────────────────────

/// Read the value at `path`. Every token must resolve.
pub fn apply_get<'v>(doc: &'v Value, path: &[String]) -> Result<&'v Value, PatchError> {
    Ok(docpatch_json_pointer::get(doc, path)?)
}

/// Insert `value` at `path`.
///
/// Object members are created or overwritten; array elements are inserted
/// before the addressed index, with `-` appending. The root cannot be the
/// target.
pub fn apply_add(doc: &mut Value, path: &[String], value: Value) -> Result<(), PatchError> {
    let (parent, token) = parent_mut(doc, path)?.ok_or_else(|| invalid_pointer(path))?;
    match parent {
        Value::Array(arr) => {
            let idx = resolve_index(token, arr.len())?;
            arr.insert(idx, value);
        }
        Value::Object(map) => {
            map.insert(token.to_string(), value);
        }
        _ => return Err(invalid_pointer(path)),
    }
    Ok(())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Remove the value at `path`, returning it.
///
/// Under [`ArrayBounds::Lenient`] an array index equal to the length is
/// accepted and removes nothing, in which case `None` is returned. Under
/// [`MemberRemoval::Truthy`] an object member holding a falsy value counts
/// as missing.
pub fn apply_remove(
    doc: &mut Value,
    path: &[String],
    options: &ApplyPatchOptions,
) -> Result<Option<Value>, PatchError> {
    let (parent, token) = parent_mut(doc, path)?.ok_or_else(|| invalid_pointer(path))?;
    match parent {
        Value::Array(arr) => {
            let idx = match options.array_bounds {
                ArrayBounds::Lenient => resolve_index(token, arr.len())?,
                ArrayBounds::Strict => resolve_existing_index(token, arr.len())?,
            };
            Ok((idx < arr.len()).then(|| arr.remove(idx)))
        }
        Value::Object(map) => {
            let removable = match (map.get(token), options.member_removal) {
                (Some(old), MemberRemoval::Truthy) => is_truthy(old),
                (Some(_), MemberRemoval::Present) => true,
                (None, _) => false,
            };
            if !removable {
                return Err(invalid_pointer(path));
            }
            Ok(map.shift_remove(token))
        }
        _ => Err(invalid_pointer(path)),
    }
}

/// `remove` followed by `add` at the same path.
pub fn apply_replace(
    doc: &mut Value,
    path: &[String],
    value: Value,
    options: &ApplyPatchOptions,
) -> Result<(), PatchError> {
    apply_remove(doc, path, options)?;
    apply_add(doc, path, value)
}

/// Move the value at `from` to `path`.
///
/// Moving a location into its own subtree is rejected before anything is
/// touched.
pub fn apply_move(
    doc: &mut Value,
    from: &[String],
    path: &[String],
    options: &ApplyPatchOptions,
) -> Result<(), PatchError> {
    if is_child(from, path) {
        return Err(invalid_pointer(path));
    }
    apply_get(doc, from)?;
    let value = apply_remove(doc, from, options)?.ok_or_else(|| invalid_pointer(from))?;
    apply_add(doc, path, value)
}

/// Duplicate the value at `from` into `path`.
pub fn apply_copy(doc: &mut Value, from: &[String], path: &[String]) -> Result<(), PatchError> {
    let value = apply_get(doc, from)?.clone();
    apply_add(doc, path, value)
}

/// Check that the value at `path` equals `value`.
pub fn apply_test(
    doc: &Value,
    path: &[String],
    value: &Value,
    equality: Equality,
) -> Result<(), PatchError> {
    let actual = apply_get(doc, path)?;
    let equal = match equality {
        Equality::Positional => positional_equal(value, actual),
        Equality::Unordered => deep_equal(value, actual),
    };
    if equal {
        Ok(())
    } else {
        Err(PatchError::TestFailed)
    }
}

// ── Main apply function ───────────────────────────────────────────────────

/// Apply a single operation to the document (in-place mutation).
pub fn apply_op(doc: &mut Value, op: &Op, options: &ApplyPatchOptions) -> Result<(), PatchError> {
    match op {
        Op::Add { path, value } => apply_add(doc, path, value.clone()),
        Op::Remove { path } => apply_remove(doc, path, options).map(|_| ()),
        Op::Replace { path, value } => apply_replace(doc, path, value.clone(), options),
        Op::Copy { path, from } => apply_copy(doc, from, path),
        Op::Move { path, from } => apply_move(doc, from, path, options),
        Op::Test { path, value } => apply_test(doc, path, value, options.equality),
    }
}

fn apply_in_place<I, O>(doc: &mut Value, ops: I, options: &ApplyPatchOptions) -> Result<(), PatchError>
where
    I: IntoIterator<Item = Result<O, PatchError>>,
    O: Borrow<Op>,
{
    for (index, op) in ops.into_iter().enumerate() {
        let op = match op {
            Ok(op) => op,
            Err(err) => {
                debug!(target: "docpatch::apply", index, error = %err, "Operation record rejected");
                return Err(err);
            }
        };
        let op: &Op = op.borrow();
        let from = op.from().map(|from| format_json_pointer(from));
        trace!(
            target: "docpatch::apply",
            index,
            op = op.op_name(),
            path = %format_json_pointer(op.path()),
            from = from.as_deref(),
            "Applying operation"
        );
        if let Err(err) = apply_op(doc, op, options) {
            debug!(target: "docpatch::apply", index, op = op.op_name(), error = %err, "Operation failed");
            return Err(err);
        }
    }
    Ok(())
}

fn apply_each<I, O>(doc: &mut Value, ops: I, options: &ApplyPatchOptions) -> Result<(), PatchError>
where
    I: IntoIterator<Item = Result<O, PatchError>>,
    O: Borrow<Op>,
{
    if !options.atomic {
        return apply_in_place(doc, ops, options);
    }
    let mut staged = doc.clone();
    match apply_in_place(&mut staged, ops, options) {
        Ok(()) => {
            *doc = staged;
            debug!(target: "docpatch::apply", "Staged patch committed");
            Ok(())
        }
        Err(err) => {
            debug!(target: "docpatch::apply", error = %err, "Staged patch discarded");
            Err(err)
        }
    }
}

/// Apply a sequence of operations with options.
///
/// Operations run strictly in order. The first failure is returned as is;
/// unless `options.atomic` is set, the operations before it remain applied.
pub fn apply_patch(doc: &mut Value, ops: &[Op], options: &ApplyPatchOptions) -> Result<(), PatchError> {
    apply_each(doc, ops.iter().map(Ok), options)
}

/// Apply a patch with the default options.
///
/// # Example
///
/// ```
/// use docpatch::json_patch::{apply, Op};
/// use serde_json::json;
///
/// let mut doc = json!({"arr": [1, 2]});
/// apply(&mut doc, &[Op::Add { path: vec!["arr".into(), "-".into()], value: json!(3) }]).unwrap();
/// assert_eq!(doc, json!({"arr": [1, 2, 3]}));
/// ```
pub fn apply(doc: &mut Value, ops: &[Op]) -> Result<(), PatchError> {
    apply_patch(doc, ops, &ApplyPatchOptions::default())
}

/// Apply an RFC 6902 patch document given as JSON.
///
/// Records are decoded one at a time, right before they are applied, so a
/// malformed or unknown record only stops the patch once it is reached.
///
/// # Errors
///
/// [`PatchError::InvalidOperation`] if `patch` is not an array, otherwise the
/// first decoding or application error.
///
/// # Example
///
/// ```
/// use docpatch::json_patch::{apply_json_patch, ApplyPatchOptions, PatchError};
/// use serde_json::json;
///
/// let mut doc = json!({});
/// let patch = json!([
///     {"op": "add", "path": "/foo", "value": "bar"},
///     {"op": "fake"},
/// ]);
/// let err = apply_json_patch(&mut doc, &patch, &ApplyPatchOptions::default()).unwrap_err();
/// assert_eq!(err, PatchError::UnsupportedOperation("fake".into()));
/// assert_eq!(doc, json!({"foo": "bar"}));
/// ```
pub fn apply_json_patch(
    doc: &mut Value,
    patch: &Value,
    options: &ApplyPatchOptions,
) -> Result<(), PatchError> {
    let records = patch
        .as_array()
        .ok_or_else(|| PatchError::InvalidOperation("patch must be an array".into()))?;
    apply_each(doc, records.iter().map(from_json), options)
}

// ── Tests ─────────────────────────────────────────────────────────────────
