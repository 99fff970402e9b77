//! Core logic behind the `json-patch` and `json-pointer` binaries.
//!
//! Both tools take a document as JSON text and return JSON text, so they can
//! be tested without touching stdin or stdout.

use docpatch_json_pointer::{get_by_pointer, JsonPointerError};
use serde_json::Value;
use thiserror::Error;

use crate::json_patch::{self, ApplyPatchOptions, PatchError};

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Patch(#[from] PatchError),
    #[error("{0}")]
    Pointer(#[from] JsonPointerError),
}

fn render(value: &Value, pretty: bool) -> Result<String, CliError> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(out)
}

// ── json-patch ────────────────────────────────────────────────────────────

/// Apply a JSON Patch (RFC 6902) to a document.
///
/// `doc_json` is the document and `patch_json` the array of operation
/// records, both as JSON text. Returns the patched document.
pub fn apply_json_patch(
    doc_json: &str,
    patch_json: &str,
    options: &ApplyPatchOptions,
    pretty: bool,
) -> Result<String, CliError> {
    let mut doc: Value = serde_json::from_str(doc_json)?;
    let patch: Value = serde_json::from_str(patch_json)?;
    json_patch::apply_json_patch(&mut doc, &patch, options)?;
    render(&doc, pretty)
}

// ── json-pointer ──────────────────────────────────────────────────────────

/// Look up a JSON Pointer (RFC 6901) in a document, returning the value as
/// pretty-printed JSON text.
pub fn lookup_pointer(doc_json: &str, pointer: &str) -> Result<String, CliError> {
    let doc: Value = serde_json::from_str(doc_json)?;
    let value = get_by_pointer(&doc, pointer)?;
    render(value, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_document_compact() {
        let out = apply_json_patch(
            r#"{"foo": "bar"}"#,
            r#"[{"op": "add", "path": "/baz", "value": [1]}]"#,
            &ApplyPatchOptions::default(),
            false,
        )
        .unwrap();
        assert_eq!(out, r#"{"foo":"bar","baz":[1]}"#);
    }

    #[test]
    fn patch_document_pretty() {
        let out = apply_json_patch(
            "[]",
            r#"[{"op": "add", "path": "/-", "value": 1}]"#,
            &ApplyPatchOptions::default(),
            true,
        )
        .unwrap();
        assert_eq!(out, "[\n  1\n]");
    }

    #[test]
    fn patch_errors_are_reported() {
        let err = apply_json_patch(
            "{}",
            r#"[{"op": "remove", "path": "/nope"}]"#,
            &ApplyPatchOptions::default(),
            false,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Patch(PatchError::InvalidPointer(_))));
        assert_eq!(err.to_string(), "invalid pointer /nope");

        let err = apply_json_patch("{", "[]", &ApplyPatchOptions::default(), false).unwrap_err();
        assert!(matches!(err, CliError::Json(_)));
    }

    #[test]
    fn patch_options_are_honoured() {
        let options = ApplyPatchOptions {
            atomic: true,
            array_bounds: json_patch::ArrayBounds::Strict,
            ..Default::default()
        };
        let err = apply_json_patch(
            "[1]",
            r#"[{"op": "remove", "path": "/1"}]"#,
            &options,
            false,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Patch(PatchError::InvalidArrayIndex(_))));
    }

    #[test]
    fn pointer_lookup() {
        let doc = r#"{"a": {"b~c": [10, 20]}}"#;
        assert_eq!(lookup_pointer(doc, "/a/b~0c/1").unwrap(), "20");
        assert_eq!(lookup_pointer(doc, "").unwrap(), "{\n  \"a\": {\n    \"b~c\": [\n      10,\n      20\n    ]\n  }\n}");
        assert!(matches!(
            lookup_pointer(doc, "/a/x"),
            Err(CliError::Pointer(JsonPointerError::InvalidPointer(_)))
        ));
        assert!(matches!(
            lookup_pointer(doc, "a"),
            Err(CliError::Pointer(JsonPointerError::InvalidPointer(_)))
        ));
    }
}
