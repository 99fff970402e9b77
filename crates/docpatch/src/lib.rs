//! # docpatch
//!
//! Applies [JSON Patch (RFC 6902)](https://tools.ietf.org/html/rfc6902)
//! documents to `serde_json::Value` trees in place.
//!
//! - [`json_patch`]: operation types, handlers and the patch applier
//! - [`json_cli`]: the logic behind the `json-patch` and `json-pointer` binaries
//!
//! Pointer parsing and traversal live in the `docpatch-json-pointer` crate and
//! are re-exported here as [`json_pointer`].
//!
//! # Example
//!
//! ```
//! use docpatch::json_patch::{apply_json_patch, ApplyPatchOptions};
//! use serde_json::json;
//!
//! let mut doc = json!({"foo": ["bar"]});
//! let patch = json!([
//!     {"op": "add", "path": "/foo/-", "value": "baz"},
//!     {"op": "test", "path": "/foo/1", "value": "baz"},
//!     {"op": "move", "from": "/foo", "path": "/qux"},
//! ]);
//! apply_json_patch(&mut doc, &patch, &ApplyPatchOptions::default()).unwrap();
//! assert_eq!(doc, json!({"qux": ["bar", "baz"]}));
//! ```

pub mod json_cli;
pub mod json_patch;

pub use docpatch_json_pointer as json_pointer;
pub use json_patch::{apply, apply_json_patch, apply_patch, ApplyPatchOptions, Op, PatchError};
