//! JSON Pointer (RFC 6901) utilities.
//!
//! This crate implements the pointer half of the docpatch engine: turning a
//! [JSON Pointer (RFC 6901)](https://tools.ietf.org/html/rfc6901) string into
//! reference tokens, walking those tokens through a `serde_json::Value`, and
//! resolving tokens that address array elements.
//!
//! # Example
//!
//! ```
//! use docpatch_json_pointer::{format_json_pointer, get, parse_json_pointer};
//!
//! // Parse a JSON pointer string into path components
//! let path = parse_json_pointer("/foo/bar").unwrap();
//! assert_eq!(path, vec!["foo".to_string(), "bar".to_string()]);
//!
//! // Format path components back to a JSON pointer string
//! assert_eq!(format_json_pointer(&path), "/foo/bar");
//!
//! // Get a value from a JSON document
//! let doc = serde_json::json!({"foo": {"bar": 42}});
//! assert_eq!(get(&doc, &path), Ok(&serde_json::json!(42)));
//! ```

use thiserror::Error;

pub mod get;
pub mod index;
pub mod types;
pub mod util;
pub mod walk;

pub use get::{get, get_by_pointer};
pub use index::{resolve_existing_index, resolve_index, END_OF_ARRAY};
pub use types::{Path, PathStep, Step, WalkMode};
pub use util::{
    escape_component, format_json_pointer, is_child, is_valid_index, parse_json_pointer,
    unescape_component,
};
pub use walk::{parent_mut, walk};

/// Errors raised while resolving a pointer against a document.
///
/// Both variants carry the offending text: the formatted pointer for
/// [`JsonPointerError::InvalidPointer`], the single reference token for
/// [`JsonPointerError::InvalidArrayIndex`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonPointerError {
    #[error("invalid pointer {0}")]
    InvalidPointer(String),
    #[error("invalid array index {0}")]
    InvalidArrayIndex(String),
}
