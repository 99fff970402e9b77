//! JSON Patch implementation (RFC 6902).
//!
//! # Operations
//!
//! The six RFC 6902 operations are supported:
//! `add`, `remove`, `replace`, `copy`, `move`, `test`.
//!
//! Patches are applied to a `serde_json::Value` in place. By default a
//! failing operation leaves the operations before it applied; see
//! [`ApplyPatchOptions`] for staged application and the other knobs.

pub mod apply;
pub mod codec;
pub mod types;

pub use apply::{
    apply, apply_add, apply_copy, apply_get, apply_json_patch, apply_move, apply_op, apply_patch,
    apply_remove, apply_replace, apply_test,
};
pub use codec::json::{from_json, from_json_patch, to_json, to_json_patch};
pub use types::{ApplyPatchOptions, ArrayBounds, Equality, MemberRemoval, Op, PatchError, Path};
