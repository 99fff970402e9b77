//! Core types for the JSON Patch module.

use docpatch_json_pointer::JsonPointerError;
use serde_json::Value;
use thiserror::Error;

pub use docpatch_json_pointer::Path;

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatchError {
    /// A pointer could not be resolved, or addressed the root where a parent
    /// container is required.
    #[error("invalid pointer {0}")]
    InvalidPointer(String),
    /// An array-addressing token is malformed or out of bounds.
    #[error("invalid array index {0}")]
    InvalidArrayIndex(String),
    #[error("test failed")]
    TestFailed,
    #[error("unknown operation {0:?}")]
    UnsupportedOperation(String),
    /// An operation record is missing a field its `op` requires, or a field
    /// has the wrong JSON type.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
}

impl From<JsonPointerError> for PatchError {
    fn from(err: JsonPointerError) -> Self {
        match err {
            JsonPointerError::InvalidPointer(pointer) => PatchError::InvalidPointer(pointer),
            JsonPointerError::InvalidArrayIndex(token) => PatchError::InvalidArrayIndex(token),
        }
    }
}

// ── Op enum ───────────────────────────────────────────────────────────────

/// A JSON Patch operation (RFC 6902 section 4).
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Add { path: Path, value: Value },
    Remove { path: Path },
    Replace { path: Path, value: Value },
    Copy { path: Path, from: Path },
    Move { path: Path, from: Path },
    Test { path: Path, value: Value },
}

impl Op {
    /// Returns the `op` member value for this operation.
    pub fn op_name(&self) -> &'static str {
        match self {
            Op::Add { .. } => "add",
            Op::Remove { .. } => "remove",
            Op::Replace { .. } => "replace",
            Op::Copy { .. } => "copy",
            Op::Move { .. } => "move",
            Op::Test { .. } => "test",
        }
    }

    /// Returns the target path of the operation.
    pub fn path(&self) -> &Path {
        match self {
            Op::Add { path, .. }
            | Op::Remove { path }
            | Op::Replace { path, .. }
            | Op::Copy { path, .. }
            | Op::Move { path, .. }
            | Op::Test { path, .. } => path,
        }
    }

    /// Returns the source path of `copy` and `move`.
    pub fn from(&self) -> Option<&Path> {
        match self {
            Op::Copy { from, .. } | Op::Move { from, .. } => Some(from),
            _ => None,
        }
    }
}

// ── Options ───────────────────────────────────────────────────────────────

/// How `test` compares the expected value with the document value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Equality {
    /// Objects must list the same keys in the same enumeration order.
    #[default]
    Positional,
    /// Objects compare as unordered sets of members.
    Unordered,
}

/// Which array indexes `remove` (and so `replace` and `move`) accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArrayBounds {
    /// `index <= len`, the same bound as insertion. Removing at `len` (or
    /// `-`) changes nothing.
    #[default]
    Lenient,
    /// `index < len`; anything else is an invalid array index.
    Strict,
}

/// Which object members `remove` (and so `replace` and `move`) accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemberRemoval {
    /// The member must hold a truthy value. Members holding `null`, `false`,
    /// `0` or `""` are treated as absent and give an invalid pointer.
    #[default]
    Truthy,
    /// Any member whose key exists can be removed.
    Present,
}

/// Options for `apply_patch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ApplyPatchOptions {
    /// Apply to a staged copy and write it back only if every operation
    /// succeeds. When false, operations applied before a failure stay
    /// applied.
    pub atomic: bool,
    pub equality: Equality,
    pub array_bounds: ArrayBounds,
    pub member_removal: MemberRemoval,
}

impl ApplyPatchOptions {
    /// Options matching a strict reading of RFC 6902: all-or-nothing
    /// application, order-independent object equality, no removal past
    /// the last element and removal of any existing member.
    pub fn rfc6902() -> Self {
        Self {
            atomic: true,
            equality: Equality::Unordered,
            array_bounds: ArrayBounds::Strict,
            member_removal: MemberRemoval::Present,
        }
    }
}
