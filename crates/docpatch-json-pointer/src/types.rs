//! Type definitions for JSON Pointer.

use serde_json::Value;

/// A single unescaped reference token.
pub type PathStep = String;

/// A JSON Pointer decomposed into reference tokens.
pub type Path = Vec<PathStep>;

/// How much of a path must already exist for [`walk`](crate::walk) to succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkMode {
    /// Every token, the last one included, must name an existing member.
    Strict,
    /// Only the ancestors of the last token must exist.
    Permissive,
}

/// One token consumed by a walk.
///
/// `parent` is the container the token was looked up in. `node` is what the
/// token resolved to, or `None` when the final token of a permissive walk
/// names a member that does not exist yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step<'v, 'p> {
    pub parent: &'v Value,
    pub node: Option<&'v Value>,
    pub token: &'p str,
}
