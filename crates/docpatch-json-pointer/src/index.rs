//! Array index resolution.

use crate::util::is_valid_index;
use crate::JsonPointerError;

/// The reference token addressing the position one past the last element.
pub const END_OF_ARRAY: &str = "-";

fn parse_index(token: &str) -> Result<usize, JsonPointerError> {
    if !is_valid_index(token) {
        return Err(JsonPointerError::InvalidArrayIndex(token.to_string()));
    }
    token
        .parse()
        .map_err(|_| JsonPointerError::InvalidArrayIndex(token.to_string()))
}

/// Resolve `token` against an array of length `len` for insertion.
///
/// `-` resolves to `len`. Any other token must be a canonical decimal index
/// no greater than `len`, so the append position is accepted.
///
/// # Example
///
/// ```
/// use docpatch_json_pointer::resolve_index;
///
/// assert_eq!(resolve_index("-", 3), Ok(3));
/// assert_eq!(resolve_index("3", 3), Ok(3));
/// assert!(resolve_index("4", 3).is_err());
/// assert!(resolve_index("two", 3).is_err());
/// ```
pub fn resolve_index(token: &str, len: usize) -> Result<usize, JsonPointerError> {
    if token == END_OF_ARRAY {
        return Ok(len);
    }
    let idx = parse_index(token)?;
    if idx > len {
        return Err(JsonPointerError::InvalidArrayIndex(token.to_string()));
    }
    Ok(idx)
}

/// Resolve `token` to an element that currently exists: `index < len`.
///
/// `-` never names an existing element.
pub fn resolve_existing_index(token: &str, len: usize) -> Result<usize, JsonPointerError> {
    let idx = match token {
        END_OF_ARRAY => len,
        _ => parse_index(token)?,
    };
    if idx >= len {
        return Err(JsonPointerError::InvalidArrayIndex(token.to_string()));
    }
    Ok(idx)
}
