use crate::JsonPointerError;

const SEPARATOR: char = '/';

/// Unescapes a JSON Pointer path component.
///
/// Per RFC 6901, `~1` is replaced with `/` and `~0` is replaced with `~`.
/// Decoding is a single left-to-right pass, so `~01` becomes `~1` and never
/// `/`. A `~` not followed by `0` or `1` is kept as is.
///
/// # Example
///
/// ```
/// use docpatch_json_pointer::unescape_component;
///
/// assert_eq!(unescape_component("a~0b"), "a~b");
/// assert_eq!(unescape_component("c~1d"), "c/d");
/// assert_eq!(unescape_component("~01"), "~1");
/// ```
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    let mut out = String::with_capacity(component.len());
    let mut chars = component.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '~' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('0') => {
                chars.next();
                out.push('~');
            }
            Some('1') => {
                chars.next();
                out.push('/');
            }
            _ => out.push('~'),
        }
    }
    out
}

/// Escapes a JSON Pointer path component.
///
/// # Example
///
/// ```
/// use docpatch_json_pointer::escape_component;
///
/// assert_eq!(escape_component("a~b"), "a~0b");
/// assert_eq!(escape_component("c/d"), "c~1d");
/// ```
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    // `~` first, otherwise the `~1` produced for `/` would be re-escaped.
    component.replace('~', "~0").replace('/', "~1")
}

/// Parse a JSON Pointer string into reference tokens.
///
/// - Empty string returns an empty path (the document root)
/// - Any other string must start with `/`
/// - Each component is unescaped
///
/// # Errors
///
/// [`JsonPointerError::InvalidPointer`] for a non-empty pointer without the
/// leading `/`.
///
/// # Example
///
/// ```
/// use docpatch_json_pointer::parse_json_pointer;
///
/// assert_eq!(parse_json_pointer("").unwrap(), Vec::<String>::new());
/// assert_eq!(parse_json_pointer("/").unwrap(), vec![""]);
/// assert_eq!(parse_json_pointer("/a~0b/c~1d").unwrap(), vec!["a~b", "c/d"]);
/// assert!(parse_json_pointer("foo").is_err());
/// ```
pub fn parse_json_pointer(pointer: &str) -> Result<Vec<String>, JsonPointerError> {
    if pointer.is_empty() {
        return Ok(Vec::new());
    }
    match pointer.strip_prefix(SEPARATOR) {
        Some(rest) => Ok(rest.split(SEPARATOR).map(unescape_component).collect()),
        None => Err(JsonPointerError::InvalidPointer(pointer.to_string())),
    }
}

/// Format path components into a JSON Pointer string.
///
/// Returns an empty string for the root path.
pub fn format_json_pointer(path: &[String]) -> String {
    let mut out = String::new();
    for component in path {
        out.push(SEPARATOR);
        out.push_str(&escape_component(component));
    }
    out
}

/// Check if `child` lies strictly below `parent`.
///
/// # Example
///
/// ```
/// use docpatch_json_pointer::is_child;
///
/// let parent = vec!["foo".to_string()];
/// let child = vec!["foo".to_string(), "bar".to_string()];
/// assert!(is_child(&parent, &child));
/// assert!(!is_child(&child, &parent));
/// assert!(!is_child(&parent, &parent));
/// ```
pub fn is_child(parent: &[String], child: &[String]) -> bool {
    parent.len() < child.len() && child[..parent.len()] == *parent
}

/// Check if a string is a canonical non-negative array index.
///
/// Only ASCII digits are allowed, with no leading zero unless the index is
/// exactly `"0"`.
pub fn is_valid_index(index: &str) -> bool {
    if index.is_empty() {
        return false;
    }
    let bytes = index.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|b| b.is_ascii_digit())
}
