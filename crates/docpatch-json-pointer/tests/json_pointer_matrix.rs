use docpatch_json_pointer::{
    format_json_pointer, get, parse_json_pointer, resolve_index, walk, JsonPointerError, WalkMode,
};
use serde_json::json;

#[test]
fn pointer_tokenize_matrix() {
    let cases: [(&str, &[&str]); 13] = [
        ("", &[]),
        ("/", &[""]),
        ("/foo", &["foo"]),
        ("/a~1b", &["a/b"]),
        ("/c%d", &["c%d"]),
        ("/e^f", &["e^f"]),
        ("/g|h", &["g|h"]),
        ("/i\\j", &["i\\j"]),
        ("/k\"l", &["k\"l"]),
        ("/ ", &[" "]),
        ("/m~0n", &["m~n"]),
        ("/foo/0", &["foo", "0"]),
        ("/~0/~1", &["~", "/"]),
    ];

    for (pointer, expected) in cases {
        assert_eq!(parse_json_pointer(pointer).unwrap(), expected, "{pointer:?}");
    }
}

#[test]
fn pointer_parse_format_roundtrip_matrix() {
    for pointer in ["", "/", "/foo/bar", "/a~0b/c~1d", "/arr/0", "/~01", "/foo///"] {
        let path = parse_json_pointer(pointer).unwrap();
        assert_eq!(format_json_pointer(&path), pointer);
    }
}

#[test]
fn pointer_rejects_missing_leading_slash() {
    for pointer in ["foo", "!", "foo/bar", "~1"] {
        assert!(matches!(
            parse_json_pointer(pointer),
            Err(JsonPointerError::InvalidPointer(p)) if p == pointer
        ));
    }
}

#[test]
fn pointer_escape_ordering_for_tilde() {
    let doc = json!({"/": 9, "~1": 10});
    let path = parse_json_pointer("/~01").unwrap();
    assert_eq!(get(&doc, &path), Ok(&json!(10)));
    let path = parse_json_pointer("/~1").unwrap();
    assert_eq!(get(&doc, &path), Ok(&json!(9)));
}

#[test]
fn pointer_walk_modes_matrix() {
    let doc = json!({"foo": {"bar": [10, 20, null]}});

    let path = parse_json_pointer("/foo/bar/2").unwrap();
    let steps = walk(&doc, &path, WalkMode::Strict).expect("null is an existing value");
    assert_eq!(steps.last().and_then(|s| s.node), Some(&json!(null)));

    let path = parse_json_pointer("/foo/baz").unwrap();
    assert!(walk(&doc, &path, WalkMode::Strict).is_err());
    assert!(walk(&doc, &path, WalkMode::Permissive).is_ok());

    let path = parse_json_pointer("/nope/baz").unwrap();
    assert!(walk(&doc, &path, WalkMode::Permissive).is_err());
}

#[test]
fn pointer_index_resolution_matrix() {
    let arr = [1, 2, 3];
    assert_eq!(resolve_index("-", arr.len()), Ok(3));
    assert_eq!(resolve_index("0", arr.len()), Ok(0));
    assert_eq!(resolve_index("3", arr.len()), Ok(3));
    assert_eq!(
        resolve_index("4", arr.len()),
        Err(JsonPointerError::InvalidArrayIndex("4".to_string()))
    );
    assert_eq!(
        resolve_index("two", arr.len()),
        Err(JsonPointerError::InvalidArrayIndex("two".to_string()))
    );
}
