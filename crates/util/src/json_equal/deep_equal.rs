use serde_json::{Map, Number, Value};

fn number_equal(a: &Number, b: &Number) -> bool {
    let a_int = a.is_i64() || a.is_u64();
    let b_int = b.is_i64() || b.is_u64();
    if a_int && b_int {
        return a == b;
    }
    // `1` and `1.0` are the same JSON number.
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

fn equal_with(
    a: &Value,
    b: &Value,
    objects_equal: fn(&Map<String, Value>, &Map<String, Value>) -> bool,
) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => number_equal(a, b),
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(arr_a), Value::Array(arr_b)) => {
            arr_a.len() == arr_b.len()
                && arr_a
                    .iter()
                    .zip(arr_b)
                    .all(|(x, y)| equal_with(x, y, objects_equal))
        }
        (Value::Object(obj_a), Value::Object(obj_b)) => objects_equal(obj_a, obj_b),
        // Different types are never equal
        _ => false,
    }
}

fn unordered_members_equal(a: &Map<String, Value>, b: &Map<String, Value>) -> bool {
    a.len() == b.len()
        && a.iter().all(|(key, val_a)| match b.get(key) {
            Some(val_b) => deep_equal(val_a, val_b),
            None => false,
        })
}

fn positional_members_equal(a: &Map<String, Value>, b: &Map<String, Value>) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b)
            .all(|((key_a, val_a), (key_b, val_b))| {
                key_a == key_b && positional_equal(val_a, val_b)
            })
}

/// Performs a deep equality check between two JSON values.
///
/// Arrays compare element by element. Objects compare as unordered sets of
/// members, so key order is irrelevant. Numbers compare by value.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use docpatch_util::json_equal::deep_equal;
///
/// assert!(deep_equal(&json!({"a": 1, "b": [2]}), &json!({"b": [2], "a": 1})));
/// assert!(!deep_equal(&json!({"foo": [1, 2, 3]}), &json!({"foo": [1, 2, 4]})));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    equal_with(a, b, unordered_members_equal)
}

/// Deep equality that is sensitive to object key enumeration order.
///
/// Two objects are equal only when they have the same number of keys and the
/// `i`-th key of each is the same key holding equal values. With serde_json's
/// `preserve_order` feature the enumeration order is insertion order.
///
/// Arrays and objects never compare equal to each other, so `[]` differs
/// from `{}` and `["x"]` differs from `{"0": "x"}`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use docpatch_util::json_equal::positional_equal;
///
/// assert!(positional_equal(&json!({"a": 1, "b": 2}), &json!({"a": 1, "b": 2})));
/// assert!(!positional_equal(&json!({"a": 1, "b": 2}), &json!({"b": 2, "a": 1})));
/// ```
pub fn positional_equal(a: &Value, b: &Value) -> bool {
    equal_with(a, b, positional_members_equal)
}
