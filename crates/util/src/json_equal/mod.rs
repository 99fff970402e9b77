//! JSON equality utilities.
//!
//! Two flavours are provided. [`deep_equal`] treats object members as an
//! unordered set, as RFC 6902 prescribes for `test`. [`positional_equal`]
//! additionally requires object keys to enumerate in the same order.

mod deep_equal;

pub use deep_equal::{deep_equal, positional_equal};
