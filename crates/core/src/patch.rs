//! Partial-update helpers shared by the folder and note patches.
//!
//! A patch field is applied only when it is truthy. Absent fields, `null`
//! and the empty string all mean "leave unchanged"; there is no way to clear
//! a text field through a patch.

/// Keep `value` only if it is a non-empty string.
pub fn truthy(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
