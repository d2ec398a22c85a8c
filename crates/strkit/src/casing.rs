//! Casing-driven segmentation: insert a marker at every case transition.

use alloc::string::String;

use crate::buffer::TextBuffer;

/// Inserts `marker` before every character that is unchanged by an uppercase
/// transform, except when that character would be the first of the output.
///
/// "Unchanged by an uppercase transform" covers uppercase letters, but also
/// digits and symbols, so `"ab1cd"` with marker `"-"` becomes `"ab-1cd"`.
/// That is the documented contract, not an oversight.
///
/// An empty `marker` makes this the identity transform.
///
/// # Examples
///
/// ```
/// use strkit::insert_on_casing;
///
/// assert_eq!(insert_on_casing("TheQuickBrownFox", "|"), "The|Quick|Brown|Fox");
/// assert_eq!(insert_on_casing("Fox", " "), "Fox");
/// ```
#[must_use]
pub fn insert_on_casing(value: &str, marker: &str) -> String {
    let mut out = TextBuffer::with_capacity(value.len());
    for c in value.chars() {
        if uppercases_to_itself(c) {
            out.append_if_not_empty(marker);
        }
        out.push(c);
    }
    out.into_string()
}

/// Inserts a space at every case transition.
///
/// # Examples
///
/// ```
/// use strkit::space_on_casing;
///
/// assert_eq!(space_on_casing("TheQuickBrownFox"), "The Quick Brown Fox");
/// ```
#[must_use]
pub fn space_on_casing(value: &str) -> String {
    insert_on_casing(value, " ")
}

/// A single scalar value counts as a boundary when uppercasing maps it to
/// exactly itself. Multi-char expansions (e.g. 'ß' -> "SS") are lowercase by
/// this rule.
fn uppercases_to_itself(c: char) -> bool {
    let mut upper = c.to_uppercase();
    upper.next() == Some(c) && upper.next().is_none()
}
