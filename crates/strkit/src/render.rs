//! Rendering sequences and keyed collections into delimited or line-listed
//! text.
//!
//! Every form shares one pattern: iterate the input once and, before each
//! item, conditionally prepend the separator with the [`TextBuffer`]
//! conditional-append primitives, so the first item never takes a leading
//! separator and an empty input renders as an empty string. The `*_with`
//! variants take explicit delimiter/separator arguments; the plain forms use
//! [`DEFAULT_DELIMITER`] and [`DEFAULT_KEY_VALUE_SEPARATOR`].

use alloc::string::{String, ToString};
use core::fmt::Display;

use crate::buffer::TextBuffer;

/// The delimiter the default join forms use.
pub const DEFAULT_DELIMITER: &str = ", ";

/// The separator the default key/value forms place between a key and its
/// value.
pub const DEFAULT_KEY_VALUE_SEPARATOR: &str = ": ";

/// Whether keyed renders include keys or emit values only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisplay {
    /// Render `key`, the key/value separator, then the value.
    Show,
    /// Render the value alone; the separator is omitted along with the key.
    Hide,
}

/// Joins a sequence of strings with [`DEFAULT_DELIMITER`].
///
/// # Examples
///
/// ```
/// use strkit::delimit;
///
/// assert_eq!(delimit(["a", "b", "c"]), "a, b, c");
/// assert_eq!(delimit::<[&str; 0]>([]), "");
/// ```
#[must_use]
pub fn delimit<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    delimit_with(items, DEFAULT_DELIMITER)
}

/// Joins a sequence of strings with an explicit delimiter.
#[must_use]
pub fn delimit_with<I>(items: I, delimiter: &str) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out = TextBuffer::new();
    for item in items {
        out.append_if_not_empty(delimiter);
        out.push_str(item.as_ref());
    }
    out.into_string()
}

/// Joins `(key, value)` pairs with the default delimiter and key/value
/// separator.
///
/// # Examples
///
/// ```
/// use strkit::delimit_pairs;
///
/// assert_eq!(delimit_pairs([("a", 1), ("b", 2)]), "a: 1, b: 2");
/// ```
#[must_use]
pub fn delimit_pairs<I, K, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Display,
{
    delimit_pairs_with(pairs, DEFAULT_DELIMITER, DEFAULT_KEY_VALUE_SEPARATOR)
}

/// Joins `(key, value)` pairs with an explicit delimiter and key/value
/// separator.
#[must_use]
pub fn delimit_pairs_with<I, K, V>(pairs: I, delimiter: &str, separator: &str) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Display,
{
    let mut out = TextBuffer::new();
    for (key, value) in pairs {
        out.append_if_not_empty(delimiter);
        out.push_str(key.as_ref());
        out.push_str(separator);
        out.push_str(&value.to_string());
    }
    out.into_string()
}

/// Joins a keyed collection, optionally suppressing keys.
///
/// Entries render in the collection's iteration order.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use strkit::{KeyDisplay, delimit_keyed};
///
/// let map = BTreeMap::from([("a", 1), ("b", 2)]);
/// assert_eq!(delimit_keyed(&map, KeyDisplay::Show), "a: 1, b: 2");
/// assert_eq!(delimit_keyed(&map, KeyDisplay::Hide), "1, 2");
/// ```
#[must_use]
pub fn delimit_keyed<I, K, V>(entries: I, keys: KeyDisplay) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Display,
{
    delimit_keyed_with(entries, DEFAULT_DELIMITER, keys, DEFAULT_KEY_VALUE_SEPARATOR)
}

/// Joins a keyed collection with explicit delimiter and separator, optionally
/// suppressing keys.
#[must_use]
pub fn delimit_keyed_with<I, K, V>(
    entries: I,
    delimiter: &str,
    keys: KeyDisplay,
    separator: &str,
) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Display,
{
    let mut out = TextBuffer::new();
    for (key, value) in entries {
        out.append_if_not_empty(delimiter);
        if keys == KeyDisplay::Show {
            out.push_str(key.as_ref());
            out.push_str(separator);
        }
        out.push_str(&value.to_string());
    }
    out.into_string()
}

/// Renders a sequence of strings one per line.
///
/// # Examples
///
/// ```
/// use strkit::list;
///
/// assert_eq!(list(["a", "b"]), "a\nb");
/// ```
#[must_use]
pub fn list<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out = TextBuffer::new();
    for item in items {
        out.newline_if_not_empty();
        out.push_str(item.as_ref());
    }
    out.into_string()
}

/// Renders `(key, value)` pairs one per line with the default key/value
/// separator.
#[must_use]
pub fn list_pairs<I, K, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Display,
{
    list_pairs_with(pairs, DEFAULT_KEY_VALUE_SEPARATOR)
}

/// Renders `(key, value)` pairs one per line with an explicit key/value
/// separator.
#[must_use]
pub fn list_pairs_with<I, K, V>(pairs: I, separator: &str) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Display,
{
    let mut out = TextBuffer::new();
    for (key, value) in pairs {
        out.newline_if_not_empty();
        out.push_str(key.as_ref());
        out.push_str(separator);
        out.push_str(&value.to_string());
    }
    out.into_string()
}

/// Renders a keyed collection one entry per line, optionally suppressing
/// keys.
#[must_use]
pub fn list_keyed<I, K, V>(entries: I, keys: KeyDisplay) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Display,
{
    list_keyed_with(entries, keys, DEFAULT_KEY_VALUE_SEPARATOR)
}

/// Renders a keyed collection one entry per line with an explicit key/value
/// separator, optionally suppressing keys.
#[must_use]
pub fn list_keyed_with<I, K, V>(entries: I, keys: KeyDisplay, separator: &str) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Display,
{
    let mut out = TextBuffer::new();
    for (key, value) in entries {
        out.newline_if_not_empty();
        if keys == KeyDisplay::Show {
            out.push_str(key.as_ref());
            out.push_str(separator);
        }
        out.push_str(&value.to_string());
    }
    out.into_string()
}
