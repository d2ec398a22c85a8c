//! Splitting on a multi-character delimiter via single-character
//! substitution.
//!
//! The splitter rewrites every occurrence of the caller's delimiter string as
//! one character chosen from a fixed candidate list, then splits on that
//! character. Because the chosen character is guaranteed absent from the
//! input (barring the exhaustion fallback below), the rewrite is lossless.

use alloc::{string::String, vec::Vec};

use crate::error::EmptyDelimiterError;

/// The fixed, process-wide priority list of working-delimiter candidates.
///
/// `:` is the default; the remaining five are tried in order when the input
/// already contains `:`.
pub const DELIMITER_CANDIDATES: [char; 6] = [':', '|', '^', '=', '/', '-'];

/// Splits `value` on the (possibly multi-character) `delimiter`.
///
/// Every occurrence of `delimiter` is first replaced by a single working
/// character from [`DELIMITER_CANDIDATES`], then the result is split on that
/// character. Empty substrings between consecutive delimiters are preserved,
/// exactly as a direct split-on-character would.
///
/// **Exhaustion fallback**: when the input contains all six candidate
/// characters, the working delimiter falls back to the *first character of
/// `delimiter` itself*. That character may also occur elsewhere in the input,
/// in which case the split fractures on those occurrences too. This is a
/// deliberate, silent last resort; callers who may feed such inputs must pick
/// a delimiter whose first character cannot appear in the data.
///
/// # Examples
///
/// ```
/// use strkit::split_adaptive;
///
/// let parts = split_adaptive("a::b::c", "::").unwrap();
/// assert_eq!(parts, ["a", "b", "c"]);
/// ```
///
/// # Errors
///
/// [`EmptyDelimiterError`] when `delimiter` is empty.
pub fn split_adaptive(value: &str, delimiter: &str) -> Result<Vec<String>, EmptyDelimiterError> {
    let Some(fallback) = delimiter.chars().next() else {
        return Err(EmptyDelimiterError);
    };

    let working = working_delimiter(value, fallback);
    let mut utf8 = [0u8; 4];
    let substituted = value.replace(delimiter, working.encode_utf8(&mut utf8));
    Ok(substituted.split(working).map(String::from).collect())
}

/// Picks the single character that will stand in for the full delimiter
/// string: `:` unless the input contains it, otherwise the first alternate
/// absent from the input, otherwise `fallback`.
fn working_delimiter(value: &str, fallback: char) -> char {
    let default = DELIMITER_CANDIDATES[0];
    if !value.contains(default) {
        return default;
    }
    DELIMITER_CANDIDATES[1..]
        .iter()
        .copied()
        .find(|&c| !value.contains(c))
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::working_delimiter;

    #[test]
    fn default_colon_when_input_lacks_it() {
        // Candidate characters in the input are irrelevant while ':' is free.
        assert_eq!(working_delimiter("a|b^c=d/e-f", '#'), ':');
    }

    #[test]
    fn first_free_alternate_wins() {
        assert_eq!(working_delimiter("a:b", '#'), '|');
        assert_eq!(working_delimiter("a:b|c", '#'), '^');
        assert_eq!(working_delimiter("a:b|c^d", '#'), '=');
        assert_eq!(working_delimiter("a:b|c^d=e", '#'), '/');
        assert_eq!(working_delimiter("a:b|c^d=e/f", '#'), '-');
    }

    #[test]
    fn exhausted_candidates_fall_back() {
        assert_eq!(working_delimiter("a:b|c^d=e/f-g", '#'), '#');
    }
}
