//! Bounded trimming over `&str`, zero-copy.

use crate::error::OutOfRangeError;

/// Removes exactly `count` characters from the start of `value`, returning
/// the remaining subslice.
///
/// `count` equal to the full character count leaves `""`.
///
/// # Errors
///
/// [`OutOfRangeError`] when `count` exceeds the input's character count.
pub fn remove_from_start(value: &str, count: usize) -> Result<&str, OutOfRangeError> {
    let len = value.chars().count();
    if count > len {
        return Err(OutOfRangeError { count, len });
    }
    let cut: usize = value.chars().take(count).map(char::len_utf8).sum();
    Ok(&value[cut..])
}

/// Removes exactly `count` characters from the end of `value`, returning the
/// remaining subslice.
///
/// # Errors
///
/// [`OutOfRangeError`] when `count` exceeds the input's character count.
pub fn remove_from_end(value: &str, count: usize) -> Result<&str, OutOfRangeError> {
    let len = value.chars().count();
    if count > len {
        return Err(OutOfRangeError { count, len });
    }
    let keep: usize = value.chars().take(len - count).map(char::len_utf8).sum();
    Ok(&value[..keep])
}

#[cfg(test)]
mod tests {
    use super::{remove_from_end, remove_from_start};
    use crate::error::OutOfRangeError;

    #[test]
    fn trims_from_either_end() {
        assert_eq!(remove_from_start("abcdef", 2).unwrap(), "cdef");
        assert_eq!(remove_from_end("abcdef", 2).unwrap(), "abcd");
    }

    #[test]
    fn zero_count_is_identity() {
        assert_eq!(remove_from_start("abc", 0).unwrap(), "abc");
        assert_eq!(remove_from_end("abc", 0).unwrap(), "abc");
    }

    #[test]
    fn full_length_leaves_empty() {
        assert_eq!(remove_from_start("abc", 3).unwrap(), "");
        assert_eq!(remove_from_end("abc", 3).unwrap(), "");
    }

    #[test]
    fn excess_count_fails() {
        assert_eq!(
            remove_from_start("abc", 4).unwrap_err(),
            OutOfRangeError { count: 4, len: 3 }
        );
        assert_eq!(
            remove_from_end("", 1).unwrap_err(),
            OutOfRangeError { count: 1, len: 0 }
        );
    }

    #[test]
    fn counts_scalar_values_not_bytes() {
        assert_eq!(remove_from_start("日本語abc", 3).unwrap(), "abc");
        assert_eq!(remove_from_end("abc日本語", 3).unwrap(), "abc");
    }
}
