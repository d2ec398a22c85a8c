use thiserror::Error;

/// A trim count exceeded the number of characters available.
///
/// Counts are measured in Unicode scalar values, not bytes. Negative counts
/// cannot occur (`usize`), so the only runtime bound is `count <= len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("character count {count} exceeds available length {len}")]
pub struct OutOfRangeError {
    /// The number of characters the caller asked to remove.
    pub count: usize,
    /// The number of characters actually available.
    pub len: usize,
}

/// The delimiter handed to [`split_adaptive`](crate::split_adaptive) was
/// empty. The splitter needs at least one character to substitute and, in the
/// worst case, to fall back on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("delimiter must not be empty")]
pub struct EmptyDelimiterError;
