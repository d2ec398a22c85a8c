//! A growable text buffer with condition-guarded appends.
//!
//! [`TextBuffer`] wraps an owned [`String`] and adds the `*_if_empty` /
//! `*_if_not_empty` append family: each method reads the buffer's emptiness
//! *before* mutating it and is a pure pass-through when the condition does
//! not hold. Every guarded method returns `&mut Self` so construction
//! pipelines can chain without giving up exclusive ownership.

use alloc::string::String;
use core::fmt;

use crate::error::OutOfRangeError;

/// An exclusively owned, growable text buffer.
///
/// # Examples
///
/// ```
/// use strkit::TextBuffer;
///
/// let mut buf = TextBuffer::new();
/// buf.append_if_empty("first").append_if_empty("second");
/// assert_eq!(buf.as_str(), "first");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    inner: String,
}

impl TextBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: String::new(),
        }
    }

    /// Creates an empty buffer with at least `capacity` bytes pre-allocated.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: String::with_capacity(capacity),
        }
    }

    /// Appends `text` unconditionally.
    pub fn push_str(&mut self, text: &str) {
        self.inner.push_str(text);
    }

    /// Appends a single character unconditionally.
    pub fn push(&mut self, c: char) {
        self.inner.push(c);
    }

    /// The buffer's length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the buffer currently holds no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// The buffer's length in characters (Unicode scalar values). O(n).
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.inner.chars().count()
    }

    /// Borrows the accumulated text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Consumes the buffer, yielding the accumulated text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.inner
    }

    /// Empties the buffer, keeping its allocation.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Appends `text` only when the buffer is currently empty.
    pub fn append_if_empty(&mut self, text: &str) -> &mut Self {
        if self.inner.is_empty() {
            self.inner.push_str(text);
        }
        self
    }

    /// Appends `text` only when the buffer is currently non-empty.
    pub fn append_if_not_empty(&mut self, text: &str) -> &mut Self {
        if !self.inner.is_empty() {
            self.inner.push_str(text);
        }
        self
    }

    /// Appends `text` plus a line terminator only when the buffer is
    /// currently empty.
    pub fn append_line_if_empty(&mut self, text: &str) -> &mut Self {
        if self.inner.is_empty() {
            self.inner.push_str(text);
            self.inner.push('\n');
        }
        self
    }

    /// Appends `text` plus a line terminator only when the buffer is
    /// currently non-empty.
    pub fn append_line_if_not_empty(&mut self, text: &str) -> &mut Self {
        if !self.inner.is_empty() {
            self.inner.push_str(text);
            self.inner.push('\n');
        }
        self
    }

    /// Appends a bare line terminator only when the buffer is currently
    /// empty.
    pub fn newline_if_empty(&mut self) -> &mut Self {
        if self.inner.is_empty() {
            self.inner.push('\n');
        }
        self
    }

    /// Appends a bare line terminator only when the buffer is currently
    /// non-empty.
    pub fn newline_if_not_empty(&mut self) -> &mut Self {
        if !self.inner.is_empty() {
            self.inner.push('\n');
        }
        self
    }

    /// Removes exactly `count` characters from the start of the buffer.
    ///
    /// Removing every character leaves a valid empty buffer. An empty buffer
    /// with `count == 0` is a no-op.
    ///
    /// # Errors
    ///
    /// [`OutOfRangeError`] when `count` exceeds the buffer's character count.
    pub fn remove_from_start(&mut self, count: usize) -> Result<&mut Self, OutOfRangeError> {
        if count == 0 {
            return Ok(self);
        }
        let len = self.char_count();
        if count > len {
            return Err(OutOfRangeError { count, len });
        }
        if count == len {
            self.inner.clear();
            return Ok(self);
        }
        let cut: usize = self.inner.chars().take(count).map(char::len_utf8).sum();
        self.inner.drain(..cut);
        Ok(self)
    }

    /// Removes exactly `count` characters from the end of the buffer.
    ///
    /// Same bounds and empty-buffer policy as [`remove_from_start`].
    ///
    /// # Errors
    ///
    /// [`OutOfRangeError`] when `count` exceeds the buffer's character count.
    ///
    /// [`remove_from_start`]: TextBuffer::remove_from_start
    pub fn remove_from_end(&mut self, count: usize) -> Result<&mut Self, OutOfRangeError> {
        if count == 0 {
            return Ok(self);
        }
        let len = self.char_count();
        if count > len {
            return Err(OutOfRangeError { count, len });
        }
        let keep: usize = self
            .inner
            .chars()
            .take(len - count)
            .map(char::len_utf8)
            .sum();
        self.inner.truncate(keep);
        Ok(self)
    }
}

impl From<String> for TextBuffer {
    fn from(inner: String) -> Self {
        Self { inner }
    }
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> Self {
        Self { inner: text.into() }
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}

impl fmt::Write for TextBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.push_str(s);
        Ok(())
    }
}
