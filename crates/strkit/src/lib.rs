//! Stateless text-transformation utilities: casing-driven segmentation,
//! conditional appends on a growable buffer, bounded trimming, an adaptive
//! multi-character delimiter split, and join/list rendering for sequences and
//! keyed collections.
//!
//! Everything here is a pure function (or a method on an exclusively owned
//! [`TextBuffer`]): synchronous, allocation-only, O(n), and free of shared
//! state. The crate is `no_std` + `alloc`.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
mod casing;
mod error;
mod render;
mod split;
mod trim;

#[cfg(test)]
mod tests;

pub use buffer::TextBuffer;
pub use casing::{insert_on_casing, space_on_casing};
pub use error::{EmptyDelimiterError, OutOfRangeError};
pub use render::{
    DEFAULT_DELIMITER, DEFAULT_KEY_VALUE_SEPARATOR, KeyDisplay, delimit, delimit_keyed,
    delimit_keyed_with, delimit_pairs, delimit_pairs_with, delimit_with, list, list_keyed,
    list_keyed_with, list_pairs, list_pairs_with,
};
pub use split::{DELIMITER_CANDIDATES, split_adaptive};
pub use trim::{remove_from_end, remove_from_start};
