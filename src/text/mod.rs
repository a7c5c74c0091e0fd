//! Immutable text operations
//!
//! This module provides the string surface of the tour: transforming
//! operations that always return a new `String` (the input is never mutated
//! in place), plus [`TextBuffer`] for efficient accumulation and the
//! [`intern`] canonicalization pool for identity-shared text.

pub mod buffer;
pub mod intern;

pub use buffer::TextBuffer;

use std::fmt::Write as _;

/// Convert to uppercase, returning a new string.
///
/// The input is untouched; "modifying" immutable text always means building
/// a fresh value.
pub fn upper(s: &str) -> String {
    s.to_uppercase()
}

/// Convert to lowercase, returning a new string.
pub fn lower(s: &str) -> String {
    s.to_lowercase()
}

/// Replace all occurrences of `old` with `new`, returning a new string.
///
/// An empty `old` pattern returns the input unchanged.
pub fn replace(
    s: &str,
    old: &str,
    new: &str,
) -> String {
    if old.is_empty() {
        return s.to_string();
    }
    s.replace(old, new)
}

/// Concatenate the given pieces into one new string.
///
/// # Examples
///
/// ```
/// use typetour::text::concat;
///
/// assert_eq!(concat(&["A", "B", "C"]), "ABC");
/// ```
pub fn concat(pieces: &[&str]) -> String {
    let mut out = String::with_capacity(pieces.iter().map(|p| p.len()).sum());
    for piece in pieces {
        out.push_str(piece);
    }
    out
}

/// Join the given pieces with a separator.
///
/// # Examples
///
/// ```
/// use typetour::text::join;
///
/// assert_eq!(join(&["A", "B", "C"], ","), "A,B,C");
/// ```
pub fn join(
    pieces: &[&str],
    sep: &str,
) -> String {
    pieces.join(sep)
}

/// Accumulate the decimal digits of `0..limit` by repeated
/// concatenate-and-rebind.
///
/// Every round allocates a fresh string holding everything accumulated so
/// far, which is O(n^2) in total bytes copied. Kept as the slow half of the
/// accumulation comparison; [`accumulate_digits_buffered`] is the fast half
/// and must produce the identical result.
pub fn accumulate_digits_naive(limit: u32) -> String {
    let mut accumulated = String::new();
    for i in 0..limit {
        // Rebinds to a brand-new allocation each iteration.
        accumulated = format!("{}{}", accumulated, i);
    }
    accumulated
}

/// Accumulate the decimal digits of `0..limit` into a single [`TextBuffer`].
///
/// One growable buffer, amortized O(n) total.
pub fn accumulate_digits_buffered(limit: u32) -> String {
    let mut buffer = TextBuffer::new();
    for i in 0..limit {
        // write! into the buffer never fails; fmt::Write on TextBuffer is
        // infallible.
        let _ = write!(buffer, "{}", i);
    }
    buffer.into_string()
}
