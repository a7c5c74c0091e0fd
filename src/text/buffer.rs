//! Mutable accumulation buffer for text
//!
//! [`TextBuffer`] is the counterpart to the immutable operations in the
//! parent module: it appends in place into one growable allocation instead
//! of building a new string per step.

use std::fmt;

/// A growable, append-only character buffer.
///
/// Appending amortizes allocations the way `Vec` does, so building a large
/// string piecewise costs O(n) total instead of the O(n^2) of repeated
/// concatenate-and-rebind.
///
/// # Examples
///
/// ```
/// use typetour::text::TextBuffer;
///
/// let mut buffer = TextBuffer::new();
/// buffer.push_str("Hello");
/// buffer.push_str(" World");
/// assert_eq!(buffer.as_str(), "Hello World");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    inner: String,
}

impl TextBuffer {
    /// Create an empty buffer.
    #[inline]
    pub fn new() -> Self {
        Self {
            inner: String::new(),
        }
    }

    /// Create an empty buffer with at least `capacity` bytes preallocated.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: String::with_capacity(capacity),
        }
    }

    /// Append a single character.
    #[inline]
    pub fn push(
        &mut self,
        ch: char,
    ) {
        self.inner.push(ch);
    }

    /// Append a string slice.
    #[inline]
    pub fn push_str(
        &mut self,
        s: &str,
    ) {
        self.inner.push_str(s);
    }

    /// Append the `Display` rendering of any value.
    pub fn append<T: fmt::Display>(
        &mut self,
        value: T,
    ) -> &mut Self {
        use fmt::Write as _;
        // Writing into a String cannot fail.
        let _ = write!(self.inner, "{}", value);
        self
    }

    /// Length of the accumulated text in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether nothing has been appended yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Bytes currently allocated; may exceed [`len`](Self::len).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Discard the accumulated text, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// View the accumulated text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Consume the buffer, yielding the accumulated text without copying.
    #[inline]
    pub fn into_string(self) -> String {
        self.inner
    }
}

impl fmt::Write for TextBuffer {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        self.inner.push_str(s);
        Ok(())
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

impl From<String> for TextBuffer {
    fn from(inner: String) -> Self {
        Self { inner }
    }
}

impl From<TextBuffer> for String {
    fn from(buffer: TextBuffer) -> Self {
        buffer.inner
    }
}
