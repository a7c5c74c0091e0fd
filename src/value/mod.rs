//! Value-type semantics
//!
//! This module provides [`ValueRecord`], the smallest possible holder of a
//! copyable attribute. It exists to make copy-by-value observable: assigning
//! a `ValueRecord` (or passing it to a function) duplicates the bits, and
//! mutating the duplicate never touches the original.

use std::fmt;

/// A record with a single copyable attribute.
///
/// `ValueRecord` is `Copy`: assignment and parameter passing duplicate the
/// value, so two bindings never share storage.
///
/// # Examples
///
/// ```
/// use typetour::value::ValueRecord;
///
/// let first = ValueRecord::new(30);
/// let mut second = first;
/// second.age = 40;
/// assert_eq!(first.age, 30);
/// assert_eq!(second.age, 40);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValueRecord {
    /// Age attribute (stored inline, copied with the record)
    pub age: i64,
}

impl ValueRecord {
    /// Create a record with the given age.
    #[inline]
    pub fn new(age: i64) -> Self {
        Self { age }
    }

    /// Return a copy of this record with a different age.
    ///
    /// The receiver is taken by value, so the caller's binding is a copy and
    /// stays unchanged.
    #[inline]
    pub fn with_age(
        mut self,
        age: i64,
    ) -> Self {
        self.age = age;
        self
    }
}

impl fmt::Display for ValueRecord {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "ValueRecord {{ age: {} }}", self.age)
    }
}
