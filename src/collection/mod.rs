//! Growable ordered collection
//!
//! [`OrderedCollection`] is a resizable, indexable sequence with
//! insertion-order semantics unless explicitly sorted or reversed. The
//! element type is a compile-time parameter, so inserting a mismatched type
//! is rejected by the compiler rather than checked at runtime.

use std::cmp::Ordering;
use std::fmt;

/// A resizable ordered sequence of elements.
///
/// Backed by a `Vec<T>`; capacity may exceed the logical length and grows
/// with the backing store's amortized doubling policy.
///
/// # Examples
///
/// ```
/// use typetour::collection::OrderedCollection;
///
/// let mut numbers = OrderedCollection::new();
/// numbers.add(1);
/// numbers.add_all([2, 3]);
/// assert_eq!(numbers.as_slice(), &[1, 2, 3]);
/// assert!(numbers.contains(&2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderedCollection<T> {
    items: Vec<T>,
}

impl<T> OrderedCollection<T> {
    /// Create an empty collection.
    #[inline]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create an empty collection with room for at least `capacity`
    /// elements.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Elements the backing store can hold without reallocating; always at
    /// least [`len`](Self::len).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Append an element at the end.
    #[inline]
    pub fn add(
        &mut self,
        value: T,
    ) {
        self.items.push(value);
    }

    /// Append every element of `values` in order.
    pub fn add_all<I>(
        &mut self,
        values: I,
    ) where
        I: IntoIterator<Item = T>,
    {
        self.items.extend(values);
    }

    /// Insert an element at `index`, shifting later elements right.
    ///
    /// Returns `false` (and leaves the collection unchanged) if `index` is
    /// past the end.
    pub fn insert(
        &mut self,
        index: usize,
        value: T,
    ) -> bool {
        if index <= self.items.len() {
            self.items.insert(index, value);
            true
        } else {
            false
        }
    }

    /// Remove and return the element at `index`, shifting later elements
    /// left. Returns `None` if out of range.
    pub fn remove_at(
        &mut self,
        index: usize,
    ) -> Option<T> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Remove every element the predicate matches, preserving the order of
    /// the rest. Returns how many were removed.
    ///
    /// Single pass over the backing store; prefer this over removing by
    /// index inside a loop, which shifts indices under the iteration.
    pub fn remove_all<F>(
        &mut self,
        mut predicate: F,
    ) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.items.len();
        self.items.retain(|item| !predicate(item));
        before - self.items.len()
    }

    /// Remove all elements; capacity is retained.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Element at `index`, if in range.
    #[inline]
    pub fn get(
        &self,
        index: usize,
    ) -> Option<&T> {
        self.items.get(index)
    }

    /// Iterate over the elements in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// View the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Reverse the element order in place.
    #[inline]
    pub fn reverse(&mut self) {
        self.items.reverse();
    }

    /// Sort with an explicit comparator (stable).
    pub fn sort_by<F>(
        &mut self,
        compare: F,
    ) where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.items.sort_by(compare);
    }
}

impl<T: PartialEq> OrderedCollection<T> {
    /// Remove the first occurrence of `value`. Returns whether anything was
    /// removed.
    pub fn remove(
        &mut self,
        value: &T,
    ) -> bool {
        match self.items.iter().position(|item| item == value) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Whether `value` occurs in the collection.
    pub fn contains(
        &self,
        value: &T,
    ) -> bool {
        self.items.contains(value)
    }
}

impl<T: Ord> OrderedCollection<T> {
    /// Sort ascending by the element type's natural order (stable).
    #[inline]
    pub fn sort(&mut self) {
        self.items.sort();
    }

    /// Binary search over sorted content.
    ///
    /// Returns `Ok(index)` for a hit; `Err` carries the insertion point and
    /// is the not-found sentinel. The result is unspecified if the
    /// collection is not sorted.
    #[inline]
    pub fn binary_search(
        &self,
        value: &T,
    ) -> Result<usize, usize> {
        self.items.binary_search(value)
    }
}

impl<T> From<Vec<T>> for OrderedCollection<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for OrderedCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for OrderedCollection<T> {
    fn extend<I: IntoIterator<Item = T>>(
        &mut self,
        iter: I,
    ) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for OrderedCollection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OrderedCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: fmt::Display> fmt::Display for OrderedCollection<T> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "[{}]",
            self.items
                .iter()
                .map(|item| item.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests;
