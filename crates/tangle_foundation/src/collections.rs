//! Persistent, read-only result lists with structural sharing.
//!
//! A thin wrapper around the `im` crate's persistent vector. Registries hand
//! the same cached list to every caller, so cloning must be O(1) and the
//! list must offer no way to mutate shared state.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

/// Immutable list with structural sharing.
///
/// Cloning is O(1). There are no mutating methods; build one with
/// [`FromIterator`] or [`From<Vec<T>>`].
#[derive(Clone, Default)]
pub struct ImmutableList<T>(im::Vector<T>)
where
    T: Clone;

impl<T: Clone> ImmutableList<T> {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self(im::Vector::new())
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets an element by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }

    /// Returns the first element.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.0.front()
    }

    /// Returns the last element.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.0.back()
    }

    /// Copies the elements into a standard vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.0.iter().cloned().collect()
    }
}

impl<T: Clone + PartialEq> ImmutableList<T> {
    /// Returns true if the list contains an element equal to `value`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.0.iter().any(|item| item == value)
    }

    /// Returns how many elements are equal to `value`.
    #[must_use]
    pub fn count_of(&self, value: &T) -> usize {
        self.0.iter().filter(|item| *item == value).count()
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for ImmutableList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone + PartialEq> PartialEq for ImmutableList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Clone + Eq> Eq for ImmutableList<T> {}

impl<T: Clone + PartialEq> PartialEq<Vec<T>> for ImmutableList<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<T: Clone + Hash> Hash for ImmutableList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: Clone> From<Vec<T>> for ImmutableList<T> {
    fn from(items: Vec<T>) -> Self {
        Self(im::Vector::from(items))
    }
}

impl<T: Clone> FromIterator<T> for ImmutableList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(im::Vector::from_iter(iter))
    }
}

impl<T: Clone> IntoIterator for ImmutableList<T> {
    type Item = T;
    type IntoIter = im::vector::ConsumingIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T: Clone> IntoIterator for &'a ImmutableList<T> {
    type Item = &'a T;
    type IntoIter = im::vector::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
