//! The ordered multimap contract registries are exposed through.
//!
//! Only `put`, `get`, and `is_empty` are part of the working contract. Every
//! other operation of a general multimap is declared so callers get a loud
//! [`ErrorKind::Unsupported`](tangle_foundation::ErrorKind::Unsupported)
//! instead of an empty answer that looks legitimate.

use tangle_foundation::{Error, ImmutableList, Result};

/// An ordered multimap from keys to lists of values.
#[allow(unused_variables)]
pub trait Multimap<K, V: Clone> {
    /// Appends `value` to the values of `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key violates the implementation's
    /// preconditions.
    fn put(&mut self, key: K, value: V) -> Result<()>;

    /// Returns the values associated with `key`, possibly empty.
    fn get(&self, key: K) -> ImmutableList<V>;

    /// Returns true if nothing has been put into the multimap.
    fn is_empty(&self) -> bool;

    /// Total number of key-value pairs.
    ///
    /// # Errors
    ///
    /// Unsupported unless overridden.
    fn size(&self) -> Result<usize> {
        Err(Error::unsupported("size"))
    }

    /// Distinct keys.
    ///
    /// # Errors
    ///
    /// Unsupported unless overridden.
    fn key_set(&self) -> Result<Vec<K>> {
        Err(Error::unsupported("key_set"))
    }

    /// Keys with repetition, one per pair.
    ///
    /// # Errors
    ///
    /// Unsupported unless overridden.
    fn keys(&self) -> Result<Vec<K>> {
        Err(Error::unsupported("keys"))
    }

    /// Every value, one per pair.
    ///
    /// # Errors
    ///
    /// Unsupported unless overridden.
    fn values(&self) -> Result<Vec<V>> {
        Err(Error::unsupported("values"))
    }

    /// Every key-value pair.
    ///
    /// # Errors
    ///
    /// Unsupported unless overridden.
    fn entries(&self) -> Result<Vec<(K, V)>> {
        Err(Error::unsupported("entries"))
    }

    /// Removes and returns every value of `key`.
    ///
    /// # Errors
    ///
    /// Unsupported unless overridden.
    fn remove_all(&mut self, key: K) -> Result<Vec<V>> {
        Err(Error::unsupported("remove_all"))
    }

    /// Removes one key-value pair.
    ///
    /// # Errors
    ///
    /// Unsupported unless overridden.
    fn remove(&mut self, key: K, value: &V) -> Result<bool> {
        Err(Error::unsupported("remove"))
    }

    /// Appends several values to `key`.
    ///
    /// # Errors
    ///
    /// Unsupported unless overridden.
    fn put_all(&mut self, key: K, values: Vec<V>) -> Result<bool> {
        Err(Error::unsupported("put_all"))
    }

    /// Replaces the values of `key`, returning the old ones.
    ///
    /// # Errors
    ///
    /// Unsupported unless overridden.
    fn replace_values(&mut self, key: K, values: Vec<V>) -> Result<Vec<V>> {
        Err(Error::unsupported("replace_values"))
    }

    /// Key to value-list view.
    ///
    /// # Errors
    ///
    /// Unsupported unless overridden.
    fn as_map(&self) -> Result<Vec<(K, Vec<V>)>> {
        Err(Error::unsupported("as_map"))
    }

    /// Whether any pair has `key`.
    ///
    /// # Errors
    ///
    /// Unsupported unless overridden.
    fn contains_key(&self, key: K) -> Result<bool> {
        Err(Error::unsupported("contains_key"))
    }

    /// Whether any pair has `value`.
    ///
    /// # Errors
    ///
    /// Unsupported unless overridden.
    fn contains_value(&self, value: &V) -> Result<bool> {
        Err(Error::unsupported("contains_value"))
    }

    /// Whether the exact pair exists.
    ///
    /// # Errors
    ///
    /// Unsupported unless overridden.
    fn contains_entry(&self, key: K, value: &V) -> Result<bool> {
        Err(Error::unsupported("contains_entry"))
    }

    /// Removes every pair.
    ///
    /// # Errors
    ///
    /// Unsupported unless overridden.
    fn clear(&mut self) -> Result<()> {
        Err(Error::unsupported("clear"))
    }
}
