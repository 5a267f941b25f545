//! Class-hierarchy indexed handler registry.
//!
//! Values are registered against types and looked up by the runtime type of
//! whatever is being dispatched. A lookup walks from the queried type up to
//! the registry's base class and collects every value whose key is assignable
//! from a visited ancestor. Results are memoized per queried type and never
//! invalidated: a `put` after a type has been queried is not visible to that
//! type. The cache never evicts; the set of distinct runtime types a host
//! dispatches on is small and fixed.

use std::collections::HashSet;
use std::fmt;

use dashmap::DashMap;
use tangle_foundation::{Error, ErrorContext, ImmutableList, Result, TypeHierarchy};
use tracing::{debug, trace, warn};

use crate::config::{RegistryConfig, ResultMode};
use crate::multimap::Multimap;

/// Registry answering "which registered values apply to this type".
///
/// Registration (`put`) needs exclusive access; lookups (`get`) take `&self`
/// and may run concurrently from many threads. Two threads missing the cache
/// for the same type both compute the same list and the first one stored
/// wins.
pub struct ClassHierarchyRegistry<H: TypeHierarchy, V: Clone> {
    /// Type metadata walked on cache misses.
    hierarchy: H,
    /// Ceiling of every walk.
    base: H::Type,
    config: RegistryConfig,
    /// Registrations in insertion order.
    registrations: Vec<(H::Type, V)>,
    /// Query type -> memoized result.
    cache: DashMap<H::Type, ImmutableList<V>>,
}

impl<H: TypeHierarchy, V: Clone> ClassHierarchyRegistry<H, V> {
    /// Creates a registry bounded by `base` with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `base` is not part of `hierarchy`.
    pub fn new(hierarchy: H, base: H::Type) -> Result<Self> {
        Self::with_config(hierarchy, base, RegistryConfig::default())
    }

    /// Creates a registry bounded by `base`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base` is not part of `hierarchy`.
    pub fn with_config(hierarchy: H, base: H::Type, config: RegistryConfig) -> Result<Self> {
        if !hierarchy.contains(base) {
            return Err(Error::unknown_type(hierarchy.type_name(base)).with_context(
                ErrorContext::new()
                    .with_source(config.name.clone())
                    .with_operation("new"),
            ));
        }

        debug!(
            registry = %config.name,
            base = %hierarchy.type_name(base),
            mode = ?config.result_mode,
            "registry created"
        );
        Ok(Self {
            registrations: Vec::with_capacity(config.registration_capacity),
            cache: DashMap::with_capacity(config.cache_capacity),
            hierarchy,
            base,
            config,
        })
    }

    /// Registers `value` for `key`.
    ///
    /// Values for the same key keep their insertion order. Types that were
    /// already queried do not see the new value.
    ///
    /// # Errors
    ///
    /// Returns an error if `key` is not part of the hierarchy.
    pub fn put(&mut self, key: H::Type, value: V) -> Result<()> {
        if !self.hierarchy.contains(key) {
            return Err(self.fail(Error::unknown_type(self.hierarchy.type_name(key)), "put"));
        }

        self.registrations.push((key, value));
        debug!(
            registry = %self.config.name,
            key = %self.hierarchy.type_name(key),
            registrations = self.registrations.len(),
            "value registered"
        );
        Ok(())
    }

    /// Registers a value from possibly-absent arguments.
    ///
    /// # Errors
    ///
    /// Returns a missing argument error naming `key` or `value` when either
    /// is `None`, or the errors of [`put`](Self::put).
    pub fn try_put(&mut self, key: Option<H::Type>, value: Option<V>) -> Result<()> {
        let Some(key) = key else {
            return Err(self.fail(Error::null_argument("key"), "put"));
        };
        let Some(value) = value else {
            return Err(self.fail(Error::null_argument("value"), "put"));
        };
        self.put(key, value)
    }

    /// Returns every value registered for `query` or one of its ancestors up
    /// to the base class.
    ///
    /// The first call for a type computes and caches the list; later calls
    /// return the cached list unchanged.
    pub fn get(&self, query: H::Type) -> ImmutableList<V> {
        if let Some(hit) = self.cache.get(&query) {
            trace!(registry = %self.config.name, query = ?query, "registry cache hit");
            return hit.value().clone();
        }

        if !self.hierarchy.contains(query) {
            warn!(
                registry = %self.config.name,
                query = %self.hierarchy.type_name(query),
                "query for a type outside the hierarchy"
            );
        }

        let walk = self.ancestors(query);
        let computed = self.collect(&walk);
        let stored = self.cache.entry(query).or_insert(computed).value().clone();
        debug!(
            registry = %self.config.name,
            query = %self.hierarchy.type_name(query),
            ancestors = walk.len(),
            values = stored.len(),
            "registry cache populated"
        );
        stored
    }

    /// The bounded ancestor walk for `query`, nearest first.
    ///
    /// Starts at `query` and follows superclasses, stopping before a root
    /// type or the base class's own superclass. A repeated type ends the
    /// walk.
    #[must_use]
    pub fn ancestors(&self, query: H::Type) -> Vec<H::Type> {
        let ceiling = self.hierarchy.superclass(self.base);
        let mut visited = HashSet::new();
        let mut walk = Vec::new();

        let mut current = Some(query);
        while let Some(ty) = current {
            if self.hierarchy.is_root(ty) || Some(ty) == ceiling {
                break;
            }
            if !visited.insert(ty) {
                break;
            }
            walk.push(ty);
            current = self.hierarchy.superclass(ty);
        }
        walk
    }

    /// Returns true if nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Returns the number of registrations.
    #[must_use]
    pub fn registration_count(&self) -> usize {
        self.registrations.len()
    }

    /// Iterates over the values registered exactly under `key`, in
    /// insertion order.
    pub fn registrations_for(&self, key: H::Type) -> impl Iterator<Item = &V> {
        self.registrations
            .iter()
            .filter(move |(registered, _)| *registered == key)
            .map(|(_, value)| value)
    }

    /// Returns the number of memoized query types.
    #[must_use]
    pub fn cached_query_count(&self) -> usize {
        self.cache.len()
    }

    /// Returns true if `query` has a memoized result.
    #[must_use]
    pub fn is_cached(&self, query: H::Type) -> bool {
        self.cache.contains_key(&query)
    }

    /// Returns the base class bounding every walk.
    #[must_use]
    pub fn base(&self) -> H::Type {
        self.base
    }

    /// Returns the type hierarchy.
    #[must_use]
    pub fn hierarchy(&self) -> &H {
        &self.hierarchy
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    fn collect(&self, walk: &[H::Type]) -> ImmutableList<V> {
        let distinct = self.config.result_mode == ResultMode::Distinct;
        let mut seen = HashSet::new();
        let mut values = Vec::new();

        for &parent in walk {
            for (slot, (key, value)) in self.registrations.iter().enumerate() {
                if !self.hierarchy.is_assignable_from(*key, parent) {
                    continue;
                }
                if distinct && !seen.insert(slot) {
                    continue;
                }
                values.push(value.clone());
            }
        }
        ImmutableList::from(values)
    }

    fn fail(&self, error: Error, operation: &'static str) -> Error {
        error.with_context(
            ErrorContext::new()
                .with_source(self.config.name.clone())
                .with_operation(operation),
        )
    }
}

impl<H: TypeHierarchy, V: Clone> Multimap<H::Type, V> for ClassHierarchyRegistry<H, V> {
    fn put(&mut self, key: H::Type, value: V) -> Result<()> {
        Self::put(self, key, value)
    }

    fn get(&self, key: H::Type) -> ImmutableList<V> {
        Self::get(self, key)
    }

    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }
}

impl<H: TypeHierarchy, V: Clone> fmt::Debug for ClassHierarchyRegistry<H, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassHierarchyRegistry")
            .field("name", &self.config.name)
            .field("base", &self.base)
            .field("registrations", &self.registrations.len())
            .field("cached_queries", &self.cache.len())
            .finish_non_exhaustive()
    }
}
