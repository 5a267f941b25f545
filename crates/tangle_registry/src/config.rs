//! Registry configuration.

/// How `get` treats a registration that matches more than one ancestor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResultMode {
    /// A registration contributes its value once per matching ancestor in
    /// the walk, so handlers registered for a supertype appear several times.
    #[default]
    Duplicating,
    /// A registration contributes its value at most once, at its first match.
    Distinct,
}

/// Configuration for a class-hierarchy registry.
#[derive(Clone, Debug)]
pub struct RegistryConfig {
    /// Name of the registry domain, used in error context and log fields.
    pub name: String,
    /// Initial capacity of the query cache.
    pub cache_capacity: usize,
    /// Initial capacity of the registration list.
    pub registration_capacity: usize,
    /// Duplicate handling for query results.
    pub result_mode: ResultMode,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            name: "registry".to_string(),
            cache_capacity: 64,
            registration_capacity: 16,
            result_mode: ResultMode::Duplicating,
        }
    }
}

impl RegistryConfig {
    /// Creates a new registry configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to name the registry domain.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builder method to set the initial cache capacity.
    #[must_use]
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Builder method to set the initial registration capacity.
    #[must_use]
    pub fn with_registration_capacity(mut self, capacity: usize) -> Self {
        self.registration_capacity = capacity;
        self
    }

    /// Builder method to set the result mode.
    #[must_use]
    pub fn with_result_mode(mut self, mode: ResultMode) -> Self {
        self.result_mode = mode;
        self
    }

    /// Builder method to return each registration at most once per query.
    #[must_use]
    pub fn distinct(self) -> Self {
        self.with_result_mode(ResultMode::Distinct)
    }
}
