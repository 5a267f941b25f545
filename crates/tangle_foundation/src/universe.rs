//! Interned type universe for single-inheritance hierarchies.
//!
//! Type names are interned to [`TypeTag`] handles so registries can compare
//! and hash types cheaply. Each declared type records its superclass; a
//! superclass must be declared first, so a universe can never contain a cycle.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{Error, ErrorKind};
use crate::hierarchy::TypeHierarchy;
use crate::Result;

/// Interned type identifier.
///
/// Tags are only meaningful for the [`TypeUniverse`] that issued them.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct TypeTag(pub(crate) u32);

impl TypeTag {
    /// The universal root type every declared type ultimately extends.
    pub const ROOT: TypeTag = TypeTag(0);

    /// Returns the raw index of this tag.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeTag({})", self.0)
    }
}

/// Interner for type names and their superclass links.
///
/// It is not thread-safe for writes; declare every type up front, then share
/// the universe (typically behind an [`Arc`]) with the registries that walk it.
#[derive(Clone, Debug)]
pub struct TypeUniverse {
    /// Type names by tag index.
    names: Vec<Arc<str>>,
    /// Superclass by tag index (`None` only for the root).
    parents: Vec<Option<TypeTag>>,
    /// Map from type name to tag.
    by_name: HashMap<Arc<str>, TypeTag>,
}

impl Default for TypeUniverse {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeUniverse {
    /// Name of the pre-interned root type.
    pub const ROOT_NAME: &'static str = "object";

    /// Creates a universe containing only the root type.
    #[must_use]
    pub fn new() -> Self {
        let root: Arc<str> = Self::ROOT_NAME.into();
        let mut by_name = HashMap::new();
        by_name.insert(root.clone(), TypeTag::ROOT);
        Self {
            names: vec![root],
            parents: vec![None],
            by_name,
        }
    }

    /// Declares a type directly under the root.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` was already declared under another parent.
    pub fn declare(&mut self, name: &str) -> Result<TypeTag> {
        self.declare_subtype(name, TypeTag::ROOT)
    }

    /// Declares a type extending `parent`.
    ///
    /// Redeclaring a name with the same parent returns the existing tag.
    ///
    /// # Errors
    ///
    /// Returns an error if `parent` is not part of this universe, or if
    /// `name` was already declared under a different parent.
    ///
    /// # Panics
    ///
    /// Panics if the number of declared types exceeds `u32::MAX`.
    pub fn declare_subtype(&mut self, name: &str, parent: TypeTag) -> Result<TypeTag> {
        if !self.contains(parent) {
            return Err(Error::unknown_type(format!("{parent:?}")));
        }

        if let Some(&existing) = self.by_name.get(name) {
            let recorded = self.parents[existing.0 as usize];
            if recorded == Some(parent) {
                return Ok(existing);
            }
            return Err(Error::new(ErrorKind::ConflictingParent {
                name: name.to_string(),
                existing: recorded.map_or_else(|| "<none>".to_string(), |p| self.type_name(p)),
                requested: self.type_name(parent),
            }));
        }

        let tag = TypeTag(u32::try_from(self.names.len()).expect("too many types"));
        let arc: Arc<str> = name.into();
        self.names.push(arc.clone());
        self.parents.push(Some(parent));
        self.by_name.insert(arc, tag);
        Ok(tag)
    }

    /// Looks up a previously declared type by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<TypeTag> {
        self.by_name.get(name).copied()
    }

    /// Gets the name of a type.
    #[must_use]
    pub fn name(&self, tag: TypeTag) -> Option<&str> {
        self.names.get(tag.0 as usize).map(AsRef::as_ref)
    }

    /// Returns the number of declared types, including the root.
    #[must_use]
    pub fn type_count(&self) -> usize {
        self.names.len()
    }

    /// Iterates over every declared tag in declaration order.
    pub fn tags(&self) -> impl Iterator<Item = TypeTag> + '_ {
        (0..self.names.len()).map(|i| TypeTag(u32::try_from(i).unwrap_or(u32::MAX)))
    }
}

impl TypeHierarchy for TypeUniverse {
    type Type = TypeTag;

    fn superclass(&self, ty: TypeTag) -> Option<TypeTag> {
        self.parents.get(ty.0 as usize).copied().flatten()
    }

    fn is_root(&self, ty: TypeTag) -> bool {
        ty == TypeTag::ROOT
    }

    fn contains(&self, ty: TypeTag) -> bool {
        (ty.0 as usize) < self.names.len()
    }

    fn type_name(&self, ty: TypeTag) -> String {
        self.name(ty)
            .map_or_else(|| format!("<unknown #{}>", ty.0), str::to_string)
    }
}
