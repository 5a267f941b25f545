//! The type hierarchy abstraction walked by class-hierarchy registries.
//!
//! A hierarchy answers two questions about opaque type handles: "what is the
//! direct superclass of this type" and "is this type a root". Everything else,
//! including assignability, is derived from those by walking superclass links.
//! Implementations backed by foreign metadata may contain cycles; every walk
//! here stops at the first repeated type.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// Single-inheritance type metadata.
pub trait TypeHierarchy {
    /// Handle identifying one type.
    type Type: Copy + Eq + Hash + fmt::Debug;

    /// Returns the direct superclass of `ty`, or `None` for a root or an
    /// unknown type.
    fn superclass(&self, ty: Self::Type) -> Option<Self::Type>;

    /// Returns true if `ty` is a universal root (the type every other type
    /// ultimately extends).
    fn is_root(&self, ty: Self::Type) -> bool;

    /// Returns true if the hierarchy knows `ty`.
    fn contains(&self, ty: Self::Type) -> bool;

    /// Human-readable name of `ty` for logs and error messages.
    fn type_name(&self, ty: Self::Type) -> String {
        format!("{ty:?}")
    }

    /// Returns true if a value of type `ty` can be used where `ancestor` is
    /// expected, i.e. `ancestor` is `ty` or one of its superclasses.
    fn is_assignable_from(&self, ancestor: Self::Type, ty: Self::Type) -> bool {
        let mut visited = HashSet::new();
        let mut current = Some(ty);
        while let Some(t) = current {
            if t == ancestor {
                return true;
            }
            if !visited.insert(t) {
                return false;
            }
            current = self.superclass(t);
        }
        false
    }

    /// Returns `ty` followed by each of its superclasses, nearest first.
    fn lineage(&self, ty: Self::Type) -> Vec<Self::Type> {
        let mut chain = Vec::new();
        let mut visited = HashSet::new();
        let mut current = Some(ty);
        while let Some(t) = current {
            if !visited.insert(t) {
                break;
            }
            chain.push(t);
            current = self.superclass(t);
        }
        chain
    }
}

impl<H: TypeHierarchy + ?Sized> TypeHierarchy for &H {
    type Type = H::Type;

    fn superclass(&self, ty: Self::Type) -> Option<Self::Type> {
        (**self).superclass(ty)
    }

    fn is_root(&self, ty: Self::Type) -> bool {
        (**self).is_root(ty)
    }

    fn contains(&self, ty: Self::Type) -> bool {
        (**self).contains(ty)
    }

    fn type_name(&self, ty: Self::Type) -> String {
        (**self).type_name(ty)
    }

    fn is_assignable_from(&self, ancestor: Self::Type, ty: Self::Type) -> bool {
        (**self).is_assignable_from(ancestor, ty)
    }

    fn lineage(&self, ty: Self::Type) -> Vec<Self::Type> {
        (**self).lineage(ty)
    }
}

impl<H: TypeHierarchy + ?Sized> TypeHierarchy for Arc<H> {
    type Type = H::Type;

    fn superclass(&self, ty: Self::Type) -> Option<Self::Type> {
        (**self).superclass(ty)
    }

    fn is_root(&self, ty: Self::Type) -> bool {
        (**self).is_root(ty)
    }

    fn contains(&self, ty: Self::Type) -> bool {
        (**self).contains(ty)
    }

    fn type_name(&self, ty: Self::Type) -> String {
        (**self).type_name(ty)
    }

    fn is_assignable_from(&self, ancestor: Self::Type, ty: Self::Type) -> bool {
        (**self).is_assignable_from(ancestor, ty)
    }

    fn lineage(&self, ty: Self::Type) -> Vec<Self::Type> {
        (**self).lineage(ty)
    }
}
