//! Core errors, type hierarchies, and immutable lists for Tangle.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with context
//! - [`TypeHierarchy`] - The "is-ancestor-of" abstraction registries walk
//! - [`TypeUniverse`] - An interned, acyclic [`TypeHierarchy`] keyed by [`TypeTag`]
//! - [`ImmutableList`] - Persistent, cheaply clonable result lists

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod hierarchy;
pub mod universe;

pub use collections::ImmutableList;
pub use error::{Error, ErrorContext, ErrorKind};
pub use hierarchy::TypeHierarchy;
pub use universe::{TypeTag, TypeUniverse};

/// Result type alias using the Tangle [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
