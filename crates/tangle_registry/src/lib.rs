//! Class-hierarchy indexed handler registry for Tangle.
//!
//! This crate provides:
//! - [`ClassHierarchyRegistry`] - Values registered per type, resolved by ancestor walk
//! - [`Multimap`] - The multimap contract the registry implements
//! - [`RegistryConfig`] - Naming, capacities, and [`ResultMode`]
//!
//! A host creates one registry per handler family, registers handlers during
//! startup, then calls [`ClassHierarchyRegistry::get`] with the runtime type
//! of every dispatched event.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod multimap;
pub mod registry;

pub use config::{RegistryConfig, ResultMode};
pub use multimap::Multimap;
pub use registry::ClassHierarchyRegistry;
