//! Tangle - generic collections for handler dispatch and ordering
//!
//! This crate re-exports all layers of the Tangle workspace for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: tangle_graph       — Directed graph with deduplicated nodes
//!          tangle_registry    — Class-hierarchy handler registry
//! Layer 0: tangle_foundation  — Errors, type hierarchies, immutable lists
//! ```

pub use tangle_foundation as foundation;
pub use tangle_graph as graph;
pub use tangle_registry as registry;
