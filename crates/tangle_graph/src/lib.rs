//! Directed graph with value-deduplicated nodes for Tangle.
//!
//! This crate provides:
//! - [`DirectedGraph`] - Arena-backed directed graph over hashable values
//! - [`NodeRef`] - Generational node handles that never alias after removal
//! - [`Node`] / [`NodeMut`] - Borrowed node views for adjacency queries and edits
//!
//! Hosts use it to model ordering relationships ("X runs before Y") and
//! [`DirectedGraph::reverse`] to answer "what depends on this" queries.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod graph;
pub mod node;

pub use graph::DirectedGraph;
pub use node::{Node, NodeMut, NodeRef};
