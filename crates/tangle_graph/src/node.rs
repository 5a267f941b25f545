//! Node handles and borrowed node views.
//!
//! A [`NodeRef`] is a generational index into a graph's node arena. Slots are
//! reused after removal, so the generation distinguishes a live node from a
//! stale handle that happens to point at the same slot.

use std::collections::BTreeSet;
use std::fmt;
use std::hash::Hash;

use crate::graph::DirectedGraph;

/// Stable handle to a node in a [`DirectedGraph`].
///
/// # Layout
/// - `index`: slot in the graph's node arena
/// - `generation`: odd while the slot is alive, bumped on every removal
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct NodeRef {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl NodeRef {
    pub(crate) const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Returns the arena slot of this handle.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.index
    }

    /// Returns the generation of this handle.
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeRef({}v{})", self.index, self.generation)
    }
}

/// Arena entry for one live node.
///
/// Edges are stored by slot index on both endpoints: `outgoing` on the
/// source, `incoming` on the target. A self-loop appears in both sets of the
/// same entry.
#[derive(Clone, Debug)]
pub(crate) struct NodeEntry<T> {
    pub(crate) value: T,
    pub(crate) outgoing: BTreeSet<u32>,
    pub(crate) incoming: BTreeSet<u32>,
}

impl<T> NodeEntry<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            outgoing: BTreeSet::new(),
            incoming: BTreeSet::new(),
        }
    }
}

/// Read-only view of a live node.
pub struct Node<'g, T> {
    graph: &'g DirectedGraph<T>,
    handle: NodeRef,
    entry: &'g NodeEntry<T>,
}

impl<'g, T: Clone + Eq + Hash> Node<'g, T> {
    pub(crate) fn new(
        graph: &'g DirectedGraph<T>,
        handle: NodeRef,
        entry: &'g NodeEntry<T>,
    ) -> Self {
        Self {
            graph,
            handle,
            entry,
        }
    }

    /// Returns the handle of this node.
    #[must_use]
    pub fn handle(&self) -> NodeRef {
        self.handle
    }

    /// Returns the value this node wraps.
    #[must_use]
    pub fn value(&self) -> &'g T {
        &self.entry.value
    }

    /// Returns true if there is an edge from this node to `other`.
    ///
    /// Direction matters: after `add_edge(a, b)`, `a` is adjacent to `b` but
    /// `b` is not adjacent to `a`. A stale `other` is never adjacent.
    #[must_use]
    pub fn is_adjacent(&self, other: NodeRef) -> bool {
        self.graph.is_live(other) && self.entry.outgoing.contains(&other.index)
    }

    /// Returns the number of outgoing edges.
    #[must_use]
    pub fn out_degree(&self) -> usize {
        self.entry.outgoing.len()
    }

    /// Returns the number of incoming edges.
    #[must_use]
    pub fn in_degree(&self) -> usize {
        self.entry.incoming.len()
    }

    /// Iterates over the targets of this node's outgoing edges.
    pub fn successors(&self) -> impl Iterator<Item = NodeRef> + 'g {
        let graph = self.graph;
        self.entry
            .outgoing
            .iter()
            .filter_map(move |&index| graph.handle_at(index))
    }

    /// Iterates over the sources of this node's incoming edges.
    pub fn predecessors(&self) -> impl Iterator<Item = NodeRef> + 'g {
        let graph = self.graph;
        self.entry
            .incoming
            .iter()
            .filter_map(move |&index| graph.handle_at(index))
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("handle", &self.handle)
            .field("value", &self.entry.value)
            .field("out_degree", &self.entry.outgoing.len())
            .field("in_degree", &self.entry.incoming.len())
            .finish()
    }
}

/// Mutable view of a live node.
///
/// Edge changes made through this view update the owning graph's edge count.
pub struct NodeMut<'g, T> {
    graph: &'g mut DirectedGraph<T>,
    handle: NodeRef,
}

impl<'g, T: Clone + Eq + Hash> NodeMut<'g, T> {
    pub(crate) fn new(graph: &'g mut DirectedGraph<T>, handle: NodeRef) -> Self {
        Self { graph, handle }
    }

    /// Returns the handle of this node.
    #[must_use]
    pub fn handle(&self) -> NodeRef {
        self.handle
    }

    /// Returns the value this node wraps.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        self.graph.value(self.handle)
    }

    /// Returns true if there is an edge from this node to `other`.
    #[must_use]
    pub fn is_adjacent(&self, other: NodeRef) -> bool {
        self.graph
            .node(self.handle)
            .is_some_and(|node| node.is_adjacent(other))
    }

    /// Adds an edge from this node to `other`.
    ///
    /// Returns false if the edge already existed or `other` is stale.
    pub fn add_edge(&mut self, other: NodeRef) -> bool {
        if !self.graph.is_live(other) {
            return false;
        }
        self.graph.link(self.handle.index, other.index)
    }

    /// Removes the edge from this node to `other`, if present.
    ///
    /// Returns whether an edge was removed. Removing a missing edge is a
    /// no-op.
    pub fn remove_edge(&mut self, other: NodeRef) -> bool {
        if !self.graph.is_live(other) {
            return false;
        }
        self.graph.unlink(self.handle.index, other.index)
    }
}
