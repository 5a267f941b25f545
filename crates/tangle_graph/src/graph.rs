//! Directed graph with value-deduplicated nodes.
//!
//! Nodes live in an arena of slots; a `value -> handle` index deduplicates
//! inserts by value equality. Edges are recorded on both endpoints so that
//! removing a node only touches its own neighbours.

use std::borrow::Borrow;
use std::collections::{BTreeSet, HashMap, VecDeque};
use std::fmt;
use std::hash::Hash;

use tangle_foundation::{Error, Result};
use tracing::{debug, trace};

use crate::node::{Node, NodeEntry, NodeMut, NodeRef};

/// One arena slot.
///
/// Odd generations are alive, even generations are free.
#[derive(Clone, Debug)]
struct Slot<T> {
    generation: u32,
    entry: Option<NodeEntry<T>>,
}

/// A directed, unweighted graph over hashable values.
///
/// Adding a value that is already present returns the existing node's
/// handle. Edges carry no payload and are never duplicated. Self-loops are
/// ordinary edges.
#[derive(Clone)]
pub struct DirectedGraph<T> {
    /// Node arena.
    slots: Vec<Slot<T>>,
    /// Map from value to the handle of its node.
    index: HashMap<T, NodeRef>,
    /// Free slots available for reuse.
    free_list: Vec<u32>,
    /// Number of distinct ordered pairs with an edge.
    edge_count: usize,
}

impl<T> Default for DirectedGraph<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            index: HashMap::new(),
            free_list: Vec::new(),
            edge_count: 0,
        }
    }
}

impl<T: Clone + Eq + Hash> DirectedGraph<T> {
    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `capacity` nodes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            free_list: Vec::new(),
            edge_count: 0,
        }
    }

    /// Adds a node for `value`, returning its handle.
    ///
    /// If an equal value is already present, its existing handle is returned
    /// and the graph is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the number of node slots exceeds `u32::MAX`.
    pub fn add(&mut self, value: T) -> NodeRef {
        if let Some(&node) = self.index.get(&value) {
            return node;
        }

        let entry = NodeEntry::new(value.clone());
        let node = if let Some(index) = self.free_list.pop() {
            // Reuse a slot (was even/free, now odd/alive)
            let slot = &mut self.slots[index as usize];
            slot.generation = slot.generation.wrapping_add(1);
            slot.entry = Some(entry);
            NodeRef::new(index, slot.generation)
        } else {
            let index = u32::try_from(self.slots.len()).expect("too many graph nodes");
            self.slots.push(Slot {
                generation: 1,
                entry: Some(entry),
            });
            NodeRef::new(index, 1)
        };

        self.index.insert(value, node);
        trace!(index = node.index, generation = node.generation, "graph node added");
        node
    }

    /// Returns the handle of the node for `value`, if present.
    ///
    /// The handle is the one returned by the `add` call that created the
    /// node, no matter how many times the value has been added since.
    #[must_use]
    pub fn get<Q>(&self, value: &Q) -> Option<NodeRef>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(value).copied()
    }

    /// Returns true if a node for `value` exists.
    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(value)
    }

    /// Adds an edge `from -> to`, creating either node if needed.
    ///
    /// Adding an existing edge is a no-op.
    pub fn add_edge(&mut self, from: T, to: T) {
        let source = self.add(from);
        let target = self.add(to);
        self.link(source.index, target.index);
    }

    /// Removes the edge `from -> to`.
    ///
    /// Returns whether an edge was removed; a missing node or edge is a no-op.
    pub fn remove_edge<Q>(&mut self, from: &Q, to: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match (self.get(from), self.get(to)) {
            (Some(source), Some(target)) => self.unlink(source.index, target.index),
            _ => false,
        }
    }

    /// Returns true if the edge `from -> to` exists.
    #[must_use]
    pub fn has_edge<Q>(&self, from: &Q, to: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match (self.get(from), self.get(to)) {
            (Some(source), Some(target)) => self
                .node(source)
                .is_some_and(|node| node.is_adjacent(target)),
            _ => false,
        }
    }

    /// Removes the node for `value` together with every incoming and outgoing
    /// edge.
    ///
    /// Returns whether a node was removed. Handles to the removed node become
    /// stale and never resolve again, even if its slot is reused.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(node) = self.index.remove(value) else {
            return false;
        };
        let Some(entry) = self.release(node.index) else {
            return false;
        };

        for &target in &entry.outgoing {
            if let Some(neighbour) = self.entry_mut(target) {
                neighbour.incoming.remove(&node.index);
            }
        }
        for &source in &entry.incoming {
            if let Some(neighbour) = self.entry_mut(source) {
                neighbour.outgoing.remove(&node.index);
            }
        }

        // A self-loop sits in both sets but is a single edge
        let self_loop = usize::from(entry.outgoing.contains(&node.index));
        self.edge_count -= entry.outgoing.len() + entry.incoming.len() - self_loop;

        trace!(index = node.index, "graph node removed");
        true
    }

    /// Removes every node and edge.
    ///
    /// Outstanding handles all become stale.
    pub fn clear(&mut self) {
        for index in 0..self.slots.len() {
            let index = u32::try_from(index).unwrap_or(u32::MAX);
            self.release(index);
        }
        self.index.clear();
        self.edge_count = 0;
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.index.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns true if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns a read-only view of a live node.
    #[must_use]
    pub fn node(&self, handle: NodeRef) -> Option<Node<'_, T>> {
        let entry = self.entry(handle)?;
        Some(Node::new(self, handle, entry))
    }

    /// Returns a mutable view of a live node.
    #[must_use]
    pub fn node_mut(&mut self, handle: NodeRef) -> Option<NodeMut<'_, T>> {
        if self.is_live(handle) {
            Some(NodeMut::new(self, handle))
        } else {
            None
        }
    }

    /// Returns the value wrapped by a live node.
    #[must_use]
    pub fn value(&self, handle: NodeRef) -> Option<&T> {
        self.entry(handle).map(|entry| &entry.value)
    }

    /// Iterates over the handles of every live node, in slot order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeRef> + '_ {
        self.live().map(|(handle, _)| handle)
    }

    /// Iterates over every node value, in slot order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.live().map(|(_, entry)| &entry.value)
    }

    /// Iterates over every edge as a `(from, to)` pair of values.
    pub fn edges(&self) -> impl Iterator<Item = (&T, &T)> {
        self.live().flat_map(move |(_, entry)| {
            entry.outgoing.iter().filter_map(move |&target| {
                self.slots[target as usize]
                    .entry
                    .as_ref()
                    .map(|t| (&entry.value, &t.value))
            })
        })
    }

    /// Iterates over the targets of edges leaving `value`.
    pub fn successors<Q>(&self, value: &Q) -> impl Iterator<Item = &T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let targets = self
            .get(value)
            .and_then(|handle| self.entry(handle))
            .map(|entry| &entry.outgoing);
        self.values_at(targets)
    }

    /// Iterates over the sources of edges entering `value`.
    pub fn predecessors<Q>(&self, value: &Q) -> impl Iterator<Item = &T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let sources = self
            .get(value)
            .and_then(|handle| self.entry(handle))
            .map(|entry| &entry.incoming);
        self.values_at(sources)
    }

    /// Returns a new graph with the same nodes and every edge flipped.
    ///
    /// Node and edge counts are preserved; a self-loop maps to itself.
    #[must_use]
    pub fn reverse(&self) -> Self {
        let mut reversed = Self::with_capacity(self.node_count());
        let mut remap = vec![None; self.slots.len()];

        for (handle, entry) in self.live() {
            remap[handle.index as usize] = Some(reversed.add(entry.value.clone()).index);
        }
        for (handle, entry) in self.live() {
            let Some(source) = remap[handle.index as usize] else {
                continue;
            };
            for &target in &entry.outgoing {
                if let Some(target) = remap[target as usize] {
                    reversed.link(target, source);
                }
            }
        }

        debug!(
            nodes = reversed.node_count(),
            edges = reversed.edge_count(),
            "graph reversed"
        );
        reversed
    }

    /// Orders the node values so every edge points forward.
    ///
    /// Among nodes that are ready at the same time, earlier slots come first.
    ///
    /// # Errors
    ///
    /// Returns a cycle error if a cycle (including a self-loop) prevents a
    /// complete ordering.
    pub fn topological_order(&self) -> Result<Vec<T>> {
        let mut in_degree: Vec<usize> = self
            .slots
            .iter()
            .map(|slot| slot.entry.as_ref().map_or(0, |entry| entry.incoming.len()))
            .collect();

        let mut ready: VecDeque<u32> = self
            .live()
            .filter(|(_, entry)| entry.incoming.is_empty())
            .map(|(handle, _)| handle.index)
            .collect();

        let mut order = Vec::with_capacity(self.node_count());
        while let Some(index) = ready.pop_front() {
            let Some(entry) = self.slots[index as usize].entry.as_ref() else {
                continue;
            };
            order.push(entry.value.clone());
            for &target in &entry.outgoing {
                let remaining = &mut in_degree[target as usize];
                *remaining -= 1;
                if *remaining == 0 {
                    ready.push_back(target);
                }
            }
        }

        if order.len() < self.node_count() {
            let remaining = self.node_count() - order.len();
            debug!(remaining, "topological order blocked by cycle");
            return Err(Error::cycle_detected(remaining));
        }
        Ok(order)
    }

    // =========================================================================
    // Arena internals
    // =========================================================================

    pub(crate) fn is_live(&self, handle: NodeRef) -> bool {
        self.entry(handle).is_some()
    }

    /// Returns the current handle for a live slot.
    pub(crate) fn handle_at(&self, index: u32) -> Option<NodeRef> {
        let slot = self.slots.get(index as usize)?;
        slot.entry
            .as_ref()
            .map(|_| NodeRef::new(index, slot.generation))
    }

    /// Records the edge `source -> target`. Returns false if it already existed.
    pub(crate) fn link(&mut self, source: u32, target: u32) -> bool {
        let Some(entry) = self.entry_mut(source) else {
            return false;
        };
        if !entry.outgoing.insert(target) {
            return false;
        }
        if let Some(entry) = self.entry_mut(target) {
            entry.incoming.insert(source);
        }
        self.edge_count += 1;
        true
    }

    /// Drops the edge `source -> target`. Returns false if it did not exist.
    pub(crate) fn unlink(&mut self, source: u32, target: u32) -> bool {
        let Some(entry) = self.entry_mut(source) else {
            return false;
        };
        if !entry.outgoing.remove(&target) {
            return false;
        }
        if let Some(entry) = self.entry_mut(target) {
            entry.incoming.remove(&source);
        }
        self.edge_count -= 1;
        true
    }

    fn entry(&self, handle: NodeRef) -> Option<&NodeEntry<T>> {
        let slot = self.slots.get(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.entry.as_ref()
    }

    fn entry_mut(&mut self, index: u32) -> Option<&mut NodeEntry<T>> {
        self.slots.get_mut(index as usize)?.entry.as_mut()
    }

    /// Frees a slot, returning its entry if it was alive.
    fn release(&mut self, index: u32) -> Option<NodeEntry<T>> {
        let slot = self.slots.get_mut(index as usize)?;
        let entry = slot.entry.take()?;
        // Was odd/alive, now even/free
        slot.generation = slot.generation.wrapping_add(1);
        self.free_list.push(index);
        Some(entry)
    }

    fn live(&self) -> impl Iterator<Item = (NodeRef, &NodeEntry<T>)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            let entry = slot.entry.as_ref()?;
            let index = u32::try_from(index).ok()?;
            Some((NodeRef::new(index, slot.generation), entry))
        })
    }

    fn values_at<'a>(&'a self, indices: Option<&'a BTreeSet<u32>>) -> impl Iterator<Item = &'a T> {
        indices.into_iter().flatten().filter_map(move |&index| {
            self.slots[index as usize]
                .entry
                .as_ref()
                .map(|entry| &entry.value)
        })
    }
}

impl<T: Clone + Eq + Hash + fmt::Debug> fmt::Debug for DirectedGraph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (_, entry) in self.live() {
            let targets: Vec<&T> = entry
                .outgoing
                .iter()
                .filter_map(|&index| self.slots[index as usize].entry.as_ref())
                .map(|target| &target.value)
                .collect();
            map.entry(&entry.value, &targets);
        }
        map.finish()
    }
}

impl<T: Clone + Eq + Hash> FromIterator<(T, T)> for DirectedGraph<T> {
    fn from_iter<I: IntoIterator<Item = (T, T)>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl<T: Clone + Eq + Hash> Extend<(T, T)> for DirectedGraph<T> {
    fn extend<I: IntoIterator<Item = (T, T)>>(&mut self, iter: I) {
        for (from, to) in iter {
            self.add_edge(from, to);
        }
    }
}
