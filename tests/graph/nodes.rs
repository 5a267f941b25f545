//! Integration tests for node deduplication and handles

use tangle_graph::DirectedGraph;

// =============================================================================
// Deduplication
// =============================================================================

#[test]
fn equal_values_share_a_node() {
    let mut graph = DirectedGraph::new();
    graph.add(1);
    graph.add(2);
    graph.add(3);
    graph.add(2);

    assert_eq!(graph.node_count(), 3);
}

#[test]
fn dedup_uses_value_equality() {
    let mut graph = DirectedGraph::new();
    let first = graph.add(String::from("zombie"));
    let second = graph.add("zom".to_string() + "bie");

    assert_eq!(first, second);
    assert_eq!(graph.node_count(), 1);
}

#[test]
fn get_returns_the_first_handle() {
    let mut graph = DirectedGraph::new();
    let handle = graph.add("creeper");

    for _ in 0..5 {
        assert_eq!(graph.add("creeper"), handle);
        assert_eq!(graph.get(&"creeper"), Some(handle));
    }
    assert_eq!(graph.value(handle), Some(&"creeper"));
}

#[test]
fn get_missing_value() {
    let graph: DirectedGraph<u32> = DirectedGraph::new();
    assert_eq!(graph.get(&1), None);
    assert!(!graph.contains(&1));
}

// =============================================================================
// Removal
// =============================================================================

#[test]
fn remove_reports_presence() {
    let mut graph = DirectedGraph::new();
    graph.add(1);

    assert!(graph.remove(&1));
    assert!(!graph.remove(&1));
    assert!(!graph.remove(&2));
    assert_eq!(graph.node_count(), 0);
}

#[test]
fn node_count_tracks_adds_and_removes() {
    let mut graph = DirectedGraph::new();
    for i in 0..10 {
        graph.add(i);
    }
    for i in (0..10).step_by(2) {
        graph.remove(&i);
    }
    graph.add(3);

    assert_eq!(graph.node_count(), 5);
}

#[test]
fn slots_are_reused_without_aliasing() {
    let mut graph = DirectedGraph::new();
    let a = graph.add('a');
    graph.remove(&'a');
    let b = graph.add('b');

    assert_eq!(a.index(), b.index());
    assert_ne!(a, b);
    assert!(graph.node(a).is_none());
    assert_eq!(graph.value(b), Some(&'b'));
}

#[test]
fn clear_resets_everything() {
    let mut graph: DirectedGraph<u8> = [(1, 2), (2, 3), (3, 1)].into_iter().collect();
    graph.clear();

    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.nodes().count(), 0);
}
