//! Integration tests for topological ordering

use tangle_foundation::ErrorKind;
use tangle_graph::DirectedGraph;

fn position<T: PartialEq>(order: &[T], value: &T) -> usize {
    order.iter().position(|v| v == value).unwrap()
}

#[test]
fn every_edge_points_forward() {
    let edges = [(5, 11), (7, 11), (7, 8), (3, 8), (3, 10), (11, 2), (11, 9), (11, 10), (8, 9)];
    let graph: DirectedGraph<u32> = edges.into_iter().collect();

    let order = graph.topological_order().unwrap();
    assert_eq!(order.len(), graph.node_count());
    for (from, to) in edges {
        assert!(position(&order, &from) < position(&order, &to));
    }
}

#[test]
fn isolated_nodes_are_included() {
    let mut graph = DirectedGraph::new();
    graph.add("lonely");
    graph.add_edge("a", "b");

    let order = graph.topological_order().unwrap();
    assert_eq!(order, vec!["lonely", "a", "b"]);
}

#[test]
fn cycles_are_reported() {
    let graph: DirectedGraph<u32> = [(0, 1), (1, 2), (2, 3), (3, 1)].into_iter().collect();

    let err = graph.topological_order().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::CycleDetected { remaining: 3 }));
}

#[test]
fn removing_a_cycle_member_unblocks_ordering() {
    let mut graph: DirectedGraph<u32> = [(1, 2), (2, 1), (2, 3)].into_iter().collect();
    assert!(graph.topological_order().is_err());

    graph.remove_edge(&2, &1);
    assert_eq!(graph.topological_order().unwrap(), vec![1, 2, 3]);
}
