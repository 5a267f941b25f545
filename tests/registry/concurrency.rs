//! Integration tests for concurrent lookups

use std::sync::Arc;
use std::thread;

use tangle_foundation::TypeUniverse;
use tangle_registry::ClassHierarchyRegistry;

use crate::events;

#[test]
fn concurrent_readers_agree() {
    let ev = events();
    let universe = Arc::new(ev.universe);
    let mut registry = ClassHierarchyRegistry::new(Arc::clone(&universe), ev.event).unwrap();
    registry.put(ev.event, "audit").unwrap();
    registry.put(ev.block, "log-block").unwrap();
    let queries = [ev.leaf_decay, ev.block_break, ev.block, ev.entity];

    let results: Vec<Vec<_>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    queries
                        .iter()
                        .map(|&ty| registry.get(ty))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for per_thread in &results {
        assert_eq!(per_thread, &results[0]);
    }
    assert_eq!(registry.cached_query_count(), queries.len());
    assert_eq!(registry.get(ev.entity), vec!["audit"]);
}

#[test]
fn registry_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClassHierarchyRegistry<Arc<TypeUniverse>, String>>();
    assert_send_sync::<ClassHierarchyRegistry<TypeUniverse, u64>>();
}

#[test]
fn arc_shared_registry_across_threads() {
    let ev = events();
    let mut registry = ClassHierarchyRegistry::new(ev.universe, ev.event).unwrap();
    registry.put(ev.block, 7u32).unwrap();
    let registry = Arc::new(registry);

    let workers: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let query = ev.leaf_decay;
            thread::spawn(move || registry.get(query).iter().sum::<u32>())
        })
        .collect();

    for worker in workers {
        assert_eq!(worker.join().unwrap(), 21);
    }
}
