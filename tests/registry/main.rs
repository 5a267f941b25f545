//! Integration tests for Layer 1: Class-hierarchy registry
//!
//! Tests ancestor resolution, memoization, preconditions, and concurrency.

mod concurrency;

use tangle_foundation::{TypeTag, TypeUniverse};

/// A small event hierarchy shared by the registry tests.
///
/// ```text
/// object
/// └── Event
///     ├── BlockEvent
///     │   └── BlockBreakEvent
///     │       └── LeafDecayEvent
///     └── EntityEvent
/// ```
pub struct Events {
    pub universe: TypeUniverse,
    pub event: TypeTag,
    pub block: TypeTag,
    pub block_break: TypeTag,
    pub leaf_decay: TypeTag,
    pub entity: TypeTag,
}

pub fn events() -> Events {
    let mut universe = TypeUniverse::new();
    let event = universe.declare("Event").unwrap();
    let block = universe.declare_subtype("BlockEvent", event).unwrap();
    let block_break = universe.declare_subtype("BlockBreakEvent", block).unwrap();
    let leaf_decay = universe.declare_subtype("LeafDecayEvent", block_break).unwrap();
    let entity = universe.declare_subtype("EntityEvent", event).unwrap();
    Events {
        universe,
        event,
        block,
        block_break,
        leaf_decay,
        entity,
    }
}
