//! Integration tests for the interned type universe
//!
//! Tests declaration, lookup, and assignability.

use std::sync::Arc;

use tangle_foundation::{ErrorKind, TypeHierarchy, TypeTag, TypeUniverse};

#[test]
fn universe_starts_with_root() {
    let universe = TypeUniverse::new();
    assert_eq!(universe.type_count(), 1);
    assert_eq!(universe.lookup(TypeUniverse::ROOT_NAME), Some(TypeTag::ROOT));
    assert!(universe.contains(TypeTag::ROOT));
}

#[test]
fn declare_and_lookup() {
    let mut universe = TypeUniverse::new();
    let entity = universe.declare("Entity").unwrap();
    let living = universe.declare_subtype("LivingEntity", entity).unwrap();

    assert_eq!(universe.lookup("Entity"), Some(entity));
    assert_eq!(universe.lookup("LivingEntity"), Some(living));
    assert_eq!(universe.lookup("Boat"), None);
    assert_eq!(universe.name(living), Some("LivingEntity"));
    assert_eq!(universe.tags().collect::<Vec<_>>(), vec![TypeTag::ROOT, entity, living]);
}

#[test]
fn redeclaring_under_another_parent_fails() {
    let mut universe = TypeUniverse::new();
    let entity = universe.declare("Entity").unwrap();
    universe.declare("Item").unwrap();

    let err = universe.declare_subtype("Item", entity).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ConflictingParent { .. }));
    assert!(format!("{err}").contains("Item"));
}

#[test]
fn assignability_matches_single_inheritance() {
    let mut universe = TypeUniverse::new();
    let entity = universe.declare("Entity").unwrap();
    let living = universe.declare_subtype("LivingEntity", entity).unwrap();
    let zombie = universe.declare_subtype("Zombie", living).unwrap();
    let item = universe.declare_subtype("ItemEntity", entity).unwrap();

    assert!(universe.is_assignable_from(entity, zombie));
    assert!(universe.is_assignable_from(living, zombie));
    assert!(universe.is_assignable_from(zombie, zombie));
    assert!(!universe.is_assignable_from(living, item));
    assert!(!universe.is_assignable_from(zombie, living));
}

#[test]
fn shared_universe_is_a_hierarchy() {
    let mut universe = TypeUniverse::new();
    let entity = universe.declare("Entity").unwrap();
    let shared = Arc::new(universe);

    fn depth<H: TypeHierarchy>(h: &H, ty: H::Type) -> usize {
        h.lineage(ty).len()
    }

    assert_eq!(depth(&shared, entity), 2);
    assert_eq!(shared.type_name(entity), "Entity");
}
