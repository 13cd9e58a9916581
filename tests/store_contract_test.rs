//! Runs the storage contract against both realizations, so a backend swap
//! cannot change observable behavior.

use blueprint_registry::{Blueprint, BlueprintStore, InMemoryStore, JsonFileStore, Point};
use tempfile::TempDir;

fn square(author: &str, name: &str) -> Blueprint {
    Blueprint::new(
        author,
        name,
        vec![
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(10, 10),
            Point::new(0, 10),
        ],
    )
}

fn check_contract(store: &dyn BlueprintStore) {
    // save then get returns the canonical record
    store.save(square("john", "house")).unwrap();
    let bp = store.get("john", "house").unwrap();
    assert_eq!(bp.points.len(), 4);

    // second save with the same key fails and leaves the record intact
    let err = store
        .save(Blueprint::new("john", "house", vec![Point::new(9, 9)]))
        .unwrap_err();
    assert!(err.is_conflict());
    assert_eq!(store.get("john", "house").unwrap().points.len(), 4);

    // get on a never-saved key
    assert!(store.get("john", "castle").unwrap_err().is_not_found());

    // per-author listing
    store.save(square("john", "garage")).unwrap();
    store.save(square("jane", "garden")).unwrap();
    let johns = store.get_by_author("john").unwrap();
    assert_eq!(johns.len(), 2);
    assert!(store.get_by_author("nobody").unwrap_err().is_not_found());

    // full listing never fails
    assert_eq!(store.get_all().len(), 3);

    // add_point appends exactly one point
    let before = store.get("jane", "garden").unwrap().points.len();
    store.add_point("jane", "garden", 42, 42).unwrap();
    let after = store.get("jane", "garden").unwrap();
    assert_eq!(after.points.len(), before + 1);
    assert_eq!(*after.points.last().unwrap(), Point::new(42, 42));

    // add_point on a missing key fails and changes nothing
    assert!(store
        .add_point("jane", "pond", 1, 1)
        .unwrap_err()
        .is_not_found());
    assert_eq!(store.get_all().len(), 3);
}

#[test]
fn test_in_memory_store_satisfies_contract() {
    let store = InMemoryStore::new();
    check_contract(&store);
}

#[test]
fn test_json_file_store_satisfies_contract() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::open(dir.path()).unwrap();
    check_contract(&store);

    // and the same records are visible after a reopen
    drop(store);
    let reopened = JsonFileStore::open(dir.path()).unwrap();
    assert_eq!(reopened.get_all().len(), 3);
    assert_eq!(reopened.get("jane", "garden").unwrap().points.len(), 5);
}

#[test]
fn test_empty_store_listing() {
    let store = InMemoryStore::new();
    assert!(store.get_all().is_empty());
}
