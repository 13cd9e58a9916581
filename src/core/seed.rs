use crate::domain::model::{Blueprint, Point};
use crate::domain::ports::BlueprintStore;
use crate::utils::error::Result;

/// Loads a small set of example blueprints into an empty store. Returns the
/// number of blueprints inserted; a store that already has records is left
/// untouched.
pub fn seed_examples(store: &dyn BlueprintStore) -> Result<usize> {
    if !store.get_all().is_empty() {
        tracing::debug!("Store already has records, skipping example seed");
        return Ok(0);
    }

    let examples = [
        Blueprint::new(
            "john",
            "house",
            vec![
                Point::new(0, 0),
                Point::new(10, 0),
                Point::new(10, 10),
                Point::new(0, 10),
            ],
        ),
        Blueprint::new(
            "john",
            "garage",
            vec![Point::new(5, 5), Point::new(15, 5), Point::new(15, 15)],
        ),
        Blueprint::new(
            "jane",
            "garden",
            vec![Point::new(2, 2), Point::new(3, 4), Point::new(6, 7)],
        ),
    ];

    let mut inserted = 0;
    for bp in examples {
        match store.save(bp) {
            Ok(()) => inserted += 1,
            // Another seeder won the race for this key; their copy is the
            // same example data.
            Err(e) if e.is_conflict() => {}
            Err(e) => return Err(e),
        }
    }

    tracing::info!("Seeded {} example blueprints", inserted);
    Ok(inserted)
}
