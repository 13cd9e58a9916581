use crate::domain::model::Blueprint;
use crate::domain::ports::{BlueprintFilter, BlueprintStore};
use crate::utils::error::Result;
use std::sync::Arc;

/// Composes one store backend with one point-reduction filter. Both are
/// injected at construction and never swapped afterwards.
///
/// Filtering is a read-path concern: writes always store the unfiltered
/// sequence, and single/per-author reads return freshly filtered copies of
/// the canonical records. Store errors propagate unchanged; there is no
/// caching and no retry.
pub struct BlueprintService {
    store: Arc<dyn BlueprintStore>,
    filter: Box<dyn BlueprintFilter>,
}

impl BlueprintService {
    pub fn new(store: Arc<dyn BlueprintStore>, filter: Box<dyn BlueprintFilter>) -> Self {
        Self { store, filter }
    }

    pub fn add_blueprint(&self, bp: Blueprint) -> Result<()> {
        tracing::debug!("Saving blueprint {}/{} ({} points)", bp.author, bp.name, bp.points.len());
        self.store.save(bp)
    }

    pub fn get_blueprint(&self, author: &str, name: &str) -> Result<Blueprint> {
        let bp = self.store.get(author, name)?;
        Ok(self.filter.apply(&bp))
    }

    pub fn get_blueprints_by_author(&self, author: &str) -> Result<Vec<Blueprint>> {
        let found = self.store.get_by_author(author)?;
        Ok(found.iter().map(|bp| self.filter.apply(bp)).collect())
    }

    /// Bulk listing is a raw view of the canonical records; the active
    /// filter applies only to single and per-author reads.
    pub fn get_all_blueprints(&self) -> Vec<Blueprint> {
        self.store.get_all()
    }

    pub fn add_point(&self, author: &str, name: &str, x: i32, y: i32) -> Result<()> {
        tracing::debug!("Appending point ({}, {}) to {}/{}", x, y, author, name);
        self.store.add_point(author, name, x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::core::filters::{FilterKind, IdentityFilter, RedundancyFilter, UndersamplingFilter};
    use crate::domain::model::Point;

    fn service(filter: Box<dyn BlueprintFilter>) -> (Arc<InMemoryStore>, BlueprintService) {
        let store = Arc::new(InMemoryStore::new());
        let svc = BlueprintService::new(store.clone(), filter);
        (store, svc)
    }

    #[test]
    fn test_get_blueprint_applies_undersampling() {
        let (_, svc) = service(Box::new(UndersamplingFilter));
        svc.add_blueprint(Blueprint::new(
            "john",
            "house",
            vec![
                Point::new(0, 0),
                Point::new(10, 0),
                Point::new(10, 10),
                Point::new(0, 10),
            ],
        ))
        .unwrap();

        let bp = svc.get_blueprint("john", "house").unwrap();
        assert_eq!(bp.points, vec![Point::new(0, 0), Point::new(10, 10)]);
    }

    #[test]
    fn test_writes_store_the_unfiltered_sequence() {
        let (store, svc) = service(Box::new(RedundancyFilter));
        svc.add_blueprint(Blueprint::new(
            "a",
            "b",
            vec![Point::new(1, 1), Point::new(1, 1), Point::new(2, 2)],
        ))
        .unwrap();

        let filtered = svc.get_blueprint("a", "b").unwrap();
        assert_eq!(filtered.points, vec![Point::new(1, 1), Point::new(2, 2)]);

        // The canonical record keeps all three points.
        let raw = store.get("a", "b").unwrap();
        assert_eq!(raw.points.len(), 3);
    }

    #[test]
    fn test_get_by_author_filters_each_blueprint() {
        let (_, svc) = service(Box::new(UndersamplingFilter));
        svc.add_blueprint(Blueprint::new(
            "jane",
            "garden",
            vec![Point::new(2, 2), Point::new(3, 4), Point::new(6, 7)],
        ))
        .unwrap();
        svc.add_blueprint(Blueprint::new(
            "jane",
            "pond",
            vec![Point::new(0, 0), Point::new(1, 1)],
        ))
        .unwrap();

        let found = svc.get_blueprints_by_author("jane").unwrap();
        assert_eq!(found.len(), 2);
        for bp in found {
            match bp.name.as_str() {
                "garden" => assert_eq!(bp.points.len(), 2),
                "pond" => assert_eq!(bp.points.len(), 1),
                other => panic!("unexpected blueprint: {}", other),
            }
        }
    }

    #[test]
    fn test_get_all_returns_raw_records() {
        let (_, svc) = service(Box::new(UndersamplingFilter));
        svc.add_blueprint(Blueprint::new(
            "john",
            "garage",
            vec![Point::new(5, 5), Point::new(15, 5), Point::new(15, 15)],
        ))
        .unwrap();

        let all = svc.get_all_blueprints();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].points.len(), 3);
    }

    #[test]
    fn test_store_errors_propagate_unchanged() {
        let (_, svc) = service(FilterKind::Identity.build());

        let err = svc.get_blueprint("nobody", "nothing").unwrap_err();
        assert!(err.is_not_found());

        svc.add_blueprint(Blueprint::new("a", "b", vec![])).unwrap();
        let err = svc
            .add_blueprint(Blueprint::new("a", "b", vec![Point::new(9, 9)]))
            .unwrap_err();
        assert!(err.is_conflict());

        let err = svc.add_point("nobody", "nothing", 1, 1).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_add_point_appends_to_canonical_record() {
        let (_, svc) = service(Box::new(IdentityFilter));
        svc.add_blueprint(Blueprint::new("a", "b", vec![Point::new(0, 0)]))
            .unwrap();
        svc.add_point("a", "b", 7, 8).unwrap();

        let bp = svc.get_blueprint("a", "b").unwrap();
        assert_eq!(bp.points, vec![Point::new(0, 0), Point::new(7, 8)]);
    }
}
