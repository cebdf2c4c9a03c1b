use crate::entities::{CatalogEntity, EntityId, Record};

/// Authoritative in-memory list of entities for one catalog.
///
/// Insertion order is preserved. Lookups that find nothing are silent no-ops:
/// `update` reports `false` and `remove` returns `None`, never an error.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogStore<E> {
    records: Vec<Record<E>>,
}

impl<E> Default for CatalogStore<E> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<E: CatalogEntity> CatalogStore<E> {
    /// Admit the seed entities in order, assigning each a fresh identity
    pub fn initialize(seed: impl IntoIterator<Item = E>) -> Self {
        Self {
            records: seed.into_iter().map(Record::new).collect(),
        }
    }

    pub fn list(&self) -> &[Record<E>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name()).collect()
    }

    pub fn get(&self, id: &EntityId) -> Option<&Record<E>> {
        self.records.iter().find(|r| r.id == *id)
    }

    /// First record whose display name equals `name` exactly
    pub fn find_by_name(&self, name: &str) -> Option<&Record<E>> {
        self.records.iter().find(|r| r.name() == name)
    }

    /// Apply a partial update to the record with the given identity.
    /// Returns whether a record was found.
    pub fn update(&mut self, id: &EntityId, patch: E::Patch) -> bool {
        match self.records.iter_mut().find(|r| r.id == *id) {
            Some(record) => {
                record.entity.apply(patch);
                true
            }
            None => false,
        }
    }

    /// Apply a partial update to the first record with the given display name
    pub fn update_by_name(&mut self, name: &str, patch: E::Patch) -> bool {
        let Some(id) = self.find_by_name(name).map(|r| r.id) else {
            return false;
        };
        self.update(&id, patch)
    }

    pub fn remove(&mut self, id: &EntityId) -> Option<Record<E>> {
        let idx = self.records.iter().position(|r| r.id == *id)?;
        Some(self.records.remove(idx))
    }

    /// Remove the first record with the given display name
    pub fn remove_by_name(&mut self, name: &str) -> Option<Record<E>> {
        let idx = self.records.iter().position(|r| r.name() == name)?;
        Some(self.records.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::categories::{Category, CategoryPatch};
    use crate::entities::products::{Product, ProductPatch};
    use crate::seed::CatalogSeed;

    fn seeded() -> CatalogStore<Category> {
        CatalogStore::initialize(CatalogSeed::embedded().unwrap().categories)
    }

    #[test]
    fn test_initialize_preserves_order() {
        let store = seeded();
        assert_eq!(
            store.names(),
            vec![
                "Carne",
                "Frutta & Verdure",
                "Pesce",
                "Igiene",
                "Salumi & Formaggi",
                "Uova & Latticini"
            ]
        );
    }

    #[test]
    fn test_initialize_assigns_distinct_ids() {
        let store = seeded();
        let mut ids: Vec<_> = store.list().iter().map(|r| r.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), store.len());
    }

    #[test]
    fn test_update_by_id() {
        let mut store = seeded();
        let id = store.find_by_name("Carne").unwrap().id;

        assert!(store.update(&id, CategoryPatch::new().product_count(7u32)));

        let carne: Vec<_> = store.list().iter().filter(|r| r.name == "Carne").collect();
        assert_eq!(carne.len(), 1);
        assert_eq!(carne[0].product_count, 7);
        assert_eq!(carne[0].id, id);
    }

    #[test]
    fn test_rename_keeps_identity() {
        let mut store = seeded();
        let id = store.find_by_name("Pesce").unwrap().id;

        store.update(&id, CategoryPatch::new().name("Pesce Fresco"));
        // Second edit still reaches the record after the rename
        store.update(&id, CategoryPatch::new().product_count(3u32));

        let record = store.get(&id).unwrap();
        assert_eq!(record.name, "Pesce Fresco");
        assert_eq!(record.product_count, 3);
        assert!(store.find_by_name("Pesce").is_none());
    }

    #[test]
    fn test_update_missing_is_noop() {
        let mut store = seeded();
        let before = store.clone();

        assert!(!store.update(&EntityId::new(), CategoryPatch::new().product_count(1u32)));
        assert!(!store.update_by_name("Dolci", CategoryPatch::new().product_count(1u32)));
        assert_eq!(store, before);
    }

    #[test]
    fn test_remove_exactly_one() {
        let mut store = seeded();
        let before = store.clone();

        let removed = store.remove_by_name("Pesce").unwrap();
        assert_eq!(removed.name, "Pesce");
        assert_eq!(store.len(), 5);
        assert!(store.find_by_name("Pesce").is_none());

        let expected: Vec<_> = before
            .list()
            .iter()
            .filter(|r| r.name != "Pesce")
            .cloned()
            .collect();
        assert_eq!(store.list(), expected.as_slice());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut store = seeded();
        assert!(store.remove(&EntityId::new()).is_none());
        assert!(store.remove_by_name("Dolci").is_none());
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn test_name_collision_removes_first_only() {
        let mut store = CatalogStore::initialize(vec![
            Product::new("Uova", "Uova & Latticini", 10, "uova.jpg"),
            Product::new("Uova", "Uova & Latticini", 20, "uova.jpg"),
        ]);
        let second = store.list()[1].id;

        store.remove_by_name("Uova");

        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].id, second);
        assert_eq!(store.list()[0].quantity, 20);
    }

    #[test]
    fn test_update_product_by_id_with_duplicate_names() {
        let mut store = CatalogStore::initialize(vec![
            Product::new("Uova", "Uova & Latticini", 10, "uova.jpg"),
            Product::new("Uova", "Uova & Latticini", 20, "uova.jpg"),
        ]);
        let second = store.list()[1].id;

        store.update(&second, ProductPatch::new().quantity(25u32));

        assert_eq!(store.list()[0].quantity, 10);
        assert_eq!(store.list()[1].quantity, 25);
    }
}
