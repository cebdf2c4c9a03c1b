//! Card tree regenerated from a filtered entity list.

use super::images::{CardImages, ImageSlot};
use dispensa_catalog::{CatalogEntity, EntityId, EntityKind, Record};

/// Identifies one rendered card
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(u64);

/// Identifies one clickable affordance (edit or delete) on a card.
///
/// Ids come from a counter that never resets, so an id handed out by an
/// earlier render can never collide with a live one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AffordanceId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: CardId,
    pub entity_id: EntityId,
    pub kind: EntityKind,
    pub title: String,
    pub amount: u32,
    pub image: ImageSlot,
    pub edit: AffordanceId,
    pub delete: AffordanceId,
}

impl Card {
    pub fn secondary(&self) -> String {
        self.kind.secondary_text(self.amount)
    }
}

/// The render target: cards in display order plus the render generation
#[derive(Debug, Default)]
pub struct CardContainer {
    cards: Vec<Card>,
    generation: u64,
    next_node: u64,
}

impl CardContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of full renders performed so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn position(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id == id)
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Drop one card without re-rendering the rest
    pub fn remove_card(&mut self, id: CardId) -> Option<Card> {
        let idx = self.position(id)?;
        Some(self.cards.remove(idx))
    }

    /// Rewrite the visible text of one card in place
    pub fn patch_card(&mut self, id: CardId, title: &str, amount: u32) -> bool {
        match self.cards.iter_mut().find(|c| c.id == id) {
            Some(card) => {
                card.title = title.to_string();
                card.amount = amount;
                true
            }
            None => false,
        }
    }

    /// Run the image fallback over every card
    pub fn load_images(&mut self, images: &CardImages) {
        for card in &mut self.cards {
            images.load(&mut card.image);
        }
    }

    fn next_id(&mut self) -> u64 {
        self.next_node += 1;
        self.next_node
    }

    fn append<E: CatalogEntity>(&mut self, record: &Record<E>) {
        let card = Card {
            id: CardId(self.next_id()),
            entity_id: record.id,
            kind: E::KIND,
            title: record.name().to_string(),
            amount: record.amount(),
            image: ImageSlot::new(record.image_path()),
            edit: AffordanceId(self.next_id()),
            delete: AffordanceId(self.next_id()),
        };
        self.cards.push(card);
    }
}

/// Replace the container's contents with one card per entity, in input order
pub fn render<E: CatalogEntity>(container: &mut CardContainer, entities: &[&Record<E>]) {
    container.clear();
    container.generation += 1;
    for record in entities {
        container.append(*record);
    }
    tracing::debug!(
        "Rendered {} {} cards (generation {})",
        container.len(),
        E::KIND.noun(),
        container.generation
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use dispensa_catalog::{CatalogSeed, CatalogStore, Category, Product};
    use std::collections::HashSet;

    fn category_store() -> CatalogStore<Category> {
        CatalogStore::initialize(CatalogSeed::embedded().unwrap().categories)
    }

    #[test]
    fn test_render_one_card_per_entity_in_order() {
        let store = category_store();
        let records: Vec<_> = store.list().iter().collect();
        let mut container = CardContainer::new();

        render(&mut container, &records);

        assert_eq!(container.len(), 6);
        let titles: Vec<_> = container.cards().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, store.names());
        assert_eq!(container.cards()[0].secondary(), "12 prodotti");
        assert_eq!(container.cards()[0].entity_id, store.list()[0].id);
    }

    #[test]
    fn test_render_replaces_previous_cards() {
        let store = category_store();
        let all: Vec<_> = store.list().iter().collect();
        let mut container = CardContainer::new();

        render(&mut container, &all);
        render(&mut container, &all[2..3]);

        assert_eq!(container.len(), 1);
        assert_eq!(container.cards()[0].title, "Pesce");
        assert_eq!(container.generation(), 2);
    }

    #[test]
    fn test_affordance_ids_never_reused() {
        let store = category_store();
        let all: Vec<_> = store.list().iter().collect();
        let mut container = CardContainer::new();
        let mut seen = HashSet::new();

        for _ in 0..3 {
            render(&mut container, &all);
            for card in container.cards() {
                assert!(seen.insert(card.edit));
                assert!(seen.insert(card.delete));
            }
        }
    }

    #[test]
    fn test_product_card_text() {
        let store = CatalogStore::initialize(vec![Product::new(
            "Salmone",
            "Pesce",
            1000,
            "salmone.jpg",
        )]);
        let records: Vec<_> = store.list().iter().collect();
        let mut container = CardContainer::new();

        render(&mut container, &records);

        let card = &container.cards()[0];
        assert_eq!(card.secondary(), "Quantità: 1000");
        assert_eq!(card.image.primary, "Pesce/salmone.jpg");
    }

    #[test]
    fn test_patch_and_remove_card() {
        let store = category_store();
        let all: Vec<_> = store.list().iter().collect();
        let mut container = CardContainer::new();
        render(&mut container, &all);
        let igiene = container.cards()[3].id;

        assert!(container.patch_card(igiene, "Igiene Casa", 4));
        assert_eq!(container.card(igiene).unwrap().secondary(), "4 prodotti");

        assert!(container.remove_card(igiene).is_some());
        assert_eq!(container.len(), 5);
        assert!(container.card(igiene).is_none());
        assert!(!container.patch_card(igiene, "x", 1));
        assert_eq!(container.generation(), 1);
    }
}
