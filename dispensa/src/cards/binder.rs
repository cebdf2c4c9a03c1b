//! Dispatch table from card affordances to card actions.

use super::render::{AffordanceId, CardContainer, CardId};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardAction {
    Edit,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub card: CardId,
    pub action: CardAction,
}

/// Bindings for the cards currently in the container.
///
/// `bind` rebuilds the whole table, so there are always exactly two entries
/// per rendered card and an affordance from an earlier render resolves to
/// nothing.
#[derive(Debug, Default)]
pub struct InteractionBinder {
    bindings: HashMap<AffordanceId, Binding>,
}

impl InteractionBinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, container: &CardContainer) {
        self.bindings.clear();
        for card in container.cards() {
            self.bindings.insert(
                card.edit,
                Binding {
                    card: card.id,
                    action: CardAction::Edit,
                },
            );
            self.bindings.insert(
                card.delete,
                Binding {
                    card: card.id,
                    action: CardAction::Delete,
                },
            );
        }
        tracing::debug!("Bound {} affordances", self.bindings.len());
    }

    pub fn resolve(&self, affordance: AffordanceId) -> Option<Binding> {
        self.bindings.get(&affordance).copied()
    }

    /// Forget both affordances of a card removed outside a full render
    pub fn unbind_card(&mut self, card: CardId) {
        self.bindings.retain(|_, binding| binding.card != card);
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
