pub mod categories;
pub mod products;

use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};
use std::ops::Deref;
use uuid::Uuid;

/// Stable synthetic identifier assigned by the store when a record is admitted.
///
/// Never shown to the user; it travels on rendered cards so that edits and
/// deletes locate their record without relying on the display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(Uuid);

impl EntityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Which of the two catalogs an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Category,
    Product,
}

impl EntityKind {
    /// Lower-case noun used in popups and log lines
    pub fn noun(&self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Product => "product",
        }
    }

    /// Popup field name holding the display name
    pub fn name_field(&self) -> &'static str {
        match self {
            Self::Category => "categoryName",
            Self::Product => "productName",
        }
    }

    /// Popup field name holding the count or quantity
    pub fn amount_field(&self) -> &'static str {
        match self {
            Self::Category => "productCount",
            Self::Product => "productQuantity",
        }
    }

    /// Label shown next to the amount input
    pub fn amount_label(&self) -> &'static str {
        match self {
            Self::Category => "Products",
            Self::Product => "Quantity",
        }
    }

    /// Secondary card line for a given amount
    pub fn secondary_text(&self, amount: u32) -> String {
        match self {
            Self::Category => format!("{} prodotti", amount),
            Self::Product => format!("Quantità: {}", amount),
        }
    }

    /// Whether a saved edit regenerates the whole card list.
    ///
    /// Category edits re-filter and re-render; product edits patch the
    /// edited card in place.
    pub fn rerenders_on_edit(&self) -> bool {
        matches!(self, Self::Category)
    }
}

/// Schema shared by every entity the card workflow can display and edit.
///
/// The identity field is the store-assigned [`EntityId`]; the display fields
/// are the name and the amount (product count or quantity); the editable
/// fields are the same two, carried by `Patch`.
pub trait CatalogEntity: Clone + Debug + PartialEq {
    type Patch: Clone + Debug + Default + PartialEq;

    const KIND: EntityKind;

    fn name(&self) -> &str;

    /// Product count for categories, stock quantity for products
    fn amount(&self) -> u32;

    /// Name of the owning category, when the entity has one
    fn category(&self) -> Option<&str> {
        None
    }

    /// Image reference relative to the asset root
    fn image_path(&self) -> String;

    /// Build a patch touching exactly the editable fields
    fn edit_patch(name: String, amount: u32) -> Self::Patch;

    fn apply(&mut self, patch: Self::Patch);

    fn secondary_text(&self) -> String {
        Self::KIND.secondary_text(self.amount())
    }
}

/// An entity together with its store-assigned identity
#[derive(Debug, Clone, PartialEq)]
pub struct Record<E> {
    pub id: EntityId,
    pub entity: E,
}

impl<E> Record<E> {
    pub fn new(entity: E) -> Self {
        Self {
            id: EntityId::new(),
            entity,
        }
    }
}

impl<E> Deref for Record<E> {
    type Target = E;

    fn deref(&self) -> &E {
        &self.entity
    }
}
