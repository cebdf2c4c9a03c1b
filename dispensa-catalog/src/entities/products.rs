use super::{categories::Category, CatalogEntity, EntityKind};
use crate::macros::setter;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    /// Display name of the owning category
    pub category: String,
    pub quantity: u32,
    pub image: String,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: u32,
        image: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            quantity,
            image: image.into(),
        }
    }
}

/// Partial update for a product; `None` fields are left untouched
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub quantity: Option<u32>,
}

impl ProductPatch {
    pub fn new() -> Self {
        Self::default()
    }

    setter!(opt name: String);
    setter!(opt quantity: u32);
}

impl CatalogEntity for Product {
    type Patch = ProductPatch;

    const KIND: EntityKind = EntityKind::Product;

    fn name(&self) -> &str {
        &self.name
    }

    fn amount(&self) -> u32 {
        self.quantity
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn image_path(&self) -> String {
        format!("{}/{}", Category::slug(&self.category), self.image)
    }

    fn edit_patch(name: String, amount: u32) -> ProductPatch {
        ProductPatch::new().name(name).quantity(amount)
    }

    fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
    }
}
