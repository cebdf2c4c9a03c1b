use super::{CatalogEntity, EntityKind};
use crate::macros::setter;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub product_count: u32,
    pub image: String,
}

impl Category {
    pub fn new(id: u32, name: impl Into<String>, product_count: u32, image: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            product_count,
            image: image.into(),
        }
    }

    /// Directory name used for this category's product images ("Frutta & Verdure" -> "FruttaVerdure")
    pub fn slug(name: &str) -> String {
        name.chars().filter(|c| c.is_alphanumeric()).collect()
    }
}

/// Partial update for a category; `None` fields are left untouched
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub product_count: Option<u32>,
}

impl CategoryPatch {
    pub fn new() -> Self {
        Self::default()
    }

    setter!(opt name: String);
    setter!(opt product_count: u32);
}

impl CatalogEntity for Category {
    type Patch = CategoryPatch;

    const KIND: EntityKind = EntityKind::Category;

    fn name(&self) -> &str {
        &self.name
    }

    fn amount(&self) -> u32 {
        self.product_count
    }

    fn image_path(&self) -> String {
        self.image.clone()
    }

    fn edit_patch(name: String, amount: u32) -> CategoryPatch {
        CategoryPatch::new().name(name).product_count(amount)
    }

    fn apply(&mut self, patch: CategoryPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(product_count) = patch.product_count {
            self.product_count = product_count;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_partial_patch() {
        let mut category = Category::new(1, "Carne", 12, "carne.png");
        category.apply(CategoryPatch::new().product_count(7u32));

        assert_eq!(category.name, "Carne");
        assert_eq!(category.product_count, 7);
        assert_eq!(category.image, "carne.png");
    }

    #[test]
    fn test_slug_strips_separators() {
        assert_eq!(Category::slug("Frutta & Verdure"), "FruttaVerdure");
        assert_eq!(Category::slug("Uova & Latticini"), "UovaLatticini");
        assert_eq!(Category::slug("Carne"), "Carne");
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{"id":3,"name":"Pesce","productCount":8,"image":"pesce.jpg"}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category, Category::new(3, "Pesce", 8, "pesce.jpg"));
    }
}
