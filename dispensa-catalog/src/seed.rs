use crate::entities::{categories::Category, products::Product};
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const EMBEDDED_SEED: &str = include_str!("../seed/catalog.json");

/// Initial catalog contents supplied at startup
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSeed {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl CatalogSeed {
    /// Decode a seed document and check its references
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let seed: CatalogSeed = serde_json::from_str(json)?;
        seed.validate()?;
        Ok(seed)
    }

    /// The catalog shipped with the application
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_SEED)
    }

    /// Category names must be unique and every product must name a known category
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut names = HashSet::new();
        for category in &self.categories {
            if !names.insert(category.name.as_str()) {
                return Err(CatalogError::DuplicateCategory(category.name.clone()));
            }
        }

        if let Some(orphan) = self
            .products
            .iter()
            .find(|p| !names.contains(p.category.as_str()))
        {
            return Err(CatalogError::UnknownCategory {
                product: orphan.name.clone(),
                category: orphan.category.clone(),
            });
        }

        Ok(())
    }

    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }
}
