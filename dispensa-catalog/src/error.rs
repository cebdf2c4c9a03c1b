use thiserror::Error;

/// Errors raised while decoding or checking a catalog seed document.
///
/// Store and filter operations never fail; only seed ingestion does.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate category name: {0}")]
    DuplicateCategory(String),

    #[error("Product {product:?} references unknown category {category:?}")]
    UnknownCategory { product: String, category: String },
}
