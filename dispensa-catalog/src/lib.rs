pub mod entities;
mod error;
pub mod filter;
mod macros;
pub mod seed;
pub mod store;

pub use crate::entities::{
    categories::{Category, CategoryPatch},
    products::{Product, ProductPatch},
    CatalogEntity, EntityId, EntityKind, Record,
};
pub use crate::error::CatalogError;
pub use crate::filter::{filter, FilterCriteria};
pub use crate::seed::CatalogSeed;
pub use crate::store::CatalogStore;
