pub mod binder;
pub mod images;
pub mod page;
pub mod render;
pub mod workflow;

pub use binder::{CardAction, InteractionBinder};
pub use images::{AssetDirResolver, CardImages, ImageResolver, ImageSlot};
pub use page::{CardPage, CatalogPage, FilterField, FilterInput, PageOutcome};
pub use render::{render, AffordanceId, Card, CardContainer, CardId};
pub use workflow::{Control, EditField, EditForm, Modal, PopupBus, Subscription};
