use super::{AppState, LoadingState};
use crate::events::DataEvent;

/// Pure state transition function for data events
pub fn reduce_data_event(state: &mut AppState, event: DataEvent) {
    match event {
        DataEvent::CatalogLoaded { seed } => {
            tracing::info!(
                "Catalog loaded: {} categories, {} products",
                seed.categories.len(),
                seed.products.len()
            );
            state.categories.load(seed.categories);
            state.products.load(seed.products);
            state.catalog_loading = LoadingState::Loaded;
        }

        DataEvent::LoadError { error } => {
            tracing::warn!("Catalog failed to load: {}", error);
            state.catalog_loading = LoadingState::Error(error);
        }
    }
}
