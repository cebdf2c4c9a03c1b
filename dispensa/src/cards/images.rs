//! Card image resolution with a one-shot fallback.

use std::fmt::Debug;
use std::path::PathBuf;
use std::sync::Arc;

/// Decides whether an image reference points at a displayable asset
pub trait ImageResolver: Debug + Send + Sync {
    fn resolves(&self, reference: &str) -> bool;
}

/// Resolves references as files under an asset directory
#[derive(Debug, Clone)]
pub struct AssetDirResolver {
    root: PathBuf,
}

impl AssetDirResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ImageResolver for AssetDirResolver {
    fn resolves(&self, reference: &str) -> bool {
        self.root.join(reference).is_file()
    }
}

/// Resolver plus the default asset substituted on a miss
#[derive(Debug, Clone)]
pub struct CardImages {
    resolver: Arc<dyn ImageResolver>,
    default_image: String,
}

impl CardImages {
    pub fn new(resolver: Arc<dyn ImageResolver>, default_image: impl Into<String>) -> Self {
        Self {
            resolver,
            default_image: default_image.into(),
        }
    }

    pub fn default_image(&self) -> &str {
        &self.default_image
    }

    /// Resolve a freshly rendered slot, swapping to the default at most once
    pub fn load(&self, slot: &mut ImageSlot) {
        if self.resolver.resolves(&slot.shown) {
            return;
        }
        if slot.on_error(&self.default_image) {
            tracing::debug!(
                "Image {} not found, showing {}",
                slot.primary,
                self.default_image
            );
            if !self.resolver.resolves(&slot.shown) {
                tracing::warn!("Default image {} not found either", self.default_image);
            }
        }
    }
}

impl Default for CardImages {
    fn default() -> Self {
        Self::new(
            Arc::new(AssetDirResolver::new("resources/img/home")),
            "default.jpg",
        )
    }
}

/// The image shown on one card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSlot {
    pub primary: String,
    pub shown: String,
    pub fallback_applied: bool,
}

impl ImageSlot {
    pub fn new(primary: impl Into<String>) -> Self {
        let primary = primary.into();
        Self {
            shown: primary.clone(),
            primary,
            fallback_applied: false,
        }
    }

    /// Failure hook for the shown reference.
    /// Returns whether the default was swapped in; a second failure is ignored.
    pub fn on_error(&mut self, default_image: &str) -> bool {
        if self.fallback_applied {
            return false;
        }
        self.fallback_applied = true;
        self.shown = default_image.to_string();
        true
    }

    pub fn is_fallback(&self) -> bool {
        self.fallback_applied
    }
}
