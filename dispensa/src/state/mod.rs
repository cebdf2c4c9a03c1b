pub mod reducer;

use crate::cards::workflow::{Control, Resolution};
use crate::cards::{CardImages, CardPage, CatalogPage, PopupBus, Subscription};
use crate::ui::screens::Screen;
use dispensa_catalog::{Category, Product};
use throbber_widgets_tui::ThrobberState;

/// Represents loading state separate from data state
#[derive(Default, Debug, Clone, PartialEq)]
pub enum LoadingState {
    #[default]
    NotStarted,
    Loading(ThrobberState),
    Loaded,
    Error(String),
}

#[derive(Debug)]
pub struct AppState {
    pub history: Vec<Screen>,

    // Catalogs
    pub categories: CatalogPage<Category>,
    pub products: CatalogPage<Product>,
    pub catalog_loading: LoadingState,

    // Application-level popups (logout)
    pub popups: PopupBus,
    pub logout: Option<Subscription>,

    // UI state
    pub help_visible: bool,
    pub pending_key: Option<char>,

    // System
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_images(CardImages::default())
    }

    pub fn with_images(images: CardImages) -> Self {
        Self {
            history: vec![Screen::Categories],

            categories: CatalogPage::new(images.clone()),
            products: CatalogPage::new(images),
            catalog_loading: LoadingState::NotStarted,

            popups: PopupBus::new(),
            logout: None,

            help_visible: false,
            pending_key: None,

            should_quit: false,
        }
    }

    /// Get the current screen (last in navigation stack)
    pub fn current_screen(&self) -> &Screen {
        self.history
            .last()
            .expect("Navigation stack should never be empty")
    }

    /// Get mutable reference to current screen
    pub fn current_screen_mut(&mut self) -> &mut Screen {
        self.history
            .last_mut()
            .expect("Navigation stack should never be empty")
    }

    /// Navigate to a new screen (push to stack)
    pub fn navigate_to(&mut self, screen: Screen) {
        tracing::debug!(
            "Navigating to new screen, stack depth: {} -> {}",
            self.history.len(),
            self.history.len() + 1
        );
        self.history.push(screen);
    }

    /// Navigate back (pop from stack)
    /// Returns true if navigation succeeded, false if already at root
    pub fn navigate_back(&mut self) -> bool {
        if self.history.len() > 1 {
            tracing::debug!(
                "Navigating back, stack depth: {} -> {}",
                self.history.len(),
                self.history.len() - 1
            );
            self.history.pop();
            true
        } else {
            tracing::debug!("Cannot navigate back, already at root screen");
            false
        }
    }

    /// The card page behind the current screen, if it shows one
    pub fn active_page(&self) -> Option<&dyn CardPage> {
        match self.current_screen() {
            Screen::Categories => Some(&self.categories),
            Screen::Products => Some(&self.products),
            Screen::Logs(_) => None,
        }
    }

    pub fn active_page_mut(&mut self) -> Option<&mut dyn CardPage> {
        match self.current_screen() {
            Screen::Categories => Some(&mut self.categories),
            Screen::Products => Some(&mut self.products),
            Screen::Logs(_) => None,
        }
    }

    pub fn logout_visible(&self) -> bool {
        self.logout.is_some()
    }

    /// Show the logout confirmation with a fresh handler pair
    pub fn open_logout(&mut self) {
        if let Some(previous) = self.logout.take() {
            self.popups.release(previous);
        }
        self.logout = Some(
            self.popups
                .subscribe(Control::ConfirmLogout, Control::CancelLogout),
        );
    }

    /// Resolve the logout popup. Confirming hides the popup, then ends the session.
    pub fn resolve_logout(&mut self, control: Control) {
        let Some((id, resolution)) = self.popups.dispatch(control) else {
            return;
        };
        if self.logout.as_ref().map(Subscription::id) != Some(id) {
            return;
        }
        if let Some(subscription) = self.logout.take() {
            self.popups.release(subscription);
        }
        if resolution == Resolution::Confirm {
            tracing::info!("Logout confirmed");
            self.should_quit = true;
        }
    }

    pub fn loading_state(&mut self) -> Option<&mut ThrobberState> {
        match self.catalog_loading {
            LoadingState::Loading(ref mut throbber_state) => Some(throbber_state),
            _ => None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Default, Debug, Clone)]
pub struct LogsState {
    pub scroll_offset: usize,
    pub total_entries: usize,
}
