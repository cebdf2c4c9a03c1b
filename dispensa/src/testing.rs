use crate::app_core::{AppCore, DataEventHandler};
use crate::cards::{Card, CardPage, EditForm, Modal};
use crate::commands::executor;
use crate::events::{AppCommand, DataEvent};
use crate::input::{Key, KeyEvent};
use crate::state::AppState;
use crate::ui::screens::Screen;
use dispensa_catalog::CatalogSeed;

/// Mock data event handler for tests (no real async tasks)
///
/// This handler executes commands synchronously using execute_command_sync,
/// which updates state without spawning background tasks or reading files.
#[derive(Default)]
pub struct MockDataHandler {
    /// Every command executed so far, in order
    pub executed: Vec<AppCommand>,
}

impl MockDataHandler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataEventHandler for MockDataHandler {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState) {
        self.executed.push(command.clone());
        executor::execute_command_sync(command, state);
    }
}

pub struct TestApp {
    core: AppCore<MockDataHandler>,
}

impl TestApp {
    /// Create a new test app with mock handler and nothing loaded
    pub fn new() -> Self {
        Self {
            core: AppCore::new(MockDataHandler::new()),
        }
    }

    /// Create a test app with the embedded catalog already loaded
    pub fn with_catalog() -> Self {
        let mut app = Self::new();
        let seed = CatalogSeed::embedded().expect("embedded catalog decodes");
        app.send_data_event(DataEvent::CatalogLoaded { seed });
        app
    }

    /// Send a single key event
    pub fn send_key(&mut self, key: Key) {
        self.core.handle_key(KeyEvent::new(key));
    }

    /// Send a key event with modifiers
    pub fn send_key_event(&mut self, event: KeyEvent) {
        self.core.handle_key(event);
    }

    /// Send multiple keys in sequence
    pub fn send_keys(&mut self, keys: &[Key]) {
        for key in keys {
            self.send_key(*key);
        }
    }

    /// Type text one character at a time
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send_key(Key::Char(c));
        }
    }

    /// Execute a command without going through key mapping
    pub fn send_command(&mut self, command: AppCommand) {
        self.core.handle_command(command);
    }

    /// Inject a data event (simulate the seed loader)
    pub fn send_data_event(&mut self, event: DataEvent) {
        self.core.handle_data_event(event);
    }

    /// Get read-only access to current state
    pub fn state(&self) -> &AppState {
        self.core.state()
    }

    /// The card page of the current screen
    pub fn page(&self) -> &dyn CardPage {
        self.state()
            .active_page()
            .expect("current screen shows a card page")
    }

    /// Titles of the cards currently rendered, in order
    pub fn card_titles(&self) -> Vec<String> {
        self.page()
            .container()
            .cards()
            .iter()
            .map(|c| c.title.clone())
            .collect()
    }

    pub fn card(&self, title: &str) -> Option<&Card> {
        self.page()
            .container()
            .cards()
            .iter()
            .find(|c| c.title == title)
    }

    /// Move the selection onto the card with the given title
    pub fn select_card(&mut self, title: &str) {
        self.send_command(AppCommand::NavigateToTop);
        let position = self
            .page()
            .container()
            .cards()
            .iter()
            .position(|c| c.title == title)
            .unwrap_or_else(|| panic!("No card titled {:?}", title));
        for _ in 0..position {
            self.send_key(Key::Char('j'));
        }
    }

    /// The open edit form, if the edit popup is showing
    pub fn edit_form(&self) -> Option<&EditForm> {
        match self.page().modal() {
            Modal::Edit(session) => Some(&session.form),
            _ => None,
        }
    }

    /// Commands executed so far
    pub fn executed(&self) -> &[AppCommand] {
        &self.core.handler().executed
    }

    /// Assert that the app is on a specific screen type
    ///
    /// Uses discriminant comparison to check screen type without
    /// requiring full equality of state.
    pub fn assert_screen_type(&self, expected_discriminant: std::mem::Discriminant<Screen>) {
        let current = self.state().current_screen();
        assert_eq!(
            std::mem::discriminant(current),
            expected_discriminant,
            "Expected different screen. Current: {:?}",
            current
        );
    }

    /// Assert that the app should quit
    pub fn assert_should_quit(&self) {
        assert!(
            self.core.should_quit(),
            "App should be marked for quit but is not"
        );
    }

    /// Assert that the app should NOT quit
    pub fn assert_not_quit(&self) {
        assert!(
            !self.core.should_quit(),
            "App should NOT be marked for quit but is"
        );
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
