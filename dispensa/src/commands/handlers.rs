use crate::cards::{CardPage, Control, Modal};
use crate::events::AppCommand;
use crate::input::{Key, KeyEvent};
use crate::state::*;
use crate::ui::screens::Screen;

/// Map user input (KeyEvent) to AppCommand based on current UI state
/// Returns None if the key should be ignored
pub fn handle_key_input(event: KeyEvent, state: &AppState) -> Option<AppCommand> {
    let key = event.key;

    if event.modifiers.ctrl && key == Key::Char('c') {
        return Some(AppCommand::Quit);
    }

    // Priority 1: Logout confirmation covers every screen
    if state.logout_visible() {
        return handle_logout_confirmation_keys(key);
    }

    let page = state.active_page();

    // Priority 2: Card popups
    if let Some(page) = page {
        match page.modal() {
            Modal::Edit(_) => return handle_edit_popup_keys(key),
            Modal::Delete(_) => return handle_delete_confirmation_keys(key),
            Modal::Idle => {}
        }
    }

    // Priority 3: Filter mode
    if let Some(page) = page {
        if page.filter_input().active {
            return match key {
                Key::Enter => Some(AppCommand::ExitFilterMode),
                Key::Tab => Some(AppCommand::NextFilterField),
                Key::Backspace => Some(AppCommand::DeleteFilterChar),
                Key::Char(c) => Some(AppCommand::AppendFilterChar(c)),
                Key::Esc => Some(AppCommand::ClearFilter),
                _ => None,
            };
        }
    }

    // Priority 4: Check if we're currently showing the help popup
    // This must come before screen-specific Esc handling so help popup takes precedence
    if state.help_visible {
        return match key {
            Key::Char('?') | Key::Esc => Some(AppCommand::ToggleHelp),
            Key::Char('q') => Some(AppCommand::InitiateLogout),
            _ => None,
        };
    }

    // Priority 5: Esc clears a leftover filter on card screens
    if page.is_some() && matches!(key, Key::Esc) {
        return Some(AppCommand::ClearFilter);
    }

    // Handle multi-key sequences
    if let Some(pending) = state.pending_key {
        return match (pending, key) {
            // 'g' followed by 'g' -> first card / oldest log line
            ('g', Key::Char('g')) => Some(AppCommand::NavigateToTop),
            // 'g' followed by 'l' -> go to logs
            ('g', Key::Char('l')) => Some(AppCommand::NavigateToLogs),
            // 'g' followed by 'p' -> every product, unscoped
            ('g', Key::Char('p')) => Some(AppCommand::OpenProducts { category: None }),
            // Any other key clears the pending key
            _ => Some(AppCommand::ClearPendingKey),
        };
    }

    match (state.current_screen(), key) {
        // Global help toggle
        (_, Key::Char('?')) => Some(AppCommand::ToggleHelp),

        // Logout asks for confirmation first
        (_, Key::Char('q')) => Some(AppCommand::InitiateLogout),

        // Multi-key sequence initiator: 'g' sets pending key
        (_, Key::Char('g')) => Some(AppCommand::SetPendingKey('g')),

        // Logs screen jumps
        (Screen::Logs(_), Key::Home) => Some(AppCommand::ScrollLogsToTop),
        (Screen::Logs(_), Key::End) => Some(AppCommand::ScrollLogsToBottom),

        (_, Key::Char('G') | Key::End) => Some(AppCommand::NavigateToBottom),
        (_, Key::Home) => Some(AppCommand::NavigateToTop),

        // Global back navigation (left/h)
        (_, Key::Left | Key::Char('h')) => Some(AppCommand::NavigateBack),

        // Logs screen
        (Screen::Logs(_), Key::Up | Key::Char('k')) => Some(AppCommand::ScrollLogsUp),
        (Screen::Logs(_), Key::Down | Key::Char('j')) => Some(AppCommand::ScrollLogsDown),
        (Screen::Logs(_), Key::PageUp) => Some(AppCommand::ScrollLogsPageUp),
        (Screen::Logs(_), Key::PageDown) => Some(AppCommand::ScrollLogsPageDown),

        // Categories screen: open the selected category's products
        (Screen::Categories, Key::Enter | Key::Right | Key::Char('l')) => {
            let card = state.categories.selected_card()?;
            Some(AppCommand::OpenProducts {
                category: Some(card.title.clone()),
            })
        }

        // Card screens
        (Screen::Categories | Screen::Products, _) => handle_card_keys(key, page?),

        _ => None,
    }
}

/// Keys acting on the selected card of a catalog screen
fn handle_card_keys(key: Key, page: &dyn CardPage) -> Option<AppCommand> {
    match key {
        Key::Up | Key::Char('k') => Some(AppCommand::SelectPrevious),
        Key::Down | Key::Char('j') => Some(AppCommand::SelectNext),
        Key::Char('/') => Some(AppCommand::EnterFilterMode),
        Key::Char('e') => page
            .selected_card()
            .map(|card| AppCommand::TriggerAffordance(card.edit)),
        Key::Char('d') | Key::Backspace => page
            .selected_card()
            .map(|card| AppCommand::TriggerAffordance(card.delete)),
        _ => None,
    }
}

/// Handle keyboard input while the edit popup is open
fn handle_edit_popup_keys(key: Key) -> Option<AppCommand> {
    match key {
        Key::Enter => Some(AppCommand::PressControl(Control::SaveEdit)),
        Key::Esc => Some(AppCommand::PressControl(Control::CloseEdit)),
        Key::Tab | Key::BackTab => Some(AppCommand::NextFormField),
        Key::Backspace => Some(AppCommand::DeleteFormChar),
        Key::Char(c) => Some(AppCommand::AppendFormChar(c)),
        _ => None,
    }
}

/// Handle keyboard input when in delete confirmation mode
fn handle_delete_confirmation_keys(key: Key) -> Option<AppCommand> {
    match key {
        Key::Char('y') | Key::Char('Y') | Key::Enter => {
            Some(AppCommand::PressControl(Control::ConfirmDelete))
        }
        Key::Char('n') | Key::Char('N') | Key::Esc => {
            Some(AppCommand::PressControl(Control::CancelDelete))
        }
        _ => None,
    }
}

fn handle_logout_confirmation_keys(key: Key) -> Option<AppCommand> {
    match key {
        Key::Char('y') | Key::Char('Y') | Key::Enter => {
            Some(AppCommand::PressControl(Control::ConfirmLogout))
        }
        Key::Char('n') | Key::Char('N') | Key::Esc => {
            Some(AppCommand::PressControl(Control::CancelLogout))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::DataEvent;
    use crate::state::reducer::reduce_data_event;
    use dispensa_catalog::CatalogSeed;

    /// Helper to create UI state with the embedded catalog loaded
    fn loaded_state() -> AppState {
        let mut state = AppState::new();
        reduce_data_event(
            &mut state,
            DataEvent::CatalogLoaded {
                seed: CatalogSeed::embedded().unwrap(),
            },
        );
        state
    }

    fn press(state: &AppState, key: Key) -> Option<AppCommand> {
        handle_key_input(KeyEvent::new(key), state)
    }

    // ============================================================================
    // Global Commands
    // ============================================================================

    #[test]
    fn test_q_initiates_logout() {
        let state = loaded_state();
        assert_eq!(
            press(&state, Key::Char('q')),
            Some(AppCommand::InitiateLogout)
        );
    }

    #[test]
    fn test_ctrl_c_quits_immediately() {
        let mut state = loaded_state();
        state.open_logout();
        assert_eq!(
            handle_key_input(KeyEvent::with_ctrl(Key::Char('c')), &state),
            Some(AppCommand::Quit)
        );
    }

    #[test]
    fn test_help_toggle() {
        let state = loaded_state();
        assert_eq!(press(&state, Key::Char('?')), Some(AppCommand::ToggleHelp));
    }

    #[test]
    fn test_help_visible_blocks_other_commands() {
        let mut state = loaded_state();
        state.help_visible = true;

        assert_eq!(press(&state, Key::Char('j')), None);
        assert_eq!(press(&state, Key::Char('e')), None);
        assert_eq!(press(&state, Key::Esc), Some(AppCommand::ToggleHelp));
    }

    #[test]
    fn test_g_sequences() {
        let mut state = loaded_state();
        assert_eq!(
            press(&state, Key::Char('g')),
            Some(AppCommand::SetPendingKey('g'))
        );

        state.pending_key = Some('g');
        assert_eq!(press(&state, Key::Char('g')), Some(AppCommand::NavigateToTop));
        assert_eq!(press(&state, Key::Char('l')), Some(AppCommand::NavigateToLogs));
        assert_eq!(
            press(&state, Key::Char('p')),
            Some(AppCommand::OpenProducts { category: None })
        );
        assert_eq!(press(&state, Key::Char('x')), Some(AppCommand::ClearPendingKey));
    }

    // ============================================================================
    // Card screens
    // ============================================================================

    #[test]
    fn test_edit_and_delete_target_selected_card() {
        let state = loaded_state();
        let card = state.categories.selected_card().unwrap();

        assert_eq!(
            press(&state, Key::Char('e')),
            Some(AppCommand::TriggerAffordance(card.edit))
        );
        assert_eq!(
            press(&state, Key::Char('d')),
            Some(AppCommand::TriggerAffordance(card.delete))
        );
    }

    #[test]
    fn test_card_keys_ignored_without_cards() {
        let state = AppState::new();
        assert_eq!(press(&state, Key::Char('e')), None);
        assert_eq!(press(&state, Key::Enter), None);
    }

    #[test]
    fn test_enter_opens_category_products() {
        let state = loaded_state();
        assert_eq!(
            press(&state, Key::Enter),
            Some(AppCommand::OpenProducts {
                category: Some("Carne".to_string())
            })
        );
    }

    #[test]
    fn test_filter_mode_captures_text() {
        let mut state = loaded_state();
        state.categories.begin_filter();

        assert_eq!(
            press(&state, Key::Char('q')),
            Some(AppCommand::AppendFilterChar('q'))
        );
        assert_eq!(press(&state, Key::Tab), Some(AppCommand::NextFilterField));
        assert_eq!(press(&state, Key::Enter), Some(AppCommand::ExitFilterMode));
        assert_eq!(press(&state, Key::Esc), Some(AppCommand::ClearFilter));
    }

    #[test]
    fn test_delete_popup_keys() {
        let mut state = loaded_state();
        let delete = state.categories.container().cards()[2].delete;
        state.categories.trigger(delete);

        assert_eq!(
            press(&state, Key::Char('y')),
            Some(AppCommand::PressControl(Control::ConfirmDelete))
        );
        assert_eq!(
            press(&state, Key::Esc),
            Some(AppCommand::PressControl(Control::CancelDelete))
        );
        assert_eq!(press(&state, Key::Char('j')), None);
    }

    #[test]
    fn test_edit_popup_keys() {
        let mut state = loaded_state();
        let edit = state.categories.container().cards()[0].edit;
        state.categories.trigger(edit);

        assert_eq!(
            press(&state, Key::Char('q')),
            Some(AppCommand::AppendFormChar('q'))
        );
        assert_eq!(
            press(&state, Key::Enter),
            Some(AppCommand::PressControl(Control::SaveEdit))
        );
        assert_eq!(
            press(&state, Key::Esc),
            Some(AppCommand::PressControl(Control::CloseEdit))
        );
        assert_eq!(press(&state, Key::Tab), Some(AppCommand::NextFormField));
    }

    #[test]
    fn test_logout_popup_takes_priority() {
        let mut state = loaded_state();
        state.open_logout();

        assert_eq!(
            press(&state, Key::Enter),
            Some(AppCommand::PressControl(Control::ConfirmLogout))
        );
        assert_eq!(
            press(&state, Key::Char('n')),
            Some(AppCommand::PressControl(Control::CancelLogout))
        );
        assert_eq!(press(&state, Key::Char('e')), None);
    }

    #[test]
    fn test_logs_screen_scrolling() {
        let mut state = loaded_state();
        state.navigate_to(Screen::Logs(LogsState::default()));

        assert_eq!(press(&state, Key::Char('k')), Some(AppCommand::ScrollLogsUp));
        assert_eq!(press(&state, Key::PageDown), Some(AppCommand::ScrollLogsPageDown));
        assert_eq!(press(&state, Key::Char('e')), None);
        assert_eq!(press(&state, Key::Char('h')), Some(AppCommand::NavigateBack));
        assert_eq!(press(&state, Key::Home), Some(AppCommand::ScrollLogsToTop));
        assert_eq!(press(&state, Key::End), Some(AppCommand::ScrollLogsToBottom));
    }
}
