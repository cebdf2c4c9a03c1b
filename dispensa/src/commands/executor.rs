use crate::background::{seed_loader::SeedLoader, BackgroundTaskManager};
use crate::cards::{CardPage, Control};
use crate::events::AppCommand;
use crate::state::*;
use crate::ui::screens::Screen;
use throbber_widgets_tui::ThrobberState;

const LOG_PAGE_SIZE: usize = 20;

/// Execute a command by spawning background tasks or updating state in place
pub fn execute_command(
    command: AppCommand,
    state: &mut AppState,
    task_manager: &mut BackgroundTaskManager,
    seed_loader: &SeedLoader,
) {
    match command {
        AppCommand::LoadCatalog => {
            state.catalog_loading = LoadingState::Loading(ThrobberState::default());

            let seed_loader = seed_loader.clone();
            let future = async move {
                seed_loader.load_catalog().await;
            };
            task_manager.spawn_load_task("load_catalog".to_string(), future);
        }
        command => execute_command_sync(command, state),
    }
}

/// Synchronous command execution (no background tasks)
///
/// Every catalog workflow step is a pure state transition, so the only
/// command skipped here is `LoadCatalog`. Tests inject the resulting
/// `DataEvent` directly instead.
pub fn execute_command_sync(command: AppCommand, state: &mut AppState) {
    let is_setting_pending_key = matches!(command, AppCommand::SetPendingKey(_));

    match command {
        // Simple state updates
        AppCommand::Quit => state.should_quit = true,
        AppCommand::ToggleHelp => state.help_visible = !state.help_visible,
        AppCommand::SetPendingKey(c) => state.pending_key = Some(c),
        AppCommand::ClearPendingKey => state.pending_key = None,

        // Navigation
        AppCommand::NavigateBack => {
            state.navigate_back();
        }
        AppCommand::OpenProducts { category } => {
            tracing::debug!("Opening products for {:?}", category);
            state.products.set_category_filter(category.as_deref());
            if !matches!(state.current_screen(), Screen::Products) {
                state.navigate_to(Screen::Products);
            }
        }
        AppCommand::NavigateToTop => match state.current_screen_mut() {
            Screen::Logs(s) => s.scroll_offset = s.total_entries.saturating_sub(1),
            _ => {
                if let Some(page) = state.active_page_mut() {
                    page.select_first();
                }
            }
        },
        AppCommand::NavigateToBottom => match state.current_screen_mut() {
            Screen::Logs(s) => s.scroll_offset = 0,
            _ => {
                if let Some(page) = state.active_page_mut() {
                    page.select_last();
                }
            }
        },
        AppCommand::SelectNext => {
            if let Some(page) = state.active_page_mut() {
                page.select_next();
            }
        }
        AppCommand::SelectPrevious => {
            if let Some(page) = state.active_page_mut() {
                page.select_previous();
            }
        }

        // Filter mode
        AppCommand::EnterFilterMode => {
            if let Some(page) = state.active_page_mut() {
                page.begin_filter();
            }
        }
        AppCommand::ExitFilterMode => {
            if let Some(page) = state.active_page_mut() {
                page.end_filter();
            }
        }
        AppCommand::AppendFilterChar(c) => {
            if let Some(page) = state.active_page_mut() {
                page.push_filter_char(c);
            }
        }
        AppCommand::DeleteFilterChar => {
            if let Some(page) = state.active_page_mut() {
                page.pop_filter_char();
            }
        }
        AppCommand::NextFilterField => {
            if let Some(page) = state.active_page_mut() {
                page.next_filter_field();
            }
        }
        AppCommand::ClearFilter => {
            if let Some(page) = state.active_page_mut() {
                page.clear_filter();
            }
        }

        // Card workflow
        AppCommand::TriggerAffordance(affordance) => {
            if let Some(page) = state.active_page_mut() {
                if !page.trigger(affordance) {
                    tracing::debug!("Ignoring stale affordance {:?}", affordance);
                }
            }
        }
        AppCommand::PressControl(control @ (Control::ConfirmLogout | Control::CancelLogout)) => {
            state.resolve_logout(control);
        }
        AppCommand::PressControl(control) => {
            if let Some(page) = state.active_page_mut() {
                match page.press(control) {
                    Some(outcome) => tracing::debug!("{:?} resolved: {:?}", control, outcome),
                    None => tracing::debug!("No live handler for {:?}", control),
                }
            }
        }
        AppCommand::AppendFormChar(c) => {
            if let Some(page) = state.active_page_mut() {
                page.push_form_char(c);
            }
        }
        AppCommand::DeleteFormChar => {
            if let Some(page) = state.active_page_mut() {
                page.pop_form_char();
            }
        }
        AppCommand::NextFormField => {
            if let Some(page) = state.active_page_mut() {
                page.next_form_field();
            }
        }

        AppCommand::InitiateLogout => {
            state.help_visible = false;
            state.open_logout();
        }

        // Log screen commands
        AppCommand::NavigateToLogs => {
            // No logging here to avoid a feedback loop on the logs screen
            state.navigate_to(Screen::Logs(LogsState::default()));
        }
        AppCommand::ScrollLogsUp => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                // Scroll up means going back in time (increase offset)
                if s.scroll_offset < s.total_entries.saturating_sub(1) {
                    s.scroll_offset += 1;
                }
            }
        }
        AppCommand::ScrollLogsDown => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset = s.scroll_offset.saturating_sub(1);
            }
        }
        AppCommand::ScrollLogsPageUp => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset =
                    (s.scroll_offset + LOG_PAGE_SIZE).min(s.total_entries.saturating_sub(1));
            }
        }
        AppCommand::ScrollLogsPageDown => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset = s.scroll_offset.saturating_sub(LOG_PAGE_SIZE);
            }
        }
        AppCommand::ScrollLogsToTop => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset = s.total_entries.saturating_sub(1);
            }
        }
        AppCommand::ScrollLogsToBottom => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset = 0;
            }
        }

        // Requires a background task; tests inject CatalogLoaded instead
        AppCommand::LoadCatalog => {}
    }

    // Clear pending key after any command except SetPendingKey
    // This ensures multi-key sequences are properly reset after completion
    if !is_setting_pending_key && state.pending_key.is_some() {
        state.pending_key = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::DataEvent;
    use crate::state::reducer::reduce_data_event;
    use dispensa_catalog::CatalogSeed;

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

    #[test]
    fn test_open_products_scopes_by_category() {
        let mut state = loaded_state();

        execute_command_sync(
            AppCommand::OpenProducts {
                category: Some("Igiene".to_string()),
            },
            &mut state,
        );

        assert!(matches!(state.current_screen(), Screen::Products));
        assert_eq!(state.products.filter_input().category, "Igiene");
        assert!(!state.products.container().is_empty());
        assert!(state.products.container().len() < state.products.store().len());

        // Jumping to all products from the products screen does not stack another screen
        execute_command_sync(AppCommand::OpenProducts { category: None }, &mut state);
        assert_eq!(state.history.len(), 2);
        assert_eq!(
            state.products.container().len(),
            state.products.store().len()
        );
    }

    #[test]
    fn test_open_products_matches_category_exactly() {
        use dispensa_catalog::{Category, Product};

        let mut state = AppState::new();
        reduce_data_event(
            &mut state,
            DataEvent::CatalogLoaded {
                seed: CatalogSeed {
                    categories: vec![
                        Category::new(1, "Pesce", 1, "pesce.jpg"),
                        Category::new(2, "Pesce Surgelato", 1, "surgelati.jpg"),
                    ],
                    products: vec![
                        Product::new("Orata", "Pesce", 2, "orata.jpg"),
                        Product::new("Bastoncini", "Pesce Surgelato", 10, "bastoncini.jpg"),
                    ],
                },
            },
        );

        execute_command_sync(
            AppCommand::OpenProducts {
                category: Some("Pesce".to_string()),
            },
            &mut state,
        );

        let titles: Vec<&str> = state
            .products
            .container()
            .cards()
            .iter()
            .map(|c| c.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Orata"]);
    }

    #[test]
    fn test_select_bounds() {
        let mut state = loaded_state();

        execute_command_sync(AppCommand::SelectPrevious, &mut state);
        assert_eq!(state.categories.selected_index(), 0);

        execute_command_sync(AppCommand::NavigateToBottom, &mut state);
        assert_eq!(state.categories.selected_index(), 5);

        execute_command_sync(AppCommand::SelectNext, &mut state);
        assert_eq!(state.categories.selected_index(), 5);

        execute_command_sync(AppCommand::NavigateToTop, &mut state);
        assert_eq!(state.categories.selected_index(), 0);
    }

    #[test]
    fn test_logout_control_routed_to_app_bus() {
        let mut state = loaded_state();
        execute_command_sync(AppCommand::InitiateLogout, &mut state);

        // A page control cannot resolve the logout popup
        execute_command_sync(AppCommand::PressControl(Control::ConfirmDelete), &mut state);
        assert!(state.logout_visible());

        execute_command_sync(AppCommand::PressControl(Control::ConfirmLogout), &mut state);
        assert!(!state.logout_visible());
        assert!(state.should_quit);
    }

    #[test]
    fn test_stale_affordance_does_nothing() {
        let mut state = loaded_state();
        let stale = state.categories.container().cards()[0].delete;
        execute_command_sync(AppCommand::ClearFilter, &mut state);

        execute_command_sync(AppCommand::TriggerAffordance(stale), &mut state);

        assert!(state.categories.modal().is_idle());
    }

    #[test]
    fn test_log_scrolling_bounds() {
        let mut state = loaded_state();
        execute_command_sync(AppCommand::NavigateToLogs, &mut state);
        if let Screen::Logs(s) = state.current_screen_mut() {
            s.total_entries = 30;
        }

        execute_command_sync(AppCommand::ScrollLogsPageUp, &mut state);
        execute_command_sync(AppCommand::ScrollLogsPageUp, &mut state);
        match state.current_screen() {
            Screen::Logs(s) => assert_eq!(s.scroll_offset, 29),
            other => panic!("Expected logs screen, got {:?}", other),
        }

        execute_command_sync(AppCommand::ScrollLogsToBottom, &mut state);
        match state.current_screen() {
            Screen::Logs(s) => assert_eq!(s.scroll_offset, 0),
            other => panic!("Expected logs screen, got {:?}", other),
        }
    }

    #[test]
    fn test_pending_key_cleared_after_command() {
        let mut state = loaded_state();
        execute_command_sync(AppCommand::SetPendingKey('g'), &mut state);
        assert_eq!(state.pending_key, Some('g'));

        execute_command_sync(AppCommand::NavigateToTop, &mut state);
        assert_eq!(state.pending_key, None);
    }
}
