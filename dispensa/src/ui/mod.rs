pub mod components;
pub mod layouts;
pub mod screens;
pub mod theme;

use crate::cards::Modal;
use crate::log_buffer::LogBuffer;
use crate::state::AppState;
use ratatui::Frame;
use screens::*;

/// Pure render dispatcher - routes to appropriate screen renderer
/// This function is read-only and never mutates state
pub fn render_app(f: &mut Frame, state: &AppState, log_buffer: &LogBuffer) {
    match state.current_screen() {
        Screen::Categories => {
            catalog_screen::render(f, &state.categories, &state.catalog_loading);
        }
        Screen::Products => {
            catalog_screen::render(f, &state.products, &state.catalog_loading);
        }
        Screen::Logs(logs_state) => {
            logs_screen::render(f, logs_state, log_buffer);
        }
    }

    // Card popups of the visible page
    if let Some(page) = state.active_page() {
        match page.modal() {
            Modal::Edit(session) => {
                components::edit_popup::render_edit_popup(f, page.kind(), session);
            }
            Modal::Delete(session) => {
                components::delete_confirmation::render_delete_confirmation(
                    f,
                    page.kind(),
                    session,
                );
            }
            Modal::Idle => {}
        }
    }

    if state.help_visible {
        components::help_popup::render_help_popup(f, state.current_screen());
    }

    if state.logout_visible() {
        components::logout_confirmation::render_logout_confirmation(f);
    }
}
