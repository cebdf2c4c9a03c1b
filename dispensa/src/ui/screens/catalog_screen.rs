use ratatui::prelude::*;

use crate::cards::CardPage;
use crate::state::LoadingState;
use crate::ui::{
    components::{card_grid, empty_state, filter_input, help_bar, screen_title},
    layouts,
};
use dispensa_catalog::EntityKind;

/// Render one catalog screen: title, optional filter bar, card grid, help bar
pub fn render(f: &mut Frame, page: &dyn CardPage, loading: &LoadingState) {
    let kind = page.kind();
    let filter = page.filter_input();
    let title = screen_title_text(page);

    if filter.active || filter.has_text() {
        let (title_area, filter_area, content_area, help_area) =
            layouts::screen_layout_with_filter(f.area());
        screen_title::render_screen_title(f, title_area, &title, loading);
        filter_input::render_filter_input(f, filter_area, kind, filter);
        render_content(f, content_area, page, loading);
        render_help(f, help_area, kind);
    } else {
        let (title_area, content_area, help_area) = layouts::screen_layout(f.area());
        screen_title::render_screen_title(f, title_area, &title, loading);
        render_content(f, content_area, page, loading);
        render_help(f, help_area, kind);
    }
}

fn block_title(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Category => "Categories",
        EntityKind::Product => "Products",
    }
}

fn screen_title_text(page: &dyn CardPage) -> String {
    let count = page.container().len();
    let category = &page.filter_input().category;
    match page.kind() {
        EntityKind::Product if !category.trim().is_empty() => {
            format!("Products in {} ({})", category.trim(), count)
        }
        kind => format!("{} ({})", block_title(kind), count),
    }
}

fn render_content(f: &mut Frame, area: Rect, page: &dyn CardPage, loading: &LoadingState) {
    let title = block_title(page.kind());
    let container = page.container();

    if !container.is_empty() {
        card_grid::render_card_grid(f, area, container.cards(), page.selected_index());
        return;
    }

    match loading {
        LoadingState::Loading(..) | LoadingState::NotStarted => {
            empty_state::render_loading_state(f, area, title, "Loading catalog...");
        }
        LoadingState::Error(error) => {
            empty_state::render_error_state(f, area, title, error);
        }
        LoadingState::Loaded if page.filter_input().has_text() => {
            empty_state::render_empty_state(
                f,
                area,
                title,
                &format!("No {} match the filter", title.to_lowercase()),
                Some("Press Esc to clear the filter"),
            );
        }
        LoadingState::Loaded => {
            empty_state::render_empty_state(
                f,
                area,
                title,
                &format!("No {} found", title.to_lowercase()),
                None,
            );
        }
    }
}

fn render_help(f: &mut Frame, area: Rect, kind: EntityKind) {
    let text = match kind {
        EntityKind::Category => help_bar::HELP_TEXT_CATEGORIES,
        EntityKind::Product => help_bar::HELP_TEXT_PRODUCTS,
    };
    help_bar::render_help_bar(f, area, text);
}
