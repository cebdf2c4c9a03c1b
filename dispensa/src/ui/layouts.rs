//! Reusable layout builders for consistent screen structure.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::theme::{
    CARD_HEIGHT, CARD_MAX_COLUMNS, CARD_MIN_WIDTH, FILTER_INPUT_HEIGHT, HELP_BAR_HEIGHT,
    SCREEN_MARGIN, TITLE_HEIGHT,
};

/// Standard screen layout with title, content area, and help bar.
///
/// Returns a tuple of (title_area, content_area, help_area)
pub fn screen_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(SCREEN_MARGIN)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Min(CARD_HEIGHT),
            Constraint::Length(HELP_BAR_HEIGHT),
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Screen layout with filter input visible.
///
/// Returns a tuple of (title_area, filter_area, content_area, help_area)
pub fn screen_layout_with_filter(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(SCREEN_MARGIN)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Length(FILTER_INPUT_HEIGHT),
            Constraint::Min(CARD_HEIGHT),
            Constraint::Length(HELP_BAR_HEIGHT),
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2], chunks[3])
}

/// Split a title area into title text and loading indicator.
///
/// Returns (title_text_area, loading_indicator_area)
pub fn title_with_loading(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    (chunks[0], chunks[1])
}

/// Create a centered popup rectangle.
///
/// `percent_x` and `percent_y` size the popup relative to `area`.
pub fn centered_popup(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Number of card columns that fit in a given width (at least one)
pub fn grid_columns(width: u16) -> usize {
    ((width / CARD_MIN_WIDTH) as usize).clamp(1, CARD_MAX_COLUMNS)
}

/// Number of card rows that fit in a given height (at least one)
pub fn grid_rows(height: u16) -> usize {
    ((height / CARD_HEIGHT) as usize).max(1)
}

/// Cell rectangles for one grid row of `columns` equally wide cards
pub fn grid_row_cells(row_area: Rect, columns: usize) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
        .split(row_area)
        .to_vec()
}

/// Standard popup sizes
pub mod popup_sizes {
    /// Small popup (50% x 30%) - for simple confirmations
    pub const SMALL: (u16, u16) = (50, 30);

    /// Medium popup (60% x 40%) - for the edit form
    pub const MEDIUM: (u16, u16) = (60, 40);

    /// Large popup (80% x 80%) - for help screens
    pub const LARGE: (u16, u16) = (80, 80);
}
