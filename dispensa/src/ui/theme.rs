//! Centralized theme constants and style functions for consistent UI styling.
//!
//! All colors, layout constants, and common styles are defined here so the
//! catalog screens, popups and logs screen look alike.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// Colors
// =============================================================================

/// Confirm actions and INFO log lines
pub const COLOR_POSITIVE: Color = Color::Green;

/// Cancel actions, errors and ERROR log lines
pub const COLOR_NEGATIVE: Color = Color::Red;

/// Muted text (TRACE log lines, fallback image markers)
pub const COLOR_MUTED: Color = Color::DarkGray;

/// Border color for the selected card
pub const COLOR_SELECTION: Color = Color::Yellow;

/// Border color for unselected cards
pub const COLOR_CARD_BORDER: Color = Color::Gray;

/// Color for table headers and key names in help
pub const COLOR_HEADER: Color = Color::Yellow;

/// Color for help text and secondary information
pub const COLOR_HELP_TEXT: Color = Color::Gray;

/// Color for screen titles and card titles
pub const COLOR_TITLE: Color = Color::Cyan;

/// Color for loading/status messages
pub const COLOR_LOADING: Color = Color::Yellow;

/// Border color for danger/warning popups (delete and logout confirmations)
pub const COLOR_BORDER_DANGER: Color = Color::Red;

/// Border color for accent/highlighted elements
pub const COLOR_BORDER_ACCENT: Color = Color::Cyan;

/// Background for form fields when focused
pub const COLOR_FORM_FIELD_BG: Color = Color::DarkGray;

// =============================================================================
// Layout Constants
// =============================================================================

/// Standard margin around screen content
pub const SCREEN_MARGIN: u16 = 2;

/// Height of the title/header area
pub const TITLE_HEIGHT: u16 = 1;

/// Height of the help bar at the bottom
pub const HELP_BAR_HEIGHT: u16 = 3;

/// Height of filter input when visible
pub const FILTER_INPUT_HEIGHT: u16 = 3;

/// Height of one card in the grid (border, title, secondary line, image line)
pub const CARD_HEIGHT: u16 = 5;

/// Narrowest a card column may get before the grid drops a column
pub const CARD_MIN_WIDTH: u16 = 28;

/// Widest grid, in columns
pub const CARD_MAX_COLUMNS: usize = 4;

// =============================================================================
// Style Functions
// =============================================================================

/// Border style for the selected card
pub fn selection_style() -> Style {
    Style::default()
        .fg(COLOR_SELECTION)
        .add_modifier(Modifier::BOLD)
}

pub fn card_border_style() -> Style {
    Style::default().fg(COLOR_CARD_BORDER)
}

/// Style for table headers
pub fn header_style() -> Style {
    Style::default()
        .fg(COLOR_HEADER)
        .add_modifier(Modifier::BOLD)
}

/// Style for help bar text
pub fn help_text_style() -> Style {
    Style::default().fg(COLOR_HELP_TEXT)
}

/// Style for screen titles
pub fn title_style() -> Style {
    Style::default()
        .fg(COLOR_TITLE)
        .add_modifier(Modifier::BOLD)
}

/// Style for loading/status messages
pub fn loading_style() -> Style {
    Style::default().fg(COLOR_LOADING)
}

pub fn muted_style() -> Style {
    Style::default().fg(COLOR_MUTED)
}

pub fn error_style() -> Style {
    Style::default()
        .fg(COLOR_NEGATIVE)
        .add_modifier(Modifier::BOLD)
}

/// Style for form fields when focused
pub fn form_field_focused_style() -> Style {
    Style::default()
        .bg(COLOR_FORM_FIELD_BG)
        .add_modifier(Modifier::BOLD)
}

/// Style for form fields when not focused
pub fn form_field_style() -> Style {
    Style::default().fg(Color::White)
}

/// Style for danger/warning borders (delete and logout confirmations)
pub fn danger_border_style() -> Style {
    Style::default()
        .fg(COLOR_BORDER_DANGER)
        .add_modifier(Modifier::BOLD)
}

/// Style for accent borders
pub fn accent_border_style() -> Style {
    Style::default().fg(COLOR_BORDER_ACCENT)
}
