//! Shared help bar component for consistent bottom navigation hints.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;

/// Render a standard help bar with the given text.
///
/// Gray text in a bordered block, centered. All screens use this for their
/// help bar.
pub fn render_help_bar(f: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text)
        .style(theme::help_text_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(help, area);
}

pub const HELP_TEXT_CATEGORIES: &str =
    "j/k: select | Enter: products | e: edit | d: delete | /: filter | ?: help | q: logout";

pub const HELP_TEXT_PRODUCTS: &str =
    "j/k: select | e: edit | d: delete | /: filter | h: back | ?: help | q: logout";
