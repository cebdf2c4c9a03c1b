use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::Modifier,
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::cards::workflow::DeleteSession;
use crate::ui::{layouts, theme};
use dispensa_catalog::EntityKind;

/// Render a confirmation popup for deleting the card's entity
pub fn render_delete_confirmation(f: &mut Frame, kind: EntityKind, session: &DeleteSession) {
    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::SMALL,
        " Confirm Delete ",
        theme::danger_border_style(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Warning message
            Constraint::Length(1), // Empty line
            Constraint::Length(1), // Instructions
        ])
        .split(inner);

    let warning = Paragraph::new(format!(
        "Are you sure you want to delete the {} \"{}\"?",
        kind.noun(),
        session.name
    ))
    .style(theme::loading_style().add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    f.render_widget(warning, chunks[0]);

    super::popup::render_yes_no_instructions(f, chunks[2]);
}
