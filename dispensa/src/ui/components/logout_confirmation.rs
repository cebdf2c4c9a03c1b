use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::Modifier,
    widgets::Paragraph,
    Frame,
};

use crate::ui::{layouts, theme};

pub fn render_logout_confirmation(f: &mut Frame) {
    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::SMALL,
        " Logout ",
        theme::danger_border_style(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let warning = Paragraph::new("Do you really want to log out?")
        .style(theme::loading_style().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(warning, chunks[0]);

    super::popup::render_yes_no_instructions(f, chunks[2]);
}
