//! Edit popup for the selected card.
//!
//! Two inputs pre-filled from the card: the display name and the count
//! (categories) or quantity (products). A failed presence check is shown
//! below the fields and the popup stays open.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::cards::workflow::{EditField, EditForm, EditSession};
use crate::ui::{layouts, theme};
use dispensa_catalog::EntityKind;

pub fn render_edit_popup(f: &mut Frame, kind: EntityKind, session: &EditSession) {
    let title = format!(" Edit {} ", kind.noun());
    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::MEDIUM,
        &title,
        theme::accent_border_style(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Name
            Constraint::Length(1), // Amount
            Constraint::Length(1),
            Constraint::Length(1), // Validation error
            Constraint::Min(0),
            Constraint::Length(1), // Instructions
        ])
        .split(inner);

    let form = &session.form;
    render_field(f, chunks[0], "Name", &form.name, form, EditField::Name);
    render_field(
        f,
        chunks[1],
        kind.amount_label(),
        &form.amount,
        form,
        EditField::Amount,
    );

    if let Some(error) = &form.validation_error {
        f.render_widget(
            Paragraph::new(error.as_str()).style(theme::error_style()),
            chunks[3],
        );
    }

    let instructions = Paragraph::new("Enter: save | Tab: next field | Esc: close")
        .style(theme::help_text_style())
        .alignment(Alignment::Center);
    f.render_widget(instructions, chunks[5]);
}

fn render_field(
    f: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    form: &EditForm,
    field: EditField,
) {
    let focused = form.focused == field;
    let value_style = if focused {
        theme::form_field_focused_style()
    } else {
        theme::form_field_style()
    };
    let cursor = if focused { "_" } else { "" };

    let line = Line::from(vec![
        Span::styled(format!("{:>10}: ", label), theme::header_style()),
        Span::styled(format!("{}{}", value, cursor), value_style),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
