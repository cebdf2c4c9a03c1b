//! Filter bar for the catalog screens.

use ratatui::prelude::Rect;
use ratatui::{
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::cards::{FilterField, FilterInput};
use crate::ui::theme;
use dispensa_catalog::EntityKind;

/// Render one labelled input per filter field; the focused one is highlighted
/// while the bar is being edited.
pub fn render_filter_input(f: &mut Frame, area: Rect, kind: EntityKind, input: &FilterInput) {
    let fields = FilterInput::fields(kind);

    let mut spans = Vec::with_capacity(fields.len() * 3);
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!("{}: ", field.label()),
            theme::header_style(),
        ));
        spans.push(field_span(input, *field));
    }

    let title = if fields.len() > 1 {
        "Filter (Tab: next field, Enter: apply, Esc: clear)"
    } else {
        "Filter (Enter: apply, Esc: clear)"
    };

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(paragraph, area);
}

fn field_span(input: &FilterInput, field: FilterField) -> Span<'static> {
    let value = input.value(field).to_string();
    if input.active && input.focused == field {
        Span::styled(format!("{}_", value), theme::form_field_focused_style())
    } else {
        Span::styled(value, theme::loading_style())
    }
}
