//! Card grid: one bordered block per rendered card, laid out row by row.

use itertools::Itertools;
use ratatui::prelude::Rect;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::cards::Card;
use crate::ui::{layouts, theme};

/// First grid row to draw so the selected card stays on screen
pub fn first_visible_row(selected: usize, columns: usize, visible_rows: usize) -> usize {
    let selected_row = selected / columns.max(1);
    selected_row.saturating_sub(visible_rows.saturating_sub(1))
}

pub fn render_card_grid(f: &mut Frame, area: Rect, cards: &[Card], selected: usize) {
    let columns = layouts::grid_columns(area.width);
    let visible_rows = layouts::grid_rows(area.height);
    let first_row = first_visible_row(selected, columns, visible_rows);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(theme::CARD_HEIGHT); visible_rows])
        .split(area);

    let rows = cards.iter().enumerate().chunks(columns);
    for (row_index, row) in rows
        .into_iter()
        .skip(first_row)
        .take(visible_rows)
        .enumerate()
    {
        let cells = layouts::grid_row_cells(row_areas[row_index], columns);
        for ((index, card), cell) in row.zip(cells) {
            render_card(f, cell, card, index == selected);
        }
    }
}

fn render_card(f: &mut Frame, area: Rect, card: &Card, selected: bool) {
    let border_style = if selected {
        theme::selection_style()
    } else {
        theme::card_border_style()
    };

    let mut image = vec![Span::styled(
        format!("[{}]", card.image.shown),
        theme::help_text_style(),
    )];
    if card.image.is_fallback() {
        image.push(Span::styled(" (default)", theme::muted_style()));
    }

    let lines = vec![
        Line::from(Span::styled(card.title.as_str(), theme::title_style())),
        Line::from(card.secondary()),
        Line::from(image),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    f.render_widget(paragraph, area);
}
