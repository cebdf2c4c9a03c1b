use ratatui::{
    prelude::*,
    widgets::{List, ListItem},
    Frame,
};

use crate::ui::{layouts, screens::Screen, theme};

pub fn render_help_popup(f: &mut Frame, screen: &Screen) {
    let help_items = get_help_items(screen);

    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::LARGE,
        " Help (press ? or Esc to close) ",
        theme::accent_border_style(),
    );

    let items: Vec<ListItem> = help_items
        .iter()
        .map(|(key, description)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:15}", key), theme::header_style()),
                Span::raw(*description),
            ]))
        })
        .collect();

    let list = List::new(items).style(Style::default().fg(Color::White));

    f.render_widget(list, inner);
}

fn get_help_items(screen: &Screen) -> Vec<(&'static str, &'static str)> {
    let mut items = vec![];

    match screen {
        Screen::Categories | Screen::Products => {
            items.push(("↑/k", "Select previous card"));
            items.push(("↓/j", "Select next card"));
            if matches!(screen, Screen::Categories) {
                items.push(("Enter/→/l", "Show products in the selected category"));
            }
            items.push(("e", "Edit selected card"));
            items.push(("d/Backspace", "Delete selected card"));
            items.push(("/", "Enter filter mode"));
            if matches!(screen, Screen::Products) {
                items.push(("Tab", "Next filter field (name, quantity, category)"));
            }
            items.push(("Esc", "Clear filter"));
        }
        Screen::Logs(..) => {
            items.push(("↑/k", "Scroll up (older logs)"));
            items.push(("↓/j", "Scroll down (newer logs)"));
            items.push(("Page Up", "Scroll up one page"));
            items.push(("Page Down", "Scroll down one page"));
            items.push(("g then g", "Scroll to oldest logs"));
            items.push(("G", "Scroll to newest logs"));
            items.push(("Home/End", "Jump to oldest / newest logs"));
        }
    }

    items.push(("", ""));
    items.push(("--- Global ---", ""));
    items.push(("h/←", "Navigate back"));
    items.push(("g then p", "Go to all products"));
    items.push(("g then l", "Go to logs"));
    items.push(("g then g", "First card"));
    items.push(("G", "Last card"));
    items.push(("?", "Toggle this help"));
    items.push(("q", "Log out"));
    items.push(("Ctrl+c", "Quit immediately"));

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::LogsState;

    #[test]
    fn test_category_help_mentions_products() {
        let items = get_help_items(&Screen::Categories);
        assert!(items.iter().any(|(key, _)| *key == "Enter/→/l"));
    }

    #[test]
    fn test_logs_help_has_no_card_actions() {
        let items = get_help_items(&Screen::Logs(LogsState::default()));
        assert!(!items.iter().any(|(key, _)| *key == "e"));
    }
}
