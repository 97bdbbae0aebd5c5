use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Clear, List, ListItem, ListState, Paragraph},
};

use crate::{app::state::AppState, ui::theme::Theme};

use super::shared::popup_block;

const HINT: &str = "↑/↓ move · Enter select · Esc close";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    frame.render_widget(Clear, area);

    let block = popup_block("Cities", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(inner);

    let items = city_items(state);
    let mut list_state = ListState::default();
    if !state.cities.is_empty() {
        list_state.select(Some(state.picker.selected.min(state.cities.len() - 1)));
    }
    let list = List::new(items)
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("› ");
    frame.render_stateful_widget(list, chunks[0], &mut list_state);

    let (status, color) = match state.city_status.as_deref() {
        Some(message) => (message, theme.danger),
        None => (HINT, theme.muted_text),
    };
    frame.render_widget(
        Paragraph::new(status).style(Style::default().fg(color)),
        chunks[1],
    );
}

fn city_items(state: &AppState) -> Vec<ListItem<'static>> {
    if state.cities.is_empty() {
        let text = if state.city_status.is_some() {
            "No cities"
        } else {
            "Loading cities..."
        };
        return vec![ListItem::new(text)];
    }
    let current = state.current_city_index();
    state
        .cities
        .iter()
        .enumerate()
        .map(|(idx, city)| {
            let marker = if Some(idx) == current { "* " } else { "" };
            ListItem::new(format!(
                "{marker}{} · {:.2}, {:.2}",
                city.name, city.lat, city.lon
            ))
        })
        .collect()
}
