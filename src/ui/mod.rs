pub mod report;
pub mod theme;
pub mod widgets;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    app::state::{AppState, ViewState},
    domain::grid::WeekStart,
};
use theme::{Theme, detect_color_capability, theme_for};

const MIN_WIDTH: u16 = 30;
const MIN_HEIGHT: u16 = 16;

#[must_use]
pub fn resolved_theme(state: &AppState) -> Theme {
    theme_for(detect_color_capability(state.settings.color))
}

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let warning = Paragraph::new(format!(
            "Terminal too small. Resize to at least {MIN_WIDTH}x{MIN_HEIGHT}."
        ))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("sun-graph"));
        frame.render_widget(warning, area);
        return;
    }

    let theme = resolved_theme(state);
    let icons = state.settings.icon_mode;
    let week_start = state.settings.week_start;

    let [header, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(8),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, header, state, theme);

    match &state.view {
        ViewState::Loading => {
            let [now, graph] = panel_areas(body);
            widgets::current::render_loading(frame, now, theme);
            widgets::graph::render_loading(frame, graph, week_start, theme);
        }
        ViewState::Failed(message) => render_error(frame, body, message, theme),
        ViewState::Ready(view) => {
            let [now, graph] = panel_areas(body);
            widgets::current::render(frame, now, view.current.as_ref(), icons, theme);
            widgets::graph::render(frame, graph, view, week_start, icons, theme);
        }
    }

    render_footer(frame, footer, week_start, theme);

    if state.picker.open {
        widgets::city_picker::render(frame, centered_rect(60, 70, area), state, theme);
    }
}

fn panel_areas(body: Rect) -> [Rect; 2] {
    Layout::vertical([Constraint::Length(4), Constraint::Min(4)]).areas(body)
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let mut spans = vec![
        Span::styled(
            "SunGraph ",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(state.city.clone(), Style::default().fg(theme.text)),
    ];
    if state.is_loading() {
        spans.push(Span::styled(
            "  loading...",
            Style::default().fg(theme.muted_text),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_error(frame: &mut Frame, area: Rect, message: &str, theme: Theme) {
    let block = Block::default()
        .title("Error")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.danger));
    let lines = vec![
        Line::styled(
            message.to_string(),
            Style::default()
                .fg(theme.danger)
                .add_modifier(Modifier::BOLD),
        ),
        Line::default(),
        Line::styled(
            "Retrying automatically. Press r to retry now or c to pick another city.",
            Style::default().fg(theme.muted_text),
        ),
    ];
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        area,
    );
}

fn render_footer(frame: &mut Frame, area: Rect, week_start: WeekStart, theme: Theme) {
    let start = match week_start {
        WeekStart::Sunday => "Sun",
        WeekStart::Monday => "Mon",
    };
    let help = format!("q quit · c city · r refresh · w week start ({start})");
    frame.render_widget(
        Paragraph::new(help).style(Style::default().fg(theme.muted_text)),
        area,
    );
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
