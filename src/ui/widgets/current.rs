use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    cli::IconMode,
    domain::weather::{CurrentWeather, SkyCondition, sky_icon},
    ui::theme::Theme,
};

const PLACEHOLDER: &str = "-";
const NO_DATA: &str = "No Data";

/// Headline and metrics rows, e.g. `7°C  light rain` and
/// `Sunshine 25% | Humidity 80% | Wind 4 m/s`. Absent data shows placeholders.
#[must_use]
pub fn summary_lines(current: Option<&CurrentWeather>) -> (String, String) {
    let Some(current) = current else {
        return (
            format!("{PLACEHOLDER}°C  {NO_DATA}"),
            format!("Sunshine {PLACEHOLDER}% | Humidity {PLACEHOLDER}% | Wind {PLACEHOLDER} m/s"),
        );
    };
    let description = if current.description.trim().is_empty() {
        NO_DATA
    } else {
        current.description.as_str()
    };
    (
        format!("{}°C  {description}", current.rounded_temp()),
        format!(
            "Sunshine {:.0}% | Humidity {:.0}% | Wind {} m/s",
            current.sunshine_percent(),
            current.humidity_percent,
            current.rounded_wind()
        ),
    )
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    current: Option<&CurrentWeather>,
    icons: IconMode,
    theme: Theme,
) {
    let block = Block::default()
        .title("Now")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));

    let sky = current.map_or(SkyCondition::Unknown, CurrentWeather::sky);
    let (headline, metrics) = summary_lines(current);
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{} ", sky_icon(sky, icons)),
                Style::default().fg(theme.accent),
            ),
            Span::styled(
                headline,
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::styled(metrics, Style::default().fg(theme.muted_text)),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

pub fn render_loading(frame: &mut Frame, area: Rect, theme: Theme) {
    let block = Block::default()
        .title("Now")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    let text = Paragraph::new("Loading current weather...")
        .style(Style::default().fg(theme.muted_text))
        .block(block);
    frame.render_widget(text, area);
}
