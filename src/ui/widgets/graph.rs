use chrono::Weekday;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    app::state::WeatherView,
    cli::IconMode,
    domain::{
        grid::{CalendarGrid, DAYS_PER_WEEK, MonthLabel, WeekStart},
        sunshine::SunnyLevel,
    },
    ui::theme::{Theme, level_color},
};

/// Width of the weekday gutter left of the first column.
pub const DAY_LABEL_WIDTH: usize = 4;
/// Each week takes one glyph plus one space.
pub const WEEK_COLUMN_WIDTH: usize = 2;

const CELL: &str = "■";
const SKELETON_CELL: &str = "□";

#[must_use]
pub fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

#[must_use]
pub fn empty_history_message(city: &str) -> String {
    format!("No historical weather data available for {city} yet. It will be generated over time.")
}

/// Number of week columns that fit next to the weekday gutter.
#[must_use]
pub fn visible_week_count(width: u16) -> usize {
    usize::from(width).saturating_sub(DAY_LABEL_WIDTH) / WEEK_COLUMN_WIDTH
}

/// Month header for weeks `first_week..first_week + count`.
///
/// Labels start above their week column and shift right when the previous
/// label would otherwise overlap, so short months never collide.
#[must_use]
pub fn month_header(labels: &[MonthLabel], first_week: usize, count: usize) -> String {
    let mut header = " ".repeat(DAY_LABEL_WIDTH);
    let end = first_week + count;
    for label in labels
        .iter()
        .filter(|l| l.week_index >= first_week && l.week_index < end)
    {
        let column = DAY_LABEL_WIDTH + (label.week_index - first_week) * WEEK_COLUMN_WIDTH;
        let start = column.max(header.len() + usize::from(header.len() > DAY_LABEL_WIDTH));
        header.push_str(&" ".repeat(start - header.len()));
        header.push_str(label.label);
    }
    header.trim_end().to_string()
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    view: &WeatherView,
    week_start: WeekStart,
    icons: IconMode,
    theme: Theme,
) {
    let block = graph_block("Sunshine history", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if view.grid.is_empty() {
        let message = Paragraph::new(empty_history_message(&view.city))
            .style(Style::default().fg(theme.muted_text))
            .wrap(Wrap { trim: true });
        frame.render_widget(message, inner);
        return;
    }

    let lines = heatmap_lines(&view.grid, week_start, icons, theme, inner.width);
    frame.render_widget(Paragraph::new(lines), inner);
}

pub fn render_loading(frame: &mut Frame, area: Rect, week_start: WeekStart, theme: Theme) {
    let block = graph_block("Sunshine history · loading", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = visible_week_count(inner.width);
    let mut lines = vec![Line::default()];
    for day in week_start.weekdays() {
        let mut spans = vec![Span::styled(
            format!("{:<DAY_LABEL_WIDTH$}", weekday_label(day)),
            Style::default().fg(theme.muted_text),
        )];
        spans.extend((0..columns).map(|_| {
            Span::styled(format!("{SKELETON_CELL} "), Style::default().fg(theme.skeleton))
        }));
        lines.push(Line::from(spans));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn graph_block(title: &'static str, theme: Theme) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
}

fn heatmap_lines(
    grid: &CalendarGrid,
    week_start: WeekStart,
    icons: IconMode,
    theme: Theme,
    width: u16,
) -> Vec<Line<'static>> {
    let count = visible_week_count(width).min(grid.weeks.len());
    let first_week = grid.weeks.len() - count;
    let weeks = &grid.weeks[first_week..];

    let mut lines = Vec::with_capacity(DAYS_PER_WEEK + 4);
    lines.push(Line::styled(
        month_header(&grid.month_labels, first_week, count),
        Style::default().fg(theme.muted_text),
    ));

    for (row, day) in week_start.weekdays().into_iter().enumerate() {
        // Alternate rows only, like a contribution graph.
        let label = if row % 2 == 1 { weekday_label(day) } else { "" };
        let mut spans = vec![Span::styled(
            format!("{label:<DAY_LABEL_WIDTH$}"),
            Style::default().fg(theme.muted_text),
        )];
        for week in weeks {
            let cell = match week.slot(row) {
                Some(record) => level_span(record.sunny_level(), icons, theme),
                None => Span::raw(" "),
            };
            spans.push(cell);
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::default());
    lines.push(legend_line(icons, theme));
    if let Some(latest) = weeks.last().and_then(|week| week.days().last()) {
        lines.push(Line::styled(
            format!("Latest: {}", latest.describe()),
            Style::default().fg(theme.text),
        ));
    }
    lines
}

fn level_span(level: SunnyLevel, icons: IconMode, theme: Theme) -> Span<'static> {
    match level_color(level, theme.capability) {
        Some(color) => Span::styled(CELL, Style::default().fg(color)),
        None => Span::raw(level.glyph(icons)),
    }
}

fn legend_line(icons: IconMode, theme: Theme) -> Line<'static> {
    let muted = Style::default().fg(theme.muted_text);
    let mut spans = vec![Span::styled("Cloudy ", muted)];
    for level in SunnyLevel::ALL {
        spans.push(level_span(level, icons, theme));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled("Sunny", muted.add_modifier(Modifier::BOLD)));
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(label: &'static str, week_index: usize) -> MonthLabel {
        MonthLabel { label, week_index }
    }

    #[test]
    fn month_header_shifts_colliding_labels() {
        let labels = [label("Jan", 0), label("Feb", 1)];
        assert_eq!(month_header(&labels, 0, 2), "    Jan Feb");
    }

    #[test]
    fn month_header_keeps_spaced_labels_on_their_column() {
        let labels = [label("Jan", 0), label("Feb", 4)];
        assert_eq!(month_header(&labels, 0, 5), "    Jan     Feb");
    }

    #[test]
    fn month_header_drops_labels_outside_window() {
        let labels = [label("Jan", 0), label("Feb", 4), label("Mar", 9)];
        assert_eq!(month_header(&labels, 3, 4), "      Feb");
    }

    #[test]
    fn visible_weeks_leave_room_for_gutter() {
        assert_eq!(visible_week_count(0), 0);
        assert_eq!(visible_week_count(4), 0);
        assert_eq!(visible_week_count(14), 5);
    }

    #[test]
    fn empty_history_names_the_city() {
        assert_eq!(
            empty_history_message("Lviv"),
            "No historical weather data available for Lviv yet. It will be generated over time."
        );
    }
}
