//! Non-interactive output for `--one-shot`.

use std::fmt::Write as _;

use serde::Serialize;

use crate::{
    app::state::WeatherView,
    cli::IconMode,
    domain::{
        grid::{CalendarGrid, WeekStart},
        sunshine::SunnyLevel,
        weather::{CurrentWeather, DayRecord},
    },
    ui::widgets::graph::{DAY_LABEL_WIDTH, empty_history_message, month_header, weekday_label},
};

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    city: &'a str,
    current: Option<&'a CurrentWeather>,
    days: &'a [DayRecord],
    grid: &'a CalendarGrid,
}

/// Plain-text heatmap with one line per weekday. Every week is printed, so
/// the width grows with the history length.
#[must_use]
pub fn render_report(view: &WeatherView, week_start: WeekStart, icons: IconMode) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "SunGraph: {}", view.city);

    match &view.current {
        Some(current) => {
            let _ = writeln!(
                out,
                "Now: {}°C, {}",
                current.rounded_temp(),
                current.description
            );
            let _ = writeln!(
                out,
                "Sunshine {:.0}% | Humidity {:.0}% | Wind {} m/s",
                current.sunshine_percent(),
                current.humidity_percent,
                current.rounded_wind()
            );
        }
        None => {
            let _ = writeln!(out, "Now: no current weather data");
        }
    }
    out.push('\n');

    if view.grid.is_empty() {
        out.push_str(&empty_history_message(&view.city));
        return out;
    }

    let grid = &view.grid;
    let _ = writeln!(out, "{}", month_header(&grid.month_labels, 0, grid.weeks.len()));
    for (row, day) in week_start.weekdays().into_iter().enumerate() {
        let mut line = format!("{:<DAY_LABEL_WIDTH$}", weekday_label(day));
        for week in &grid.weeks {
            let glyph = week
                .slot(row)
                .map_or(" ", |record| record.sunny_level().glyph(icons));
            line.push_str(glyph);
            line.push(' ');
        }
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out.push('\n');

    let ramp: Vec<_> = SunnyLevel::ALL.iter().map(|l| l.glyph(icons)).collect();
    let _ = write!(out, "Cloudy {} Sunny", ramp.join(" "));
    out
}

pub fn render_json(view: &WeatherView) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        city: &view.city,
        current: view.current.as_ref(),
        days: &view.days,
        grid: &view.grid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::weather::WeatherSnapshot,
        test_support::{date, days_from, sample_snapshot},
    };

    fn view(snapshot: WeatherSnapshot, week_start: WeekStart) -> WeatherView {
        WeatherView::new("Kyiv".to_string(), snapshot, week_start)
    }

    #[test]
    fn ascii_report_lays_out_weekday_rows() {
        let report = render_report(
            &view(sample_snapshot(), WeekStart::Sunday),
            WeekStart::Sunday,
            IconMode::Ascii,
        );
        let lines: Vec<_> = report.lines().collect();
        assert_eq!(lines[0], "SunGraph: Kyiv");
        assert_eq!(lines[1], "Now: 7°C, light rain");
        assert_eq!(lines[4], "    Jan Feb");
        assert_eq!(lines[5], "Sun # #");
        assert_eq!(lines[8], "Wed -");
        assert_eq!(lines.last(), Some(&"Cloudy . : - = + # Sunny"));
    }

    #[test]
    fn monday_start_reorders_rows() {
        let report = render_report(
            &view(sample_snapshot(), WeekStart::Monday),
            WeekStart::Monday,
            IconMode::Ascii,
        );
        let lines: Vec<_> = report.lines().collect();
        assert_eq!(lines[5], "Mon   + -");
        assert_eq!(lines[11], "Sun # #");
    }

    #[test]
    fn missing_current_and_history_have_messages() {
        let report = render_report(
            &view(WeatherSnapshot::default(), WeekStart::Sunday),
            WeekStart::Sunday,
            IconMode::Unicode,
        );
        assert!(report.contains("Now: no current weather data"));
        assert!(report.ends_with(
            "No historical weather data available for Kyiv yet. It will be generated over time."
        ));
    }

    #[test]
    fn json_report_carries_levels_and_labels() {
        let snapshot = WeatherSnapshot {
            current: None,
            days: days_from(date(2024, 3, 1), &[82.0]),
        };
        let json = render_json(&view(snapshot, WeekStart::Sunday)).expect("serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["city"], "Kyiv");
        assert!(value["current"].is_null());
        assert_eq!(value["days"][0]["date"], "2024-03-01");
        assert_eq!(value["days"][0]["sunny_level"], 4);
        assert_eq!(value["grid"]["month_labels"][0]["label"], "Mar");
        assert_eq!(value["grid"]["weeks"][0]["slots"][5]["sunshine_percent"], 82.0);
    }
}
