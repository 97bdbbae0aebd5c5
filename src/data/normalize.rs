use log::warn;

use super::backend::{BackendResponse, RawCurrent, RawDay};
use crate::domain::weather::{CurrentWeather, DayRecord, WeatherSnapshot, parse_date};

/// Converts a raw backend payload into typed weather data.
///
/// Pure: no I/O and no clock. A missing `current` block is not an error, and
/// history entries whose date does not parse are dropped.
#[must_use]
pub fn normalize(raw: &BackendResponse) -> WeatherSnapshot {
    WeatherSnapshot {
        current: raw.current.as_ref().map(normalize_current),
        days: normalize_history(&raw.history),
    }
}

fn normalize_current(current: &RawCurrent) -> CurrentWeather {
    CurrentWeather {
        temperature_c: current.temp,
        cloud_cover_percent: current.clouds,
        humidity_percent: current.humidity,
        wind_speed_mps: current.wind_speed,
        description: current.description.clone().unwrap_or_default(),
    }
}

fn normalize_history(history: &[RawDay]) -> Vec<DayRecord> {
    let mut out = Vec::with_capacity(history.len());
    for entry in history {
        let Some(date) = parse_date(&entry.date) else {
            warn!("skipping history entry with unparseable date {:?}", entry.date);
            continue;
        };
        out.push(DayRecord::new(date, entry.sunny_percent));
    }
    out
}
