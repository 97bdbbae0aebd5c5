use chrono::{Duration, NaiveDate};

use crate::{
    app::settings::RuntimeSettings,
    domain::weather::{CurrentWeather, DayRecord, WeatherSnapshot},
};

// Nothing listens here, so spawned fetches fail fast.
pub(crate) const UNREACHABLE_API: &str = "http://127.0.0.1:9";

pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date fixture")
}

pub(crate) fn days_from(start: NaiveDate, percents: &[f64]) -> Vec<DayRecord> {
    percents
        .iter()
        .enumerate()
        .map(|(idx, pct)| DayRecord::new(start + Duration::days(idx as i64), *pct))
        .collect()
}

/// Sunday 2024-01-28 through Tuesday 2024-02-06.
pub(crate) fn jan_feb_days() -> Vec<DayRecord> {
    days_from(
        date(2024, 1, 28),
        &[95.0, 82.0, 60.0, 30.0, 15.0, 5.0, 0.0, 100.0, 50.0, 76.0],
    )
}

pub(crate) fn sample_current() -> CurrentWeather {
    CurrentWeather {
        temperature_c: 7.2,
        cloud_cover_percent: 75.0,
        humidity_percent: 80.0,
        wind_speed_mps: 4.4,
        description: "light rain".to_string(),
    }
}

pub(crate) fn sample_snapshot() -> WeatherSnapshot {
    WeatherSnapshot {
        current: Some(sample_current()),
        days: jan_feb_days(),
    }
}

pub(crate) fn offline_settings() -> RuntimeSettings {
    RuntimeSettings {
        api_url: UNREACHABLE_API.to_string(),
        ..RuntimeSettings::default()
    }
}
