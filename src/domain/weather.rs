use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::sunshine::{SunnyLevel, classify};

mod conditions;
mod conversions;

pub use conditions::{SkyCondition, sky_condition, sky_icon};
pub use conversions::{clamp_percent, parse_date, round_speed, round_temp};

/// One day of history for the heatmap.
///
/// Fields are private so the level can never drift from the percentage it was
/// derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayRecord {
    date: NaiveDate,
    sunshine_percent: f64,
    sunny_level: SunnyLevel,
}

impl DayRecord {
    #[must_use]
    pub fn new(date: NaiveDate, sunshine_percent: f64) -> Self {
        Self {
            date,
            sunshine_percent,
            sunny_level: classify(sunshine_percent),
        }
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn sunshine_percent(&self) -> f64 {
        self.sunshine_percent
    }

    #[must_use]
    pub fn sunny_level(&self) -> SunnyLevel {
        self.sunny_level
    }

    /// Tooltip-style summary, e.g. `Fri, Mar 1, 2024: Sunny (82% sunshine)`.
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "{}: {} ({}% sunshine)",
            self.date.format("%a, %b %-d, %Y"),
            self.sunny_level.label(),
            self.sunshine_percent
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentWeather {
    pub temperature_c: f64,
    pub cloud_cover_percent: f64,
    pub humidity_percent: f64,
    pub wind_speed_mps: f64,
    pub description: String,
}

impl CurrentWeather {
    /// Sunshine shown next to the temperature is the inverse of cloud cover.
    #[must_use]
    pub fn sunshine_percent(&self) -> f64 {
        clamp_percent(100.0 - self.cloud_cover_percent)
    }

    #[must_use]
    pub fn rounded_temp(&self) -> i32 {
        round_temp(self.temperature_c)
    }

    #[must_use]
    pub fn rounded_wind(&self) -> i32 {
        round_speed(self.wind_speed_mps)
    }

    #[must_use]
    pub fn sky(&self) -> SkyCondition {
        sky_condition(Some(self.cloud_cover_percent))
    }
}

/// Normalized result of one backend fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeatherSnapshot {
    pub current: Option<CurrentWeather>,
    pub days: Vec<DayRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}
