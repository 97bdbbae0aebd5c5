#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use serde_json::{Value, json};
use sun_graph::{
    app::{settings::RuntimeSettings, state::AppState},
    cli::{ColorArg, IconMode},
    domain::weather::{CurrentWeather, DayRecord, WeatherSnapshot},
};

pub const JAN_FEB_PERCENTS: [f64; 10] = [95.0, 82.0, 60.0, 30.0, 15.0, 5.0, 0.0, 100.0, 50.0, 76.0];

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date fixture")
}

pub fn days_from(start: NaiveDate, percents: &[f64]) -> Vec<DayRecord> {
    percents
        .iter()
        .enumerate()
        .map(|(idx, pct)| DayRecord::new(start + Duration::days(idx as i64), *pct))
        .collect()
}

/// Sunday 2024-01-28 through Tuesday 2024-02-06.
pub fn jan_feb_days() -> Vec<DayRecord> {
    days_from(date(2024, 1, 28), &JAN_FEB_PERCENTS)
}

pub fn kyiv_snapshot() -> WeatherSnapshot {
    WeatherSnapshot {
        current: Some(CurrentWeather {
            temperature_c: 7.2,
            cloud_cover_percent: 75.0,
            humidity_percent: 80.0,
            wind_speed_mps: 4.4,
            description: "light rain".to_string(),
        }),
        days: jan_feb_days(),
    }
}

/// `/weather` body matching [`kyiv_snapshot`], including the bookkeeping
/// fields the backend adds.
pub fn kyiv_weather_body() -> Value {
    let history: Vec<Value> = JAN_FEB_PERCENTS
        .iter()
        .enumerate()
        .map(|(idx, pct)| {
            let day = date(2024, 1, 28) + Duration::days(idx as i64);
            json!({ "date": day.format("%Y-%m-%d").to_string(), "sunny_percent": pct })
        })
        .collect();
    json!({
        "current": {
            "id": 1,
            "city": "Kyiv",
            "temp": 7.2,
            "clouds": 75,
            "humidity": 80,
            "wind_speed": 4.4,
            "description": "light rain",
            "timestamp": 1_706_400_000
        },
        "history": history
    })
}

pub fn cities_body() -> Value {
    json!([
        { "name": "Kyiv", "lat": 50.45, "lon": 30.52 },
        { "name": "Lviv", "lat": 49.84, "lon": 24.03 },
        { "name": "Odesa", "lat": 46.48, "lon": 30.72 }
    ])
}

/// Plain settings for rendering: no color, ASCII glyphs, nothing listening.
pub fn plain_settings() -> RuntimeSettings {
    RuntimeSettings {
        api_url: "http://127.0.0.1:9".to_string(),
        icon_mode: IconMode::Ascii,
        color: ColorArg::Never,
        ..RuntimeSettings::default()
    }
}

pub fn plain_state() -> AppState {
    AppState::with_settings(plain_settings(), None)
}
