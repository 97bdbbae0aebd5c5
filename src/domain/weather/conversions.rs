use chrono::NaiveDate;

#[must_use]
pub fn round_temp(value: f64) -> i32 {
    value.round() as i32
}

#[must_use]
pub fn round_speed(value: f64) -> i32 {
    value.round() as i32
}

#[must_use]
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

/// Parses a backend `YYYY-MM-DD` date. Time of day never enters the picture,
/// so weekday bucketing cannot shift with the local timezone.
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}
