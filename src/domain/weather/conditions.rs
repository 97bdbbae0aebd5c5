use crate::cli::IconMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkyCondition {
    Clear,
    PartlyCloudy,
    Cloudy,
    Overcast,
    Unknown,
}

const CLOUD_BANDS: &[(f64, SkyCondition)] = &[
    (20.0, SkyCondition::Clear),
    (50.0, SkyCondition::PartlyCloudy),
    (80.0, SkyCondition::Cloudy),
];

#[must_use]
pub fn sky_condition(cloud_cover_percent: Option<f64>) -> SkyCondition {
    let Some(clouds) = cloud_cover_percent else {
        return SkyCondition::Unknown;
    };
    if clouds.is_nan() {
        return SkyCondition::Unknown;
    }
    CLOUD_BANDS
        .iter()
        .find_map(|(upper, condition)| (clouds < *upper).then_some(*condition))
        .unwrap_or(SkyCondition::Overcast)
}

#[must_use]
pub fn sky_icon(condition: SkyCondition, mode: IconMode) -> &'static str {
    let (ascii, emoji, unicode) = icon_tokens(condition);
    match mode {
        IconMode::Ascii => ascii,
        IconMode::Emoji => emoji,
        IconMode::Unicode => unicode,
    }
}

fn icon_tokens(condition: SkyCondition) -> (&'static str, &'static str, &'static str) {
    match condition {
        SkyCondition::Clear => ("SUN", "☀️", "☀"),
        SkyCondition::PartlyCloudy => ("PCL", "⛅", "⛅"),
        SkyCondition::Cloudy => ("CLD", "☁️", "☁"),
        SkyCondition::Overcast => ("OVC", "🌧️", "☂"),
        SkyCondition::Unknown => ("---", "☁️", "☁"),
    }
}
