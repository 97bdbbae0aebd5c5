use serde::{Serialize, Serializer};

use crate::cli::IconMode;

/// Ordinal sunshine classification used to pick a heatmap shade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SunnyLevel {
    Overcast,
    Cloudy,
    MostlyCloudy,
    PartlyCloudy,
    Sunny,
    VerySunny,
}

// Lower bound (exclusive) of each level, highest first.
const THRESHOLDS: &[(f64, SunnyLevel)] = &[
    (90.0, SunnyLevel::VerySunny),
    (75.0, SunnyLevel::Sunny),
    (50.0, SunnyLevel::PartlyCloudy),
    (25.0, SunnyLevel::MostlyCloudy),
    (10.0, SunnyLevel::Cloudy),
];

impl SunnyLevel {
    pub const ALL: [SunnyLevel; 6] = [
        SunnyLevel::Overcast,
        SunnyLevel::Cloudy,
        SunnyLevel::MostlyCloudy,
        SunnyLevel::PartlyCloudy,
        SunnyLevel::Sunny,
        SunnyLevel::VerySunny,
    ];

    #[must_use]
    pub fn value(self) -> u8 {
        match self {
            SunnyLevel::Overcast => 0,
            SunnyLevel::Cloudy => 1,
            SunnyLevel::MostlyCloudy => 2,
            SunnyLevel::PartlyCloudy => 3,
            SunnyLevel::Sunny => 4,
            SunnyLevel::VerySunny => 5,
        }
    }

    #[must_use]
    pub fn from_value(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value)).copied()
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SunnyLevel::Overcast => "Overcast",
            SunnyLevel::Cloudy => "Cloudy",
            SunnyLevel::MostlyCloudy => "Mostly Cloudy",
            SunnyLevel::PartlyCloudy => "Partly Cloudy",
            SunnyLevel::Sunny => "Sunny",
            SunnyLevel::VerySunny => "Very Sunny",
        }
    }

    /// Single-column shade for text output. Emoji mode shares the unicode
    /// ramp since emoji glyphs are two columns wide.
    #[must_use]
    pub fn glyph(self, mode: IconMode) -> &'static str {
        let idx = usize::from(self.value());
        match mode {
            IconMode::Ascii => [".", ":", "-", "=", "+", "#"][idx],
            IconMode::Unicode | IconMode::Emoji => ["▁", "▂", "▃", "▅", "▆", "█"][idx],
        }
    }
}

impl Serialize for SunnyLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.value())
    }
}

/// Maps a sunshine percentage onto a [`SunnyLevel`].
///
/// Total over `f64`: values are clamped into `0..=100` first and NaN counts as
/// no sunshine, so backend values outside the documented range never fail.
#[must_use]
pub fn classify(sunshine_percent: f64) -> SunnyLevel {
    let percent = if sunshine_percent.is_nan() {
        0.0
    } else {
        sunshine_percent.clamp(0.0, 100.0)
    };

    THRESHOLDS
        .iter()
        .find_map(|(lower, level)| (percent > *lower).then_some(*level))
        .unwrap_or(SunnyLevel::Overcast)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_boundaries() {
        assert_eq!(classify(95.0), SunnyLevel::VerySunny);
        assert_eq!(classify(90.0), SunnyLevel::Sunny);
        assert_eq!(classify(75.0), SunnyLevel::PartlyCloudy);
        assert_eq!(classify(50.5), SunnyLevel::PartlyCloudy);
        assert_eq!(classify(50.0), SunnyLevel::MostlyCloudy);
        assert_eq!(classify(25.0), SunnyLevel::Cloudy);
        assert_eq!(classify(10.0), SunnyLevel::Overcast);
        assert_eq!(classify(0.0), SunnyLevel::Overcast);
    }

    #[test]
    fn out_of_range_values_clamp() {
        assert_eq!(classify(150.0), SunnyLevel::VerySunny);
        assert_eq!(classify(-20.0), SunnyLevel::Overcast);
        assert_eq!(classify(f64::INFINITY), SunnyLevel::VerySunny);
        assert_eq!(classify(f64::NEG_INFINITY), SunnyLevel::Overcast);
        assert_eq!(classify(f64::NAN), SunnyLevel::Overcast);
    }

    #[test]
    fn values_round_trip_through_ordinal() {
        for level in SunnyLevel::ALL {
            assert_eq!(SunnyLevel::from_value(level.value()), Some(level));
        }
        assert_eq!(SunnyLevel::from_value(6), None);
    }

    #[test]
    fn labels_match_legend() {
        let labels: Vec<_> = SunnyLevel::ALL.iter().map(|l| l.label()).collect();
        assert_eq!(
            labels,
            [
                "Overcast",
                "Cloudy",
                "Mostly Cloudy",
                "Partly Cloudy",
                "Sunny",
                "Very Sunny"
            ]
        );
    }

    #[test]
    fn ascii_ramp_is_distinct() {
        let mut glyphs: Vec<_> = SunnyLevel::ALL
            .iter()
            .map(|l| l.glyph(IconMode::Ascii))
            .collect();
        glyphs.dedup();
        assert_eq!(glyphs.len(), 6);
    }

    #[test]
    fn serializes_as_ordinal() {
        let json = serde_json::to_string(&SunnyLevel::Sunny).expect("serialize");
        assert_eq!(json, "4");
    }
}
