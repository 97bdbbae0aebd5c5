use ratatui::style::Color;

use crate::{cli::ColorArg, domain::sunshine::SunnyLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCapability {
    TrueColor,
    Xterm256,
    Basic16,
    Monochrome,
}

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub text: Color,
    pub muted_text: Color,
    pub accent: Color,
    pub border: Color,
    pub danger: Color,
    pub skeleton: Color,
    pub capability: ColorCapability,
}

// Overcast grey through warm yellow.
const SUNNY_RGB: [(u8, u8, u8); 6] = [
    (72, 78, 92),
    (120, 104, 64),
    (168, 128, 48),
    (212, 156, 40),
    (240, 186, 36),
    (255, 214, 10),
];

const SUNNY_BASIC: [Color; 6] = [
    Color::DarkGray,
    Color::Gray,
    Color::Yellow,
    Color::Yellow,
    Color::LightYellow,
    Color::LightYellow,
];

#[must_use]
pub fn detect_color_capability(mode: ColorArg) -> ColorCapability {
    match mode {
        ColorArg::Never => return ColorCapability::Monochrome,
        ColorArg::Always => return ColorCapability::TrueColor,
        ColorArg::Auto => {}
    }
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorCapability::Monochrome;
    }

    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_lowercase();
    if colorterm.contains("truecolor") || colorterm.contains("24bit") {
        return ColorCapability::TrueColor;
    }

    let term = std::env::var("TERM").unwrap_or_default().to_lowercase();
    if term.contains("256color") {
        ColorCapability::Xterm256
    } else {
        ColorCapability::Basic16
    }
}

#[must_use]
pub fn theme_for(capability: ColorCapability) -> Theme {
    if capability == ColorCapability::Monochrome {
        return Theme {
            text: Color::Reset,
            muted_text: Color::Reset,
            accent: Color::Reset,
            border: Color::Reset,
            danger: Color::Reset,
            skeleton: Color::Reset,
            capability,
        };
    }
    Theme {
        text: quantize(Color::Rgb(230, 232, 238), capability),
        muted_text: quantize(Color::Rgb(140, 146, 160), capability),
        accent: quantize(Color::Rgb(255, 186, 36), capability),
        border: quantize(Color::Rgb(92, 100, 118), capability),
        danger: quantize(Color::Rgb(236, 96, 96), capability),
        skeleton: quantize(Color::Rgb(58, 62, 72), capability),
        capability,
    }
}

/// Heatmap swatch color, or `None` when color is off and the glyph ramp has
/// to carry the level instead.
#[must_use]
pub fn level_color(level: SunnyLevel, capability: ColorCapability) -> Option<Color> {
    let idx = usize::from(level.value());
    match capability {
        ColorCapability::Monochrome => None,
        ColorCapability::Basic16 => Some(SUNNY_BASIC[idx]),
        ColorCapability::TrueColor | ColorCapability::Xterm256 => {
            let (r, g, b) = SUNNY_RGB[idx];
            Some(quantize(Color::Rgb(r, g, b), capability))
        }
    }
}

#[must_use]
pub fn quantize(color: Color, capability: ColorCapability) -> Color {
    match (capability, color) {
        (ColorCapability::Xterm256, Color::Rgb(r, g, b)) => {
            let to_cube = |v: u8| -> u8 { ((f32::from(v) / 255.0) * 5.0).round() as u8 };
            Color::Indexed(16 + 36 * to_cube(r) + 6 * to_cube(g) + to_cube(b))
        }
        (ColorCapability::Basic16, Color::Rgb(r, g, b)) => basic16_from_rgb(r, g, b),
        (ColorCapability::Monochrome, _) => Color::Reset,
        (_, c) => c,
    }
}

fn basic16_from_rgb(r: u8, g: u8, b: u8) -> Color {
    let brightness = (u16::from(r) + u16::from(g) + u16::from(b)) / 3;
    if r > 180 && g > 140 && b < 120 {
        return Color::Yellow;
    }
    if r > 180 && g < 140 {
        return Color::LightRed;
    }
    match brightness {
        0..=80 => Color::DarkGray,
        81..=170 => Color::Gray,
        _ => Color::White,
    }
}
