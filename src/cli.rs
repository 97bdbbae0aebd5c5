#![allow(clippy::missing_errors_doc)]

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::domain::grid::WeekStart;

pub const DEFAULT_CITY: &str = "Kyiv";

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconMode {
    Unicode,
    Ascii,
    Emoji,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum WeekStartArg {
    Sunday,
    Monday,
}

impl From<WeekStartArg> for WeekStart {
    fn from(value: WeekStartArg) -> Self {
        match value {
            WeekStartArg::Sunday => WeekStart::Sunday,
            WeekStartArg::Monday => WeekStart::Monday,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Parser, Clone)]
#[command(
    name = "sun-graph",
    version,
    about = "Activity graph of sunny days for a city"
)]
pub struct Cli {
    /// City name (default: last selected city, then Kyiv)
    pub city: Option<String>,

    /// Weather backend base URL
    #[arg(long)]
    pub api_url: Option<String>,

    /// First day of each heatmap column
    #[arg(long, value_enum)]
    pub week_start: Option<WeekStartArg>,

    /// Force ASCII icons
    #[arg(long, conflicts_with = "emoji_icons")]
    pub ascii_icons: bool,

    /// Force emoji icons
    #[arg(long)]
    pub emoji_icons: bool,

    /// Color output policy
    #[arg(long, value_enum, default_value_t = ColorArg::Auto, conflicts_with = "no_color")]
    pub color: ColorArg,

    /// Alias for --color never
    #[arg(long, conflicts_with = "color")]
    pub no_color: bool,

    /// Print the graph to stdout and exit (non-interactive)
    #[arg(long)]
    pub one_shot: bool,

    /// Output format for --one-shot
    #[arg(long, value_enum, requires = "one_shot")]
    pub format: Option<OutputFormat>,

    /// Print the backend's city list and exit
    #[arg(long, conflicts_with = "one_shot")]
    pub list_cities: bool,

    /// Do not read or write the settings file
    #[arg(long)]
    pub no_persist: bool,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(city) = &self.city
            && city.trim().is_empty()
        {
            anyhow::bail!("city name must not be empty");
        }
        if let Some(url) = &self.api_url
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            anyhow::bail!("--api-url must start with http:// or https://");
        }
        Ok(())
    }

    #[must_use]
    pub fn effective_color_mode(&self) -> ColorArg {
        if self.no_color {
            ColorArg::Never
        } else {
            self.color
        }
    }

    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    #[must_use]
    pub fn icon_mode(&self) -> IconMode {
        if self.ascii_icons {
            IconMode::Ascii
        } else if self.emoji_icons {
            IconMode::Emoji
        } else {
            IconMode::Unicode
        }
    }
}
