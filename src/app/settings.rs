use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::{
    cli::{Cli, ColorArg, DEFAULT_CITY, IconMode},
    data::backend::DEFAULT_API_URL,
    domain::grid::WeekStart,
};

/// What is written to `settings.json`. Every field is optional so older or
/// hand-edited files still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavedSettings {
    pub last_city: Option<String>,
    pub api_url: Option<String>,
    pub week_start: Option<WeekStart>,
}

/// Effective settings after layering CLI flags over the saved file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeSettings {
    pub city: String,
    pub api_url: String,
    pub week_start: WeekStart,
    pub icon_mode: IconMode,
    pub color: ColorArg,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            city: DEFAULT_CITY.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            week_start: WeekStart::default(),
            icon_mode: IconMode::Unicode,
            color: ColorArg::Auto,
        }
    }
}

impl RuntimeSettings {
    #[must_use]
    pub fn from_cli_defaults(cli: &Cli) -> Self {
        Self::layered(cli, &SavedSettings::default())
    }

    /// CLI values win over saved ones, saved ones win over defaults.
    #[must_use]
    pub fn layered(cli: &Cli, saved: &SavedSettings) -> Self {
        let defaults = Self::default();
        Self {
            city: cli
                .city
                .clone()
                .or_else(|| saved.last_city.clone())
                .unwrap_or(defaults.city),
            api_url: cli
                .api_url
                .clone()
                .or_else(|| saved.api_url.clone())
                .unwrap_or(defaults.api_url),
            week_start: cli
                .week_start
                .map(WeekStart::from)
                .or(saved.week_start)
                .unwrap_or(defaults.week_start),
            icon_mode: cli.icon_mode(),
            color: cli.effective_color_mode(),
        }
    }

    #[must_use]
    pub fn to_saved(&self) -> SavedSettings {
        SavedSettings {
            last_city: Some(self.city.clone()),
            api_url: (self.api_url != DEFAULT_API_URL).then(|| self.api_url.clone()),
            week_start: Some(self.week_start),
        }
    }
}

pub fn load_runtime_settings(cli: &Cli, enable_disk: bool) -> (RuntimeSettings, Option<PathBuf>) {
    if !enable_disk {
        return (RuntimeSettings::from_cli_defaults(cli), None);
    }

    let Some(path) = settings_path() else {
        return (RuntimeSettings::from_cli_defaults(cli), None);
    };

    let settings = load_from_path(cli, &path);
    (settings, Some(path))
}

/// Reads `path` and layers `cli` over it. Missing or corrupt files fall back to
/// CLI defaults.
#[must_use]
pub fn load_from_path(cli: &Cli, path: &Path) -> RuntimeSettings {
    let saved = match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str::<SavedSettings>(&content).unwrap_or_else(|err| {
            warn!("ignoring unreadable settings file {}: {err}", path.display());
            SavedSettings::default()
        }),
        Err(_) => SavedSettings::default(),
    };
    RuntimeSettings::layered(cli, &saved)
}

pub fn save_runtime_settings(path: &Path, settings: &RuntimeSettings) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("creating settings directory failed")?;
    }
    let payload = serde_json::to_string_pretty(&settings.to_saved())
        .context("serializing settings payload failed")?;
    fs::write(path, payload).context("writing settings file failed")
}

fn settings_path() -> Option<PathBuf> {
    if let Some(base) = std::env::var_os("SUN_GRAPH_CONFIG_DIR") {
        return Some(PathBuf::from(base).join("settings.json"));
    }

    let home = std::env::var_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("sun-graph")
            .join("settings.json"),
    )
}
