use std::path::PathBuf;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, warn};
use tokio::sync::mpsc;

use crate::{
    app::{
        events::{AppEvent, schedule_retry},
        request::{RequestToken, RequestTracker},
        settings::{RuntimeSettings, load_runtime_settings, save_runtime_settings},
    },
    cli::Cli,
    data::{backend::BackendClient, normalize::normalize},
    domain::{
        grid::{CalendarGrid, WeekStart, build_grid_with},
        weather::{City, CurrentWeather, DayRecord, WeatherSnapshot},
    },
    resilience::backoff::Backoff,
};

mod input;
mod methods_fetch;

pub const WEATHER_FETCH_ERROR: &str = "Failed to fetch weather data from backend";
pub const CITY_LIST_ERROR: &str = "Could not load city list.";

/// What the main panel shows. Exactly one state is active at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Failed(String),
    Ready(WeatherView),
}

/// A successful fetch together with the grid derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherView {
    pub city: String,
    pub current: Option<CurrentWeather>,
    pub days: Vec<DayRecord>,
    pub grid: CalendarGrid,
}

impl WeatherView {
    #[must_use]
    pub fn new(city: String, snapshot: WeatherSnapshot, week_start: WeekStart) -> Self {
        let grid = build_grid_with(&snapshot.days, week_start);
        Self {
            city,
            current: snapshot.current,
            days: snapshot.days,
            grid,
        }
    }

    pub fn rebuild_grid(&mut self, week_start: WeekStart) {
        self.grid = build_grid_with(&self.days, week_start);
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CityPicker {
    pub open: bool,
    pub selected: usize,
}

#[derive(Debug)]
pub struct AppState {
    pub running: bool,
    pub view: ViewState,
    pub city: String,
    pub cities: Vec<City>,
    pub city_status: Option<String>,
    pub picker: CityPicker,
    pub settings: RuntimeSettings,
    pub settings_path: Option<PathBuf>,
    pub requests: RequestTracker,
    pub backoff: Backoff,
    client: BackendClient,
}

impl AppState {
    #[must_use]
    pub fn new(cli: &Cli) -> Self {
        let (settings, settings_path) = load_runtime_settings(cli, !cli.no_persist);
        Self::with_settings(settings, settings_path)
    }

    #[must_use]
    pub fn with_settings(settings: RuntimeSettings, settings_path: Option<PathBuf>) -> Self {
        Self {
            running: true,
            view: ViewState::Loading,
            city: settings.city.clone(),
            cities: Vec::new(),
            city_status: None,
            picker: CityPicker::default(),
            client: BackendClient::with_base_url(settings.api_url.clone()),
            settings,
            settings_path,
            requests: RequestTracker::default(),
            backoff: Backoff::for_weather_fetch(),
        }
    }

    #[must_use]
    pub fn weather(&self) -> Option<&WeatherView> {
        match &self.view {
            ViewState::Ready(view) => Some(view),
            ViewState::Loading | ViewState::Failed(_) => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.view, ViewState::Loading)
    }

    pub async fn handle_event(&mut self, event: AppEvent, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        match event {
            AppEvent::Bootstrap => self.handle_bootstrap(tx),
            AppEvent::Input(input) => self.handle_input(input, tx).await?,
            AppEvent::CitiesLoaded(result) => self.handle_cities_loaded(result),
            AppEvent::WeatherLoaded {
                token,
                city,
                result,
            } => self.handle_weather_loaded(tx, token, city, result),
            AppEvent::RetryFetch(token) => self.handle_retry(tx, token),
            AppEvent::Quit => self.running = false,
        }
        Ok(())
    }

    pub(crate) fn handle_bootstrap(&mut self, tx: &mpsc::Sender<AppEvent>) {
        self.fetch_cities(tx);
        self.fetch_current_city(tx);
    }

    pub(crate) fn handle_cities_loaded(&mut self, result: Result<Vec<City>, String>) {
        match result {
            Ok(cities) => {
                self.cities = cities;
                self.city_status = None;
                self.picker.selected = self.current_city_index().unwrap_or(0);
            }
            Err(message) => {
                self.cities.clear();
                self.city_status = Some(message);
            }
        }
    }

    /// Applies a fetch result if it belongs to the newest request.
    pub(crate) fn handle_weather_loaded(
        &mut self,
        tx: &mpsc::Sender<AppEvent>,
        token: RequestToken,
        city: String,
        result: Result<WeatherSnapshot, String>,
    ) {
        if !self.requests.is_latest(token) {
            debug!("discarding stale weather result for {city} ({token:?})");
            return;
        }

        match result {
            Ok(snapshot) => {
                self.view =
                    ViewState::Ready(WeatherView::new(city, snapshot, self.settings.week_start));
                self.backoff.reset();
            }
            Err(message) => {
                self.view = ViewState::Failed(message);
                let delay = self.backoff.next_delay();
                debug!("retrying {city} in about {delay:?}");
                schedule_retry(tx.clone(), delay, token);
            }
        }
    }

    pub(crate) fn handle_retry(&mut self, tx: &mpsc::Sender<AppEvent>, token: RequestToken) {
        if self.requests.is_latest(token) && matches!(self.view, ViewState::Failed(_)) {
            self.fetch_current_city(tx);
        }
    }

    /// Switches to `city` and starts a fetch that supersedes any in flight.
    pub fn select_city(&mut self, tx: &mpsc::Sender<AppEvent>, city: &str) {
        let city = city.trim();
        if city.is_empty() {
            return;
        }
        self.city = city.to_string();
        self.settings.city = self.city.clone();
        self.backoff.reset();
        self.persist_settings();
        self.fetch_current_city(tx);
    }

    pub fn toggle_week_start(&mut self) {
        self.settings.week_start = self.settings.week_start.toggled();
        let week_start = self.settings.week_start;
        if let ViewState::Ready(view) = &mut self.view {
            view.rebuild_grid(week_start);
        }
        self.persist_settings();
    }

    pub(crate) fn current_city_index(&self) -> Option<usize> {
        self.cities
            .iter()
            .position(|c| c.name.eq_ignore_ascii_case(&self.city))
    }

    pub(crate) fn persist_settings(&self) {
        let Some(path) = self.settings_path.as_ref() else {
            return;
        };
        if let Err(err) = save_runtime_settings(path, &self.settings) {
            warn!("{err:#}");
        }
    }

    async fn handle_input(&mut self, event: Event, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        let Event::Key(key) = event else {
            return Ok(());
        };
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }
        if self.picker.open {
            self.handle_picker_key(key, tx);
            return Ok(());
        }
        self.handle_main_key(key, tx).await
    }

    async fn handle_main_key(&mut self, key: KeyEvent, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            tx.send(AppEvent::Quit).await?;
            return Ok(());
        }
        match input::main_command(key) {
            Some(input::MainCommand::Quit) => tx.send(AppEvent::Quit).await?,
            Some(input::MainCommand::OpenPicker) => self.open_picker(),
            Some(input::MainCommand::Refresh) => {
                self.fetch_current_city(tx);
            }
            Some(input::MainCommand::ToggleWeekStart) => self.toggle_week_start(),
            None => {}
        }
        Ok(())
    }
}
