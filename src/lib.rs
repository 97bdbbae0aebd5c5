pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod resilience;
pub mod ui;

#[cfg(test)]
mod test_support;

use std::io::{self, Stdout};

use anyhow::{Context, Result};
use app::{
    events::{AppEvent, spawn_input_task},
    settings::{RuntimeSettings, load_runtime_settings},
    state::{AppState, WeatherView},
};
use cli::{Cli, OutputFormat};
use crossterm::{
    event::DisableMouseCapture,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use data::{backend::BackendClient, normalize::normalize};
use futures::StreamExt;
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;

pub async fn run(cli: Cli) -> Result<()> {
    cli.validate()?;

    if cli.list_cities || cli.one_shot {
        let (settings, _) = load_runtime_settings(&cli, !cli.no_persist);
        return if cli.list_cities {
            print_cities(&settings).await
        } else {
            print_report(&cli, &settings).await
        };
    }

    let mut terminal = setup_terminal()?;
    let result = run_inner(&mut terminal, &cli).await;
    restore_terminal(&mut terminal)?;
    result
}

async fn run_inner(terminal: &mut Terminal<CrosstermBackend<Stdout>>, cli: &Cli) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(256);
    let input_stream = spawn_input_task();
    tokio::pin!(input_stream);
    let mut app = AppState::new(cli);
    info!("starting with city {} against {}", app.city, app.settings.api_url);

    tx.send(AppEvent::Bootstrap).await?;

    while app.running {
        tokio::select! {
            maybe_input = input_stream.next() => {
                if let Some(input) = maybe_input {
                    app.handle_event(AppEvent::Input(input), &tx).await?;
                }
            }
            maybe_event = rx.recv() => {
                if let Some(event) = maybe_event {
                    app.handle_event(event, &tx).await?;
                }
            }
        }

        terminal.draw(|frame| ui::render(frame, &app))?;
    }

    Ok(())
}

async fn print_report(cli: &Cli, settings: &RuntimeSettings) -> Result<()> {
    let client = BackendClient::with_base_url(settings.api_url.clone());
    let raw = client
        .fetch_weather(&settings.city)
        .await
        .context(app::state::WEATHER_FETCH_ERROR)?;
    let view = WeatherView::new(settings.city.clone(), normalize(&raw), settings.week_start);

    let output = match cli.output_format() {
        OutputFormat::Text => {
            ui::report::render_report(&view, settings.week_start, settings.icon_mode)
        }
        OutputFormat::Json => ui::report::render_json(&view)?,
    };
    println!("{output}");
    Ok(())
}

async fn print_cities(settings: &RuntimeSettings) -> Result<()> {
    let client = BackendClient::with_base_url(settings.api_url.clone());
    let cities = client
        .fetch_cities()
        .await
        .context(app::state::CITY_LIST_ERROR)?;
    for city in cities {
        println!("{}\t{:.4}\t{:.4}", city.name, city.lat, city.lon);
    }
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn install_panic_hook() {
    let existing = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        existing(panic);
    }));
}
