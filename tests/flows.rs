mod common;

use std::time::Duration;

use clap::Parser;
use common::{cities_body, kyiv_weather_body};
use sun_graph::{
    app::{
        events::AppEvent,
        state::{AppState, ViewState, WEATHER_FETCH_ERROR},
    },
    cli::Cli,
};
use tokio::{
    sync::mpsc::{self, Receiver, Sender},
    time::timeout,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn cli_for(server: &MockServer) -> Cli {
    let uri = server.uri();
    Cli::parse_from(["sun-graph", "Kyiv", "--api-url", uri.as_str(), "--no-persist"])
}

async fn mount_cities(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/cities"))
        .respond_with(ResponseTemplate::new(200).set_body_json(cities_body()))
        .mount(server)
        .await;
}

/// Feeds `count` background events back into the state.
async fn pump(
    state: &mut AppState,
    tx: &Sender<AppEvent>,
    rx: &mut Receiver<AppEvent>,
    count: usize,
) {
    for _ in 0..count {
        let event = timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("event before timeout")
            .expect("channel open");
        state.handle_event(event, tx).await.expect("handle event");
    }
}

#[tokio::test]
async fn bootstrap_loads_cities_and_weather() {
    let server = MockServer::start().await;
    mount_cities(&server).await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("city", "Kyiv"))
        .respond_with(ResponseTemplate::new(200).set_body_json(kyiv_weather_body()))
        .mount(&server)
        .await;

    let mut state = AppState::new(&cli_for(&server));
    let (tx, mut rx) = mpsc::channel(16);
    state
        .handle_event(AppEvent::Bootstrap, &tx)
        .await
        .expect("bootstrap");
    assert!(state.is_loading());

    pump(&mut state, &tx, &mut rx, 2).await;

    assert_eq!(state.cities.len(), 3);
    assert_eq!(state.picker.selected, 0);
    let view = state.weather().expect("weather ready");
    assert_eq!(view.city, "Kyiv");
    assert_eq!(view.grid.weeks.len(), 2);
    assert_eq!(view.grid.month_labels.len(), 2);
}

#[tokio::test]
async fn backend_failure_shows_error_and_schedules_retry() {
    let server = MockServer::start().await;
    mount_cities(&server).await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let mut state = AppState::new(&cli_for(&server));
    let (tx, mut rx) = mpsc::channel(16);
    state
        .handle_event(AppEvent::Bootstrap, &tx)
        .await
        .expect("bootstrap");
    pump(&mut state, &tx, &mut rx, 2).await;

    assert_eq!(state.view, ViewState::Failed(WEATHER_FETCH_ERROR.to_string()));
    assert_eq!(state.backoff.attempts(), 1);
}

#[tokio::test]
async fn slow_response_for_previous_city_is_discarded() {
    let server = MockServer::start().await;
    mount_cities(&server).await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("city", "Kyiv"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(kyiv_weather_body())
                .set_delay(Duration::from_millis(400)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("city", "Lviv"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "current": null,
            "history": [{ "date": "2024-03-01", "sunny_percent": 82 }]
        })))
        .mount(&server)
        .await;

    let mut state = AppState::new(&cli_for(&server));
    let (tx, mut rx) = mpsc::channel(16);
    state
        .handle_event(AppEvent::Bootstrap, &tx)
        .await
        .expect("bootstrap");
    state.select_city(&tx, "Lviv");

    // City list, the Lviv result, then the late Kyiv result.
    pump(&mut state, &tx, &mut rx, 3).await;

    let view = state.weather().expect("weather ready");
    assert_eq!(view.city, "Lviv");
    assert!(view.current.is_none());
    assert_eq!(view.days.len(), 1);
    assert_eq!(state.city, "Lviv");
}
