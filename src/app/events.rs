use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use tokio::{sync::mpsc::Sender, time::sleep};

use crate::{
    app::request::RequestToken,
    domain::weather::{City, WeatherSnapshot},
    resilience::backoff::with_jitter,
};

#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    Input(Event),
    CitiesLoaded(Result<Vec<City>, String>),
    WeatherLoaded {
        token: RequestToken,
        city: String,
        result: Result<WeatherSnapshot, String>,
    },
    RetryFetch(RequestToken),
    Quit,
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}

pub fn schedule_retry(tx: Sender<AppEvent>, delay: Duration, token: RequestToken) {
    let delay = with_jitter(delay, &mut rand::rng());
    tokio::spawn(async move {
        sleep(delay).await;
        let _ = tx.send(AppEvent::RetryFetch(token)).await;
    });
}
