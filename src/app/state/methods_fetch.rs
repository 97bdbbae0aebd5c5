use super::*;

impl AppState {
    /// Issues a new request token for the current city and fetches it in the
    /// background. Results of older tokens are ignored on arrival.
    pub(crate) fn fetch_current_city(&mut self, tx: &mpsc::Sender<AppEvent>) -> RequestToken {
        let token = self.requests.issue();
        self.view = ViewState::Loading;

        let client = self.client.clone();
        let city = self.city.clone();
        let tx2 = tx.clone();
        tokio::spawn(async move {
            let result = match client.fetch_weather(&city).await {
                Ok(raw) => Ok(normalize(&raw)),
                Err(err) => {
                    warn!("weather fetch for {city} failed: {:#}", anyhow::Error::from(err));
                    Err(WEATHER_FETCH_ERROR.to_string())
                }
            };
            let _ = tx2
                .send(AppEvent::WeatherLoaded {
                    token,
                    city,
                    result,
                })
                .await;
        });

        token
    }

    pub(crate) fn fetch_cities(&mut self, tx: &mpsc::Sender<AppEvent>) {
        let client = self.client.clone();
        let tx2 = tx.clone();
        tokio::spawn(async move {
            let result = client.fetch_cities().await.map_err(|err| {
                warn!("city list fetch failed: {:#}", anyhow::Error::from(err));
                CITY_LIST_ERROR.to_string()
            });
            let _ = tx2.send(AppEvent::CitiesLoaded(result)).await;
        });
    }
}
