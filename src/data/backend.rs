use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::weather::City;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request to {endpoint} failed")]
    Request {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{endpoint} returned status {status}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
    },
    #[error("failed to decode {endpoint} payload")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

/// Raw `/weather` payload. Extra fields the backend sends (`id`, `city`,
/// `timestamp`) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BackendResponse {
    #[serde(default)]
    pub current: Option<RawCurrent>,
    #[serde(default)]
    pub history: Vec<RawDay>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCurrent {
    pub temp: f64,
    pub clouds: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawDay {
    pub date: String,
    pub sunny_percent: f64,
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl Default for BackendClient {
    fn default() -> Self {
        Self::new()
    }
}

impl BackendClient {
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_weather(&self, city: &str) -> Result<BackendResponse, BackendError> {
        self.get_json("weather", &[("city", city)]).await
    }

    pub async fn fetch_cities(&self) -> Result<Vec<City>, BackendError> {
        self.get_json("cities", &[]).await
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        endpoint: &'static str,
        query: &[(&str, &str)],
    ) -> Result<T, BackendError> {
        let url = format!("{}/{endpoint}", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|source| BackendError::Request { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status { endpoint, status });
        }

        response
            .json()
            .await
            .map_err(|source| BackendError::Decode { endpoint, source })
    }
}
