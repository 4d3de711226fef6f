use std::fmt::Display;

use async_trait::async_trait;
use chrono::{Local, TimeZone};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{Error, Result, WeatherRecord, geo};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

const ONECALL_ENDPOINT: &str = "/onecall";
const EXCLUDE: &str = "hourly,daily,minutely";
const UNITS: &str = "imperial";

/// Client for the OpenWeather One Call API.
///
/// Query strings are assembled by hand: arguments keep insertion order, the API key is
/// always appended last, and values are sent without percent-encoding.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            http: Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `[("name", "joe"), ("height", "6ft")]` becomes `?name=joe&height=6ft&appid=KEY`.
    pub fn format_arguments(&self, arguments: &[(&str, String)]) -> String {
        let joined = arguments
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("&");

        format!("?{joined}&appid={}", self.api_key)
    }

    pub fn endpoint_url(&self, endpoint: &str, arguments: &[(&str, String)]) -> String {
        format!("{}{}{}", self.base_url, endpoint, self.format_arguments(arguments))
    }

    /// Issues a GET and returns the body of a 2xx response.
    async fn get(&self, endpoint: &str, arguments: &[(&str, String)]) -> Result<String> {
        let url = self.endpoint_url(endpoint, arguments);
        debug!(endpoint, ?arguments, "Sending OpenWeather request");

        let res = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| Error::Network { endpoint: endpoint.to_string(), source })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|source| Error::Network { endpoint: endpoint.to_string(), source })?;

        if !status.is_success() {
            warn!(endpoint, status = status.as_u16(), "OpenWeather request rejected");
            return Err(Error::HttpStatus {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        Ok(body)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current_weather(&self, city: &str) -> Result<WeatherRecord> {
        let coord = geo::lookup(city).ok_or_else(|| Error::UnknownCity {
            city: city.to_string(),
            known: geo::known_cities().collect::<Vec<_>>().join(", "),
        })?;

        let body = self
            .get(
                ONECALL_ENDPOINT,
                &[
                    ("lat", coord.latitude.to_string()),
                    ("lon", coord.longitude.to_string()),
                    ("exclude", EXCLUDE.to_string()),
                    ("units", UNITS.to_string()),
                ],
            )
            .await?;

        parse_current(city, &body, &Local)
    }
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrent {
    dt: i64,
    temp: f64,
    weather: Vec<OwWeather>,
    pressure: u32,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwOneCallResponse {
    current: OwCurrent,
}

/// Maps a One Call body onto a record, rendering `current.dt` in `tz`.
pub fn parse_current<Tz>(city: &str, body: &str, tz: &Tz) -> Result<WeatherRecord>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let parsed: OwOneCallResponse =
        serde_json::from_str(body).map_err(|e| Error::Parse(e.to_string()))?;
    let current = parsed.current;

    let date = format_observation_date(current.dt, tz)
        .ok_or_else(|| Error::Parse(format!("timestamp {} is out of range", current.dt)))?;

    let description = current
        .weather
        .into_iter()
        .next()
        .map(|w| w.description)
        .ok_or_else(|| Error::Parse("`current.weather` is empty".to_string()))?;

    Ok(WeatherRecord {
        city: city.to_string(),
        date,
        temperature: current.temp,
        description,
        pressure: current.pressure,
        humidity: current.humidity,
    })
}

/// Unix seconds as `MM/DD/YYYY` in the given zone.
pub fn format_observation_date<Tz>(timestamp: i64, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    tz.timestamp_opt(timestamp, 0)
        .single()
        .map(|dt| dt.format("%m/%d/%Y").to_string())
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
