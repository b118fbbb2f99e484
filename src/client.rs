use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::cities;
use crate::error::WeatherError;
use crate::model::{ForecastInfo, UnitMeasurement, WeatherCondition};

const DEFAULT_BASE_URL: &str = "http://api.openweathermap.org";
const DEFAULT_BULK_URL: &str = "http://bulk.openweathermap.org/sample/city.list.json.gz";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the OpenWeatherMap current-weather and bulk-listing endpoints.
///
/// Stateless apart from the underlying connection pool; a single instance
/// can be shared and calls issued concurrently.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    api_key: String,
    base_url: String,
    bulk_url: String,
}

/// Discriminator for the current-weather lookup: filter by city id or name.
#[derive(Clone, Copy)]
enum CityQuery<'a> {
    Id(i64),
    Name(&'a str),
}

impl WeatherClient {
    /// Create a client with the given API key and the default request timeout.
    pub fn new(api_key: impl Into<String>) -> Result<Self, WeatherError> {
        Self::with_timeout(api_key, DEFAULT_TIMEOUT)
    }

    /// Create a client with a caller-supplied request timeout. The timeout
    /// covers the whole request, including reading the response body.
    pub fn with_timeout(
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, WeatherError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            bulk_url: DEFAULT_BULK_URL.to_string(),
        })
    }

    /// Override the weather API base URL. Used by tests to point the client
    /// at a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the bulk city-list download URL.
    pub fn with_bulk_url(mut self, bulk_url: impl Into<String>) -> Self {
        self.bulk_url = bulk_url.into();
        self
    }

    /// Get current weather for a city by its OpenWeatherMap city id.
    ///
    /// The returned [`ForecastInfo`] echoes `city_id` and takes the city
    /// name from the response.
    pub async fn current_by_id(
        &self,
        city_id: i64,
        unit: UnitMeasurement,
    ) -> Result<ForecastInfo, WeatherError> {
        self.current(CityQuery::Id(city_id), unit).await
    }

    /// Get current weather for a city by name (e.g. `"London"` or
    /// `"New York"`). The name is query-encoded before being sent.
    ///
    /// The returned [`ForecastInfo`] echoes `city_name` and takes the city
    /// id from the response.
    pub async fn current_by_name(
        &self,
        city_name: &str,
        unit: UnitMeasurement,
    ) -> Result<ForecastInfo, WeatherError> {
        self.current(CityQuery::Name(city_name), unit).await
    }

    /// Download the bulk city listing and build a city-id → city-name table.
    ///
    /// The payload is a gzip-compressed JSON array covering every city the
    /// service knows; it is decompressed and parsed fully in memory. For a
    /// duplicated id the first entry wins; entries lacking an id or name are
    /// skipped with a warning.
    pub async fn list_cities(&self) -> Result<HashMap<i64, String>, WeatherError> {
        tracing::debug!(url = %self.bulk_url, "downloading bulk city list");

        let res = self.http.get(&self.bulk_url).send().await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await?;
            return Err(WeatherError::HttpStatus { status, body });
        }

        let payload = res.bytes().await?;
        let json = cities::decompress(&payload)?;
        cities::parse_city_list(&json)
    }

    /// Shared pipeline for both current-weather lookups: one GET, one JSON
    /// parse, one field-extraction pass.
    async fn current(
        &self,
        query: CityQuery<'_>,
        unit: UnitMeasurement,
    ) -> Result<ForecastInfo, WeatherError> {
        let url = format!("{}/data/2.5/weather", self.base_url);
        tracing::debug!(%url, %unit, "requesting current weather");

        let request = self
            .http
            .get(&url)
            .query(&[("appid", self.api_key.as_str()), ("units", unit.as_query_value())]);
        let request = match query {
            CityQuery::Id(id) => request.query(&[("id", id.to_string())]),
            CityQuery::Name(name) => request.query(&[("q", name)]),
        };

        let res = request.send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(WeatherError::HttpStatus { status, body });
        }

        let parsed: CurrentResponse = serde_json::from_str(&body)?;

        let (city_id, city_name) = match query {
            CityQuery::Id(id) => {
                let name = parsed.name.ok_or(WeatherError::MissingField("name"))?;
                (id, name)
            }
            CityQuery::Name(name) => {
                let id = parsed.id.ok_or(WeatherError::MissingField("id"))?;
                (id, name.to_string())
            }
        };

        let condition_code = parsed
            .weather
            .as_deref()
            .and_then(|entries| entries.first())
            .and_then(|entry| entry.id)
            .ok_or(WeatherError::MissingField("weather[0].id"))?;

        let main = parsed.main.ok_or(WeatherError::MissingField("main"))?;
        let wind = parsed.wind.ok_or(WeatherError::MissingField("wind"))?;

        Ok(ForecastInfo {
            city_id,
            city_name,
            weather: WeatherCondition::from_code(condition_code),
            temperature: main.temp.ok_or(WeatherError::MissingField("main.temp"))?,
            feels_like: main.feels_like.ok_or(WeatherError::MissingField("main.feels_like"))?,
            pressure: main.pressure.ok_or(WeatherError::MissingField("main.pressure"))?,
            humidity: main.humidity.ok_or(WeatherError::MissingField("main.humidity"))?,
            wind_speed: wind.speed.ok_or(WeatherError::MissingField("wind.speed"))?,
            wind_direction: wind.deg.ok_or(WeatherError::MissingField("wind.deg"))?,
            units: unit,
        })
    }
}

// Raw response shapes for the `/data/2.5/weather` endpoint. Leaves are
// optional so an absent key surfaces as `MissingField` instead of a
// deserialization failure.

#[derive(Debug, Deserialize)]
struct ConditionEntry {
    id: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct MainFields {
    temp: Option<f64>,
    feels_like: Option<f64>,
    pressure: Option<f64>,
    humidity: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct WindFields {
    speed: Option<f64>,
    deg: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    weather: Option<Vec<ConditionEntry>>,
    main: Option<MainFields>,
    wind: Option<WindFields>,
    name: Option<String>,
    id: Option<i64>,
}
