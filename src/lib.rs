//! Minimal client for the OpenWeatherMap web API.
//!
//! This crate provides:
//! - Current weather lookup by city id or city name
//! - A bulk city-id → city-name lookup table built from the service's
//!   compressed city listing
//! - A typed error taxonomy so callers can tell transport, HTTP, parse and
//!   missing-field failures apart
//!
//! All operations are single request/parse/extract pipelines with no retries,
//! caching or shared state; concurrency and retry policy belong to the
//! embedding application.
//!
//! ```no_run
//! use weathermap::{UnitMeasurement, WeatherClient};
//!
//! # async fn example() -> Result<(), weathermap::WeatherError> {
//! let client = WeatherClient::new("my-api-key")?;
//! let info = client.current_by_id(2643743, UnitMeasurement::Metric).await?;
//! println!("{}: {:.1}", info.city_name, info.temperature);
//! # Ok(())
//! # }
//! ```

mod cities;
pub mod client;
pub mod error;
pub mod model;

pub use client::WeatherClient;
pub use error::WeatherError;
pub use model::{ForecastInfo, UnitMeasurement, WeatherCondition};
