use serde::Serialize;

/// Unit system for outgoing requests. Selects Celsius + m/s (`Metric`)
/// or Fahrenheit + mph (`Imperial`) for the numeric fields of the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitMeasurement {
    #[default]
    Metric,
    Imperial,
}

impl UnitMeasurement {
    /// Value of the `units=` query parameter sent to the API.
    pub fn as_query_value(&self) -> &'static str {
        match self {
            UnitMeasurement::Metric => "metric",
            UnitMeasurement::Imperial => "imperial",
        }
    }
}

impl std::fmt::Display for UnitMeasurement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_query_value())
    }
}

/// Weather condition categories mapped from OpenWeatherMap condition codes.
/// See: https://openweathermap.org/weather-conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Mist,
    Smoke,
    Haze,
    Dust,
    Fog,
    Sand,
    Ash,
    Squall,
    Tornado,
    Clear,
    Clouds,
    /// Condition code outside the documented taxonomy.
    Unknown,
}

impl WeatherCondition {
    /// Convert an OpenWeatherMap condition code to a `WeatherCondition`.
    ///
    /// Codes absent from the documented taxonomy map to [`Self::Unknown`]
    /// rather than failing the lookup.
    pub fn from_code(code: i64) -> Self {
        match code {
            200..=299 => Self::Thunderstorm,
            300..=399 => Self::Drizzle,
            500..=599 => Self::Rain,
            600..=699 => Self::Snow,
            701 => Self::Mist,
            711 => Self::Smoke,
            721 => Self::Haze,
            731 | 761 => Self::Dust,
            741 => Self::Fog,
            751 => Self::Sand,
            762 => Self::Ash,
            771 => Self::Squall,
            781 => Self::Tornado,
            800 => Self::Clear,
            801..=804 => Self::Clouds,
            _ => Self::Unknown,
        }
    }

    /// Human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Thunderstorm => "Thunderstorm",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Mist => "Mist",
            Self::Smoke => "Smoke",
            Self::Haze => "Haze",
            Self::Dust => "Dust",
            Self::Fog => "Fog",
            Self::Sand => "Sand",
            Self::Ash => "Volcanic Ash",
            Self::Squall => "Squall",
            Self::Tornado => "Tornado",
            Self::Clear => "Clear",
            Self::Clouds => "Clouds",
            Self::Unknown => "Unknown",
        }
    }
}

/// One current-weather observation, as returned by the lookup operations.
///
/// `city_id` and `city_name` are both always populated: one is echoed from
/// the lookup argument, the other is taken from the response body.
/// Numeric fields are expressed in the units selected by `units`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastInfo {
    pub city_id: i64,
    pub city_name: String,
    pub weather: WeatherCondition,
    pub temperature: f64,
    pub feels_like: f64,
    pub pressure: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub wind_direction: f64,
    pub units: UnitMeasurement,
}
