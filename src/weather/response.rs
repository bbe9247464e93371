use chrono::{DateTime, Utc};

use super::{Coordinates, CurrentWeather, ForecastEntry};
use crate::error::AppError;

/// Response structure for the OpenWeatherMap current weather endpoint
/// Represents the JSON structure returned by `/data/2.5/weather`
#[derive(serde::Deserialize, Debug)]
pub struct CurrentWeatherResponse {
    /// Resolved city name (e.g. "Paris")
    pub name: String,
    pub coord: Coord,
    pub main: MainReadings,
    /// Condition groups; the first one is the primary condition
    #[serde(default)]
    pub weather: Vec<Condition>,
    #[serde(default)]
    pub sys: Option<Sys>,
}

/// Response structure for the 5 day / 3 hour forecast endpoint
#[derive(serde::Deserialize, Debug)]
pub struct ForecastResponse {
    #[serde(default)]
    pub list: Vec<ForecastItem>,
}

/// A single 3-hour forecast slot
#[derive(serde::Deserialize, Debug)]
pub struct ForecastItem {
    /// Forecast time, unix seconds UTC
    #[serde(with = "chrono::serde::ts_seconds")]
    pub dt: DateTime<Utc>,
    pub main: MainReadings,
    #[serde(default)]
    pub weather: Vec<Condition>,
}

#[derive(serde::Deserialize, Debug)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

/// Temperature block, metric units
#[derive(serde::Deserialize, Debug)]
pub struct MainReadings {
    pub temp: f64,
    #[serde(default)]
    pub feels_like: Option<f64>,
    pub temp_min: f64,
    pub temp_max: f64,
    #[serde(default)]
    pub humidity: Option<u8>,
}

/// Weather condition group
#[derive(serde::Deserialize, Debug)]
pub struct Condition {
    /// Group name (e.g. "Clear", "Rain")
    pub main: String,
    /// Human-readable description (e.g. "light rain")
    pub description: String,
}

#[derive(serde::Deserialize, Debug)]
pub struct Sys {
    #[serde(default)]
    pub country: Option<String>,
}

impl TryFrom<CurrentWeatherResponse> for CurrentWeather {
    type Error = AppError;

    fn try_from(raw: CurrentWeatherResponse) -> Result<Self, Self::Error> {
        let condition = raw
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| AppError::MissingField("weather condition".to_string()))?;

        Ok(CurrentWeather {
            city: raw.name,
            country: raw.sys.and_then(|sys| sys.country),
            temperature: raw.main.temp,
            feels_like: raw.main.feels_like,
            temp_max: raw.main.temp_max,
            temp_min: raw.main.temp_min,
            humidity: raw.main.humidity,
            condition: condition.main,
            description: condition.description,
            coordinates: Coordinates {
                latitude: raw.coord.lat,
                longitude: raw.coord.lon,
            },
        })
    }
}

impl From<ForecastItem> for ForecastEntry {
    fn from(raw: ForecastItem) -> Self {
        // The provider always sends one group; tolerate an empty list rather than
        // dropping the whole forecast.
        let (condition, description) = raw
            .weather
            .into_iter()
            .next()
            .map(|c| (c.main, c.description))
            .unwrap_or_default();

        ForecastEntry {
            time: raw.dt,
            temperature: raw.main.temp,
            temp_max: raw.main.temp_max,
            temp_min: raw.main.temp_min,
            condition,
            description,
        }
    }
}
