use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::{api::ApiClient, error::AppError};

mod response;

const CURRENT_WEATHER_PATH: &str = "/weather";
const FORECAST_PATH: &str = "/forecast";
const UNITS: &str = "metric";

/// Latitude/longitude pair as reported by the provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Current conditions for a city, temperatures in Celsius
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeather {
    pub city: String,
    pub country: Option<String>,
    pub temperature: f64,
    pub feels_like: Option<f64>,
    pub temp_max: f64,
    pub temp_min: f64,
    pub humidity: Option<u8>,
    /// Condition group such as "Clear" or "Rain"
    pub condition: String,
    pub description: String,
    pub coordinates: Coordinates,
}

/// One 3-hour slot of the 5 day forecast
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastEntry {
    pub time: DateTime<Utc>,
    pub temperature: f64,
    pub temp_max: f64,
    pub temp_min: f64,
    pub condition: String,
    pub description: String,
}

pub async fn get_current_weather(
    client: &ApiClient,
    city: &str,
) -> Result<CurrentWeather, AppError> {
    info!("Fetching current weather for city: {}", city);
    let raw: response::CurrentWeatherResponse = client
        .get_json(CURRENT_WEATHER_PATH, &city_query(city))
        .await?;
    debug!("Current weather fetched successfully: {:?}", raw);
    CurrentWeather::try_from(raw)
}

pub async fn get_forecast(client: &ApiClient, city: &str) -> Result<Vec<ForecastEntry>, AppError> {
    info!("Fetching forecast for city: {}", city);
    let raw: response::ForecastResponse = client.get_json(FORECAST_PATH, &city_query(city)).await?;
    debug!("Forecast fetched successfully: {} entries", raw.list.len());
    Ok(raw.list.into_iter().map(ForecastEntry::from).collect())
}

fn city_query(city: &str) -> [(&'static str, String); 2] {
    [("q", city.to_string()), ("units", UNITS.to_string())]
}
