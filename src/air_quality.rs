// Module containing response data structures for air pollution readings
mod response;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::{api::ApiClient, error::AppError, weather::Coordinates};

// Path of the OpenWeatherMap air pollution forecast endpoint
const AIR_POLLUTION_FORECAST_PATH: &str = "/air_pollution/forecast";

/// One air-quality reading. `aqi` is kept as the raw provider integer so that
/// out-of-range values still reach the label lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct AirQualitySample {
    pub time: DateTime<Utc>,
    pub aqi: i64,
}

/// Fetches the hourly air-quality forecast for the given coordinates.
///
/// # Arguments
/// * `client` - API client carrying the endpoint root and API key
/// * `coordinates` - Location taken from the current weather response
///
/// # Returns
/// * Readings in provider order
/// * Error if the API request fails or returns an unsuccessful status code
pub async fn get_air_quality_forecast(
    client: &ApiClient,
    coordinates: Coordinates,
) -> Result<Vec<AirQualitySample>, AppError> {
    info!(
        "Fetching air quality for coordinates: {}, {}",
        coordinates.latitude, coordinates.longitude
    );

    let query = [
        ("lat", coordinates.latitude.to_string()),
        ("lon", coordinates.longitude.to_string()),
    ];
    let raw: response::AirPollutionResponse =
        client.get_json(AIR_POLLUTION_FORECAST_PATH, &query).await?;
    debug!("Air quality fetched successfully: {} readings", raw.list.len());

    Ok(raw.list.into_iter().map(AirQualitySample::from).collect())
}
