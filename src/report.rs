use std::future::Future;

use tracing::info;

use crate::{
    air_quality::{self, AirQualitySample},
    api::ApiClient,
    error::AppError,
    weather::{self, CurrentWeather, ForecastEntry},
};

/// Everything shown for one city. Built only when all three provider calls
/// succeeded, so a report is never partial.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub current: CurrentWeather,
    /// Full 3-hour forecast series as returned by the provider
    pub forecast: Vec<ForecastEntry>,
    /// Hourly air-quality readings as returned by the provider
    pub air_quality: Vec<AirQualitySample>,
}

/// Something that can produce a [`WeatherReport`] for a city name.
pub trait WeatherSource {
    fn fetch_report(
        &self,
        city: &str,
    ) -> impl Future<Output = Result<WeatherReport, AppError>> + Send;
}

impl WeatherSource for ApiClient {
    /// Current weather first (its coordinates feed the air-quality call), then
    /// forecast and air quality concurrently. Any failure aborts the whole report.
    async fn fetch_report(&self, city: &str) -> Result<WeatherReport, AppError> {
        let current = weather::get_current_weather(self, city).await?;
        let coordinates = current.coordinates;

        let (forecast, air_quality) = futures::try_join!(
            weather::get_forecast(self, city),
            air_quality::get_air_quality_forecast(self, coordinates),
        )?;

        info!(
            "Report ready for {}: {} forecast entries, {} air quality readings",
            current.city,
            forecast.len(),
            air_quality.len()
        );

        Ok(WeatherReport {
            current,
            forecast,
            air_quality,
        })
    }
}
