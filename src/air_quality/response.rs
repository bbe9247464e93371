use chrono::{DateTime, Utc};

use super::AirQualitySample;

/// Response structure for the OpenWeatherMap air pollution forecast API
/// Contains hourly AQI readings for the requested coordinates
#[derive(serde::Deserialize, Debug)]
pub struct AirPollutionResponse {
    #[serde(default)]
    pub list: Vec<AirPollutionItem>,
}

#[derive(serde::Deserialize, Debug)]
pub struct AirPollutionItem {
    /// Reading time, unix seconds UTC
    #[serde(with = "chrono::serde::ts_seconds")]
    pub dt: DateTime<Utc>,
    pub main: AirPollutionMain,
}

#[derive(serde::Deserialize, Debug)]
pub struct AirPollutionMain {
    /// Air Quality Index, 1 (good) to 5 (very poor)
    pub aqi: i64,
}

impl From<AirPollutionItem> for AirQualitySample {
    fn from(raw: AirPollutionItem) -> Self {
        AirQualitySample {
            time: raw.dt,
            aqi: raw.main.aqi,
        }
    }
}
