use std::env;

use crate::error::AppError;

/// Environment variable holding the OpenWeatherMap API key
pub const API_KEY_VAR: &str = "WEATHER_API_KEY";

/// Root of the OpenWeatherMap 2.5 API
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Settings needed to talk to the weather provider.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Reads the API key from `WEATHER_API_KEY`.
    ///
    /// # Errors
    /// `AppError::EnvVarNotSet` if the variable is missing or blank.
    pub fn from_env() -> Result<Self, AppError> {
        let api_key = env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AppError::EnvVarNotSet(API_KEY_VAR.to_string()))?;
        Ok(Self::new(api_key.trim()))
    }

    /// Points the client at another endpoint root, trailing slashes removed.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}
