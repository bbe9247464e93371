use reqwest::{Response, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::{debug, error};

use crate::{config::Config, error::AppError};

/// Error body returned by OpenWeatherMap, e.g. `{"cod":"404","message":"city not found"}`
#[derive(Deserialize, Debug)]
struct ProviderErrorBody {
    message: Option<String>,
}

/// HTTP client bound to one provider endpoint root and API key.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: Config,
}

impl ApiClient {
    pub fn new(config: Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Issues `GET {base_url}{path}` with the given query plus `appid`, and decodes
    /// the JSON body.
    ///
    /// # Errors
    /// `AppError::Provider` on a non-success status, `Request`/`Json` when the
    /// exchange itself fails.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, AppError> {
        let url = format!("{}{}", self.config.base_url, path);
        let response = self
            .http
            .get(&url)
            .query(query)
            .query(&[("appid", self.config.api_key.as_str())])
            .send()
            .await?;

        if response.status().is_success() {
            let body = response.bytes().await?;
            Ok(serde_json::from_slice(&body)?)
        } else {
            Err(provider_error(path, response).await)
        }
    }
}

async fn provider_error(path: &str, response: Response) -> AppError {
    let status = response.status();
    error!("Request to {} failed: {}", path, status);

    let message = match response.json::<ProviderErrorBody>().await {
        Ok(body) => body.message.filter(|m| !m.trim().is_empty()),
        Err(e) => {
            debug!("Unreadable error body from {}: {}", path, e);
            None
        }
    };

    AppError::Provider {
        status: status.as_u16(),
        message: message.unwrap_or_else(|| fallback_message(status)),
    }
}

fn fallback_message(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("request failed with status {}", status.as_u16()))
}
