//! View-model for the lookup screen.
//!
//! Holds the query text, loading flag, error text and the last committed
//! [`WeatherReport`], and drives them through Idle -> Loading -> Success | Failed.

use tracing::{Instrument, error, info, info_span};

use crate::{
    error::AppError,
    report::{WeatherReport, WeatherSource},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success,
    Failed,
}

#[derive(Debug)]
pub struct ViewModel<S> {
    source: S,
    query: String,
    phase: Phase,
    loading: bool,
    error: Option<String>,
    report: Option<WeatherReport>,
}

impl<S: WeatherSource> ViewModel<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            query: String::new(),
            phase: Phase::Idle,
            loading: false,
            error: None,
            report: None,
        }
    }

    /// Submits a city name and waits for the provider.
    ///
    /// Returns `false` without touching any state when the query is empty after
    /// trimming; `true` once a fetch was attempted, whatever its outcome.
    pub async fn submit(&mut self, query: &str) -> bool {
        let Some(city) = self.begin(query) else {
            return false;
        };

        let result = self
            .source
            .fetch_report(&city)
            .instrument(info_span!("submit", city = %city))
            .await;
        self.finish(result);
        true
    }
}

impl<S> ViewModel<S> {
    /// Validates the query and enters Loading. Returns the trimmed city to fetch.
    ///
    /// Calling this again before [`finish`](Self::finish) is allowed; there is no
    /// cancellation, so the last `finish` to run decides what is shown.
    pub fn begin(&mut self, query: &str) -> Option<String> {
        let city = query.trim();
        if city.is_empty() {
            return None;
        }

        self.query = city.to_string();
        self.phase = Phase::Loading;
        self.loading = true;
        self.error = None;
        Some(self.query.clone())
    }

    /// Commits the outcome of a fetch. On failure the previous report is kept.
    pub fn finish(&mut self, result: Result<WeatherReport, AppError>) {
        match result {
            Ok(report) => {
                info!("Showing weather for {}", report.current.city);
                self.report = Some(report);
                self.error = None;
                self.phase = Phase::Success;
            }
            Err(e) => {
                error!("Weather lookup failed: {}", e);
                self.error = Some(e.to_string());
                self.phase = Phase::Failed;
            }
        }
        self.loading = false;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn report(&self) -> Option<&WeatherReport> {
        self.report.as_ref()
    }
}
