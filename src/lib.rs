//! City weather lookup: current conditions, a four day forecast and air quality
//! labels from OpenWeatherMap, rendered as terminal text.

pub mod air_quality;
pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod presentation;
pub mod render;
pub mod report;
pub mod weather;

pub use api::ApiClient;
pub use config::Config;
pub use controller::{Phase, ViewModel};
pub use error::AppError;
pub use report::{WeatherReport, WeatherSource};
