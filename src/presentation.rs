//! Display lookups: condition icons and backgrounds, AQI labels, forecast
//! sampling and temperature formatting. Every lookup has a default arm, so any
//! provider value yields something printable.

/// Stride between displayed forecast entries; 8 slots of 3 hours is one day.
pub const FORECAST_STRIDE: usize = 8;
/// Number of forecast days shown.
pub const FORECAST_DAYS: usize = 4;

/// Weather condition groups that have their own artwork
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Thunderstorm,
    Snow,
    Mist,
    Unknown,
}

impl Condition {
    /// Maps a provider condition group (e.g. "Clear", "Rain") to a display case.
    /// Matching ignores case and surrounding whitespace.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "clear" => Self::Clear,
            "clouds" => Self::Clouds,
            "rain" => Self::Rain,
            "drizzle" => Self::Drizzle,
            "thunderstorm" => Self::Thunderstorm,
            "snow" => Self::Snow,
            "mist" | "fog" | "haze" | "smoke" => Self::Mist,
            _ => Self::Unknown,
        }
    }

    /// Background image reference for the current-conditions panel
    pub fn background(&self) -> &'static str {
        match self {
            Self::Clear => "assets/backgrounds/clear.jpg",
            Self::Clouds => "assets/backgrounds/clouds.jpg",
            Self::Rain => "assets/backgrounds/rain.jpg",
            Self::Drizzle => "assets/backgrounds/drizzle.jpg",
            Self::Thunderstorm => "assets/backgrounds/thunderstorm.jpg",
            Self::Snow => "assets/backgrounds/snow.jpg",
            Self::Mist => "assets/backgrounds/mist.jpg",
            Self::Unknown => "assets/backgrounds/default.jpg",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Clear => "☀️",
            Self::Clouds => "☁️",
            Self::Rain => "🌧️",
            Self::Drizzle => "🌦️",
            Self::Thunderstorm => "⛈️",
            Self::Snow => "❄️",
            Self::Mist => "🌫️",
            Self::Unknown => "🌡️",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::Clear => "sun",
            Self::Clouds => "cloud",
            Self::Rain => "cloud_rain",
            Self::Drizzle => "cloud_drizzle",
            Self::Thunderstorm => "cloud_lightning",
            Self::Snow => "snowflake",
            Self::Mist => "cloud_fog",
            Self::Unknown => "thermometer",
        }
    }
}

/// Air quality severity buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AqiLevel {
    Good,
    Fair,
    Moderate,
    Poor,
    VeryPoor,
    Unknown,
}

impl AqiLevel {
    pub fn from_index(aqi: i64) -> Self {
        match aqi {
            1 => Self::Good,
            2 => Self::Fair,
            3 => Self::Moderate,
            4 => Self::Poor,
            5 => Self::VeryPoor,
            _ => Self::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Moderate => "Moderate",
            Self::Poor => "Poor",
            Self::VeryPoor => "Very Poor",
            Self::Unknown => "Unknown",
        }
    }

    /// Severity color as a hex RGB string; `Unknown` is neutral gray.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Good => "#22c55e",
            Self::Fair => "#84cc16",
            Self::Moderate => "#eab308",
            Self::Poor => "#f97316",
            Self::VeryPoor => "#ef4444",
            Self::Unknown => "#9ca3af",
        }
    }

    /// Terminal stand-in for the severity color
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Good => "🟢",
            Self::Fair => "🟡",
            Self::Moderate => "🟠",
            Self::Poor => "🔴",
            Self::VeryPoor => "🟣",
            Self::Unknown => "⚪",
        }
    }
}

/// Picks one entry per day out of a 3-hour series: indices 0, 8, 16, 24.
pub fn sample_forecast<T>(entries: &[T]) -> Vec<&T> {
    entries
        .iter()
        .step_by(FORECAST_STRIDE)
        .take(FORECAST_DAYS)
        .collect()
}

/// Rounds to the nearest whole degree: 18.3 -> "18°C".
pub fn format_temperature(celsius: f64) -> String {
    // round() keeps the sign of -0.4, the integer cast drops it
    format!("{}°C", celsius.round() as i64)
}

/// Upper-cases the first letter of a provider description ("light rain" -> "Light rain").
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
