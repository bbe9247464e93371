use std::fmt::Write;

use crate::{
    controller::ViewModel,
    presentation::{self, AqiLevel, Condition},
    report::WeatherReport,
};

pub const TITLE: &str = "Weather App";
pub const PROMPT_HINT: &str = "Enter City Name";

/// Text shown once at startup
pub fn banner() -> String {
    format!("{TITLE}\n{PROMPT_HINT} (`exit` to quit)")
}

/// Renders the current state of the view-model as terminal text.
///
/// Loading and error lines come first; the report panels are shown whenever a
/// report has been committed.
pub fn render<S>(vm: &ViewModel<S>) -> String {
    let mut out = String::new();

    if vm.loading() {
        let _ = writeln!(out, "Loading weather for {}...", vm.query());
    }
    if let Some(error) = vm.error() {
        let _ = writeln!(out, "Error: {}", error);
    }
    if let Some(report) = vm.report() {
        out.push_str(&render_report(report));
    }

    out
}

pub fn render_report(report: &WeatherReport) -> String {
    let mut out = String::new();
    let current = &report.current;
    let condition = Condition::from_code(&current.condition);

    let place = match &current.country {
        Some(country) => format!("{}, {}", current.city, country),
        None => current.city.clone(),
    };
    let _ = writeln!(out, "{} {}", condition.icon(), place);
    let _ = writeln!(
        out,
        "   {}  (max {} / min {})",
        presentation::format_temperature(current.temperature),
        presentation::format_temperature(current.temp_max),
        presentation::format_temperature(current.temp_min),
    );
    let _ = writeln!(out, "   {}", presentation::capitalize(&current.description));
    if let Some(feels_like) = current.feels_like {
        let _ = writeln!(
            out,
            "   Feels like {}",
            presentation::format_temperature(feels_like)
        );
    }
    if let Some(humidity) = current.humidity {
        let _ = writeln!(out, "   Humidity {}%", humidity);
    }
    let _ = writeln!(out, "   Background: {}", condition.background());

    let days = presentation::sample_forecast(&report.forecast);
    if !days.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Forecast");
    }
    for (index, entry) in days.into_iter().enumerate() {
        let condition = Condition::from_code(&entry.condition);
        let aqi = report
            .air_quality
            .get(index)
            .map(|sample| AqiLevel::from_index(sample.aqi))
            .unwrap_or(AqiLevel::Unknown);

        let _ = writeln!(
            out,
            "  {}  {} {:>5}  (max {} / min {})  {:<20} AQI {} {}",
            entry.time.format("%a %d %b"),
            condition.icon(),
            presentation::format_temperature(entry.temperature),
            presentation::format_temperature(entry.temp_max),
            presentation::format_temperature(entry.temp_min),
            presentation::capitalize(&entry.description),
            aqi.marker(),
            aqi.label(),
        );
    }

    out
}
