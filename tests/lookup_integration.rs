//! Integration tests for the weather lookup flow using wiremock.
//!
//! Each test stands up a mock OpenWeatherMap and drives the `ViewModel` through
//! a real `ApiClient`.

use city_weather::{
    ApiClient, AppError, Config, Phase, ViewModel, WeatherSource, presentation, render,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "test-key";

fn current_weather_body(city: &str, temp: f64) -> serde_json::Value {
    serde_json::json!({
        "coord": { "lon": 2.35, "lat": 48.85 },
        "weather": [{ "id": 800, "main": "Clear", "description": "clear sky", "icon": "01d" }],
        "main": {
            "temp": temp, "feels_like": temp - 0.5, "temp_min": temp - 2.0,
            "temp_max": temp + 1.0, "pressure": 1015, "humidity": 55
        },
        "sys": { "country": "FR" },
        "name": city,
        "cod": 200
    })
}

fn forecast_body(entries: usize) -> serde_json::Value {
    let list: Vec<serde_json::Value> = (0..entries)
        .map(|i| {
            serde_json::json!({
                "dt": 1_792_324_800 + (i as i64) * 3 * 3600,
                "main": { "temp": 10.0 + i as f64, "temp_min": 9.0, "temp_max": 11.0 + i as f64 },
                "weather": [{ "main": "Rain", "description": "light rain" }]
            })
        })
        .collect();
    serde_json::json!({ "cod": "200", "cnt": entries, "list": list })
}

fn air_quality_body(aqi: i64) -> serde_json::Value {
    let list: Vec<serde_json::Value> = (0..96)
        .map(|i| {
            serde_json::json!({
                "dt": 1_792_324_800 + i * 3600,
                "main": { "aqi": aqi },
                "components": { "pm2_5": 10.0 }
            })
        })
        .collect();
    serde_json::json!({ "coord": { "lon": 2.35, "lat": 48.85 }, "list": list })
}

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(Config::new(API_KEY).with_base_url(server.uri()))
}

async fn mount_current(server: &MockServer, city: &str, temp: f64) {
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", city))
        .and(query_param("units", "metric"))
        .and(query_param("appid", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_weather_body(city, temp)))
        .mount(server)
        .await;
}

async fn mount_forecast(server: &MockServer, city: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("q", city))
        .and(query_param("units", "metric"))
        .and(query_param("appid", API_KEY))
        .respond_with(response)
        .mount(server)
        .await;
}

async fn mount_air_quality(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/air_pollution/forecast"))
        .and(query_param("lat", "48.85"))
        .and(query_param("lon", "2.35"))
        .and(query_param("appid", API_KEY))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fetch_report_success() {
    let server = MockServer::start().await;
    mount_current(&server, "Paris", 18.3).await;
    mount_forecast(&server, "Paris", ResponseTemplate::new(200).set_body_json(forecast_body(40))).await;
    mount_air_quality(&server, ResponseTemplate::new(200).set_body_json(air_quality_body(3))).await;

    let report = client_for(&server).fetch_report("Paris").await.unwrap();

    assert_eq!(report.current.city, "Paris");
    assert_eq!(report.current.condition, "Clear");
    assert_eq!(report.forecast.len(), 40);
    assert_eq!(report.air_quality.len(), 96);
    assert_eq!(presentation::format_temperature(report.current.temperature), "18°C");
    let aqi = presentation::AqiLevel::from_index(report.air_quality[0].aqi);
    assert_eq!(aqi.label(), "Moderate");
}

#[tokio::test]
async fn test_submit_success_renders_paris() {
    let server = MockServer::start().await;
    mount_current(&server, "Paris", 18.3).await;
    mount_forecast(&server, "Paris", ResponseTemplate::new(200).set_body_json(forecast_body(40))).await;
    mount_air_quality(&server, ResponseTemplate::new(200).set_body_json(air_quality_body(3))).await;

    let mut vm = ViewModel::new(client_for(&server));
    assert!(vm.submit("Paris").await);

    assert_eq!(vm.phase(), Phase::Success);
    assert!(!vm.loading());
    assert!(vm.error().is_none());

    let report = vm.report().unwrap();
    let days = presentation::sample_forecast(&report.forecast);
    let temps: Vec<f64> = days.iter().map(|entry| entry.temperature).collect();
    assert_eq!(temps, vec![10.0, 18.0, 26.0, 34.0]);

    let text = render::render(&vm);
    assert!(text.contains("Paris, FR"));
    assert!(text.contains("18°C"));
    assert!(text.contains("AQI 🟠 Moderate"));
}

#[tokio::test]
async fn test_city_not_found_sets_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "cod": "404",
            "message": "city not found"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(40)))
        .expect(0)
        .mount(&server)
        .await;

    let mut vm = ViewModel::new(client_for(&server));
    assert!(vm.submit("Atlantis").await);

    assert_eq!(vm.phase(), Phase::Failed);
    assert!(!vm.loading());
    assert_eq!(vm.error(), Some("city not found"));
    assert!(vm.report().is_none());
}

#[tokio::test]
async fn test_provider_error_is_classified() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "cod": "404",
            "message": "city not found"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_report("Atlantis").await.unwrap_err();
    match err {
        AppError::Provider { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "city not found");
        }
        other => panic!("expected provider error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_provider_error_without_message_uses_status_reason() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(401).set_body_string("nope"))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_report("Paris").await.unwrap_err();
    assert!(err.is_provider());
    assert_eq!(err.to_string(), "Unauthorized");
}

#[tokio::test]
async fn test_forecast_failure_discards_current_weather() {
    let server = MockServer::start().await;
    mount_current(&server, "Paris", 18.3).await;
    mount_forecast(
        &server,
        "Paris",
        ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "cod": 500,
            "message": "internal error"
        })),
    )
    .await;
    mount_air_quality(&server, ResponseTemplate::new(200).set_body_json(air_quality_body(2))).await;

    let mut vm = ViewModel::new(client_for(&server));
    assert!(vm.submit("Paris").await);

    assert_eq!(vm.phase(), Phase::Failed);
    assert!(!vm.loading());
    assert_eq!(vm.error(), Some("internal error"));
    assert!(vm.report().is_none());
}

#[tokio::test]
async fn test_air_quality_failure_discards_current_weather() {
    let server = MockServer::start().await;
    mount_current(&server, "Paris", 18.3).await;
    mount_forecast(&server, "Paris", ResponseTemplate::new(200).set_body_json(forecast_body(40))).await;
    mount_air_quality(&server, ResponseTemplate::new(200).set_body_string("not json")).await;

    let mut vm = ViewModel::new(client_for(&server));
    assert!(vm.submit("Paris").await);

    assert_eq!(vm.phase(), Phase::Failed);
    assert!(vm.error().unwrap().starts_with("JSON error"));
    assert!(vm.report().is_none());
}

#[tokio::test]
async fn test_failed_refetch_keeps_previous_report() {
    let server = MockServer::start().await;
    mount_current(&server, "Paris", 18.3).await;
    mount_forecast(&server, "Paris", ResponseTemplate::new(200).set_body_json(forecast_body(40))).await;
    mount_air_quality(&server, ResponseTemplate::new(200).set_body_json(air_quality_body(1))).await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Atlantis"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "cod": "404",
            "message": "city not found"
        })))
        .mount(&server)
        .await;

    let mut vm = ViewModel::new(client_for(&server));
    assert!(vm.submit("Paris").await);
    assert!(vm.submit("Atlantis").await);

    assert_eq!(vm.phase(), Phase::Failed);
    assert_eq!(vm.error(), Some("city not found"));
    assert_eq!(vm.report().unwrap().current.city, "Paris");
}

#[tokio::test]
async fn test_blank_query_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut vm = ViewModel::new(client_for(&server));
    assert!(!vm.submit("   ").await);

    assert_eq!(vm.phase(), Phase::Idle);
    assert!(!vm.loading());
    assert!(vm.error().is_none());
    assert!(vm.report().is_none());
}

#[tokio::test]
async fn test_unreachable_provider_is_unknown_error() {
    // Nothing listens on the discard port.
    let client = ApiClient::new(Config::new(API_KEY).with_base_url("http://127.0.0.1:9"));

    let err = client.fetch_report("Paris").await.unwrap_err();
    assert!(!err.is_provider());
    assert!(matches!(err, AppError::Request(_)));
}
