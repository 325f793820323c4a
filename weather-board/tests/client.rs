//! Open-Meteo 客户端对 mock 服务器的集成测试

use serde_json::json;
use weather_board::view::{self, ChartRange};
use weather_board::{TempUnit, WeatherClient, WeatherError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn forecast_body() -> serde_json::Value {
    json!({
        "latitude": 51.5,
        "longitude": -0.12,
        "timezone": "Europe/London",
        "current": {
            "time": "2025-01-01T10:00",
            "temperature_2m": 7.3,
            "relative_humidity_2m": 81,
            "wind_speed_10m": 14.4,
            "precipitation": 0.0
        },
        "hourly": {
            "time": ["2025-01-01T09:00", "2025-01-01T10:00", "2025-01-01T11:00", "2025-01-01T12:00"],
            "temperature_2m": [6.0, 7.3, null, 8.1],
            "precipitation": [0.0, 0.1, 0.0, 0.4],
            "rain": [0.0, 0.1, 0.0, 0.4],
            "snowfall": [0.0, 0.0, 0.0, 0.0]
        },
        "daily": {
            "time": ["2025-01-01", "2025-01-02"],
            "temperature_2m_max": [9.0, 10.5],
            "temperature_2m_min": [3.0, 4.2],
            "precipitation_sum": [0.5, 2.0],
            "rain_sum": [0.5, 2.0],
            "snowfall_sum": [0.0, 0.0],
            "wind_speed_10m_max": [20.0, 25.0],
            "weathercode": [3, 61]
        }
    })
}

#[tokio::test]
async fn geocode_maps_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", "Paris"))
        .and(query_param("count", "5"))
        .and(query_param("language", "en"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                { "name": "Paris", "latitude": 48.85341, "longitude": 2.3488, "country": "France" },
                { "name": "Paris", "latitude": 33.66094, "longitude": -95.55551 }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = WeatherClient::with_base_urls(&server.uri(), &server.uri()).unwrap();
    let results = client.geocode("Paris").await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].id, "48.85341,2.3488");
    assert_eq!(results[0].name, "Paris, France");
    assert_eq!(results[1].name, "Paris");
}

#[tokio::test]
async fn geocode_without_results_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "generationtime_ms": 0.5 })))
        .mount(&server)
        .await;

    let client = WeatherClient::with_base_urls(&server.uri(), &server.uri()).unwrap();
    assert!(client.geocode("Nowhere").await.unwrap().is_empty());
}

#[tokio::test]
async fn short_query_sends_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let client = WeatherClient::with_base_urls(&server.uri(), &server.uri()).unwrap();
    assert!(client.geocode("P").await.unwrap().is_empty());
}

#[tokio::test]
async fn geocode_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = WeatherClient::with_base_urls(&server.uri(), &server.uri()).unwrap();
    let err = client.geocode("Paris").await.unwrap_err();
    assert!(matches!(err, WeatherError::Status(503)));
}

#[tokio::test]
async fn forecast_requests_expected_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "51.5072"))
        .and(query_param("longitude", "-0.1276"))
        .and(query_param(
            "current",
            "temperature_2m,relative_humidity_2m,wind_speed_10m,precipitation",
        ))
        .and(query_param("hourly", "temperature_2m,precipitation,rain,snowfall"))
        .and(query_param(
            "daily",
            "temperature_2m_max,temperature_2m_min,precipitation_sum,rain_sum,snowfall_sum,wind_speed_10m_max,weathercode",
        ))
        .and(query_param("timezone", "auto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = WeatherClient::with_base_urls(&server.uri(), &server.uri()).unwrap();
    let forecast = client.fetch_forecast(51.5072, -0.1276).await.unwrap();

    let current = forecast.current.as_ref().unwrap();
    assert_eq!(current.temperature_2m, Some(7.3));
    assert_eq!(forecast.daily.as_ref().unwrap().weathercode, vec![Some(3), Some(61)]);

    // 10:15 时从 10 点开始，11 点缺温度被丢弃
    let now = chrono::NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_hms_opt(10, 15, 0)
        .unwrap();
    let chart = view::hourly_chart(&forecast, ChartRange::ThreeHours, TempUnit::Metric, now).unwrap();
    let temps: Vec<_> = chart.points.iter().map(|p| p.temperature).collect();
    assert_eq!(temps, vec![7.3, 8.1]);

    let days = view::seven_day(&forecast, TempUnit::Metric);
    assert_eq!(days.len(), 2);
    assert_eq!(days[1].description, "Slight rain");
}

#[tokio::test]
async fn forecast_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "error": true })))
        .mount(&server)
        .await;

    let client = WeatherClient::with_base_urls(&server.uri(), &server.uri()).unwrap();
    let err = client.fetch_forecast(0.0, 0.0).await.unwrap_err();
    assert!(matches!(err, WeatherError::Status(400)));
}

#[tokio::test]
async fn forecast_malformed_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = WeatherClient::with_base_urls(&server.uri(), &server.uri()).unwrap();
    let err = client.fetch_forecast(0.0, 0.0).await.unwrap_err();
    assert!(matches!(err, WeatherError::Parse(_)));
}
