//! Open-Meteo 客户端
//!
//! 地理编码与天气预报都不需要 API key，基础地址可替换以便测试。

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::error::{Result, WeatherError};
use crate::types::{Forecast, Location};

pub const GEOCODING_BASE: &str = "https://geocoding-api.open-meteo.com";
pub const FORECAST_BASE: &str = "https://api.open-meteo.com";

const REQUEST_TIMEOUT_SECS: u64 = 10;
const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,wind_speed_10m,precipitation";
const HOURLY_FIELDS: &str = "temperature_2m,precipitation,rain,snowfall";
const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,precipitation_sum,rain_sum,snowfall_sum,wind_speed_10m_max,weathercode";

/// 最短搜索长度（字符数）
pub const MIN_QUERY_CHARS: usize = 2;

/// 仪表盘的数据来源，刷新任务通过它获取数据
#[async_trait]
pub trait WeatherSource: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<Location>>;
    async fn forecast(&self, lat: f64, lon: f64) -> Result<Forecast>;
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    name: String,
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    country: Option<String>,
}

impl GeocodingResult {
    fn into_location(self) -> Location {
        let name = match self.country.filter(|c| !c.is_empty()) {
            Some(country) => format!("{}, {}", self.name, country),
            None => self.name,
        };
        Location::new(name, self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    geocoding_base: String,
    forecast_base: String,
}

impl WeatherClient {
    pub fn new() -> Result<Self> {
        Self::with_base_urls(GEOCODING_BASE, FORECAST_BASE)
    }

    pub fn with_base_urls(geocoding_base: &str, forecast_base: &str) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            geocoding_base: geocoding_base.trim_end_matches('/').to_string(),
            forecast_base: forecast_base.trim_end_matches('/').to_string(),
        })
    }

    /// 按城市名搜索，最多 5 条；少于 2 个字符时不发请求
    pub async fn geocode(&self, query: &str) -> Result<Vec<Location>> {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_CHARS {
            return Ok(Vec::new());
        }

        let url = format!("{}/v1/search", self.geocoding_base);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("name", query),
                ("count", "5"),
                ("language", "en"),
                ("format", "json"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(WeatherError::Status(response.status().as_u16()));
        }

        let body: GeocodingResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Parse(e.to_string()))?;

        let locations: Vec<Location> = body
            .results
            .unwrap_or_default()
            .into_iter()
            .map(GeocodingResult::into_location)
            .collect();
        debug!("Geocoding '{}' returned {} results", query, locations.len());
        Ok(locations)
    }

    pub async fn fetch_forecast(&self, lat: f64, lon: f64) -> Result<Forecast> {
        let url = format!("{}/v1/forecast", self.forecast_base);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("latitude", lat.to_string().as_str()),
                ("longitude", lon.to_string().as_str()),
                ("current", CURRENT_FIELDS),
                ("hourly", HOURLY_FIELDS),
                ("daily", DAILY_FIELDS),
                ("timezone", "auto"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(WeatherError::Status(response.status().as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| WeatherError::Parse(e.to_string()))
    }
}

#[async_trait]
impl WeatherSource for WeatherClient {
    async fn search(&self, query: &str) -> Result<Vec<Location>> {
        self.geocode(query).await
    }

    async fn forecast(&self, lat: f64, lon: f64) -> Result<Forecast> {
        self.fetch_forecast(lat, lon).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_name_with_country() {
        let result = GeocodingResult {
            name: "Paris".into(),
            latitude: 48.85341,
            longitude: 2.3488,
            country: Some("France".into()),
        };
        let loc = result.into_location();
        assert_eq!(loc.name, "Paris, France");
        assert_eq!(loc.id, "48.85341,2.3488");
    }

    #[test]
    fn test_result_name_without_country() {
        let result = GeocodingResult {
            name: "Atlantis".into(),
            latitude: 0.5,
            longitude: -10.0,
            country: Some(String::new()),
        };
        assert_eq!(result.into_location().name, "Atlantis");
    }

    #[tokio::test]
    async fn test_short_query_skips_request() {
        // 无效地址，若真的发出请求会失败
        let client = WeatherClient::with_base_urls("http://127.0.0.1:9", "http://127.0.0.1:9").unwrap();
        assert!(client.geocode("a").await.unwrap().is_empty());
        assert!(client.geocode("  ").await.unwrap().is_empty());
    }
}
