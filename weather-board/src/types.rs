use serde::{Deserialize, Serialize};

/// 收藏的城市，id 为 "<lat>,<lon>"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            id: Self::id_for(lat, lon),
            name: name.into(),
            lat,
            lon,
        }
    }

    pub fn id_for(lat: f64, lon: f64) -> String {
        format!("{lat},{lon}")
    }

    /// 默认收藏：伦敦
    pub fn london() -> Self {
        Self::new("London, GB", 51.5072, -0.1276)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// 温度与降水单位
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TempUnit {
    #[default]
    Metric,
    Imperial,
}

impl TempUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            TempUnit::Metric => "C",
            TempUnit::Imperial => "F",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedUnit {
    #[default]
    Kmh,
    Mph,
    Ms,
}

/// Open-Meteo forecast 响应，只保留仪表盘用到的字段
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub current: Option<CurrentConditions>,
    #[serde(default)]
    pub hourly: Option<HourlySeries>,
    #[serde(default)]
    pub daily: Option<DailySeries>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    #[serde(default)]
    pub time: Option<String>,
    // °C
    #[serde(default)]
    pub temperature_2m: Option<f64>,
    #[serde(default)]
    pub relative_humidity_2m: Option<f64>,
    // km/h
    #[serde(default)]
    pub wind_speed_10m: Option<f64>,
    // mm
    #[serde(default)]
    pub precipitation: Option<f64>,
}

/// 时间为地点本地时间 "YYYY-MM-DDTHH:MM"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlySeries {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub temperature_2m: Vec<Option<f64>>,
    #[serde(default)]
    pub precipitation: Vec<Option<f64>>,
    #[serde(default)]
    pub rain: Vec<Option<f64>>,
    #[serde(default)]
    pub snowfall: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailySeries {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    pub temperature_2m_min: Vec<Option<f64>>,
    #[serde(default)]
    pub precipitation_sum: Vec<Option<f64>>,
    #[serde(default)]
    pub rain_sum: Vec<Option<f64>>,
    #[serde(default)]
    pub snowfall_sum: Vec<Option<f64>>,
    #[serde(default)]
    pub wind_speed_10m_max: Vec<Option<f64>>,
    #[serde(default, alias = "weather_code")]
    pub weathercode: Vec<Option<u8>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_id_matches_coordinates() {
        assert_eq!(Location::london().id, "51.5072,-0.1276");
        assert_eq!(Location::id_for(52.0, 13.5), "52,13.5");
    }

    #[test]
    fn test_forecast_tolerates_missing_blocks() {
        let forecast: Forecast = serde_json::from_str(r#"{"timezone":"Europe/London"}"#).unwrap();
        assert!(forecast.current.is_none());
        assert!(forecast.daily.is_none());
    }

    #[test]
    fn test_daily_accepts_null_entries() {
        let daily: DailySeries = serde_json::from_str(
            r#"{"time":["2025-01-01"],"temperature_2m_max":[null],"weather_code":[3]}"#,
        )
        .unwrap();
        assert_eq!(daily.temperature_2m_max, vec![None]);
        assert_eq!(daily.weathercode, vec![Some(3)]);
    }
}
