//! 仪表盘派生数据：7 日预报、小时曲线、统计面板

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::conditions;
use crate::types::{Forecast, Location, SpeedUnit, TempUnit};
use crate::units;

const FORECAST_DAYS: usize = 7;
const HOURLY_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayCard {
    pub date: String,
    pub min: Option<i64>,
    pub max: Option<i64>,
    // mm
    pub rain: f64,
    // cm
    pub snow: f64,
    pub code: Option<u8>,
    pub description: String,
    pub icon: Option<String>,
}

/// 取前 7 天
pub fn seven_day(forecast: &Forecast, unit: TempUnit) -> Vec<DayCard> {
    let Some(daily) = forecast.daily.as_ref() else {
        return Vec::new();
    };

    daily
        .time
        .iter()
        .take(FORECAST_DAYS)
        .enumerate()
        .map(|(i, date)| {
            let code = daily.weathercode.get(i).copied().flatten();
            DayCard {
                date: date.clone(),
                min: value_at(&daily.temperature_2m_min, i)
                    .map(|c| units::format_temperature(c, unit)),
                max: value_at(&daily.temperature_2m_max, i)
                    .map(|c| units::format_temperature(c, unit)),
                rain: value_at(&daily.rain_sum, i).unwrap_or(0.0),
                snow: value_at(&daily.snowfall_sum, i).unwrap_or(0.0),
                code,
                description: code
                    .and_then(conditions::description)
                    .unwrap_or_default()
                    .to_string(),
                icon: code.and_then(conditions::icon_url),
            }
        })
        .collect()
}

fn value_at(series: &[Option<f64>], i: usize) -> Option<f64> {
    series.get(i).copied().flatten()
}

/// 曲线时间范围
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ChartRange {
    #[default]
    ThreeHours,
    OneDay,
    OneWeek,
}

impl ChartRange {
    pub fn points(&self) -> usize {
        match self {
            ChartRange::ThreeHours => 3,
            ChartRange::OneDay => 24,
            ChartRange::OneWeek => 7 * 24,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub time: NaiveDateTime,
    // 已换算为所选单位
    pub temperature: f64,
    // mm
    pub precipitation: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyChart {
    pub points: Vec<ChartPoint>,
    pub y_min: f64,
    pub y_max: f64,
    /// 离 now 最近的点，用于画参考线
    pub now_marker: NaiveDateTime,
}

/// 从当前小时开始截取 `range.points()` 个小时点
///
/// 找不到与 `now` 同一小时的条目时从第一个开始；缺少时间或温度的点被丢弃。
/// 没有可用点时返回 None。
pub fn hourly_chart(
    forecast: &Forecast,
    range: ChartRange,
    unit: TempUnit,
    now: NaiveDateTime,
) -> Option<HourlyChart> {
    use chrono::Timelike;

    let hourly = forecast.hourly.as_ref()?;
    let times: Vec<Option<NaiveDateTime>> = hourly
        .time
        .iter()
        .map(|t| NaiveDateTime::parse_from_str(t, HOURLY_TIME_FORMAT).ok())
        .collect();

    let start = times
        .iter()
        .position(|t| t.is_some_and(|t| t.hour() == now.hour()))
        .unwrap_or(0);

    let points: Vec<ChartPoint> = (start..start + range.points())
        .filter_map(|i| {
            let time = times.get(i).copied().flatten()?;
            let celsius = value_at(&hourly.temperature_2m, i)?;
            Some(ChartPoint {
                time,
                temperature: units::temperature(celsius, unit),
                precipitation: value_at(&hourly.precipitation, i),
            })
        })
        .collect();

    let first = points.first()?;
    let (lo, hi) = points
        .iter()
        .fold((f64::MAX, f64::MIN), |(lo, hi), p| {
            (lo.min(p.temperature), hi.max(p.temperature))
        });

    // 距离相同时保留较早的点
    let mut nearest = first.time;
    for p in &points[1..] {
        if (p.time - now).abs() < (nearest - now).abs() {
            nearest = p.time;
        }
    }

    Some(HourlyChart {
        y_min: lo - 1.0,
        y_max: hi + 1.0,
        now_marker: nearest,
        points,
    })
}

/// 统计面板，缺失的数据为 None
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsPanel {
    pub city: Option<String>,
    pub temperature: Option<i64>,
    pub unit_symbol: &'static str,
    pub humidity: Option<String>,
    pub wind: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
}

pub fn stats(
    forecast: &Forecast,
    city: Option<&Location>,
    unit: TempUnit,
    speed_unit: SpeedUnit,
) -> StatsPanel {
    let current = forecast.current.as_ref();
    let today_code = forecast
        .daily
        .as_ref()
        .and_then(|d| d.weathercode.first().copied().flatten());

    StatsPanel {
        city: city.map(|c| c.name.clone()),
        temperature: current
            .and_then(|c| c.temperature_2m)
            .map(|t| units::format_temperature(t, unit)),
        unit_symbol: unit.symbol(),
        humidity: current
            .and_then(|c| c.relative_humidity_2m)
            .map(|h| format!("{}%", h.round() as i64)),
        // Open-Meteo 返回 km/h，先换成 m/s
        wind: current
            .and_then(|c| c.wind_speed_10m)
            .map(|kmh| units::format_wind(units::kmh_to_ms(kmh), speed_unit)),
        description: today_code
            .and_then(conditions::description)
            .map(str::to_string),
        icon: today_code.and_then(conditions::icon_url),
    }
}
