//! 单位换算与显示格式

use crate::types::{SpeedUnit, TempUnit};

pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

pub fn ms_to_kmh(ms: f64) -> f64 {
    ms * 3.6
}

pub fn kmh_to_ms(kmh: f64) -> f64 {
    kmh / 3.6
}

pub fn ms_to_mph(ms: f64) -> f64 {
    ms * 2.23694
}

pub fn mm_to_inches(mm: f64) -> f64 {
    mm / 25.4
}

/// 摄氏度换算到所选单位（不取整）
pub fn temperature(celsius: f64, unit: TempUnit) -> f64 {
    match unit {
        TempUnit::Metric => celsius,
        TempUnit::Imperial => celsius_to_fahrenheit(celsius),
    }
}

/// 显示用温度，四舍五入为整数
pub fn format_temperature(celsius: f64, unit: TempUnit) -> i64 {
    temperature(celsius, unit).round() as i64
}

/// 输入为 m/s
pub fn format_wind(ms: f64, unit: SpeedUnit) -> String {
    match unit {
        SpeedUnit::Kmh => format!("{} km/h", ms_to_kmh(ms).round() as i64),
        SpeedUnit::Mph => format!("{} mph", ms_to_mph(ms).round() as i64),
        SpeedUnit::Ms => format!("{} m/s", ms.round() as i64),
    }
}

/// 输入为 mm
pub fn format_precipitation(mm: f64, unit: TempUnit) -> String {
    match unit {
        TempUnit::Imperial => format!("{:.2} in", mm_to_inches(mm)),
        TempUnit::Metric => format!("{mm:.1} mm"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_round_trip() {
        for c in [-40.0, -3.3, 0.0, 21.7, 100.0] {
            let back = fahrenheit_to_celsius(celsius_to_fahrenheit(c));
            assert!((back - c).abs() < 1e-9);
        }
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
        assert_eq!(celsius_to_fahrenheit(-40.0), -40.0);
    }

    #[test]
    fn test_speed_scaling() {
        assert!((ms_to_kmh(10.0) - 36.0).abs() < 1e-9);
        assert!((ms_to_mph(10.0) - 22.3694).abs() < 1e-9);
        assert!((kmh_to_ms(36.0) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_format_temperature_rounds() {
        assert_eq!(format_temperature(21.6, TempUnit::Metric), 22);
        assert_eq!(format_temperature(20.0, TempUnit::Imperial), 68);
    }

    #[test]
    fn test_format_wind() {
        assert_eq!(format_wind(5.0, SpeedUnit::Kmh), "18 km/h");
        assert_eq!(format_wind(5.0, SpeedUnit::Mph), "11 mph");
        assert_eq!(format_wind(5.4, SpeedUnit::Ms), "5 m/s");
    }

    #[test]
    fn test_format_precipitation() {
        assert_eq!(format_precipitation(2.54, TempUnit::Imperial), "0.10 in");
        assert_eq!(format_precipitation(1.26, TempUnit::Metric), "1.3 mm");
    }
}
