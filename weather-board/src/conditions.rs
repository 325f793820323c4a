//! WMO 天气代码的描述与图标

const ICON_BASE: &str = "https://raw.githubusercontent.com/erikflowers/weather-icons/master/svg";

/// 未收录的代码返回 None
pub fn description(code: u8) -> Option<&'static str> {
    let text = match code {
        0 => "Clear",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Drizzle",
        55 => "Heavy drizzle",
        61 => "Slight rain",
        63 => "Rain",
        65 => "Heavy rain",
        71 => "Light snow",
        73 => "Snow",
        75 => "Heavy snow",
        80 | 81 => "Rain showers",
        82 => "Violent rain showers",
        95 => "Thunderstorm",
        _ => return None,
    };
    Some(text)
}

fn icon_name(code: u8) -> Option<&'static str> {
    let name = match code {
        0 => "wi-day-sunny",
        1 => "wi-day-sunny-overcast",
        2 => "wi-day-cloudy",
        3 => "wi-cloudy",
        45 | 48 => "wi-fog",
        51 | 53 => "wi-sprinkle",
        55 | 61 | 63 => "wi-rain",
        65 => "wi-rain-wind",
        71 | 73 => "wi-snow",
        75 => "wi-snow-wind",
        80..=82 => "wi-showers",
        95 => "wi-thunderstorm",
        _ => return None,
    };
    Some(name)
}

/// 图标 SVG 地址
pub fn icon_url(code: u8) -> Option<String> {
    icon_name(code).map(|name| format!("{ICON_BASE}/{name}.svg"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(description(0), Some("Clear"));
        assert_eq!(description(81), Some("Rain showers"));
        assert_eq!(description(95), Some("Thunderstorm"));
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(description(99), None);
        assert_eq!(icon_url(99), None);
    }

    #[test]
    fn test_icon_url() {
        assert_eq!(
            icon_url(65).as_deref(),
            Some("https://raw.githubusercontent.com/erikflowers/weather-icons/master/svg/wi-rain-wind.svg")
        );
        assert!(icon_url(48).unwrap().ends_with("wi-fog.svg"));
    }
}
