/// 天气模块错误
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Store error: {0}")]
    Store(String),
}

impl From<serde_json::Error> for WeatherError {
    fn from(err: serde_json::Error) -> Self {
        WeatherError::Parse(err.to_string())
    }
}

impl From<std::io::Error> for WeatherError {
    fn from(err: std::io::Error) -> Self {
        WeatherError::Store(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, WeatherError>;
