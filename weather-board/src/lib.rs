//! Weather dashboard core
//!
//! Open-Meteo 地理编码与天气预报客户端，以及仪表盘需要的派生数据：
//! 单位换算、天气代码描述、7 日预报、小时曲线窗口和统计面板。
//! 偏好设置与收藏城市保存在本地 JSON 键值文件中。

pub mod client;
pub mod conditions;
pub mod error;
pub mod prefs;
pub mod refresh;
pub mod store;
pub mod types;
pub mod units;
pub mod view;

pub use client::{WeatherClient, WeatherSource};
pub use error::{Result, WeatherError};
pub use prefs::Preferences;
pub use refresh::{ForecastRefresher, ForecastState, SearchDebouncer};
pub use store::JsonStore;
pub use types::*;
