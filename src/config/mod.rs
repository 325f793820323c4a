//! 应用配置
//!
//! 加载顺序：内置默认值 → config.toml → config.{APP_ENV}.toml → COLLEGE_* 环境变量 → 显式覆盖。

mod r#impl;
mod structs;

pub use structs::*;
