//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行查询，然后转换为 models 中的业务实体。
//! 时间列统一存储为 unix 秒。

pub mod prelude;

pub mod account_managers;
pub mod attendance;
pub mod classes;
pub mod colleges;
pub mod courses;
pub mod enrollments;
pub mod exams;
pub mod fee_structures;
pub mod payments;
pub mod results;
pub mod student_fees;
pub mod students;
pub mod teachers;
pub mod timetable;
pub mod users;

use chrono::{DateTime, Utc};

/// unix 秒转换为 UTC 时间
pub(crate) fn ts_to_datetime(ts: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()
}

pub(crate) fn opt_ts_to_datetime(ts: Option<i64>) -> Option<DateTime<Utc>> {
    ts.map(ts_to_datetime)
}
