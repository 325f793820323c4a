pub mod academics;
pub mod auth;
pub mod colleges;
pub mod common;
pub mod courses;
pub mod dashboard;
pub mod exams;
pub mod fees;
pub mod reports;
pub mod students;
pub mod teachers;
pub mod users;

pub use common::response::ApiResponse;
pub use common::tenant::TenantContext;

use serde::Serialize;

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// 业务错误码，随响应体中的 `code` 字段返回
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误 1xxx
    BadRequest = 1000,
    ValidationFailed = 1001,
    NotFound = 1004,
    RateLimitExceeded = 1029,
    InternalServerError = 1500,

    // 认证授权 2xxx
    Unauthorized = 2000,
    AuthFailed = 2001,
    Forbidden = 2003,

    // 学生 3xxx
    StudentNotFound = 3000,
    StudentAlreadyExists = 3001,
    StudentCreationFailed = 3002,
    StudentUpdateFailed = 3003,
    StudentDeleteFailed = 3004,

    // 教师 4xxx
    TeacherNotFound = 4000,
    TeacherAlreadyExists = 4001,
    TeacherCreationFailed = 4002,
    TeacherUpdateFailed = 4003,
    TeacherDeleteFailed = 4004,

    // 课程 5xxx
    CourseNotFound = 5000,
    CourseAlreadyExists = 5001,
    CourseCreationFailed = 5002,
    CourseUpdateFailed = 5003,
    CourseDeleteFailed = 5004,

    // 考试 6xxx
    ExamNotFound = 6000,
    ExamCreationFailed = 6002,
    ExamUpdateFailed = 6003,
    ExamDeleteFailed = 6004,
    ClassNotFound = 6100,

    // 缴费 7xxx
    FeeRecordNotFound = 7000,
    FeeStructureNotFound = 7001,
    PaymentFailed = 7002,
    FeeUpdateFailed = 7003,
    FeeAssignFailed = 7004,

    // 统计查询 8xxx
    DashboardQueryFailed = 8000,
    ReportQueryFailed = 8001,
}
