pub mod auth;
pub mod colleges;
pub mod courses;
pub mod dashboard;
pub mod exams;
pub mod fees;
pub mod reports;
pub mod students;
pub mod teachers;

pub use auth::AuthService;
pub use colleges::CollegeService;
pub use courses::CourseService;
pub use dashboard::DashboardService;
pub use exams::ExamService;
pub use fees::FeeService;
pub use reports::ReportService;
pub use students::StudentService;
pub use teachers::TeacherService;

use actix_web::error::InternalError;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use std::sync::Arc;
use tracing::error;

use crate::errors::CollegeError;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode, TenantContext};
use crate::storage::Storage;

/// 从 app_data 中取出存储实例
pub(crate) fn storage_from_request(request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
    match request.app_data::<web::Data<Arc<dyn Storage>>>() {
        Some(storage) => Ok(storage.get_ref().clone()),
        None => {
            error!("Storage not found in app data");
            let response = HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Storage unavailable",
            ));
            Err(InternalError::from_response("storage unavailable", response).into())
        }
    }
}

/// 当前请求所属学院，RequireJWT 未写入时按未认证处理
pub(crate) fn current_tenant(request: &HttpRequest) -> ActixResult<TenantContext> {
    RequireJWT::extract_tenant(request).ok_or_else(|| {
        let response = HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        ));
        InternalError::from_response("missing tenant", response).into()
    })
}

/// 存储层异常：记录日志，返回固定的 500 信息
pub(crate) fn internal_error(code: ErrorCode, message: &str, err: &CollegeError) -> HttpResponse {
    error!("{}: {}", message, err);
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(code, message))
}

/// 参数校验失败
pub(crate) fn validation_error(message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::ValidationFailed, message))
}
