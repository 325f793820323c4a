pub mod auth;

pub mod colleges;

pub mod dashboard;

pub mod students;

pub mod teachers;

pub mod courses;

pub mod exams;

pub mod fees;

pub mod reports;

pub use auth::configure_auth_routes;
pub use colleges::configure_college_routes;
pub use courses::configure_course_routes;
pub use dashboard::configure_dashboard_routes;
pub use exams::configure_exam_routes;
pub use fees::configure_fee_routes;
pub use reports::configure_report_routes;
pub use students::configure_student_routes;
pub use teachers::configure_teacher_routes;

use actix_web::{HttpResponse, web};

use crate::models::{ApiResponse, ErrorCode};

/// 注册全部 API 路由
pub fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_auth_routes)
        .configure(configure_college_routes)
        .configure(configure_dashboard_routes)
        .configure(configure_student_routes)
        .configure(configure_teacher_routes)
        .configure(configure_course_routes)
        .configure(configure_exam_routes)
        .configure(configure_fee_routes)
        .configure(configure_report_routes);
}

/// 未匹配的路由统一返回 404 JSON
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(
        ErrorCode::NotFound,
        "Resource not found",
    ))
}
