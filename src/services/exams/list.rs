use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ExamService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{current_tenant, internal_error};

pub async fn list_exams(
    service: &ExamService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let tenant = current_tenant(request)?;
    let storage = service.get_storage(request)?;

    match storage.list_exams(tenant.college_id).await {
        Ok(exams) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            exams,
            "Exams retrieved successfully",
        ))),
        Err(e) => Ok(internal_error(
            ErrorCode::InternalServerError,
            "Exam list fetch error",
            &e,
        )),
    }
}
