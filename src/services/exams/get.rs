use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ExamService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{current_tenant, internal_error};

pub async fn get_exam(
    service: &ExamService,
    exam_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let tenant = current_tenant(request)?;
    let storage = service.get_storage(request)?;

    match storage.get_exam(tenant.college_id, exam_id).await {
        Ok(Some(exam)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            exam,
            "Exam retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ExamNotFound,
            "Exam not found",
        ))),
        Err(e) => Ok(internal_error(
            ErrorCode::InternalServerError,
            "Exam fetch error",
            &e,
        )),
    }
}
