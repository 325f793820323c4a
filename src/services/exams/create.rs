use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ExamService;
use crate::models::{ApiResponse, ErrorCode, exams::requests::CreateExamRequest};
use crate::services::{current_tenant, internal_error, validation_error};
use crate::utils::validate::validate_required;

pub async fn create_exam(
    service: &ExamService,
    exam_data: CreateExamRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let tenant = current_tenant(request)?;

    if let Err(msg) = validate_required("title", &exam_data.title) {
        return Ok(validation_error(msg));
    }

    let storage = service.get_storage(request)?;

    match storage.create_exam(tenant.college_id, exam_data).await {
        Ok(exam) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(exam, "Exam created successfully")))
        }
        Err(e) if e.is_not_found() => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassNotFound,
            e.message(),
        ))),
        Err(e) => Ok(internal_error(
            ErrorCode::ExamCreationFailed,
            "Exam creation failed",
            &e,
        )),
    }
}
