use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ExamService;
use crate::models::{ApiResponse, ErrorCode, exams::requests::UpdateExamRequest};
use crate::services::{current_tenant, internal_error, validation_error};
use crate::utils::validate::validate_required;

pub async fn update_exam(
    service: &ExamService,
    exam_id: i64,
    update_data: UpdateExamRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let tenant = current_tenant(request)?;

    if let Some(title) = &update_data.title
        && let Err(msg) = validate_required("title", title)
    {
        return Ok(validation_error(msg));
    }

    let storage = service.get_storage(request)?;

    match storage
        .update_exam(tenant.college_id, exam_id, update_data)
        .await
    {
        Ok(Some(exam)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(exam, "Exam updated successfully")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ExamNotFound,
            "Exam not found",
        ))),
        // 目标班级不属于当前学院
        Err(e) if e.is_not_found() => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassNotFound,
            e.message(),
        ))),
        Err(e) => Ok(internal_error(
            ErrorCode::ExamUpdateFailed,
            "Exam update failed",
            &e,
        )),
    }
}
