use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::{ApiResponse, ErrorCode, teachers::requests::UpdateTeacherRequest};
use crate::services::{current_tenant, internal_error, validation_error};
use crate::utils::validate::{validate_email, validate_required};

fn validate(update_data: &UpdateTeacherRequest) -> Result<(), String> {
    if let Some(name) = &update_data.name {
        validate_required("name", name)?;
    }
    if let Some(email) = &update_data.email {
        validate_email(email)?;
    }
    if let Some(department) = &update_data.department {
        validate_required("department", department)?;
    }
    Ok(())
}

pub async fn update_teacher(
    service: &TeacherService,
    teacher_id: i64,
    mut update_data: UpdateTeacherRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let tenant = current_tenant(request)?;

    update_data.email = update_data.email.map(|e| e.trim().to_lowercase());
    if let Err(msg) = validate(&update_data) {
        return Ok(validation_error(msg));
    }

    let storage = service.get_storage(request)?;

    match storage
        .update_teacher(tenant.college_id, teacher_id, update_data)
        .await
    {
        Ok(Some(teacher)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(teacher, "Teacher updated successfully"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TeacherNotFound,
            "Teacher not found",
        ))),
        Err(e) if e.is_conflict() => Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::TeacherAlreadyExists,
            "Email already exists",
        ))),
        Err(e) => Ok(internal_error(
            ErrorCode::TeacherUpdateFailed,
            "Teacher update failed",
            &e,
        )),
    }
}
