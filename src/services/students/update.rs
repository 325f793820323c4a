use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode, students::requests::UpdateStudentRequest};
use crate::services::{current_tenant, internal_error, validation_error};
use crate::utils::validate::{validate_email, validate_required, validate_year_of_study};

fn validate(update_data: &UpdateStudentRequest) -> Result<(), String> {
    if let Some(name) = &update_data.name {
        validate_required("name", name)?;
    }
    if let Some(email) = &update_data.email {
        validate_email(email)?;
    }
    if let Some(program) = &update_data.program {
        validate_required("program", program)?;
    }
    if let Some(year) = update_data.year_of_study {
        validate_year_of_study(year)?;
    }
    Ok(())
}

pub async fn update_student(
    service: &StudentService,
    student_id: i64,
    mut update_data: UpdateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let tenant = current_tenant(request)?;

    update_data.email = update_data.email.map(|e| e.trim().to_lowercase());
    if let Err(msg) = validate(&update_data) {
        return Ok(validation_error(msg));
    }

    let storage = service.get_storage(request)?;

    match storage
        .update_student(tenant.college_id, student_id, update_data)
        .await
    {
        Ok(Some(student)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(student, "Student updated successfully"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) if e.is_conflict() => Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::StudentAlreadyExists,
            "Email already exists",
        ))),
        Err(e) => Ok(internal_error(
            ErrorCode::StudentUpdateFailed,
            "Student update failed",
            &e,
        )),
    }
}
