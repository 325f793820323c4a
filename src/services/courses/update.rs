use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use super::create::validate_semester;
use crate::models::{ApiResponse, ErrorCode, courses::requests::UpdateCourseRequest};
use crate::services::{current_tenant, internal_error, validation_error};
use crate::utils::validate::{validate_code, validate_required};

fn validate(update_data: &UpdateCourseRequest) -> Result<(), String> {
    if let Some(code) = &update_data.course_code {
        validate_code("course_code", code)?;
    }
    if let Some(title) = &update_data.title {
        validate_required("title", title)?;
    }
    validate_semester(update_data.semester)
}

pub async fn update_course(
    service: &CourseService,
    course_id: i64,
    update_data: UpdateCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let tenant = current_tenant(request)?;

    if let Err(msg) = validate(&update_data) {
        return Ok(validation_error(msg));
    }

    let storage = service.get_storage(request)?;

    match storage
        .update_course(tenant.college_id, course_id, update_data)
        .await
    {
        Ok(Some(course)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(course, "Course updated successfully"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            "Course not found",
        ))),
        Err(e) if e.is_conflict() => Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::CourseAlreadyExists,
            "Course code already exists",
        ))),
        Err(e) => Ok(internal_error(
            ErrorCode::CourseUpdateFailed,
            "Course update failed",
            &e,
        )),
    }
}
