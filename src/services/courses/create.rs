use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::models::{ApiResponse, ErrorCode, courses::requests::CreateCourseRequest};
use crate::services::{current_tenant, internal_error, validation_error};
use crate::utils::validate::{validate_code, validate_required};

pub(super) fn validate_semester(semester: Option<i32>) -> Result<(), String> {
    match semester {
        Some(s) if !(1..=12).contains(&s) => Err("semester must be between 1 and 12".to_string()),
        _ => Ok(()),
    }
}

pub async fn create_course(
    service: &CourseService,
    course_data: CreateCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let tenant = current_tenant(request)?;

    let checked = validate_code("course_code", &course_data.course_code)
        .and_then(|_| validate_required("title", &course_data.title))
        .and_then(|_| validate_semester(course_data.semester));
    if let Err(msg) = checked {
        return Ok(validation_error(msg));
    }

    let storage = service.get_storage(request)?;

    match storage.create_course(tenant.college_id, course_data).await {
        Ok(course) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(course, "Course created successfully"))),
        Err(e) if e.is_conflict() => Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::CourseAlreadyExists,
            "Course code already exists",
        ))),
        Err(e) => Ok(internal_error(
            ErrorCode::CourseCreationFailed,
            "Course creation failed",
            &e,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_semester() {
        assert!(validate_semester(None).is_ok());
        assert!(validate_semester(Some(8)).is_ok());
        assert!(validate_semester(Some(0)).is_err());
        assert!(validate_semester(Some(13)).is_err());
    }
}
