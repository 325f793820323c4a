use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{current_tenant, internal_error};

pub async fn list_courses(
    service: &CourseService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let tenant = current_tenant(request)?;
    let storage = service.get_storage(request)?;

    match storage.list_courses(tenant.college_id).await {
        Ok(courses) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            courses,
            "Courses retrieved successfully",
        ))),
        Err(e) => Ok(internal_error(
            ErrorCode::InternalServerError,
            "Course list fetch error",
            &e,
        )),
    }
}
