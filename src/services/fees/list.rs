use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{current_tenant, internal_error};

pub async fn list_fees(service: &FeeService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let tenant = current_tenant(request)?;
    let storage = service.get_storage(request)?;

    match storage.list_student_fees(tenant.college_id).await {
        Ok(records) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            records,
            "Fee records retrieved successfully",
        ))),
        Err(e) => Ok(internal_error(
            ErrorCode::InternalServerError,
            "Fee list fetch error",
            &e,
        )),
    }
}

pub async fn list_student_fees(
    service: &FeeService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let tenant = current_tenant(request)?;
    let storage = service.get_storage(request)?;

    match storage
        .list_fees_for_student(tenant.college_id, student_id)
        .await
    {
        Ok(records) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            records,
            "Fee records retrieved successfully",
        ))),
        Err(e) => Ok(internal_error(
            ErrorCode::InternalServerError,
            "Student fee fetch error",
            &e,
        )),
    }
}
