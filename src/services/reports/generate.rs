use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReportService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{current_tenant, internal_error};

pub async fn attendance_report(
    service: &ReportService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let tenant = current_tenant(request)?;
    let storage = service.get_storage(request)?;

    match storage.attendance_report(tenant.college_id).await {
        Ok(rows) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            rows,
            "Attendance report generated successfully",
        ))),
        Err(e) => Ok(internal_error(
            ErrorCode::ReportQueryFailed,
            "Attendance report fetch error",
            &e,
        )),
    }
}

pub async fn fee_report(
    service: &ReportService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let tenant = current_tenant(request)?;
    let storage = service.get_storage(request)?;

    match storage.fee_report(tenant.college_id).await {
        Ok(rows) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            rows,
            "Fee report generated successfully",
        ))),
        Err(e) => Ok(internal_error(
            ErrorCode::ReportQueryFailed,
            "Fee report fetch error",
            &e,
        )),
    }
}

pub async fn results_report(
    service: &ReportService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let tenant = current_tenant(request)?;
    let storage = service.get_storage(request)?;

    match storage.results_report(tenant.college_id).await {
        Ok(rows) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            rows,
            "Results report generated successfully",
        ))),
        Err(e) => Ok(internal_error(
            ErrorCode::ReportQueryFailed,
            "Results report fetch error",
            &e,
        )),
    }
}
