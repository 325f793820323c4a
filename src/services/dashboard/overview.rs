use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DashboardService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{current_tenant, internal_error};

pub async fn stats(service: &DashboardService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let tenant = current_tenant(request)?;
    let storage = service.get_storage(request)?;

    match storage.dashboard_stats(tenant.college_id).await {
        Ok(stats) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            stats,
            "Dashboard stats retrieved successfully",
        ))),
        Err(e) => Ok(internal_error(
            ErrorCode::DashboardQueryFailed,
            "Dashboard stats fetch error",
            &e,
        )),
    }
}

pub async fn program_overview(
    service: &DashboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let tenant = current_tenant(request)?;
    let storage = service.get_storage(request)?;

    match storage.program_overview(tenant.college_id).await {
        Ok(rows) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            rows,
            "Program overview retrieved successfully",
        ))),
        Err(e) => Ok(internal_error(
            ErrorCode::DashboardQueryFailed,
            "Program overview fetch error",
            &e,
        )),
    }
}

pub async fn fee_summary(
    service: &DashboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let tenant = current_tenant(request)?;
    let storage = service.get_storage(request)?;

    match storage.fee_summary(tenant.college_id).await {
        Ok(summary) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            summary,
            "Fee summary retrieved successfully",
        ))),
        Err(e) => Ok(internal_error(
            ErrorCode::DashboardQueryFailed,
            "Fee summary fetch error",
            &e,
        )),
    }
}
