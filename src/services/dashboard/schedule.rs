use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::Datelike;

use super::{DashboardService, RECENT_PAYMENTS_LIMIT};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{current_tenant, internal_error};

pub async fn recent_payments(
    service: &DashboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let tenant = current_tenant(request)?;
    let storage = service.get_storage(request)?;

    match storage
        .recent_payments(tenant.college_id, RECENT_PAYMENTS_LIMIT)
        .await
    {
        Ok(rows) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            rows,
            "Recent payments retrieved successfully",
        ))),
        Err(e) => Ok(internal_error(
            ErrorCode::DashboardQueryFailed,
            "Recent payments fetch error",
            &e,
        )),
    }
}

pub async fn upcoming_exams(
    service: &DashboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let tenant = current_tenant(request)?;
    let storage = service.get_storage(request)?;
    let now = chrono::Utc::now().timestamp();

    match storage.upcoming_exams(tenant.college_id, now).await {
        Ok(rows) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            rows,
            "Upcoming exams retrieved successfully",
        ))),
        Err(e) => Ok(internal_error(
            ErrorCode::DashboardQueryFailed,
            "Upcoming exams fetch error",
            &e,
        )),
    }
}

pub async fn todays_classes(
    service: &DashboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let tenant = current_tenant(request)?;
    let storage = service.get_storage(request)?;
    // 课表按学院本地时间排，用服务器本地日期
    let weekday = chrono::Local::now().weekday();

    match storage.classes_for_day(tenant.college_id, weekday).await {
        Ok(rows) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            rows,
            "Today's classes retrieved successfully",
        ))),
        Err(e) => Ok(internal_error(
            ErrorCode::DashboardQueryFailed,
            "Today's classes fetch error",
            &e,
        )),
    }
}
