use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::UserRole;
use crate::services::DashboardService;

// 懒加载的全局 DashboardService 实例
static DASHBOARD_SERVICE: Lazy<DashboardService> = Lazy::new(DashboardService::new_lazy);

pub async fn stats(req: HttpRequest) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE.stats(&req).await
}

pub async fn program_overview(req: HttpRequest) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE.program_overview(&req).await
}

pub async fn fee_summary(req: HttpRequest) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE.fee_summary(&req).await
}

pub async fn recent_payments(req: HttpRequest) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE.recent_payments(&req).await
}

pub async fn upcoming_exams(req: HttpRequest) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE.upcoming_exams(&req).await
}

pub async fn todays_classes(req: HttpRequest) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE.todays_classes(&req).await
}

// 配置路由
pub fn configure_dashboard_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/admin/dashboard")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new(&UserRole::Admin))
                    .route("/stats", web::get().to(stats))
                    .route("/program-overview", web::get().to(program_overview))
                    .route("/fee-summary", web::get().to(fee_summary))
                    .route("/recent-payments", web::get().to(recent_payments))
                    .route("/upcoming-exams", web::get().to(upcoming_exams))
                    .route("/todays-classes", web::get().to(todays_classes)),
            ),
    );
}
