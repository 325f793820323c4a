use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::UserRole;
use crate::services::ReportService;

static REPORT_SERVICE: Lazy<ReportService> = Lazy::new(ReportService::new_lazy);

pub async fn attendance(req: HttpRequest) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.attendance(&req).await
}

pub async fn fees(req: HttpRequest) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.fees(&req).await
}

pub async fn results(req: HttpRequest) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.results(&req).await
}

pub fn configure_report_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/admin/reports")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new(&UserRole::Admin))
                    .route("/attendance", web::get().to(attendance))
                    .route("/fees", web::get().to(fees))
                    .route("/results", web::get().to(results)),
            ),
    );
}
