use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::CollegeService;

static COLLEGE_SERVICE: Lazy<CollegeService> = Lazy::new(CollegeService::new_lazy);

pub async fn list_colleges(req: HttpRequest) -> ActixResult<HttpResponse> {
    COLLEGE_SERVICE.list_colleges(&req).await
}

// 公开接口，登录页选择学院使用
pub fn configure_college_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/colleges").route("", web::get().to(list_colleges)));
}
