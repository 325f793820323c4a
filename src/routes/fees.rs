use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::fees::requests::{
    AssignFeeRequest, CreateFeeStructureRequest, RecordPaymentRequest, UpdateStudentFeeRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::FeeService;
use crate::utils::SafeIDI64;

static FEE_SERVICE: Lazy<FeeService> = Lazy::new(FeeService::new_lazy);

pub async fn list_fees(req: HttpRequest) -> ActixResult<HttpResponse> {
    FEE_SERVICE.list_fees(&req).await
}

pub async fn list_student_fees(
    req: HttpRequest,
    student_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    FEE_SERVICE.list_student_fees(student_id.0, &req).await
}

pub async fn record_payment(
    req: HttpRequest,
    payment: web::Json<RecordPaymentRequest>,
) -> ActixResult<HttpResponse> {
    FEE_SERVICE.record_payment(payment.into_inner(), &req).await
}

pub async fn update_student_fee(
    req: HttpRequest,
    fee_id: SafeIDI64,
    update_data: web::Json<UpdateStudentFeeRequest>,
) -> ActixResult<HttpResponse> {
    FEE_SERVICE
        .update_student_fee(fee_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn list_structures(req: HttpRequest) -> ActixResult<HttpResponse> {
    FEE_SERVICE.list_structures(&req).await
}

pub async fn create_structure(
    req: HttpRequest,
    structure: web::Json<CreateFeeStructureRequest>,
) -> ActixResult<HttpResponse> {
    FEE_SERVICE.create_structure(structure.into_inner(), &req).await
}

pub async fn assign_fee(
    req: HttpRequest,
    assignment: web::Json<AssignFeeRequest>,
) -> ActixResult<HttpResponse> {
    FEE_SERVICE.assign_fee(assignment.into_inner(), &req).await
}

// 配置路由；固定路径需在 /{id} 之前注册
pub fn configure_fee_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/admin/fees")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::finance_roles()))
                    .route("", web::get().to(list_fees))
                    .route("", web::post().to(record_payment))
                    .route("/structures", web::get().to(list_structures))
                    .route("/structures", web::post().to(create_structure))
                    .route("/assign", web::post().to(assign_fee))
                    .route("/student/{id}", web::get().to(list_student_fees))
                    .route("/{id}", web::put().to(update_student_fee)),
            ),
    );
}
