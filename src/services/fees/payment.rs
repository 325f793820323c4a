use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::FeeService;
use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode, fees::requests::RecordPaymentRequest};
use crate::services::{current_tenant, internal_error, validation_error};
use crate::utils::validate::validate_positive_amount;

pub async fn record_payment(
    service: &FeeService,
    payment: RecordPaymentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let tenant = current_tenant(request)?;

    if let Err(msg) = validate_positive_amount("amount", payment.amount) {
        return Ok(validation_error(msg));
    }

    // 财务人员经手的缴费记录经手人，管理员代录时留空
    let staff_id = RequireJWT::extract_user_claims(request)
        .filter(|user| user.role == UserRole::AccountManager)
        .map(|user| user.id);

    let storage = service.get_storage(request)?;

    match storage
        .record_payment(tenant.college_id, staff_id, payment)
        .await
    {
        Ok(payment) => {
            info!(
                "Payment {} recorded for student fee {} ({})",
                payment.id, payment.student_fee_id, payment.amount
            );
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(payment, "Payment recorded successfully")))
        }
        Err(e) if e.is_not_found() => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FeeRecordNotFound,
            "Fee record not found",
        ))),
        Err(e) if e.is_conflict() => Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::PaymentFailed,
            "Receipt number already used",
        ))),
        Err(e) => Ok(internal_error(
            ErrorCode::PaymentFailed,
            "Payment recording failed",
            &e,
        )),
    }
}
