use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeService;
use crate::models::{ApiResponse, ErrorCode, fees::requests::UpdateStudentFeeRequest};
use crate::services::{current_tenant, internal_error, validation_error};
use crate::utils::validate::validate_non_negative_amount;

pub async fn update_student_fee(
    service: &FeeService,
    fee_id: i64,
    update_data: UpdateStudentFeeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let tenant = current_tenant(request)?;

    if let Some(amount_due) = update_data.amount_due
        && let Err(msg) = validate_non_negative_amount("amount_due", amount_due)
    {
        return Ok(validation_error(msg));
    }

    let storage = service.get_storage(request)?;

    match storage
        .update_student_fee(tenant.college_id, fee_id, update_data)
        .await
    {
        Ok(Some(record)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(record, "Fee record updated successfully"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FeeRecordNotFound,
            "Fee record not found",
        ))),
        Err(e) => Ok(internal_error(
            ErrorCode::FeeUpdateFailed,
            "Fee record update failed",
            &e,
        )),
    }
}
