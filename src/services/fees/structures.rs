use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeService;
use crate::models::fees::requests::{AssignFeeRequest, CreateFeeStructureRequest};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{current_tenant, internal_error, validation_error};
use crate::utils::validate::{
    validate_non_negative_amount, validate_required, validate_year_of_study,
};

fn validate(structure: &CreateFeeStructureRequest) -> Result<(), String> {
    validate_required("program", &structure.program)?;
    validate_year_of_study(structure.year)?;
    if !(1..=12).contains(&structure.semester) {
        return Err("semester must be between 1 and 12".to_string());
    }
    validate_non_negative_amount("total_amount", structure.total_amount)
}

pub async fn list_structures(
    service: &FeeService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let tenant = current_tenant(request)?;
    let storage = service.get_storage(request)?;

    match storage.list_fee_structures(tenant.college_id).await {
        Ok(structures) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            structures,
            "Fee structures retrieved successfully",
        ))),
        Err(e) => Ok(internal_error(
            ErrorCode::InternalServerError,
            "Fee structure list fetch error",
            &e,
        )),
    }
}

pub async fn create_structure(
    service: &FeeService,
    structure: CreateFeeStructureRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let tenant = current_tenant(request)?;

    if let Err(msg) = validate(&structure) {
        return Ok(validation_error(msg));
    }

    let storage = service.get_storage(request)?;

    match storage
        .create_fee_structure(tenant.college_id, structure)
        .await
    {
        Ok(created) => Ok(HttpResponse::Created().json(ApiResponse::success(
            created,
            "Fee structure created successfully",
        ))),
        Err(e) => Ok(internal_error(
            ErrorCode::InternalServerError,
            "Fee structure creation failed",
            &e,
        )),
    }
}

pub async fn assign_fee(
    service: &FeeService,
    assignment: AssignFeeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let tenant = current_tenant(request)?;
    let storage = service.get_storage(request)?;

    match storage.assign_fee(tenant.college_id, assignment).await {
        Ok(record) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(record, "Fee assigned successfully"))),
        // 学生或收费标准不属于当前学院
        Err(e) if e.is_not_found() => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            e.message(),
        ))),
        Err(e) => Ok(internal_error(
            ErrorCode::FeeAssignFailed,
            "Fee assignment failed",
            &e,
        )),
    }
}
