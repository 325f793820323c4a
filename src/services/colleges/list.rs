use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CollegeService;
use crate::models::colleges::responses::CollegeSummary;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::internal_error;

pub async fn list_colleges(
    service: &CollegeService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_colleges().await {
        Ok(colleges) => {
            let items: Vec<CollegeSummary> = colleges.into_iter().map(Into::into).collect();
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                items,
                "Colleges retrieved successfully",
            )))
        }
        Err(e) => Ok(internal_error(
            ErrorCode::InternalServerError,
            "College list fetch error",
            &e,
        )),
    }
}
