use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode, auth::MeResponse};

pub async fn handle_me(request: &HttpRequest) -> ActixResult<HttpResponse> {
    let user = RequireJWT::extract_user_claims(request);
    let tenant = RequireJWT::extract_tenant(request);

    match (user, tenant) {
        (Some(user), Some(college)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            MeResponse { user, college },
            "User information retrieved successfully",
        ))),
        _ => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        ))),
    }
}
