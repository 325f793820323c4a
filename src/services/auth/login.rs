use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    auth::{LoginRequest, LoginResponse},
};
use crate::utils::password::verify_password;

use super::AuthService;

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let config = service.get_config();

    let email = login_request.email.trim().to_lowercase();

    // 1. 根据邮箱获取用户
    let user = match storage.get_user_by_email(&email).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::AuthFailed,
                "Email or password is incorrect",
            )));
        }
        Err(e) => {
            return Ok(crate::services::internal_error(
                ErrorCode::InternalServerError,
                "Login failed",
                &e,
            ));
        }
    };

    // 2. 验证密码
    if !verify_password(&login_request.password, &user.password_hash) {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            "Email or password is incorrect",
        )));
    }

    // 3. 签发访问令牌
    match user.generate_access_token() {
        Ok(access_token) => {
            tracing::info!("User {} logged in successfully", user.email);

            let response = LoginResponse {
                access_token,
                expires_in: config.jwt.access_token_expiry * 60, // 转换为秒
                user,
            };

            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Login successful")))
        }
        Err(e) => {
            tracing::error!("Failed to generate JWT token: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Login failed, unable to generate token",
                )),
            )
        }
    }
}
