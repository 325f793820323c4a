//! 请求参数解析失败时的统一 400 响应

use actix_web::error::{InternalError, JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{Error, HttpRequest, HttpResponse};
use tracing::debug;

use crate::models::{ApiResponse, ErrorCode};

fn bad_request(kind: &str, detail: String, req: &HttpRequest) -> Error {
    debug!("Invalid {} for {}: {}", kind, req.path(), detail);
    let message = format!("Invalid {kind}: {detail}");
    let response =
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, &message));
    InternalError::from_response(message, response).into()
}

/// JSON 请求体解析错误
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    bad_request("request body", err.to_string(), req)
}

/// 查询参数解析错误
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    bad_request("query parameters", err.to_string(), req)
}

/// 路径参数解析错误
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> Error {
    bad_request("path parameters", err.to_string(), req)
}
