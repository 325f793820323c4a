//! 路径参数提取器
//!
//! 在进入 service 之前校验 `{id}` 路径参数，非法值直接返回 400。

use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, HttpResponse};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

/// 正整数 ID（取自路径参数 `id`）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafeIDI64(pub i64);

fn parse_positive_id(raw: Option<&str>) -> Result<i64, String> {
    let raw = raw.ok_or_else(|| "Missing path parameter: id".to_string())?;
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(format!("Invalid id: '{raw}'")),
    }
}

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = parse_positive_id(req.match_info().get("id"))
            .map(SafeIDI64)
            .map_err(|msg| {
                let response = HttpResponse::BadRequest()
                    .json(ApiResponse::error_empty(ErrorCode::BadRequest, &msg));
                InternalError::from_response(msg, response).into()
            });
        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive_id() {
        assert_eq!(parse_positive_id(Some("42")), Ok(42));
        assert!(parse_positive_id(Some("0")).is_err());
        assert!(parse_positive_id(Some("-3")).is_err());
        assert!(parse_positive_id(Some("abc")).is_err());
        assert!(parse_positive_id(None).is_err());
    }
}
