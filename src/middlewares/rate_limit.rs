//! 登录限流
//!
//! 按客户端 IP 计数的固定窗口限流，窗口内超过次数返回 429。
//! 计数保存在 moka 缓存中，窗口起点随第一次请求写入，后续请求不会延长窗口。
//!
//! 客户端 IP 默认取 TCP 对端地址。`server.trust_proxy_headers` 开启时改用
//! Forwarded / X-Forwarded-For，这些头由客户端控制，只能在可信反向代理之后开启。

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    http::header::{HeaderName, HeaderValue, RETRY_AFTER},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use moka::future::Cache;
use once_cell::sync::Lazy;
use std::net::{IpAddr, SocketAddr};
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::warn;

use crate::config::AppConfig;
use crate::models::{ApiResponse, ErrorCode};

/// 最长窗口，缓存条目超过该时间自动淘汰
const MAX_WINDOW: Duration = Duration::from_secs(3600);

/// 键: "<scope>:<ip>"，值: (窗口起点, 计数)
static WINDOWS: Lazy<Cache<String, (Instant, u32)>> = Lazy::new(|| {
    Cache::builder()
        .time_to_live(MAX_WINDOW)
        .max_capacity(100_000)
        .build()
});

#[derive(Clone)]
pub struct RateLimit {
    scope: &'static str,
    max_requests: u32,
    window: Duration,
}

impl RateLimit {
    pub fn new(scope: &'static str, max_requests: u32, window: Duration) -> Self {
        Self {
            scope,
            max_requests,
            window: window.min(MAX_WINDOW),
        }
    }

    /// 登录：每个 IP 每分钟 5 次
    pub fn login() -> Self {
        Self::new("login", 5, Duration::from_secs(60))
    }
}

/// 客户端地址，取不到合法 IP 时所有请求共用 "unknown"
fn client_ip(req: &ServiceRequest, trust_proxy_headers: bool) -> String {
    let ip = if trust_proxy_headers {
        req.connection_info()
            .realip_remote_addr()
            .map(str::trim)
            .and_then(|addr| {
                addr.parse::<IpAddr>()
                    .ok()
                    .or_else(|| addr.parse::<SocketAddr>().ok().map(|s| s.ip()))
            })
    } else {
        req.peer_addr().map(|addr| addr.ip())
    };

    ip.map(|ip| ip.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// 在窗口内累加一次，返回 (本窗口计数, 窗口剩余时间)
async fn hit(key: String, window: Duration) -> (u32, Duration) {
    let now = Instant::now();
    let entry = WINDOWS
        .entry(key)
        .and_upsert_with(|existing| {
            let next = match existing.map(|e| e.into_value()) {
                Some((start, count)) if now.duration_since(start) < window => {
                    (start, count.saturating_add(1))
                }
                _ => (now, 1),
            };
            ready(next)
        })
        .await;

    let (start, count) = entry.into_value();
    let remaining = window.saturating_sub(now.duration_since(start));
    (count, remaining)
}

fn too_many_requests(retry_after: Duration) -> HttpResponse {
    HttpResponse::build(StatusCode::TOO_MANY_REQUESTS)
        .insert_header((RETRY_AFTER, retry_after.as_secs().max(1).to_string()))
        .json(ApiResponse::<()>::error_empty(
            ErrorCode::RateLimitExceeded,
            "Too many requests, please try again later",
        ))
}

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimitMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddleware {
            service: Rc::new(service),
            limit: self.clone(),
        }))
    }
}

pub struct RateLimitMiddleware<S> {
    service: Rc<S>,
    limit: RateLimit,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let limit = self.limit.clone();

        Box::pin(async move {
            let trust = AppConfig::get().server.trust_proxy_headers;
            let key = format!("{}:{}", limit.scope, client_ip(&req, trust));
            let (count, reset_in) = hit(key.clone(), limit.window).await;

            if count > limit.max_requests {
                warn!(
                    "Rate limit exceeded for {} ({}/{})",
                    key, count, limit.max_requests
                );
                return Ok(req.into_response(too_many_requests(reset_in).map_into_right_body()));
            }

            let mut res = srv.call(req).await?;
            let headers = res.headers_mut();
            headers.insert(
                HeaderName::from_static("x-ratelimit-limit"),
                HeaderValue::from(limit.max_requests),
            );
            headers.insert(
                HeaderName::from_static("x-ratelimit-remaining"),
                HeaderValue::from(limit.max_requests - count),
            );
            Ok(res.map_into_left_body())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_preset() {
        let login = RateLimit::login();
        assert_eq!(login.scope, "login");
        assert_eq!(login.max_requests, 5);
        assert_eq!(login.window, Duration::from_secs(60));
    }

    #[test]
    fn test_window_is_capped() {
        let limit = RateLimit::new("x", 1, Duration::from_secs(86_400));
        assert_eq!(limit.window, MAX_WINDOW);
    }

    #[test]
    fn test_forwarded_header_ignored_without_trusted_proxy() {
        let req = actix_web::test::TestRequest::default()
            .peer_addr("10.1.2.3:40000".parse().unwrap())
            .insert_header(("X-Forwarded-For", "203.0.113.9"))
            .to_srv_request();

        assert_eq!(client_ip(&req, false), "10.1.2.3");
        assert_eq!(client_ip(&req, true), "203.0.113.9");
    }

    #[test]
    fn test_missing_peer_is_unknown() {
        let req = actix_web::test::TestRequest::default().to_srv_request();
        assert_eq!(client_ip(&req, false), "unknown");
    }

    #[tokio::test]
    async fn test_hits_count_within_window() {
        let key = "test:10.0.0.1".to_string();
        let window = Duration::from_secs(60);
        assert_eq!(hit(key.clone(), window).await.0, 1);
        assert_eq!(hit(key.clone(), window).await.0, 2);
        let (count, remaining) = hit(key, window).await;
        assert_eq!(count, 3);
        assert!(remaining <= window);
    }

    #[tokio::test]
    async fn test_expired_window_restarts() {
        let key = "test:10.0.0.2".to_string();
        assert_eq!(hit(key.clone(), Duration::ZERO).await.0, 1);
        assert_eq!(hit(key, Duration::ZERO).await.0, 1);
    }
}
