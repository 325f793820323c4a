//! 首页统计
//!
//! 当前时间和星期在这里取，存储层只接收参数。

pub mod overview;
pub mod schedule;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

/// 最近缴费条数
pub const RECENT_PAYMENTS_LIMIT: u64 = 20;

pub struct DashboardService {
    storage: Option<Arc<dyn Storage>>,
}

impl DashboardService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn stats(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        overview::stats(self, request).await
    }

    pub async fn program_overview(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        overview::program_overview(self, request).await
    }

    pub async fn fee_summary(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        overview::fee_summary(self, request).await
    }

    pub async fn recent_payments(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        schedule::recent_payments(self, request).await
    }

    pub async fn upcoming_exams(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        schedule::upcoming_exams(self, request).await
    }

    pub async fn todays_classes(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        schedule::todays_classes(self, request).await
    }
}
