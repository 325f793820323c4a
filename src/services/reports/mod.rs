pub mod generate;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct ReportService {
    storage: Option<Arc<dyn Storage>>,
}

impl ReportService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => crate::services::storage_from_request(request),
        }
    }

    // 考勤报表
    pub async fn attendance(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        generate::attendance_report(self, request).await
    }

    // 缴费报表
    pub async fn fees(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        generate::fee_report(self, request).await
    }

    // 成绩报表
    pub async fn results(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        generate::results_report(self, request).await
    }
}
