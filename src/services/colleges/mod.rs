pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct CollegeService {
    storage: Option<Arc<dyn Storage>>,
}

impl CollegeService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    // 公开的学院列表
    pub async fn list_colleges(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_colleges(self, request).await
    }
}
