pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::exams::requests::{CreateExamRequest, UpdateExamRequest};
use crate::storage::Storage;

pub struct ExamService {
    storage: Option<Arc<dyn Storage>>,
}

impl ExamService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => crate::services::storage_from_request(request),
        }
    }

    pub async fn list_exams(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_exams(self, request).await
    }

    pub async fn create_exam(
        &self,
        exam_data: CreateExamRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_exam(self, exam_data, request).await
    }

    pub async fn get_exam(
        &self,
        exam_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_exam(self, exam_id, request).await
    }

    pub async fn update_exam(
        &self,
        exam_id: i64,
        update_data: UpdateExamRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_exam(self, exam_id, update_data, request).await
    }

    pub async fn delete_exam(
        &self,
        exam_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_exam(self, exam_id, request).await
    }
}
