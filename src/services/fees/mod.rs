//! 缴费管理
//!
//! 管理员与财务人员可用。学生缴费状态由金额推导，不接受客户端传入。

pub mod list;
pub mod payment;
pub mod structures;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::fees::requests::{
    AssignFeeRequest, CreateFeeStructureRequest, RecordPaymentRequest, UpdateStudentFeeRequest,
};
use crate::storage::Storage;

pub struct FeeService {
    storage: Option<Arc<dyn Storage>>,
}

impl FeeService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => crate::services::storage_from_request(request),
        }
    }

    pub async fn list_fees(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_fees(self, request).await
    }

    pub async fn list_student_fees(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_student_fees(self, student_id, request).await
    }

    // 记录缴费
    pub async fn record_payment(
        &self,
        payment: RecordPaymentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        payment::record_payment(self, payment, request).await
    }

    pub async fn update_student_fee(
        &self,
        fee_id: i64,
        update_data: UpdateStudentFeeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_student_fee(self, fee_id, update_data, request).await
    }

    pub async fn list_structures(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        structures::list_structures(self, request).await
    }

    pub async fn create_structure(
        &self,
        structure: CreateFeeStructureRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        structures::create_structure(self, structure, request).await
    }

    // 为学生分配收费标准
    pub async fn assign_fee(
        &self,
        assignment: AssignFeeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        structures::assign_fee(self, assignment, request).await
    }
}
