use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::entities::PaymentMode;

// 记录一笔缴费
#[derive(Debug, Clone, Deserialize)]
pub struct RecordPaymentRequest {
    pub student_fee_id: i64,
    pub amount: f64,
    pub payment_mode: PaymentMode,
    pub receipt_number: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStudentFeeRequest {
    pub amount_due: Option<f64>,
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateFeeStructureRequest {
    pub program: String,
    pub year: i32,
    pub semester: i32,
    pub total_amount: f64,
    pub due_date: Option<DateTime<Utc>>,
}

// 为学生分配收费标准
#[derive(Debug, Clone, Deserialize)]
pub struct AssignFeeRequest {
    pub student_id: i64,
    pub fee_structure_id: i64,
}
