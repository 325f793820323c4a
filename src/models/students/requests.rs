use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::users::entities::Gender;

// 创建学生请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudentRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub enrollment_number: String,
    pub program: String,
    pub year_of_study: i32,
    pub section: Option<String>,
    pub date_of_birth: Option<DateTime<Utc>>,
    pub gender: Option<Gender>,
    pub admission_date: Option<DateTime<Utc>>,
}

// 更新学生请求，未提供的字段保持不变
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub program: Option<String>,
    pub year_of_study: Option<i32>,
    pub section: Option<String>,
    pub date_of_birth: Option<DateTime<Utc>>,
    pub gender: Option<Gender>,
    pub admission_date: Option<DateTime<Utc>>,
}
