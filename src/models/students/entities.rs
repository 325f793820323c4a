use serde::{Deserialize, Serialize};

use crate::models::users::entities::Gender;

// 学生实体（合并 users 与 students 两张表）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub enrollment_number: String,
    pub program: String,
    pub year_of_study: i32,
    pub section: Option<String>,
    pub date_of_birth: Option<chrono::DateTime<chrono::Utc>>,
    pub gender: Option<Gender>,
    pub admission_date: Option<chrono::DateTime<chrono::Utc>>,
}
