use serde::{Deserialize, Serialize};

use crate::models::users::entities::Gender;

// 教师实体（合并 users 与 teachers 两张表）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub employee_id: String,
    pub department: String,
    pub designation: Option<String>,
    pub qualification: Option<String>,
    pub joining_date: Option<chrono::DateTime<chrono::Utc>>,
    pub gender: Option<Gender>,
    pub date_of_birth: Option<chrono::DateTime<chrono::Utc>>,
}
