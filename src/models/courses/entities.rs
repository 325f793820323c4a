use serde::{Deserialize, Serialize};

// 课程实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub course_code: String,
    pub title: String,
    pub description: Option<String>,
    pub department: Option<String>,
    pub semester: Option<i32>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
