use serde::{Deserialize, Serialize};

// 考试实体，附带课程名与班级展示名
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exam {
    pub id: i64,
    pub class_id: i64,
    pub title: String,
    pub exam_date: chrono::DateTime<chrono::Utc>,
    pub course_title: String,
    pub class_label: String,
}
