use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateExamRequest {
    pub class_id: i64,
    pub title: String,
    pub exam_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateExamRequest {
    pub class_id: Option<i64>,
    pub title: Option<String>,
    pub exam_date: Option<DateTime<Utc>>,
}
