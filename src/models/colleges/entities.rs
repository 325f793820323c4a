use serde::{Deserialize, Serialize};

// 学院实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct College {
    pub id: i64,
    pub name: Option<String>,
    pub college_code: String,
    pub address: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
