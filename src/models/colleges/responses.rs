use serde::Serialize;

use super::entities::College;

// 公开的学院列表项
#[derive(Debug, Serialize)]
pub struct CollegeSummary {
    pub name: Option<String>,
    pub college_code: String,
    pub address: Option<String>,
}

impl From<College> for CollegeSummary {
    fn from(college: College) -> Self {
        Self {
            name: college.name,
            college_code: college.college_code,
            address: college.address,
        }
    }
}
