use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::users::entities::Gender;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeacherRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub employee_id: String,
    pub department: String,
    pub designation: Option<String>,
    pub qualification: Option<String>,
    pub joining_date: Option<DateTime<Utc>>,
    pub gender: Option<Gender>,
    pub date_of_birth: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTeacherRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub designation: Option<String>,
    pub qualification: Option<String>,
    pub joining_date: Option<DateTime<Utc>>,
    pub gender: Option<Gender>,
    pub date_of_birth: Option<DateTime<Utc>>,
}
