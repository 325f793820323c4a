use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseRequest {
    pub course_code: String,
    pub title: String,
    pub description: Option<String>,
    pub department: Option<String>,
    pub semester: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCourseRequest {
    pub course_code: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub department: Option<String>,
    pub semester: Option<i32>,
}
