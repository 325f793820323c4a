// 创建学院（启动初始化使用）
#[derive(Debug, Clone)]
pub struct CreateCollegeRequest {
    pub name: String,
    pub college_code: String,
    pub address: Option<String>,
}
