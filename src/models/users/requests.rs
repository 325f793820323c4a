use super::entities::UserRole;

// 创建用户（内部使用，password 为已哈希的值）
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub college_id: i64,
}
