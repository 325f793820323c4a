use serde::{Deserialize, Serialize};

/// 当前请求所属学院
///
/// 由 RequireJWT 根据登录用户解析后放入请求扩展，
/// `/api/admin` 下的所有存储操作都以 `college_id` 过滤。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantContext {
    pub college_id: i64,
    pub college_code: String,
}
