use serde::Serialize;

use crate::models::TenantContext;
use crate::models::users::entities::User;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub expires_in: i64,
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: User,
    pub college: TenantContext,
}
