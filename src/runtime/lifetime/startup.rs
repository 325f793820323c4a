use crate::config::AppConfig;
use crate::models::colleges::{entities::College, requests::CreateCollegeRequest};
use crate::models::users::entities::UserRole;
use crate::models::users::requests::CreateUserRequest;
use crate::storage::Storage;
use crate::utils::password::hash_password;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 生成随机密码
fn generate_random_password(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// 找到或创建初始学院
async fn ensure_bootstrap_college(storage: &Arc<dyn Storage>) -> Option<College> {
    let bootstrap = &AppConfig::get().bootstrap;

    match storage.get_college_by_code(&bootstrap.college_code).await {
        Ok(Some(college)) => return Some(college),
        Ok(None) => {}
        Err(e) => {
            warn!("Failed to look up bootstrap college: {}", e);
            return None;
        }
    }

    let request = CreateCollegeRequest {
        name: bootstrap.college_name.clone(),
        college_code: bootstrap.college_code.clone(),
        address: None,
    };

    match storage.create_college(request).await {
        Ok(college) => {
            info!(
                "Bootstrap college created (ID: {}, code: {})",
                college.id, college.college_code
            );
            Some(college)
        }
        Err(e) => {
            warn!("Failed to create bootstrap college: {}", e);
            None
        }
    }
}

/// 初始化默认学院与管理员账号
/// 如果数据库中没有任何用户，则创建初始学院及其管理员
pub async fn seed_bootstrap(storage: &Arc<dyn Storage>) {
    // 检查是否已有用户
    match storage.count_users().await {
        Ok(count) if count > 0 => {
            debug!(
                "Database already has {} user(s), skipping bootstrap seed",
                count
            );
            return;
        }
        Ok(_) => {
            info!("No users found in database, creating bootstrap college and admin...");
        }
        Err(e) => {
            warn!("Failed to count users: {}, skipping bootstrap seed", e);
            return;
        }
    }

    let Some(college) = ensure_bootstrap_college(storage).await else {
        return;
    };

    // 获取密码：优先从环境变量，否则生成随机密码
    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
        let pwd = generate_random_password(16);
        warn!("==========================================================");
        warn!("  ADMIN PASSWORD NOT SET - USING GENERATED PASSWORD");
        warn!("  Generated admin password: {}", pwd);
        warn!("  Please save this password or set ADMIN_PASSWORD env var");
        warn!("==========================================================");
        pwd
    });

    // 哈希密码
    let password_hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            warn!("Failed to hash admin password: {}, skipping admin seed", e);
            return;
        }
    };

    let admin_request = CreateUserRequest {
        name: "Administrator".to_string(),
        email: AppConfig::get().bootstrap.admin_email.trim().to_lowercase(),
        password: password_hash,
        role: UserRole::Admin,
        college_id: college.id,
    };

    match storage.create_user(admin_request).await {
        Ok(user) => {
            info!(
                "Default admin account created successfully (ID: {}, email: {}, college: {})",
                user.id, user.email, college.college_code
            );
        }
        Err(e) => {
            warn!("Failed to create admin account: {}", e);
        }
    }
}

/// 准备服务器启动的上下文
/// 包括存储初始化与首次启动的数据填充
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    // 初始化学院与管理员账号（如果需要）
    seed_bootstrap(&storage).await;

    StartupContext { storage }
}
