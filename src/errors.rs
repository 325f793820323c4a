//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_college_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum CollegeError {
            $($variant(String),)*
        }

        impl CollegeError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(CollegeError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(CollegeError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(CollegeError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl CollegeError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        CollegeError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_college_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Conflict("E004", "Resource Conflict"),
    FileOperation("E005", "File Operation Error"),
    Validation("E006", "Validation Error"),
    NotFound("E007", "Resource Not Found"),
    Serialization("E008", "Serialization Error"),
    DateParse("E009", "Date Parse Error"),
    Authentication("E010", "Authentication Error"),
    Authorization("E011", "Authorization Error"),
}

impl CollegeError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 是否为唯一约束冲突
    pub fn is_conflict(&self) -> bool {
        matches!(self, CollegeError::Conflict(_))
    }

    /// 是否为资源不存在
    pub fn is_not_found(&self) -> bool {
        matches!(self, CollegeError::NotFound(_))
    }
}

impl fmt::Display for CollegeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CollegeError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for CollegeError {
    fn from(err: sea_orm::DbErr) -> Self {
        // 唯一约束冲突单独归类，便于返回 409
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(msg)) => CollegeError::Conflict(msg),
            _ => CollegeError::DatabaseOperation(err.to_string()),
        }
    }
}

impl From<std::io::Error> for CollegeError {
    fn from(err: std::io::Error) -> Self {
        CollegeError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for CollegeError {
    fn from(err: serde_json::Error) -> Self {
        CollegeError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for CollegeError {
    fn from(err: chrono::ParseError) -> Self {
        CollegeError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CollegeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(CollegeError::database_config("test").code(), "E001");
        assert_eq!(CollegeError::conflict("test").code(), "E004");
        assert_eq!(CollegeError::validation("test").code(), "E006");
        assert_eq!(CollegeError::authentication("test").code(), "E010");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            CollegeError::not_found("test").error_type(),
            "Resource Not Found"
        );
        assert_eq!(
            CollegeError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = CollegeError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = CollegeError::validation("Invalid email");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid email"));
    }

    #[test]
    fn test_db_error_is_not_conflict() {
        let err: CollegeError = sea_orm::DbErr::Custom("boom".to_string()).into();
        assert!(!err.is_conflict());
        assert_eq!(err.code(), "E003");
    }
}
