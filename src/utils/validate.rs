use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

// 学号、工号、课程代码：字母数字及 - _ /
static CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9/_-]{1,50}$").expect("Invalid code regex"));

static WEAK_PASSWORDS: &[&str] = &[
    "password",
    "12345678",
    "123456789",
    "qwerty123",
    "admin123",
    "password1",
    "abcd1234",
    "welcome1",
];

pub fn validate_email(email: &str) -> Result<(), String> {
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid".to_string());
    }
    Ok(())
}

/// 非空字段校验
pub fn validate_required(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} must not be empty"));
    }
    Ok(())
}

pub fn validate_code(field: &str, value: &str) -> Result<(), String> {
    if !CODE_RE.is_match(value) {
        return Err(format!(
            "{field} must be 1-50 letters, digits, '-', '_' or '/'"
        ));
    }
    Ok(())
}

pub fn validate_year_of_study(year: i32) -> Result<(), String> {
    if !(1..=10).contains(&year) {
        return Err("year_of_study must be between 1 and 10".to_string());
    }
    Ok(())
}

/// 金额必须为正的有限数
pub fn validate_positive_amount(field: &str, amount: f64) -> Result<(), String> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(format!("{field} must be greater than 0"));
    }
    Ok(())
}

pub fn validate_non_negative_amount(field: &str, amount: f64) -> Result<(), String> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(format!("{field} must not be negative"));
    }
    Ok(())
}

/// 密码策略：至少 8 位，同时包含大写字母、小写字母和数字，且不在常见弱密码表中。
/// 所有不满足的规则用 "; " 连接后返回。
pub fn validate_password(password: &str) -> Result<(), String> {
    let mut errors = Vec::new();

    if password.len() < 8 {
        errors.push("Password must be at least 8 characters long");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one digit");
    }
    if WEAK_PASSWORDS
        .iter()
        .any(|weak| password.eq_ignore_ascii_case(weak))
    {
        errors.push("Password is too common, please choose a stronger password");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors.join("; "))
    }
}
