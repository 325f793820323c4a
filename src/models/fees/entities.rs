use serde::{Deserialize, Serialize};

/// 缴费状态，由应缴与实缴金额推导
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FeeStatus {
    Paid,
    Partial,
    Unpaid,
}

impl FeeStatus {
    pub fn from_amounts(amount_due: f64, amount_paid: f64) -> Self {
        if amount_paid >= amount_due {
            FeeStatus::Paid
        } else if amount_paid > 0.0 {
            FeeStatus::Partial
        } else {
            FeeStatus::Unpaid
        }
    }
}

impl std::fmt::Display for FeeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeeStatus::Paid => write!(f, "paid"),
            FeeStatus::Partial => write!(f, "partial"),
            FeeStatus::Unpaid => write!(f, "unpaid"),
        }
    }
}

// 支付方式
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMode {
    Cash,
    Card,
    Upi,
    Cheque,
    Online,
}

impl std::fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMode::Cash => write!(f, "cash"),
            PaymentMode::Card => write!(f, "card"),
            PaymentMode::Upi => write!(f, "upi"),
            PaymentMode::Cheque => write!(f, "cheque"),
            PaymentMode::Online => write!(f, "online"),
        }
    }
}

impl std::str::FromStr for PaymentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cash" => Ok(PaymentMode::Cash),
            "card" => Ok(PaymentMode::Card),
            "upi" => Ok(PaymentMode::Upi),
            "cheque" => Ok(PaymentMode::Cheque),
            "online" => Ok(PaymentMode::Online),
            _ => Err(format!("Invalid payment mode: {s}")),
        }
    }
}

// 收费标准
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeStructure {
    pub id: i64,
    pub program: String,
    pub year: i32,
    pub semester: i32,
    pub total_amount: f64,
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
}

// 学生缴费记录（附带学生信息与推导出的状态）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentFeeRecord {
    pub id: i64,
    pub student_id: i64,
    pub student_name: String,
    pub program: String,
    pub year_of_study: i32,
    pub fee_structure_id: i64,
    pub amount_due: f64,
    pub amount_paid: f64,
    pub status: FeeStatus,
    pub last_payment_date: Option<chrono::DateTime<chrono::Utc>>,
    pub remarks: Option<String>,
}

// 缴费记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: i64,
    pub student_fee_id: i64,
    pub paid_by_staff_id: Option<i64>,
    pub payment_date: chrono::DateTime<chrono::Utc>,
    pub amount: f64,
    pub payment_mode: PaymentMode,
    pub receipt_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_status_from_amounts() {
        assert_eq!(FeeStatus::from_amounts(1000.0, 0.0), FeeStatus::Unpaid);
        assert_eq!(FeeStatus::from_amounts(1000.0, 250.0), FeeStatus::Partial);
        assert_eq!(FeeStatus::from_amounts(1000.0, 1000.0), FeeStatus::Paid);
        assert_eq!(FeeStatus::from_amounts(1000.0, 1200.0), FeeStatus::Paid);
    }

    #[test]
    fn test_zero_due_counts_as_paid() {
        assert_eq!(FeeStatus::from_amounts(0.0, 0.0), FeeStatus::Paid);
    }

    #[test]
    fn test_payment_mode_parse() {
        assert_eq!("UPI".parse::<PaymentMode>().unwrap(), PaymentMode::Upi);
        assert_eq!(PaymentMode::Cheque.to_string(), "cheque");
        assert!("barter".parse::<PaymentMode>().is_err());
    }
}
