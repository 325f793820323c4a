use serde::{Deserialize, Serialize};

use crate::models::fees::entities::PaymentMode;

// 首页统计
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_students: u64,
    pub total_teachers: u64,
    pub total_courses: u64,
    // 收费标准数量
    pub total_fees: u64,
}

// 按专业/年级/班级分组的学生人数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramOverviewRow {
    pub program: String,
    pub year: i32,
    pub section: Option<String>,
    pub total_students: i64,
}

// 缴费状态汇总，三项之和等于学生缴费记录总数
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSummary {
    pub paid_students: u64,
    pub partial_paid_students: u64,
    pub unpaid_students: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentPayment {
    pub student_name: String,
    pub paid_amount: f64,
    pub payment_mode: PaymentMode,
    pub payment_date: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpcomingExam {
    pub exam_id: i64,
    pub course: String,
    // "<year> - <section>"
    pub class: String,
    pub exam: String,
    pub exam_date: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodayClass {
    pub start_time: String,
    pub end_time: String,
    pub course_title: String,
    pub room: Option<String>,
}
