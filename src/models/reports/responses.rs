use serde::{Deserialize, Serialize};

// 考勤报表：每个学生在每个班级的出勤统计
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceReportRow {
    pub student_id: i64,
    pub student_name: String,
    pub class_id: i64,
    pub course_title: String,
    pub class_label: String,
    pub present: u32,
    pub absent: u32,
    pub late: u32,
    pub excused: u32,
    pub total: u32,
    // (present + late) / total
    pub attendance_rate: f64,
}

// 缴费报表：按专业与年级汇总
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeReportRow {
    pub program: String,
    pub year: i32,
    pub student_fees: u32,
    pub total_due: f64,
    pub total_paid: f64,
    pub outstanding: f64,
    pub paid: u32,
    pub partial: u32,
    pub unpaid: u32,
}

// 成绩报表：按考试汇总
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultReportRow {
    pub exam_id: i64,
    pub course_title: String,
    pub exam_title: String,
    pub exam_date: chrono::DateTime<chrono::Utc>,
    pub candidates: u32,
    pub average_percentage: f64,
    pub highest_percentage: f64,
    pub lowest_percentage: f64,
    pub pass_count: u32,
}

/// 及格线（百分比）
pub const PASS_PERCENTAGE: f64 = 40.0;
