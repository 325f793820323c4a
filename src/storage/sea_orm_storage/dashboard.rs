//! 首页统计查询
//!
//! 所有查询都以 `college_id` 限定范围。学生/教师通过 users.college_id 归属学院，
//! 课程与收费标准直接带 college_id，考试和课表经 classes → courses 归属。

use super::{SeaOrmStorage, db_error};
use crate::entity::classes::class_label;
use crate::entity::{
    classes, courses, exams, fee_structures, payments, student_fees, students, teachers, timetable,
    users,
};
use crate::entity::prelude::{Courses, Exams, FeeStructures, Payments, StudentFees, Students, Teachers, Timetable};
use crate::entity::ts_to_datetime;
use crate::errors::Result;
use crate::models::academics::entities::DayOfWeek;
use crate::models::dashboard::responses::{
    DashboardStats, FeeSummary, ProgramOverviewRow, RecentPayment, TodayClass, UpcomingExam,
};
use crate::models::fees::entities::{FeeStatus, PaymentMode};
use chrono::Weekday;
use sea_orm::{
    ColumnTrait, EntityTrait, FromQueryResult, JoinType, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};
use tracing::warn;

#[derive(Debug, FromQueryResult)]
struct ProgramOverviewQueryRow {
    program: String,
    year: i32,
    section: Option<String>,
    total_students: i64,
}

#[derive(Debug, FromQueryResult)]
struct RecentPaymentQueryRow {
    student_name: Option<String>,
    paid_amount: f64,
    payment_mode: String,
    payment_date: i64,
}

#[derive(Debug, FromQueryResult)]
struct UpcomingExamQueryRow {
    exam_id: i64,
    course: String,
    year: i32,
    section: Option<String>,
    exam: String,
    exam_date: i64,
}

#[derive(Debug, FromQueryResult)]
struct TodayClassQueryRow {
    start_time: String,
    end_time: String,
    course_title: String,
    room: Option<String>,
}

impl SeaOrmStorage {
    /// 学生、教师、课程、收费标准数量
    pub async fn dashboard_stats_impl(&self, college_id: i64) -> Result<DashboardStats> {
        let total_students = Students::find()
            .join(JoinType::InnerJoin, students::Relation::User.def())
            .filter(users::Column::CollegeId.eq(college_id))
            .count(&self.db)
            .await
            .map_err(db_error("统计学生数量失败"))?;

        let total_teachers = Teachers::find()
            .join(JoinType::InnerJoin, teachers::Relation::User.def())
            .filter(users::Column::CollegeId.eq(college_id))
            .count(&self.db)
            .await
            .map_err(db_error("统计教师数量失败"))?;

        let total_courses = Courses::find()
            .filter(courses::Column::CollegeId.eq(college_id))
            .count(&self.db)
            .await
            .map_err(db_error("统计课程数量失败"))?;

        let total_fees = FeeStructures::find()
            .filter(fee_structures::Column::CollegeId.eq(college_id))
            .count(&self.db)
            .await
            .map_err(db_error("统计收费标准数量失败"))?;

        Ok(DashboardStats {
            total_students,
            total_teachers,
            total_courses,
            total_fees,
        })
    }

    /// 按专业、年级、班级分组统计学生人数
    pub async fn program_overview_impl(&self, college_id: i64) -> Result<Vec<ProgramOverviewRow>> {
        let rows = Students::find()
            .select_only()
            .column(students::Column::Program)
            .column_as(students::Column::YearOfStudy, "year")
            .column(students::Column::Section)
            .column_as(students::Column::UserId.count(), "total_students")
            .join(JoinType::InnerJoin, students::Relation::User.def())
            .filter(users::Column::CollegeId.eq(college_id))
            .group_by(students::Column::Program)
            .group_by(students::Column::YearOfStudy)
            .group_by(students::Column::Section)
            .order_by_asc(students::Column::Program)
            .order_by_asc(students::Column::YearOfStudy)
            .order_by_asc(students::Column::Section)
            .into_model::<ProgramOverviewQueryRow>()
            .all(&self.db)
            .await
            .map_err(db_error("查询专业概况失败"))?;

        Ok(rows
            .into_iter()
            .map(|row| ProgramOverviewRow {
                program: row.program,
                year: row.year,
                section: row.section,
                total_students: row.total_students,
            })
            .collect())
    }

    /// 缴费状态汇总，每条学生缴费记录恰好计入一类
    pub async fn fee_summary_impl(&self, college_id: i64) -> Result<FeeSummary> {
        let fees = StudentFees::find()
            .join(JoinType::InnerJoin, student_fees::Relation::FeeStructure.def())
            .filter(fee_structures::Column::CollegeId.eq(college_id))
            .all(&self.db)
            .await
            .map_err(db_error("查询缴费汇总失败"))?;

        let summary = fees
            .iter()
            .fold(FeeSummary::default(), |mut acc, fee| {
                match FeeStatus::from_amounts(fee.amount_due, fee.amount_paid) {
                    FeeStatus::Paid => acc.paid_students += 1,
                    FeeStatus::Partial => acc.partial_paid_students += 1,
                    FeeStatus::Unpaid => acc.unpaid_students += 1,
                }
                acc
            });

        Ok(summary)
    }

    /// 最近的缴费记录
    pub async fn recent_payments_impl(
        &self,
        college_id: i64,
        limit: u64,
    ) -> Result<Vec<RecentPayment>> {
        let rows = Payments::find()
            .select_only()
            .column_as(users::Column::Name, "student_name")
            .column_as(payments::Column::Amount, "paid_amount")
            .column(payments::Column::PaymentMode)
            .column(payments::Column::PaymentDate)
            .join(JoinType::InnerJoin, payments::Relation::StudentFee.def())
            .join(JoinType::InnerJoin, student_fees::Relation::Student.def())
            .join(JoinType::InnerJoin, students::Relation::User.def())
            .filter(users::Column::CollegeId.eq(college_id))
            .order_by_desc(payments::Column::PaymentDate)
            .order_by_desc(payments::Column::Id)
            .limit(limit)
            .into_model::<RecentPaymentQueryRow>()
            .all(&self.db)
            .await
            .map_err(db_error("查询最近缴费失败"))?;

        // 无法识别的缴费方式不猜测，跳过该行
        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let payment_mode = match row.payment_mode.parse::<PaymentMode>() {
                    Ok(mode) => mode,
                    Err(e) => {
                        warn!("Skipping recent payment row: {}", e);
                        return None;
                    }
                };
                Some(RecentPayment {
                    student_name: row.student_name.unwrap_or_default(),
                    paid_amount: row.paid_amount,
                    payment_mode,
                    payment_date: ts_to_datetime(row.payment_date),
                })
            })
            .collect())
    }

    /// 尚未开始的考试
    pub async fn upcoming_exams_impl(&self, college_id: i64, now: i64) -> Result<Vec<UpcomingExam>> {
        let rows = Exams::find()
            .select_only()
            .column_as(exams::Column::Id, "exam_id")
            .column_as(courses::Column::Title, "course")
            .column(classes::Column::Year)
            .column(classes::Column::Section)
            .column_as(exams::Column::Title, "exam")
            .column(exams::Column::ExamDate)
            .join(JoinType::InnerJoin, exams::Relation::Class.def())
            .join(JoinType::InnerJoin, classes::Relation::Course.def())
            .filter(courses::Column::CollegeId.eq(college_id))
            .filter(exams::Column::ExamDate.gt(now))
            .order_by_asc(exams::Column::ExamDate)
            .order_by_asc(exams::Column::Id)
            .into_model::<UpcomingExamQueryRow>()
            .all(&self.db)
            .await
            .map_err(db_error("查询近期考试失败"))?;

        Ok(rows
            .into_iter()
            .map(|row| UpcomingExam {
                exam_id: row.exam_id,
                course: row.course,
                class: class_label(row.year, row.section.as_deref()),
                exam: row.exam,
                exam_date: ts_to_datetime(row.exam_date),
            })
            .collect())
    }

    /// 指定星期的课表
    pub async fn classes_for_day_impl(
        &self,
        college_id: i64,
        weekday: Weekday,
    ) -> Result<Vec<TodayClass>> {
        let Some(day) = DayOfWeek::from_weekday(weekday) else {
            return Ok(Vec::new());
        };

        let rows = Timetable::find()
            .select_only()
            .column(timetable::Column::StartTime)
            .column(timetable::Column::EndTime)
            .column_as(courses::Column::Title, "course_title")
            .column(timetable::Column::Room)
            .join(JoinType::InnerJoin, timetable::Relation::Class.def())
            .join(JoinType::InnerJoin, classes::Relation::Course.def())
            .filter(courses::Column::CollegeId.eq(college_id))
            .filter(timetable::Column::DayOfWeek.eq(day.as_str()))
            .order_by_asc(timetable::Column::StartTime)
            .into_model::<TodayClassQueryRow>()
            .all(&self.db)
            .await
            .map_err(db_error("查询当日课表失败"))?;

        Ok(rows
            .into_iter()
            .map(|row| TodayClass {
                start_time: row.start_time,
                end_time: row.end_time,
                course_title: row.course_title,
                room: row.room,
            })
            .collect())
    }
}
