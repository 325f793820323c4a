//! 报表查询
//!
//! 数据库只负责按学院取出明细行，分组统计在内存中完成，
//! 避免各数据库在条件聚合语法上的差异。

use std::collections::BTreeMap;

use super::{SeaOrmStorage, db_error};
use crate::entity::classes::class_label;
use crate::entity::prelude::{Attendance, Results, StudentFees};
use crate::entity::{
    attendance, classes, courses, exams, fee_structures, results, student_fees, students,
    ts_to_datetime, users,
};
use crate::errors::Result;
use crate::models::academics::entities::AttendanceStatus;
use crate::models::fees::entities::FeeStatus;
use crate::models::reports::responses::{
    AttendanceReportRow, FeeReportRow, PASS_PERCENTAGE, ResultReportRow,
};
use sea_orm::{
    ColumnTrait, EntityTrait, FromQueryResult, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};
use tracing::warn;

#[derive(Debug, FromQueryResult)]
struct AttendanceQueryRow {
    student_id: i64,
    student_name: Option<String>,
    class_id: i64,
    course_title: String,
    year: i32,
    section: Option<String>,
    status: String,
}

#[derive(Debug, FromQueryResult)]
struct FeeQueryRow {
    program: String,
    year: i32,
    amount_due: f64,
    amount_paid: f64,
}

#[derive(Debug, FromQueryResult)]
struct ResultQueryRow {
    exam_id: i64,
    course_title: String,
    exam_title: String,
    exam_date: i64,
    marks_obtained: f64,
    max_marks: f64,
}

fn percentage(marks: f64, max_marks: f64) -> f64 {
    if max_marks > 0.0 {
        marks / max_marks * 100.0
    } else {
        0.0
    }
}

fn aggregate_attendance(rows: Vec<AttendanceQueryRow>) -> Vec<AttendanceReportRow> {
    let mut grouped: BTreeMap<(i64, i64), AttendanceReportRow> = BTreeMap::new();

    for row in rows {
        let status = match row.status.parse::<AttendanceStatus>() {
            Ok(status) => status,
            Err(e) => {
                warn!("Skipping attendance row: {}", e);
                continue;
            }
        };

        let entry = grouped
            .entry((row.student_id, row.class_id))
            .or_insert_with(|| AttendanceReportRow {
                student_id: row.student_id,
                student_name: row.student_name.clone().unwrap_or_default(),
                class_id: row.class_id,
                course_title: row.course_title.clone(),
                class_label: class_label(row.year, row.section.as_deref()),
                present: 0,
                absent: 0,
                late: 0,
                excused: 0,
                total: 0,
                attendance_rate: 0.0,
            });

        match status {
            AttendanceStatus::Present => entry.present += 1,
            AttendanceStatus::Absent => entry.absent += 1,
            AttendanceStatus::Late => entry.late += 1,
            AttendanceStatus::Excused => entry.excused += 1,
        }
        entry.total += 1;
    }

    grouped
        .into_values()
        .map(|mut row| {
            if row.total > 0 {
                row.attendance_rate = f64::from(row.present + row.late) / f64::from(row.total);
            }
            row
        })
        .collect()
}

fn aggregate_fees(rows: Vec<FeeQueryRow>) -> Vec<FeeReportRow> {
    let mut grouped: BTreeMap<(String, i32), FeeReportRow> = BTreeMap::new();

    for row in rows {
        let entry = grouped
            .entry((row.program.clone(), row.year))
            .or_insert_with(|| FeeReportRow {
                program: row.program.clone(),
                year: row.year,
                student_fees: 0,
                total_due: 0.0,
                total_paid: 0.0,
                outstanding: 0.0,
                paid: 0,
                partial: 0,
                unpaid: 0,
            });

        entry.student_fees += 1;
        entry.total_due += row.amount_due;
        entry.total_paid += row.amount_paid;
        // 多缴的部分不抵扣其他记录的欠款
        entry.outstanding += (row.amount_due - row.amount_paid).max(0.0);
        match FeeStatus::from_amounts(row.amount_due, row.amount_paid) {
            FeeStatus::Paid => entry.paid += 1,
            FeeStatus::Partial => entry.partial += 1,
            FeeStatus::Unpaid => entry.unpaid += 1,
        }
    }

    grouped.into_values().collect()
}

/// rows 需已按考试时间排序
fn aggregate_results(rows: Vec<ResultQueryRow>) -> Vec<ResultReportRow> {
    let mut order: Vec<i64> = Vec::new();
    let mut grouped: BTreeMap<i64, (ResultReportRow, f64)> = BTreeMap::new();

    for row in rows {
        let pct = percentage(row.marks_obtained, row.max_marks);
        let (entry, sum) = grouped.entry(row.exam_id).or_insert_with(|| {
            order.push(row.exam_id);
            (
                ResultReportRow {
                    exam_id: row.exam_id,
                    course_title: row.course_title.clone(),
                    exam_title: row.exam_title.clone(),
                    exam_date: ts_to_datetime(row.exam_date),
                    candidates: 0,
                    average_percentage: 0.0,
                    highest_percentage: f64::MIN,
                    lowest_percentage: f64::MAX,
                    pass_count: 0,
                },
                0.0,
            )
        });

        entry.candidates += 1;
        *sum += pct;
        entry.highest_percentage = entry.highest_percentage.max(pct);
        entry.lowest_percentage = entry.lowest_percentage.min(pct);
        if pct >= PASS_PERCENTAGE {
            entry.pass_count += 1;
        }
    }

    order
        .into_iter()
        .filter_map(|exam_id| grouped.remove(&exam_id))
        .map(|(mut row, sum)| {
            row.average_percentage = sum / f64::from(row.candidates);
            row
        })
        .collect()
}

impl SeaOrmStorage {
    /// 每个学生在每个班级的出勤统计
    pub async fn attendance_report_impl(&self, college_id: i64) -> Result<Vec<AttendanceReportRow>> {
        let rows = Attendance::find()
            .select_only()
            .column(attendance::Column::StudentId)
            .column_as(users::Column::Name, "student_name")
            .column(attendance::Column::ClassId)
            .column_as(courses::Column::Title, "course_title")
            .column(classes::Column::Year)
            .column(classes::Column::Section)
            .column(attendance::Column::Status)
            .join(JoinType::InnerJoin, attendance::Relation::Class.def())
            .join(JoinType::InnerJoin, classes::Relation::Course.def())
            .join(JoinType::InnerJoin, attendance::Relation::Student.def())
            .join(JoinType::InnerJoin, students::Relation::User.def())
            .filter(courses::Column::CollegeId.eq(college_id))
            .into_model::<AttendanceQueryRow>()
            .all(&self.db)
            .await
            .map_err(db_error("查询考勤报表失败"))?;

        Ok(aggregate_attendance(rows))
    }

    /// 按专业与年级汇总缴费情况
    pub async fn fee_report_impl(&self, college_id: i64) -> Result<Vec<FeeReportRow>> {
        let rows = StudentFees::find()
            .select_only()
            .column(fee_structures::Column::Program)
            .column(fee_structures::Column::Year)
            .column(student_fees::Column::AmountDue)
            .column(student_fees::Column::AmountPaid)
            .join(JoinType::InnerJoin, student_fees::Relation::FeeStructure.def())
            .filter(fee_structures::Column::CollegeId.eq(college_id))
            .into_model::<FeeQueryRow>()
            .all(&self.db)
            .await
            .map_err(db_error("查询缴费报表失败"))?;

        Ok(aggregate_fees(rows))
    }

    /// 按考试汇总成绩
    pub async fn results_report_impl(&self, college_id: i64) -> Result<Vec<ResultReportRow>> {
        let rows = Results::find()
            .select_only()
            .column(results::Column::ExamId)
            .column_as(courses::Column::Title, "course_title")
            .column_as(exams::Column::Title, "exam_title")
            .column(exams::Column::ExamDate)
            .column(results::Column::MarksObtained)
            .column(results::Column::MaxMarks)
            .join(JoinType::InnerJoin, results::Relation::Exam.def())
            .join(JoinType::InnerJoin, exams::Relation::Class.def())
            .join(JoinType::InnerJoin, classes::Relation::Course.def())
            .filter(courses::Column::CollegeId.eq(college_id))
            .order_by_asc(exams::Column::ExamDate)
            .order_by_asc(results::Column::ExamId)
            .into_model::<ResultQueryRow>()
            .all(&self.db)
            .await
            .map_err(db_error("查询成绩报表失败"))?;

        Ok(aggregate_results(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attendance_row(student_id: i64, class_id: i64, status: &str) -> AttendanceQueryRow {
        AttendanceQueryRow {
            student_id,
            student_name: Some(format!("Student {student_id}")),
            class_id,
            course_title: "Physics".to_string(),
            year: 2,
            section: Some("A".to_string()),
            status: status.to_string(),
        }
    }

    #[test]
    fn test_attendance_rate_counts_late_as_attended() {
        let rows = vec![
            attendance_row(1, 10, "present"),
            attendance_row(1, 10, "late"),
            attendance_row(1, 10, "absent"),
            attendance_row(1, 10, "excused"),
            attendance_row(2, 10, "absent"),
        ];

        let report = aggregate_attendance(rows);
        assert_eq!(report.len(), 2);
        assert_eq!(report[0].student_id, 1);
        assert_eq!(report[0].total, 4);
        assert_eq!(report[0].class_label, "2 - A");
        assert!((report[0].attendance_rate - 0.5).abs() < f64::EPSILON);
        assert_eq!(report[1].attendance_rate, 0.0);
    }

    #[test]
    fn test_unknown_attendance_status_is_skipped() {
        let report = aggregate_attendance(vec![attendance_row(1, 10, "sleeping")]);
        assert!(report.is_empty());
    }

    #[test]
    fn test_fee_report_groups_by_program_and_year() {
        let rows = vec![
            FeeQueryRow { program: "B.Sc".into(), year: 1, amount_due: 1000.0, amount_paid: 1000.0 },
            FeeQueryRow { program: "B.Sc".into(), year: 1, amount_due: 1000.0, amount_paid: 400.0 },
            FeeQueryRow { program: "B.Sc".into(), year: 1, amount_due: 500.0, amount_paid: 700.0 },
            FeeQueryRow { program: "M.Sc".into(), year: 2, amount_due: 800.0, amount_paid: 0.0 },
        ];

        let report = aggregate_fees(rows);
        assert_eq!(report.len(), 2);

        let bsc = &report[0];
        assert_eq!(bsc.student_fees, 3);
        assert_eq!(bsc.paid, 2);
        assert_eq!(bsc.partial, 1);
        assert_eq!(bsc.unpaid, 0);
        assert!((bsc.outstanding - 600.0).abs() < 1e-9);

        let msc = &report[1];
        assert_eq!(msc.unpaid, 1);
        assert!((msc.outstanding - 800.0).abs() < 1e-9);
    }

    #[test]
    fn test_results_report_keeps_exam_order() {
        let row = |exam_id: i64, date: i64, marks: f64| ResultQueryRow {
            exam_id,
            course_title: "Maths".into(),
            exam_title: format!("Exam {exam_id}"),
            exam_date: date,
            marks_obtained: marks,
            max_marks: 50.0,
        };
        let rows = vec![row(7, 100, 45.0), row(7, 100, 10.0), row(3, 200, 25.0)];

        let report = aggregate_results(rows);
        assert_eq!(report.len(), 2);
        assert_eq!(report[0].exam_id, 7);
        assert_eq!(report[0].candidates, 2);
        assert_eq!(report[0].pass_count, 1);
        assert!((report[0].average_percentage - 55.0).abs() < 1e-9);
        assert!((report[0].highest_percentage - 90.0).abs() < 1e-9);
        assert!((report[0].lowest_percentage - 20.0).abs() < 1e-9);
        assert_eq!(report[1].exam_id, 3);
        assert_eq!(report[1].pass_count, 1);
    }

    #[test]
    fn test_zero_max_marks_counts_as_zero_percent() {
        assert_eq!(percentage(10.0, 0.0), 0.0);
    }
}
