mod common;

use college_admin::storage::Storage;
use common::Fixture;

#[tokio::test]
async fn attendance_report_per_student_and_class() {
    let fx = Fixture::new().await;
    let rows = fx.storage.attendance_report(fx.college_a).await.unwrap();

    assert_eq!(rows.len(), 2);

    let asha = &rows[0];
    assert_eq!(asha.student_id, fx.students_a[0]);
    assert_eq!(asha.class_id, fx.class_a1);
    assert_eq!(asha.course_title, "Physics");
    assert_eq!((asha.present, asha.late, asha.absent), (1, 1, 1));
    assert_eq!(asha.total, 3);
    assert!((asha.attendance_rate - 2.0 / 3.0).abs() < 1e-9);

    let bala = &rows[1];
    assert_eq!(bala.student_name, "Bala");
    assert_eq!(bala.attendance_rate, 1.0);
}

#[tokio::test]
async fn attendance_report_isolated() {
    let fx = Fixture::new().await;
    let rows = fx.storage.attendance_report(fx.college_b).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].student_id, fx.student_b);
    assert_eq!(rows[0].attendance_rate, 0.0);
}

#[tokio::test]
async fn fee_report_groups_by_program_and_year() {
    let fx = Fixture::new().await;
    let rows = fx.storage.fee_report(fx.college_a).await.unwrap();

    assert_eq!(rows.len(), 2);

    let bsc = &rows[0];
    assert_eq!((bsc.program.as_str(), bsc.year), ("B.Sc", 1));
    assert_eq!(bsc.student_fees, 2);
    assert_eq!(bsc.total_due, 2000.0);
    assert_eq!(bsc.total_paid, 1250.0);
    assert_eq!(bsc.outstanding, 750.0);
    assert_eq!((bsc.paid, bsc.partial, bsc.unpaid), (1, 1, 0));

    let msc = &rows[1];
    assert_eq!(msc.program, "M.Sc");
    assert_eq!(msc.outstanding, 2000.0);
    assert_eq!(msc.unpaid, 1);
}

#[tokio::test]
async fn results_report_summarises_exams() {
    let fx = Fixture::new().await;
    let rows = fx.storage.results_report(fx.college_a).await.unwrap();

    // 只有已录入成绩的考试出现在报表中
    assert_eq!(rows.len(), 1);
    let quiz = &rows[0];
    assert_eq!(quiz.exam_id, fx.past_exam_a);
    assert_eq!(quiz.exam_title, "Physics Quiz");
    assert_eq!(quiz.candidates, 2);
    assert_eq!(quiz.highest_percentage, 80.0);
    assert_eq!(quiz.lowest_percentage, 30.0);
    assert_eq!(quiz.average_percentage, 55.0);
    assert_eq!(quiz.pass_count, 1);

    assert!(fx.storage.results_report(fx.college_b).await.unwrap().is_empty());
}
